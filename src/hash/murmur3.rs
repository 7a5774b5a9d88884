//! MurmurHash3 (32-bit variant, x86 flavor). Ported from `sh_mh3_32` in
//! `examples/original_source/src/saux/shash.c`.
//!
//! Unlike the other hashes in this module, MurmurHash3 mixes the total byte
//! count into the finalization step, so it is only a "resumable accumulator"
//! up to the body loop — finalization must happen exactly once, over the
//! true total length. `mh3_32` takes the whole buffer in one call for this
//! reason (no separate `finalize` is exposed, since the struct carrying a
//! partial body state plus a running length would not match the spec's
//! simple `(acc, range) -> acc` contract used by every other hash in §4.B).

const C1: u32 = 0xcc9e_2d51;
const C2: u32 = 0x1b87_3593;

#[inline]
fn rotl32(x: u32, r: u32) -> u32 {
    x.rotate_left(r)
}

pub fn mh3_32(seed: u32, buf: &[u8]) -> u32 {
    let mut h = seed;
    let body_len = (buf.len() / 4) * 4;
    let mut i = 0;
    while i < body_len {
        let mut k = u32::from_le_bytes(buf[i..i + 4].try_into().unwrap());
        k = k.wrapping_mul(C1);
        k = rotl32(k, 15).wrapping_mul(C2);
        h = rotl32(h ^ k, 13).wrapping_mul(5).wrapping_add(0xe654_6b64);
        i += 4;
    }
    let tail = &buf[body_len..];
    let mut k: u32 = 0;
    match tail.len() {
        3 => {
            k ^= (tail[2] as u32) << 16;
            k ^= (tail[1] as u32) << 8;
            k ^= tail[0] as u32;
            k = k.wrapping_mul(C1);
            k = rotl32(k, 15).wrapping_mul(C2);
            h ^= k;
        }
        2 => {
            k ^= (tail[1] as u32) << 8;
            k ^= tail[0] as u32;
            k = k.wrapping_mul(C1);
            k = rotl32(k, 15).wrapping_mul(C2);
            h ^= k;
        }
        1 => {
            k ^= tail[0] as u32;
            k = k.wrapping_mul(C1);
            k = rotl32(k, 15).wrapping_mul(C2);
            h ^= k;
        }
        _ => {}
    }
    h ^= buf.len() as u32;
    h ^= h >> 16;
    h = h.wrapping_mul(0x85eb_ca6b);
    h ^= h >> 13;
    h = h.wrapping_mul(0xc2b2_ae35);
    h ^= h >> 16;
    h
}
