//! Custom LZ77 codec (spec §4.K).
//!
//! Frame layout: `[packed-u64 uncompressed length][opcode stream]`. Three
//! opcode families share the packed-u64 payload (not the raw wire bytes) as
//! their bit-field carrier, distinguished by its low bits:
//!
//! - `REFVX` (`..0`, 1 bit): short back-reference, length 4-7.
//! - `REFVV` (`..01`, 2 bits): long back-reference, length + a following
//!   packed-u64 distance.
//! - `LITV` (`..11`, 2 bits): literal run, length + inline bytes.
//!
//! Grounded in `senc_lz`/`senc_lzh`/`sdec_lz` and their `senc_lz_store_*`/
//! `s_reccpy`/`senc_lz_hash`/`senc_lz_match` helpers
//! (`examples/original_source/src/saux/senc.c`).

use crate::config::{
    LZ_MAX_HASH_BITS_HEAP, LZ_MAX_HASH_BITS_STACK, LZ_MAX_SHORT_MATCH_DISTANCE, LZ_MIN_HASH_BITS,
};
use crate::container::ErrorFlags;
use crate::varint;

const REFVX_TAG: u64 = 0x00;
const REFVV_TAG: u64 = 0x01;
const LITV_TAG: u64 = 0x03;
const REFVX_MASK: u64 = 0b1;
const LITV_MASK: u64 = 0b11;

const REFVX_LSHIFT: u32 = 1;
const REFVX_LBITS: u32 = 2;
const REFVX_LRANGE: u64 = 1 << REFVX_LBITS;
const REFVX_DSHIFT: u32 = REFVX_LBITS + REFVX_LSHIFT;
const REFVX_DBITS: u32 = 64 - REFVX_LBITS - 1;
const REFVX_DRANGE: u64 = 1u64 << REFVX_DBITS;

/// `slog2`: floor(log2(i)), 0 for `i == 0` (`scommon.c`'s `slog2_64`).
fn slog2(i: u64) -> u32 {
    if i == 0 {
        0
    } else {
        63 - i.leading_zeros()
    }
}

fn load_u32(s: &[u8], at: usize) -> u32 {
    let mut buf = [0u8; 4];
    buf.copy_from_slice(&s[at..at + 4]);
    u32::from_le_bytes(buf)
}

fn lz_hash(w: u32) -> u32 {
    (w >> 24).wrapping_add(w >> 20).wrapping_add(w >> 13).wrapping_add(w)
}

fn match_len(a: &[u8], b: &[u8], max_size: usize) -> usize {
    let mut off = 0;
    while off < max_size && a[off] == b[off] {
        off += 1;
    }
    off
}

fn store_lit(out: &mut Vec<u8>, lit: &[u8]) {
    let op = (((lit.len() - 1) as u64) << 2) | LITV_TAG;
    varint::store(out, op);
    out.extend_from_slice(lit);
}

fn store_ref(out: &mut Vec<u8>, dist: usize, len: usize) {
    let dm1 = (dist - 1) as u64;
    let lm4 = (len - 4) as u64;
    if dm1 < REFVX_DRANGE && lm4 < REFVX_LRANGE {
        let v = (dm1 << REFVX_DSHIFT) | (lm4 << REFVX_LSHIFT) | REFVX_TAG;
        varint::store(out, v);
    } else {
        let v = (lm4 << 2) | REFVV_TAG;
        varint::store(out, v);
        varint::store(out, dm1);
    }
}

/// Worst-case output size (`senc_lz(src, NULL)`'s contract): `n + n/8*10 + 32`.
pub fn encode_req_size(ss: usize) -> usize {
    ss + (ss / 8) * 10 + 32
}

fn encode_with_cap(s: &[u8], hash_max_bits: u32) -> Vec<u8> {
    let mut out = Vec::with_capacity(encode_req_size(s.len()));
    if s.is_empty() {
        return out;
    }
    varint::store(&mut out, s.len() as u64);
    let ss = s.len();
    if ss < 5 {
        store_lit(&mut out, s);
        return out;
    }

    let hash_size0 = slog2(ss as u64).max(10) - 2;
    let hash_size = hash_size0.clamp(LZ_MIN_HASH_BITS, hash_max_bits);
    let hash_elems = 1usize << hash_size;
    let hash_mask = (hash_elems - 1) as u32;
    let mut refs = vec![0usize; hash_elems];

    let sm4 = ss - 4;
    let w32 = load_u32(s, 0);
    refs[(lz_hash(w32) & hash_mask) as usize] = 0;

    let mut plit = 0usize;
    let mut i = 1usize;
    while i <= sm4 {
        let w32 = load_u32(s, i);
        let h = (lz_hash(w32) & hash_mask) as usize;
        let last = refs[h];
        refs[h] = i;
        if w32 != load_u32(s, last) {
            i += 1;
            continue;
        }
        let xl = ss - i - 4;
        let len = match_len(&s[i + 4..], &s[last + 4..], xl) + 4;
        let dist = i - last;
        if dist > LZ_MAX_SHORT_MATCH_DISTANCE && len == 4 {
            i += 1;
            continue;
        }
        if i > plit {
            store_lit(&mut out, &s[plit..i]);
        }
        store_ref(&mut out, dist, len);
        i += len;
        plit = i;
    }
    if ss > plit {
        store_lit(&mut out, &s[plit..ss]);
    }
    out
}

/// Stack-bounded hash table (`senc_lz`).
pub fn encode(s: &[u8]) -> Vec<u8> {
    encode_with_cap(s, LZ_MAX_HASH_BITS_STACK)
}

/// Heap-allowed hash table, up to a 64 MiB LUT (`senc_lzh`).
pub fn encode_heap(s: &[u8]) -> Vec<u8> {
    encode_with_cap(s, LZ_MAX_HASH_BITS_HEAP)
}

/// Generalized overlapping-copy back-reference (`s_reccpy`). The source
/// special-cases small `dist` values (1/2/3/4/6/8) with run-length memsets
/// purely for speed; a byte-at-a-time copy from `dist` positions behind the
/// growing output is bit-identical for every `dist`, overlapping or not.
fn rec_copy(out: &mut Vec<u8>, dist: usize, len: usize) {
    for _ in 0..len {
        let b = out[out.len() - dist];
        out.push(b);
    }
}

/// `sdec_lz(src, NULL)`'s contract: `expected_size + 16` for caller
/// pre-allocation. Returns 0 if the header can't even be parsed.
pub fn decode_req_size(s: &[u8]) -> usize {
    if s.len() < 3 {
        return 0;
    }
    let (expected, consumed) = varint::load(s);
    if consumed == 0 {
        return 0;
    }
    expected as usize + 16
}

/// Decodes an LZ77 frame. Tolerant of truncated/malformed opcode streams:
/// a reference or literal whose length would overrun the header's declared
/// size, or an out-of-range back-reference distance, stops decoding and
/// returns what has been produced so far (spec: "truncate the scan ... and
/// return what has been decoded so far rather than overflowing"). Each of
/// those truncation paths sets `errors.encoding_errors`, matching the
/// sticky-flag convention `SStr`/`SVec` use elsewhere (spec §7: "decoder
/// overflow ... set `encoding_errors` on the target and continue
/// best-effort").
///
/// Unlike the source, this does not pre-allocate `expected_size` bytes of
/// output up front: the header's declared size is attacker-controlled and
/// need not match the actual opcode stream, so blindly reserving it would
/// let a tiny malicious input request an arbitrarily large allocation.
pub fn decode(s: &[u8], errors: &mut ErrorFlags) -> Vec<u8> {
    if s.len() < 3 {
        return Vec::new();
    }
    let mut cursor = 0usize;
    let expected_ss = varint::load_advance(s, &mut cursor) as usize;
    if cursor == 0 || cursor >= s.len() {
        return Vec::new();
    }

    let mut out = Vec::new();
    while cursor < s.len() {
        let op = varint::load_advance(s, &mut cursor);
        if op & REFVX_MASK == REFVX_TAG {
            let len = (((op >> REFVX_LSHIFT) & (REFVX_LRANGE - 1)) + 4) as usize;
            let dist = ((op >> REFVX_DSHIFT) + 1) as usize;
            if out.len() + len > expected_ss || dist == 0 || dist > out.len() {
                errors.set_encoding_error();
                break;
            }
            rec_copy(&mut out, dist, len);
        } else if op & LITV_MASK == LITV_TAG {
            let len = ((op >> 2) + 1) as usize;
            if out.len() + len > expected_ss || cursor + len > s.len() {
                errors.set_encoding_error();
                break;
            }
            out.extend_from_slice(&s[cursor..cursor + len]);
            cursor += len;
        } else {
            let len = ((op >> 2) + 4) as usize;
            let (dm1, n) = varint::load(&s[cursor..]);
            if n == 0 {
                errors.set_encoding_error();
                break;
            }
            cursor += n;
            let dist = (dm1 + 1) as usize;
            if out.len() + len > expected_ss || dist == 0 || dist > out.len() {
                errors.set_encoding_error();
                break;
            }
            rec_copy(&mut out, dist, len);
        }
    }
    out
}
