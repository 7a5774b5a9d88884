//! Packed variable-length 64-bit integer (spec §4.A / §6.1).
//!
//! Self-delimited little-endian encoding, 1 to 9 bytes. The low bits of the
//! first byte identify how many header bits (and therefore how many bytes)
//! precede the payload: bit 0 set means a 1-byte container, bit 1 (with bit
//! 0 clear) a 2-byte container, and so on up to a reserved all-zero-low-bits
//! tag meaning "1 tag byte + 8 raw bytes of `u64`". Ported bit-for-bit from
//! `s_st_pk_u64`/`s_ld_pk_u64`/`s_pk_u64_size` in
//! `examples/original_source/src/saux/scommon.c`.

/// Identifier bit for each width class, OR'd into the low byte.
const ID: [u8; 8] = [
    0b0000_0001, // 1 byte
    0b0000_0010, // 2 bytes
    0b0000_0100, // 3 bytes
    0b0000_1000, // 4 bytes
    0b0001_0000, // 5 bytes
    0b0010_0000, // 6 bytes
    0b0100_0000, // 7 bytes
    0b1000_0000, // 9 bytes (raw u64 follows)
];

/// Number of header/tag bits consumed for each width class (payload is
/// shifted left by this many bits within its container).
const SHIFT: [u32; 7] = [1, 2, 3, 4, 5, 6, 7];

/// Largest payload value representable in each of the first 7 width classes,
/// i.e. `(1 << (8*bytes - shift)) - 1`.
fn max_payload(bytes: usize) -> u64 {
    let container_bits = 8 * bytes as u32;
    let shift = SHIFT[bytes - 1];
    (1u64 << (container_bits - shift)) - 1
}

/// Encodes `v` into `out`, appending 1 to 9 bytes, and returns the number of
/// bytes written. Equivalent to `s_st_pk_u64`.
pub fn store(out: &mut Vec<u8>, v: u64) -> usize {
    for bytes in 1..=7usize {
        if v <= max_payload(bytes) {
            let shift = SHIFT[bytes - 1];
            let encoded = (v << shift) | ID[bytes - 1] as u64;
            out.extend_from_slice(&encoded.to_le_bytes()[..bytes]);
            return bytes;
        }
    }
    // 9-byte form: one tag byte (all width bits clear) + raw little-endian u64.
    out.push(0);
    out.extend_from_slice(&v.to_le_bytes());
    9
}

/// Returns the total encoded length (including the tag byte(s)) implied by
/// the first byte of a packed value. Equivalent to `s_pk_u64_size`.
pub fn size_of_pk(first_byte: u8) -> usize {
    for (i, &id) in ID.iter().enumerate() {
        if first_byte & id != 0 {
            return if i == 7 { 9 } else { i + 1 };
        }
    }
    0
}

/// Reads a packed value from the front of `buf`, returning `(value,
/// bytes_consumed)`. Returns `(0, 0)` if `buf` is empty or shorter than the
/// length the first byte implies (mirrors `s_ld_pk_u64`'s "returns 0 if
/// `size_of_pk` exceeds `remaining`").
pub fn load(buf: &[u8]) -> (u64, usize) {
    let Some(&first) = buf.first() else {
        return (0, 0);
    };
    let len = size_of_pk(first);
    if len == 0 || len > buf.len() {
        return (0, 0);
    }
    if len == 9 {
        let mut raw = [0u8; 8];
        raw.copy_from_slice(&buf[1..9]);
        return (u64::from_le_bytes(raw), 9);
    }
    let mut raw = [0u8; 8];
    raw[..len].copy_from_slice(&buf[..len]);
    let word = u64::from_le_bytes(raw);
    let shift = SHIFT[len - 1];
    (word >> shift, len)
}

/// Reads a packed value and advances `cursor` past it, for callers walking a
/// stream of opcodes (used by the LZ77 codec).
pub fn load_advance(buf: &[u8], cursor: &mut usize) -> u64 {
    let (v, n) = load(&buf[*cursor..]);
    *cursor += n;
    v
}

#[cfg(test)]
mod tests {
    use super::*;

    fn roundtrip(v: u64) {
        let mut buf = Vec::new();
        let written = store(&mut buf, v);
        assert_eq!(written, buf.len());
        assert_eq!(size_of_pk(buf[0]), written);
        let (loaded, consumed) = load(&buf);
        assert_eq!(loaded, v, "value mismatch for {v}");
        assert_eq!(consumed, written, "length mismatch for {v}");
    }

    #[test]
    fn boundaries() {
        let values = [
            0u64,
            127,
            128,
            16383,
            16384,
            (1u64 << 28) - 1,
            1u64 << 28,
            (1u64 << 35) - 1,
            1u64 << 35,
            (1u64 << 49) - 1,
            1u64 << 49,
            u64::MAX >> 1,
            (1u64 << 63),
            u64::MAX,
        ];
        for v in values {
            roundtrip(v);
        }
    }

    #[test]
    fn smallest_class_is_chosen() {
        let mut buf = Vec::new();
        store(&mut buf, 0);
        assert_eq!(buf.len(), 1);
        buf.clear();
        store(&mut buf, 127);
        assert_eq!(buf.len(), 1);
        buf.clear();
        store(&mut buf, 128);
        assert_eq!(buf.len(), 2);
        buf.clear();
        store(&mut buf, u64::MAX);
        assert_eq!(buf.len(), 9);
    }

    #[test]
    fn load_on_truncated_buffer_returns_zero() {
        let mut buf = Vec::new();
        store(&mut buf, 1u64 << 40);
        buf.truncate(2);
        assert_eq!(load(&buf), (0, 0));
    }

    #[test]
    fn load_on_empty_buffer_returns_zero() {
        assert_eq!(load(&[]), (0, 0));
    }
}
