//! Byte-sum checksum and integer/float hashing (spec §4.B).
//!
//! `csum32` is explicitly *not* for content identity — only for routing
//! buckets, matching the source's `sh_csum32` comment. `hash32`/`hash64` are
//! Fibonacci-constant multiplicative integer hashes; float hashing reuses
//! the integer hash over the raw bit pattern.

/// XOR of little-endian `u32` chunks, tail zero-padded. Corresponds to
/// `sh_csum32` / `s_hash_csum32`.
pub fn csum32(buf: &[u8]) -> u32 {
    let mut acc: u32 = 0;
    let mut chunks = buf.chunks_exact(4);
    for chunk in &mut chunks {
        acc ^= u32::from_le_bytes(chunk.try_into().unwrap());
    }
    let rem = chunks.remainder();
    if !rem.is_empty() {
        let mut padded = [0u8; 4];
        padded[..rem.len()].copy_from_slice(rem);
        acc ^= u32::from_le_bytes(padded);
    }
    acc
}

const FIB32: u32 = 0x61C8_8647;
const FIB64: u64 = 0x61C8_8647_80B5_83EB;

/// Multiplicative Fibonacci-hashing of a 32-bit integer.
pub fn hash32(v: u32) -> u32 {
    v.wrapping_mul(FIB32)
}

/// Multiplicative Fibonacci-hashing of a 64-bit integer.
pub fn hash64(v: u64) -> u64 {
    v.wrapping_mul(FIB64)
}

/// Hashes an `f32` by reusing [`hash32`] on its raw bit pattern.
pub fn float32_hash(v: f32) -> u32 {
    hash32(v.to_bits())
}

/// Hashes an `f64` by reusing [`hash64`] on its raw bit pattern.
pub fn float64_hash(v: f64) -> u64 {
    hash64(v.to_bits())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn csum32_empty_is_zero() {
        assert_eq!(csum32(&[]), 0);
    }

    #[test]
    fn csum32_tail_padding() {
        let a = csum32(&[1, 2, 3]);
        let b = csum32(&[1, 2, 3, 0]);
        assert_eq!(a, b);
    }

    #[test]
    fn integer_hash_distinct() {
        assert_ne!(hash32(1), hash32(2));
        assert_ne!(hash64(1), hash64(2));
    }

    #[test]
    fn float_hash_matches_bit_reuse() {
        assert_eq!(float32_hash(1.5), hash32(1.5f32.to_bits()));
        assert_eq!(float64_hash(1.5), hash64(1.5f64.to_bits()));
    }
}
