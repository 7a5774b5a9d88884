//! Escape and radix codecs (spec §4.J): Base64, hex, and the XML/JSON/URL/
//! quote escape family.
//!
//! Every codec here is grounded in `senc.c`/`sdec.c`'s raw contract (spec
//! §6.4, §7): a function that takes a source range and either a destination
//! buffer or a size-polling `None`, returns the number of bytes written (or
//! required), and never panics on malformed input — "garbage in, garbage
//! out" per spec §4.J's hex note. Each submodule exposes that raw pair
//! (`*_req_size` / `encode_into`-style) plus an ergonomic `encode`/`decode`
//! that allocates and returns `Vec<u8>`, following the teacher's pattern of
//! pairing a raw core with a convenience layer (`block::compress::Lz4Error`).

pub mod base64;
pub mod escape;
pub mod hex;

/// Decode-side failure shared by every codec in this module (spec §4.J: all
/// codecs are tolerant of malformed input at the raw-contract level; this
/// typed layer exists for callers who want `?`-based flow instead of
/// eyeballing a byte count).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DecodeError {
    /// Input length isn't a valid multiple for this codec (e.g. Base64 not a
    /// multiple of 4, hex with an odd digit count).
    InvalidLength,
}

impl std::fmt::Display for DecodeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DecodeError::InvalidLength => write!(f, "input length invalid for this codec"),
        }
    }
}

impl std::error::Error for DecodeError {}

/// Shared realization of the spec's "destination buffer or null" contract:
/// computes `out` once, copies as much of it as fits into `dst` when given
/// one, and always returns `out`'s full length (the required size). This is
/// this port's Rust-idiomatic take on the source's `uint8_t *o` /
/// `NULL`-means-"just tell me the size" convention — an `Option<&mut [u8]>`
/// in place of a nullable pointer.
pub(crate) fn write_or_size(out: Vec<u8>, dst: Option<&mut [u8]>) -> usize {
    let len = out.len();
    if let Some(buf) = dst {
        let n = len.min(buf.len());
        buf[..n].copy_from_slice(&out[..n]);
    }
    len
}
