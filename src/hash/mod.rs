//! Rolling-hash / checksum pipeline (spec §4.B).
//!
//! Every hash here is a resumable accumulator: `f(acc, bytes) -> acc`, where
//! `acc` starts at the family's documented initial constant. None of these
//! claim cryptographic strength (spec §1 Non-goals) — they are routing,
//! integrity, and dedup-bucket checksums.
//!
//! Property exercised by the whole family (spec §8 item 9): hashing a
//! concatenation in two calls equals hashing it in one,
//! `h(h(acc, a), b) == h(acc, a ++ b)`, because every accumulator here only
//! ever folds bytes left-to-right with no dependence on total length except
//! where the algorithm explicitly mixes the length in at finalization
//! (MurmurHash3); that one is tested for the *unfinalized* accumulator
//! property and finalized separately.

pub mod adler32;
pub mod crc32;
pub mod csum;
pub mod fnv;
pub mod murmur3;

pub use adler32::{adler32, ADLER32_INIT};
pub use crc32::{crc32, CRC32_INIT};
pub use csum::{csum32, float32_hash, float64_hash, hash32, hash64};
pub use fnv::{fnv1, fnv1a, FNV_INIT};
pub use murmur3::mh3_32;
