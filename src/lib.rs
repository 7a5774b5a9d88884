//! `srt` — a Rust port of libsrt: compact dynamic strings, typed vectors, an
//! arena-backed red-black tree/map, a bit-set, non-cryptographic hashes, and
//! streaming codecs (packed-u64, Base64/hex/XML/JSON/URL/quote escape, a
//! custom LZ77 variant).
//!
//! The library never panics or unwinds on malformed caller input: containers
//! carry sticky [`container::ErrorFlags`] instead of throwing, and codec
//! functions return 0 (or whatever their documented default is) rather than
//! raising on garbage. Single-threaded, cooperative — no type here offers a
//! thread-safety guarantee beyond what `Send`/`Sync` auto-derive already give
//! it; the one process-wide piece of shared state is the Turkish case-folding
//! toggle in [`config`].

pub mod bitset;
pub mod cli;
pub mod codec;
pub mod config;
pub mod container;
pub mod hash;
pub mod lz;
pub mod map;
pub mod search;
pub mod string;
pub mod tree;
pub mod varint;
pub mod vector;

pub use bitset::BitSet;
pub use container::{ErrorFlags, MaxSize, Shape};
pub use map::{SMap, SSet};
pub use search::NPOS;
pub use string::{CaseFolding, SStr, StrRef};
pub use tree::Tree;
pub use vector::SVec;
