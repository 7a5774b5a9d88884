//! Compile-time configuration constants.
//!
//! Mirrors the knobs the original C sources gate behind preprocessor macros
//! (`SD_ENABLE_HEURISTIC_GROW`, `S_CRC32_SLC`, `S_LZ_MAX_HASH_BITS*`): in a
//! Rust port these become plain `const`s, since there is no preprocessor and
//! a `const` is trivially dead-code-eliminated where it gates a branch.

/// Whether container growth over-allocates ahead of the immediate request.
/// Corresponds to `SD_ENABLE_HEURISTIC_GROW` in `sdata.h`.
pub const HEURISTIC_GROW: bool = true;

/// Ceiling on the over-allocation heuristic's extra element count.
pub const GROW_HEURISTIC_CAP: usize = 1_000_000;

/// Numerator of the over-allocation heuristic (25% of the requested size).
pub const GROW_HEURISTIC_NUM: usize = 1;
pub const GROW_HEURISTIC_DEN: usize = 4;

/// Largest `max_size` representable by the small string header before a
/// promotion to the full header is required.
pub const SMALL_MAX: usize = 255;

/// CRC-32 bytes consumed per inner-loop iteration. One of 1, 4, 8, 12, 16.
/// Corresponds to `S_CRC32_SLC` in `shash.c`.
pub const CRC32_SLICE_BY: usize = 16;

/// LZ77 encoder hash-table size ceiling on the stack-bounded path (2^n
/// entries). Corresponds to `S_LZ_MAX_HASH_BITS_STACK`.
pub const LZ_MAX_HASH_BITS_STACK: u32 = 14;

/// LZ77 encoder hash-table size ceiling when heap allocation of the lookup
/// table is allowed (64 MiB of `usize` slots at the limit). Corresponds to
/// `S_LZ_MAX_HASH_BITS`.
pub const LZ_MAX_HASH_BITS_HEAP: u32 = 26;

/// Minimum LZ77 encoder hash-table size (2^n entries).
pub const LZ_MIN_HASH_BITS: u32 = 3;

/// Matches farther than this are only kept if they are longer than the
/// minimum match length (distance/length cost tradeoff). See
/// `senc_lz_aux`'s `dist > 500000 && len == 4` guard.
pub const LZ_MAX_SHORT_MATCH_DISTANCE: usize = 500_000;

/// Reference CLI per-frame size limit (spec §6.2/6.3).
pub const LZ_FRAME_LIMIT: usize = 64 * 1024 * 1024;

/// Rabin-Karp fast-to-slow downgrade: collisions allowed per scan window
/// before switching checksums. See `ss_find_csum_fast`.
pub const RK_COLLISION_WINDOW_FACTOR: usize = 10;
pub const RK_COLLISION_BASE: usize = 2;

/// Process-wide case-folding toggle (spec §5 "Global mutable state", §4.D).
/// The source flips two function pointers (`tolower`/`toupper` vs. their
/// Turkish-I variants) behind a single global; this port keeps the same
/// global default for fidelity, alongside an explicit
/// [`crate::string::CaseFolding`] parameter callers can pass instead of
/// relying on it.
static TURKISH_MODE: std::sync::atomic::AtomicBool = std::sync::atomic::AtomicBool::new(false);

pub fn turkish_mode() -> bool {
    TURKISH_MODE.load(std::sync::atomic::Ordering::Relaxed)
}

pub fn set_turkish_mode(enabled: bool) {
    TURKISH_MODE.store(enabled, std::sync::atomic::Ordering::Relaxed);
}
