//! Byte/Unicode search: Rabin-Karp with a dual-checksum downgrade (spec §4.I).
//!
//! Grounded in `ss_find_csum_fast`/`ss_find_csum_slow`
//! (`examples/original_source/src/saux/ssearch.c`): a rolling window
//! checksum starts with a cheap byte-sum (`fast`) and, under sustained
//! checksum collisions (a checksum match whose content differs), restarts
//! the scan from the current offset using a stronger pairwise mix (`slow`)
//! that guarantees O(n) worst-case behavior (spec §8 item 8, adversarial
//! scenario S5).

use crate::config::{RK_COLLISION_BASE, RK_COLLISION_WINDOW_FACTOR};

/// Sentinel for "not found" (spec GLOSSARY: `NPOS`).
pub const NPOS: usize = usize::MAX;

/// Cheap byte-sum checksum over `buf[w+1 .. w+ts]` (the source's window
/// checksum deliberately excludes the window's first byte; real equality
/// is always reconfirmed with a byte comparison before returning a match).
fn fast_init(buf: &[u8], w: usize, ts: usize) -> u32 {
    let mut acc = 0u32;
    for k in 1..ts {
        acc = acc.wrapping_add(buf[w + k] as u32);
    }
    acc
}

fn fast_roll(buf: &[u8], w: usize, ts: usize, old: u32) -> u32 {
    old.wrapping_sub(buf[w + 1] as u32).wrapping_add(buf[w + ts] as u32)
}

/// Two-position rolling mix, `2 * (1 + p[i-1]) + q[i]` (spec §4.I), summed
/// over the same `[w+1, w+ts-1]` index range as [`fast_init`].
fn slow_pair(buf: &[u8], j: usize) -> u32 {
    2u32.wrapping_mul(1 + buf[j - 1] as u32).wrapping_add(buf[j] as u32)
}

fn slow_init(buf: &[u8], w: usize, ts: usize) -> u32 {
    let mut acc = 0u32;
    for k in 1..ts {
        acc = acc.wrapping_add(slow_pair(buf, w + k));
    }
    acc
}

fn slow_roll(buf: &[u8], w: usize, ts: usize, old: u32) -> u32 {
    old.wrapping_sub(slow_pair(buf, w + 1)).wrapping_add(slow_pair(buf, w + ts))
}

enum Outcome {
    Found(usize),
    /// Collision pressure exceeded the threshold; restart at this offset
    /// using the slow checksum (spec: "Rabin-Karp downgrade").
    Downgrade(usize),
    NotFound,
}

/// Scans windows of length `ts` starting at `off`, using the fast or slow
/// checksum scheme. `allow_downgrade` gates the collision-counting/downgrade
/// logic (only the fast pass downgrades; the slow pass is already the
/// O(n)-guaranteed fallback).
fn scan(haystack: &[u8], off: usize, needle: &[u8], slow: bool, allow_downgrade: bool) -> Outcome {
    let ts = needle.len();
    let hs = haystack.len();
    let target = if slow { slow_init(needle, 0, ts) } else { fast_init(needle, 0, ts) };
    let mut w = off;
    let mut cur = if slow { slow_init(haystack, w, ts) } else { fast_init(haystack, w, ts) };
    let mut collision_base: Option<usize> = None;
    let mut collision_count = 0usize;
    loop {
        if cur == target && haystack[w..w + ts] == *needle {
            return Outcome::Found(w);
        }
        if cur == target && allow_downgrade {
            // Checksum matched but content differs: a collision.
            match collision_base {
                None => {
                    collision_base = Some(w);
                    collision_count = 1;
                }
                Some(base) => {
                    if w - base > ts * RK_COLLISION_WINDOW_FACTOR {
                        collision_base = Some(w);
                        collision_count = 1;
                    } else {
                        collision_count += 1;
                        if collision_count > RK_COLLISION_BASE + ts / 2 {
                            return Outcome::Downgrade(w);
                        }
                    }
                }
            }
        }
        if w + ts >= hs {
            return Outcome::NotFound;
        }
        cur = if slow { slow_roll(haystack, w, ts, cur) } else { fast_roll(haystack, w, ts, cur) };
        w += 1;
    }
}

fn memchr(byte: u8, buf: &[u8]) -> Option<usize> {
    buf.iter().position(|&b| b == byte)
}

/// `ss_find`/byte-range `find`: returns the offset of the first occurrence
/// of `needle` in `haystack` at or after `off`, or [`NPOS`].
///
/// An empty needle matches immediately at `off` (bounded by haystack
/// length); the spec's testable property is stated for `|n| >= 1`, so this
/// is this port's explicit decision for the `|n| == 0` edge the spec leaves
/// open.
pub fn find(haystack: &[u8], off: usize, needle: &[u8]) -> usize {
    if needle.is_empty() {
        return if off <= haystack.len() { off } else { NPOS };
    }
    if off >= haystack.len() || needle.len() > haystack.len() - off {
        return NPOS;
    }
    // First-byte skip optimization (spec: "skips to the next occurrence of
    // the needle's first byte via memchr before each checksum computation").
    let Some(start) = memchr(needle[0], &haystack[off..]).map(|p| off + p) else {
        return NPOS;
    };
    if needle.len() > haystack.len() - start {
        return NPOS;
    }
    match scan(haystack, start, needle, false, true) {
        Outcome::Found(p) => p,
        Outcome::Downgrade(at) => match scan(haystack, at, needle, true, false) {
            Outcome::Found(p) => p,
            _ => NPOS,
        },
        Outcome::NotFound => NPOS,
    }
}

/// Unicode find above U+007F: encode the target code point to a short
/// stack buffer and delegate to [`find`] (spec §4.D `findu`).
pub fn find_char(haystack: &[u8], off: usize, c: char) -> usize {
    let mut buf = [0u8; 4];
    let encoded = c.encode_utf8(&mut buf);
    find(haystack, off, encoded.as_bytes())
}

/// Character-class predicate used by [`find_class`] (spec: "Character-class
/// search (whitespace / non-whitespace / range) is a simple linear scan").
pub enum CharClass {
    Whitespace,
    NonWhitespace,
    Range(char, char),
}

impl CharClass {
    fn matches(&self, c: char) -> bool {
        match self {
            CharClass::Whitespace => c.is_whitespace(),
            CharClass::NonWhitespace => !c.is_whitespace(),
            CharClass::Range(lo, hi) => c >= *lo && c <= *hi,
        }
    }
}

/// Linear scan bounded by `max_off`, returning the byte offset of the first
/// code point in `haystack[off..max_off]` matching `class`.
pub fn find_class(haystack: &[u8], off: usize, max_off: usize, class: &CharClass) -> usize {
    let end = max_off.min(haystack.len());
    if off > end {
        return NPOS;
    }
    let s = match std::str::from_utf8(&haystack[off..end]) {
        Ok(s) => s,
        Err(_) => return NPOS,
    };
    for (i, c) in s.char_indices() {
        if class.matches(c) {
            return off + i;
        }
    }
    NPOS
}
