//! CRC-32 (polynomial `0xedb88320`), slice-by-N table-driven implementation.
//!
//! Ported from `sh_crc32` in `examples/original_source/src/saux/shash.c`.
//! The C source switches between 1/4/8/12/16 bytes per loop at compile time
//! via `S_CRC32_SLC`; this port always uses the
//! [`crate::config::CRC32_SLICE_BY`] width (default 16) and processes any
//! tail bytes one at a time with the single-byte table.

use crate::config::CRC32_SLICE_BY;

pub const CRC32_INIT: u32 = 0;

const POLY: u32 = 0xedb8_8320;

/// `crc32_tab[slice][byte]`: 16 sub-tables of 256 entries, one per byte
/// position consumed in a slice-by-16 step. Table 0 is the conventional
/// single-byte CRC-32 table; tables 1..15 are table 0 folded forward by one
/// to sixteen byte positions, exactly as `crc32_tab` is constructed by the
/// reference build-time table generator.
struct Tables([[u32; 256]; 16]);

fn build_tables() -> Tables {
    let mut tabs = [[0u32; 256]; 16];
    for (i, slot) in tabs[0].iter_mut().enumerate() {
        let mut c = i as u32;
        for _ in 0..8 {
            c = if c & 1 != 0 { POLY ^ (c >> 1) } else { c >> 1 };
        }
        *slot = c;
    }
    for slice in 1..16 {
        for byte in 0..256 {
            let prev = tabs[slice - 1][byte];
            tabs[slice][byte] = tabs[0][(prev & 0xff) as usize] ^ (prev >> 8);
        }
    }
    Tables(tabs)
}

fn tables() -> &'static Tables {
    use std::sync::OnceLock;
    static TABLES: OnceLock<Tables> = OnceLock::new();
    TABLES.get_or_init(build_tables)
}

/// Folds `buf` into the running CRC-32 accumulator `crc`. Always
/// complements on entry and exit (`crc = !crc` ... `!crc`), matching the
/// conventional CRC-32 framing.
pub fn crc32(crc: u32, buf: &[u8]) -> u32 {
    let tabs = &tables().0;
    let mut crc = !crc;
    let mut i = 0;
    let step = CRC32_SLICE_BY.min(16).max(1);
    if step > 1 {
        let aligned = (buf.len() / step) * step;
        while i < aligned {
            let mut word = u32::from_le_bytes(buf[i..i + 4].try_into().unwrap()) ^ crc;
            let mut acc = tabs[0][(word >> 24) as usize & 0xff]
                ^ tabs[1][(word >> 16) as usize & 0xff]
                ^ tabs[2][(word >> 8) as usize & 0xff]
                ^ tabs[3][word as usize & 0xff];
            let mut slice_base = 4;
            while slice_base < step {
                word = u32::from_le_bytes(
                    buf[i + slice_base..i + slice_base + 4].try_into().unwrap(),
                );
                acc ^= tabs[slice_base][(word >> 24) as usize & 0xff]
                    ^ tabs[slice_base + 1][(word >> 16) as usize & 0xff]
                    ^ tabs[slice_base + 2][(word >> 8) as usize & 0xff]
                    ^ tabs[slice_base + 3][word as usize & 0xff];
                slice_base += 4;
            }
            crc = acc;
            i += step;
        }
    }
    while i < buf.len() {
        crc = tabs[0][((crc ^ buf[i] as u32) & 0xff) as usize] ^ (crc >> 8);
        i += 1;
    }
    !crc
}
