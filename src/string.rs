//! Dynamic string (spec §3 "Dynamic string", §4.D).
//!
//! [`SStr`] owns a `Vec<u8>` plus the container substrate's [`Shape`] tag,
//! a cached Unicode length, and sticky [`ErrorFlags`] (spec §4.G carry-
//! forward note). [`StrRef`] is the separate, borrowing "reference" family
//! (`ext_buffer=1, is_reference=1` in the source): since it only ever
//! exposes shared-borrow methods, the source's "mutating API on a
//! reference returns the void sentinel or a copied clone" invariant holds
//! automatically — there is nothing in this type for the borrow checker to
//! let a caller mutate.

use crate::container::{heuristic_grow_target, ErrorFlags, Shape};
use crate::search;
use std::cell::Cell;

/// Which case-folding table a conversion call should use (spec §9 Design
/// Note: a `CaseFolding` parameter alongside the process-wide toggle).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CaseFolding {
    /// Follow the process-wide [`crate::config::turkish_mode`] toggle.
    #[default]
    Global,
    Standard,
    Turkish,
}

impl CaseFolding {
    fn is_turkish(self) -> bool {
        match self {
            CaseFolding::Global => crate::config::turkish_mode(),
            CaseFolding::Standard => false,
            CaseFolding::Turkish => true,
        }
    }
}

/// An owned, growable UTF-8-ish byte string.
#[derive(Debug, Clone)]
pub struct SStr {
    bytes: Vec<u8>,
    shape: Shape,
    /// The growth ceiling `heuristic_grow_target` last computed for this
    /// string (spec §4.C `max_size`), tracked explicitly rather than
    /// re-derived from `Vec::capacity()`, which the standard library only
    /// guarantees as a lower bound.
    max_size: usize,
    /// `None` means "not cached"; recomputed lazily by [`SStr::len_u`].
    unicode_len: Cell<Option<usize>>,
    errors: ErrorFlags,
}

impl Default for SStr {
    fn default() -> Self {
        SStr {
            bytes: Vec::new(),
            shape: Shape::Small,
            max_size: 0,
            unicode_len: Cell::new(Some(0)),
            errors: ErrorFlags::new(),
        }
    }
}

impl PartialEq for SStr {
    fn eq(&self, other: &Self) -> bool {
        self.bytes == other.bytes
    }
}
impl Eq for SStr {}

impl From<&str> for SStr {
    fn from(s: &str) -> Self {
        let mut out = SStr {
            bytes: s.as_bytes().to_vec(),
            shape: Shape::Small,
            max_size: 0,
            unicode_len: Cell::new(Some(s.chars().count())),
            errors: ErrorFlags::new(),
        };
        out.grow_to(out.bytes.len());
        out
    }
}

impl From<String> for SStr {
    fn from(s: String) -> Self {
        SStr::from(s.as_str())
    }
}

impl SStr {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(reserve: usize) -> Self {
        let mut s = Self::default();
        s.grow_to(reserve);
        s
    }

    /// Builds a string from raw bytes of unknown Unicode validity; the
    /// Unicode length cache starts cleared (spec: "must be recomputed on
    /// first query").
    pub fn from_bytes(bytes: Vec<u8>) -> Self {
        let requested = bytes.len();
        let mut s =
            SStr { bytes, shape: Shape::Small, max_size: 0, unicode_len: Cell::new(None), errors: ErrorFlags::new() };
        s.grow_to(requested);
        s
    }

    pub fn dup(src: &SStr) -> SStr {
        src.clone()
    }

    /// Computes the next growth ceiling via the shared container substrate
    /// heuristic (spec §4.C `max_size`) and promotes to [`Shape::Full`]
    /// once that ceiling, not `Vec::capacity()`'s incidental allocator
    /// growth, passes [`crate::config::SMALL_MAX`].
    fn grow_to(&mut self, requested: usize) {
        let target = heuristic_grow_target(self.max_size, requested);
        if target > self.bytes.capacity() {
            self.bytes.reserve(target - self.bytes.len());
        }
        self.max_size = target;
        if self.shape == Shape::Small && self.max_size > crate::config::SMALL_MAX {
            self.shape = Shape::Full;
        }
    }

    pub fn shape(&self) -> Shape {
        self.shape
    }

    pub fn errors(&self) -> ErrorFlags {
        self.errors
    }

    pub fn clear_errors(&mut self) {
        self.errors.clear();
    }

    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    pub fn as_str(&self) -> Option<&str> {
        std::str::from_utf8(&self.bytes).ok()
    }

    /// Cached Unicode length (spec §4.D "Cached Unicode size"): counts
    /// leading bytes `(b & 0xC0) != 0x80` on a miss, then caches the
    /// result.
    pub fn len_u(&self) -> usize {
        if let Some(n) = self.unicode_len.get() {
            return n;
        }
        let n = self.bytes.iter().filter(|&&b| (b & 0xC0) != 0x80).count();
        self.unicode_len.set(Some(n));
        n
    }

    /// Replaces this string's contents with `src`'s (spec `cpy`).
    pub fn cpy(&mut self, src: &SStr) {
        self.grow_to(src.bytes.len());
        self.bytes.clear();
        self.bytes.extend_from_slice(&src.bytes);
        self.unicode_len.set(src.unicode_len.get());
    }

    fn cat_raw(&mut self, src: &[u8], src_ucount: Option<usize>) {
        self.grow_to(self.bytes.len() + src.len());
        self.bytes.extend_from_slice(src);
        self.unicode_len.set(match (self.unicode_len.get(), src_ucount) {
            (Some(a), Some(b)) => Some(a + b),
            _ => None,
        });
    }

    /// Appends `src` (spec `cat`). Aliasing (`cat(self, self)`) is a
    /// borrow-checker error in this port rather than a runtime hazard the
    /// implementation must detect, unlike the source's pointer-based API.
    pub fn cat(&mut self, src: &SStr) {
        self.cat_raw(&src.bytes, src.unicode_len.get());
    }

    pub fn cat_str(&mut self, s: &str) {
        self.cat_raw(s.as_bytes(), Some(s.chars().count()));
    }

    pub fn cat_bytes(&mut self, bytes: &[u8]) {
        self.cat_raw(bytes, None);
    }

    /// Removes `len` bytes starting at `off`, clamped to the current
    /// length (spec `erase`).
    pub fn erase(&mut self, off: usize, len: usize) {
        let off = off.min(self.bytes.len());
        let end = (off + len).min(self.bytes.len());
        self.bytes.drain(off..end);
        self.unicode_len.set(None);
    }

    /// Replaces `[off, off+len)` with `with` (spec `replace`).
    pub fn replace(&mut self, off: usize, len: usize, with: &[u8]) {
        let off = off.min(self.bytes.len());
        let end = (off + len).min(self.bytes.len());
        let requested = self.bytes.len() - (end - off) + with.len();
        self.grow_to(requested);
        self.bytes.splice(off..end, with.iter().copied());
        self.unicode_len.set(None);
    }

    /// Resizes to `new_len` bytes, filling any new tail with `fill` (spec
    /// `resize`, byte mode).
    pub fn resize(&mut self, new_len: usize, fill: u8) {
        self.grow_to(new_len);
        self.bytes.resize(new_len, fill);
        self.unicode_len.set(None);
    }

    /// Grows to `new_len_chars` Unicode code points, repeating `fill`'s
    /// UTF-8 encoding (spec `resize`, Unicode mode). A no-op if the string
    /// already has at least that many code points.
    pub fn resize_chars(&mut self, new_len_chars: usize, fill: char) {
        let mut cur = self.len_u();
        if cur >= new_len_chars {
            return;
        }
        let mut buf = [0u8; 4];
        let encoded = fill.encode_utf8(&mut buf).as_bytes();
        let requested = self.bytes.len() + (new_len_chars - cur) * encoded.len();
        self.grow_to(requested);
        while cur < new_len_chars {
            self.bytes.extend_from_slice(encoded);
            cur += 1;
        }
        self.unicode_len.set(Some(new_len_chars));
    }

    pub fn find(&self, off: usize, needle: &[u8]) -> usize {
        search::find(&self.bytes, off, needle)
    }

    /// Last occurrence of `needle` (spec `findr`): no dedicated reverse
    /// scan in the search engine, so this repeats forward `find` and keeps
    /// the final hit.
    pub fn findr(&self, needle: &[u8]) -> usize {
        let mut last = search::NPOS;
        let mut off = 0;
        loop {
            let p = search::find(&self.bytes, off, needle);
            if p == search::NPOS {
                break;
            }
            last = p;
            off = p + 1;
        }
        last
    }

    pub fn findc(&self, off: usize, c: char) -> usize {
        let mut buf = [0u8; 4];
        search::find(&self.bytes, off, c.encode_utf8(&mut buf).as_bytes())
    }

    pub fn findu(&self, off: usize, c: char) -> usize {
        search::find_char(&self.bytes, off, c)
    }

    /// First non-whitespace byte at or after `off` (spec `findnb`).
    pub fn findnb(&self, off: usize) -> usize {
        search::find_class(&self.bytes, off, self.bytes.len(), &search::CharClass::NonWhitespace)
    }

    /// First whitespace byte at or after `off` (spec `findb`).
    pub fn findb(&self, off: usize) -> usize {
        search::find_class(&self.bytes, off, self.bytes.len(), &search::CharClass::Whitespace)
    }

    fn to_case(&self, turkish: bool, upper: bool) -> Result<Vec<u8>, ()> {
        let mut out = Vec::with_capacity(self.bytes.len());
        let mut i = 0;
        while i < self.bytes.len() {
            let b = self.bytes[i];
            if b < 0x80 && !turkish {
                out.push(if upper { b.to_ascii_uppercase() } else { b.to_ascii_lowercase() });
                i += 1;
                continue;
            }
            let rest = std::str::from_utf8(&self.bytes[i..]).map_err(|_| ())?;
            let c = rest.chars().next().expect("non-empty remainder");
            let mut buf = [0u8; 4];
            if upper {
                if turkish && c == 'i' {
                    out.extend_from_slice('İ'.encode_utf8(&mut buf).as_bytes());
                } else {
                    for uc in c.to_uppercase() {
                        out.extend_from_slice(uc.encode_utf8(&mut buf).as_bytes());
                    }
                }
            } else if turkish && c == 'I' {
                out.extend_from_slice('ı'.encode_utf8(&mut buf).as_bytes());
            } else {
                for lc in c.to_lowercase() {
                    out.extend_from_slice(lc.encode_utf8(&mut buf).as_bytes());
                }
            }
            i += c.len_utf8();
        }
        Ok(out)
    }

    /// In-place-or-reallocated case conversion (spec `to_upper`): the
    /// output byte count may differ from the input's, so this always
    /// rebuilds into a fresh buffer rather than attempting the source's
    /// in-place/aliasing dance — a realloc here is cheap relative to the
    /// UTF-8 decode it is bundled with.
    pub fn to_upper(&mut self, mode: CaseFolding) {
        match self.to_case(mode.is_turkish(), true) {
            Ok(out) => {
                self.grow_to(out.len());
                self.bytes = out;
                self.unicode_len.set(None);
            }
            Err(()) => self.errors.set_encoding_error(),
        }
    }

    pub fn to_lower(&mut self, mode: CaseFolding) {
        match self.to_case(mode.is_turkish(), false) {
            Ok(out) => {
                self.grow_to(out.len());
                self.bytes = out;
                self.unicode_len.set(None);
            }
            Err(()) => self.errors.set_encoding_error(),
        }
    }

    /// Splits on `sep`, returning up to `max` borrowed views (spec `split`:
    /// "fills an array of string references... never allocates" — the
    /// `Vec<StrRef>` spine here is the one allocation a fixed-size output
    /// array would avoid in C; the byte ranges themselves are always
    /// borrowed, never copied).
    pub fn split<'a>(&'a self, sep: &[u8], max: usize) -> Vec<StrRef<'a>> {
        let mut out = Vec::new();
        if max == 0 {
            return out;
        }
        let mut start = 0usize;
        loop {
            if out.len() + 1 == max || sep.is_empty() {
                out.push(StrRef::new(&self.bytes[start..]));
                break;
            }
            let p = search::find(&self.bytes, start, sep);
            if p == search::NPOS {
                out.push(StrRef::new(&self.bytes[start..]));
                break;
            }
            out.push(StrRef::new(&self.bytes[start..p]));
            start = p + sep.len();
        }
        out
    }

    /// Formats into this string's buffer, replacing its contents (spec
    /// `printf`/`printf_va`: this port uses `format_args!` instead of
    /// `vsnprintf`, since Rust has no varargs FFI surface to bind to).
    pub fn printf(&mut self, args: std::fmt::Arguments<'_>) {
        use std::fmt::Write;
        let mut s = String::new();
        if write!(s, "{args}").is_err() {
            self.errors.set_encoding_error();
            return;
        }
        self.grow_to(s.len());
        self.bytes = s.into_bytes();
        self.unicode_len.set(None);
    }

    /// Reads the code point at `*cursor`, advancing it by the decoded
    /// length (spec `getchar`). An invalid sequence sets the sticky
    /// encoding-error flag, advances by one byte, and yields the Unicode
    /// replacement character.
    pub fn getchar(&mut self, cursor: &mut usize) -> char {
        if *cursor >= self.bytes.len() {
            return '\0';
        }
        match std::str::from_utf8(&self.bytes[*cursor..]) {
            Ok(s) => {
                let c = s.chars().next().expect("non-empty remainder");
                *cursor += c.len_utf8();
                c
            }
            Err(_) => {
                self.errors.set_encoding_error();
                *cursor += 1;
                char::REPLACEMENT_CHARACTER
            }
        }
    }

    /// Appends a code point (spec `putchar`).
    pub fn putchar(&mut self, c: char) {
        let mut buf = [0u8; 4];
        let len = c.encode_utf8(&mut buf).len();
        self.grow_to(self.bytes.len() + len);
        self.bytes.extend_from_slice(&buf[..len]);
        if let Some(n) = self.unicode_len.get() {
            self.unicode_len.set(Some(n + 1));
        }
    }

    /// Removes and returns the last code point (spec `popchar`); returns
    /// `'\0'` on an empty string.
    pub fn popchar(&mut self) -> char {
        if self.bytes.is_empty() {
            return '\0';
        }
        match std::str::from_utf8(&self.bytes) {
            Ok(s) => {
                let c = s.chars().next_back().expect("non-empty string");
                let new_len = self.bytes.len() - c.len_utf8();
                self.bytes.truncate(new_len);
                if let Some(n) = self.unicode_len.get() {
                    self.unicode_len.set(Some(n - 1));
                }
                c
            }
            Err(_) => {
                self.errors.set_encoding_error();
                let b = self.bytes.pop().expect("non-empty string");
                self.unicode_len.set(None);
                b as char
            }
        }
    }
}

/// A borrowed view into a byte range (spec "String references... a const
/// view pair (pointer, length)"). `has_c_terminator` models the source's
/// `has_C_terminator` flag gating [`StrRef::to_c`].
#[derive(Debug, Clone, Copy)]
pub struct StrRef<'a> {
    bytes: &'a [u8],
    has_c_terminator: bool,
}

impl<'a> StrRef<'a> {
    pub fn new(bytes: &'a [u8]) -> Self {
        StrRef { bytes, has_c_terminator: false }
    }

    /// Builds a reference known to be backed by a NUL-terminated buffer
    /// (spec `cref(c_str)`), enabling [`StrRef::to_c`].
    pub fn from_c_str(bytes: &'a [u8]) -> Self {
        StrRef { bytes, has_c_terminator: true }
    }

    pub fn as_bytes(&self) -> &'a [u8] {
        self.bytes
    }

    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    pub fn to_owned_str(&self) -> SStr {
        SStr::from_bytes(self.bytes.to_vec())
    }

    /// Returns the borrowed buffer unchanged if it carries a trailing NUL
    /// outside this view; otherwise refuses (spec: "otherwise `to_c`
    /// refuses and returns an empty C string" — realized here as `None`
    /// rather than an empty-but-valid slice, this port's explicit decision
    /// for that Open Question).
    pub fn to_c(&self) -> Option<&'a [u8]> {
        self.has_c_terminator.then_some(self.bytes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_is_empty_with_cached_zero_length() {
        let s = SStr::new();
        assert_eq!(s.len(), 0);
        assert_eq!(s.len_u(), 0);
    }

    #[test]
    fn from_str_tracks_byte_and_char_counts() {
        let s = SStr::from("café");
        assert_eq!(s.len(), 5); // 'é' is 2 bytes in UTF-8
        assert_eq!(s.len_u(), 4);
    }

    #[test]
    fn cat_accumulates_unicode_length_when_both_cached() {
        let mut a = SStr::from("foo");
        let b = SStr::from("bar");
        a.cat(&b);
        assert_eq!(a.as_str(), Some("foobar"));
        assert_eq!(a.len_u(), 6);
    }

    #[test]
    fn cat_bytes_clears_cache_and_recomputes_lazily() {
        let mut a = SStr::from("foo");
        a.cat_bytes("café".as_bytes());
        assert_eq!(a.len_u(), 3 + 4);
    }

    #[test]
    fn cpy_replaces_contents() {
        let mut a = SStr::from("hello");
        let b = SStr::from("world");
        a.cpy(&b);
        assert_eq!(a.as_str(), Some("world"));
    }

    #[test]
    fn erase_removes_byte_range() {
        let mut s = SStr::from("hello world");
        s.erase(5, 6);
        assert_eq!(s.as_str(), Some("hello"));
    }

    #[test]
    fn replace_substitutes_range() {
        let mut s = SStr::from("hello world");
        s.replace(6, 5, b"rust");
        assert_eq!(s.as_str(), Some("hello rust"));
    }

    #[test]
    fn resize_grows_with_fill_byte() {
        let mut s = SStr::from("ab");
        s.resize(5, b'x');
        assert_eq!(s.as_bytes(), b"abxxx");
    }

    #[test]
    fn resize_shrinks_by_truncation() {
        let mut s = SStr::from("hello");
        s.resize(2, 0);
        assert_eq!(s.as_bytes(), b"he");
    }

    #[test]
    fn resize_chars_grows_by_code_points() {
        let mut s = SStr::from("ab");
        s.resize_chars(4, 'é');
        assert_eq!(s.len_u(), 4);
        assert_eq!(s.as_str(), Some("abéé"));
    }

    #[test]
    fn find_family_basic() {
        let s = SStr::from("the quick fox");
        assert_eq!(s.find(0, b"quick"), 4);
        assert_eq!(s.findnb(0), 0);
        assert_eq!(s.findb(0), 3);
    }

    #[test]
    fn findr_returns_last_occurrence() {
        let s = SStr::from("ababab");
        assert_eq!(s.findr(b"ab"), 4);
    }

    #[test]
    fn split_respects_max_and_never_drops_the_tail() {
        let s = SStr::from("a,b,c,d");
        let parts = s.split(b",", 3);
        assert_eq!(parts.len(), 3);
        assert_eq!(parts[0].as_bytes(), b"a");
        assert_eq!(parts[1].as_bytes(), b"b");
        assert_eq!(parts[2].as_bytes(), b"c,d");
    }

    #[test]
    fn to_upper_lower_roundtrip_ascii() {
        let mut s = SStr::from("Hello World");
        s.to_upper(CaseFolding::Standard);
        assert_eq!(s.as_str(), Some("HELLO WORLD"));
        s.to_lower(CaseFolding::Standard);
        assert_eq!(s.as_str(), Some("hello world"));
    }

    #[test]
    fn to_upper_handles_multibyte_expansion() {
        let mut s = SStr::from("straße");
        s.to_upper(CaseFolding::Standard);
        assert_eq!(s.as_str(), Some("STRASSE"));
    }

    // Spec §8 scenario S6: Turkish case toggle.
    #[test]
    fn turkish_case_folding_diverges_from_default() {
        let mut standard = SStr::from("i");
        standard.to_upper(CaseFolding::Standard);
        assert_eq!(standard.as_str(), Some("I"));

        let mut turkish = SStr::from("i");
        turkish.to_upper(CaseFolding::Turkish);
        assert_eq!(turkish.as_str(), Some("İ"));

        let mut turkish_lower = SStr::from("I");
        turkish_lower.to_lower(CaseFolding::Turkish);
        assert_eq!(turkish_lower.as_str(), Some("ı"));
    }

    #[test]
    fn global_turkish_mode_toggle_affects_default_folding() {
        crate::config::set_turkish_mode(true);
        let mut s = SStr::from("i");
        s.to_upper(CaseFolding::Global);
        assert_eq!(s.as_str(), Some("İ"));
        crate::config::set_turkish_mode(false);
    }

    #[test]
    fn getchar_putchar_popchar_cursor_protocol() {
        let mut s = SStr::new();
        s.putchar('c');
        s.putchar('a');
        s.putchar('f');
        s.putchar('é');
        assert_eq!(s.len_u(), 4);
        let mut cursor = 0;
        assert_eq!(s.getchar(&mut cursor), 'c');
        assert_eq!(s.getchar(&mut cursor), 'a');
        let popped = s.popchar();
        assert_eq!(popped, 'é');
        assert_eq!(s.len_u(), 3);
    }

    #[test]
    fn printf_formats_into_buffer() {
        let mut s = SStr::new();
        s.printf(format_args!("{}-{}", 1, "two"));
        assert_eq!(s.as_str(), Some("1-two"));
    }

    #[test]
    fn str_ref_to_c_respects_terminator_flag() {
        let owned = b"hi\0".to_vec();
        let untrusted = StrRef::new(&owned[..2]);
        assert_eq!(untrusted.to_c(), None);
        let trusted = StrRef::from_c_str(&owned[..2]);
        assert_eq!(trusted.to_c(), Some(&b"hi"[..]));
    }

    #[test]
    fn str_ref_to_owned_str_copies_bytes() {
        let data = b"borrowed".to_vec();
        let r = StrRef::new(&data);
        let owned = r.to_owned_str();
        assert_eq!(owned.as_str(), Some("borrowed"));
    }

    #[test]
    fn invalid_utf8_sets_encoding_error_on_case_conversion() {
        let mut s = SStr::from_bytes(vec![0xff, 0xfe]);
        s.to_upper(CaseFolding::Standard);
        assert!(s.errors().encoding_errors);
    }

    #[test]
    fn shape_promotes_past_small_max() {
        let s = SStr::with_capacity(crate::config::SMALL_MAX + 1);
        assert_eq!(s.shape(), Shape::Full);
        let small = SStr::from("short");
        assert_eq!(small.shape(), Shape::Small);
    }
}
