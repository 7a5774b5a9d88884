//! Argument parsing for the `enc` demo binary (spec §6.3).
//!
//! Grounded in `examples/enc.c`'s single-flag dispatch (`argv[1]` selects
//! exactly one codec/hash mode) and in the teacher's hand-rolled `cli::args`
//! parser — this port keeps the same "one pass over argv, no external
//! argument-parsing crate" shape rather than reaching for `clap`'s derive
//! API, which the teacher itself declares as a dependency but does not
//! actually use for its own argv parsing either.

use anyhow::{anyhow, Result};

/// One of the `enc` demo's codec/hash operations, one per spec §6.3 flag.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    EncodeBase64,
    DecodeBase64,
    EncodeHexLower,
    EncodeHexUpper,
    DecodeHex,
    EncodeXml,
    DecodeXml,
    EncodeJson,
    DecodeJson,
    EncodeUrl,
    DecodeUrl,
    EncodeLz,
    EncodeLzHeap,
    DecodeLz,
    Crc32,
    Adler32,
    Fnv1,
    Fnv1a,
    Murmur3_32,
}

/// Parses the single mode flag out of `argv[1:]` (spec: "`enc` ... options
/// `-eb -db -eh -eH -dh -ex -dx -ej -dj -eu -du -ez -dz -ezh -crc32
/// -adler32 -fnv1 -fnv1a -mh3_32`").
pub fn parse_mode(args: &[String]) -> Result<Mode> {
    let flag = args.first().ok_or_else(|| anyhow!("bad usage: missing mode flag"))?;
    match flag.as_str() {
        "-eb" => Ok(Mode::EncodeBase64),
        "-db" => Ok(Mode::DecodeBase64),
        "-eh" => Ok(Mode::EncodeHexLower),
        "-eH" => Ok(Mode::EncodeHexUpper),
        "-dh" => Ok(Mode::DecodeHex),
        "-ex" => Ok(Mode::EncodeXml),
        "-dx" => Ok(Mode::DecodeXml),
        "-ej" => Ok(Mode::EncodeJson),
        "-dj" => Ok(Mode::DecodeJson),
        "-eu" => Ok(Mode::EncodeUrl),
        "-du" => Ok(Mode::DecodeUrl),
        "-ezh" => Ok(Mode::EncodeLzHeap),
        "-ez" => Ok(Mode::EncodeLz),
        "-dz" => Ok(Mode::DecodeLz),
        "-crc32" => Ok(Mode::Crc32),
        "-adler32" => Ok(Mode::Adler32),
        "-fnv1" => Ok(Mode::Fnv1),
        "-fnv1a" => Ok(Mode::Fnv1a),
        "-mh3_32" => Ok(Mode::Murmur3_32),
        other => Err(anyhow!("bad usage: unrecognized flag '{other}'")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_every_documented_flag() {
        let cases = [
            ("-eb", Mode::EncodeBase64),
            ("-db", Mode::DecodeBase64),
            ("-eh", Mode::EncodeHexLower),
            ("-eH", Mode::EncodeHexUpper),
            ("-dh", Mode::DecodeHex),
            ("-ex", Mode::EncodeXml),
            ("-dx", Mode::DecodeXml),
            ("-ej", Mode::EncodeJson),
            ("-dj", Mode::DecodeJson),
            ("-eu", Mode::EncodeUrl),
            ("-du", Mode::DecodeUrl),
            ("-ez", Mode::EncodeLz),
            ("-ezh", Mode::EncodeLzHeap),
            ("-dz", Mode::DecodeLz),
            ("-crc32", Mode::Crc32),
            ("-adler32", Mode::Adler32),
            ("-fnv1", Mode::Fnv1),
            ("-fnv1a", Mode::Fnv1a),
            ("-mh3_32", Mode::Murmur3_32),
        ];
        for (flag, expected) in cases {
            let parsed = parse_mode(&[flag.to_string()]).unwrap();
            assert_eq!(parsed, expected, "flag {flag}");
        }
    }

    #[test]
    fn ezh_is_not_shadowed_by_ez_prefix_match() {
        assert_eq!(parse_mode(&["-ezh".to_string()]).unwrap(), Mode::EncodeLzHeap);
    }

    #[test]
    fn rejects_missing_or_unknown_flag() {
        assert!(parse_mode(&[]).is_err());
        assert!(parse_mode(&["-bogus".to_string()]).is_err());
    }
}
