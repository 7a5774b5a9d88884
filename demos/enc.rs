//! `enc` — a thin exerciser binary for the codec/hash functions in [`srt`],
//! grounded in `examples/enc.c`: read all of stdin, apply exactly one
//! codec/hash operation selected by a single flag, write the result to
//! stdout.
//!
//! Unlike `enc.c`'s streaming loop (which re-reads in fixed chunks and keeps
//! a 16-byte lookback so a chunk boundary never splits an escape sequence),
//! this demo slurps all of stdin at once — simpler, and fine for a demo
//! binary that exists to exercise the library, not to stream gigabytes.

use std::io::{Read, Write};

use srt::cli::args::{parse_mode, Mode};
use srt::cli::help::print_usage;
use srt::{codec, hash, lz, ErrorFlags};

fn read_stdin() -> anyhow::Result<Vec<u8>> {
    let mut buf = Vec::new();
    std::io::stdin().read_to_end(&mut buf)?;
    Ok(buf)
}

fn run(mode: Mode) -> anyhow::Result<()> {
    let stdout = std::io::stdout();
    let mut out = stdout.lock();

    match mode {
        Mode::EncodeBase64 => out.write_all(&codec::base64::encode(&read_stdin()?))?,
        Mode::DecodeBase64 => out.write_all(&codec::base64::decode(&read_stdin()?))?,
        Mode::EncodeHexLower => out.write_all(&codec::hex::encode(&read_stdin()?))?,
        Mode::EncodeHexUpper => out.write_all(&codec::hex::encode_upper(&read_stdin()?))?,
        Mode::DecodeHex => out.write_all(&codec::hex::decode(&read_stdin()?))?,
        Mode::EncodeXml => out.write_all(&codec::escape::encode_xml(&read_stdin()?))?,
        Mode::DecodeXml => out.write_all(&codec::escape::decode_xml(&read_stdin()?))?,
        Mode::EncodeJson => out.write_all(&codec::escape::encode_json(&read_stdin()?))?,
        Mode::DecodeJson => out.write_all(&codec::escape::decode_json(&read_stdin()?))?,
        Mode::EncodeUrl => out.write_all(&codec::escape::encode_url(&read_stdin()?))?,
        Mode::DecodeUrl => out.write_all(&codec::escape::decode_url(&read_stdin()?))?,
        Mode::EncodeLz => out.write_all(&lz::encode(&read_stdin()?))?,
        Mode::EncodeLzHeap => out.write_all(&lz::encode_heap(&read_stdin()?))?,
        Mode::DecodeLz => {
            let mut errors = ErrorFlags::new();
            let decoded = lz::decode(&read_stdin()?, &mut errors);
            if errors.encoding_errors {
                eprintln!("enc: warning: lz frame truncated, output is partial");
            }
            out.write_all(&decoded)?
        }
        Mode::Crc32 => writeln!(out, "{:08x}", hash::crc32(hash::CRC32_INIT, &read_stdin()?))?,
        Mode::Adler32 => writeln!(out, "{:08x}", hash::adler32(hash::ADLER32_INIT, &read_stdin()?))?,
        Mode::Fnv1 => writeln!(out, "{:08x}", hash::fnv1(hash::FNV_INIT, &read_stdin()?))?,
        Mode::Fnv1a => writeln!(out, "{:08x}", hash::fnv1a(hash::FNV_INIT, &read_stdin()?))?,
        Mode::Murmur3_32 => writeln!(out, "{:08x}", hash::mh3_32(0, &read_stdin()?))?,
    }
    Ok(())
}

fn main() {
    let argv0 = std::env::args().next().unwrap_or_else(|| "enc".to_owned());
    let args: Vec<String> = std::env::args().skip(1).collect();

    let mode = match parse_mode(&args) {
        Ok(m) => m,
        Err(e) => {
            eprintln!("enc: {e}");
            print_usage(&argv0);
            std::process::exit(1);
        }
    };

    if let Err(e) = run(mode) {
        eprintln!("enc: {e}");
        std::process::exit(1);
    }
}
