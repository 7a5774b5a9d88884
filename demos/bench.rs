//! `bench` — a micro-benchmark exerciser for [`srt`], grounded in
//! `examples/original_source/examples/bench.c`'s three benchmark groups
//! (search, case conversion, misc/Unicode-length).
//!
//! `bench.c` drives each group over an elaborate table of fixed test
//! strings with multiple repeat counts; that level of harness is
//! disproportionate for a thin demo binary, so this instead times one
//! representative workload per group with [`std::time::Instant`] and
//! reports throughput, in the spirit of the original without replicating
//! its parameter tables verbatim.

use srt::string::{CaseFolding, SStr};
use srt::{lz, search};

fn bench<F: FnMut()>(label: &str, iters: u32, mut f: F) {
    let start = std::time::Instant::now();
    for _ in 0..iters {
        f();
    }
    let elapsed = start.elapsed();
    let per_iter = elapsed / iters.max(1);
    println!("{label:<28} {iters:>8} iters   {elapsed:>10.2?} total   {per_iter:>10.2?}/iter");
}

fn bench_search() {
    let mut haystack = Vec::new();
    while haystack.len() < 1_000_000 {
        haystack.extend_from_slice(b"the quick brown fox jumps over the lazy dog. ");
    }
    let needle = b"lazy dog";
    bench("search::find (1 MB haystack)", 200, || {
        let mut off = 0;
        while off != search::NPOS {
            off = search::find(&haystack, off, needle);
            if off != search::NPOS {
                off += 1;
            }
        }
    });
}

fn bench_case_conversion() {
    let sample = SStr::from_bytes("The Quick Brown Fox JUMPS over the LAZY dog — naïve café".repeat(2000).into_bytes());
    bench("SStr::to_upper (standard mode)", 500, || {
        let mut s = SStr::dup(&sample);
        s.to_upper(CaseFolding::Standard);
    });
    bench("SStr::to_lower (Turkish mode)", 500, || {
        let mut s = SStr::dup(&sample);
        s.to_lower(CaseFolding::Turkish);
    });
}

fn bench_misc() {
    let sample = SStr::from_bytes("héllo wörld, this is a länger ütf-8 string".repeat(5000).into_bytes());
    bench("SStr::len_u (cached Unicode length)", 2_000_000, || {
        let _ = sample.len_u();
    });

    let mut corpus = Vec::new();
    while corpus.len() < 500_000 {
        corpus.extend_from_slice(b"abcabcabcabcabcabcabcabcabcabcabc");
    }
    bench("lz::encode (500 KB, stack LUT)", 50, || {
        let _ = lz::encode(&corpus);
    });
}

fn main() {
    println!("search:");
    bench_search();
    println!("\ncase conversion:");
    bench_case_conversion();
    println!("\nmisc:");
    bench_misc();
}
