//! Cross-cutting [`srt::search`] scenario (spec §8 S5).

use srt::search;

#[test]
fn s5_rabin_karp_adversarial_collision_pattern_still_finds_the_match() {
    let mut haystack = vec![b'a'; 10_000];
    haystack.extend_from_slice(b"aaaab");
    let needle = b"aaab";

    // The only `b` sits at index 10004; "aaab" can only end there, so the
    // unique match starts at 10001 regardless of which checksum scheme
    // the scan is running under.
    let pos = search::find(&haystack, 0, needle);
    assert_eq!(pos, 10001);
}
