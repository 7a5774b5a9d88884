//! Cross-cutting [`srt::varint`] scenario (spec §8 S3).

use srt::varint;

#[test]
fn s3_packed_u64_boundaries_round_trip_at_smallest_class() {
    let values = [
        0u64,
        127,
        128,
        16383,
        16384,
        (1u64 << 28) - 1,
        1u64 << 28,
        (1u64 << 35) - 1,
        1u64 << 35,
        (1u64 << 49) - 1,
        1u64 << 49,
        (1u64 << 63) - 1,
        1u64 << 63,
        u64::MAX,
    ];
    for v in values {
        let mut buf = Vec::new();
        let written = varint::store(&mut buf, v);
        let (loaded, consumed) = varint::load(&buf);
        assert_eq!(loaded, v, "round trip failed for {v}");
        assert_eq!(consumed, written, "consumed/written mismatch for {v}");

        // Shrinking the output by one byte must never still decode to `v`
        // at the same length, confirming `written` is the smallest class.
        if buf.len() > 1 {
            let mut shorter = buf.clone();
            shorter.truncate(buf.len() - 1);
            let (_, shorter_consumed) = varint::load(&shorter);
            assert_ne!(shorter_consumed, written, "smaller class accepted for {v}");
        }
    }
}
