//! Cross-cutting [`srt::lz`] scenario (spec §8 S2).

#[test]
fn s2_lz_round_trip_on_highly_repetitive_megabyte_input() {
    let mut input = Vec::new();
    while input.len() < 1_048_576 {
        input.extend_from_slice(b"abc");
    }
    input.truncate(1_048_576);

    let ceiling = srt::lz::encode_req_size(input.len());
    let encoded = srt::lz::encode(&input);

    assert!(
        encoded.len() < input.len() / 10,
        "expected <10% of input size, got {} of {}",
        encoded.len(),
        input.len()
    );
    assert!(encoded.len() <= ceiling, "encoded size {} exceeded declared ceiling {}", encoded.len(), ceiling);

    let mut errors = srt::ErrorFlags::new();
    let decoded = srt::lz::decode(&encoded, &mut errors);
    assert_eq!(decoded, input);
    assert!(!errors.encoding_errors);
}
