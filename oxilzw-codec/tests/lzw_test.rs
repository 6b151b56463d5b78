//! Comprehensive LZW integration tests.

use oxilzw_codec::{
    Codec, HashStrictness, Lzw, LzwConfig, LzwDecoder, LzwEncoder, StreamEnd, compress,
    compress_with, decompress, decompress_with,
};

#[test]
fn test_lzw_roundtrip_simple() {
    let original = b"TOBEORNOTTOBEORTOBEORNOT";
    let compressed = compress(original).expect("compression failed");
    let decompressed = decompress(&compressed).expect("decompression failed");

    assert_eq!(decompressed, original);
}

#[test]
fn test_lzw_roundtrip_310_bytes() {
    let original = b"This is a test of compression! ".repeat(10);
    assert_eq!(original.len(), 310, "Test data must be exactly 310 bytes");

    let compressed = compress(&original).expect("compression failed");
    assert_eq!(compressed.len(), 137);

    let decompressed = decompress(&compressed).expect("decompression failed");
    assert_eq!(
        decompressed.len(),
        310,
        "Decompressed length MUST be 310 bytes, not truncated!"
    );
    assert_eq!(decompressed, &original[..], "Data must match exactly");
}

#[test]
fn test_lzw_roundtrip_large() {
    let original = b"The quick brown fox jumps over the lazy dog. ".repeat(100);
    let compressed = compress(&original).expect("compression failed");
    let decompressed = decompress(&compressed).expect("decompression failed");

    assert_eq!(decompressed, original);
}

#[test]
fn test_lzw_empty_input() {
    let compressed = compress(b"").expect("compression failed");
    assert_eq!(compressed, vec![0x80, 0x80]);

    let decompressed = decompress(&compressed).expect("decompression failed");
    assert!(decompressed.is_empty());
}

#[test]
fn test_lzw_empty_stream() {
    let decompressed = decompress(&[]).expect("decompression failed");
    assert!(decompressed.is_empty());
}

#[test]
fn test_lzw_single_byte() {
    let original = b"A";
    let compressed = compress(original).expect("compression failed");
    let decompressed = decompress(&compressed).expect("decompression failed");

    assert_eq!(decompressed, original);
}

#[test]
fn test_lzw_all_zeros() {
    let original = vec![0u8; 1000];
    let compressed = compress(&original).expect("compression failed");

    assert!(
        compressed.len() < original.len() / 5,
        "All-zeros should compress to less than 20% of original"
    );

    let decompressed = decompress(&compressed).expect("decompression failed");
    assert_eq!(decompressed, original);
}

#[test]
fn test_lzw_alternating_pattern() {
    let original = b"ABABABABABABABABABABABABABABABABABABAB";
    let compressed = compress(original).expect("compression failed");
    let decompressed = decompress(&compressed).expect("decompression failed");

    assert_eq!(decompressed, original);
}

#[test]
fn test_lzw_all_byte_values() {
    let original: Vec<u8> = (0..=255).collect();
    let compressed = compress(&original).expect("compression failed");
    let decompressed = decompress(&compressed).expect("decompression failed");

    assert_eq!(decompressed, original);
}

#[test]
fn test_lzw_random_like_data() {
    let original: Vec<u8> = (0..1000).map(|i| ((i * 31 + 17) % 256) as u8).collect();

    let compressed = compress(&original).expect("compression failed");
    let decompressed = decompress(&compressed).expect("decompression failed");

    assert_eq!(decompressed, original);
    assert!(
        compressed.len() >= original.len() / 2,
        "Random-like data should not compress significantly"
    );
}

#[test]
fn test_lzw_incremental_pattern() {
    let mut original = Vec::new();
    for i in 0..256 {
        for _ in 0..10 {
            original.push(i as u8);
        }
    }

    let compressed = compress(&original).expect("compression failed");
    let decompressed = decompress(&compressed).expect("decompression failed");

    assert_eq!(decompressed, original);
}

#[test]
fn test_lzw_very_large_input() {
    // Crosses many table resets.
    let original = b"The quick brown fox jumps over the lazy dog. ".repeat(20_000);

    let compressed = compress(&original).expect("compression failed");
    let decompressed = decompress(&compressed).expect("decompression failed");

    assert_eq!(decompressed.len(), original.len());
    assert_eq!(decompressed, original);
}

#[test]
fn test_lzw_multiple_sizes() {
    for size in [1, 10, 50, 100, 255, 256, 257, 500, 1000, 4095, 4096, 4097] {
        let original = vec![b'A'; size];
        let compressed = compress(&original).expect("compression failed");
        let decompressed = decompress(&compressed).expect("decompression failed");

        assert_eq!(
            decompressed.len(),
            original.len(),
            "Size mismatch for input size {}",
            size
        );
        assert_eq!(decompressed, original, "Data mismatch for size {}", size);
    }
}

#[test]
fn test_lzw_late_change_roundtrip() {
    let original: Vec<u8> = (0..60_000u32)
        .map(|i| ((i * 7 + i / 13) % 256) as u8)
        .collect();

    let compressed = compress_with(&original, LzwConfig::LATE_CHANGE).expect("compression failed");
    let decompressed =
        decompress_with(&compressed, LzwConfig::LATE_CHANGE).expect("decompression failed");

    assert_eq!(decompressed, original);
}

#[test]
fn test_lzw_config_default() {
    let config = LzwConfig::DEFAULT;
    assert!(config.early_change);
    assert_eq!(config.strictness, HashStrictness::Trusting);
    assert_eq!(config.predictor, 1);
    assert_eq!(config.colors, 1);
    assert_eq!(config.bits_per_component, 8);
    assert_eq!(config.columns, 1);
    assert_eq!(LzwConfig::default(), config);
}

#[test]
fn test_verified_mode_matches_trusting() {
    let original = b"The quick brown fox jumps over the lazy dog. ".repeat(2_000);
    let verified = LzwConfig::DEFAULT.with_strictness(HashStrictness::Verified);

    let trusting_out = compress(&original).expect("compression failed");
    let verified_out = compress_with(&original, verified).expect("compression failed");
    assert_eq!(trusting_out, verified_out);
    assert_eq!(
        decompress_with(&verified_out, verified).expect("decompression failed"),
        original
    );
}

#[test]
fn test_truncated_stream_decodes_prefix() {
    let original = b"This is a test of compression! ".repeat(10);
    let compressed = compress(&original).expect("compression failed");

    for cut in 0..compressed.len() {
        let partial = decompress(&compressed[..cut]).expect("decompression failed");
        assert!(
            original.starts_with(&partial),
            "Output for {} bytes is not a prefix",
            cut
        );
    }
}

#[test]
fn test_stream_without_end_of_data() {
    let original = b"AAAAAAAA";
    let mut compressed = compress(original).expect("compression failed");
    // The last byte holds most of END_OF_DATA.
    compressed.truncate(compressed.len() - 1);

    let decoder = LzwDecoder::new(LzwConfig::DEFAULT).expect("valid config");
    let (decoded, stats) = decoder
        .decode_with_stats(&compressed)
        .expect("decompression failed");
    assert_eq!(decoded, original);
    assert_eq!(stats.end, StreamEnd::Exhausted);
}

#[test]
fn test_shared_codec_across_threads() {
    let codec = Lzw::default();
    let inputs: Vec<Vec<u8>> = (0..8u8)
        .map(|seed| {
            (0..20_000u32)
                .map(|i| (i.wrapping_mul(seed as u32 + 1) % 97) as u8)
                .collect()
        })
        .collect();

    std::thread::scope(|scope| {
        for input in &inputs {
            let codec = &codec;
            scope.spawn(move || {
                let packed = codec.encode(input).expect("compression failed");
                assert_eq!(codec.decode(&packed).expect("decompression failed"), *input);
            });
        }
    });
}

#[test]
fn test_encoder_decoder_reusable() {
    let encoder = LzwEncoder::new(LzwConfig::DEFAULT).expect("valid config");
    let decoder = LzwDecoder::new(LzwConfig::DEFAULT).expect("valid config");

    for original in [
        &b"first call"[..],
        &b"second, longer call call call"[..],
        &b""[..],
    ] {
        let compressed = encoder.encode(original).expect("compression failed");
        assert_eq!(
            decoder.decode(&compressed).expect("decompression failed"),
            original
        );
    }
}

#[test]
fn test_compression_effectiveness() {
    let test_cases = vec![
        (b"AAAAAAAAAAAAAAAAAAAA".to_vec(), "all same"),
        (b"ABABABABABABABABABAB".to_vec(), "alternating"),
        (
            b"This is a test. This is a test. This is a test.".to_vec(),
            "repeated phrase",
        ),
    ];

    for (data, description) in test_cases {
        let compressed = compress(&data).expect("compression failed");

        assert!(
            compressed.len() < data.len(),
            "{} should compress",
            description
        );

        let decompressed = decompress(&compressed).expect("decompression failed");
        assert_eq!(decompressed, data);
    }
}
