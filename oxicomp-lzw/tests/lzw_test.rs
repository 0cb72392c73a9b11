//! Comprehensive LZW integration tests.

use oxicomp_core::OxiCompError;
use oxicomp_lzw::{
    LzwConfig, LzwDecoder, LzwEncoder, compress, compress_file, compress_with, decompress,
    decompress_file, decompress_with, read_codes,
};
use std::fs;

fn lcg_bytes(size: usize, mut seed: u64) -> Vec<u8> {
    (0..size)
        .map(|_| {
            seed = seed.wrapping_mul(6364136223846793005).wrapping_add(1);
            (seed >> 32) as u8
        })
        .collect()
}

#[test]
fn test_lzw_abababab() {
    let original = b"ABABABAB";
    let compressed = compress(original).expect("compression failed");
    assert_eq!(read_codes(&compressed[..]).unwrap(), vec![65, 66, 256, 258, 66]);
    assert_eq!(compressed.len(), 4 + 5 * 2);

    let decompressed = decompress(&compressed).expect("decompression failed");
    assert_eq!(decompressed, original);
}

#[test]
fn test_lzw_roundtrip_large() {
    let original = b"The quick brown fox jumps over the lazy dog. ".repeat(100);
    let compressed = compress(&original).expect("compression failed");
    let decompressed = decompress(&compressed).expect("decompression failed");

    assert_eq!(decompressed, original);
}

#[test]
fn test_lzw_roundtrip_random() {
    let original = lcg_bytes(64 * 1024, 0x1234_5678_9ABC_DEF0);
    let compressed = compress(&original).expect("compression failed");
    assert_eq!(decompress(&compressed).expect("decompression failed"), original);
}

#[test]
fn test_lzw_dictionary_ceiling() {
    // Enough varied input to fill the default dictionary many times over.
    let original = lcg_bytes(200_000, 17)
        .into_iter()
        .map(|b| b % 16)
        .collect::<Vec<_>>();
    let codes = LzwEncoder::default().encode_codes(&original).unwrap();
    assert!(codes.iter().all(|&c| c < 4096));
    assert!(codes.iter().any(|&c| c >= 4000), "dictionary should fill up");

    let decoded = LzwDecoder::default().decode_codes(&codes).unwrap();
    assert_eq!(decoded, original);
}

#[test]
fn test_lzw_larger_dictionary() {
    let config = LzwConfig::new(65536);
    let original = lcg_bytes(300_000, 23)
        .into_iter()
        .map(|b| b % 8)
        .collect::<Vec<_>>();
    let compressed = compress_with(&original, config).unwrap();
    let codes = read_codes(&compressed[..]).unwrap();
    assert!(codes.iter().any(|&c| c >= 4096));
    assert_eq!(decompress_with(&compressed, config).unwrap(), original);
}

#[test]
fn test_lzw_invalid_code_rejected() {
    // 65, then 400 while the next code is 256
    let container = [0, 0, 0, 2, 0, 65, 1, 144];
    let err = decompress(&container).unwrap_err();
    assert!(matches!(err, OxiCompError::CorruptStream { .. }));
}

#[test]
fn test_lzw_truncated_container() {
    let compressed = compress(b"TOBEORNOTTOBEORTOBEORNOT").unwrap();
    let err = decompress(&compressed[..compressed.len() - 1]).unwrap_err();
    assert!(matches!(err, OxiCompError::UnexpectedEof { .. }));
}

#[test]
fn test_lzw_empty_file() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("empty");
    let output = dir.path().join("empty.lzw");
    fs::write(&input, b"").unwrap();

    let err = compress_file(&input, &output).unwrap_err();
    assert!(matches!(err, OxiCompError::EmptyInput { .. }));
    assert!(!output.exists());
}

#[test]
fn test_lzw_file_roundtrip() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("data.txt");
    let packed = dir.path().join("data.txt.lzw");
    let restored = dir.path().join("data.txt.dec");
    let original = b"This is a test of compression! ".repeat(10);
    fs::write(&input, &original).unwrap();

    compress_file(&input, &packed).unwrap();
    decompress_file(&packed, &restored).unwrap();
    assert_eq!(fs::read(&restored).unwrap(), original);
}
