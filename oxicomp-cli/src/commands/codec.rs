//! Compress and decompress command implementations.

use crate::algorithm::{Algorithm, CodecOptions};
use crate::utils::{decompressed_path, format_size, with_extension_appended};
use std::fs;
use std::path::Path;
use std::time::Instant;

pub fn cmd_compress(
    algorithm: Algorithm,
    input: &Path,
    output: Option<&Path>,
    options: &CodecOptions,
) -> Result<(), Box<dyn std::error::Error>> {
    let codec = algorithm.codec(options)?;
    let output = output
        .map(Path::to_path_buf)
        .unwrap_or_else(|| with_extension_appended(input, codec.extension()));

    let start = Instant::now();
    codec.compress_file(input, &output)?;
    let elapsed = start.elapsed();

    let original = fs::metadata(input)?.len();
    let compressed = fs::metadata(&output)?.len();
    println!(
        "{} -> {} ({})",
        input.display(),
        output.display(),
        codec.name()
    );
    let ratio = if original > 0 {
        format!("{:.4}", compressed as f64 / original as f64)
    } else {
        "-".to_string()
    };
    println!(
        "  {} -> {} ({}) in {:.2} ms",
        format_size(original),
        format_size(compressed),
        ratio,
        elapsed.as_secs_f64() * 1000.0
    );
    Ok(())
}

pub fn cmd_decompress(
    algorithm: Algorithm,
    input: &Path,
    output: Option<&Path>,
    options: &CodecOptions,
) -> Result<(), Box<dyn std::error::Error>> {
    let codec = algorithm.codec(options)?;
    let output = output
        .map(Path::to_path_buf)
        .unwrap_or_else(|| decompressed_path(input, codec.extension()));

    let start = Instant::now();
    codec.decompress_file(input, &output)?;
    let elapsed = start.elapsed();

    let restored = fs::metadata(&output)?.len();
    println!(
        "{} -> {} ({})",
        input.display(),
        output.display(),
        codec.name()
    );
    println!(
        "  {} restored in {:.2} ms",
        format_size(restored),
        elapsed.as_secs_f64() * 1000.0
    );
    Ok(())
}
