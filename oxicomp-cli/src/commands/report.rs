//! Report command implementation.
//!
//! For every selected algorithm and every input file the report compresses
//! `FILE` to `FILE.<ext>`, decompresses that to `FILE.<ext>.dec`, times both
//! steps and compares the result with the original byte for byte.

use crate::algorithm::{Algorithm, CodecOptions};
use crate::commands::entropy::FileEntropy;
use crate::utils::{create_progress_bar, with_extension_appended};
use indicatif::ProgressBar;
use log::{debug, warn};
use oxicomp_core::Codec;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};

const RULE_WIDTH: usize = 60;

/// Options for the report command.
pub struct ReportOptions<'a> {
    pub algorithms: &'a [Algorithm],
    pub output: &'a Path,
    pub json: bool,
    pub keep: bool,
    pub progress: bool,
    pub codec: &'a CodecOptions,
}

/// Outcome of one compress/decompress cycle.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RunResult {
    pub file: String,
    pub original_size: u64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub compressed_size: Option<u64>,
    /// Compressed size divided by original size.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ratio: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub compress_ms: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub decompress_ms: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub identical: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// All runs of one algorithm.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AlgorithmSection {
    pub algorithm: String,
    pub title: String,
    pub runs: Vec<RunResult>,
}

/// A complete report.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Report {
    pub entropy: Vec<FileEntropy>,
    pub sections: Vec<AlgorithmSection>,
}

impl Report {
    /// True when every run succeeded and reproduced its input exactly.
    pub fn all_identical(&self) -> bool {
        self.sections
            .iter()
            .flat_map(|s| &s.runs)
            .all(|r| r.identical == Some(true))
    }
}

struct Measurement {
    compressed_size: u64,
    compress: Duration,
    decompress: Duration,
    identical: bool,
}

fn ms(duration: Duration) -> f64 {
    duration.as_secs_f64() * 1000.0
}

fn measure(
    codec: &dyn Codec,
    input: &Path,
    compressed: &Path,
    restored: &Path,
) -> oxicomp_core::Result<Measurement> {
    let start = Instant::now();
    codec.compress_file(input, compressed)?;
    let compress = start.elapsed();

    let compressed_size = fs::metadata(compressed)?.len();

    let start = Instant::now();
    codec.decompress_file(compressed, restored)?;
    let decompress = start.elapsed();

    let identical = fs::read(input)? == fs::read(restored)?;
    Ok(Measurement {
        compressed_size,
        compress,
        decompress,
        identical,
    })
}

/// Run one codec over one file, recording failures instead of returning them.
pub fn run_file(codec: &dyn Codec, input: &Path, keep: bool) -> RunResult {
    let compressed = with_extension_appended(input, codec.extension());
    let restored = with_extension_appended(&compressed, ".dec");
    let original_size = fs::metadata(input).map(|m| m.len()).unwrap_or(0);

    let outcome = measure(codec, input, &compressed, &restored);

    if !keep {
        for path in [&compressed, &restored] {
            if path.exists() {
                if let Err(e) = fs::remove_file(path) {
                    warn!("could not remove {}: {}", path.display(), e);
                }
            }
        }
    }

    let file = input.display().to_string();
    match outcome {
        Ok(m) => {
            debug!(
                "{}: {} {} -> {} bytes, identical: {}",
                codec.name(),
                file,
                original_size,
                m.compressed_size,
                m.identical
            );
            RunResult {
                file,
                original_size,
                compressed_size: Some(m.compressed_size),
                ratio: (original_size > 0).then(|| m.compressed_size as f64 / original_size as f64),
                compress_ms: Some(ms(m.compress)),
                decompress_ms: Some(ms(m.decompress)),
                identical: Some(m.identical),
                error: None,
            }
        }
        Err(e) => {
            warn!("{}: {} failed: {}", codec.name(), file, e);
            RunResult {
                file,
                original_size,
                compressed_size: None,
                ratio: None,
                compress_ms: None,
                decompress_ms: None,
                identical: None,
                error: Some(e.to_string()),
            }
        }
    }
}

/// Selected algorithms in the order given, without repeats; all when empty.
fn selected(algorithms: &[Algorithm]) -> Vec<Algorithm> {
    if algorithms.is_empty() {
        return Algorithm::ALL.to_vec();
    }
    let mut out = Vec::with_capacity(algorithms.len());
    for &a in algorithms {
        if !out.contains(&a) {
            out.push(a);
        }
    }
    out
}

/// Collect entropy figures and run every selected algorithm over every file.
///
/// Unreadable input files and invalid codec options abort the report; a
/// failing compression or decompression is recorded in its run.
pub fn build_report(
    files: &[PathBuf],
    options: &ReportOptions,
    progress: &ProgressBar,
) -> Result<Report, Box<dyn std::error::Error>> {
    let entropy = files
        .iter()
        .map(|path| FileEntropy::from_file(path))
        .collect::<Result<Vec<_>, _>>()?;

    let mut sections = Vec::new();
    for algorithm in selected(options.algorithms) {
        let codec = algorithm.codec(options.codec)?;
        let mut runs = Vec::with_capacity(files.len());
        for file in files {
            progress.set_message(format!("{} {}", algorithm.name(), file.display()));
            runs.push(run_file(codec.as_ref(), file, options.keep));
            progress.inc(1);
        }
        sections.push(AlgorithmSection {
            algorithm: algorithm.name().to_string(),
            title: algorithm.title().to_string(),
            runs,
        });
    }

    Ok(Report { entropy, sections })
}

fn section(f: &mut fmt::Formatter<'_>, title: &str) -> fmt::Result {
    writeln!(f)?;
    writeln!(f, "{}", title)?;
    writeln!(f, "{}", "-".repeat(RULE_WIDTH))
}

impl fmt::Display for RunResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "File: {}", self.file)?;
        writeln!(f, "Original size     : {} bytes", self.original_size)?;
        if let Some(error) = &self.error {
            writeln!(f, "Error             : {}", error)?;
            return Ok(());
        }
        if let Some(size) = self.compressed_size {
            writeln!(f, "Compressed size   : {} bytes", size)?;
        }
        match self.ratio {
            Some(ratio) => writeln!(f, "Compression ratio : {:.4}", ratio)?,
            None => writeln!(f, "Compression ratio : -")?,
        }
        if let Some(t) = self.compress_ms {
            writeln!(f, "Compression time  : {:.2} ms", t)?;
        }
        if let Some(t) = self.decompress_ms {
            writeln!(f, "Decompression time: {:.2} ms", t)?;
        }
        let integrity = match self.identical {
            Some(true) => "data identical",
            _ => "data differs",
        };
        writeln!(f, "File integrity    : {}", integrity)
    }
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        section(f, "ENTROPY")?;
        for entry in &self.entropy {
            writeln!(
                f,
                "File: {:<12} Entropy: {:.5} bits/symbol",
                entry.file, entry.entropy
            )?;
        }

        for s in &self.sections {
            section(f, &s.title)?;
            for run in &s.runs {
                write!(f, "{}", run)?;
                writeln!(f, "{}", "-".repeat(RULE_WIDTH))?;
            }
        }
        Ok(())
    }
}

pub fn cmd_report(
    files: &[PathBuf],
    options: &ReportOptions,
) -> Result<(), Box<dyn std::error::Error>> {
    let total = (files.len() * selected(options.algorithms).len()) as u64;
    let pb = create_progress_bar(total, options.progress && !options.json);

    let report = build_report(files, options, &pb)?;
    pb.finish_and_clear();

    let rendered = if options.json {
        serde_json::to_string_pretty(&report)?
    } else {
        report.to_string()
    };
    print!("{}", rendered);
    if options.json {
        println!();
    }

    fs::write(options.output, &rendered)?;
    println!();
    println!("Report saved to: {}", options.output.display());

    if !report.all_identical() {
        warn!("some runs failed or did not reproduce their input");
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn options<'a>(
        algorithms: &'a [Algorithm],
        output: &'a Path,
        keep: bool,
        codec: &'a CodecOptions,
    ) -> ReportOptions<'a> {
        ReportOptions {
            algorithms,
            output,
            json: false,
            keep,
            progress: false,
            codec,
        }
    }

    fn write_inputs(dir: &Path) -> Vec<PathBuf> {
        let binary = dir.join("sample.bin");
        let mut seed: u64 = 7;
        let bytes: Vec<u8> = (0..4096)
            .map(|_| {
                seed = seed.wrapping_mul(6364136223846793005).wrapping_add(1);
                (seed >> 33) as u8
            })
            .collect();
        fs::write(&binary, bytes).unwrap();

        let text = dir.join("sample.txt");
        fs::write(&text, "It was the best of times, it was the worst of times. ".repeat(50))
            .unwrap();
        vec![binary, text]
    }

    #[test]
    fn test_selected() {
        assert_eq!(selected(&[]), Algorithm::ALL.to_vec());
        assert_eq!(
            selected(&[Algorithm::Lzw, Algorithm::Huffman, Algorithm::Lzw]),
            vec![Algorithm::Lzw, Algorithm::Huffman]
        );
    }

    #[test]
    fn test_full_report() {
        let dir = tempfile::tempdir().unwrap();
        let files = write_inputs(dir.path());
        let output = dir.path().join("report.txt");
        let codec = CodecOptions::default();

        let report = build_report(
            &files,
            &options(&[], &output, false, &codec),
            &ProgressBar::hidden(),
        )
        .unwrap();

        assert_eq!(report.entropy.len(), 2);
        assert_eq!(report.sections.len(), 4);
        assert!(report.all_identical());
        for section in &report.sections {
            assert_eq!(section.runs.len(), 2);
            for run in &section.runs {
                assert!(run.error.is_none());
                assert!(run.ratio.unwrap() > 0.0);
            }
        }

        // Intermediate files are cleaned up.
        assert!(!dir.path().join("sample.txt.huff").exists());
        assert!(!dir.path().join("sample.txt.huff.dec").exists());

        let text = report.to_string();
        assert!(text.contains("ENTROPY"));
        assert!(text.contains("SHANNON-FANO CODING"));
        assert!(text.contains("File integrity    : data identical"));
    }

    #[test]
    fn test_keep_intermediate_files() {
        let dir = tempfile::tempdir().unwrap();
        let files = write_inputs(dir.path());
        let output = dir.path().join("report.txt");
        let codec = CodecOptions::default();

        build_report(
            &files[1..],
            &options(&[Algorithm::Lz77], &output, true, &codec),
            &ProgressBar::hidden(),
        )
        .unwrap();

        assert!(dir.path().join("sample.txt.lz77").exists());
        assert!(dir.path().join("sample.txt.lz77.dec").exists());
    }

    #[test]
    fn test_failed_run_is_recorded() {
        let dir = tempfile::tempdir().unwrap();
        let empty = dir.path().join("empty");
        fs::write(&empty, b"").unwrap();
        let output = dir.path().join("report.txt");
        let codec = CodecOptions::default();

        let report = build_report(
            &[empty],
            &options(&[Algorithm::Huffman, Algorithm::ShannonFano], &output, false, &codec),
            &ProgressBar::hidden(),
        )
        .unwrap();

        let huffman = &report.sections[0].runs[0];
        assert!(huffman.error.is_some());
        assert_eq!(huffman.identical, None);

        // An empty input is a valid Shannon-Fano container.
        let shannon_fano = &report.sections[1].runs[0];
        assert_eq!(shannon_fano.identical, Some(true));
        assert_eq!(shannon_fano.ratio, None);

        assert!(!report.all_identical());
        assert!(report.to_string().contains("Error             :"));
    }

    #[test]
    fn test_report_written_as_json() {
        let dir = tempfile::tempdir().unwrap();
        let files = write_inputs(dir.path());
        let output = dir.path().join("report.json");
        let codec = CodecOptions::default();
        let mut opts = options(&[Algorithm::Lzw], &output, false, &codec);
        opts.json = true;

        cmd_report(&files, &opts).unwrap();

        let report: Report = serde_json::from_str(&fs::read_to_string(&output).unwrap()).unwrap();
        assert_eq!(report.sections.len(), 1);
        assert_eq!(report.sections[0].algorithm, "lzw");
        assert!(report.all_identical());
    }

    #[test]
    fn test_missing_input_aborts() {
        let dir = tempfile::tempdir().unwrap();
        let output = dir.path().join("report.txt");
        let codec = CodecOptions::default();
        let result = build_report(
            &[dir.path().join("missing")],
            &options(&[], &output, false, &codec),
            &ProgressBar::hidden(),
        );
        assert!(result.is_err());
    }
}
