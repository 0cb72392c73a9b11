//! OxiComp CLI - classical lossless compressors
//!
//! Compresses and decompresses single files with Huffman, Shannon-Fano, LZ77
//! or LZW, reports byte entropy, and benchmarks the codecs against each other.

mod algorithm;
mod commands;
mod utils;

use algorithm::{Algorithm, CodecOptions};
use clap::{Parser, Subcommand};
use commands::{ReportOptions, cmd_compress, cmd_decompress, cmd_entropy, cmd_report};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "oxicomp")]
#[command(author, version, about = "Classical lossless compressors in Pure Rust")]
#[command(long_about = "
OxiComp implements Huffman, Shannon-Fano, LZ77 and LZW compression.

Examples:
  oxicomp compress huffman book.txt
  oxicomp decompress huffman book.txt.huff -o book.txt
  oxicomp compress lz77 --window 255 --max-match 32 image.bin
  oxicomp entropy sample.bin sample.txt
  oxicomp report sample.bin sample.txt --output report.txt
  oxicomp report sample.txt -a huffman -a lzw --json
")]
struct Cli {
    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Compress a file
    #[command(alias = "c")]
    Compress {
        /// Compression algorithm
        #[arg(value_enum)]
        algorithm: Algorithm,

        /// File to compress
        input: PathBuf,

        /// Output file (defaults to INPUT plus the codec extension)
        #[arg(short, long)]
        output: Option<PathBuf>,

        #[command(flatten)]
        options: CodecOptions,
    },

    /// Decompress a file
    #[command(alias = "d")]
    Decompress {
        /// Algorithm the file was compressed with
        #[arg(value_enum)]
        algorithm: Algorithm,

        /// File to decompress
        input: PathBuf,

        /// Output file (defaults to INPUT without the codec extension)
        #[arg(short, long)]
        output: Option<PathBuf>,

        #[command(flatten)]
        options: CodecOptions,
    },

    /// Show the byte entropy of files
    #[command(alias = "e")]
    Entropy {
        /// Files to analyze
        #[arg(required = true)]
        files: Vec<PathBuf>,

        /// Output as JSON (machine-readable)
        #[arg(short, long)]
        json: bool,
    },

    /// Compress, decompress and verify files with every algorithm
    #[command(alias = "r")]
    Report {
        /// Files to include in the report
        #[arg(required = true)]
        files: Vec<PathBuf>,

        /// Algorithms to run (all if not given)
        #[arg(short, long, value_enum)]
        algorithm: Vec<Algorithm>,

        /// Where to write the report
        #[arg(short, long, default_value = "report.txt")]
        output: PathBuf,

        /// Write the report as JSON
        #[arg(short, long)]
        json: bool,

        /// Keep the compressed and decompressed files
        #[arg(short, long)]
        keep: bool,

        /// Show progress bar
        #[arg(short = 'P', long, action = clap::ArgAction::Set, default_value_t = true)]
        progress: bool,

        #[command(flatten)]
        options: CodecOptions,
    },
}

fn main() {
    let cli = Cli::parse();
    utils::init_logger(cli.verbose);

    let result = match cli.command {
        Commands::Compress {
            algorithm,
            input,
            output,
            options,
        } => cmd_compress(algorithm, &input, output.as_deref(), &options),
        Commands::Decompress {
            algorithm,
            input,
            output,
            options,
        } => cmd_decompress(algorithm, &input, output.as_deref(), &options),
        Commands::Entropy { files, json } => cmd_entropy(&files, json),
        Commands::Report {
            files,
            algorithm,
            output,
            json,
            keep,
            progress,
            options,
        } => cmd_report(
            &files,
            &ReportOptions {
                algorithms: &algorithm,
                output: &output,
                json,
                keep,
                progress,
                codec: &options,
            },
        ),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_report_algorithms() {
        let cli = Cli::try_parse_from([
            "oxicomp", "report", "a.bin", "b.txt", "-a", "huffman", "-a", "shannon-fano", "--keep",
        ])
        .unwrap();
        match cli.command {
            Commands::Report {
                files,
                algorithm,
                keep,
                json,
                output,
                ..
            } => {
                assert_eq!(files.len(), 2);
                assert_eq!(algorithm, vec![Algorithm::Huffman, Algorithm::ShannonFano]);
                assert!(keep);
                assert!(!json);
                assert_eq!(output, PathBuf::from("report.txt"));
            }
            _ => panic!("expected report command"),
        }
    }

    #[test]
    fn test_parse_codec_options() {
        let cli = Cli::try_parse_from([
            "oxicomp",
            "-vv",
            "compress",
            "lz77",
            "in.bin",
            "--window",
            "100",
            "--max-match",
            "20",
        ])
        .unwrap();
        assert_eq!(cli.verbose, 2);
        match cli.command {
            Commands::Compress {
                algorithm, options, ..
            } => {
                assert_eq!(algorithm, Algorithm::Lz77);
                assert_eq!(options.window, 100);
                assert_eq!(options.max_match, 20);
            }
            _ => panic!("expected compress command"),
        }
    }

    #[test]
    fn test_unknown_algorithm_rejected() {
        assert!(Cli::try_parse_from(["oxicomp", "compress", "zip", "in.bin"]).is_err());
    }
}
