//! Entropy command implementation.

use oxicomp_core::FrequencyTable;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Byte statistics of one file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FileEntropy {
    pub file: String,
    pub size: u64,
    pub distinct_symbols: usize,
    /// Shannon entropy in bits per symbol.
    pub entropy: f64,
}

impl FileEntropy {
    pub fn from_file(path: &Path) -> oxicomp_core::Result<Self> {
        let table = FrequencyTable::from_file(path)?;
        Ok(Self {
            file: path.display().to_string(),
            size: table.total(),
            distinct_symbols: table.distinct(),
            entropy: table.entropy(),
        })
    }
}

pub fn cmd_entropy(files: &[PathBuf], json: bool) -> Result<(), Box<dyn std::error::Error>> {
    let stats = files
        .iter()
        .map(|path| FileEntropy::from_file(path))
        .collect::<Result<Vec<_>, _>>()?;

    if json {
        println!("{}", serde_json::to_string_pretty(&stats)?);
        return Ok(());
    }

    println!("{:>12} {:>8} {:>12}  File", "Size", "Symbols", "Entropy");
    println!("{}", "-".repeat(60));
    for entry in &stats {
        println!(
            "{:>12} {:>8} {:>12.5}  {}",
            entry.size, entry.distinct_symbols, entry.entropy, entry.file
        );
    }
    Ok(())
}
