//! Shannon-Fano code construction.
//!
//! Symbols are sorted by descending frequency and the list is bisected where
//! the running sum first reaches half of the range total. The left part
//! extends its prefix with `0`, the right part with `1`, until every range
//! holds a single symbol.
//!
//! The bisection uses an explicit work stack of `(range, prefix)` entries, so
//! a degenerate distribution 255 levels deep costs heap, not call stack.

use oxicomp_core::{Code, CodeTable, FrequencyTable};
use std::ops::Range;

/// Symbols present in `frequencies`, heaviest first.
///
/// Equal frequencies keep ascending symbol order.
pub fn sorted_symbols(frequencies: &FrequencyTable) -> Vec<(u8, u64)> {
    let mut symbols: Vec<(u8, u64)> = frequencies.symbols().collect();
    // Stable, so ties stay in ascending symbol order.
    symbols.sort_by(|a, b| b.1.cmp(&a.1));
    symbols
}

/// Index one past the first position where the running sum reaches
/// `total / 2`, clamped so that both halves are non-empty.
///
/// `weights` must hold at least two entries.
pub fn split_point(weights: &[(u8, u64)]) -> usize {
    let total: u64 = weights.iter().map(|&(_, count)| count).sum();
    let half = total / 2;

    let mut running = 0u64;
    let mut split = weights.len();
    for (i, &(_, count)) in weights.iter().enumerate() {
        running += count;
        if running >= half {
            split = i + 1;
            break;
        }
    }

    split.min(weights.len() - 1)
}

/// Build the Shannon-Fano code table for a frequency table.
///
/// An empty table yields an empty code table; a single symbol gets the code
/// `0`.
pub fn build_code_table(frequencies: &FrequencyTable) -> CodeTable {
    let symbols = sorted_symbols(frequencies);
    let mut table = CodeTable::new();
    if symbols.is_empty() {
        return table;
    }

    let mut stack: Vec<(Range<usize>, Code)> = vec![(0..symbols.len(), Code::new())];
    while let Some((range, prefix)) = stack.pop() {
        let part = &symbols[range.clone()];
        if let [(symbol, _)] = part {
            let code = if prefix.is_empty() {
                Code::single()
            } else {
                prefix
            };
            table.insert(*symbol, code);
            continue;
        }

        let split = range.start + split_point(part);
        stack.push((split..range.end, prefix.with_bit(true)));
        stack.push((range.start..split, prefix.with_bit(false)));
    }

    table
}
