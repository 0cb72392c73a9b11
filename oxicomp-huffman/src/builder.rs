//! Huffman tree construction.
//!
//! The classic bottom-up merge: every present symbol starts as a leaf in a
//! min-priority queue keyed by frequency, and the two lightest nodes are
//! merged until a single root remains.
//!
//! # Tie-breaking
//!
//! Nodes with equal frequency leave the queue in insertion order (FIFO).
//! Leaves are inserted in ascending symbol order and every merged node gets
//! the next sequence number, so the resulting code lengths, and therefore the
//! container bytes, are fully determined by the input.

use oxicomp_core::{CodeTable, CodeTree, FrequencyTable};
use std::cmp::Reverse;
use std::collections::BinaryHeap;

/// Queue entry: (frequency, insertion sequence, arena index).
type QueueEntry = Reverse<(u64, u64, usize)>;

/// Build the Huffman tree for a frequency table.
///
/// Returns `None` when the table is empty. A table with a single symbol
/// yields a tree whose root is that symbol's leaf.
pub fn build_tree(frequencies: &FrequencyTable) -> Option<CodeTree> {
    let distinct = frequencies.distinct();
    if distinct == 0 {
        return None;
    }

    let mut tree = CodeTree::with_capacity(2 * distinct - 1);
    let mut queue: BinaryHeap<QueueEntry> = BinaryHeap::with_capacity(distinct);
    let mut sequence = 0u64;

    for (symbol, count) in frequencies.symbols() {
        let leaf = tree.push_leaf(symbol);
        queue.push(Reverse((count, sequence, leaf)));
        sequence += 1;
    }

    while queue.len() > 1 {
        let Reverse((left_freq, _, left)) = queue.pop()?;
        let Reverse((right_freq, _, right)) = queue.pop()?;

        let merged = tree.push_internal(left, right);
        queue.push(Reverse((left_freq + right_freq, sequence, merged)));
        sequence += 1;
    }

    let Reverse((_, _, root)) = queue.pop()?;
    tree.set_root(root);
    Some(tree)
}

/// Build the Huffman code table for a frequency table.
///
/// An empty table yields an empty code table; a single symbol gets the code
/// `0`.
pub fn build_code_table(frequencies: &FrequencyTable) -> CodeTable {
    build_tree(frequencies)
        .map(|tree| tree.code_table())
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn code_of(table: &CodeTable, symbol: u8) -> String {
        table.get(symbol).map(ToString::to_string).unwrap_or_default()
    }

    #[test]
    fn test_empty_table() {
        assert!(build_tree(&FrequencyTable::new()).is_none());
        assert!(build_code_table(&FrequencyTable::new()).is_empty());
    }

    #[test]
    fn test_single_symbol() {
        let freqs = FrequencyTable::from_bytes(b"AAAAAAAAAA");
        let tree = build_tree(&freqs).unwrap();
        assert_eq!(tree.len(), 1);

        let codes = build_code_table(&freqs);
        assert_eq!(codes.len(), 1);
        assert_eq!(code_of(&codes, b'A'), "0");
    }

    #[test]
    fn test_two_symbols() {
        let freqs = FrequencyTable::from_bytes(b"aab");
        let codes = build_code_table(&freqs);
        // b is lighter, leaves the queue first and becomes the left child.
        assert_eq!(code_of(&codes, b'b'), "0");
        assert_eq!(code_of(&codes, b'a'), "1");
    }

    #[test]
    fn test_fifo_tie_break() {
        // a, b, c, d all weigh 1: (a,b) merge first, then (c,d), then the two
        // pairs in creation order.
        let freqs = FrequencyTable::from_bytes(b"abcd");
        let codes = build_code_table(&freqs);
        assert_eq!(code_of(&codes, b'a'), "00");
        assert_eq!(code_of(&codes, b'b'), "01");
        assert_eq!(code_of(&codes, b'c'), "10");
        assert_eq!(code_of(&codes, b'd'), "11");
    }

    #[test]
    fn test_classic_lengths() {
        // Frequencies 45, 13, 12, 16, 9, 5 give lengths 1, 3, 3, 3, 4, 4.
        let mut freqs = FrequencyTable::new();
        for (symbol, count) in [(b'a', 45), (b'b', 13), (b'c', 12), (b'd', 16), (b'e', 9), (b'f', 5)]
        {
            for _ in 0..count {
                freqs.increment(symbol);
            }
        }

        let codes = build_code_table(&freqs);
        let lengths: Vec<usize> = [b'a', b'b', b'c', b'd', b'e', b'f']
            .iter()
            .map(|&s| codes.get(s).map(|c| c.len()).unwrap_or(0))
            .collect();
        assert_eq!(lengths, vec![1, 3, 3, 3, 4, 4]);
        assert!(codes.is_prefix_free());
        assert_eq!(codes.encoded_bits(&freqs), 224);
    }

    #[test]
    fn test_all_symbols_prefix_free() {
        let data: Vec<u8> = (0..10_000u32).map(|i| ((i * i) % 256) as u8).collect();
        let freqs = FrequencyTable::from_bytes(&data);
        let codes = build_code_table(&freqs);
        assert_eq!(codes.len(), freqs.distinct());
        assert!(codes.is_prefix_free());
    }

    #[test]
    fn test_skewed_distribution_depth() {
        // Fibonacci weights produce the deepest possible tree.
        let mut freqs = FrequencyTable::new();
        let (mut a, mut b) = (1u64, 1u64);
        for symbol in 0..20u8 {
            for _ in 0..a {
                freqs.increment(symbol);
            }
            let next = a + b;
            a = b;
            b = next;
        }

        let codes = build_code_table(&freqs);
        assert_eq!(codes.max_len(), 19);
        assert!(codes.is_prefix_free());
    }
}
