//! Binary code trees stored as an index arena.
//!
//! Nodes live in one `Vec` and refer to their children by index, so building
//! a tree, assigning codes and walking the tree while decoding are all plain
//! loops over indices. No traversal recurses, which keeps deep trees produced
//! by highly skewed frequency distributions safe.
//!
//! Two kinds of trees are built here:
//!
//! - encoder trees, assembled bottom-up with [`CodeTree::push_leaf`] and
//!   [`CodeTree::push_internal`] and turned into codes with
//!   [`CodeTree::code_table`];
//! - decoder trees, grown top-down from a [`CodeTable`] with
//!   [`CodeTree::from_code_table`] and walked bit by bit.

use crate::bitstream::BitReader;
use crate::code::{Code, CodeTable};
use crate::error::{OxiCompError, Result};
use std::io::Read;

/// A node of a [`CodeTree`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Node {
    /// A leaf carrying a symbol.
    Leaf(u8),
    /// An internal node. Children are `None` only in partially grown decoder
    /// trees.
    Internal {
        /// Child reached by a `0` bit.
        left: Option<usize>,
        /// Child reached by a `1` bit.
        right: Option<usize>,
    },
}

impl Node {
    fn child(&self, bit: bool) -> Option<usize> {
        match *self {
            Node::Leaf(_) => None,
            Node::Internal { left, right } => {
                if bit {
                    right
                } else {
                    left
                }
            }
        }
    }
}

/// A binary code tree.
#[derive(Debug, Clone, Default)]
pub struct CodeTree {
    nodes: Vec<Node>,
    root: Option<usize>,
}

impl CodeTree {
    /// Create an empty arena with room for `capacity` nodes.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            nodes: Vec::with_capacity(capacity),
            root: None,
        }
    }

    /// Add a leaf and return its index.
    pub fn push_leaf(&mut self, symbol: u8) -> usize {
        self.nodes.push(Node::Leaf(symbol));
        self.nodes.len() - 1
    }

    /// Add an internal node over two existing nodes and return its index.
    pub fn push_internal(&mut self, left: usize, right: usize) -> usize {
        debug_assert!(left < self.nodes.len() && right < self.nodes.len());
        self.nodes.push(Node::Internal {
            left: Some(left),
            right: Some(right),
        });
        self.nodes.len() - 1
    }

    /// Mark `index` as the root.
    pub fn set_root(&mut self, index: usize) {
        debug_assert!(index < self.nodes.len());
        self.root = Some(index);
    }

    /// Index of the root, if the tree has one.
    pub fn root(&self) -> Option<usize> {
        self.root
    }

    /// Node at `index`.
    pub fn node(&self, index: usize) -> Option<&Node> {
        self.nodes.get(index)
    }

    /// Number of nodes in the arena.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Whether the arena has no nodes.
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Number of leaves reachable from the root.
    pub fn leaf_count(&self) -> usize {
        let mut count = 0;
        let mut stack: Vec<usize> = self.root.into_iter().collect();
        while let Some(index) = stack.pop() {
            match self.nodes[index] {
                Node::Leaf(_) => count += 1,
                Node::Internal { left, right } => stack.extend(left.into_iter().chain(right)),
            }
        }
        count
    }

    /// Assign every leaf its root-to-leaf path (`0` = left, `1` = right).
    ///
    /// A tree whose root is itself a leaf gives that symbol the code `0`.
    pub fn code_table(&self) -> CodeTable {
        let mut table = CodeTable::new();
        let mut stack: Vec<(usize, Code)> = self
            .root
            .map(|root| (root, Code::new()))
            .into_iter()
            .collect();

        while let Some((index, prefix)) = stack.pop() {
            match self.nodes[index] {
                Node::Leaf(symbol) => {
                    let code = if prefix.is_empty() {
                        Code::single()
                    } else {
                        prefix
                    };
                    table.insert(symbol, code);
                }
                Node::Internal { left, right } => {
                    // Right is pushed first so the left subtree is visited first.
                    if let Some(right) = right {
                        stack.push((right, prefix.with_bit(true)));
                    }
                    if let Some(left) = left {
                        stack.push((left, prefix.with_bit(false)));
                    }
                }
            }
        }

        table
    }

    /// Grow a decoder tree holding every code of `table`.
    ///
    /// Fails when one code is a prefix of another, since the decoder could
    /// not tell the two symbols apart.
    pub fn from_code_table(table: &CodeTable) -> Result<Self> {
        let mut tree = Self::with_capacity(table.len() * 2);
        tree.nodes.push(Node::Internal {
            left: None,
            right: None,
        });
        tree.root = Some(0);

        for (symbol, code) in table.iter() {
            tree.insert(symbol, code)?;
        }

        Ok(tree)
    }

    /// Insert one code path into a decoder tree, creating internal nodes for
    /// unseen prefixes.
    pub fn insert(&mut self, symbol: u8, code: &Code) -> Result<()> {
        let conflict = || {
            OxiCompError::invalid_container(format!(
                "code {code} for symbol {symbol} conflicts with another code"
            ))
        };

        if code.is_empty() {
            return Err(OxiCompError::invalid_container(format!(
                "empty code for symbol {symbol}"
            )));
        }

        let mut current = match self.root {
            Some(root) => root,
            None => {
                self.nodes.push(Node::Internal {
                    left: None,
                    right: None,
                });
                self.root = Some(self.nodes.len() - 1);
                self.nodes.len() - 1
            }
        };

        let last = code.len() - 1;
        for (depth, bit) in code.iter().enumerate() {
            let (left, right) = match self.nodes[current] {
                Node::Leaf(_) => return Err(conflict()),
                Node::Internal { left, right } => (left, right),
            };
            let existing = if bit { right } else { left };

            let next = match existing {
                // The path already exists, as a leaf or as a longer code.
                Some(_) if depth == last => return Err(conflict()),
                Some(child) => child,
                None => {
                    let node = if depth == last {
                        Node::Leaf(symbol)
                    } else {
                        Node::Internal {
                            left: None,
                            right: None,
                        }
                    };
                    self.nodes.push(node);
                    let child = self.nodes.len() - 1;
                    self.nodes[current] = if bit {
                        Node::Internal {
                            left,
                            right: Some(child),
                        }
                    } else {
                        Node::Internal {
                            left: Some(child),
                            right,
                        }
                    };
                    child
                }
            };
            current = next;
        }

        Ok(())
    }

    /// Follow one bit from `index`.
    ///
    /// Returns `None` when the bit leads nowhere.
    #[inline]
    pub fn step(&self, index: usize, bit: bool) -> Option<usize> {
        self.nodes.get(index).and_then(|node| node.child(bit))
    }

    /// Symbol of the node at `index` if it is a leaf.
    #[inline]
    pub fn symbol(&self, index: usize) -> Option<u8> {
        match self.nodes.get(index) {
            Some(Node::Leaf(symbol)) => Some(*symbol),
            _ => None,
        }
    }

    /// Read bits from `reader` until a leaf is reached and return its symbol.
    pub fn decode_symbol<R: Read>(&self, reader: &mut BitReader<R>) -> Result<u8> {
        let mut current = self
            .root
            .ok_or_else(|| OxiCompError::invalid_container("code tree has no root"))?;

        loop {
            let bit = reader.read_bit()?;
            current = self.step(current, bit).ok_or_else(|| {
                OxiCompError::corrupt(reader.bits_read(), "bit sequence matches no code")
            })?;
            if let Some(symbol) = self.symbol(current) {
                return Ok(symbol);
            }
        }
    }
}
