//! Huffman tree construction and code-length extraction.
//!
//! Nodes live in a single arena and refer to their children by index, so the
//! whole tree is dropped in one go and there is no pointer ownership to manage.
//!
//! # Tie-breaking
//!
//! The priority queue orders nodes by `(weight, node id)` ascending. Leaves are
//! created in ascending symbol order and internal nodes are appended after
//! them, so among equal weights the earliest-created node is always taken
//! first, and the first node taken becomes the left child.

use std::cmp::Ordering;
use std::collections::BinaryHeap;

use log::trace;

use crate::canonical::{CodeLength, CodeLengths};
use crate::error::{CodeTableError, Result};
use crate::frequency::FrequencyTable;

/// Index of a node within its tree's arena.
pub type NodeId = usize;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    Leaf {
        symbol: u8,
        weight: u64,
    },
    Internal {
        weight: u64,
        left: NodeId,
        right: NodeId,
    },
}

impl Node {
    pub fn weight(&self) -> u64 {
        match self {
            Node::Leaf { weight, .. } | Node::Internal { weight, .. } => *weight,
        }
    }
}

/// Queue entry; the heap is a max-heap, so the ordering is reversed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Pending {
    weight: u64,
    node: NodeId,
}

impl PartialOrd for Pending {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Pending {
    fn cmp(&self, other: &Self) -> Ordering {
        (other.weight, other.node).cmp(&(self.weight, self.node))
    }
}

/// A Huffman tree built from symbol frequencies.
#[derive(Debug, Clone)]
pub struct HuffmanTree {
    nodes: Vec<Node>,
    root: NodeId,
}

impl HuffmanTree {
    /// Greedily merge the two lightest nodes until one root remains.
    ///
    /// # Errors
    /// `CodeTableError::Empty` if no symbol has a non-zero count.
    pub fn build(frequencies: &FrequencyTable) -> Result<Self> {
        let leaves = frequencies.distinct();
        let mut nodes = Vec::with_capacity((2 * leaves).saturating_sub(1));
        let mut queue = BinaryHeap::with_capacity(leaves);

        for (symbol, weight) in frequencies.iter() {
            queue.push(Pending {
                weight,
                node: nodes.len(),
            });
            nodes.push(Node::Leaf { symbol, weight });
        }

        let root = loop {
            let first = queue.pop().ok_or(CodeTableError::Empty)?;
            let Some(second) = queue.pop() else {
                break first.node;
            };

            let weight = first.weight + second.weight;
            queue.push(Pending {
                weight,
                node: nodes.len(),
            });
            nodes.push(Node::Internal {
                weight,
                left: first.node,
                right: second.node,
            });
        };

        trace!("built tree with {} leaves, {} nodes", leaves, nodes.len());
        Ok(Self { nodes, root })
    }

    pub fn root(&self) -> NodeId {
        self.root
    }

    pub fn node(&self, id: NodeId) -> &Node {
        &self.nodes[id]
    }

    /// Total weight, i.e. the number of symbols the tree was built from.
    pub fn weight(&self) -> u64 {
        self.nodes[self.root].weight()
    }

    /// Depth of every leaf, sorted by `(length, symbol)`.
    ///
    /// Walks the tree with an explicit stack so very skewed trees cannot
    /// exhaust the call stack. A tree that is a single leaf (empty input, only
    /// the sentinel) reports length 1 so the symbol still gets a one-bit code.
    pub fn code_lengths(&self) -> CodeLengths {
        let mut entries = Vec::new();
        let mut stack = vec![(self.root, 0u32)];

        while let Some((id, depth)) = stack.pop() {
            match &self.nodes[id] {
                Node::Leaf { symbol, .. } => {
                    entries.push(CodeLength::new(*symbol, depth.max(1)));
                }
                Node::Internal { left, right, .. } => {
                    stack.push((*right, depth + 1));
                    stack.push((*left, depth + 1));
                }
            }
        }

        CodeLengths::from_unsorted(entries)
    }
}
