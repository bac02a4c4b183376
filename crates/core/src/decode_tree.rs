//! Decode tree rebuilt from canonical codes.
//!
//! The decoder never sees the encoder's Huffman tree. It rebuilds an
//! equivalent binary tree by threading every code in from the root: a `0` bit
//! goes left, a `1` bit goes right, and the last bit ends in a leaf.

use crate::canonical::CodeTable;
use crate::error::{CodeTableError, Result};
use crate::tree::NodeId;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DecodeNode {
    Branch {
        left: Option<NodeId>,
        right: Option<NodeId>,
    },
    Leaf {
        symbol: u8,
    },
}

/// Binary decode tree; the root is always node 0 and always a branch.
#[derive(Debug, Clone)]
pub struct DecodeTree {
    nodes: Vec<DecodeNode>,
}

const ROOT: NodeId = 0;

impl DecodeTree {
    /// Build the tree whose root-to-leaf paths are exactly the given codes.
    ///
    /// # Errors
    /// `CodeTableError::PrefixConflict` if a code would pass through another
    /// symbol's leaf or end on a node that already exists; a node is never
    /// both a branch and a leaf.
    pub fn from_codes(table: &CodeTable) -> Result<Self> {
        let mut nodes = vec![DecodeNode::Branch {
            left: None,
            right: None,
        }];

        for (symbol, code) in table.iter() {
            let Some((last, path)) = code.split_last() else {
                return Err(CodeTableError::ZeroLength { symbol }.into());
            };

            let mut current = ROOT;
            for bit in path.iter().by_vals() {
                current = match child(&nodes, current, bit, symbol)? {
                    Some(next) => next,
                    None => attach(
                        &mut nodes,
                        current,
                        bit,
                        DecodeNode::Branch {
                            left: None,
                            right: None,
                        },
                    ),
                };
            }

            if child(&nodes, current, *last, symbol)?.is_some() {
                return Err(CodeTableError::PrefixConflict { symbol }.into());
            }
            attach(&mut nodes, current, *last, DecodeNode::Leaf { symbol });
        }

        Ok(Self { nodes })
    }

    pub fn root(&self) -> NodeId {
        ROOT
    }

    pub fn node(&self, id: NodeId) -> &DecodeNode {
        &self.nodes[id]
    }

    /// Follow one bit from `from`; `None` if that branch was never filled.
    pub fn step(&self, from: NodeId, bit: bool) -> Option<NodeId> {
        match self.nodes[from] {
            DecodeNode::Branch { left, right } => {
                if bit {
                    right
                } else {
                    left
                }
            }
            DecodeNode::Leaf { .. } => None,
        }
    }

    /// Symbol stored at `id`, if it is a leaf.
    pub fn symbol(&self, id: NodeId) -> Option<u8> {
        match self.nodes[id] {
            DecodeNode::Leaf { symbol } => Some(symbol),
            DecodeNode::Branch { .. } => None,
        }
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }
}

/// Existing child of branch `parent` in direction `bit`.
fn child(nodes: &[DecodeNode], parent: NodeId, bit: bool, symbol: u8) -> Result<Option<NodeId>> {
    match nodes[parent] {
        DecodeNode::Branch { left, right } => Ok(if bit { right } else { left }),
        DecodeNode::Leaf { .. } => Err(CodeTableError::PrefixConflict { symbol }.into()),
    }
}

/// Append `node` and hang it under `parent`. The slot must be empty.
fn attach(nodes: &mut Vec<DecodeNode>, parent: NodeId, bit: bool, node: DecodeNode) -> NodeId {
    let id = nodes.len();
    nodes.push(node);
    if let DecodeNode::Branch { left, right } = &mut nodes[parent] {
        if bit {
            *right = Some(id);
        } else {
            *left = Some(id);
        }
    }
    id
}
