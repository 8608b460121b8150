//! The Huffman code tree.

use crate::freq::FrequencyTable;
use std::cmp::Ordering;
use std::collections::BinaryHeap;

/// A node in the Huffman code tree.
///
/// Leaves carry a symbol; internal nodes carry their two children. A
/// symbol's code is the path from the root to its leaf, reading a left
/// edge as bit 0 and a right edge as bit 1.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HuffTree {
    /// A leaf holding one symbol of the alphabet.
    Leaf {
        /// The symbol (a byte value, or the end-of-stream symbol).
        symbol: u16,
        /// Combined occurrence count. Zero for trees decoded from a
        /// header, where counts are not transmitted.
        weight: u64,
    },
    /// An internal node joining two subtrees.
    Internal {
        /// Sum of the children's weights.
        weight: u64,
        /// Subtree reached by bit 0.
        left: Box<HuffTree>,
        /// Subtree reached by bit 1.
        right: Box<HuffTree>,
    },
}

/// Heap entry wrapping a subtree under construction.
///
/// Ordering is by weight, with the insertion sequence number breaking
/// ties. Seeding the leaves in ascending symbol order therefore makes
/// the built tree a pure function of the frequency table.
struct HeapEntry {
    weight: u64,
    seq: u32,
    node: HuffTree,
}

impl PartialEq for HeapEntry {
    fn eq(&self, other: &Self) -> bool {
        self.weight == other.weight && self.seq == other.seq
    }
}

impl Eq for HeapEntry {}

impl PartialOrd for HeapEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for HeapEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reversed so BinaryHeap pops the lightest entry first.
        (other.weight, other.seq).cmp(&(self.weight, self.seq))
    }
}

impl HuffTree {
    /// Build the code tree for a frequency table.
    ///
    /// Repeatedly joins the two lightest subtrees until one remains,
    /// with the first subtree removed becoming the left child. The
    /// end-of-stream symbol always has a nonzero count, so the result
    /// is at minimum a single leaf (for empty input).
    pub fn from_frequencies(freq: &FrequencyTable) -> Self {
        let mut heap = BinaryHeap::new();
        let mut seq = 0u32;

        for (symbol, weight) in freq.iter() {
            heap.push(HeapEntry {
                weight,
                seq,
                node: HuffTree::Leaf { symbol, weight },
            });
            seq += 1;
        }

        while heap.len() > 1 {
            let a = heap.pop();
            let b = heap.pop();
            if let (Some(a), Some(b)) = (a, b) {
                let weight = a.weight + b.weight;
                heap.push(HeapEntry {
                    weight,
                    seq,
                    node: HuffTree::Internal {
                        weight,
                        left: Box::new(a.node),
                        right: Box::new(b.node),
                    },
                });
                seq += 1;
            }
        }

        match heap.pop() {
            Some(entry) => entry.node,
            // Unreachable in practice: the table always contains the
            // end-of-stream symbol.
            None => HuffTree::Leaf {
                symbol: crate::EOF_SYMBOL,
                weight: 1,
            },
        }
    }

    /// Total weight of this subtree.
    pub fn weight(&self) -> u64 {
        match self {
            HuffTree::Leaf { weight, .. } => *weight,
            HuffTree::Internal { weight, .. } => *weight,
        }
    }

    /// True if this node is a leaf.
    pub fn is_leaf(&self) -> bool {
        matches!(self, HuffTree::Leaf { .. })
    }

    /// Number of leaves in this subtree.
    pub fn leaf_count(&self) -> usize {
        match self {
            HuffTree::Leaf { .. } => 1,
            HuffTree::Internal { left, right, .. } => left.leaf_count() + right.leaf_count(),
        }
    }

    /// Depth of the deepest leaf, in edges. Zero for a single leaf.
    pub fn depth(&self) -> usize {
        match self {
            HuffTree::Leaf { .. } => 0,
            HuffTree::Internal { left, right, .. } => 1 + left.depth().max(right.depth()),
        }
    }
}
