use std::collections::BTreeMap;
use std::mem;

use bitvec::prelude::*;
use log::debug;

use crate::huffman::code_table::CodeTable;
use crate::huffman::frequencies::FrequencyList;
use crate::{Code, Freq, Symbol, MAX_SYMBOLS};

/// What a [`Node`] of the tree is: either a symbol or the merge of two subtrees, referenced by
/// their index in the arena.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NodeKind {
    Leaf(Symbol),
    Internal { left: usize, right: usize },
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Node {
    /// The frequency of the symbol, or the sum of the frequencies of the two children.
    pub freq: Freq,
    pub kind: NodeKind,
}

/// A Huffman tree stored as an arena of [`Node`]s.
///
/// Leaves occupy the first positions, in the order of the [`FrequencyList`] the tree was built
/// from; every merge appends a new internal node, so the root, when present, is the last node.
#[derive(Clone, Debug, Default)]
pub struct HuffmanTree {
    nodes: Vec<Node>,

    root: Option<usize>,

    /// The root-to-leaf path of every symbol, recorded while merging.
    codes: BTreeMap<Symbol, Code>,
}

impl HuffmanTree {
    /// Builds the tree by repeatedly merging the two least frequent nodes.
    ///
    /// The second least frequent node becomes the left child, the least frequent one the right
    /// child. A list with a single symbol gives a tree made of that leaf only, whose code is the
    /// single bit `0`.
    pub fn build(freqs: &FrequencyList) -> Self {
        let mut nodes: Vec<Node> = freqs
            .entries()
            .iter()
            .map(|entry| Node {
                freq: entry.freq,
                kind: NodeKind::Leaf(entry.symbol),
            })
            .collect();

        if nodes.is_empty() {
            return Self::default();
        }

        // the symbols below each node, and the path of each symbol from its leaf upwards
        let mut below: Vec<Vec<Symbol>> = freqs.symbols().map(|symbol| vec![symbol]).collect();
        let mut paths: Vec<Code> = vec![Code::new(); MAX_SYMBOLS];

        // indexes of the nodes still to be merged, in ascending order of frequency
        let mut active: Vec<usize> = (0..nodes.len()).collect();

        while active.len() > 1 {
            let right = active[0];
            let left = active[1];
            active.drain(..2);

            let freq = nodes[left].freq + nodes[right].freq;
            let index = nodes.len();
            nodes.push(Node {
                freq,
                kind: NodeKind::Internal { left, right },
            });

            let mut merged = mem::take(&mut below[left]);
            for &symbol in merged.iter() {
                paths[symbol as usize].push(false);
            }
            let right_symbols = mem::take(&mut below[right]);
            for &symbol in right_symbols.iter() {
                paths[symbol as usize].push(true);
            }
            merged.extend(right_symbols);
            below.push(merged);

            let position = active.partition_point(|&node| nodes[node].freq <= freq);
            active.insert(position, index);
        }

        let root = active[0];
        let codes = freqs
            .symbols()
            .map(|symbol| {
                let mut code = mem::take(&mut paths[symbol as usize]);
                if code.is_empty() {
                    // the root is a leaf
                    code.push(false);
                } else {
                    code.reverse();
                }
                (symbol, code)
            })
            .collect::<BTreeMap<_, _>>();

        debug!(
            "Built a tree of {} nodes over {} symbols",
            nodes.len(),
            freqs.len()
        );

        Self {
            nodes,
            root: Some(root),
            codes,
        }
    }

    /// The code of every symbol of the tree.
    pub fn code_table(&self) -> CodeTable {
        CodeTable::from(self.codes.clone())
    }

    /// Consumes the tree, returning the code of every symbol.
    pub fn into_code_table(self) -> CodeTable {
        CodeTable::from(self.codes)
    }

    pub fn root(&self) -> Option<usize> {
        self.root
    }

    pub fn node(&self, index: usize) -> Option<&Node> {
        self.nodes.get(index)
    }

    /// The number of nodes, leaves included.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Follows `path` from the root and returns the symbol of the leaf it ends on, if any.
    ///
    /// The single-leaf tree answers to the path `0`.
    pub fn symbol_at(&self, path: &BitSlice<usize, Msb0>) -> Option<Symbol> {
        let mut current = self.root?;

        if let NodeKind::Leaf(symbol) = self.nodes[current].kind {
            return (path.len() == 1 && !path[0]).then_some(symbol);
        }

        for bit in path.iter().by_vals() {
            current = match self.nodes[current].kind {
                NodeKind::Internal { left, right } => {
                    if bit {
                        right
                    } else {
                        left
                    }
                }
                NodeKind::Leaf(_) => return None,
            };
        }

        match self.nodes[current].kind {
            NodeKind::Leaf(symbol) => Some(symbol),
            NodeKind::Internal { .. } => None,
        }
    }

    /// The length of the longest root-to-leaf path.
    pub fn depth(&self) -> usize {
        self.codes.values().map(|code| code.len()).max().unwrap_or(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builds_the_canonical_example() {
        let freqs = FrequencyList::from_bytes(b"AAAABBBCCD");
        let tree = HuffmanTree::build(&freqs);
        let table = tree.code_table();

        assert_eq!(tree.len(), 7);
        assert_eq!(tree.root(), Some(6));
        assert_eq!(tree.node(6).map(|node| node.freq), Some(10));

        assert_eq!(table.get(b'A'), Some(&bitvec![usize, Msb0; 1]));
        assert_eq!(table.get(b'B'), Some(&bitvec![usize, Msb0; 0, 1]));
        assert_eq!(table.get(b'C'), Some(&bitvec![usize, Msb0; 0, 0, 0]));
        assert_eq!(table.get(b'D'), Some(&bitvec![usize, Msb0; 0, 0, 1]));
        assert_eq!(tree.depth(), 3);
    }

    #[test]
    fn codes_are_root_to_leaf_paths() {
        let freqs = FrequencyList::from_bytes(b"the recorded path of every leaf leads back to it");
        let tree = HuffmanTree::build(&freqs);

        for (symbol, code) in tree.code_table().iter() {
            assert_eq!(tree.symbol_at(code), Some(symbol));
        }
    }

    #[test]
    fn internal_nodes_sum_their_children() {
        let freqs = FrequencyList::from_bytes(b"internal frequencies are sums");
        let tree = HuffmanTree::build(&freqs);

        for index in 0..tree.len() {
            let node = tree.node(index).unwrap();
            if let NodeKind::Internal { left, right } = node.kind {
                assert!(left < index && right < index);
                let children = tree.node(left).unwrap().freq + tree.node(right).unwrap().freq;
                assert_eq!(node.freq, children);
                assert!(tree.node(right).unwrap().freq <= tree.node(left).unwrap().freq);
            }
        }
        assert_eq!(tree.len(), 2 * freqs.len() - 1);
    }

    #[test]
    fn single_symbol_gets_a_one_bit_code() {
        let freqs = FrequencyList::from_bytes(&[0x41; 100]);
        let tree = HuffmanTree::build(&freqs);

        assert_eq!(tree.len(), 1);
        assert_eq!(tree.root(), Some(0));
        assert_eq!(tree.code_table().get(0x41), Some(&bitvec![usize, Msb0; 0]));
        assert_eq!(tree.symbol_at(bits![usize, Msb0; 0]), Some(0x41));
        assert_eq!(tree.symbol_at(bits![usize, Msb0; 1]), None);
    }

    #[test]
    fn empty_list_gives_empty_tree() {
        let tree = HuffmanTree::build(&FrequencyList::default());

        assert!(tree.is_empty());
        assert_eq!(tree.root(), None);
        assert!(tree.code_table().is_empty());
        assert_eq!(tree.depth(), 0);
    }
}
