use bitvec::prelude::*;
use log::debug;

use crate::huffman::code_table::{CodeTable, ReverseCodeTable};
use crate::Code;

/// Translates a sequence of codes back into bytes.
///
/// Decoding needs no tree: bits are accumulated until they form one of the codes of the table.
/// Since the table is prefix-free the first match is the only possible one.
#[derive(Clone, Debug)]
pub struct HuffmanDecoder {
    lookup: ReverseCodeTable,
}

impl HuffmanDecoder {
    pub fn new(table: &CodeTable) -> Self {
        Self {
            lookup: table.reverse(),
        }
    }

    /// Decodes every code in `bits`. Trailing bits that don't complete a code are dropped.
    pub fn decode_all(&self, bits: &BitSlice<usize, Msb0>) -> Vec<u8> {
        let mut decoded = Vec::new();
        let mut candidate = Code::new();

        for bit in bits.iter().by_vals() {
            candidate.push(bit);
            if let Some(symbol) = self.lookup.get(&candidate) {
                decoded.push(symbol);
                candidate.clear();
            }
        }

        if !candidate.is_empty() {
            debug!("Dropped {} trailing bits not forming a code", candidate.len());
        }
        decoded
    }
}
