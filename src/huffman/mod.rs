pub mod code_table;
pub mod decoder;
pub mod encoder;
pub mod frequencies;
pub mod tree;

use anyhow::Result;

use crate::huffman::decoder::HuffmanDecoder;
use crate::huffman::encoder::HuffmanEncoder;
use crate::EncodedBits;

pub use crate::huffman::code_table::{CodeTable, ReverseCodeTable};
pub use crate::huffman::frequencies::{FrequencyEntry, FrequencyList};
pub use crate::huffman::tree::HuffmanTree;

/// The result of the encoding process: everything needed to get the input back.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Prelude {
    /// The code of every symbol of the input.
    pub table: CodeTable,

    /// The codes of the input bytes, in input order.
    pub payload: EncodedBits,
}

impl Prelude {
    pub fn new(table: CodeTable, payload: EncodedBits) -> Self {
        Self { table, payload }
    }
}

/// Encodes `data` with a code table built from its own frequencies.
pub fn encode(data: &[u8]) -> Result<Prelude> {
    let mut encoder = HuffmanEncoder::from_bytes(data);
    encoder.encode_all(data)?;
    Ok(encoder.serialize())
}

/// Gets back the bytes encoded in `prelude`.
pub fn decode(prelude: &Prelude) -> Vec<u8> {
    HuffmanDecoder::new(&prelude.table).decode_all(&prelude.payload)
}
