use anyhow::Result;

use crate::error::HuffmanError;
use crate::huffman::code_table::CodeTable;
use crate::huffman::frequencies::FrequencyList;
use crate::huffman::tree::HuffmanTree;
use crate::huffman::Prelude;
use crate::{EncodedBits, Symbol};

/// Translates bytes into the concatenation of their codes.
#[derive(Clone, Debug)]
pub struct HuffmanEncoder {
    table: CodeTable,

    /// The codes of the symbols encoded so far.
    bits: EncodedBits,
}

impl HuffmanEncoder {
    /// Creates an encoder using the given table.
    pub fn new(table: CodeTable) -> Self {
        Self {
            table,
            bits: EncodedBits::new(),
        }
    }

    /// Creates an encoder whose table is built from the frequencies of `data`, so that every
    /// byte of `data` can be encoded.
    pub fn from_bytes(data: &[u8]) -> Self {
        let freqs = FrequencyList::from_bytes(data);
        Self::new(HuffmanTree::build(&freqs).into_code_table())
    }

    /// Appends the code of `symbol`.
    pub fn encode(&mut self, symbol: Symbol) -> Result<()> {
        let code = self
            .table
            .get(symbol)
            .ok_or(HuffmanError::MissingSymbol(symbol))?;

        self.bits.extend_from_bitslice(code);
        Ok(())
    }

    pub fn encode_all(&mut self, data: &[u8]) -> Result<()> {
        data.iter().try_for_each(|&symbol| self.encode(symbol))
    }

    pub fn table(&self) -> &CodeTable {
        &self.table
    }

    /// The number of bits produced so far.
    pub fn bits_len(&self) -> usize {
        self.bits.len()
    }

    /// Consumes the encoder, returning the table together with the encoded bits.
    pub fn serialize(self) -> Prelude {
        Prelude::new(self.table, self.bits)
    }
}

#[cfg(test)]
mod tests {
    use bitvec::prelude::*;

    use super::*;

    #[test]
    fn concatenates_codes_in_input_order() -> Result<()> {
        let mut encoder = HuffmanEncoder::from_bytes(b"AAAABBBCCD");
        encoder.encode_all(b"AAAABBBCCD")?;

        assert_eq!(encoder.bits_len(), 19);
        let prelude = encoder.serialize();
        assert_eq!(
            prelude.payload,
            bitvec![usize, Msb0; 1, 1, 1, 1, 0, 1, 0, 1, 0, 1, 0, 0, 0, 0, 0, 0, 0, 0, 1]
        );
        Ok(())
    }

    #[test]
    fn fails_on_bytes_missing_from_the_table() {
        let mut encoder = HuffmanEncoder::from_bytes(b"abc");
        let err = encoder.encode_all(b"abcd").unwrap_err();

        assert_eq!(
            err.downcast_ref::<HuffmanError>(),
            Some(&HuffmanError::MissingSymbol(b'd'))
        );
    }

    #[test]
    fn empty_input_encodes_to_nothing() -> Result<()> {
        let mut encoder = HuffmanEncoder::from_bytes(&[]);
        encoder.encode_all(&[])?;

        let prelude = encoder.serialize();
        assert!(prelude.table.is_empty());
        assert!(prelude.payload.is_empty());
        Ok(())
    }
}
