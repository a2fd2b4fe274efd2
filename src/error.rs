use thiserror::Error;

use crate::Symbol;

/// The failures specific to Huffman coding and to the `.hff` format.
///
/// Functions of this crate return [`anyhow::Result`]; when one of these kinds is the cause it can
/// be recovered with [`anyhow::Error::downcast_ref`].
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum HuffmanError {
    /// The encoder was asked for a byte its code table has no code for.
    #[error("byte {0:#04x} has no code in the table")]
    MissingSymbol(Symbol),

    /// The bit stream ended before `field` could be read completely.
    #[error("truncated input while reading the {field}")]
    Truncated { field: &'static str },

    /// The header describes a table that can't be used to decode.
    #[error("invalid code table: {0}")]
    InvalidCodeTable(String),
}
