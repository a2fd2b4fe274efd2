//! Static Huffman compression of byte streams, persisted in the self-describing `.hff` format.
//!
//! ```no_run
//! use huffman_hff::hff::{load_prelude, store_prelude};
//! use huffman_hff::huffman::{decode, encode};
//!
//! let prelude = encode(b"AAAABBBCCD")?;
//! store_prelude(&prelude, "data.hff")?;
//!
//! let loaded = load_prelude("data.hff")?;
//! assert_eq!(decode(&loaded), b"AAAABBBCCD");
//! # Ok::<(), anyhow::Error>(())
//! ```

use bitvec::order::Msb0;
use bitvec::vec::BitVec;

pub mod error;
pub mod hff;
pub mod huffman;
pub mod utils;

/// The type representing the symbols, i.e. the bytes coming from the input.
pub type Symbol = u8;

/// The type representing the number of occurrences of a symbol.
pub type Freq = usize;

/// A root-to-leaf path in the Huffman tree, first bit being the branch taken at the root.
pub type Code = BitVec<usize, Msb0>;

/// The concatenation of the codes of every input byte, in input order.
pub type EncodedBits = BitVec<usize, Msb0>;

/// How many distinct symbols an input can contain.
pub const MAX_SYMBOLS: usize = 1 << Symbol::BITS;
