//! The `.hff` file format.
//!
//! A file stores a [`Prelude`] as a sequence of bit fields, multi-bit fields being written
//! most significant bit first:
//!
//! | field | bits | content |
//! |---|---|---|
//! | entry count | 16 | number of distinct symbols `n`, at most 256 |
//! | header | `n` × (8 + 8) | `(symbol, code length)` pairs, in ascending order of symbol |
//! | codes | sum of the lengths | the code of each symbol, in header order |
//! | payload length | 64 | number of payload bits |
//! | payload | payload length | the codes of the input bytes |
//!
//! Files are written with big-endian bit order over 32-bit words, so they end with up to 31
//! padding bits. Those bits can spell valid codes, which is why the payload length is stored:
//! without it the decoder couldn't tell padding from payload.

pub mod reader;
pub mod writer;

use std::fs::{self, File};
use std::io::{BufReader, BufWriter};
use std::path::Path;

use anyhow::{Context, Result};
use dsi_bitstream::impls::{BufBitReader, BufBitWriter, WordAdapter};
use dsi_bitstream::traits::{BitWrite, BE};
use log::info;

use crate::hff::reader::{read_prelude_within, WordReader};
use crate::hff::writer::write_prelude;
use crate::huffman::encoder::HuffmanEncoder;
use crate::huffman::{decode, FrequencyList, HuffmanTree, Prelude};
use crate::utils::{bytes_for, entropy};
use crate::Symbol;

/// The extension of compressed files.
pub const EXTENSION: &str = "hff";

/// Width of the entry count. It must hold 256, so a byte isn't enough.
pub const COUNT_BITS: usize = 16;

pub const SYMBOL_BITS: usize = Symbol::BITS as usize;

/// Width of a code length. A tree over 256 leaves is at most 255 levels deep.
pub const CODE_LEN_BITS: usize = 8;

pub const PAYLOAD_LEN_BITS: usize = 64;

/// The largest number of bits moved by a single read or write on the bit stream.
pub const CHUNK_BITS: usize = 32;

/// Stores `prelude` into the file at `path`, returning the number of bits written, padding
/// excluded.
pub fn store_prelude(prelude: &Prelude, path: impl AsRef<Path>) -> Result<usize> {
    let path = path.as_ref();
    let file =
        File::create(path).with_context(|| format!("Could not create {}", path.display()))?;
    let mut writer = BufBitWriter::<BE, _>::new(WordAdapter::<u32, _>::new(BufWriter::new(file)));

    let written = write_prelude(&mut writer, prelude)
        .with_context(|| format!("Could not write {}", path.display()))?;
    writer
        .flush()
        .with_context(|| format!("Could not flush {}", path.display()))?;

    Ok(written)
}

/// Loads the [`Prelude`] stored in the file at `path`.
pub fn load_prelude(path: impl AsRef<Path>) -> Result<Prelude> {
    let path = path.as_ref();
    let file = File::open(path).with_context(|| format!("Could not open {}", path.display()))?;
    let available_bits = file
        .metadata()
        .with_context(|| format!("Could not stat {}", path.display()))?
        .len()
        .saturating_mul(8);
    let mut reader = BufBitReader::<BE, _>::new(WordReader::new(BufReader::new(file)));

    read_prelude_within(&mut reader, available_bits)
        .with_context(|| format!("Could not load {}", path.display()))
}

/// Compresses the file `src` into the file `dst`, returning the number of bits written.
pub fn compress_file(src: impl AsRef<Path>, dst: impl AsRef<Path>) -> Result<usize> {
    let src = src.as_ref();
    let data = fs::read(src).with_context(|| format!("Could not read {}", src.display()))?;

    let freqs = FrequencyList::from_bytes(&data);
    let table = HuffmanTree::build(&freqs).into_code_table();

    if !freqs.is_empty() {
        info!(
            "{} distinct bytes, longest code {} bits, {:.3} bits per byte (entropy is {:.3})",
            freqs.len(),
            table.max_code_len(),
            table.average_code_len(&freqs),
            entropy(&freqs)
        );
    }

    let mut encoder = HuffmanEncoder::new(table);
    encoder.encode_all(&data)?;
    let written = store_prelude(&encoder.serialize(), dst)?;

    info!(
        "Compressed {} bytes into {} bytes",
        data.len(),
        bytes_for(written)
    );
    Ok(written)
}

/// Decompresses the file `src` into the file `dst`, returning the number of bytes written.
pub fn decompress_file(src: impl AsRef<Path>, dst: impl AsRef<Path>) -> Result<usize> {
    let dst = dst.as_ref();
    let prelude = load_prelude(src)?;
    let data = decode(&prelude);

    fs::write(dst, &data).with_context(|| format!("Could not write {}", dst.display()))?;

    info!(
        "Decompressed {} payload bits into {} bytes",
        prelude.payload.len(),
        data.len()
    );
    Ok(data.len())
}
