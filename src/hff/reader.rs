use std::io::{self, Read};

use anyhow::{bail, Result};
use dsi_bitstream::traits::{BitRead, Endianness, WordRead};
use log::debug;

use crate::error::HuffmanError;
use crate::hff::{CHUNK_BITS, CODE_LEN_BITS, COUNT_BITS, PAYLOAD_LEN_BITS, SYMBOL_BITS};
use crate::huffman::{CodeTable, Prelude};
use crate::{Code, EncodedBits, Symbol, MAX_SYMBOLS};

/// Reads the 32-bit words of a `.hff` file from a byte source.
///
/// Unlike [`WordAdapter`](dsi_bitstream::impls::WordAdapter), which zero-extends a missing
/// word, a source ending before a whole word fails with [`io::ErrorKind::UnexpectedEof`], so
/// that truncated files are noticed.
#[derive(Debug)]
pub struct WordReader<B> {
    backend: B,
}

impl<B: Read> WordReader<B> {
    pub fn new(backend: B) -> Self {
        Self { backend }
    }

    pub fn into_inner(self) -> B {
        self.backend
    }
}

impl<B: Read> WordRead for WordReader<B> {
    type Error = io::Error;
    type Word = u32;

    #[inline(always)]
    fn read_word(&mut self) -> io::Result<u32> {
        let mut bytes = [0; 4];
        self.backend.read_exact(&mut bytes)?;
        Ok(u32::from_ne_bytes(bytes))
    }
}

/// Reads a [`Prelude`] stored in the `.hff` layout from a stream of unknown length.
///
/// See [`read_prelude_within`].
pub fn read_prelude<E: Endianness, R: BitRead<E>>(reader: &mut R) -> Result<Prelude>
where
    R::Error: std::error::Error + Send + Sync + 'static,
{
    read_prelude_within(reader, u64::MAX)
}

/// Reads a [`Prelude`] stored in the `.hff` layout from a stream holding `available_bits` bits.
///
/// The header is checked to describe a usable table: no more than [`MAX_SYMBOLS`] entries, no
/// repeated symbol, and non-empty prefix-free codes. A payload length exceeding the bits left
/// in the stream, or running out of bits anywhere, gives a [`HuffmanError::Truncated`].
pub fn read_prelude_within<E: Endianness, R: BitRead<E>>(
    reader: &mut R,
    available_bits: u64,
) -> Result<Prelude>
where
    R::Error: std::error::Error + Send + Sync + 'static,
{
    let count = read_field(reader, COUNT_BITS, "entry count")? as usize;
    if count > MAX_SYMBOLS {
        bail!(HuffmanError::InvalidCodeTable(format!(
            "{} entries, at most {} are possible",
            count, MAX_SYMBOLS
        )));
    }

    let mut lengths: Vec<(Symbol, usize)> = Vec::with_capacity(count);
    for _ in 0..count {
        let symbol = read_field(reader, SYMBOL_BITS, "header symbol")? as Symbol;
        let len = read_field(reader, CODE_LEN_BITS, "header code length")? as usize;
        if len == 0 {
            bail!(HuffmanError::InvalidCodeTable(format!(
                "byte {:#04x} has an empty code",
                symbol
            )));
        }
        lengths.push((symbol, len));
    }

    let mut table = CodeTable::new();
    for (symbol, len) in lengths {
        let code: Code = read_bit_vec(reader, len, "code bits")?;
        if table.insert(symbol, code).is_some() {
            bail!(HuffmanError::InvalidCodeTable(format!(
                "byte {:#04x} appears twice",
                symbol
            )));
        }
    }
    if !table.is_prefix_free() {
        bail!(HuffmanError::InvalidCodeTable(
            "a code is the prefix of another one".to_string()
        ));
    }

    let high = read_field(reader, CHUNK_BITS, "payload length")?;
    let low = read_field(reader, CHUNK_BITS, "payload length")?;
    let payload_len = (high << CHUNK_BITS) | low;

    let header_bits = (COUNT_BITS
        + table.len() * (SYMBOL_BITS + CODE_LEN_BITS)
        + table.codes().map(|code| code.len()).sum::<usize>()
        + PAYLOAD_LEN_BITS) as u64;
    if payload_len > available_bits.saturating_sub(header_bits) {
        debug!(
            "Payload of {} bits announced, {} bits left",
            payload_len,
            available_bits.saturating_sub(header_bits)
        );
        bail!(HuffmanError::Truncated { field: "payload" });
    }
    let payload_len = usize::try_from(payload_len)?;

    let payload: EncodedBits = read_bit_vec(reader, payload_len, "payload")?;

    debug!(
        "Read {} symbols and {} payload bits",
        table.len(),
        payload.len()
    );
    Ok(Prelude::new(table, payload))
}

/// Reads `len` bits, in chunks of at most [`CHUNK_BITS`] bits.
fn read_bit_vec<E: Endianness, R: BitRead<E>>(
    reader: &mut R,
    len: usize,
    field: &'static str,
) -> Result<EncodedBits>
where
    R::Error: std::error::Error + Send + Sync + 'static,
{
    // `len` comes from the stream, so it isn't trusted for preallocation
    let mut bits = EncodedBits::new();
    let mut left = len;

    while left > 0 {
        let n = left.min(CHUNK_BITS);
        let value = read_field(reader, n, field)?;
        for shift in (0..n).rev() {
            bits.push((value >> shift) & 1 == 1);
        }
        left -= n;
    }
    Ok(bits)
}

/// Reads an `n`-bit field, turning an early end of stream into [`HuffmanError::Truncated`].
fn read_field<E: Endianness, R: BitRead<E>>(
    reader: &mut R,
    n: usize,
    field: &'static str,
) -> Result<u64>
where
    R::Error: std::error::Error + Send + Sync + 'static,
{
    reader.read_bits(n).map_err(|err| {
        let eof = (&err as &(dyn std::error::Error + 'static))
            .downcast_ref::<io::Error>()
            .is_some_and(|err| err.kind() == io::ErrorKind::UnexpectedEof);

        if eof {
            HuffmanError::Truncated { field }.into()
        } else {
            anyhow::Error::new(err).context(format!("Could not read the {}", field))
        }
    })
}
