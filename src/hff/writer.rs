use anyhow::{ensure, Result};
use bitvec::prelude::*;
use dsi_bitstream::traits::{BitWrite, Endianness};
use log::debug;

use crate::hff::{CHUNK_BITS, CODE_LEN_BITS, COUNT_BITS, PAYLOAD_LEN_BITS, SYMBOL_BITS};
use crate::huffman::Prelude;

/// Writes `prelude` in the `.hff` layout, returning the number of bits written.
///
/// The writer is not flushed.
pub fn write_prelude<E: Endianness, W: BitWrite<E>>(
    writer: &mut W,
    prelude: &Prelude,
) -> Result<usize>
where
    W::Error: std::error::Error + Send + Sync + 'static,
{
    let table = &prelude.table;
    let mut written = writer.write_bits(table.len() as u64, COUNT_BITS)?;

    for (symbol, code) in table.iter() {
        ensure!(
            !code.is_empty() && code.len() < 1 << CODE_LEN_BITS,
            "The code of byte {:#04x} is {} bits long",
            symbol,
            code.len()
        );
        written += writer.write_bits(symbol as u64, SYMBOL_BITS)?;
        written += writer.write_bits(code.len() as u64, CODE_LEN_BITS)?;
    }

    for code in table.codes() {
        written += write_bit_slice(writer, code)?;
    }
    let header_bits = written;

    let payload_len = prelude.payload.len() as u64;
    for half in [payload_len >> CHUNK_BITS, payload_len & ((1 << CHUNK_BITS) - 1)] {
        written += writer.write_bits(half, CHUNK_BITS)?;
    }
    debug_assert_eq!(written - header_bits, PAYLOAD_LEN_BITS);

    written += write_bit_slice(writer, &prelude.payload)?;

    debug!(
        "Wrote {} symbols in a {} bits header and {} payload bits",
        table.len(),
        header_bits,
        payload_len
    );
    Ok(written)
}

/// Writes `bits` in order, in chunks of at most [`CHUNK_BITS`] bits.
fn write_bit_slice<E: Endianness, W: BitWrite<E>>(
    writer: &mut W,
    bits: &BitSlice<usize, Msb0>,
) -> Result<usize>
where
    W::Error: std::error::Error + Send + Sync + 'static,
{
    let mut written = 0;

    for chunk in bits.chunks(CHUNK_BITS) {
        let value = chunk
            .iter()
            .by_vals()
            .fold(0_u64, |value, bit| (value << 1) | bit as u64);
        written += writer.write_bits(value, chunk.len())?;
    }
    Ok(written)
}
