//! Code-length header serialization.
//!
//! The header is the only description of the code that is stored. It carries
//! a length for every symbol of the alphabet, in symbol order, each packed into
//! the same number of bits.
//!
//! # Header Format
//!
//! ```text
//! +--------------------+
//! | bit_width (1 byte) |  1..=8, bits per length field
//! +--------------------+
//! | length[0]          |  bit_width bits, MSB-first
//! | length[1]          |  0 = symbol absent
//! | ...                |
//! | length[size - 1]   |
//! | zero padding       |  up to the next byte boundary
//! +--------------------+
//! ```
//!
//! The field section is `ceil(size * bit_width / 8)` bytes long. With the
//! default 127-symbol alphabet that is 16 bytes per bit of width, except at
//! width 8 where it is 127 bytes.

use log::debug;

use crate::alphabet::Alphabet;
use crate::bitio::{BitReader, BitWriter};
use crate::canonical::{CodeLength, CodeLengths, CodeTable};
use crate::error::{CodeTableError, HeaderError, Result, TruncationError};

/// Widest length field the one-byte header can declare usefully.
pub const MAX_BIT_WIDTH: u8 = 8;

/// Minimum number of bits that can represent `max_length`.
///
/// This is `floor(log2(max_length)) + 1` for any non-zero length.
pub fn bit_width_for(max_length: u32) -> u8 {
    (u32::BITS - max_length.leading_zeros()) as u8
}

/// Size in bytes of the field section for a given width.
pub fn field_bytes(alphabet: &Alphabet, bit_width: u8) -> usize {
    (alphabet.size() * bit_width as usize).div_ceil(8)
}

/// Serialize the lengths of `table` into a header.
///
/// # Errors
/// - `CodeTableError::Empty` if the table has no codes
/// - `CodeTableError::CodeTooLong` if the longest code needs more than 8 bits
///   to describe
pub fn encode_header(table: &CodeTable, alphabet: &Alphabet) -> Result<Vec<u8>> {
    let max_length = table.max_length();
    if max_length == 0 {
        return Err(CodeTableError::Empty.into());
    }

    let bit_width = bit_width_for(max_length);
    if bit_width > MAX_BIT_WIDTH {
        return Err(CodeTableError::CodeTooLong { length: max_length }.into());
    }

    let mut writer = BitWriter::with_capacity(1 + field_bytes(alphabet, bit_width));
    writer.write_bits(bit_width as u64, 8)?;
    for symbol in alphabet.symbols() {
        let length = table.get(symbol).map_or(0, |code| code.len());
        writer.write_bits(length as u64, bit_width as usize)?;
    }

    let header = writer.finish();
    debug!(
        "encoded header: bit_width={}, max_length={}, {} bytes",
        bit_width,
        max_length,
        header.len()
    );
    Ok(header)
}

/// Parse a header from the front of `bytes`.
///
/// Returns the lengths in canonical order together with the number of bytes
/// the header occupied, so the caller can find where the content starts.
///
/// # Errors
/// - `TruncationError::MissingBitWidth` / `Header` if bytes run out
/// - `HeaderError::ZeroBitWidth` / `BitWidthTooLarge` for an impossible width
/// - `HeaderError::LengthOutOfRange` for a length no tree over the alphabet
///   could produce
/// - `CodeTableError::Empty` if every field is zero
/// - `CodeTableError::MissingSentinel` if the sentinel has no length
pub fn decode_header(bytes: &[u8], alphabet: &Alphabet) -> Result<(CodeLengths, usize)> {
    let (&bit_width, rest) = bytes
        .split_first()
        .ok_or(TruncationError::MissingBitWidth)?;
    if bit_width == 0 {
        return Err(HeaderError::ZeroBitWidth.into());
    }
    if bit_width > MAX_BIT_WIDTH {
        return Err(HeaderError::BitWidthTooLarge {
            bit_width,
            max: MAX_BIT_WIDTH,
        }
        .into());
    }

    let required = field_bytes(alphabet, bit_width);
    if rest.len() < required {
        return Err(TruncationError::Header {
            required,
            available: rest.len(),
        }
        .into());
    }

    let max = alphabet.max_code_length();
    let mut reader = BitReader::new(&rest[..required]);
    let mut entries = Vec::new();
    for symbol in alphabet.symbols() {
        let length = reader.read_bits(bit_width as usize)? as u32;
        if length == 0 {
            continue;
        }
        if length > max {
            return Err(HeaderError::LengthOutOfRange {
                symbol,
                length,
                max,
            }
            .into());
        }
        entries.push(CodeLength::new(symbol, length));
    }

    if entries.is_empty() {
        return Err(CodeTableError::Empty.into());
    }
    let sentinel = alphabet.sentinel();
    if !entries.iter().any(|entry| entry.symbol == sentinel) {
        return Err(CodeTableError::MissingSentinel { sentinel }.into());
    }

    debug!(
        "decoded header: bit_width={}, {} symbols",
        bit_width,
        entries.len()
    );
    Ok((CodeLengths::from_unsorted(entries), 1 + required))
}
