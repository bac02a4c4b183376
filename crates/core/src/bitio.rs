//! MSB-first bit packing shared by the header and content sections.
//!
//! Both sections of an artifact are continuous bit streams: the first bit
//! written lands in the most significant bit of the first byte.
//!
//! # Padding Rules
//! - BitWriter: the final partial byte is completed with zero bits
//! - BitReader: padding is indistinguishable from data; the header knows its
//!   field count and the content stops at the end-of-text sentinel
//!
//! # Example
//! ```
//! use canonhuff_core::bitio::{BitReader, BitWriter};
//!
//! let mut writer = BitWriter::new();
//! writer.write_bits(0b101, 3).unwrap();
//! writer.write_bits(0b11, 2).unwrap();
//! // 10111 -> padded to 10111000
//!
//! let bytes = writer.finish();
//! assert_eq!(bytes, vec![0b1011_1000]);
//!
//! let mut reader = BitReader::new(&bytes);
//! assert_eq!(reader.read_bits(3).unwrap(), 0b101);
//! assert_eq!(reader.read_bits(2).unwrap(), 0b11);
//! ```

use bitvec::prelude::*;

use crate::error::{BitIoError, Result};

/// Packs bits MSB-first into bytes, flushing each byte as soon as it fills.
///
/// # Invariants
/// - `pending` holds the 0-7 bits of the current partial byte, MSB-aligned
/// - `pending_len` is always < 8
#[derive(Debug, Clone, Default)]
pub struct BitWriter {
    bytes: Vec<u8>,
    pending: u8,
    pending_len: u8,
}

impl BitWriter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a writer that expects roughly `bytes` bytes of output.
    pub fn with_capacity(bytes: usize) -> Self {
        Self {
            bytes: Vec::with_capacity(bytes),
            pending: 0,
            pending_len: 0,
        }
    }

    /// Append a single bit.
    pub fn write_bit(&mut self, bit: bool) {
        if bit {
            self.pending |= 0x80 >> self.pending_len;
        }
        self.pending_len += 1;
        if self.pending_len == 8 {
            self.flush_pending();
        }
    }

    /// Append the lowest `count` bits of `value`, most significant first.
    ///
    /// # Errors
    /// Returns `BitIoError::InvalidBitCount` if count > 64.
    pub fn write_bits(&mut self, value: u64, count: usize) -> Result<()> {
        if count > 64 {
            return Err(BitIoError::InvalidBitCount(count).into());
        }

        let mut remaining = count;
        while remaining > 0 {
            let free = 8 - self.pending_len as usize;
            let take = remaining.min(free);
            let shift = remaining - take;
            let chunk = ((value >> shift) & ((1u64 << take) - 1)) as u8;

            self.pending |= chunk << (free - take);
            self.pending_len += take as u8;
            if self.pending_len == 8 {
                self.flush_pending();
            }
            remaining -= take;
        }

        Ok(())
    }

    /// Append every bit of a code, in order.
    ///
    /// Codes can be longer than 64 bits, so they are copied bit by bit rather
    /// than through `write_bits`.
    pub fn write_code(&mut self, code: &BitSlice<u8, Msb0>) {
        for bit in code.iter().by_vals() {
            self.write_bit(bit);
        }
    }

    /// Zero-pad the partial byte, if any, and return the output.
    pub fn finish(mut self) -> Vec<u8> {
        if self.pending_len > 0 {
            self.flush_pending();
        }
        self.bytes
    }

    /// Total number of bits written, including the partial byte.
    pub fn bit_len(&self) -> usize {
        self.bytes.len() * 8 + self.pending_len as usize
    }

    fn flush_pending(&mut self) {
        self.bytes.push(self.pending);
        self.pending = 0;
        self.pending_len = 0;
    }
}

/// Reads bits MSB-first from a byte slice.
///
/// # Invariants
/// - `bit_position` never exceeds `data.len() * 8`
#[derive(Debug, Clone)]
pub struct BitReader<'a> {
    data: &'a [u8],
    bit_position: usize,
}

impl<'a> BitReader<'a> {
    pub fn new(data: &'a [u8]) -> Self {
        Self {
            data,
            bit_position: 0,
        }
    }

    /// Read `count` bits (0-64) as an unsigned integer, first bit most significant.
    ///
    /// # Errors
    /// - `BitIoError::InvalidBitCount` if count > 64
    /// - `BitIoError::UnexpectedEof` if not enough bits remain
    pub fn read_bits(&mut self, count: usize) -> Result<u64> {
        if count > 64 {
            return Err(BitIoError::InvalidBitCount(count).into());
        }
        if count > self.bits_remaining() {
            return Err(BitIoError::UnexpectedEof.into());
        }

        let mut result = 0u64;
        let mut remaining = count;
        while remaining > 0 {
            let byte = self.data[self.bit_position / 8];
            let available = 8 - self.bit_position % 8;
            let take = remaining.min(available);
            let mask = ((1u16 << take) - 1) as u8;
            let chunk = (byte >> (available - take)) & mask;

            result = (result << take) | chunk as u64;
            self.bit_position += take;
            remaining -= take;
        }

        Ok(result)
    }

    /// Read a single bit, or `None` once the data is exhausted.
    pub fn next_bit(&mut self) -> Option<bool> {
        let byte = *self.data.get(self.bit_position / 8)?;
        let bit = byte & (0x80 >> (self.bit_position % 8)) != 0;
        self.bit_position += 1;
        Some(bit)
    }

    pub fn bits_remaining(&self) -> usize {
        self.data.len() * 8 - self.bit_position
    }

    /// Current bit offset from the start of the slice.
    pub fn position(&self) -> usize {
        self.bit_position
    }

    pub fn is_empty(&self) -> bool {
        self.bit_position >= self.data.len() * 8
    }
}
