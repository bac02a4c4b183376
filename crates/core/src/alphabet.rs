//! Symbol range and end-of-text sentinel used by a codec instance.

use crate::error::{Error, Result};

/// Default number of symbols: byte values 0..=126.
pub const DEFAULT_SIZE: u16 = 127;

/// Default end-of-text sentinel (ASCII ETX).
pub const DEFAULT_SENTINEL: u8 = 0x03;

/// The set of symbols a codec accepts, plus the reserved sentinel.
///
/// Valid input symbols are `0..size` except `sentinel`. The header carries one
/// length field per symbol in `0..size`, sentinel included.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Alphabet {
    size: u16,
    sentinel: u8,
}

impl Alphabet {
    /// Build an alphabet of `size` symbols with `sentinel` reserved.
    ///
    /// # Errors
    /// `Error::Config` unless `2 <= size <= 256` and `sentinel < size`.
    pub fn new(size: u16, sentinel: u8) -> Result<Self> {
        if !(2..=256).contains(&size) {
            return Err(Error::Config(format!(
                "alphabet size must be in 2..=256, got {size}"
            )));
        }
        if u16::from(sentinel) >= size {
            return Err(Error::Config(format!(
                "sentinel {sentinel:#04x} is outside an alphabet of {size} symbols"
            )));
        }
        Ok(Self { size, sentinel })
    }

    /// Full byte range with the given sentinel.
    pub fn full_byte(sentinel: u8) -> Self {
        Self {
            size: 256,
            sentinel,
        }
    }

    pub fn size(&self) -> usize {
        self.size as usize
    }

    pub fn sentinel(&self) -> u8 {
        self.sentinel
    }

    /// Whether `byte` may appear in input.
    pub fn accepts(&self, byte: u8) -> bool {
        (byte as usize) < self.size() && byte != self.sentinel
    }

    /// Longest code length any Huffman tree over this alphabet can produce.
    pub fn max_code_length(&self) -> u32 {
        self.size as u32 - 1
    }

    /// Every symbol in header order.
    pub fn symbols(&self) -> impl Iterator<Item = u8> {
        (0..self.size).map(|s| s as u8)
    }
}

impl Default for Alphabet {
    fn default() -> Self {
        Self {
            size: DEFAULT_SIZE,
            sentinel: DEFAULT_SENTINEL,
        }
    }
}
