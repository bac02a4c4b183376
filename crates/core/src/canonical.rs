//! Canonical code assignment.
//!
//! A canonical code is fully determined by the ordered list of
//! `(symbol, length)` pairs: sort by length then symbol, give the first entry
//! an all-zero code, and derive every following code from the previous one as
//! `(previous + 1) << (length - previous_length)`.
//!
//! The encoder feeds lengths taken from the Huffman tree and the decoder feeds
//! lengths read from the header. Both go through [`CodeTable::assign`], which
//! is what makes the two sides agree bit for bit.
//!
//! Codes are kept as bit vectors rather than integers: with a 256-symbol
//! alphabet a code can be up to 255 bits long.

use std::collections::BTreeMap;

use bitvec::prelude::*;
use log::trace;

use crate::error::{CodeTableError, Result};

/// A code's bits, first-transmitted bit first.
pub type Code = BitVec<u8, Msb0>;

/// Longest code a one-byte header field can describe.
pub const MAX_CODE_LENGTH: u32 = 255;

/// One symbol's code length.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CodeLength {
    pub symbol: u8,
    pub length: u32,
}

impl CodeLength {
    pub fn new(symbol: u8, length: u32) -> Self {
        Self { symbol, length }
    }
}

/// Code lengths sorted by `(length, symbol)`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CodeLengths {
    entries: Vec<CodeLength>,
}

impl CodeLengths {
    /// Sort `entries` into canonical order.
    pub fn from_unsorted(mut entries: Vec<CodeLength>) -> Self {
        entries.sort_by_key(|entry| (entry.length, entry.symbol));
        Self { entries }
    }

    pub fn iter(&self) -> impl Iterator<Item = &CodeLength> {
        self.entries.iter()
    }

    pub fn as_slice(&self) -> &[CodeLength] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Length of the longest code, 0 when empty.
    pub fn max_length(&self) -> u32 {
        self.entries.last().map_or(0, |entry| entry.length)
    }

    /// Length assigned to `symbol`, if present.
    pub fn length_of(&self, symbol: u8) -> Option<u32> {
        self.entries
            .iter()
            .find(|entry| entry.symbol == symbol)
            .map(|entry| entry.length)
    }
}

/// Symbol to canonical code mapping.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CodeTable {
    codes: BTreeMap<u8, Code>,
}

impl CodeTable {
    /// Assign canonical codes to sorted lengths.
    ///
    /// # Errors
    /// - `CodeTableError::Empty` if there are no entries
    /// - `CodeTableError::ZeroLength` / `CodeTooLong` for lengths outside 1..=255
    /// - `CodeTableError::Oversubscribed` if the lengths need more codes than
    ///   the code space holds
    pub fn assign(lengths: &CodeLengths) -> Result<Self> {
        let mut entries = lengths.iter();
        let first = entries.next().ok_or(CodeTableError::Empty)?;
        check_length(first)?;

        let mut code: Code = BitVec::repeat(false, first.length as usize);
        let mut codes = BTreeMap::new();
        codes.insert(first.symbol, code.clone());

        for entry in entries {
            check_length(entry)?;
            if !increment(&mut code) {
                return Err(CodeTableError::Oversubscribed {
                    symbol: entry.symbol,
                    length: entry.length,
                }
                .into());
            }
            // Entries are sorted, so this only ever grows: a left shift.
            code.resize(entry.length as usize, false);
            codes.insert(entry.symbol, code.clone());
        }

        let table = Self { codes };
        trace!("canonical codes: {:?}", table);
        Ok(table)
    }

    pub fn get(&self, symbol: u8) -> Option<&Code> {
        self.codes.get(&symbol)
    }

    /// Entries in ascending symbol order.
    pub fn iter(&self) -> impl Iterator<Item = (u8, &Code)> {
        self.codes.iter().map(|(&symbol, code)| (symbol, code))
    }

    pub fn len(&self) -> usize {
        self.codes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.codes.is_empty()
    }

    /// Length of the longest code.
    pub fn max_length(&self) -> u32 {
        self.codes.values().map(|code| code.len() as u32).max().unwrap_or(0)
    }
}

/// Collect arbitrary codes without canonical assignment or validation.
impl FromIterator<(u8, Code)> for CodeTable {
    fn from_iter<I: IntoIterator<Item = (u8, Code)>>(iter: I) -> Self {
        Self {
            codes: iter.into_iter().collect(),
        }
    }
}

fn check_length(entry: &CodeLength) -> Result<()> {
    if entry.length == 0 {
        return Err(CodeTableError::ZeroLength {
            symbol: entry.symbol,
        }
        .into());
    }
    if entry.length > MAX_CODE_LENGTH {
        return Err(CodeTableError::CodeTooLong {
            length: entry.length,
        }
        .into());
    }
    Ok(())
}

/// Add one to `code` in place. Returns false on overflow (all ones).
fn increment(code: &mut BitSlice<u8, Msb0>) -> bool {
    for mut bit in code.iter_mut().rev() {
        if *bit {
            bit.set(false);
        } else {
            bit.set(true);
            return true;
        }
    }
    false
}
