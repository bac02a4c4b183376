//! Symbol frequency counting.

use log::trace;

use crate::alphabet::Alphabet;
use crate::error::{Error, Result};

/// Occurrence count per symbol, dense over the alphabet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrequencyTable {
    counts: Vec<u64>,
}

impl FrequencyTable {
    /// Count every byte of `input`, then add one occurrence of the sentinel.
    ///
    /// The sentinel is always present afterwards, so even empty input yields a
    /// non-empty table.
    ///
    /// # Errors
    /// `Error::UnsupportedSymbol` for the first byte the alphabet rejects.
    pub fn count(input: &[u8], alphabet: &Alphabet) -> Result<Self> {
        let mut counts = vec![0u64; alphabet.size()];
        for (offset, &byte) in input.iter().enumerate() {
            if !alphabet.accepts(byte) {
                return Err(Error::UnsupportedSymbol {
                    value: byte,
                    offset,
                });
            }
            counts[byte as usize] += 1;
        }
        counts[alphabet.sentinel() as usize] += 1;

        let table = Self { counts };
        trace!("frequencies: {:?}", table.iter().collect::<Vec<_>>());
        Ok(table)
    }

    /// Build a table from explicit `(symbol, count)` pairs.
    ///
    /// Symbols outside the alphabet are ignored. No sentinel is added.
    pub fn from_counts(pairs: &[(u8, u64)], alphabet: &Alphabet) -> Self {
        let mut counts = vec![0u64; alphabet.size()];
        for &(symbol, count) in pairs {
            if let Some(slot) = counts.get_mut(symbol as usize) {
                *slot += count;
            }
        }
        Self { counts }
    }

    pub fn get(&self, symbol: u8) -> u64 {
        self.counts.get(symbol as usize).copied().unwrap_or(0)
    }

    /// Non-zero entries in ascending symbol order.
    pub fn iter(&self) -> impl Iterator<Item = (u8, u64)> + '_ {
        self.counts
            .iter()
            .enumerate()
            .filter(|(_, &count)| count > 0)
            .map(|(symbol, &count)| (symbol as u8, count))
    }

    /// Number of symbols with a non-zero count.
    pub fn distinct(&self) -> usize {
        self.counts.iter().filter(|&&count| count > 0).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::alphabet::DEFAULT_SENTINEL;

    #[test]
    fn test_counts_and_sentinel() {
        let table = FrequencyTable::count(b"AAAAAABBBCCD", &Alphabet::default()).unwrap();

        assert_eq!(table.get(b'A'), 6);
        assert_eq!(table.get(b'B'), 3);
        assert_eq!(table.get(b'C'), 2);
        assert_eq!(table.get(b'D'), 1);
        assert_eq!(table.get(DEFAULT_SENTINEL), 1);
        assert_eq!(table.distinct(), 5);
    }

    #[test]
    fn test_empty_input_has_only_sentinel() {
        let table = FrequencyTable::count(b"", &Alphabet::default()).unwrap();
        assert_eq!(table.iter().collect::<Vec<_>>(), vec![(DEFAULT_SENTINEL, 1)]);
    }

    #[test]
    fn test_iteration_is_symbol_ordered() {
        let table = FrequencyTable::count(b"zyxzyz", &Alphabet::default()).unwrap();
        let symbols: Vec<u8> = table.iter().map(|(s, _)| s).collect();
        assert_eq!(symbols, vec![DEFAULT_SENTINEL, b'x', b'y', b'z']);
    }

    #[test]
    fn test_out_of_range_byte_rejected() {
        let result = FrequencyTable::count(b"ok\x80", &Alphabet::default());
        assert!(matches!(
            result,
            Err(Error::UnsupportedSymbol { value: 0x80, offset: 2 })
        ));
    }

    #[test]
    fn test_sentinel_byte_rejected() {
        let result = FrequencyTable::count(&[b'a', DEFAULT_SENTINEL], &Alphabet::default());
        assert!(matches!(
            result,
            Err(Error::UnsupportedSymbol { value: DEFAULT_SENTINEL, offset: 1 })
        ));
    }
}
