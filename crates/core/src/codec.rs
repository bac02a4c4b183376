//! Compress and decompress whole buffers.
//!
//! # Artifact Format
//!
//! ```text
//! +---------------------+
//! | code-length header  |  see `header` module
//! +---------------------+
//! | content             |  codes of every input symbol, then the
//! | (variable)          |  sentinel's code, zero-padded to a byte
//! +---------------------+
//! ```
//!
//! Encode: count -> build tree -> code lengths -> canonical codes -> header
//! and content. Decode: header -> code lengths -> canonical codes -> decode
//! tree -> content. Both directions derive codes with the same canonical
//! assignment, so the tree itself is never stored.

use std::time::Instant;

use log::debug;

use crate::alphabet::Alphabet;
use crate::canonical::CodeTable;
use crate::content::{decode_content, encode_content};
use crate::decode_tree::DecodeTree;
use crate::error::Result;
use crate::frequency::FrequencyTable;
use crate::header::{bit_width_for, decode_header, encode_header};
use crate::stats::CompressionStats;
use crate::tree::HuffmanTree;

/// A canonical Huffman codec over a fixed alphabet.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Codec {
    alphabet: Alphabet,
}

impl Codec {
    pub fn new(alphabet: Alphabet) -> Self {
        Self { alphabet }
    }

    pub fn alphabet(&self) -> &Alphabet {
        &self.alphabet
    }

    /// Compress `input` into a self-describing artifact.
    ///
    /// # Errors
    /// `Error::UnsupportedSymbol` if any byte is outside the alphabet or equals
    /// the sentinel.
    pub fn compress(&self, input: &[u8]) -> Result<Vec<u8>> {
        self.compress_with_stats(input).map(|(artifact, _)| artifact)
    }

    /// Compress `input` and report how the artifact was put together.
    pub fn compress_with_stats(&self, input: &[u8]) -> Result<(Vec<u8>, CompressionStats)> {
        let start = Instant::now();

        let frequencies = FrequencyTable::count(input, &self.alphabet)?;
        let tree = HuffmanTree::build(&frequencies)?;
        let lengths = tree.code_lengths();
        let table = CodeTable::assign(&lengths)?;

        let mut artifact = encode_header(&table, &self.alphabet)?;
        let header_bytes = artifact.len();
        let content = encode_content(input, &table, self.alphabet.sentinel())?;
        artifact.extend_from_slice(&content);

        let stats = CompressionStats {
            input_bytes: input.len() as u64,
            header_bytes: header_bytes as u64,
            content_bytes: content.len() as u64,
            distinct_symbols: table.len(),
            max_code_length: lengths.max_length(),
            bit_width: bit_width_for(lengths.max_length()),
            elapsed: start.elapsed(),
        };
        debug!(
            "compressed {} -> {} bytes ({} symbols, max length {})",
            stats.input_bytes,
            artifact.len(),
            stats.distinct_symbols,
            stats.max_code_length
        );

        Ok((artifact, stats))
    }

    /// Restore the original bytes from an artifact.
    ///
    /// Nothing is returned unless the whole artifact decodes cleanly.
    ///
    /// # Errors
    /// `MalformedHeader`, `TruncatedStream` or `InvalidCodeTable` depending on
    /// what is wrong with the artifact.
    pub fn decompress(&self, artifact: &[u8]) -> Result<Vec<u8>> {
        let (lengths, header_len) = decode_header(artifact, &self.alphabet)?;
        let table = CodeTable::assign(&lengths)?;
        let tree = DecodeTree::from_codes(&table)?;
        let output = decode_content(&artifact[header_len..], &tree, self.alphabet.sentinel())?;

        debug!(
            "decompressed {} -> {} bytes ({} symbols)",
            artifact.len(),
            output.len(),
            table.len()
        );
        Ok(output)
    }
}

/// Compress with the default 127-symbol alphabet.
pub fn compress(input: &[u8]) -> Result<Vec<u8>> {
    Codec::default().compress(input)
}

/// Decompress with the default 127-symbol alphabet.
pub fn decompress(artifact: &[u8]) -> Result<Vec<u8>> {
    Codec::default().decompress(artifact)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{CodeTableError, Error, HeaderError, TruncationError};

    #[test]
    fn test_textbook_artifact() {
        let (artifact, stats) = Codec::default()
            .compress_with_stats(b"AAAAAABBBCCD")
            .unwrap();

        assert_eq!(artifact.len(), 1 + 48 + 4);
        assert_eq!(artifact[0], 3);
        assert_eq!(&artifact[49..], &[0x02, 0xAD, 0xBF, 0x80]);
        assert_eq!(stats.distinct_symbols, 5);
        assert_eq!(stats.max_code_length, 4);
        assert_eq!(stats.bit_width, 3);
        assert_eq!(stats.compressed_bytes(), artifact.len() as u64);

        assert_eq!(decompress(&artifact).unwrap(), b"AAAAAABBBCCD");
    }

    #[test]
    fn test_empty_input() {
        let artifact = compress(b"").unwrap();
        assert_eq!(artifact.len(), 1 + 16 + 1);
        assert_eq!(artifact[0], 1);
        assert!(decompress(&artifact).unwrap().is_empty());
    }

    #[test]
    fn test_single_repeated_byte() {
        let input = vec![b'a'; 1000];
        let (artifact, stats) = Codec::default().compress_with_stats(&input).unwrap();

        assert_eq!(stats.distinct_symbols, 2);
        assert_eq!(stats.max_code_length, 1);
        assert_eq!(stats.bit_width, 1);
        // 1000 one-bit codes plus the sentinel's bit
        assert_eq!(stats.content_bytes, 126);
        assert_eq!(decompress(&artifact).unwrap(), input);
    }

    #[test]
    fn test_unsupported_byte_produces_no_output() {
        assert!(matches!(
            compress(b"caf\xc3\xa9"),
            Err(Error::UnsupportedSymbol { value: 0xc3, offset: 3 })
        ));
    }

    #[test]
    fn test_truncated_content() {
        let artifact = compress(b"hello, world").unwrap();
        assert!(matches!(
            decompress(&artifact[..artifact.len() - 2]),
            Err(Error::TruncatedStream(TruncationError::Content { .. }))
        ));
    }

    #[test]
    fn test_header_only() {
        let artifact = compress(b"abc").unwrap();
        let header_len = 1 + 16 * artifact[0] as usize;
        assert!(matches!(
            decompress(&artifact[..header_len]),
            Err(Error::TruncatedStream(TruncationError::Content { bits_read: 0 }))
        ));
    }

    #[test]
    fn test_zero_bit_width() {
        let mut artifact = compress(b"abc").unwrap();
        artifact[0] = 0;
        assert!(matches!(
            decompress(&artifact),
            Err(Error::MalformedHeader(HeaderError::ZeroBitWidth))
        ));
    }

    #[test]
    fn test_oversubscribed_lengths() {
        // Width 1, every symbol claims a one-bit code.
        let mut artifact = vec![1u8];
        artifact.extend_from_slice(&[0xFF; 16]);
        artifact.push(0x00);
        assert!(matches!(
            decompress(&artifact),
            Err(Error::InvalidCodeTable(CodeTableError::Oversubscribed { .. }))
        ));
    }

    #[test]
    fn test_custom_alphabet() {
        let codec = Codec::new(Alphabet::new(16, 15).unwrap());
        let input: Vec<u8> = (0..15u8).cycle().take(200).collect();

        let artifact = codec.compress(&input).unwrap();
        assert_eq!(codec.decompress(&artifact).unwrap(), input);

        assert!(matches!(
            codec.compress(&[3, 16]),
            Err(Error::UnsupportedSymbol { value: 16, offset: 1 })
        ));
    }
}
