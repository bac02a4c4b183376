//! Content bitstream packing and unpacking.
//!
//! Content is the concatenation of every input symbol's code followed by the
//! sentinel's code, zero-padded to a byte. Because codes are prefix-free and
//! decoding stops at the sentinel, the padding bits are never interpreted.

use crate::bitio::{BitReader, BitWriter};
use crate::canonical::CodeTable;
use crate::decode_tree::DecodeTree;
use crate::error::{CodeTableError, Result, TruncationError};

/// Pack `input` and a trailing sentinel into bytes using `table`.
///
/// # Errors
/// `CodeTableError::MissingCode` if a symbol (or the sentinel) has no code.
pub fn encode_content(input: &[u8], table: &CodeTable, sentinel: u8) -> Result<Vec<u8>> {
    let mut writer = BitWriter::with_capacity(input.len() / 2 + 1);

    for &symbol in input.iter().chain(std::iter::once(&sentinel)) {
        let code = table
            .get(symbol)
            .ok_or(CodeTableError::MissingCode { symbol })?;
        writer.write_code(code);
    }

    Ok(writer.finish())
}

/// Unpack symbols from `bytes` until the sentinel is reached.
///
/// # Errors
/// - `TruncationError::Content` if the bytes end before the sentinel
/// - `CodeTableError::UnknownCode` if a bit leads off the tree
pub fn decode_content(bytes: &[u8], tree: &DecodeTree, sentinel: u8) -> Result<Vec<u8>> {
    let mut reader = BitReader::new(bytes);
    let mut output = Vec::with_capacity(bytes.len() * 2);
    let mut current = tree.root();

    while let Some(bit) = reader.next_bit() {
        current = tree
            .step(current, bit)
            .ok_or(CodeTableError::UnknownCode {
                position: reader.position() - 1,
            })?;

        if let Some(symbol) = tree.symbol(current) {
            if symbol == sentinel {
                return Ok(output);
            }
            output.push(symbol);
            current = tree.root();
        }
    }

    Err(TruncationError::Content {
        bits_read: reader.position(),
    }
    .into())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::canonical::{CodeLength, CodeLengths};
    use crate::error::Error;

    const ETX: u8 = 0x03;

    fn textbook_table() -> CodeTable {
        // A=0 B=10 C=110 ETX=1110 D=1111
        let lengths = CodeLengths::from_unsorted(vec![
            CodeLength::new(b'A', 1),
            CodeLength::new(b'B', 2),
            CodeLength::new(b'C', 3),
            CodeLength::new(ETX, 4),
            CodeLength::new(b'D', 4),
        ]);
        CodeTable::assign(&lengths).unwrap()
    }

    #[test]
    fn test_textbook_content_bytes() {
        let bytes = encode_content(b"AAAAAABBBCCD", &textbook_table(), ETX).unwrap();
        // 000000 101010 110110 1111 1110 + 6 padding bits
        assert_eq!(bytes, vec![0x02, 0xAD, 0xBF, 0x80]);
    }

    #[test]
    fn test_decode_stops_at_sentinel() {
        let table = textbook_table();
        let tree = DecodeTree::from_codes(&table).unwrap();

        let mut bytes = encode_content(b"DCBA", &table, ETX).unwrap();
        // Anything after the sentinel's byte is never read.
        bytes.extend_from_slice(&[0xFF, 0x00, 0x5A]);

        assert_eq!(decode_content(&bytes, &tree, ETX).unwrap(), b"DCBA");
    }

    #[test]
    fn test_padding_is_ignored() {
        let table = textbook_table();
        let tree = DecodeTree::from_codes(&table).unwrap();

        // "B" + ETX = 10 1110 -> 101110|00; padding happens to spell "A A".
        let bytes = encode_content(b"B", &table, ETX).unwrap();
        assert_eq!(bytes, vec![0b1011_1000]);
        assert_eq!(decode_content(&bytes, &tree, ETX).unwrap(), b"B");
    }

    #[test]
    fn test_empty_input_is_just_the_sentinel() {
        let table = CodeTable::assign(&CodeLengths::from_unsorted(vec![CodeLength::new(ETX, 1)]))
            .unwrap();
        let tree = DecodeTree::from_codes(&table).unwrap();

        let bytes = encode_content(b"", &table, ETX).unwrap();
        assert_eq!(bytes, vec![0x00]);
        assert!(decode_content(&bytes, &tree, ETX).unwrap().is_empty());
    }

    #[test]
    fn test_missing_sentinel_in_stream() {
        let table = textbook_table();
        let tree = DecodeTree::from_codes(&table).unwrap();

        let bytes = encode_content(b"AAAAAABBBCCD", &table, ETX).unwrap();
        assert!(matches!(
            decode_content(&bytes[..3], &tree, ETX),
            Err(Error::TruncatedStream(TruncationError::Content { bits_read: 24 }))
        ));
    }

    #[test]
    fn test_bit_off_the_tree() {
        let table = CodeTable::assign(&CodeLengths::from_unsorted(vec![CodeLength::new(ETX, 1)]))
            .unwrap();
        let tree = DecodeTree::from_codes(&table).unwrap();

        assert!(matches!(
            decode_content(&[0x80], &tree, ETX),
            Err(Error::InvalidCodeTable(CodeTableError::UnknownCode { position: 0 }))
        ));
    }

    #[test]
    fn test_symbol_without_code() {
        assert!(matches!(
            encode_content(b"AZ", &textbook_table(), ETX),
            Err(Error::InvalidCodeTable(CodeTableError::MissingCode { symbol: b'Z' }))
        ));
    }
}
