//! Integration tests for the full compress/decompress pipeline.
//!
//! These tests drive the public API end to end: input -> artifact -> output,
//! checking that output matches input and that the artifact layout matches
//! the documented header/content format.

use canonhuff_core::{
    alphabet::{Alphabet, DEFAULT_SENTINEL},
    canonical::{CodeLength, CodeLengths, CodeTable},
    compress,
    content::encode_content,
    decompress,
    header::encode_header,
    Codec, Error,
};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Lengths 1, 2, ..., n-1, n-1 over the first `n` accepted symbols, sentinel
/// first so it always has a code.
fn skewed_table(alphabet: &Alphabet, n: usize) -> CodeTable {
    let mut symbols = vec![alphabet.sentinel()];
    symbols.extend(alphabet.symbols().filter(|&s| alphabet.accepts(s)).take(n - 1));
    let entries = symbols
        .iter()
        .enumerate()
        .map(|(i, &s)| CodeLength::new(s, (i as u32 + 1).min(n as u32 - 1)))
        .collect();
    CodeTable::assign(&CodeLengths::from_unsorted(entries)).expect("skewed lengths are complete")
}

/// Build an artifact by hand from an explicit code table.
fn artifact_from_table(table: &CodeTable, alphabet: &Alphabet, message: &[u8]) -> Vec<u8> {
    let mut artifact = encode_header(table, alphabet).expect("header");
    artifact.extend(encode_content(message, table, alphabet.sentinel()).expect("content"));
    artifact
}

#[test]
fn test_round_trip_text() {
    let inputs: [&[u8]; 5] = [
        b"hello world! this is a test of the full pipeline with some repetition: aaaaaaaaaa bbbbbbbbbb",
        b"The quick brown fox jumps over the lazy dog.\n",
        b"x",
        b"\x00\x01\x02\x04\x7e",
        b"mississippi",
    ];

    for input in inputs {
        let artifact = compress(input).expect("compression failed");
        let decoded = decompress(&artifact).expect("decompression failed");
        assert_eq!(decoded, input, "output doesn't match input");
    }
}

#[test]
fn test_textbook_example() {
    let artifact = compress(b"AAAAAABBBCCD").unwrap();
    assert_eq!(decompress(&artifact).unwrap(), b"AAAAAABBBCCD");
}

#[test]
fn test_seeded_random_inputs() {
    let alphabet = Alphabet::default();
    let mut rng = ChaCha8Rng::seed_from_u64(0x5eed);

    for _ in 0..50 {
        let len = rng.gen_range(0..2000);
        let spread = rng.gen_range(1..=126u8);
        let input: Vec<u8> = std::iter::repeat_with(|| rng.gen_range(0..=spread))
            .filter(|&b| alphabet.accepts(b))
            .take(len)
            .collect();

        let artifact = compress(&input).unwrap();
        assert_eq!(decompress(&artifact).unwrap(), input);
    }
}

#[test]
fn test_all_supported_symbols() {
    let alphabet = Alphabet::default();
    let input: Vec<u8> = alphabet.symbols().filter(|&s| alphabet.accepts(s)).collect();
    assert_eq!(input.len(), 126);

    let artifact = compress(&input).unwrap();
    assert_eq!(decompress(&artifact).unwrap(), input);
}

#[test]
fn test_empty_input() {
    let artifact = compress(b"").unwrap();
    assert!(decompress(&artifact).unwrap().is_empty());
}

#[test]
fn test_large_single_byte_input() {
    let input = vec![b'X'; 128 * 1024];
    let artifact = compress(&input).unwrap();

    // One bit per symbol plus a small fixed header
    assert!(artifact.len() < input.len() / 7);
    assert_eq!(artifact[0], 1);
    assert_eq!(decompress(&artifact).unwrap(), input);
}

#[test]
fn test_deterministic_output() {
    let input = b"determinism: same input, same bytes, every time";
    assert_eq!(compress(input).unwrap(), compress(input).unwrap());
}

#[test]
fn test_header_width_grows_with_skew() {
    // Fibonacci counts 1, 2, 3, 5, ... next to the sentinel's single count
    // turn the tree into a chain 18 levels deep.
    let fib: Vec<usize> = std::iter::successors(Some((1usize, 2usize)), |&(a, b)| Some((b, a + b)))
        .map(|(a, _)| a)
        .take(18)
        .collect();
    let mut input = Vec::new();
    for (i, &count) in fib.iter().enumerate() {
        input.extend(std::iter::repeat(b'a' + i as u8).take(count));
    }

    let (artifact, stats) = Codec::default().compress_with_stats(&input).unwrap();
    assert_eq!(stats.max_code_length, 18);
    assert_eq!(stats.bit_width, 5);
    assert_eq!(artifact[0], 5);
    assert_eq!(decompress(&artifact).unwrap(), input);
}

#[test]
fn test_seven_bit_header_round_trip() {
    let alphabet = Alphabet::default();
    let table = skewed_table(&alphabet, 127);
    assert_eq!(table.max_length(), 126);

    let message = b"the longest codes here are one hundred and twenty six bits~";
    let artifact = artifact_from_table(&table, &alphabet, message);
    assert_eq!(artifact[0], 7);
    assert_eq!(decompress(&artifact).unwrap(), message);
}

#[test]
fn test_eight_bit_header_round_trip() {
    let alphabet = Alphabet::full_byte(DEFAULT_SENTINEL);
    let table = skewed_table(&alphabet, 256);
    assert_eq!(table.max_length(), 255);

    let message: Vec<u8> = (0..=255u8).filter(|&b| b != DEFAULT_SENTINEL).rev().collect();
    let artifact = artifact_from_table(&table, &alphabet, &message);
    assert_eq!(artifact[0], 8);

    let codec = Codec::new(alphabet);
    assert_eq!(codec.decompress(&artifact).unwrap(), message);
}

#[test]
fn test_full_byte_alphabet_round_trip() {
    let codec = Codec::new(Alphabet::full_byte(0));
    let input: Vec<u8> = (1..=255u8).chain(1..=255u8).collect();

    let artifact = codec.compress(&input).unwrap();
    assert_eq!(codec.decompress(&artifact).unwrap(), input);
}

#[test]
fn test_corruption_detected_or_harmless() {
    let input = b"bit flips in the header must never panic the decoder";
    let artifact = compress(input).unwrap();

    for position in 0..artifact.len() {
        let mut corrupted = artifact.clone();
        corrupted[position] ^= 0x5A;
        // Either a structured error or some output; never a panic.
        let _ = decompress(&corrupted);
    }
}

#[test]
fn test_non_ascii_rejected() {
    let result = compress("naïve".as_bytes());
    assert!(matches!(result, Err(Error::UnsupportedSymbol { offset: 2, .. })));
}
