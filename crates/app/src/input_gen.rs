//! Sample text generation for the demo command.
//!
//! The demo needs input the codec accepts (7-bit bytes, never the end-of-text
//! control character) with a realistic, skewed symbol distribution so the
//! resulting code lengths vary. Generated data mixes:
//! - Word-like text from a small vocabulary (heavily skewed frequencies)
//! - Runs of a single character (very short codes)
//! - Uniform noise over the printable range (long codes)

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

const WORDS: &[&str] = &[
    "the", "of", "and", "a", "to", "in", "is", "code", "tree", "length", "symbol", "canonical",
    "huffman", "prefix", "bit", "byte", "stream", "header", "leaf", "sentinel",
];

const PUNCTUATION: &[u8] = b".,;:!?";

/// Generate `size_bytes` of seeded sample text.
///
/// Every byte is printable ASCII, a space, a tab or a newline.
pub fn generate_sample_text(seed: u64, size_bytes: usize) -> Vec<u8> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let mut data = Vec::with_capacity(size_bytes + 64);

    while data.len() < size_bytes {
        match rng.gen_range(0..10u8) {
            // 70% prose
            0..=6 => push_sentence(&mut rng, &mut data),

            // 10% runs
            7 => {
                let byte = if rng.gen_bool(0.5) { b' ' } else { b'-' };
                let run = rng.gen_range(8..=64);
                data.extend(std::iter::repeat(byte).take(run));
                data.push(b'\n');
            }

            // 20% printable noise
            _ => {
                let len = rng.gen_range(16..=128);
                data.extend((0..len).map(|_| rng.gen_range(b' '..=b'~')));
                data.push(b'\n');
            }
        }
    }

    data.truncate(size_bytes);
    data
}

fn push_sentence(rng: &mut ChaCha8Rng, data: &mut Vec<u8>) {
    let words = rng.gen_range(3..=14);
    for i in 0..words {
        // Low indices are picked far more often than high ones.
        let idx = rng.gen_range(0..WORDS.len()).min(rng.gen_range(0..WORDS.len()));
        let word = WORDS[idx].as_bytes();
        if i == 0 {
            data.push(word[0].to_ascii_uppercase());
            data.extend_from_slice(&word[1..]);
        } else {
            data.push(if rng.gen_bool(0.05) { b'\t' } else { b' ' });
            data.extend_from_slice(word);
        }
    }
    data.push(PUNCTUATION[rng.gen_range(0..PUNCTUATION.len())]);
    data.push(if rng.gen_bool(0.2) { b'\n' } else { b' ' });
}
