//! canonhuff-core: canonical Huffman compression of byte buffers
//!
//! The artifact stores only a table of code lengths, never the Huffman tree.
//! Encoder and decoder both turn those lengths into the same canonical codes,
//! and the content is terminated by a reserved sentinel symbol so trailing
//! padding is never decoded.
//!
//! # Architecture
//!
//! - `alphabet`: symbol range and sentinel configuration
//! - `bitio`: MSB-first bit reading/writing
//! - `frequency`: symbol counting
//! - `tree`: Huffman tree construction and code-length extraction
//! - `canonical`: canonical code assignment
//! - `header`: code-length header codec
//! - `decode_tree`: decode tree rebuilt from codes
//! - `content`: content bitstream codec
//! - `codec`: whole-buffer compress/decompress
//! - `stats`: per-run compression statistics
//!
//! # Example
//! ```
//! let artifact = canonhuff_core::compress(b"AAAAAABBBCCD").unwrap();
//! assert_eq!(canonhuff_core::decompress(&artifact).unwrap(), b"AAAAAABBBCCD");
//! ```

pub mod alphabet;
pub mod bitio;
pub mod canonical;
pub mod codec;
pub mod content;
pub mod decode_tree;
pub mod error;
pub mod frequency;
pub mod header;
pub mod stats;
pub mod tree;

// Re-export commonly used types
pub use alphabet::Alphabet;
pub use codec::{compress, decompress, Codec};
pub use error::{Error, Result};
pub use stats::CompressionStats;
