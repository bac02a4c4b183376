//! Compression statistics for one encode call.
//!
//! Records what the encoder decided (how many symbols, how long the longest
//! code is, how wide the header fields are) and how big each section came
//! out, so callers can report on a run without re-parsing the artifact.

use std::time::Duration;

/// Sizes and code shape of a single compressed artifact.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CompressionStats {
    /// Bytes of uncompressed input
    pub input_bytes: u64,

    /// Bytes of code-length header (bit width byte included)
    pub header_bytes: u64,

    /// Bytes of packed content
    pub content_bytes: u64,

    /// Symbols with a code, sentinel included
    pub distinct_symbols: usize,

    /// Longest assigned code, in bits
    pub max_code_length: u32,

    /// Bits per header length field
    pub bit_width: u8,

    /// Time spent in the encoder
    pub elapsed: Duration,
}

impl CompressionStats {
    /// Total artifact size.
    pub fn compressed_bytes(&self) -> u64 {
        self.header_bytes + self.content_bytes
    }

    /// Compute compression ratio (compressed / raw).
    ///
    /// Returns 0.0 for empty input.
    pub fn compression_ratio(&self) -> f64 {
        if self.input_bytes == 0 {
            0.0
        } else {
            self.compressed_bytes() as f64 / self.input_bytes as f64
        }
    }

    /// Average content bits spent per input symbol (sentinel excluded).
    pub fn bits_per_symbol(&self) -> f64 {
        if self.input_bytes == 0 {
            0.0
        } else {
            (self.content_bytes * 8) as f64 / self.input_bytes as f64
        }
    }

    /// Print a human-readable summary to stdout.
    pub fn print_summary(&self) {
        println!("\n=== Compression Summary ===");
        println!("Input:      {} bytes", self.input_bytes);
        println!(
            "Compressed: {} bytes (header {} + content {})",
            self.compressed_bytes(),
            self.header_bytes,
            self.content_bytes
        );
        println!("Ratio:      {:.1}%", self.compression_ratio() * 100.0);
        println!("Bits/symbol: {:.3}", self.bits_per_symbol());
        println!();
        println!("=== Code ===");
        println!("Symbols:         {}", self.distinct_symbols);
        println!("Max code length: {} bits", self.max_code_length);
        println!("Header width:    {} bits/field", self.bit_width);
        println!("Elapsed:         {} us", self.elapsed.as_micros());
        println!();
    }

    /// Export stats as `key=value` lines (for parsing/testing).
    pub fn export_text(&self) -> String {
        format!(
            "input_bytes={}\n\
             header_bytes={}\n\
             content_bytes={}\n\
             compressed_bytes={}\n\
             compression_ratio={:.4}\n\
             distinct_symbols={}\n\
             max_code_length={}\n\
             bit_width={}\n",
            self.input_bytes,
            self.header_bytes,
            self.content_bytes,
            self.compressed_bytes(),
            self.compression_ratio(),
            self.distinct_symbols,
            self.max_code_length,
            self.bit_width,
        )
    }
}
