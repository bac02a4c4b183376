//! Error types for the canonhuff codec.
//!
//! Every failure is reported as a structured value; the codec never panics on
//! bad input and never hands back partial output alongside an error.

use thiserror::Error;

/// Top-level error type for all codec operations.
///
/// The four stream-level kinds map to the ways an encode or decode can fail:
/// - Unsupported symbol: input byte outside the configured alphabet
/// - Malformed header: the code-length header contradicts itself
/// - Truncated stream: fewer bytes than the artifact declares
/// - Invalid code table: the lengths cannot form a usable prefix code
#[derive(Debug, Error)]
pub enum Error {
    /// Input byte is outside the alphabet or collides with the sentinel
    #[error("unsupported symbol {value:#04x} at offset {offset}")]
    UnsupportedSymbol { value: u8, offset: usize },

    /// Code-length header is inconsistent
    #[error("malformed header: {0}")]
    MalformedHeader(#[from] HeaderError),

    /// Artifact ended before a declared section was complete
    #[error("truncated stream: {0}")]
    TruncatedStream(#[from] TruncationError),

    /// Code lengths or codes do not describe a valid prefix code
    #[error("invalid code table: {0}")]
    InvalidCodeTable(#[from] CodeTableError),

    /// Bit I/O operation failed (e.g., reading past end of buffer)
    #[error("bit I/O error: {0}")]
    BitIo(#[from] BitIoError),

    /// Alphabet configuration error
    #[error("configuration error: {0}")]
    Config(String),
}

/// Bit-level I/O errors.
#[derive(Debug, Error)]
pub enum BitIoError {
    /// Attempted to read past the end of the buffer
    #[error("unexpected end of bit stream")]
    UnexpectedEof,

    /// Invalid bit count (more than 64 bits in one call)
    #[error("invalid bit count: {0}")]
    InvalidBitCount(usize),
}

/// Code-length header errors.
#[derive(Debug, Error)]
pub enum HeaderError {
    /// Header declares zero bits per length field
    #[error("bit width is zero")]
    ZeroBitWidth,

    /// Header declares more bits per field than a length can need
    #[error("bit width {bit_width} exceeds maximum {max}")]
    BitWidthTooLarge { bit_width: u8, max: u8 },

    /// A length field is deeper than any tree over the alphabet can reach
    #[error("symbol {symbol} has length {length}, maximum for this alphabet is {max}")]
    LengthOutOfRange { symbol: u8, length: u32, max: u32 },
}

/// Missing-bytes errors, one per artifact section.
#[derive(Debug, Error)]
pub enum TruncationError {
    /// Artifact is empty
    #[error("missing bit width byte")]
    MissingBitWidth,

    /// Length table is shorter than the bit width implies
    #[error("length table needs {required} bytes, got {available}")]
    Header { required: usize, available: usize },

    /// Content ran out before the end-of-text sentinel
    #[error("content ended after {bits_read} bits without end-of-text marker")]
    Content { bits_read: usize },
}

/// Code table construction and lookup errors.
#[derive(Debug, Error)]
pub enum CodeTableError {
    /// No symbols at all (cannot canonicalize)
    #[error("empty code-length list")]
    Empty,

    /// A present symbol was given a zero-bit code
    #[error("symbol {symbol} has zero code length")]
    ZeroLength { symbol: u8 },

    /// Lengths claim more codes than the code space holds
    #[error("code space exhausted at symbol {symbol} (length {length})")]
    Oversubscribed { symbol: u8, length: u32 },

    /// Longest code cannot be described in an 8-bit length field
    #[error("code length {length} exceeds maximum 255")]
    CodeTooLong { length: u32 },

    /// Sentinel has no code, so content could never terminate
    #[error("end-of-text symbol {sentinel:#04x} has no code")]
    MissingSentinel { sentinel: u8 },

    /// One code runs through or onto another symbol's leaf
    #[error("code for symbol {symbol} conflicts with an existing code")]
    PrefixConflict { symbol: u8 },

    /// Bit path leads nowhere in the decode tree
    #[error("no code matches bits ending at position {position}")]
    UnknownCode { position: usize },

    /// Symbol has no entry in the code table
    #[error("symbol {symbol:#04x} has no code")]
    MissingCode { symbol: u8 },
}

/// Type alias for Result with our Error type
pub type Result<T> = std::result::Result<T, Error>;
