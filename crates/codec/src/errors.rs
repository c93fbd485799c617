use thiserror::Error;

/// Errors from decoding LEB128 varints.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum VarintError {
    /// Input ended before a byte without the continuation bit was seen.
    #[error("varint not terminated")]
    Unterminated,

    /// The varint ran past the configured byte ceiling.
    #[error("varint longer than {limit} byte limit")]
    Overlong {
        /// The ceiling that was exceeded.
        limit: usize,
    },

    /// The decoded value does not fit in 128 bits.
    #[error("varint overflows 128 bits")]
    Overflow,
}

/// Errors from unpacking a byte buffer out of a `u128` sequence.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum PackError {
    /// The integer sequence was empty, missing its length prefix.
    #[error("empty integer sequence")]
    Empty,

    /// The declared byte count exceeds the bytes actually present.
    #[error("declared length {declared} exceeds {available} available bytes")]
    LengthOverflow {
        /// Byte count carried in the length prefix.
        declared: u128,
        /// Payload bytes actually present after the prefix.
        available: usize,
    },
}
