use std::num::ParseIntError;

use runes_codec::VarintError;
use thiserror::Error;

use crate::constants::MAX_SCRIPT_SIZE;

/// Failures while decoding a runestone from a script payload.
///
/// Decode entry points return these in a non-empty list.  A non-success
/// result means the output is not a valid runestone; transaction scans
/// normally skip such an output rather than abort.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum RunestoneError {
    /// The script failed to parse as Bitcoin script.
    #[error("invalid script")]
    InvalidScript,

    /// A non-push instruction appeared after the payload preamble.
    #[error("non-push opcode in payload")]
    OpcodeInPayload,

    /// A varint in the payload was malformed.
    #[error("varint: {0}")]
    Varint(#[from] VarintError),

    /// The edict run after the `Body` tag was not a multiple of four
    /// integers.
    #[error("trailing integers in edict body")]
    TrailingIntegers,

    /// A field tag with no following value.
    #[error("field {0} is missing its value")]
    TruncatedField(u128),

    /// An even tag this codec does not understand, or understands but
    /// could not consume.
    #[error("unrecognized even tag {0}")]
    UnrecognizedEvenTag(u128),

    /// An edict id delta that does not resolve to a valid rune id.
    #[error("invalid edict rune id")]
    EdictRuneId,

    /// An edict output index outside the 32-bit range.
    #[error("invalid edict output")]
    EdictOutput,

    /// Flag bits outside the recognized set.
    #[error("unrecognized flag bits {0:#x}")]
    UnrecognizedFlag(u128),

    /// An etching whose premine plus cap × amount overflows the supply
    /// range.
    #[error("supply overflows 128 bits")]
    SupplyOverflow,
}

/// Failures while building a runestone output script.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum ScriptBuildError {
    /// The assembled script would exceed the script size ceiling.
    #[error("script of {len} bytes exceeds the {} byte ceiling", MAX_SCRIPT_SIZE)]
    OversizedScript {
        /// Size the script would have had.
        len: usize,
    },

    /// A payload chunk could not be converted into push bytes.
    #[error("failed to convert {chunk_size} byte payload chunk to push bytes")]
    PayloadChunkConversion {
        /// Size of the chunk that failed to convert.
        chunk_size: usize,
    },
}

/// Failures while parsing a rune name.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum RuneParseError {
    /// A character outside `A`–`Z`.
    #[error("invalid character `{0}` in rune name")]
    Character(char),

    /// The name encodes a value past 2^128 − 1.
    #[error("rune name out of range")]
    Range,
}

/// Failures while parsing a `block:tx` rune id string.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RuneIdParseError {
    /// The `:` separator was missing.
    #[error("missing `:` separator in rune id")]
    Separator,

    /// The block height was not a valid integer.
    #[error("invalid block height: {0}")]
    Block(ParseIntError),

    /// The transaction index was not a valid integer.
    #[error("invalid transaction index: {0}")]
    Tx(ParseIntError),
}
