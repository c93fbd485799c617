//! Wire-format constants.
//!
//! These values are part of the external protocol contract and must not
//! change without breaking compatibility with deployed decoders.

use bitcoin::opcodes::{self, Opcode};

/// Opcode distinguishing runestone outputs from other `OP_RETURN` uses.
pub const MAGIC_NUMBER: Opcode = opcodes::all::OP_PUSHNUM_13;

/// Upper bound on a full output script, in bytes.
pub const MAX_SCRIPT_SIZE: usize = 10_000;

/// Ceiling on a single varint inside script payloads: a varint may span
/// this many bytes plus one terminator, enough for any 128-bit value.
pub const VARINT_BYTE_LIMIT: usize = 18;

/// The largest representable token supply.
pub const MAX_SUPPLY: u128 = u128::MAX;
