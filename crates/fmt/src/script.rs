//! Script-level transcoding of integer payloads.
//!
//! A runestone output script is the two-opcode preamble followed by data
//! pushes of the concatenated varint payload:
//!
//! ```text
//! OP_RETURN OP_13 <push> <push> ...
//! ```
//!
//! `OP_13` is the magic number separating this protocol's outputs from
//! other `OP_RETURN` uses; no push may exceed
//! [`MAX_SCRIPT_ELEMENT_SIZE`] bytes and the whole script is capped at
//! [`MAX_SCRIPT_SIZE`] bytes.

use bitcoin::constants::MAX_SCRIPT_ELEMENT_SIZE;
use bitcoin::opcodes::all::OP_RETURN;
use bitcoin::script::{Builder, Instruction, PushBytesBuf};
use bitcoin::{Script, ScriptBuf};

use runes_codec::{VarintError, leb128};

use crate::constants::{MAGIC_NUMBER, MAX_SCRIPT_SIZE, VARINT_BYTE_LIMIT};
use crate::errors::{RunestoneError, ScriptBuildError};

/// Builds the output script carrying `integers`.
///
/// The varint payload is chunked so that no single push exceeds
/// [`MAX_SCRIPT_ELEMENT_SIZE`] bytes; an empty sequence yields the bare
/// two-opcode preamble.
///
/// # Errors
///
/// [`ScriptBuildError::OversizedScript`] when the assembled script would
/// exceed [`MAX_SCRIPT_SIZE`] bytes.
pub fn encode_integers(integers: &[u128]) -> Result<ScriptBuf, ScriptBuildError> {
    let mut payload = Vec::new();
    for &n in integers {
        leb128::encode_to_vec(n, &mut payload);
    }

    let mut builder = Builder::new()
        .push_opcode(OP_RETURN)
        .push_opcode(MAGIC_NUMBER);

    for chunk in payload.chunks(MAX_SCRIPT_ELEMENT_SIZE) {
        let push = PushBytesBuf::try_from(chunk.to_vec()).map_err(|_| {
            ScriptBuildError::PayloadChunkConversion {
                chunk_size: chunk.len(),
            }
        })?;
        builder = builder.push_slice(push);
    }

    let script = builder.into_script();
    if script.len() > MAX_SCRIPT_SIZE {
        return Err(ScriptBuildError::OversizedScript { len: script.len() });
    }

    Ok(script)
}

/// Whether `script` starts with the runestone preamble.
///
/// Callers scanning transaction outputs use this to pick the tagged
/// output before attempting a full decode.
pub fn is_payload_script(script: &Script) -> bool {
    let mut instructions = script.instructions();

    instructions.next() == Some(Ok(Instruction::Op(OP_RETURN)))
        && instructions.next() == Some(Ok(Instruction::Op(MAGIC_NUMBER)))
}

/// Collects the data-push payload of a recognized script.
///
/// Returns `None` when the preamble does not match; recognition failures
/// are not errors because scans probe every output of a transaction.
pub(crate) fn payload(script: &Script) -> Option<Result<Vec<u8>, RunestoneError>> {
    let mut instructions = script.instructions();

    if instructions.next() != Some(Ok(Instruction::Op(OP_RETURN))) {
        return None;
    }
    if instructions.next() != Some(Ok(Instruction::Op(MAGIC_NUMBER))) {
        return None;
    }

    let mut payload = Vec::new();
    for instruction in instructions {
        match instruction {
            Ok(Instruction::PushBytes(push)) => payload.extend_from_slice(push.as_bytes()),
            Ok(Instruction::Op(_)) => return Some(Err(RunestoneError::OpcodeInPayload)),
            Err(_) => return Some(Err(RunestoneError::InvalidScript)),
        }
    }

    Some(Ok(payload))
}

/// Splits a payload buffer into its varint-encoded integers.
pub(crate) fn integers(payload: &[u8]) -> Result<Vec<u128>, VarintError> {
    let mut integers = Vec::new();
    let mut i = 0;

    while i < payload.len() {
        let (n, consumed) = leb128::decode_limited(&payload[i..], VARINT_BYTE_LIMIT)?;
        integers.push(n);
        i += consumed;
    }

    Ok(integers)
}
