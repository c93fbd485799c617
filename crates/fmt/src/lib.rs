//! Runes protocol wire format.
//!
//! This crate implements the layered codec that turns a [`Runestone`]
//! into a Bitcoin output script and back: varint payloads (via
//! `runes-codec`), the `OP_RETURN OP_13` script framing, the tagged-field
//! message model, and the envelope assembly rules (flag bits, optional
//! etching/mint/pointer records, delta-encoded edicts).
//!
//! Every entry point is a pure function of its inputs; nothing here
//! performs I/O or retains state between calls, so the whole API is safe
//! to use concurrently and to retry.

#[cfg(feature = "arbitrary")]
mod arbitrary;
pub mod constants;
mod edict;
mod errors;
mod etching;
mod flag;
mod message;
mod rune;
mod rune_id;
mod runestone;
pub mod script;
mod serde;
mod tag;

pub use edict::Edict;
pub use errors::{RuneIdParseError, RuneParseError, RunestoneError, ScriptBuildError};
pub use etching::{Etching, Terms};
pub use flag::Flag;
pub use message::Message;
pub use rune::Rune;
pub use rune_id::RuneId;
pub use runestone::Runestone;
pub use tag::Tag;

// Used by the integration tests under `tests/`.
#[cfg(test)]
use hex as _;
#[cfg(test)]
use proptest as _;
