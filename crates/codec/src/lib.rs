//! Integer-level codecs for the Runes wire format.
//!
//! Everything here is a pure function over byte and integer buffers; the
//! tag and script layers live in `runes-fmt`.

mod errors;
pub use errors::{PackError, VarintError};

pub mod leb128;
pub mod pack;

// Used by the integration tests under `tests/`.
#[cfg(test)]
use proptest as _;
