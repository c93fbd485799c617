//! Packs byte buffers into `u128` sequences.
//!
//! Some collaborators move opaque bytes around as lists of 128-bit
//! integers rather than raw buffers.  The packed form is a byte-count
//! prefix followed by the buffer split into 16-byte little-endian groups,
//! the final group zero-padded on the high end.

use crate::errors::PackError;

/// Bytes carried per packed integer.
pub const GROUP_SIZE: usize = 16;

/// Packs a byte buffer into `[byte_count, groups...]`.
///
/// The empty buffer packs to `[0]`.
pub fn pack_bytes(bytes: &[u8]) -> Vec<u128> {
    let mut packed = Vec::with_capacity(1 + bytes.len().div_ceil(GROUP_SIZE));
    packed.push(bytes.len() as u128);

    for chunk in bytes.chunks(GROUP_SIZE) {
        let mut group = [0u8; GROUP_SIZE];
        group[..chunk.len()].copy_from_slice(chunk);
        packed.push(u128::from_le_bytes(group));
    }

    packed
}

/// Unpacks a byte buffer previously packed with [`pack_bytes`].
///
/// The byte-count prefix trims the padding of the final group.
///
/// # Errors
///
/// - [`PackError::Empty`] if `integers` has no length prefix.
/// - [`PackError::LengthOverflow`] if the declared count exceeds the
///   payload actually present (or `usize`).
pub fn unpack_bytes(integers: &[u128]) -> Result<Vec<u8>, PackError> {
    let (&declared, groups) = integers.split_first().ok_or(PackError::Empty)?;

    let available = groups.len() * GROUP_SIZE;
    let len = usize::try_from(declared)
        .ok()
        .filter(|len| *len <= available)
        .ok_or(PackError::LengthOverflow {
            declared,
            available,
        })?;

    let mut bytes = Vec::with_capacity(available);
    for group in groups {
        bytes.extend_from_slice(&group.to_le_bytes());
    }
    bytes.truncate(len);

    Ok(bytes)
}
