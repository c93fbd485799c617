//! Transfer edicts and their delta encoding.

use serde::{Deserialize, Serialize};

use crate::errors::RunestoneError;
use crate::rune_id::RuneId;

/// A single transfer instruction: move `amount` of the rune `id` to the
/// transaction output at index `output`.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Edict {
    /// The rune being transferred.
    pub id: RuneId,
    /// Amount transferred, in atomic units.
    pub amount: u128,
    /// Index of the receiving transaction output.
    pub output: u32,
}

impl Edict {
    /// Delta-encodes edicts into wire quadruples
    /// `[block_delta, tx, amount, output]`.
    ///
    /// Edicts are sorted by id first.  Each block height is emitted as
    /// the difference from the previous edict's; the tx index is a
    /// difference only when that block delta is zero and an absolute
    /// value otherwise (see [`RuneId::delta`]).  The first edict is
    /// relative to `0:0`.
    pub fn delta_encode(edicts: &[Edict]) -> Vec<[u128; 4]> {
        let mut sorted = edicts.to_vec();
        sorted.sort_by_key(|edict| edict.id);

        let mut previous = RuneId::default();
        let mut quads = Vec::with_capacity(sorted.len());

        for edict in sorted {
            let (block, tx) = previous
                .delta(edict.id)
                .expect("edict: ids sorted ascending");
            quads.push([block, tx, edict.amount, edict.output.into()]);
            previous = edict.id;
        }

        quads
    }

    /// Decodes wire quadruples back into absolute edicts.
    ///
    /// # Errors
    ///
    /// - [`RunestoneError::EdictRuneId`] when accumulation overflows the
    ///   id range or resolves into the reserved `(0, tx > 0)` form.
    /// - [`RunestoneError::EdictOutput`] when an output index exceeds the
    ///   32-bit range.
    pub fn delta_decode(quads: &[[u128; 4]]) -> Result<Vec<Edict>, RunestoneError> {
        let mut previous = RuneId::default();
        let mut edicts = Vec::with_capacity(quads.len());

        for &[block, tx, amount, output] in quads {
            let id = previous
                .next_from_delta(block, tx)
                .ok_or(RunestoneError::EdictRuneId)?;
            let output = u32::try_from(output).map_err(|_| RunestoneError::EdictOutput)?;

            edicts.push(Edict { id, amount, output });
            previous = id;
        }

        Ok(edicts)
    }
}
