//! Rune identifiers.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::errors::RuneIdParseError;

/// Identifies a rune by the block height and intra-block transaction
/// index of its etching transaction.
///
/// Ids order by `(block, tx)`, which is also the order edict lists are
/// normalized to before delta encoding.
#[derive(
    Debug, Default, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub struct RuneId {
    /// Block height of the etching transaction.
    pub block: u64,
    /// Index of the etching transaction within its block.
    pub tx: u32,
}

impl RuneId {
    /// Constructs an id, rejecting the reserved `(0, tx > 0)` range.
    pub fn new(block: u64, tx: u32) -> Option<RuneId> {
        let id = RuneId { block, tx };

        if id.block == 0 && id.tx > 0 {
            return None;
        }

        Some(id)
    }

    /// Difference from `self` to `next` as wire deltas.
    ///
    /// The tx index is relative only within the same block; across blocks
    /// it restarts as an absolute value, which keeps same-block clusters
    /// small on the wire.
    pub fn delta(self, next: RuneId) -> Option<(u128, u128)> {
        let block = next.block.checked_sub(self.block)?;

        let tx = if block == 0 {
            next.tx.checked_sub(self.tx)?
        } else {
            next.tx
        };

        Some((block.into(), tx.into()))
    }

    /// Applies wire deltas produced by [`RuneId::delta`].
    pub fn next_from_delta(self, block: u128, tx: u128) -> Option<RuneId> {
        RuneId::new(
            self.block.checked_add(block.try_into().ok()?)?,
            if block == 0 {
                self.tx.checked_add(tx.try_into().ok()?)?
            } else {
                tx.try_into().ok()?
            },
        )
    }
}

impl fmt::Display for RuneId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.block, self.tx)
    }
}

impl FromStr for RuneId {
    type Err = RuneIdParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (block, tx) = s.split_once(':').ok_or(RuneIdParseError::Separator)?;

        Ok(RuneId {
            block: block.parse().map_err(RuneIdParseError::Block)?,
            tx: tx.parse().map_err(RuneIdParseError::Tx)?,
        })
    }
}
