//! Token creation records.

use serde::{Deserialize, Serialize};

use crate::rune::Rune;

/// Properties of a newly etched rune.
///
/// Every field is optional on the wire; absence is distinct from a
/// legitimate zero.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Etching {
    /// Number of decimal places.
    pub divisibility: Option<u8>,
    /// Amount allocated to the etcher at creation.
    pub premine: Option<u128>,
    /// The name; allocated automatically when absent.
    pub rune: Option<Rune>,
    /// Bit field of spacer positions for name display.
    pub spacers: Option<u32>,
    /// Currency symbol.
    pub symbol: Option<char>,
    /// Open mint terms.
    pub terms: Option<Terms>,
    /// Opt-in to future protocol changes.
    pub turbo: bool,
}

impl Etching {
    /// Largest accepted divisibility.
    pub const MAX_DIVISIBILITY: u8 = u8::MAX;

    /// Largest accepted spacer bit field: one bit per gap of a
    /// 28-character name.
    pub const MAX_SPACERS: u32 = 0b0000_0111_1111_1111_1111_1111_1111_1111;

    /// Total supply this etching can ever reach, or `None` when
    /// `premine + cap × amount` overflows 128 bits.
    pub fn supply(&self) -> Option<u128> {
        let premine = self.premine.unwrap_or_default();
        let cap = self.terms.and_then(|terms| terms.cap).unwrap_or_default();
        let amount = self
            .terms
            .and_then(|terms| terms.amount)
            .unwrap_or_default();

        premine.checked_add(cap.checked_mul(amount)?)
    }
}

/// Open mint terms of an etching.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Terms {
    /// Amount minted per mint transaction.
    pub amount: Option<u128>,
    /// Maximum number of mints.
    pub cap: Option<u128>,
    /// Absolute block height window `(start, end)`.
    pub height: (Option<u64>, Option<u64>),
    /// Block height window relative to the etching height.
    pub offset: (Option<u64>, Option<u64>),
}
