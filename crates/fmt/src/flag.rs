//! Flag bits carried by the Flags field.

/// Bit position within the Flags field.
///
/// Only these bits may be set; anything else invalidates the message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flag {
    /// An etching is present.
    Etching = 0,
    /// The etching carries open mint terms.
    Terms = 1,
    /// The etching opts into future protocol changes.
    Turbo = 2,
    /// Reserved; setting it invalidates the message.
    Cenotaph = 127,
}

impl Flag {
    /// The bit mask for this flag.
    pub fn mask(self) -> u128 {
        1 << self as u8
    }

    /// Tests this flag and clears it from `flags`.
    pub fn take(self, flags: &mut u128) -> bool {
        let mask = self.mask();
        let set = *flags & mask != 0;
        *flags &= !mask;
        set
    }

    /// Sets this flag in `flags`.
    pub fn set(self, flags: &mut u128) {
        *flags |= self.mask();
    }
}
