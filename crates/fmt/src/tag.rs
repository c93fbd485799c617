//! Field tags of the runestone wire format.

use crate::message::FieldMap;

/// Integer key identifying a field in the flat integer sequence.
///
/// The numbering is fixed by the external protocol.  Even tags must be
/// understood for a message to be meaningful; unknown odd tags are
/// skipped, which is what lets old decoders ignore fields added later.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tag {
    /// Marks the start of the edict run; every following integer is edict
    /// data.
    Body = 0,
    /// Etching/terms/turbo flag bits.
    Flags = 2,
    /// Name of the etched rune.
    Rune = 4,
    /// Amount allocated to the etcher.
    Premine = 6,
    /// Maximum number of mints.
    Cap = 8,
    /// Amount per mint.
    Amount = 10,
    /// First block of the absolute mint window.
    HeightStart = 12,
    /// Last block of the absolute mint window.
    HeightEnd = 14,
    /// First block of the mint window relative to the etching height.
    OffsetStart = 16,
    /// Last block of the mint window relative to the etching height.
    OffsetEnd = 18,
    /// Rune id to mint, as a `(block, tx)` value pair.
    Mint = 20,
    /// Default output for unallocated runes.
    Pointer = 22,
    /// Reserved; invalidates any message carrying it.
    Cenotaph = 126,

    /// Decimal places of the etched rune.
    Divisibility = 1,
    /// Spacer bit field for display of the etched rune name.
    Spacers = 3,
    /// Currency symbol of the etched rune.
    Symbol = 5,
    /// Reserved no-op.
    Nop = 127,
}

impl Tag {
    /// Emission order of recognized field tags during serialization.
    pub(crate) const ENCODE_ORDER: &'static [Tag] = &[
        Tag::Flags,
        Tag::Rune,
        Tag::Divisibility,
        Tag::Spacers,
        Tag::Symbol,
        Tag::Premine,
        Tag::Amount,
        Tag::Cap,
        Tag::HeightStart,
        Tag::HeightEnd,
        Tag::OffsetStart,
        Tag::OffsetEnd,
        Tag::Mint,
        Tag::Pointer,
    ];

    /// Whether `n` is a tag this codec understands.
    pub fn is_recognized(n: u128) -> bool {
        matches!(
            n,
            0 | 1 | 2 | 3 | 4 | 5 | 6 | 8 | 10 | 12 | 14 | 16 | 18 | 20 | 22 | 126 | 127
        )
    }

    /// Removes the first `N` values recorded under this tag, if `with`
    /// accepts them.
    ///
    /// On any failure the values stay put, leaving residue for the
    /// envelope's leftover-field checks.
    pub(crate) fn take<const N: usize, T>(
        self,
        fields: &mut FieldMap,
        with: impl Fn([u128; N]) -> Option<T>,
    ) -> Option<T> {
        let tag = u128::from(self);
        let values = fields.get_mut(&tag)?;

        let mut buffer = [0; N];
        for (i, slot) in buffer.iter_mut().enumerate() {
            *slot = *values.get(i)?;
        }

        let parsed = with(buffer)?;

        values.drain(0..N);
        if values.is_empty() {
            fields.remove(&tag);
        }

        Some(parsed)
    }

    /// Records `values` under this tag, behind any already recorded.
    pub(crate) fn push<const N: usize>(self, values: [u128; N], fields: &mut FieldMap) {
        fields.entry(self.into()).or_default().extend(values);
    }

    /// Records a single value under this tag when present.
    pub(crate) fn push_option(self, value: Option<u128>, fields: &mut FieldMap) {
        if let Some(value) = value {
            self.push([value], fields);
        }
    }
}

impl From<Tag> for u128 {
    fn from(tag: Tag) -> Self {
        tag as u128
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wire_values_are_fixed() {
        assert_eq!(u128::from(Tag::Body), 0);
        assert_eq!(u128::from(Tag::Flags), 2);
        assert_eq!(u128::from(Tag::Rune), 4);
        assert_eq!(u128::from(Tag::Premine), 6);
        assert_eq!(u128::from(Tag::Cap), 8);
        assert_eq!(u128::from(Tag::Amount), 10);
        assert_eq!(u128::from(Tag::HeightStart), 12);
        assert_eq!(u128::from(Tag::HeightEnd), 14);
        assert_eq!(u128::from(Tag::OffsetStart), 16);
        assert_eq!(u128::from(Tag::OffsetEnd), 18);
        assert_eq!(u128::from(Tag::Mint), 20);
        assert_eq!(u128::from(Tag::Pointer), 22);
        assert_eq!(u128::from(Tag::Cenotaph), 126);
        assert_eq!(u128::from(Tag::Divisibility), 1);
        assert_eq!(u128::from(Tag::Spacers), 3);
        assert_eq!(u128::from(Tag::Symbol), 5);
        assert_eq!(u128::from(Tag::Nop), 127);
    }

    #[test]
    fn recognition_covers_exactly_the_enumeration() {
        for n in 0u128..130 {
            let expected = [0, 1, 2, 3, 4, 5, 6, 8, 10, 12, 14, 16, 18, 20, 22, 126, 127]
                .contains(&n);
            assert_eq!(Tag::is_recognized(n), expected, "{n}");
        }
    }

    #[test]
    fn take_drains_on_success() {
        let mut fields = FieldMap::new();
        Tag::Flags.push([3], &mut fields);

        assert_eq!(Tag::Flags.take(&mut fields, |[flags]| Some(flags)), Some(3));
        assert!(fields.is_empty());
    }

    #[test]
    fn take_leaves_values_on_rejection() {
        let mut fields = FieldMap::new();
        Tag::Divisibility.push([300], &mut fields);

        let taken = Tag::Divisibility.take(&mut fields, |[d]| u8::try_from(d).ok());
        assert_eq!(taken, None);
        assert_eq!(fields[&u128::from(Tag::Divisibility)].len(), 1);
    }

    #[test]
    fn take_consumes_front_of_repeated_values() {
        let mut fields = FieldMap::new();
        Tag::Divisibility.push([4], &mut fields);
        Tag::Divisibility.push([5], &mut fields);

        assert_eq!(Tag::Divisibility.take(&mut fields, |[d]| Some(d)), Some(4));
        assert_eq!(fields[&u128::from(Tag::Divisibility)].len(), 1);
    }

    #[test]
    fn take_of_pair_needs_both_values() {
        let mut fields = FieldMap::new();
        Tag::Mint.push([1], &mut fields);

        let taken = Tag::Mint.take(&mut fields, |[block, tx]| Some((block, tx)));
        assert_eq!(taken, None);
        assert_eq!(fields[&u128::from(Tag::Mint)].len(), 1);

        Tag::Mint.push([7], &mut fields);
        let taken = Tag::Mint.take(&mut fields, |[block, tx]| Some((block, tx)));
        assert_eq!(taken, Some((1, 7)));
        assert!(fields.is_empty());
    }

    #[test]
    fn push_option_skips_absent_values() {
        let mut fields = FieldMap::new();
        Tag::Pointer.push_option(None, &mut fields);
        assert!(fields.is_empty());

        Tag::Pointer.push_option(Some(2), &mut fields);
        assert_eq!(fields[&u128::from(Tag::Pointer)].len(), 1);
    }
}
