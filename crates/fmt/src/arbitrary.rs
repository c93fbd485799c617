use arbitrary::{Arbitrary, Unstructured};

use crate::edict::Edict;
use crate::rune::Rune;
use crate::rune_id::RuneId;

impl<'a> Arbitrary<'a> for Rune {
    fn arbitrary(u: &mut Unstructured<'a>) -> arbitrary::Result<Self> {
        Ok(Rune(u128::arbitrary(u)?))
    }
}

impl<'a> Arbitrary<'a> for RuneId {
    fn arbitrary(u: &mut Unstructured<'a>) -> arbitrary::Result<Self> {
        let block = u64::arbitrary(u)?;
        // The tx index is reserved to zero at block zero.
        let tx = if block == 0 { 0 } else { u32::arbitrary(u)? };
        Ok(RuneId { block, tx })
    }
}

impl<'a> Arbitrary<'a> for Edict {
    fn arbitrary(u: &mut Unstructured<'a>) -> arbitrary::Result<Self> {
        Ok(Edict {
            id: RuneId::arbitrary(u)?,
            amount: u128::arbitrary(u)?,
            output: u32::arbitrary(u)?,
        })
    }
}
