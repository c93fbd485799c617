//! Assembly and disassembly of the runestone envelope.

use bitcoin::{Script, ScriptBuf, Transaction};
use serde::{Deserialize, Serialize};

use crate::edict::Edict;
use crate::errors::{RunestoneError, ScriptBuildError};
use crate::etching::{Etching, Terms};
use crate::flag::Flag;
use crate::message::{FieldMap, Message};
use crate::rune::Rune;
use crate::rune_id::RuneId;
use crate::script;
use crate::tag::Tag;

/// The protocol envelope carried by one transaction output: a transfer
/// list plus optional token-creation, mint, and default-output records.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Runestone {
    /// Transfers, in ascending id order after decode.
    pub edicts: Vec<Edict>,
    /// Token creation record.
    pub etching: Option<Etching>,
    /// Rune to mint under its open terms.
    pub mint: Option<RuneId>,
    /// Output index receiving unallocated runes.
    pub pointer: Option<u32>,
}

impl Runestone {
    /// Assembles the envelope from a parsed message.
    ///
    /// This is the only layer with business-rule validation: flag bits,
    /// supply overflow, and residual even fields are errors here, while
    /// out-of-range optional etching fields (divisibility, spacers,
    /// symbol) are dropped silently — a deliberate leniency of the wire
    /// contract, not an oversight.
    ///
    /// # Errors
    ///
    /// Every problem found is reported, in decode order: edict body
    /// failures first, then [`RunestoneError::SupplyOverflow`],
    /// [`RunestoneError::UnrecognizedFlag`], and one
    /// [`RunestoneError::UnrecognizedEvenTag`] per even field left
    /// unconsumed.
    pub fn from_message(message: Message) -> Result<Runestone, Vec<RunestoneError>> {
        let Message { mut fields, body } = message;
        let mut errors = Vec::new();

        let edicts = match Edict::delta_decode(&body) {
            Ok(edicts) => edicts,
            Err(error) => {
                errors.push(error);
                Vec::new()
            }
        };

        let mut flags = Tag::Flags
            .take(&mut fields, |[flags]| Some(flags))
            .unwrap_or_default();

        let etching = Flag::Etching.take(&mut flags).then(|| Etching {
            divisibility: Tag::Divisibility.take(&mut fields, |[divisibility]| {
                u8::try_from(divisibility)
                    .ok()
                    .filter(|divisibility| *divisibility <= Etching::MAX_DIVISIBILITY)
            }),
            premine: Tag::Premine.take(&mut fields, |[premine]| Some(premine)),
            rune: Tag::Rune.take(&mut fields, |[rune]| Some(Rune(rune))),
            spacers: Tag::Spacers.take(&mut fields, |[spacers]| {
                u32::try_from(spacers)
                    .ok()
                    .filter(|spacers| *spacers <= Etching::MAX_SPACERS)
            }),
            symbol: Tag::Symbol.take(&mut fields, |[symbol]| {
                char::from_u32(u32::try_from(symbol).ok()?)
            }),
            terms: Flag::Terms.take(&mut flags).then(|| Terms {
                amount: Tag::Amount.take(&mut fields, |[amount]| Some(amount)),
                cap: Tag::Cap.take(&mut fields, |[cap]| Some(cap)),
                height: (
                    Tag::HeightStart.take(&mut fields, |[start]| u64::try_from(start).ok()),
                    Tag::HeightEnd.take(&mut fields, |[end]| u64::try_from(end).ok()),
                ),
                offset: (
                    Tag::OffsetStart.take(&mut fields, |[start]| u64::try_from(start).ok()),
                    Tag::OffsetEnd.take(&mut fields, |[end]| u64::try_from(end).ok()),
                ),
            }),
            turbo: Flag::Turbo.take(&mut flags),
        });

        let mint = Tag::Mint.take(&mut fields, |[block, tx]| {
            RuneId::new(u64::try_from(block).ok()?, u32::try_from(tx).ok()?)
        });

        let pointer = Tag::Pointer.take(&mut fields, |[pointer]| u32::try_from(pointer).ok());

        if etching.is_some_and(|etching| etching.supply().is_none()) {
            errors.push(RunestoneError::SupplyOverflow);
        }

        if flags != 0 {
            errors.push(RunestoneError::UnrecognizedFlag(flags));
        }

        for (&tag, _) in &fields {
            if tag % 2 == 0 {
                errors.push(RunestoneError::UnrecognizedEvenTag(tag));
            }
        }

        if errors.is_empty() {
            Ok(Runestone {
                edicts,
                etching,
                mint,
                pointer,
            })
        } else {
            Err(errors)
        }
    }

    /// Disassembles the envelope into its message form.
    ///
    /// A Flags field is always emitted, zero when there is no etching;
    /// every other field appears only when present.  Edicts are
    /// delta-encoded on the way out.
    pub fn to_message(&self) -> Message {
        let mut fields = FieldMap::new();

        let mut flags = 0;
        if let Some(etching) = &self.etching {
            Flag::Etching.set(&mut flags);

            if etching.terms.is_some() {
                Flag::Terms.set(&mut flags);
            }
            if etching.turbo {
                Flag::Turbo.set(&mut flags);
            }
        }
        Tag::Flags.push([flags], &mut fields);

        if let Some(etching) = &self.etching {
            Tag::Rune.push_option(etching.rune.map(|rune| rune.0), &mut fields);
            Tag::Divisibility.push_option(etching.divisibility.map(u128::from), &mut fields);
            Tag::Spacers.push_option(etching.spacers.map(u128::from), &mut fields);
            Tag::Symbol.push_option(etching.symbol.map(u128::from), &mut fields);
            Tag::Premine.push_option(etching.premine, &mut fields);

            if let Some(terms) = &etching.terms {
                Tag::Amount.push_option(terms.amount, &mut fields);
                Tag::Cap.push_option(terms.cap, &mut fields);
                Tag::HeightStart.push_option(terms.height.0.map(u128::from), &mut fields);
                Tag::HeightEnd.push_option(terms.height.1.map(u128::from), &mut fields);
                Tag::OffsetStart.push_option(terms.offset.0.map(u128::from), &mut fields);
                Tag::OffsetEnd.push_option(terms.offset.1.map(u128::from), &mut fields);
            }
        }

        if let Some(RuneId { block, tx }) = self.mint {
            Tag::Mint.push([block.into(), tx.into()], &mut fields);
        }

        Tag::Pointer.push_option(self.pointer.map(u128::from), &mut fields);

        Message {
            fields,
            body: Edict::delta_encode(&self.edicts),
        }
    }

    /// Builds the full output script for this runestone.
    pub fn encode_script(&self) -> Result<ScriptBuf, ScriptBuildError> {
        script::encode_integers(&self.to_message().into_integers())
    }

    /// Decodes a runestone from one output script.
    ///
    /// Returns `None` when the script is not a runestone output at all,
    /// and `Some(Err(..))` when it is recognized but malformed — callers
    /// normally treat the latter as "skip this output" too.
    pub fn decode_script(script: &Script) -> Option<Result<Runestone, Vec<RunestoneError>>> {
        let payload = match script::payload(script)? {
            Ok(payload) => payload,
            Err(error) => return Some(Err(vec![error])),
        };

        let integers = match script::integers(&payload) {
            Ok(integers) => integers,
            Err(error) => return Some(Err(vec![RunestoneError::Varint(error)])),
        };

        let message = match Message::from_integers(&integers) {
            Ok(message) => message,
            Err(errors) => return Some(Err(errors)),
        };

        Some(Runestone::from_message(message))
    }

    /// Scans a transaction's outputs for the first runestone script.
    pub fn extract_from_tx(tx: &Transaction) -> Option<Result<Runestone, Vec<RunestoneError>>> {
        tx.output
            .iter()
            .find_map(|output| Runestone::decode_script(&output.script_pubkey))
    }
}
