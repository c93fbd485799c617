//! The tagged-field message between flat integers and the envelope.

use std::collections::{BTreeMap, VecDeque};

use crate::errors::RunestoneError;
use crate::tag::Tag;

/// Multimap from raw tag value to the field values recorded under it, in
/// wire order.
pub(crate) type FieldMap = BTreeMap<u128, VecDeque<u128>>;

/// A runestone in its intermediate form: fields keyed by tag plus the
/// edict run still in wire (delta) form.
///
/// `Message` is purely structural.  [`Runestone::from_message`] decodes
/// the edict deltas and applies the business rules;
/// [`Runestone::to_message`] delta-encodes edicts before handing them
/// here for flattening.
///
/// [`Runestone::from_message`]: crate::Runestone::from_message
/// [`Runestone::to_message`]: crate::Runestone::to_message
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Message {
    pub(crate) fields: FieldMap,
    pub(crate) body: Vec<[u128; 4]>,
}

impl Message {
    /// Parses a flat integer sequence into tagged fields and an edict run.
    ///
    /// Integers pair up as `(tag, value)` until a `Body` tag is seen,
    /// after which every remaining integer belongs to the edict run, four
    /// per edict.  Repeated tags accumulate; they do not overwrite.
    ///
    /// # Errors
    ///
    /// All structural problems found are returned together:
    /// [`RunestoneError::UnrecognizedEvenTag`] for an even tag outside
    /// the enumeration, [`RunestoneError::TruncatedField`] for a tag with
    /// no value, and [`RunestoneError::TrailingIntegers`] for an edict
    /// run that is not a multiple of four.
    pub fn from_integers(payload: &[u128]) -> Result<Message, Vec<RunestoneError>> {
        let mut fields = FieldMap::new();
        let mut body = Vec::new();
        let mut errors = Vec::new();

        let mut i = 0;
        while i < payload.len() {
            let tag = payload[i];

            if tag == Tag::Body.into() {
                for chunk in payload[i + 1..].chunks(4) {
                    if let &[block, tx, amount, output] = chunk {
                        body.push([block, tx, amount, output]);
                    } else {
                        errors.push(RunestoneError::TrailingIntegers);
                        break;
                    }
                }
                break;
            }

            let Some(&value) = payload.get(i + 1) else {
                errors.push(RunestoneError::TruncatedField(tag));
                break;
            };

            if tag % 2 == 0 && !Tag::is_recognized(tag) {
                errors.push(RunestoneError::UnrecognizedEvenTag(tag));
            }

            fields.entry(tag).or_default().push_back(value);
            i += 2;
        }

        if errors.is_empty() {
            Ok(Message { fields, body })
        } else {
            Err(errors)
        }
    }

    /// Flattens the message back into a flat integer sequence.
    ///
    /// Recognized non-Body tags are emitted in the declared order, each
    /// occurrence as a `(tag, value)` pair; unrecognized fields are
    /// dropped.  The edict run follows a single `Body` tag when present.
    pub fn into_integers(self) -> Vec<u128> {
        let mut integers = Vec::new();

        for &tag in Tag::ENCODE_ORDER {
            if let Some(values) = self.fields.get(&tag.into()) {
                for &value in values {
                    integers.push(tag.into());
                    integers.push(value);
                }
            }
        }

        if !self.body.is_empty() {
            integers.push(Tag::Body.into());
            for quad in &self.body {
                integers.extend_from_slice(quad);
            }
        }

        integers
    }
}
