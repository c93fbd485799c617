use std::str::FromStr;

use serde::de;
use serde::{Deserialize, Serialize};

use crate::rune::Rune;

impl Serialize for Rune {
    fn serialize<S: serde::Serializer>(&self, s: S) -> Result<S::Ok, S::Error> {
        if s.is_human_readable() {
            s.serialize_str(&self.to_string())
        } else {
            s.serialize_u128(self.0)
        }
    }
}

impl<'de> Deserialize<'de> for Rune {
    fn deserialize<D: serde::Deserializer<'de>>(d: D) -> Result<Self, D::Error> {
        if d.is_human_readable() {
            struct NameVisitor;

            impl de::Visitor<'_> for NameVisitor {
                type Value = Rune;

                fn expecting(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                    write!(f, "an uppercase rune name")
                }

                fn visit_str<E: de::Error>(self, v: &str) -> Result<Rune, E> {
                    Rune::from_str(v).map_err(E::custom)
                }
            }

            d.deserialize_str(NameVisitor)
        } else {
            struct ValueVisitor;

            impl de::Visitor<'_> for ValueVisitor {
                type Value = Rune;

                fn expecting(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                    write!(f, "a 128-bit rune value")
                }

                fn visit_u128<E: de::Error>(self, v: u128) -> Result<Rune, E> {
                    Ok(Rune(v))
                }
            }

            d.deserialize_u128(ValueVisitor)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn human_readable_form_is_the_spelled_name() {
        let rune: Rune = "UNCOMMONGOODS".parse().unwrap();
        let json = serde_json::to_string(&rune).unwrap();
        assert_eq!(json, "\"UNCOMMONGOODS\"");

        let back: Rune = serde_json::from_str(&json).unwrap();
        assert_eq!(back, rune);
    }

    #[test]
    fn binary_form_is_the_raw_value() {
        for rune in [Rune(0), Rune(26), Rune(u128::MAX)] {
            let encoded = bincode::serialize(&rune).unwrap();
            let back: Rune = bincode::deserialize(&encoded).unwrap();
            assert_eq!(back, rune);
        }
    }

    #[test]
    fn invalid_names_fail_deserialization() {
        assert!(serde_json::from_str::<Rune>("\"UNC0MMON\"").is_err());
        assert!(serde_json::from_str::<Rune>("\"lowercase\"").is_err());
    }
}
