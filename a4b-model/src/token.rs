use std::collections::HashMap;
use std::fmt;
use std::hash::Hash;
use std::ops::Deref;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::LookupError;

/// A closed set of named variants, each backed by a distinct canonical string.
pub trait StringEnum: Copy + Eq + Hash + fmt::Debug + Send + Sync + 'static {
    /// Name of the enumeration as published by the service.
    const NAME: &'static str;

    /// Every variant, in declaration order.
    fn values() -> &'static [Self];

    fn as_str(&self) -> &'static str;

    /// Reverse lookup table from canonical string to variant, built once.
    fn table() -> &'static HashMap<&'static str, Self>;

    /// Exact, case-sensitive lookup of a variant by its canonical string.
    fn lookup(value: &str) -> Result<Self, LookupError> {
        if value.is_empty() {
            return Err(LookupError::Empty {
                enumeration: Self::NAME,
            });
        }
        Self::table()
            .get(value)
            .copied()
            .ok_or_else(|| LookupError::Unrecognized {
                enumeration: Self::NAME,
                value: value.to_owned(),
            })
    }

    /// Like [`StringEnum::lookup`], treating an absent value as empty.
    fn lookup_optional(value: Option<&str>) -> Result<Self, LookupError> {
        match value {
            Some(value) => Self::lookup(value),
            None => Err(LookupError::Empty {
                enumeration: Self::NAME,
            }),
        }
    }
}

/// String value that is not one of the canonical tokens of its enumeration.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct RawToken(String);

impl RawToken {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Value of an enum-backed string member.
///
/// The service may introduce tokens this crate does not know about, so any
/// string is accepted. Canonical tokens are always stored as
/// [`Token::Known`], which keeps equality and hashing identical to comparing
/// the underlying strings.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum Token<E> {
    Known(E),
    Unrecognized(RawToken),
}

impl<E: StringEnum> Token<E> {
    pub fn as_str(&self) -> &str {
        match self {
            Token::Known(variant) => variant.as_str(),
            Token::Unrecognized(raw) => raw.as_str(),
        }
    }

    pub fn known(&self) -> Option<E> {
        match self {
            Token::Known(variant) => Some(*variant),
            Token::Unrecognized(_) => None,
        }
    }

    pub fn is_known(&self) -> bool {
        matches!(self, Token::Known(_))
    }

    /// Strict view of the stored string, failing the same way [`StringEnum::lookup`] does.
    pub fn to_enum(&self) -> Result<E, LookupError> {
        match self {
            Token::Known(variant) => Ok(*variant),
            Token::Unrecognized(raw) => E::lookup(raw.as_str()),
        }
    }
}

impl<E: StringEnum> From<String> for Token<E> {
    fn from(value: String) -> Self {
        match E::lookup(&value) {
            Ok(variant) => Token::Known(variant),
            Err(_) => {
                log::debug!("keeping unrecognized {} token '{}'", E::NAME, value);
                Token::Unrecognized(RawToken(value))
            }
        }
    }
}

impl<E: StringEnum> From<&str> for Token<E> {
    fn from(value: &str) -> Self {
        value.to_owned().into()
    }
}

impl<E: StringEnum> Deref for Token<E> {
    type Target = str;

    fn deref(&self) -> &str {
        self.as_str()
    }
}

impl<E: StringEnum> AsRef<str> for Token<E> {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl<E: StringEnum> PartialEq<str> for Token<E> {
    fn eq(&self, other: &str) -> bool {
        self.as_str() == other
    }
}

impl<E: StringEnum> PartialEq<&str> for Token<E> {
    fn eq(&self, other: &&str) -> bool {
        self.as_str() == *other
    }
}

impl<E: StringEnum> fmt::Display for Token<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl<E: StringEnum> Serialize for Token<E> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de, E: StringEnum> Deserialize<'de> for Token<E> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        String::deserialize(deserializer).map(Into::into)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::enums::{NetworkSecurityType, WakeWord};

    #[test]
    fn canonical_strings_become_known_variants() {
        let from_str: Token<WakeWord> = "COMPUTER".into();
        let from_variant: Token<WakeWord> = WakeWord::Computer.into();
        assert_eq!(from_str, from_variant);
        assert_eq!(from_str.known(), Some(WakeWord::Computer));
        assert_eq!(from_str, WakeWord::Computer);
    }

    #[test]
    fn unknown_strings_are_kept_verbatim() {
        let token: Token<NetworkSecurityType> = "WPA3_PSK".into();
        assert!(!token.is_known());
        assert_eq!(token.as_str(), "WPA3_PSK");
        assert_eq!(&*token, "WPA3_PSK");
        assert_eq!(
            token.to_enum(),
            Err(LookupError::Unrecognized {
                enumeration: "NetworkSecurityType",
                value: "WPA3_PSK".to_string(),
            })
        );
    }

    #[test]
    fn empty_string_is_kept_but_fails_strict_view() {
        let token: Token<WakeWord> = "".into();
        assert_eq!(token, "");
        assert_eq!(
            token.to_enum(),
            Err(LookupError::Empty {
                enumeration: "WakeWord"
            })
        );
    }

    #[test]
    fn lookup_is_case_sensitive() {
        let token: Token<WakeWord> = "alexa".into();
        assert!(!token.is_known());
        assert_ne!(token, WakeWord::Alexa);
    }

    #[test]
    fn lookup_optional_rejects_absent_value() {
        assert_eq!(
            WakeWord::lookup_optional(None),
            Err(LookupError::Empty {
                enumeration: "WakeWord"
            })
        );
        assert_eq!(WakeWord::lookup_optional(Some("ECHO")), Ok(WakeWord::Echo));
    }

    #[test]
    fn serializes_as_plain_string() {
        let known: Token<WakeWord> = WakeWord::Amazon.into();
        let raw: Token<WakeWord> = "JARVIS".into();
        assert_eq!(serde_json::to_string(&known).unwrap(), "\"AMAZON\"");
        assert_eq!(serde_json::to_string(&raw).unwrap(), "\"JARVIS\"");
        let parsed: Token<WakeWord> = serde_json::from_str("\"ECHO\"").unwrap();
        assert_eq!(parsed, WakeWord::Echo);
    }
}
