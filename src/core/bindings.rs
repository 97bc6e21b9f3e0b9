//! Binding values extracted during dispatch

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Mapping from placeholder identifier to extracted value, built fresh
/// for each dispatch and handed to the matching handler.
pub type Bindings = BTreeMap<String, Value>;

/// One extracted argument value
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Value {
    /// A single argument word
    Scalar(String),
    /// The ordered trailing words absorbed by a final optional placeholder
    Sequence(Vec<String>),
}

impl Value {
    /// The value as a single word, if it is one
    #[must_use]
    pub fn as_scalar(&self) -> Option<&str> {
        match self {
            Self::Scalar(word) => Some(word),
            Self::Sequence(_) => None,
        }
    }

    /// The value as an ordered word sequence, if it is one
    #[must_use]
    pub fn as_sequence(&self) -> Option<&[String]> {
        match self {
            Self::Scalar(_) => None,
            Self::Sequence(words) => Some(words),
        }
    }
}
