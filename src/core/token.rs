//! Definition tokens
//!
//! A definition string parses into an ordered token sequence. Each token
//! is either matched verbatim or bound by name, never both.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Declared value type of a placeholder.
///
/// The tag is informational: it records scalar vs. array intent but no
/// runtime coercion is performed on the argument words.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ValueType {
    String,
    StringArray,
    Int,
    IntArray,
    Bool,
    BoolArray,
}

impl ValueType {
    /// Resolve a type tag as it is spelled inside a definition string
    pub fn from_tag(tag: &str) -> Option<Self> {
        match tag {
            "string" => Some(Self::String),
            "stringArray" => Some(Self::StringArray),
            "int" => Some(Self::Int),
            "intArray" => Some(Self::IntArray),
            "bool" => Some(Self::Bool),
            "boolArray" => Some(Self::BoolArray),
            _ => None,
        }
    }

    /// The tag as it is spelled inside a definition string
    #[must_use]
    pub const fn tag(self) -> &'static str {
        match self {
            Self::String => "string",
            Self::StringArray => "stringArray",
            Self::Int => "int",
            Self::IntArray => "intArray",
            Self::Bool => "bool",
            Self::BoolArray => "boolArray",
        }
    }

    /// Whether the tag names a sequence type
    #[must_use]
    pub const fn is_array(self) -> bool {
        matches!(self, Self::StringArray | Self::IntArray | Self::BoolArray)
    }
}

impl fmt::Display for ValueType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

/// One parsed unit of a command definition
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Token {
    /// Fixed text matched against the argument word verbatim, case-sensitive
    Literal(String),
    /// Binds exactly one argument word to `identifier`
    Required {
        identifier: String,
        value_type: ValueType,
    },
    /// May be absent; in final position it absorbs all trailing words
    Optional {
        identifier: String,
        value_type: ValueType,
    },
}

impl Token {
    /// Binding key, for placeholder tokens
    pub fn identifier(&self) -> Option<&str> {
        match self {
            Self::Literal(_) => None,
            Self::Required { identifier, .. } | Self::Optional { identifier, .. } => {
                Some(identifier)
            }
        }
    }

    /// Fixed text, for literal tokens
    pub fn literal(&self) -> Option<&str> {
        match self {
            Self::Literal(literal) => Some(literal),
            _ => None,
        }
    }

    /// Declared value type, for placeholder tokens
    pub fn value_type(&self) -> Option<ValueType> {
        match self {
            Self::Literal(_) => None,
            Self::Required { value_type, .. } | Self::Optional { value_type, .. } => {
                Some(*value_type)
            }
        }
    }

    #[must_use]
    pub const fn is_literal(&self) -> bool {
        matches!(self, Self::Literal(_))
    }

    #[must_use]
    pub const fn is_optional(&self) -> bool {
        matches!(self, Self::Optional { .. })
    }
}
