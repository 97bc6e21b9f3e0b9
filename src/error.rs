//! Error types for the command dispatcher
//!
//! Registration-time failures indicate a programming mistake by the
//! embedding application and are surfaced as typed errors; a dispatch
//! that matches nothing is a normal outcome, not an error.

use thiserror::Error;

/// Main error type for the command dispatcher
#[derive(Error, Debug)]
pub enum CommanderError {
    /// Malformed definition string
    #[error("definition error in \"{definition}\": {message}")]
    Definition { definition: String, message: String },

    /// A command with the same signature is already registered
    #[error("duplicate command signature: \"{definition}\"")]
    DuplicateSignature { definition: String },

    /// A default command is already registered
    #[error("only one default command can be registered")]
    DuplicateDefault,

    /// Grammar regex failed to compile
    #[error("pattern error: {message}")]
    Pattern { message: String },
}

impl CommanderError {
    /// Create a new definition error
    pub fn definition(definition: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Definition {
            definition: definition.into(),
            message: message.into(),
        }
    }

    /// Create a new duplicate-signature error
    pub fn duplicate_signature(definition: impl Into<String>) -> Self {
        Self::DuplicateSignature {
            definition: definition.into(),
        }
    }

    /// Create a new pattern error
    pub fn pattern(message: impl Into<String>) -> Self {
        Self::Pattern {
            message: message.into(),
        }
    }
}

/// Result type alias for convenience
pub type Result<T> = std::result::Result<T, CommanderError>;
