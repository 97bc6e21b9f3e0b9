//! Definition string parsing
//!
//! Converts a whitespace-separated definition string into an ordered
//! token sequence. A malformed word is fatal: it must never reach the
//! registry.

use crate::core::token::{Token, ValueType};
use crate::error::{CommanderError, Result};
use regex::Regex;
use tracing::{debug, instrument};

/// Parser for command definition strings.
///
/// Grammar, word by word:
/// - `name=(type)` is a required placeholder;
/// - `name=[type]` and `[name=(type)]` are optional placeholders;
/// - any other word free of placeholder syntax is a literal.
pub struct DefinitionParser {
    /// Regex for required placeholders
    re_required: Regex,
    /// Regex for optional placeholders
    re_optional: Regex,
    /// Regex for bracket-wrapped optional placeholders
    re_wrapped: Regex,
}

impl DefinitionParser {
    /// Create a new definition parser
    pub fn new() -> Result<Self> {
        Ok(Self {
            re_required: Regex::new(r"^([A-Za-z_][A-Za-z0-9_-]*)=\(([A-Za-z][A-Za-z0-9]*)\)$")
                .map_err(|e| CommanderError::pattern(format!("failed to compile regex: {e}")))?,
            re_optional: Regex::new(r"^([A-Za-z_][A-Za-z0-9_-]*)=\[([A-Za-z][A-Za-z0-9]*)\]$")
                .map_err(|e| CommanderError::pattern(format!("failed to compile regex: {e}")))?,
            re_wrapped: Regex::new(r"^\[([A-Za-z_][A-Za-z0-9_-]*)=\(([A-Za-z][A-Za-z0-9]*)\)\]$")
                .map_err(|e| CommanderError::pattern(format!("failed to compile regex: {e}")))?,
        })
    }

    /// Parse a definition string into its token sequence.
    ///
    /// The empty (or all-whitespace) string parses to the empty
    /// sequence, the default-command sentinel.
    #[instrument(skip(self))]
    pub fn parse(&self, definition: &str) -> Result<Vec<Token>> {
        let mut tokens = Vec::new();
        for word in definition.split_whitespace() {
            tokens.push(self.parse_word(definition, word)?);
        }
        debug!("parsed {} token(s) from \"{}\"", tokens.len(), definition);
        Ok(tokens)
    }

    /// Classify a single definition word
    fn parse_word(&self, definition: &str, word: &str) -> Result<Token> {
        if let Some(cap) = self.re_required.captures(word) {
            return Ok(Token::Required {
                identifier: cap[1].to_string(),
                value_type: self.parse_type(definition, &cap[2])?,
            });
        }

        if let Some(cap) = self
            .re_optional
            .captures(word)
            .or_else(|| self.re_wrapped.captures(word))
        {
            return Ok(Token::Optional {
                identifier: cap[1].to_string(),
                value_type: self.parse_type(definition, &cap[2])?,
            });
        }

        // A stray placeholder character means a malformed placeholder,
        // not a literal.
        if word.contains(['=', '(', ')', '[', ']']) {
            return Err(CommanderError::definition(
                definition,
                format!("malformed placeholder \"{word}\""),
            ));
        }

        Ok(Token::Literal(word.to_string()))
    }

    fn parse_type(&self, definition: &str, tag: &str) -> Result<ValueType> {
        ValueType::from_tag(tag).ok_or_else(|| {
            CommanderError::definition(definition, format!("unknown value type \"{tag}\""))
        })
    }
}
