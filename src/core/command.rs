//! Command matching and binding extraction
//!
//! A command walks its token sequence against an argument vector
//! position by position: literals must agree verbatim, required
//! placeholders consume one word, and a trailing optional placeholder
//! absorbs every leftover word.

use crate::core::bindings::{Bindings, Value};
use crate::core::token::Token;

/// Match verdict for one command against one argument vector
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MatchReport {
    /// Whether the command applies to the argument vector
    pub matched: bool,
    /// Count of token positions that agree with a present word,
    /// used only to pick the closest match for usage help
    pub score: usize,
}

/// A registered command pattern: the original definition string plus
/// its parsed token sequence. Immutable after creation.
#[derive(Debug, Clone)]
pub struct Command {
    definition: String,
    tokens: Vec<Token>,
}

impl Command {
    pub(crate) fn new(definition: impl Into<String>, tokens: Vec<Token>) -> Self {
        Self {
            definition: definition.into(),
            tokens,
        }
    }

    /// The original definition string, shown verbatim in usage output
    pub fn definition(&self) -> &str {
        &self.definition
    }

    /// The parsed token sequence
    pub fn tokens(&self) -> &[Token] {
        &self.tokens
    }

    /// The first token's literal text, the command's conventional name
    pub fn name(&self) -> Option<&str> {
        self.tokens.first().and_then(Token::literal)
    }

    /// True for the empty-definition default command
    #[must_use]
    pub fn is_default(&self) -> bool {
        self.tokens.is_empty()
    }

    /// Decide whether `argv` is represented by this command.
    ///
    /// Consumption is positional and greedy: an optional placeholder
    /// takes the word at its position whenever one exists, with no
    /// backtracking. The score keeps counting past a literal mismatch
    /// so a partially-correct invocation can still be reported as the
    /// closest match.
    pub fn represents(&self, argv: &[String]) -> MatchReport {
        let mut matched = true;
        let mut score = 0;

        for (i, token) in self.tokens.iter().enumerate() {
            match (token, argv.get(i)) {
                (Token::Literal(literal), Some(word)) => {
                    if literal == word {
                        score += 1;
                    } else {
                        matched = false;
                    }
                }
                (_, Some(_)) => score += 1,
                (token, None) => {
                    if !token.is_optional() {
                        matched = false;
                    }
                }
            }
        }

        // Leftover words are only legal when a trailing optional
        // placeholder is there to absorb them.
        if argv.len() > self.tokens.len() && !self.tokens.last().is_some_and(Token::is_optional) {
            matched = false;
        }

        MatchReport { matched, score }
    }

    /// Build the identifier→value map for a successfully matched `argv`.
    ///
    /// Each placeholder with a word at its position binds that word; the
    /// final token binds all leftover words as a sequence when it is
    /// optional and words outnumber tokens.
    pub fn extract_bindings(&self, argv: &[String]) -> Bindings {
        let mut bindings = Bindings::new();

        for (i, token) in self.tokens.iter().enumerate() {
            if i >= argv.len() {
                break;
            }
            let Some(identifier) = token.identifier() else {
                continue;
            };
            let absorbs_rest =
                i + 1 == self.tokens.len() && token.is_optional() && argv.len() > self.tokens.len();
            let value = if absorbs_rest {
                Value::Sequence(argv[i..].to_vec())
            } else {
                Value::Scalar(argv[i].clone())
            };
            bindings.insert(identifier.to_string(), value);
        }

        bindings
    }

    /// Signature collision check: identical length, identical
    /// literal-vs-placeholder shape, and identical literal text where
    /// both tokens are literal. Placeholder names and required/optional
    /// kinds never differentiate signatures, since only the shape
    /// constrains dispatch.
    pub fn conflicts_with(&self, other: &Self) -> bool {
        self.tokens.len() == other.tokens.len()
            && self
                .tokens
                .iter()
                .zip(&other.tokens)
                .all(|(a, b)| match (a.literal(), b.literal()) {
                    (Some(x), Some(y)) => x == y,
                    (None, None) => true,
                    _ => false,
                })
    }
}
