//! Core matching machinery
//!
//! Contains the definition parser, the token model, and the command
//! matching and binding logic.

pub mod bindings;
pub mod command;
pub mod parser;
pub mod token;

pub use bindings::{Bindings, Value};
pub use command::{Command, MatchReport};
pub use parser::DefinitionParser;
pub use token::{Token, ValueType};
