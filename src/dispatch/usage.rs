//! Usage text rendering
//!
//! Builds the two usage forms written to standard output when dispatch
//! cannot execute a command: the full listing and the closest-match
//! help line.

use crate::core::Command;
use std::env;
use std::path::Path;

/// Executable base name with any file extension stripped
#[must_use]
pub fn program_name() -> String {
    env::args()
        .next()
        .as_deref()
        .and_then(|arg0| Path::new(arg0).file_stem())
        .map(|stem| stem.to_string_lossy().into_owned())
        .unwrap_or_else(|| String::from("program"))
}

/// Render the full usage listing, one definition per command in
/// registration order
pub fn listing<'a>(program: &str, commands: impl IntoIterator<Item = &'a Command>) -> String {
    let mut out = format!("usage: {program} <command> [arguments]\n\n");
    for command in commands {
        out.push_str(&format!("\t {}\n", command.definition()));
    }
    out
}

/// Render the help line for the command closest to a failed invocation
pub fn not_enough_arguments(command: &Command) -> String {
    format!(
        "Not enough arguments to command \"{}\". Usage:\n\t {}\n",
        command.name().unwrap_or_default(),
        command.definition()
    )
}
