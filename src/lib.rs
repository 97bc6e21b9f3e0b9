//! # Commander
//!
//! A command-line argument dispatcher: map definition strings that mix
//! literal words, typed required placeholders, and optional or variadic
//! placeholders to handler callbacks, then route the process argument
//! vector to the handler whose definition it matches.
//!
//! ## Definition syntax
//!
//! - `create` — a literal word, matched verbatim and case-sensitive
//! - `name=(string)` — a required placeholder binding one argument word
//! - `kind=[string]` — an optional placeholder; in final position it
//!   absorbs all trailing words as an ordered sequence
//! - `""` — the default command, run when no arguments are given
//!
//! A built-in `help` command printing the usage listing is always
//! registered.
//!
//! ## Example
//!
//! ```no_run
//! use commander::{Commander, DEFAULT_COMMAND};
//!
//! let mut commander = Commander::new()?;
//! commander.register("greet name=(string)", |bindings| {
//!     if let Some(name) = bindings.and_then(|b| b.get("name")) {
//!         println!("hello, {:?}", name);
//!     }
//! })?;
//! commander.register(DEFAULT_COMMAND, |_| println!("try: greet <name>"))?;
//! commander.execute();
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod core;
pub mod dispatch;
pub mod error;

pub use crate::core::{Bindings, Command, DefinitionParser, MatchReport, Token, Value, ValueType};
pub use crate::dispatch::{Commander, DEFAULT_COMMAND, Handler, Outcome};
pub use crate::error::{CommanderError, Result};

use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

/// Initialize logging with appropriate verbosity
pub fn setup_logging(debug: bool) -> anyhow::Result<()> {
    let default_filter = if debug { "debug" } else { "info" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_level(true)
                .compact(),
        )
        .with(filter)
        .try_init()
        .map_err(|e| anyhow::anyhow!("Failed to initialize logging: {}", e))?;

    Ok(())
}
