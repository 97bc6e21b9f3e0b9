//! Command registration and dispatch
//!
//! `Commander` owns the ordered command list, enforces the
//! signature-uniqueness and single-default invariants at registration
//! time, and routes the process argument vector to the matching
//! handler.

use crate::core::{Bindings, Command, DefinitionParser};
use crate::dispatch::usage;
use crate::error::{CommanderError, Result};
use std::env;
use tracing::{debug, instrument};

/// Definition string reserved for the command that runs when no
/// arguments are supplied at all. Its handler is invoked with `None`.
pub const DEFAULT_COMMAND: &str = "";

/// Handler callback, invoked with the extracted bindings or with
/// `None` for the default command
pub type Handler = Box<dyn Fn(Option<&Bindings>)>;

/// Result of one dispatch call
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// A handler (or the built-in help) ran
    Executed,
    /// Nothing matched; usage help was printed
    NoMatch,
}

/// What a matched command does
enum Action {
    /// Call the registered handler
    Run(Handler),
    /// Built-in help: print the full usage listing
    ShowUsage,
}

/// One registered command and its action
struct Registration {
    command: Command,
    action: Action,
}

/// Registry and dispatcher for definition-string commands.
///
/// Owned by the caller and constructed once per process; registration
/// completes before dispatch begins, and dispatch only reads the
/// command list.
pub struct Commander {
    parser: DefinitionParser,
    registrations: Vec<Registration>,
    default_registered: bool,
}

impl Commander {
    /// Create a commander with the built-in `help` command registered
    pub fn new() -> Result<Self> {
        let mut commander = Self {
            parser: DefinitionParser::new()?,
            registrations: Vec::new(),
            default_registered: false,
        };
        commander.add("help [arg=(string)]", Action::ShowUsage)?;
        Ok(commander)
    }

    /// Map a definition string to a handler function.
    ///
    /// The handler runs when the process arguments are represented by
    /// the definition. Fails on a malformed definition, a signature
    /// already taken by an earlier registration, or a second default
    /// command.
    pub fn register<F>(&mut self, definition: &str, handler: F) -> Result<()>
    where
        F: Fn(Option<&Bindings>) + 'static,
    {
        self.add(definition, Action::Run(Box::new(handler)))
    }

    fn add(&mut self, definition: &str, action: Action) -> Result<()> {
        let tokens = self.parser.parse(definition)?;
        let command = Command::new(definition, tokens);

        if command.is_default() {
            if self.default_registered {
                return Err(CommanderError::DuplicateDefault);
            }
            self.default_registered = true;
        }

        if self
            .registrations
            .iter()
            .any(|reg| reg.command.conflicts_with(&command))
        {
            return Err(CommanderError::duplicate_signature(definition));
        }

        debug!("registered command \"{definition}\"");
        self.registrations.push(Registration { command, action });
        Ok(())
    }

    /// Registered commands in registration order
    pub fn commands(&self) -> impl Iterator<Item = &Command> {
        self.registrations.iter().map(|reg| &reg.command)
    }

    /// Dispatch on the process argument vector, program name excluded
    pub fn execute(&self) -> Outcome {
        let argv: Vec<String> = env::args().skip(1).collect();
        self.dispatch(&argv)
    }

    /// Dispatch on an explicit argument vector.
    ///
    /// An empty vector runs the default command if one is registered.
    /// Otherwise commands are scanned in registration order and the
    /// first match wins; under the uniqueness invariant at most one can
    /// match. When nothing matches, the non-matching command with the
    /// highest agreement score (earliest registration on ties) selects
    /// the usage help to print.
    #[instrument(skip(self))]
    pub fn dispatch(&self, argv: &[String]) -> Outcome {
        if argv.is_empty() {
            if let Some(reg) = self
                .registrations
                .iter()
                .find(|reg| reg.command.is_default())
            {
                debug!("executing default command");
                self.invoke(reg, None);
                return Outcome::Executed;
            }
            self.print_usage(None);
            return Outcome::NoMatch;
        }

        let mut closest: Option<&Registration> = None;
        let mut closest_score = 0;

        for reg in &self.registrations {
            let report = reg.command.represents(argv);
            if report.matched {
                debug!("executing command \"{}\"", reg.command.definition());
                let bindings = reg.command.extract_bindings(argv);
                self.invoke(reg, Some(&bindings));
                return Outcome::Executed;
            }
            if report.score > closest_score {
                closest_score = report.score;
                closest = Some(reg);
            }
        }

        self.print_usage(closest.map(|reg| &reg.command));
        Outcome::NoMatch
    }

    fn invoke(&self, registration: &Registration, bindings: Option<&Bindings>) {
        match &registration.action {
            Action::Run(handler) => handler(bindings),
            Action::ShowUsage => self.print_usage(None),
        }
    }

    fn print_usage(&self, closest: Option<&Command>) {
        let text = match closest {
            Some(command) => usage::not_enough_arguments(command),
            None => usage::listing(&usage::program_name(), self.commands()),
        };
        print!("{text}");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::{Cell, RefCell};
    use std::rc::Rc;

    fn argv(words: &[&str]) -> Vec<String> {
        words.iter().map(ToString::to_string).collect()
    }

    #[test]
    fn test_help_is_registered_by_constructor() {
        let commander = Commander::new().unwrap();
        let definitions: Vec<&str> = commander.commands().map(Command::definition).collect();
        assert_eq!(definitions, vec!["help [arg=(string)]"]);
    }

    #[test]
    fn test_help_dispatch_executes() {
        let commander = Commander::new().unwrap();
        assert_eq!(commander.dispatch(&argv(&["help"])), Outcome::Executed);
        assert_eq!(
            commander.dispatch(&argv(&["help", "create"])),
            Outcome::Executed
        );
    }

    #[test]
    fn test_malformed_definition_is_rejected() {
        let mut commander = Commander::new().unwrap();
        let err = commander
            .register("create kind=(string", |_| {})
            .unwrap_err();
        assert!(matches!(err, CommanderError::Definition { .. }));
    }

    #[test]
    fn test_duplicate_signature_is_rejected() {
        let mut commander = Commander::new().unwrap();
        commander
            .register("create kind=(string) name=(string)", |_| {})
            .unwrap();
        let err = commander
            .register("create a=(string) b=(string)", |_| {})
            .unwrap_err();
        assert!(matches!(err, CommanderError::DuplicateSignature { .. }));
    }

    #[test]
    fn test_duplicate_default_is_rejected() {
        let mut commander = Commander::new().unwrap();
        commander.register(DEFAULT_COMMAND, |_| {}).unwrap();
        let err = commander.register(DEFAULT_COMMAND, |_| {}).unwrap_err();
        assert!(matches!(err, CommanderError::DuplicateDefault));
    }

    #[test]
    fn test_empty_argv_runs_default_with_no_bindings() {
        let mut commander = Commander::new().unwrap();
        let saw_none = Rc::new(Cell::new(false));
        let saw = Rc::clone(&saw_none);
        commander
            .register(DEFAULT_COMMAND, move |bindings| {
                saw.set(bindings.is_none());
            })
            .unwrap();

        assert_eq!(commander.dispatch(&[]), Outcome::Executed);
        assert!(saw_none.get());
    }

    #[test]
    fn test_empty_argv_without_default_prints_usage() {
        let commander = Commander::new().unwrap();
        assert_eq!(commander.dispatch(&[]), Outcome::NoMatch);
    }

    #[test]
    fn test_dispatch_binds_scalars_and_runs_once() {
        let mut commander = Commander::new().unwrap();
        let calls = Rc::new(Cell::new(0));
        let counter = Rc::clone(&calls);
        commander
            .register(
                "create kind=(string) name=(string) description=(string)",
                move |bindings| {
                    counter.set(counter.get() + 1);
                    let bindings = bindings.unwrap();
                    assert_eq!(bindings.len(), 3);
                    assert_eq!(bindings["kind"].as_scalar(), Some("account"));
                    assert_eq!(bindings["name"].as_scalar(), Some("mat"));
                    assert_eq!(bindings["description"].as_scalar(), Some("Crazy Brit!"));
                },
            )
            .unwrap();

        let outcome = commander.dispatch(&argv(&["create", "account", "mat", "Crazy Brit!"]));
        assert_eq!(outcome, Outcome::Executed);
        assert_eq!(calls.get(), 1);
    }

    #[test]
    fn test_dispatch_binds_variadic_tail() {
        let mut commander = Commander::new().unwrap();
        let captured = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&captured);
        commander
            .register(
                "create kind=(string) name=(string) description=(string) domains=[stringArray]",
                move |bindings| {
                    let domains = bindings
                        .and_then(|b| b.get("domains"))
                        .and_then(|v| v.as_sequence())
                        .unwrap()
                        .to_vec();
                    sink.borrow_mut().extend(domains);
                },
            )
            .unwrap();

        let outcome = commander.dispatch(&argv(&[
            "create",
            "account",
            "mat",
            "Crazy Brit!",
            "localhost",
            "127.0.0.1",
            "google.com",
        ]));
        assert_eq!(outcome, Outcome::Executed);
        assert_eq!(
            *captured.borrow(),
            argv(&["localhost", "127.0.0.1", "google.com"])
        );
    }

    #[test]
    fn test_first_match_wins_and_others_stay_idle() {
        let mut commander = Commander::new().unwrap();
        let hits = Rc::new(RefCell::new(Vec::new()));

        let sink = Rc::clone(&hits);
        commander
            .register("create kind=(string)", move |_| {
                sink.borrow_mut().push("create");
            })
            .unwrap();
        let sink = Rc::clone(&hits);
        commander
            .register("delete kind=(string)", move |_| {
                sink.borrow_mut().push("delete");
            })
            .unwrap();

        assert_eq!(
            commander.dispatch(&argv(&["delete", "account"])),
            Outcome::Executed
        );
        assert_eq!(*hits.borrow(), vec!["delete"]);
    }

    #[test]
    fn test_partial_match_executes_nothing() {
        let mut commander = Commander::new().unwrap();
        let calls = Rc::new(Cell::new(0));
        let counter = Rc::clone(&calls);
        commander
            .register(
                "create kind=(string) name=(string) description=(string)",
                move |_| counter.set(counter.get() + 1),
            )
            .unwrap();

        let outcome = commander.dispatch(&argv(&["create", "account"]));
        assert_eq!(outcome, Outcome::NoMatch);
        assert_eq!(calls.get(), 0);
    }

    #[test]
    fn test_unknown_command_is_no_match() {
        let mut commander = Commander::new().unwrap();
        commander.register("create kind=(string)", |_| {}).unwrap();
        assert_eq!(commander.dispatch(&argv(&["frobnicate"])), Outcome::NoMatch);
    }
}
