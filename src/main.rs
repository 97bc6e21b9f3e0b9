#![allow(clippy::cargo_common_metadata)]
use anyhow::Result;
use commander::{Bindings, Commander, DEFAULT_COMMAND, Outcome, Value, setup_logging};
use std::process::ExitCode;

fn scalar<'a>(bindings: &'a Bindings, key: &str) -> &'a str {
    bindings.get(key).and_then(Value::as_scalar).unwrap_or_default()
}

fn main() -> Result<ExitCode> {
    setup_logging(false)?;

    let mut commander = Commander::new()?;

    commander.register(
        "create kind=(string) name=(string) description=(string) domains=[stringArray]",
        |bindings| {
            let Some(bindings) = bindings else { return };
            println!(
                "created {} \"{}\" ({})",
                scalar(bindings, "kind"),
                scalar(bindings, "name"),
                scalar(bindings, "description"),
            );
            match bindings.get("domains") {
                Some(Value::Sequence(domains)) => {
                    for domain in domains {
                        println!("  domain {domain}");
                    }
                }
                Some(Value::Scalar(domain)) => println!("  domain {domain}"),
                None => {}
            }
        },
    )?;

    commander.register("delete kind=(string) name=(string)", |bindings| {
        let Some(bindings) = bindings else { return };
        println!(
            "deleted {} \"{}\"",
            scalar(bindings, "kind"),
            scalar(bindings, "name"),
        );
    })?;

    commander.register("list [kind=(string)]", |bindings| {
        match bindings.and_then(|b| b.get("kind")).and_then(Value::as_scalar) {
            Some(kind) => println!("listing {kind} records"),
            None => println!("listing all records"),
        }
    })?;

    commander.register(DEFAULT_COMMAND, |_| {
        println!("nothing to do; try \"help\"");
    })?;

    match commander.execute() {
        Outcome::Executed => Ok(ExitCode::SUCCESS),
        Outcome::NoMatch => Ok(ExitCode::from(2)),
    }
}
