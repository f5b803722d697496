//! # greeter
//!
//! Interactive console greeter.
//!
//! Asks for:
//!
//! - **name**: one full line of text, spaces allowed
//! - **age**: one whitespace delimited number
//!
//! and prints a greeting composed from both. Set `RUST_LOG=debug` to trace
//! the exchange on stderr.

use std::io;

use anyhow::Result;
use env_logger::{Builder, Env};
use log::debug;

fn logger_init() {
    let env = Env::default().filter_or("RUST_LOG", "info");
    Builder::from_env(env).init();
}

fn main() -> Result<()> {
    logger_init();
    let stdin = io::stdin();
    let stdout = io::stdout();
    let greeting = greeter::interact(stdin.lock(), stdout.lock())?;
    debug!("Greeted: {greeting}");
    Ok(())
}
