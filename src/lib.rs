//! # greeter
//!
//! Library for a simple interactive console greeter.
//!
//! Asks on standard input for:
//!
//! - **name**: one full line of text, spaces allowed
//! - **age**: one whitespace delimited number
//!
//! and writes a greeting composed from both.

pub mod console;
pub mod greeting;

pub use console::{interact, InputError};
pub use greeting::Greeting;
