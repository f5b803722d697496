use std::io::{self, BufRead, Write};

use log::debug;
use thiserror::Error;

use crate::greeting::Greeting;

const NAME_PROMPT: &str = "Enter your name: ";
const AGE_PROMPT: &str = "Enter your age: ";

#[derive(Debug, Error)]
pub enum InputError {
    #[error("Unexpected end of input!")]
    UnexpectedEof,
    #[error("Invalid age: {0}!")]
    InvalidAge(String),
    #[error("Reading input failed: {0}")]
    Io(#[from] io::Error),
}

/// Runs one console exchange over the given streams.
///
/// This function prompts for a name, reads it as a full line, prompts for an
/// age, reads it as one whitespace delimited number, and writes the composed
/// greeting as the final output line. Each prompt is flushed before the
/// matching read consumes anything. The greeting is returned to the caller
/// as well.
///
/// # Errors
///
/// This function will return an error if the input ends before both values
/// are read, if the age token is not a number, or if either stream fails.
pub fn interact<R: BufRead, W: Write>(mut input: R, mut output: W) -> Result<Greeting, InputError> {
    let name = ask_name(&mut input, &mut output)?;
    debug!("Got name: {name:?}");
    let age = ask_age(&mut input, &mut output)?;
    debug!("Got age: {age}");

    let greeting = Greeting::new(name, age);
    writeln!(output, "{greeting}")?;
    output.flush()?;
    Ok(greeting)
}

fn ask_name<R: BufRead, W: Write>(input: &mut R, output: &mut W) -> Result<String, InputError> {
    prompt(output, NAME_PROMPT)?;
    read_full_line(input)
}

fn ask_age<R: BufRead, W: Write>(input: &mut R, output: &mut W) -> Result<i32, InputError> {
    prompt(output, AGE_PROMPT)?;
    let token = read_token(input)?;
    token.parse().map_err(|_| InputError::InvalidAge(token))
}

fn prompt<W: Write>(output: &mut W, text: &str) -> Result<(), InputError> {
    output.write_all(text.as_bytes())?;
    output.flush()?;
    Ok(())
}

/// Reads one line and strips its terminator, `\n` or `\r\n`. Everything else
/// stays verbatim, so an empty line is a valid empty value.
fn read_full_line<R: BufRead>(input: &mut R) -> Result<String, InputError> {
    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Err(InputError::UnexpectedEof);
    }
    if line.ends_with('\n') {
        line.pop();
        if line.ends_with('\r') {
            line.pop();
        }
    }
    Ok(line)
}

/// Reads the next whitespace delimited token: skips leading whitespace,
/// collects the following run of non-whitespace bytes, and leaves the
/// delimiter unconsumed for any later reader.
fn read_token<R: BufRead>(input: &mut R) -> Result<String, InputError> {
    let mut token = Vec::new();
    loop {
        let (used, done) = {
            let buffer = input.fill_buf()?;
            if buffer.is_empty() {
                break;
            }
            let mut used = 0;
            let mut done = false;
            for &byte in buffer {
                if byte.is_ascii_whitespace() {
                    if token.is_empty() {
                        used += 1;
                    } else {
                        done = true;
                        break;
                    }
                } else {
                    token.push(byte);
                    used += 1;
                }
            }
            (used, done)
        };
        input.consume(used);
        if done {
            break;
        }
    }

    if token.is_empty() {
        return Err(InputError::UnexpectedEof);
    }
    Ok(String::from_utf8_lossy(&token).into_owned())
}
