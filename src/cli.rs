/*
    Interactive front end: keeps asking for a P2PKH address until one
    converts, then prints the P2SH-P2WPKH address.
*/

use crate::{
    address::Address,
    Error, Result
};
use std::io::{BufRead, Write};
use tracing::{info, warn};

pub const PROMPT: &str = "Please enter your P2PKH address (should start with 1):";
pub const RESULT_HEADER: &str = "Your P2SH-P2WPKH address is:";

/// Converts a single address, ignoring surrounding whitespace.
pub fn convert_once(address: &str) -> Result<String> {
    Ok(Address::p2sh_p2wpkh_from_p2pkh(address.trim())?)
}

/**
    Prompts on `output` and reads lines from `input` until an address converts.

    Rejected addresses are logged and the prompt repeats. Stops with an error
    when the input ends or `max_attempts` addresses have been rejected.
*/
pub fn run_interactive<R, W>(input: R, mut output: W, max_attempts: Option<usize>) -> Result<String>
where
    R: BufRead,
    W: Write
{
    let mut lines = input.lines();
    let mut attempts = 0;

    loop {
        writeln!(output, "{}", PROMPT)?;
        output.flush()?;

        let line = match lines.next() {
            Some(line) => line?,
            None => return Err(Error::EndOfInput)
        };

        match convert_once(&line) {
            Ok(converted) => {
                info!(attempts = attempts + 1, "address converted");
                writeln!(output, "{}", RESULT_HEADER)?;
                writeln!(output, "{}", converted)?;
                output.flush()?;
                return Ok(converted)
            },
            Err(e) => {
                attempts += 1;
                warn!(input = line.trim(), error = %e, "address rejected");
                if max_attempts.map_or(false, |max| attempts >= max) {
                    return Err(Error::AttemptsExhausted(attempts))
                }
            }
        }
    }
}
