//! Interactive console demo: reads fractions and an operator from stdin and
//! prints the results in improper and mixed form until input runs out or an
//! arithmetic error ends the session.

use std::io::{self, BufRead, Write};
use std::process::ExitCode;

use fraction::{BaseInt, Fraction, FractionError};
use thiserror::Error;

#[derive(Debug, Error)]
enum DemoError {
    #[error("{0}")]
    Arithmetic(#[from] FractionError),
    #[error("Expected an integer, got {0:?}.")]
    BadInput(String),
}

fn main() -> ExitCode {
    let stdin = io::stdin();
    let mut tokens = stdin.lock().lines().flat_map(|line| {
        line.unwrap_or_default()
            .split_whitespace()
            .map(String::from)
            .collect::<Vec<_>>()
    });

    match run(&mut tokens) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            println!("{e}");
            ExitCode::FAILURE
        }
    }
}

fn run(tokens: &mut impl Iterator<Item = String>) -> Result<(), DemoError> {
    loop {
        println!("Type in two fractions:");
        let Some(a) = read_fraction(tokens)? else {
            return Ok(());
        };
        print_both(a);
        let Some(b) = read_fraction(tokens)? else {
            return Ok(());
        };
        print_both(b);

        print!("Operation to perform (+-*/): ");
        let _ = io::stdout().flush();
        let Some(op) = tokens.next() else {
            return Ok(());
        };
        let c = match op.as_str() {
            "+" => a + b,
            "-" => a - b,
            "*" => a * b,
            "/" => a.checked_div(b)?,
            _ => {
                println!("Unknown operation!");
                Fraction::ZERO
            }
        };
        print_both(c);
        println!("\n---");
    }
}

/// Prints the fraction and mixed number forms of `f`.
fn print_both(f: Fraction) {
    println!("{} == {}", f, f.to_mixed());
}

/// Reads a numerator/denominator pair. `Ok(None)` means the input ran out.
fn read_fraction(
    tokens: &mut impl Iterator<Item = String>,
) -> Result<Option<Fraction>, DemoError> {
    let Some(n) = read_int(tokens)? else {
        return Ok(None);
    };
    let Some(d) = read_int(tokens)? else {
        return Ok(None);
    };
    Ok(Some(Fraction::new(n, d)?))
}

fn read_int(tokens: &mut impl Iterator<Item = String>) -> Result<Option<BaseInt>, DemoError> {
    match tokens.next() {
        None => Ok(None),
        Some(tok) => tok.parse().map(Some).map_err(|_| DemoError::BadInput(tok)),
    }
}
