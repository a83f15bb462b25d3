use clap::{Parser, Subcommand};

/// Command-line arguments for the example-package CLI.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "example-package",
    version,
    about = "Example package CLI",
    long_about = None
)]
pub struct Args {
    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Debug, Clone, PartialEq, Subcommand)]
pub enum Command {
    /// Generate a greeting
    Greet {
        /// Name to greet
        #[arg(allow_negative_numbers = true)]
        name: String,
    },
    /// Calculate sum of numbers
    Sum {
        /// Numbers to sum
        #[arg(
            required = true,
            num_args = 1..,
            allow_hyphen_values = true,
            value_parser = parse_number
        )]
        numbers: Vec<f64>,
    },
}

/// Parses a float, tolerating surrounding whitespace and `_` between digits
/// (`" 1 "`, `1_000`).
fn parse_number(raw: &str) -> Result<f64, String> {
    let trimmed = raw.trim();
    let bytes = trimmed.as_bytes();
    let mut digits = String::with_capacity(trimmed.len());

    for (index, ch) in trimmed.char_indices() {
        if ch != '_' {
            digits.push(ch);
            continue;
        }
        let between_digits = index > 0
            && bytes[index - 1].is_ascii_digit()
            && bytes.get(index + 1).is_some_and(u8::is_ascii_digit);
        if !between_digits {
            return Err("invalid float literal".to_string());
        }
    }

    digits.parse::<f64>().map_err(|err| err.to_string())
}
