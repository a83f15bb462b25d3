pub mod greet;
pub mod sum;

use crate::cli::Command;
use crate::error::CommandResult;
use crate::number::Number;

/// Dispatches execution to the appropriate command handler and returns the
/// line to print on success.
pub fn execute(command: &Command) -> CommandResult<String> {
    match command {
        Command::Greet { name } => {
            tracing::debug!(command = "greet", "executing command");
            greet::greeting(name)
        }
        Command::Sum { numbers } => {
            tracing::debug!(command = "sum", count = numbers.len(), "executing command");
            let numbers: Vec<Number> = numbers.iter().copied().map(Number::Float).collect();
            let total = sum::calculate_sum(&numbers)?;
            Ok(format!("Sum: {total}"))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn greet_returns_greeting() {
        let command = Command::Greet {
            name: "World".into(),
        };
        assert_eq!(execute(&command).unwrap(), "Hello, World!");
    }

    #[test]
    fn sum_prints_as_float() {
        let command = Command::Sum {
            numbers: vec![1.0, 2.0, 3.0],
        };
        assert_eq!(execute(&command).unwrap(), "Sum: 6.0");
    }

    #[test]
    fn sum_of_nothing_is_an_error() {
        let command = Command::Sum {
            numbers: Vec::new(),
        };
        assert_eq!(
            execute(&command).unwrap_err().to_string(),
            "Cannot calculate sum of empty list"
        );
    }
}
