use crate::error::{CommandResult, InvalidInput};
use crate::number::Number;

/// Adds up `numbers`, staying integral unless a float shows up.
pub fn calculate_sum(numbers: &[Number]) -> CommandResult<Number> {
    if numbers.is_empty() {
        return Err(InvalidInput::EmptyNumbers.into());
    }

    Ok(numbers
        .iter()
        .copied()
        .fold(Number::default(), |total, number| total + number))
}
