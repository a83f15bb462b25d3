use thiserror::Error;

pub type CommandResult<T> = Result<T, CommandError>;

#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum CommandError {
    /// Arguments that parsed fine but that the command cannot work with.
    #[error(transparent)]
    InvalidInput(#[from] InvalidInput),
}

#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum InvalidInput {
    #[error("Name cannot be empty")]
    EmptyName,
    #[error("Cannot calculate sum of empty list")]
    EmptyNumbers,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_input_displays_its_own_message() {
        let err = CommandError::from(InvalidInput::EmptyName);
        assert_eq!(err.to_string(), "Name cannot be empty");

        let err = CommandError::from(InvalidInput::EmptyNumbers);
        assert_eq!(err.to_string(), "Cannot calculate sum of empty list");
    }
}
