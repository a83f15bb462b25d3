use crate::error::{CommandResult, InvalidInput};

/// Builds the greeting for `name`, ignoring surrounding whitespace.
pub fn greeting(name: &str) -> CommandResult<String> {
    let name = name.trim();
    if name.is_empty() {
        return Err(InvalidInput::EmptyName.into());
    }

    Ok(format!("Hello, {name}!"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CommandError;

    #[test]
    fn greets_by_name() {
        assert_eq!(greeting("World").unwrap(), "Hello, World!");
    }

    #[test]
    fn passes_non_ascii_names_through() {
        assert_eq!(greeting("世界").unwrap(), "Hello, 世界!");
    }

    #[test]
    fn trims_surrounding_whitespace() {
        assert_eq!(greeting("  Python  ").unwrap(), "Hello, Python!");
        assert_eq!(greeting("\tAda Lovelace\n").unwrap(), "Hello, Ada Lovelace!");
    }

    #[test]
    fn rejects_blank_names() {
        for name in ["", "   ", "\t\n"] {
            let err = greeting(name).unwrap_err();
            assert_eq!(err, CommandError::InvalidInput(InvalidInput::EmptyName));
            assert_eq!(err.to_string(), "Name cannot be empty");
        }
    }

    #[test]
    fn keeps_punctuation_and_digits() {
        for (name, expected) in [
            ("Alice", "Hello, Alice!"),
            ("123", "Hello, 123!"),
            ("special@chars", "Hello, special@chars!"),
        ] {
            assert_eq!(greeting(name).unwrap(), expected);
        }
    }
}
