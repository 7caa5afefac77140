/// Command argument parsing (Discord-agnostic)
use chrono::NaiveDate;

use crate::utils::datetime::parse_birthday;

/// Argument parsing error types
#[derive(Debug, PartialEq, Eq)]
pub enum ArgumentError {
    InvalidFormat,
}

impl std::fmt::Display for ArgumentError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ArgumentError::InvalidFormat => write!(f, "Invalid argument format"),
        }
    }
}

impl std::error::Error for ArgumentError {}

/// Parse the arguments of the add command.
///
/// The trailing whitespace-delimited token must be a valid DD.MM.YYYY date;
/// everything before it is joined with single spaces to form the name.
/// Returns the name, the date token as entered, and the parsed date.
pub fn parse_add_args(input: &str) -> Result<(String, String, NaiveDate), ArgumentError> {
    let tokens: Vec<&str> = input.split_whitespace().collect();
    let Some((date_token, name_tokens)) = tokens.split_last() else {
        return Err(ArgumentError::InvalidFormat);
    };

    if name_tokens.is_empty() {
        return Err(ArgumentError::InvalidFormat);
    }

    let date = parse_birthday(date_token).map_err(|_| ArgumentError::InvalidFormat)?;

    Ok((name_tokens.join(" "), (*date_token).to_string(), date))
}

/// Parse the argument of the remove command.
///
/// Exactly one token that parses as an integer. Negative values parse
/// successfully; the range check against the current list is the store's.
pub fn parse_remove_args(input: &str) -> Result<i64, ArgumentError> {
    let tokens: Vec<&str> = input.split_whitespace().collect();
    let [token] = tokens.as_slice() else {
        return Err(ArgumentError::InvalidFormat);
    };

    token.parse().map_err(|_| ArgumentError::InvalidFormat)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_add_args_multi_word_name() {
        let (name, date_token, date) = parse_add_args("Jane Doe 01.01.2000").unwrap();
        assert_eq!(name, "Jane Doe");
        assert_eq!(date_token, "01.01.2000");
        assert_eq!(date, NaiveDate::from_ymd_opt(2000, 1, 1).unwrap());
    }

    #[test]
    fn test_parse_add_args_single_word_name() {
        let (name, date_token, _) = parse_add_args("Alice 15.03.1990").unwrap();
        assert_eq!(name, "Alice");
        assert_eq!(date_token, "15.03.1990");
    }

    #[test]
    fn test_parse_add_args_normalizes_whitespace() {
        let (name, _, _) = parse_add_args("  Jane   van  Doe   01.01.2000 ").unwrap();
        assert_eq!(name, "Jane van Doe");
    }

    #[test]
    fn test_parse_add_args_keeps_date_token_verbatim() {
        let (_, date_token, _) = parse_add_args("Alice 1.3.1990").unwrap();
        assert_eq!(date_token, "1.3.1990");
    }

    #[test]
    fn test_parse_add_args_missing_tokens() {
        assert_eq!(parse_add_args(""), Err(ArgumentError::InvalidFormat));
        assert_eq!(parse_add_args("   "), Err(ArgumentError::InvalidFormat));
        // A lone date has no name
        assert_eq!(
            parse_add_args("01.01.2000"),
            Err(ArgumentError::InvalidFormat)
        );
        // A lone name has no date
        assert_eq!(parse_add_args("Alice"), Err(ArgumentError::InvalidFormat));
    }

    #[test]
    fn test_parse_add_args_invalid_date() {
        assert_eq!(
            parse_add_args("Alice 31.02.2000"),
            Err(ArgumentError::InvalidFormat)
        );
        assert_eq!(
            parse_add_args("Alice 2000-01-01"),
            Err(ArgumentError::InvalidFormat)
        );
        // Date must be the trailing token
        assert_eq!(
            parse_add_args("01.01.2000 Alice"),
            Err(ArgumentError::InvalidFormat)
        );
    }

    #[test]
    fn test_parse_remove_args_valid() {
        assert_eq!(parse_remove_args("0"), Ok(0));
        assert_eq!(parse_remove_args("17"), Ok(17));
        assert_eq!(parse_remove_args("  3  "), Ok(3));
    }

    #[test]
    fn test_parse_remove_args_negative_parses() {
        assert_eq!(parse_remove_args("-1"), Ok(-1));
    }

    #[test]
    fn test_parse_remove_args_invalid() {
        assert_eq!(parse_remove_args(""), Err(ArgumentError::InvalidFormat));
        assert_eq!(parse_remove_args("abc"), Err(ArgumentError::InvalidFormat));
        assert_eq!(parse_remove_args("1.5"), Err(ArgumentError::InvalidFormat));
        // Exactly one argument is required
        assert_eq!(parse_remove_args("1 2"), Err(ArgumentError::InvalidFormat));
    }
}
