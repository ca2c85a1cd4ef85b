//! Coercion of delimiter-separated command-line values into lists.
//!
//! `--select TITLE,REV,DATE` arrives as one string; [`DelimitedInput`]
//! splits it into `["TITLE", "REV", "DATE"]`. It only parses delimited
//! strings: handing it a list that was already split is a caller error.

use std::fmt;
use std::marker::PhantomData;
use std::str::FromStr;

use crate::error::DsqueryError;
use crate::Result;

/// Separator between items of a delimited value.
pub const INPUT_DELIMITER: char = ',';

/// The shapes a raw argument value can take.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RawInput<'a> {
    /// No value was given
    Absent,
    /// A delimited string such as `"TITLE,REV"`
    Text(&'a str),
    /// A pre-built collection
    List(Vec<String>),
}

impl<'a> From<&'a str> for RawInput<'a> {
    fn from(s: &'a str) -> Self {
        RawInput::Text(s)
    }
}

impl<'a> From<Option<&'a str>> for RawInput<'a> {
    fn from(s: Option<&'a str>) -> Self {
        s.map_or(RawInput::Absent, RawInput::Text)
    }
}

impl From<Vec<String>> for RawInput<'_> {
    fn from(items: Vec<String>) -> Self {
        RawInput::List(items)
    }
}

/// Splits delimited strings into a list of `T`.
pub struct DelimitedInput<T> {
    _item: PhantomData<fn() -> T>,
}

impl<T> DelimitedInput<T>
where
    T: FromStr,
    T::Err: fmt::Display,
{
    pub fn new() -> Self {
        Self { _item: PhantomData }
    }

    /// Coerce a raw value.
    ///
    /// - absent, empty string or empty list → `[]`
    /// - string → split on `,`, empty segments kept, each parsed as `T`
    /// - non-empty list → [`DsqueryError::ArgumentType`]
    pub fn coerce<'a>(&self, input: impl Into<RawInput<'a>>) -> Result<Vec<T>> {
        match input.into() {
            RawInput::Absent => Ok(Vec::new()),
            RawInput::Text(s) => self.parse_str(s),
            RawInput::List(items) if items.is_empty() => Ok(Vec::new()),
            RawInput::List(items) => Err(DsqueryError::ArgumentType(format!(
                "expected a '{INPUT_DELIMITER}'-separated string, got a list of {} items",
                items.len()
            ))),
        }
    }

    /// Split a delimited string and parse each segment.
    pub fn parse_str(&self, s: &str) -> Result<Vec<T>> {
        if s.is_empty() {
            return Ok(Vec::new());
        }
        s.split(INPUT_DELIMITER)
            .map(|segment| {
                segment.parse::<T>().map_err(|e| {
                    DsqueryError::ArgumentType(format!("invalid value '{segment}': {e}"))
                })
            })
            .collect()
    }
}

impl<T> Default for DelimitedInput<T>
where
    T: FromStr,
    T::Err: fmt::Display,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Clone for DelimitedInput<T> {
    fn clone(&self) -> Self {
        Self { _item: PhantomData }
    }
}

impl<T> fmt::Debug for DelimitedInput<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DelimitedInput")
            .field("item", &std::any::type_name::<T>())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_null_or_empty_values() {
        let input = DelimitedInput::<String>::new();
        assert!(input.coerce(RawInput::Absent).unwrap().is_empty());
        assert!(input.coerce(Vec::<String>::new()).unwrap().is_empty());
        assert!(input.coerce("").unwrap().is_empty());
        assert!(input.coerce(None::<&str>).unwrap().is_empty());
    }

    #[test]
    fn test_parse_strings_returns_list() {
        let input = DelimitedInput::<String>::new();
        assert_eq!(
            input.coerce("TITLE,REV,DATE").unwrap(),
            vec!["TITLE", "REV", "DATE"]
        );
    }

    #[test]
    fn test_single_value() {
        let input = DelimitedInput::<String>::new();
        assert_eq!(input.coerce("TITLE").unwrap(), vec!["TITLE"]);
    }

    #[test]
    fn test_empty_segments_are_kept() {
        let input = DelimitedInput::<String>::new();
        assert_eq!(input.coerce(",A,,B,").unwrap(), vec!["", "A", "", "B", ""]);
        assert_eq!(input.coerce(" A, B").unwrap(), vec![" A", " B"]);
    }

    #[test]
    fn test_parse_list_raises_argument_error() {
        let input = DelimitedInput::<i64>::new();
        let values = vec!["1".to_string(), "2".to_string(), "3".to_string()];
        let err = input.coerce(values).unwrap_err();
        assert!(matches!(err, DsqueryError::ArgumentType(_)));
    }

    #[test]
    fn test_parse_list_raises_for_string_items_too() {
        let input = DelimitedInput::<String>::new();
        let err = input.coerce(vec!["TITLE".to_string()]).unwrap_err();
        assert!(matches!(err, DsqueryError::ArgumentType(_)));
    }

    #[test]
    fn test_typed_elements() {
        let input = DelimitedInput::<i64>::new();
        assert_eq!(input.coerce("1,2,3").unwrap(), vec![1, 2, 3]);

        let err = input.coerce("1,two").unwrap_err();
        assert!(err.to_string().contains("'two'"));
    }
}
