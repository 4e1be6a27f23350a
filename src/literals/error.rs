//! Runtime errors raised by literal set operations.

use crate::builder::BuildError;
use crate::core::InvalidValueMessage;
use crate::formatters::{humanize_list, HumanizeListOptions};
use thiserror::Error;

/// The offending value, or values, of an invalid value error.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Received {
    Single(String),
    Multiple(Vec<String>),
}

impl From<&str> for Received {
    fn from(value: &str) -> Self {
        Self::Single(value.to_string())
    }
}

impl From<String> for Received {
    fn from(value: String) -> Self {
        Self::Single(value)
    }
}

impl From<Vec<String>> for Received {
    fn from(values: Vec<String>) -> Self {
        Self::Multiple(values)
    }
}

impl From<&[&str]> for Received {
    fn from(values: &[&str]) -> Self {
        Self::Multiple(values.iter().map(|v| v.to_string()).collect())
    }
}

/// What a configured message function gets to look at.
///
/// `received` is always a list; a single invalid value is a one element
/// list.
#[derive(Clone, Copy, Debug)]
pub struct InvalidValueContext<'a> {
    pub expected: &'a [String],
    pub received: &'a [String],
}

/// Source of a custom invalid value message.
#[derive(Clone, Copy)]
pub enum MessageSource<'a> {
    Text(&'a str),
    Function(&'a InvalidValueMessage),
}

impl MessageSource<'_> {
    fn render(&self, context: &InvalidValueContext<'_>) -> String {
        match self {
            Self::Text(text) => text.to_string(),
            Self::Function(message) => message(context),
        }
    }
}

/// A queried value is not a member of the literal set.
///
/// # Example
///
/// ```rust
/// use enumerated_literals::literals::{InvalidLiteralValueError, Received};
///
/// let expected = vec!["a".to_string(), "b".to_string(), "c".to_string()];
/// let err = InvalidLiteralValueError::new(Received::from("x"), &expected, None).unwrap();
///
/// assert_eq!(
///     err.to_string(),
///     "The value 'x' is invalid, it must be one of 'a', 'b', or 'c'."
/// );
/// ```
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("{message}")]
pub struct InvalidLiteralValueError {
    received: Vec<String>,
    expected: Vec<String>,
    message: String,
}

impl InvalidLiteralValueError {
    /// Build the error, resolving its message.
    ///
    /// Fails with [`LiteralsError::Internal`] when `expected` is empty or
    /// when an empty list of received values is given.
    pub fn new(
        received: Received,
        expected: &[String],
        message: Option<MessageSource<'_>>,
    ) -> Result<Self, LiteralsError> {
        if expected.is_empty() {
            return Err(LiteralsError::Internal(
                "The values on the literals instance are empty, this should not be allowed, and \
                 should have been checked before this point in the code!"
                    .to_string(),
            ));
        }

        let received = match received {
            Received::Single(value) => vec![value],
            Received::Multiple(values) if values.is_empty() => {
                return Err(LiteralsError::Internal(
                    "The array of invalid values must be non-empty!".to_string(),
                ));
            }
            Received::Multiple(values) => values,
        };

        let context = InvalidValueContext {
            expected,
            received: &received,
        };
        let subject = match received.as_slice() {
            [single] => format!("The value '{single}' is"),
            many => format!(
                "The values {} are",
                humanize_list(many, &HumanizeListOptions::quoted("and"))
            ),
        };
        let message = match message {
            Some(source) => format!("{subject} invalid: {}", source.render(&context)),
            None => {
                let pronoun = if received.len() == 1 { "it" } else { "they" };
                format!(
                    "{subject} invalid, {pronoun} must be one of {}.",
                    humanize_list(expected, &HumanizeListOptions::quoted("or"))
                )
            }
        };

        Ok(Self {
            received,
            expected: expected.to_vec(),
            message,
        })
    }

    /// The offending values.
    pub fn received(&self) -> &[String] {
        &self.received
    }

    /// The members of the set at the time of the error.
    pub fn expected(&self) -> &[String] {
        &self.expected
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

/// Errors returned by operations on a literal set.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum LiteralsError {
    #[error(transparent)]
    Build(#[from] BuildError),

    #[error(transparent)]
    InvalidValue(#[from] InvalidLiteralValueError),

    #[error("The '{operation}' method must be called with a non-empty array of values.")]
    EmptyQuery { operation: &'static str },

    #[error("Failed to deserialize literals: {0}")]
    DeserializationFailed(String),

    #[error("Internal Error: {0}")]
    Internal(String),
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    fn fruits() -> Vec<String> {
        ["apple", "banana", "blueberry", "orange"]
            .iter()
            .map(|v| v.to_string())
            .collect()
    }

    #[test]
    fn single_value_default_message() {
        let err = InvalidLiteralValueError::new("cucumber".into(), &fruits(), None).unwrap();

        assert_eq!(
            err.to_string(),
            "The value 'cucumber' is invalid, it must be one of 'apple', 'banana', \
             'blueberry', or 'orange'."
        );
        assert_eq!(err.received(), ["cucumber".to_string()]);
    }

    #[test]
    fn multiple_values_default_message() {
        let received = Received::from(vec!["cucumber".to_string(), "pear".to_string()]);
        let err = InvalidLiteralValueError::new(received, &fruits(), None).unwrap();

        assert_eq!(
            err.to_string(),
            "The values 'cucumber' and 'pear' are invalid, they must be one of 'apple', \
             'banana', 'blueberry', or 'orange'."
        );
    }

    #[test]
    fn one_element_list_renders_as_single_value() {
        let received = Received::from(vec!["cucumber".to_string()]);
        let err = InvalidLiteralValueError::new(received, &fruits(), None).unwrap();

        assert!(err.to_string().starts_with("The value 'cucumber' is invalid, it must"));
    }

    #[test]
    fn text_message_is_appended() {
        let err = InvalidLiteralValueError::new(
            "cucumber".into(),
            &fruits(),
            Some(MessageSource::Text("The value is not a fruit!")),
        )
        .unwrap();

        assert_eq!(
            err.to_string(),
            "The value 'cucumber' is invalid: The value is not a fruit!"
        );
    }

    #[test]
    fn message_function_receives_context() {
        let message: InvalidValueMessage = Arc::new(|ctx: &InvalidValueContext<'_>| {
            format!(
                "The value {} is not a fruit, the first fruit is {}.",
                ctx.received[0], ctx.expected[0]
            )
        });
        let received = Received::from(vec!["pear".to_string(), "cucumber".to_string()]);
        let err = InvalidLiteralValueError::new(
            received,
            &fruits(),
            Some(MessageSource::Function(&message)),
        )
        .unwrap();

        assert_eq!(
            err.to_string(),
            "The values 'pear' and 'cucumber' are invalid: The value pear is not a fruit, the \
             first fruit is apple."
        );
    }

    #[test]
    fn empty_expected_values_is_internal_error() {
        let result = InvalidLiteralValueError::new(
            "cucumber".into(),
            &[],
            Some(MessageSource::Text("foobar")),
        );

        assert_eq!(
            result.unwrap_err().to_string(),
            "Internal Error: The values on the literals instance are empty, this should not be \
             allowed, and should have been checked before this point in the code!"
        );
    }

    #[test]
    fn empty_received_list_is_internal_error() {
        let result = InvalidLiteralValueError::new(Received::Multiple(vec![]), &fruits(), None);

        assert!(matches!(result, Err(LiteralsError::Internal(_))));
    }
}
