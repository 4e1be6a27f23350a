//! Human readable list formatting.
//!
//! Joins an ordered list of strings into a sentence fragment such as
//! `apple, banana, and orange`. Used for the `humanize` operation and for
//! building invalid value error messages.

use std::fmt;
use std::sync::Arc;

/// Per-item formatter applied before joining.
pub type ItemFormatter = Arc<dyn Fn(&str) -> String + Send + Sync>;

/// Options controlling how [`humanize_list`] joins items.
///
/// # Example
///
/// ```rust
/// use enumerated_literals::formatters::{humanize_list, HumanizeListOptions};
///
/// let opts = HumanizeListOptions::new()
///     .conjunction("or")
///     .oxford_comma(false)
///     .formatter(|v| format!("'{v}'"));
///
/// assert_eq!(
///     humanize_list(&["apple", "banana", "orange"], &opts),
///     "'apple', 'banana' or 'orange'"
/// );
/// ```
#[derive(Clone)]
pub struct HumanizeListOptions {
    conjunction: String,
    delimiter: String,
    oxford_comma: bool,
    formatter: Option<ItemFormatter>,
}

impl HumanizeListOptions {
    /// Defaults: conjunction `and`, delimiter `,`, oxford comma enabled.
    pub fn new() -> Self {
        Self {
            conjunction: "and".to_string(),
            delimiter: ",".to_string(),
            oxford_comma: true,
            formatter: None,
        }
    }

    pub fn conjunction(mut self, conjunction: impl Into<String>) -> Self {
        self.conjunction = conjunction.into();
        self
    }

    pub fn delimiter(mut self, delimiter: impl Into<String>) -> Self {
        self.delimiter = delimiter.into();
        self
    }

    pub fn oxford_comma(mut self, enabled: bool) -> Self {
        self.oxford_comma = enabled;
        self
    }

    pub fn formatter<F>(mut self, formatter: F) -> Self
    where
        F: Fn(&str) -> String + Send + Sync + 'static,
    {
        self.formatter = Some(Arc::new(formatter));
        self
    }

    /// Wraps every item in single quotes, the style used in error messages.
    pub(crate) fn quoted(conjunction: &str) -> Self {
        Self::new()
            .conjunction(conjunction)
            .formatter(|v| format!("'{v}'"))
    }

    fn format_item(&self, item: &str) -> String {
        match &self.formatter {
            Some(formatter) => formatter(item),
            None => item.to_string(),
        }
    }
}

impl Default for HumanizeListOptions {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for HumanizeListOptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HumanizeListOptions")
            .field("conjunction", &self.conjunction)
            .field("delimiter", &self.delimiter)
            .field("oxford_comma", &self.oxford_comma)
            .field("formatter", &self.formatter.as_ref().map(|_| "<fn>"))
            .finish()
    }
}

/// Join `items` into a humanized list.
///
/// - no items: empty string
/// - one item: the item itself
/// - two items: `A {conjunction} B`
/// - three or more: `A{delimiter} B{delimiter} {conjunction} C`, the last
///   delimiter being dropped when the oxford comma is disabled
pub fn humanize_list<S: AsRef<str>>(items: &[S], options: &HumanizeListOptions) -> String {
    let formatted: Vec<String> = items
        .iter()
        .map(|item| options.format_item(item.as_ref()))
        .collect();

    match formatted.as_slice() {
        [] => String::new(),
        [only] => only.clone(),
        [first, second] => format!("{first} {} {second}", options.conjunction),
        [init @ .., last] => {
            let separator = format!("{} ", options.delimiter);
            let head = init.join(&separator);
            let trailing = if options.oxford_comma {
                options.delimiter.as_str()
            } else {
                ""
            };
            format!("{head}{trailing} {} {last}", options.conjunction)
        }
    }
}
