//! The immutable literal set and its runtime operations.
//!
//! An [`EnumeratedLiterals`] is built once, validated, and never mutated.
//! Every operation is a pure function of the set and its arguments, so one
//! instance can be shared freely between threads. Subsets produced by
//! `pick` and `omit` are new, independent instances.
//!
//! # Example
//!
//! ```rust
//! use enumerated_literals::core::EnumeratedLiteralsOptions;
//! use enumerated_literals::literals::EnumeratedLiterals;
//!
//! let fruits = EnumeratedLiterals::new(
//!     ["apple", "banana", "blueberry", "orange"],
//!     EnumeratedLiteralsOptions::new(),
//! )
//! .unwrap();
//!
//! assert_eq!(fruits.accessor("APPLE"), Some("apple"));
//! assert!(fruits.contains("banana"));
//! assert_eq!(fruits.parse("orange", None).unwrap(), "orange");
//! assert!(fruits.parse("cucumber", None).is_err());
//! assert_eq!(fruits.to_string(), "apple, banana, blueberry, and orange");
//! ```

mod error;
mod subset;

pub use error::{
    InvalidLiteralValueError, InvalidValueContext, LiteralsError, MessageSource, Received,
};

use crate::accessors::Accessors;
use crate::core::{AccessorOptions, EnumeratedLiteralsOptions, LiteralModel, ProvidedForm};
use crate::formatters::{humanize_list, HumanizeListOptions};
use serde::{Serialize, Serializer};
use serde_json::Value;
use std::fmt;
use stillwater::validation::Validation;
use stillwater::NonEmptyVec;
use tracing::debug;

/// Options for [`EnumeratedLiterals::get_model_safe`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct GetModelSafeOptions {
    /// Fail instead of returning `None` for non-members.
    pub strict: bool,
}

/// An immutable set of enumerated string literals.
#[derive(Clone, Debug)]
pub struct EnumeratedLiterals {
    values: Vec<String>,
    models: Vec<LiteralModel>,
    accessors: Accessors,
    options: EnumeratedLiteralsOptions,
    accessor_options: AccessorOptions,
    provided_form: ProvidedForm,
}

impl EnumeratedLiterals {
    pub(crate) fn assemble(
        models: Vec<LiteralModel>,
        accessors: Accessors,
        options: EnumeratedLiteralsOptions,
        accessor_options: AccessorOptions,
        provided_form: ProvidedForm,
    ) -> Self {
        Self {
            values: models.iter().map(|m| m.value().to_string()).collect(),
            models,
            accessors,
            options,
            accessor_options,
            provided_form,
        }
    }

    /// Member values in input order.
    pub fn values(&self) -> &[String] {
        &self.values
    }

    /// Member models in input order; bare values appear as `{ value }`.
    pub fn models(&self) -> &[LiteralModel] {
        &self.models
    }

    /// The value bound to an accessor name.
    pub fn accessor(&self, name: &str) -> Option<&str> {
        self.accessors.get(name)
    }

    pub fn accessors(&self) -> &Accessors {
        &self.accessors
    }

    /// Options as supplied by the caller.
    pub fn options(&self) -> &EnumeratedLiteralsOptions {
        &self.options
    }

    /// Accessor options after defaults were applied.
    pub fn accessor_options(&self) -> &AccessorOptions {
        &self.accessor_options
    }

    pub fn provided_form(&self) -> ProvidedForm {
        self.provided_form
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Always `false` for a successfully built set.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Whether `value` is a member.
    pub fn contains(&self, value: &str) -> bool {
        self.member(value).is_some()
    }

    /// Whether every element of `values` is a member.
    ///
    /// An empty query is rejected rather than being vacuously true.
    pub fn contains_multiple<S: AsRef<str>>(&self, values: &[S]) -> Result<bool, LiteralsError> {
        if values.is_empty() {
            return Err(LiteralsError::EmptyQuery {
                operation: "containsMultiple",
            });
        }
        Ok(values.iter().all(|v| self.contains(v.as_ref())))
    }

    /// Fail with an invalid value error unless `value` is a member.
    pub fn assert(&self, value: &str, error_message: Option<&str>) -> Result<(), LiteralsError> {
        self.parse(value, error_message).map(|_| ())
    }

    /// Fail unless every element of `values` is a member.
    ///
    /// The error lists all invalid entries, not just the first.
    pub fn assert_multiple<S: AsRef<str>>(
        &self,
        values: &[S],
        error_message: Option<&str>,
    ) -> Result<(), LiteralsError> {
        self.parse_multiple(values, error_message).map(|_| ())
    }

    /// Narrow `value` to a member, failing if it is not one.
    pub fn parse(&self, value: &str, error_message: Option<&str>) -> Result<&str, LiteralsError> {
        match self.member(value) {
            Some(member) => Ok(member),
            None => self.throw_invalid_value(value, error_message),
        }
    }

    /// Non-failing [`parse`](Self::parse).
    pub fn parse_safe(&self, value: &str) -> Option<&str> {
        self.member(value)
    }

    /// Narrow every element of `values` to a member, reporting all invalid
    /// entries at once.
    pub fn parse_multiple<S: AsRef<str>>(
        &self,
        values: &[S],
        error_message: Option<&str>,
    ) -> Result<Vec<&str>, LiteralsError> {
        let checks: Vec<Validation<&str, NonEmptyVec<String>>> = values
            .iter()
            .map(|v| match self.member(v.as_ref()) {
                Some(member) => Validation::success(member),
                None => Validation::fail(v.as_ref().to_string()),
            })
            .collect();

        match Validation::all_vec(checks) {
            Validation::Success(members) => Ok(members),
            Validation::Failure(invalid) => {
                let invalid: Vec<String> = invalid.iter().cloned().collect();
                self.throw_invalid_value(invalid, error_message)
            }
        }
    }

    /// The model of a member value.
    pub fn get_model(&self, value: &str) -> Result<&LiteralModel, LiteralsError> {
        self.assert(value, None)?;
        match self.models.iter().find(|m| m.value() == value) {
            Some(model) => Ok(model),
            None => self.throw_invalid_value(value, None),
        }
    }

    /// The model of `value`, or `None` if it is not a member.
    ///
    /// With `strict` set, non-members fail like [`get_model`](Self::get_model).
    pub fn get_model_safe(
        &self,
        value: &str,
        options: GetModelSafeOptions,
    ) -> Result<Option<&LiteralModel>, LiteralsError> {
        if !self.contains(value) {
            if options.strict {
                return self.throw_invalid_value(value, None);
            }
            return Ok(None);
        }
        self.get_model(value).map(Some)
    }

    /// An attribute of a member's model.
    pub fn get_attribute(
        &self,
        value: &str,
        attribute: &str,
    ) -> Result<Option<Value>, LiteralsError> {
        Ok(self.get_model(value)?.attribute(attribute))
    }

    /// An attribute of every model, in model order.
    pub fn get_attributes(&self, attribute: &str) -> Vec<Option<Value>> {
        self.models.iter().map(|m| m.attribute(attribute)).collect()
    }

    /// The member values as a humanized list.
    pub fn humanize(&self, options: &HumanizeListOptions) -> String {
        humanize_list(&self.values, options)
    }

    /// Always fails with an invalid value error for `received`.
    ///
    /// The message comes from `error_message` if given, else from the
    /// configured message function, else the built-in default.
    pub fn throw_invalid_value<T>(
        &self,
        received: impl Into<Received>,
        error_message: Option<&str>,
    ) -> Result<T, LiteralsError> {
        let source = match (error_message, &self.options.invalid_value_error_message) {
            (Some(text), _) => Some(MessageSource::Text(text)),
            (None, Some(message)) => Some(MessageSource::Function(message)),
            (None, None) => None,
        };

        let error = InvalidLiteralValueError::new(received.into(), &self.values, source)?;
        debug!(received = ?error.received(), "Rejected invalid literal value");
        Err(error.into())
    }

    fn member(&self, value: &str) -> Option<&str> {
        self.values
            .iter()
            .find(|v| v.as_str() == value)
            .map(String::as_str)
    }
}

impl fmt::Display for EnumeratedLiterals {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.humanize(&HumanizeListOptions::default()))
    }
}

impl Serialize for EnumeratedLiterals {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.models.serialize(serializer)
    }
}
