//! Construction of literal sets.
//!
//! [`build`] is the single entry point: it validates the shape of the input,
//! resolves the options for the provided form, derives accessors and
//! assembles the immutable [`EnumeratedLiterals`]. Construction either fully
//! succeeds or fails with a [`BuildError`].

pub mod error;
pub mod macros;

pub use error::{BuildError, BuildErrorKind};

use crate::accessors::derive_accessors;
use crate::core::{EnumeratedLiteralsOptions, Literal, ProvidedForm};
use crate::literals::{EnumeratedLiterals, LiteralsError};
use tracing::debug;

/// Build a literal set from bare values or models.
///
/// # Example
///
/// ```
/// use enumerated_literals::builder::build;
/// use enumerated_literals::core::{EnumeratedLiteralsOptions, LiteralModel};
///
/// let fruits = build(["apple", "blue berry"], EnumeratedLiteralsOptions::new()).unwrap();
/// assert_eq!(fruits.accessor("BLUE_BERRY"), Some("blue berry"));
///
/// let models = build(
///     [LiteralModel::new("apple"), LiteralModel::new("banana").with_accessor("Yellow")],
///     EnumeratedLiteralsOptions::new(),
/// )
/// .unwrap();
/// assert_eq!(models.accessor("apple"), Some("apple"));
/// assert_eq!(models.accessor("Yellow"), Some("banana"));
/// ```
pub fn build<I>(
    literals: I,
    options: EnumeratedLiteralsOptions,
) -> Result<EnumeratedLiterals, BuildError>
where
    I: IntoIterator,
    I::Item: Into<Literal>,
{
    let literals: Vec<Literal> = literals.into_iter().map(Into::into).collect();

    let form = ProvidedForm::classify(&literals)?;
    let accessor_options = options.resolve(form);
    let accessors = derive_accessors(&literals, &accessor_options)?;

    debug!(
        form = ?form,
        members = literals.len(),
        options = ?accessor_options,
        "Built enumerated literals"
    );

    let models = literals.into_iter().map(Literal::into_model).collect();
    Ok(EnumeratedLiterals::assemble(
        models,
        accessors,
        options,
        accessor_options,
        form,
    ))
}

impl EnumeratedLiterals {
    /// Build a literal set; see [`build`].
    pub fn new<I>(literals: I, options: EnumeratedLiteralsOptions) -> Result<Self, BuildError>
    where
        I: IntoIterator,
        I::Item: Into<Literal>,
    {
        build(literals, options)
    }

    /// Build a literal set from a JSON array of strings or model objects.
    ///
    /// ```
    /// use enumerated_literals::core::EnumeratedLiteralsOptions;
    /// use enumerated_literals::literals::EnumeratedLiterals;
    ///
    /// let set = EnumeratedLiterals::from_json(
    ///     r#"[{ "value": "apple", "color": "red" }, { "value": "pear", "color": "green" }]"#,
    ///     EnumeratedLiteralsOptions::new(),
    /// )
    /// .unwrap();
    /// assert_eq!(set.values(), ["apple", "pear"]);
    /// ```
    pub fn from_json(
        json: &str,
        options: EnumeratedLiteralsOptions,
    ) -> Result<Self, LiteralsError> {
        let literals: Vec<Literal> = serde_json::from_str(json)
            .map_err(|e| LiteralsError::DeserializationFailed(e.to_string()))?;
        Ok(build(literals, options)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{AccessorCase, LiteralModel};

    #[test]
    fn builder_rejects_empty_input() {
        let empty: Vec<&str> = Vec::new();

        let result = build(empty, EnumeratedLiteralsOptions::new());

        assert!(matches!(result, Err(BuildError::EmptyLiterals)));
    }

    #[test]
    fn builder_rejects_mixed_input() {
        let literals = vec![Literal::from("apple"), LiteralModel::new("banana").into()];

        let result = build(literals, EnumeratedLiteralsOptions::new());

        assert!(matches!(result, Err(BuildError::MixedLiterals)));
    }

    #[test]
    fn value_input_defaults_to_upper_accessors() {
        let set = build(["apple", "banana"], EnumeratedLiteralsOptions::new()).unwrap();

        assert_eq!(set.accessor("APPLE"), Some("apple"));
        assert_eq!(set.accessor("apple"), None);
        assert_eq!(set.provided_form(), ProvidedForm::Values);
    }

    #[test]
    fn model_input_defaults_to_unchanged_accessors() {
        let set = build([LiteralModel::new("apple")], EnumeratedLiteralsOptions::new()).unwrap();

        assert_eq!(set.accessor("apple"), Some("apple"));
        assert_eq!(set.provided_form(), ProvidedForm::Models);
    }

    #[test]
    fn configured_case_is_applied() {
        let set = build(
            ["apple", "banana", "blueberry", "orange"],
            EnumeratedLiteralsOptions::new().with_accessor_case(AccessorCase::Lower),
        )
        .unwrap();

        for value in set.values() {
            assert_eq!(set.accessor(value), Some(value.as_str()));
        }
    }

    #[test]
    fn values_and_models_follow_input_order() {
        let set = build(["orange", "apple", "pear"], EnumeratedLiteralsOptions::new()).unwrap();

        assert_eq!(set.values(), ["orange", "apple", "pear"]);
        let model_values: Vec<&str> = set.models().iter().map(LiteralModel::value).collect();
        assert_eq!(model_values, vec!["orange", "apple", "pear"]);
    }

    #[test]
    fn explicit_accessors_whitespace_collapses() {
        let set = build(
            [
                LiteralModel::new("apple").with_accessor("ap  ple"),
                LiteralModel::new("banana").with_accessor("ba n   ana"),
                LiteralModel::new("blueberry").with_accessor("blu   eber r  y"),
                LiteralModel::new("orange").with_accessor("ora  nge"),
            ],
            EnumeratedLiteralsOptions::new(),
        )
        .unwrap();

        assert_eq!(set.accessor("ap_ple"), Some("apple"));
        assert_eq!(set.accessor("ba_n_ana"), Some("banana"));
        assert_eq!(set.accessor("blu_eber_r_y"), Some("blueberry"));
        assert_eq!(set.accessor("ora_nge"), Some("orange"));
    }

    #[test]
    fn build_errors_abort_construction() {
        for literals in [
            vec!["foo&bar"],
            vec!["apple", "apple", "banana"],
            vec!["foo bar", "foo-bar"],
        ] {
            assert!(build(literals, EnumeratedLiteralsOptions::new()).is_err());
        }
    }

    #[test]
    fn from_json_reports_malformed_input() {
        let result = EnumeratedLiterals::from_json("[1, 2]", EnumeratedLiteralsOptions::new());

        assert!(matches!(
            result,
            Err(LiteralsError::DeserializationFailed(_))
        ));
    }

    #[test]
    fn from_json_reports_mixed_input() {
        let result = EnumeratedLiterals::from_json(
            r#"["apple", { "value": "banana" }]"#,
            EnumeratedLiteralsOptions::new(),
        );

        assert_eq!(
            result.unwrap_err(),
            LiteralsError::Build(BuildError::MixedLiterals)
        );
    }
}
