//! Subset derivation via `pick` and `omit`.
//!
//! Subsets are rebuilt from scratch through the regular build pipeline, so
//! they are validated exactly like a freshly constructed set. Only the static
//! options of the parent carry over.

use super::{EnumeratedLiterals, LiteralsError};
use crate::builder::build;
use crate::core::{EnumeratedLiteralsOptions, Literal, ProvidedForm};
use tracing::debug;

impl EnumeratedLiterals {
    /// A new set holding only `values`, in their original relative order.
    ///
    /// Every element of `values` must be a member. Case and replacement
    /// options are inherited; anything supplied in `options` wins.
    ///
    /// # Example
    ///
    /// ```rust
    /// use enumerated_literals::core::EnumeratedLiteralsOptions;
    /// use enumerated_literals::literals::EnumeratedLiterals;
    ///
    /// let fruits = EnumeratedLiterals::new(
    ///     ["apple", "banana", "blueberry", "orange"],
    ///     EnumeratedLiteralsOptions::new(),
    /// )
    /// .unwrap();
    ///
    /// let berries = fruits
    ///     .pick(&["blueberry", "apple"], EnumeratedLiteralsOptions::new())
    ///     .unwrap();
    /// assert_eq!(berries.values(), ["apple", "blueberry"]);
    /// assert_eq!(berries.accessor("BANANA"), None);
    /// ```
    pub fn pick<S: AsRef<str>>(
        &self,
        values: &[S],
        options: EnumeratedLiteralsOptions,
    ) -> Result<EnumeratedLiterals, LiteralsError> {
        self.assert_multiple(values, None)?;
        self.subset("pick", options, |member| {
            values.iter().any(|v| v.as_ref() == member)
        })
    }

    /// A new set holding every member except `values`.
    ///
    /// Every element of `values` must be a member. Options are inherited as
    /// for [`pick`](Self::pick).
    pub fn omit<S: AsRef<str>>(
        &self,
        values: &[S],
        options: EnumeratedLiteralsOptions,
    ) -> Result<EnumeratedLiterals, LiteralsError> {
        self.assert_multiple(values, None)?;
        self.subset("omit", options, |member| {
            !values.iter().any(|v| v.as_ref() == member)
        })
    }

    fn subset<F>(
        &self,
        operation: &'static str,
        options: EnumeratedLiteralsOptions,
        keep: F,
    ) -> Result<EnumeratedLiterals, LiteralsError>
    where
        F: Fn(&str) -> bool,
    {
        let literals: Vec<Literal> = match self.provided_form {
            ProvidedForm::Models => self
                .models
                .iter()
                .filter(|m| keep(m.value()))
                .cloned()
                .map(Literal::Model)
                .collect(),
            ProvidedForm::Values => self
                .values
                .iter()
                .filter(|v| keep(v.as_str()))
                .cloned()
                .map(Literal::Value)
                .collect(),
        };

        debug!(
            operation,
            kept = literals.len(),
            of = self.values.len(),
            "Deriving literal subset"
        );

        let options = self.options.static_options().merged_with(options);
        Ok(build(literals, options)?)
    }
}
