//! Accessor and set configuration.
//!
//! Caller-supplied options leave every field optional; [`AccessorOptions`]
//! is the fully resolved form, with defaults that depend on whether the
//! literals were provided as bare values or as models.

use super::literal::ProvidedForm;
use crate::literals::InvalidValueContext;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::Arc;

/// Casing applied to derived accessors.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum AccessorCase {
    #[serde(rename = "upper")]
    Upper,
    #[serde(rename = "lower")]
    Lower,
    /// Leave casing untouched.
    #[serde(rename = "none")]
    Preserve,
}

impl AccessorCase {
    pub fn apply(self, accessor: &str) -> String {
        match self {
            Self::Upper => accessor.to_uppercase(),
            Self::Lower => accessor.to_lowercase(),
            Self::Preserve => accessor.to_string(),
        }
    }
}

/// Replacement for spaces remaining in an accessor.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum AccessorSpaceReplacement {
    #[serde(rename = "_")]
    Underscore,
    #[serde(rename = "-")]
    Hyphen,
    #[serde(rename = "")]
    Empty,
    /// Leave spaces in place.
    #[serde(rename = "none")]
    Keep,
}

impl AccessorSpaceReplacement {
    pub fn replacement(self) -> Option<&'static str> {
        match self {
            Self::Underscore => Some("_"),
            Self::Hyphen => Some("-"),
            Self::Empty => Some(""),
            Self::Keep => None,
        }
    }
}

/// Replacement for hyphens in an accessor.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum AccessorHyphenReplacement {
    #[serde(rename = "_")]
    Underscore,
    #[serde(rename = "")]
    Empty,
    /// Leave hyphens in place.
    #[serde(rename = "none")]
    Keep,
}

impl AccessorHyphenReplacement {
    pub fn replacement(self) -> Option<&'static str> {
        match self {
            Self::Underscore => Some("_"),
            Self::Empty => Some(""),
            Self::Keep => None,
        }
    }
}

/// Fully resolved accessor normalization options.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AccessorOptions {
    pub accessor_case: AccessorCase,
    pub accessor_space_replacement: AccessorSpaceReplacement,
    pub accessor_hyphen_replacement: AccessorHyphenReplacement,
}

impl AccessorOptions {
    /// Defaults for bare value input.
    pub const VALUES_DEFAULT: Self = Self {
        accessor_case: AccessorCase::Upper,
        accessor_space_replacement: AccessorSpaceReplacement::Underscore,
        accessor_hyphen_replacement: AccessorHyphenReplacement::Underscore,
    };

    /// Defaults for model input.
    ///
    /// Explicit accessors on models are taken as close to literally as
    /// possible, so casing and hyphens are left alone.
    pub const MODELS_DEFAULT: Self = Self {
        accessor_case: AccessorCase::Preserve,
        accessor_space_replacement: AccessorSpaceReplacement::Underscore,
        accessor_hyphen_replacement: AccessorHyphenReplacement::Keep,
    };

    pub fn defaults_for(form: ProvidedForm) -> Self {
        match form {
            ProvidedForm::Values => Self::VALUES_DEFAULT,
            ProvidedForm::Models => Self::MODELS_DEFAULT,
        }
    }
}

/// Builds the message of an invalid value error from the expected and
/// received values.
pub type InvalidValueMessage = Arc<dyn Fn(&InvalidValueContext<'_>) -> String + Send + Sync>;

/// Caller-supplied options for building a literal set.
///
/// Every field is optional; `None` means "use the default for the provided
/// form". Static options (case and replacements) deserialize from camelCase
/// keys, the message function is dynamic and never serialized.
///
/// # Example
///
/// ```rust
/// use enumerated_literals::core::{AccessorCase, EnumeratedLiteralsOptions};
///
/// let opts = EnumeratedLiteralsOptions::new()
///     .with_accessor_case(AccessorCase::Lower)
///     .with_invalid_value_error_message(|ctx| {
///         format!("{} is not a fruit", ctx.received[0])
///     });
///
/// let parsed: EnumeratedLiteralsOptions =
///     serde_json::from_str(r#"{ "accessorCase": "lower" }"#).unwrap();
/// assert_eq!(parsed.accessor_case, opts.accessor_case);
/// ```
#[derive(Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EnumeratedLiteralsOptions {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub accessor_case: Option<AccessorCase>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub accessor_space_replacement: Option<AccessorSpaceReplacement>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub accessor_hyphen_replacement: Option<AccessorHyphenReplacement>,
    #[serde(skip)]
    pub invalid_value_error_message: Option<InvalidValueMessage>,
}

impl EnumeratedLiteralsOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_accessor_case(mut self, case: AccessorCase) -> Self {
        self.accessor_case = Some(case);
        self
    }

    pub fn with_accessor_space_replacement(mut self, replacement: AccessorSpaceReplacement) -> Self {
        self.accessor_space_replacement = Some(replacement);
        self
    }

    pub fn with_accessor_hyphen_replacement(
        mut self,
        replacement: AccessorHyphenReplacement,
    ) -> Self {
        self.accessor_hyphen_replacement = Some(replacement);
        self
    }

    pub fn with_invalid_value_error_message<F>(mut self, message: F) -> Self
    where
        F: Fn(&InvalidValueContext<'_>) -> String + Send + Sync + 'static,
    {
        self.invalid_value_error_message = Some(Arc::new(message));
        self
    }

    /// Merge the supplied options over the defaults for `form`.
    pub fn resolve(&self, form: ProvidedForm) -> AccessorOptions {
        let defaults = AccessorOptions::defaults_for(form);
        AccessorOptions {
            accessor_case: self.accessor_case.unwrap_or(defaults.accessor_case),
            accessor_space_replacement: self
                .accessor_space_replacement
                .unwrap_or(defaults.accessor_space_replacement),
            accessor_hyphen_replacement: self
                .accessor_hyphen_replacement
                .unwrap_or(defaults.accessor_hyphen_replacement),
        }
    }

    /// Only the static options, without the message function.
    pub fn static_options(&self) -> Self {
        Self {
            accessor_case: self.accessor_case,
            accessor_space_replacement: self.accessor_space_replacement,
            accessor_hyphen_replacement: self.accessor_hyphen_replacement,
            invalid_value_error_message: None,
        }
    }

    /// Layer `overrides` on top of `self`; supplied fields in `overrides` win.
    pub fn merged_with(self, overrides: EnumeratedLiteralsOptions) -> Self {
        Self {
            accessor_case: overrides.accessor_case.or(self.accessor_case),
            accessor_space_replacement: overrides
                .accessor_space_replacement
                .or(self.accessor_space_replacement),
            accessor_hyphen_replacement: overrides
                .accessor_hyphen_replacement
                .or(self.accessor_hyphen_replacement),
            invalid_value_error_message: overrides
                .invalid_value_error_message
                .or(self.invalid_value_error_message),
        }
    }
}

impl fmt::Debug for EnumeratedLiteralsOptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EnumeratedLiteralsOptions")
            .field("accessor_case", &self.accessor_case)
            .field("accessor_space_replacement", &self.accessor_space_replacement)
            .field("accessor_hyphen_replacement", &self.accessor_hyphen_replacement)
            .field(
                "invalid_value_error_message",
                &self.invalid_value_error_message.as_ref().map(|_| "<fn>"),
            )
            .finish()
    }
}
