//! Accessor normalization.
//!
//! Turns a raw accessor candidate into its canonical form. The steps run in
//! a fixed order: trim, validate, collapse runs of spaces, case, hyphen
//! replacement, space replacement.

use crate::builder::BuildError;
use crate::core::AccessorOptions;

/// Check a candidate against the accessor syntax rule.
///
/// The candidate must be non-empty and contain only ASCII alphanumeric
/// characters, hyphens, underscores and whitespace.
pub fn validate_accessor(candidate: &str) -> Result<&str, BuildError> {
    if candidate.is_empty() {
        return Err(BuildError::EmptyAccessor {
            accessor: candidate.to_string(),
        });
    }
    let allowed =
        |c: char| c.is_ascii_alphanumeric() || c == '-' || c == '_' || c.is_whitespace();
    if !candidate.chars().all(allowed) {
        return Err(BuildError::InvalidAccessorCharacters {
            accessor: candidate.to_string(),
        });
    }
    Ok(candidate)
}

/// Normalize a raw accessor candidate under the resolved options.
///
/// # Example
///
/// ```rust
/// use enumerated_literals::accessors::normalize;
/// use enumerated_literals::core::AccessorOptions;
///
/// let accessor = normalize("  ba n   ana ", &AccessorOptions::VALUES_DEFAULT).unwrap();
/// assert_eq!(accessor, "BA_N_ANA");
///
/// let accessor = normalize("blue-berry", &AccessorOptions::MODELS_DEFAULT).unwrap();
/// assert_eq!(accessor, "blue-berry");
///
/// assert!(normalize("foo&bar", &AccessorOptions::VALUES_DEFAULT).is_err());
/// ```
pub fn normalize(raw: &str, options: &AccessorOptions) -> Result<String, BuildError> {
    let mut accessor = validate_accessor(raw.trim())?.to_string();

    // A run may be longer than two, so keep halving until none remain.
    while accessor.contains("  ") {
        accessor = accessor.replace("  ", " ");
    }

    accessor = options.accessor_case.apply(&accessor);

    if let Some(replacement) = options.accessor_hyphen_replacement.replacement() {
        accessor = accessor.replace('-', replacement);
    }
    if let Some(replacement) = options.accessor_space_replacement.replacement() {
        accessor = accessor.replace(' ', replacement);
    }

    Ok(accessor)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{AccessorCase, AccessorHyphenReplacement, AccessorSpaceReplacement};

    fn options(
        case: AccessorCase,
        space: AccessorSpaceReplacement,
        hyphen: AccessorHyphenReplacement,
    ) -> AccessorOptions {
        AccessorOptions {
            accessor_case: case,
            accessor_space_replacement: space,
            accessor_hyphen_replacement: hyphen,
        }
    }

    #[test]
    fn value_defaults_uppercase_and_replace() {
        let opts = AccessorOptions::VALUES_DEFAULT;

        assert_eq!(normalize("apple", &opts).unwrap(), "APPLE");
        assert_eq!(normalize("foo bar", &opts).unwrap(), "FOO_BAR");
        assert_eq!(normalize("foo-bar", &opts).unwrap(), "FOO_BAR");
    }

    #[test]
    fn model_defaults_preserve_case_and_hyphens() {
        let opts = AccessorOptions::MODELS_DEFAULT;

        assert_eq!(normalize("apple", &opts).unwrap(), "apple");
        assert_eq!(normalize("AP-PLE", &opts).unwrap(), "AP-PLE");
        assert_eq!(normalize("BLUE BERRY", &opts).unwrap(), "BLUE_BERRY");
    }

    #[test]
    fn interior_whitespace_collapses() {
        let opts = AccessorOptions::MODELS_DEFAULT;

        assert_eq!(normalize("ap  ple", &opts).unwrap(), "ap_ple");
        assert_eq!(normalize("ba n   ana", &opts).unwrap(), "ba_n_ana");
        assert_eq!(normalize("blu   eber r  y", &opts).unwrap(), "blu_eber_r_y");
        assert_eq!(normalize("ora  nge", &opts).unwrap(), "ora_nge");
    }

    #[test]
    fn surrounding_whitespace_is_trimmed() {
        let opts = AccessorOptions::VALUES_DEFAULT;

        assert_eq!(normalize(" foo bar ", &opts).unwrap(), "FOO_BAR");
    }

    #[test]
    fn hyphens_are_replaced_before_spaces() {
        let opts = options(
            AccessorCase::Preserve,
            AccessorSpaceReplacement::Hyphen,
            AccessorHyphenReplacement::Underscore,
        );

        assert_eq!(normalize("a-b c", &opts).unwrap(), "a_b-c");
    }

    #[test]
    fn replacements_can_be_empty_or_disabled() {
        let opts = options(
            AccessorCase::Lower,
            AccessorSpaceReplacement::Empty,
            AccessorHyphenReplacement::Keep,
        );

        assert_eq!(normalize("Blue Berry-Pie", &opts).unwrap(), "blueberry-pie");

        let opts = options(
            AccessorCase::Preserve,
            AccessorSpaceReplacement::Keep,
            AccessorHyphenReplacement::Empty,
        );

        assert_eq!(normalize("Blue Berry-Pie", &opts).unwrap(), "Blue BerryPie");
    }

    #[test]
    fn empty_candidate_is_rejected() {
        let result = normalize("   ", &AccessorOptions::VALUES_DEFAULT);

        assert_eq!(
            result,
            Err(BuildError::EmptyAccessor {
                accessor: String::new()
            })
        );
    }

    #[test]
    fn disallowed_characters_are_rejected() {
        let result = normalize("foo&bar", &AccessorOptions::VALUES_DEFAULT);

        assert_eq!(
            result,
            Err(BuildError::InvalidAccessorCharacters {
                accessor: "foo&bar".to_string()
            })
        );
    }

    #[test]
    fn leading_digits_are_allowed() {
        assert_eq!(
            normalize("9foo", &AccessorOptions::VALUES_DEFAULT).unwrap(),
            "9FOO"
        );
    }
}
