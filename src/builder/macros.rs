//! Macros for ergonomic literal set construction.

/// Build an [`EnumeratedLiterals`](crate::literals::EnumeratedLiterals) set
/// from a list of values or models, with optional options.
///
/// Expands to a call to [`build`](crate::builder::build) and evaluates to
/// its `Result`.
///
/// # Example
///
/// ```
/// use enumerated_literals::core::{AccessorCase, EnumeratedLiteralsOptions};
/// use enumerated_literals::enumerated_literals;
///
/// let fruits = enumerated_literals!(["apple", "banana"]).unwrap();
/// assert_eq!(fruits.accessor("BANANA"), Some("banana"));
///
/// let lower = enumerated_literals!(
///     ["apple", "banana"],
///     EnumeratedLiteralsOptions::new().with_accessor_case(AccessorCase::Lower),
/// )
/// .unwrap();
/// assert_eq!(lower.accessor("banana"), Some("banana"));
/// ```
#[macro_export]
macro_rules! enumerated_literals {
    (@options) => {
        $crate::core::EnumeratedLiteralsOptions::default()
    };
    (@options $options:expr) => {
        $options
    };
    ([$($literal:expr),+ $(,)?] $(, $options:expr)? $(,)?) => {
        $crate::builder::build(
            ::std::vec![$($crate::core::Literal::from($literal)),+],
            $crate::enumerated_literals!(@options $($options)?),
        )
    };
}

#[cfg(test)]
mod tests {
    use crate::builder::BuildError;
    use crate::core::{AccessorSpaceReplacement, EnumeratedLiteralsOptions, LiteralModel};

    #[test]
    fn macro_builds_from_values() {
        let set = enumerated_literals!(["apple", "blue berry"]).unwrap();

        assert_eq!(set.accessor("APPLE"), Some("apple"));
        assert_eq!(set.accessor("BLUE_BERRY"), Some("blue berry"));
    }

    #[test]
    fn macro_accepts_options() {
        let set = enumerated_literals!(
            ["blue berry"],
            EnumeratedLiteralsOptions::new()
                .with_accessor_space_replacement(AccessorSpaceReplacement::Hyphen)
        )
        .unwrap();

        assert_eq!(set.accessor("BLUE-BERRY"), Some("blue berry"));
    }

    #[test]
    fn macro_builds_from_models() {
        let set = enumerated_literals!([
            LiteralModel::new("apple").with_accessor("Red"),
            LiteralModel::new("banana"),
        ])
        .unwrap();

        assert_eq!(set.accessor("Red"), Some("apple"));
        assert_eq!(set.accessor("banana"), Some("banana"));
    }

    #[test]
    fn macro_propagates_build_errors() {
        let result = enumerated_literals!(["apple", "apple"]);

        assert!(matches!(result, Err(BuildError::DuplicateValue { .. })));
    }
}
