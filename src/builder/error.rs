//! Build errors for literal set construction.

use thiserror::Error;

/// Errors that can occur when building a literal set.
///
/// Any of these aborts construction; no partially built set is returned.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum BuildError {
    #[error(
        "The 'enumeratedLiterals' method must be called with a non-empty array as its first \
         argument."
    )]
    EmptyLiterals,

    #[error(
        "Encountered a set of literals that contains a combination of strings and models. \
         The literals must either contain all strings, or all models."
    )]
    MixedLiterals,

    #[error("Invalid accessor: '{accessor}': The accessor must not be an empty string.")]
    EmptyAccessor { accessor: String },

    #[error(
        "Invalid accessor: '{accessor}': The accessor is only allowed to contain alphanumeric \
         characters, hyphens, underscores, and spaces."
    )]
    InvalidAccessorCharacters { accessor: String },

    #[error("Encountered duplicate literal values, '{value}'. The literal values must be unique!")]
    DuplicateValue { value: String },

    #[error(
        "Encountered two different values, '{value}' and '{existing}', that map to the same \
         accessor '{accessor}'!  Values must map to unique accessors.  Either define the \
         accessors explicitly for each value, such that they are different, or change the \
         values themselves."
    )]
    ValueAccessorCollision {
        existing: String,
        value: String,
        accessor: String,
    },

    #[error("Encountered two identical accessor values, '{accessor}'. Accessors must be unique!")]
    DuplicateAccessor { accessor: String },

    #[error(
        "Encountered two different accessor values, '{existing}' and '{provided}', that result \
         in the same accessor, '{accessor}'! The accessors must result in unique values.  Either \
         change the accessor values or configure the accessor options such that the two \
         provided accessors do not map to the same value."
    )]
    ExplicitAccessorCollision {
        existing: String,
        provided: String,
        accessor: String,
    },

    #[error(
        "Encountered a value, '{value}', that maps to the same accessor ('{accessor}') as the \
         explicitly provided accessor, '{explicit}'. The provided accessors and/or values must \
         all map to unique accessor values. Either provide an explicit accessor value for the \
         value '{value}', change the accessor value '{explicit}' or configure the accessor \
         options such that the two do not map to the same accessor."
    )]
    ValueExplicitAccessorCollision {
        value: String,
        explicit: String,
        accessor: String,
    },
}

/// Broad class of a [`BuildError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BuildErrorKind {
    /// The input literals have an invalid shape.
    Configuration,
    /// An accessor candidate is empty or contains disallowed characters.
    AccessorSyntax,
    /// Two literals resolve to the same accessor.
    AccessorCollision,
    /// Two literals carry the same value.
    DuplicateValue,
}

impl BuildError {
    pub fn kind(&self) -> BuildErrorKind {
        match self {
            Self::EmptyLiterals | Self::MixedLiterals => BuildErrorKind::Configuration,
            Self::EmptyAccessor { .. } | Self::InvalidAccessorCharacters { .. } => {
                BuildErrorKind::AccessorSyntax
            }
            Self::DuplicateValue { .. } => BuildErrorKind::DuplicateValue,
            Self::ValueAccessorCollision { .. }
            | Self::DuplicateAccessor { .. }
            | Self::ExplicitAccessorCollision { .. }
            | Self::ValueExplicitAccessorCollision { .. } => BuildErrorKind::AccessorCollision,
        }
    }
}
