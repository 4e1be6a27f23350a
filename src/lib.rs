//! Enumerated Literals: type-safe sets of string literals
//!
//! Given a finite list of string values, or models wrapping a value plus
//! arbitrary attributes, this crate builds a single immutable set that
//! exposes each value through a derived, uniquely named accessor and offers
//! runtime operations for validation, lookup, subsetting and formatting.
//!
//! # Core Concepts
//!
//! - **Literals**: bare values or [`LiteralModel`]s, never a mix of both
//! - **Accessors**: names derived from each value (or an explicit hint) under
//!   configurable casing and whitespace/hyphen replacement, guaranteed to be
//!   collision-free
//! - **Sets**: [`EnumeratedLiterals`], immutable once built; `pick` and `omit`
//!   return new sets
//!
//! # Example
//!
//! ```rust
//! use enumerated_literals::core::{EnumeratedLiteralsOptions, LiteralModel};
//! use enumerated_literals::literals::EnumeratedLiterals;
//!
//! let fruits = EnumeratedLiterals::new(
//!     [
//!         LiteralModel::new("apple").with_attribute("color", "red"),
//!         LiteralModel::new("blue berry").with_attribute("color", "blue"),
//!     ],
//!     EnumeratedLiteralsOptions::new(),
//! )
//! .unwrap();
//!
//! assert_eq!(fruits.accessor("blue_berry"), Some("blue berry"));
//! assert!(fruits.contains("apple"));
//!
//! let err = fruits.parse("cucumber", None).unwrap_err();
//! assert_eq!(
//!     err.to_string(),
//!     "The value 'cucumber' is invalid, it must be one of 'apple' or 'blue berry'."
//! );
//!
//! let apples = fruits.pick(&["apple"], EnumeratedLiteralsOptions::new()).unwrap();
//! assert_eq!(apples.values(), ["apple"]);
//! ```

pub mod accessors;
pub mod builder;
pub mod core;
pub mod formatters;
pub mod literals;

// Re-export commonly used types
pub use builder::{build, BuildError, BuildErrorKind};
pub use self::core::{
    AccessorCase, AccessorHyphenReplacement, AccessorSpaceReplacement, EnumeratedLiteralsOptions,
    Literal, LiteralModel, ProvidedForm,
};
pub use formatters::{humanize_list, HumanizeListOptions};
pub use literals::{
    EnumeratedLiterals, GetModelSafeOptions, InvalidLiteralValueError, LiteralsError,
};
