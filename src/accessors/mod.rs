//! Accessor derivation.
//!
//! Every literal in a set is reachable through a uniquely named accessor.
//! Accessors are derived from the literal value, or from an explicit accessor
//! on a model, and normalized under the resolved [`AccessorOptions`].
//!
//! [`AccessorOptions`]: crate::core::AccessorOptions

mod derive;
mod normalize;

pub use derive::{derive_accessors, AccessorDerivation, Accessors, DerivationSource};
pub use normalize::{normalize, validate_accessor};
