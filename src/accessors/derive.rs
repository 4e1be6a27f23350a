//! Accessor derivation and collision detection.

use super::normalize::normalize;
use crate::builder::BuildError;
use crate::core::{AccessorOptions, Literal};
use serde::Serialize;
use tracing::trace;

/// Where an accessor was derived from.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum DerivationSource {
    /// Derived from the literal value itself.
    Value,
    /// Taken from an explicit accessor on a model.
    Explicit,
}

/// Record of how one literal's accessor was derived.
///
/// Only lives for the duration of a build.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AccessorDerivation {
    /// The text handed to the normalizer.
    pub raw: String,
    pub source: DerivationSource,
    pub accessor: String,
    /// The literal value the accessor resolves to.
    pub value: String,
}

impl AccessorDerivation {
    fn of(literal: &Literal, options: &AccessorOptions) -> Result<Self, BuildError> {
        let value = literal.value().to_string();
        let (raw, source) = match literal {
            Literal::Model(model) => match model.accessor() {
                Some(accessor) => (accessor.to_string(), DerivationSource::Explicit),
                None => (value.clone(), DerivationSource::Value),
            },
            Literal::Value(_) => (value.clone(), DerivationSource::Value),
        };
        let accessor = normalize(&raw, options)?;
        Ok(Self {
            raw,
            source,
            accessor,
            value,
        })
    }

    /// The error raised when `self` (registered later) lands on the same
    /// accessor as `existing`.
    fn collision_with(&self, existing: &AccessorDerivation) -> BuildError {
        use DerivationSource::{Explicit, Value};

        let accessor = self.accessor.clone();
        match (existing.source, self.source) {
            (Value, Value) => BuildError::ValueAccessorCollision {
                existing: existing.raw.clone(),
                value: self.raw.clone(),
                accessor,
            },
            (Explicit, Explicit) if existing.raw == self.raw => BuildError::DuplicateAccessor {
                accessor: existing.raw.clone(),
            },
            (Explicit, Explicit) => BuildError::ExplicitAccessorCollision {
                existing: existing.raw.clone(),
                provided: self.raw.clone(),
                accessor,
            },
            (Explicit, Value) => BuildError::ValueExplicitAccessorCollision {
                value: self.raw.clone(),
                explicit: existing.raw.clone(),
                accessor,
            },
            (Value, Explicit) => BuildError::ValueExplicitAccessorCollision {
                value: existing.raw.clone(),
                explicit: self.raw.clone(),
                accessor,
            },
        }
    }
}

/// Ordered mapping of accessor name to literal value.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct Accessors {
    entries: Vec<(String, String)>,
}

impl Accessors {
    /// The value bound to `accessor`, if any.
    pub fn get(&self, accessor: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(name, _)| name == accessor)
            .map(|(_, value)| value.as_str())
    }

    /// The accessor bound to `value`, if any.
    pub fn accessor_of(&self, value: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(_, v)| v == value)
            .map(|(name, _)| name.as_str())
    }

    /// Accessor names in input order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(name, _)| name.as_str())
    }

    /// `(accessor, value)` pairs in input order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries
            .iter()
            .map(|(name, value)| (name.as_str(), value.as_str()))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Derive a conflict-free accessor mapping for `literals`.
///
/// Literals are processed in order; when two collide, the one registered
/// first is reported as the existing one. Fails on the first duplicate value,
/// invalid accessor or accessor collision.
///
/// # Example
///
/// ```rust
/// use enumerated_literals::accessors::derive_accessors;
/// use enumerated_literals::core::{AccessorOptions, Literal};
///
/// let literals: Vec<Literal> = vec!["apple".into(), "blue berry".into()];
/// let accessors = derive_accessors(&literals, &AccessorOptions::VALUES_DEFAULT).unwrap();
///
/// assert_eq!(accessors.get("APPLE"), Some("apple"));
/// assert_eq!(accessors.get("BLUE_BERRY"), Some("blue berry"));
///
/// let colliding: Vec<Literal> = vec!["foo bar".into(), "foo-bar".into()];
/// assert!(derive_accessors(&colliding, &AccessorOptions::VALUES_DEFAULT).is_err());
/// ```
pub fn derive_accessors(
    literals: &[Literal],
    options: &AccessorOptions,
) -> Result<Accessors, BuildError> {
    let mut derivations: Vec<AccessorDerivation> = Vec::with_capacity(literals.len());

    for literal in literals {
        let value = literal.value();
        if derivations.iter().any(|d| d.value == value) {
            return Err(BuildError::DuplicateValue {
                value: value.to_string(),
            });
        }

        let derivation = AccessorDerivation::of(literal, options)?;
        if let Some(existing) = derivations
            .iter()
            .find(|d| d.accessor == derivation.accessor)
        {
            return Err(derivation.collision_with(existing));
        }

        trace!(
            raw = %derivation.raw,
            source = ?derivation.source,
            accessor = %derivation.accessor,
            "Derived accessor"
        );
        derivations.push(derivation);
    }

    Ok(Accessors {
        entries: derivations
            .into_iter()
            .map(|d| (d.accessor, d.value))
            .collect(),
    })
}
