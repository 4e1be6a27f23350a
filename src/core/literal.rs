//! Literal input types.
//!
//! A literal set is built from either bare string values or models that wrap
//! a value together with an optional explicit accessor and arbitrary extra
//! attributes. The form is decided once, at construction time.

use crate::builder::BuildError;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// A value-bearing record with an optional explicit accessor.
///
/// Models are immutable once constructed. Extra attributes are stored as
/// JSON values so that arbitrary metadata can ride along with each literal.
///
/// # Example
///
/// ```rust
/// use enumerated_literals::core::LiteralModel;
/// use serde_json::json;
///
/// let model = LiteralModel::new("apple")
///     .with_accessor("APPLE")
///     .with_attribute("color", "red");
///
/// assert_eq!(model.value(), "apple");
/// assert_eq!(model.accessor(), Some("APPLE"));
/// assert_eq!(model.attribute("color"), Some(json!("red")));
/// assert_eq!(model.attribute("value"), Some(json!("apple")));
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct LiteralModel {
    value: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    accessor: Option<String>,
    #[serde(flatten)]
    attributes: Map<String, Value>,
}

impl LiteralModel {
    /// Create a model holding only a value.
    pub fn new(value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            accessor: None,
            attributes: Map::new(),
        }
    }

    /// Attach an explicit accessor hint.
    pub fn with_accessor(mut self, accessor: impl Into<String>) -> Self {
        self.accessor = Some(accessor.into());
        self
    }

    /// Attach an extra attribute.
    ///
    /// The names `value` and `accessor` are reserved and ignored here.
    pub fn with_attribute(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        let name = name.into();
        if name != "value" && name != "accessor" {
            self.attributes.insert(name, value.into());
        }
        self
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    pub fn accessor(&self) -> Option<&str> {
        self.accessor.as_deref()
    }

    /// Extra attributes, excluding `value` and `accessor`.
    pub fn attributes(&self) -> &Map<String, Value> {
        &self.attributes
    }

    /// Look up an attribute by name.
    ///
    /// `value` and `accessor` resolve to the corresponding fields, anything
    /// else to the extra attributes. Missing attributes yield `None`.
    pub fn attribute(&self, name: &str) -> Option<Value> {
        match name {
            "value" => Some(Value::String(self.value.clone())),
            "accessor" => self.accessor.clone().map(Value::String),
            other => self.attributes.get(other).cloned(),
        }
    }
}

/// One member of the input: a bare value or a model.
///
/// Deserializes from JSON untagged: a string is a bare value, an object with
/// a `value` field is a model.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Literal {
    Value(String),
    Model(LiteralModel),
}

impl Literal {
    /// The literal value, regardless of form.
    pub fn value(&self) -> &str {
        match self {
            Self::Value(value) => value,
            Self::Model(model) => model.value(),
        }
    }

    /// Lift into a model; bare values become `{ value }`.
    pub fn into_model(self) -> LiteralModel {
        match self {
            Self::Value(value) => LiteralModel::new(value),
            Self::Model(model) => model,
        }
    }

    pub fn is_model(&self) -> bool {
        matches!(self, Self::Model(_))
    }
}

impl From<&str> for Literal {
    fn from(value: &str) -> Self {
        Self::Value(value.to_string())
    }
}

impl From<String> for Literal {
    fn from(value: String) -> Self {
        Self::Value(value)
    }
}

impl From<&String> for Literal {
    fn from(value: &String) -> Self {
        Self::Value(value.clone())
    }
}

impl From<LiteralModel> for Literal {
    fn from(model: LiteralModel) -> Self {
        Self::Model(model)
    }
}

/// Which form the input literals were provided in.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProvidedForm {
    Values,
    Models,
}

impl ProvidedForm {
    /// Classify the input, rejecting empty and mixed inputs.
    pub fn classify(literals: &[Literal]) -> Result<Self, BuildError> {
        if literals.is_empty() {
            return Err(BuildError::EmptyLiterals);
        }

        let models = literals.iter().filter(|l| l.is_model()).count();
        match models {
            0 => Ok(Self::Values),
            n if n == literals.len() => Ok(Self::Models),
            _ => Err(BuildError::MixedLiterals),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn classify_rejects_empty_input() {
        let result = ProvidedForm::classify(&[]);

        assert!(matches!(result, Err(BuildError::EmptyLiterals)));
    }

    #[test]
    fn classify_detects_values() {
        let literals: Vec<Literal> = vec!["apple".into(), "banana".into()];

        assert_eq!(ProvidedForm::classify(&literals), Ok(ProvidedForm::Values));
    }

    #[test]
    fn classify_detects_models() {
        let literals: Vec<Literal> = vec![
            LiteralModel::new("apple").into(),
            LiteralModel::new("banana").with_accessor("B").into(),
        ];

        assert_eq!(ProvidedForm::classify(&literals), Ok(ProvidedForm::Models));
    }

    #[test]
    fn classify_rejects_mixed_input() {
        let literals: Vec<Literal> = vec!["apple".into(), LiteralModel::new("banana").into()];

        assert!(matches!(
            ProvidedForm::classify(&literals),
            Err(BuildError::MixedLiterals)
        ));
    }

    #[test]
    fn bare_values_lift_to_models() {
        let model = Literal::from("apple").into_model();

        assert_eq!(model, LiteralModel::new("apple"));
        assert_eq!(model.accessor(), None);
    }

    #[test]
    fn reserved_attribute_names_are_ignored() {
        let model = LiteralModel::new("apple").with_attribute("value", "pear");

        assert_eq!(model.value(), "apple");
        assert!(model.attributes().is_empty());
    }

    #[test]
    fn literals_deserialize_untagged() {
        let literals: Vec<Literal> = serde_json::from_value(json!([
            "apple",
            { "value": "banana", "accessor": "BANANA", "color": "yellow" }
        ]))
        .unwrap();

        assert_eq!(literals[0], Literal::Value("apple".to_string()));
        match &literals[1] {
            Literal::Model(model) => {
                assert_eq!(model.value(), "banana");
                assert_eq!(model.accessor(), Some("BANANA"));
                assert_eq!(model.attribute("color"), Some(json!("yellow")));
            }
            other => panic!("Expected model, got {other:?}"),
        }
    }

    #[test]
    fn model_serializes_flat() {
        let model = LiteralModel::new("apple").with_attribute("color", "red");

        assert_eq!(
            serde_json::to_value(&model).unwrap(),
            json!({ "value": "apple", "color": "red" })
        );
    }
}
