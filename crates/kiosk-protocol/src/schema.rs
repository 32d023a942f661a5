//! Argument validation against a declared `ParameterSchema`.
//!
//! The contract is strict: every declared parameter must be present with
//! a value of exactly the declared JSON type. No coercion is attempted
//! (`"3"` is not a number). Keys the schema does not declare are ignored.

use std::collections::BTreeMap;
use std::fmt;

use serde_json::{Map, Value};
use thiserror::Error;

use kiosk_types::{ParamType, ParameterSchema};

/// Why a parameter was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureReason {
    /// The key is absent from the raw input.
    Missing,
    /// The key is present but holds a value of another type.
    TypeMismatch,
}

impl fmt::Display for FailureReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Missing => f.write_str("missing"),
            Self::TypeMismatch => f.write_str("type-mismatch"),
        }
    }
}

/// A single rejected parameter.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid argument '{parameter}': {reason} (expected {expected})")]
pub struct ValidationFailure {
    /// Name of the offending parameter.
    pub parameter: String,
    /// What was wrong with it.
    pub reason: FailureReason,
    /// The declared type.
    pub expected: ParamType,
}

impl ValidationFailure {
    fn new(parameter: &str, reason: FailureReason, expected: ParamType) -> Self {
        Self {
            parameter: parameter.to_string(),
            reason,
            expected,
        }
    }
}

/// A validated, typed argument value.
#[derive(Debug, Clone, PartialEq)]
pub enum ArgValue {
    /// String value.
    String(String),
    /// Numeric value.
    Number(f64),
    /// Integral numeric value.
    Integer(i64),
    /// Boolean value.
    Boolean(bool),
}

impl ArgValue {
    /// Converts a raw JSON value when it matches `expected` exactly.
    fn from_json(value: &Value, expected: ParamType) -> Option<Self> {
        match (expected, value) {
            (ParamType::String, Value::String(s)) => Some(Self::String(s.clone())),
            (ParamType::Number, Value::Number(n)) => n.as_f64().map(Self::Number),
            (ParamType::Integer, Value::Number(n)) => n.as_i64().map(Self::Integer),
            (ParamType::Boolean, Value::Bool(b)) => Some(Self::Boolean(*b)),
            _ => None,
        }
    }
}

/// Arguments that satisfied the schema they were validated against.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ValidatedArguments {
    values: BTreeMap<String, ArgValue>,
}

impl ValidatedArguments {
    /// Returns the typed value for `name`, if declared.
    pub fn get(&self, name: &str) -> Option<&ArgValue> {
        self.values.get(name)
    }

    /// Returns a string parameter.
    pub fn string(&self, name: &str) -> Result<&str, ValidationFailure> {
        match self.values.get(name) {
            Some(ArgValue::String(s)) => Ok(s),
            other => Err(Self::accessor_failure(name, other, ParamType::String)),
        }
    }

    /// Returns a number parameter.
    pub fn number(&self, name: &str) -> Result<f64, ValidationFailure> {
        match self.values.get(name) {
            Some(ArgValue::Number(n)) => Ok(*n),
            other => Err(Self::accessor_failure(name, other, ParamType::Number)),
        }
    }

    /// Returns an integer parameter.
    pub fn integer(&self, name: &str) -> Result<i64, ValidationFailure> {
        match self.values.get(name) {
            Some(ArgValue::Integer(n)) => Ok(*n),
            other => Err(Self::accessor_failure(name, other, ParamType::Integer)),
        }
    }

    /// Returns a boolean parameter.
    pub fn boolean(&self, name: &str) -> Result<bool, ValidationFailure> {
        match self.values.get(name) {
            Some(ArgValue::Boolean(b)) => Ok(*b),
            other => Err(Self::accessor_failure(name, other, ParamType::Boolean)),
        }
    }

    /// Number of validated parameters.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Whether no parameters were validated.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    fn accessor_failure(
        name: &str,
        found: Option<&ArgValue>,
        expected: ParamType,
    ) -> ValidationFailure {
        let reason = if found.is_some() {
            FailureReason::TypeMismatch
        } else {
            FailureReason::Missing
        };
        ValidationFailure::new(name, reason, expected)
    }
}

/// Validates `raw` against `schema`.
///
/// A non-object `raw` (including `null` for an omitted `arguments` field)
/// is treated as an empty object, so it passes only a parameterless schema.
/// Parameters are checked in declaration order and the first failure wins.
pub fn validate(
    schema: &ParameterSchema,
    raw: &Value,
) -> Result<ValidatedArguments, ValidationFailure> {
    let empty = Map::new();
    let input = raw.as_object().unwrap_or(&empty);

    let mut values = BTreeMap::new();
    for spec in schema.iter() {
        let value = input.get(&spec.name).ok_or_else(|| {
            ValidationFailure::new(&spec.name, FailureReason::Missing, spec.param_type)
        })?;
        let typed = ArgValue::from_json(value, spec.param_type).ok_or_else(|| {
            ValidationFailure::new(&spec.name, FailureReason::TypeMismatch, spec.param_type)
        })?;
        values.insert(spec.name.clone(), typed);
    }

    Ok(ValidatedArguments { values })
}

/// Builds a JSON Schema `inputSchema` object from a parameter schema.
pub fn input_schema(schema: &ParameterSchema) -> Value {
    let mut properties = Map::new();
    let mut required = Vec::new();

    for spec in schema.iter() {
        let mut prop = Map::new();
        prop.insert(
            "type".to_string(),
            Value::String(spec.param_type.as_str().to_string()),
        );
        prop.insert(
            "description".to_string(),
            Value::String(spec.description.clone()),
        );
        properties.insert(spec.name.clone(), Value::Object(prop));
        required.push(Value::String(spec.name.clone()));
    }

    let mut out = Map::new();
    out.insert("type".to_string(), Value::String("object".to_string()));
    out.insert("properties".to_string(), Value::Object(properties));
    if !required.is_empty() {
        out.insert("required".to_string(), Value::Array(required));
    }

    Value::Object(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn calc_schema() -> ParameterSchema {
        ParameterSchema::new()
            .param("num1", ParamType::Number, "first")
            .param("num2", ParamType::Number, "second")
            .param("operator", ParamType::String, "op")
    }

    #[test]
    fn accepts_well_typed_input() {
        let args = validate(
            &calc_schema(),
            &json!({"num1": 6, "num2": 3.5, "operator": "/"}),
        )
        .expect("valid");
        assert_eq!(args.number("num1").expect("num1"), 6.0);
        assert_eq!(args.number("num2").expect("num2"), 3.5);
        assert_eq!(args.string("operator").expect("op"), "/");
    }

    #[test]
    fn rejects_missing_parameter_by_name() {
        let err = validate(&calc_schema(), &json!({"num1": 1, "operator": "+"}))
            .expect_err("num2 missing");
        assert_eq!(err.parameter, "num2");
        assert_eq!(err.reason, FailureReason::Missing);
        assert_eq!(err.expected, ParamType::Number);
    }

    #[test]
    fn numeric_string_is_not_a_number() {
        let err = validate(
            &calc_schema(),
            &json!({"num1": "6", "num2": 3, "operator": "+"}),
        )
        .expect_err("no coercion");
        assert_eq!(err.parameter, "num1");
        assert_eq!(err.reason, FailureReason::TypeMismatch);
    }

    #[test]
    fn extra_keys_are_ignored() {
        let args = validate(
            &calc_schema(),
            &json!({"num1": 1, "num2": 2, "operator": "+", "verbose": true}),
        )
        .expect("superset accepted");
        assert_eq!(args.len(), 3);
        assert!(args.get("verbose").is_none());
    }

    #[test]
    fn null_input_passes_empty_schema() {
        let args = validate(&ParameterSchema::new(), &Value::Null).expect("ok");
        assert!(args.is_empty());
    }

    #[test]
    fn non_object_input_reports_first_parameter_missing() {
        let err = validate(&calc_schema(), &json!(42)).expect_err("not an object");
        assert_eq!(err.parameter, "num1");
        assert_eq!(err.reason, FailureReason::Missing);
    }

    #[test]
    fn integer_rejects_fraction() {
        let schema = ParameterSchema::new().param("n", ParamType::Integer, "count");
        assert_eq!(
            validate(&schema, &json!({"n": 4})).expect("int").integer("n").expect("n"),
            4
        );
        let err = validate(&schema, &json!({"n": 4.5})).expect_err("fraction");
        assert_eq!(err.reason, FailureReason::TypeMismatch);
    }

    #[test]
    fn boolean_rejects_string() {
        let schema = ParameterSchema::new().param("flag", ParamType::Boolean, "f");
        assert!(validate(&schema, &json!({"flag": "true"})).is_err());
        assert!(validate(&schema, &json!({"flag": false}))
            .expect("bool")
            .boolean("flag")
            .is_ok());
    }

    #[test]
    fn accessor_with_wrong_type_reports_mismatch() {
        let args = validate(&calc_schema(), &json!({"num1": 1, "num2": 2, "operator": "+"}))
            .expect("valid");
        let err = args.string("num1").expect_err("num1 is a number");
        assert_eq!(err.reason, FailureReason::TypeMismatch);
        let err = args.string("nope").expect_err("undeclared");
        assert_eq!(err.reason, FailureReason::Missing);
    }

    #[test]
    fn failure_message_names_parameter_and_type() {
        let err = validate(&calc_schema(), &json!({})).expect_err("empty");
        let msg = err.to_string();
        assert!(msg.contains("num1"));
        assert!(msg.contains("missing"));
        assert!(msg.contains("number"));
    }

    #[test]
    fn input_schema_lists_every_parameter_as_required() {
        let schema = input_schema(&calc_schema());
        assert_eq!(schema["type"], "object");
        assert_eq!(schema["properties"]["num1"]["type"], "number");
        assert_eq!(schema["properties"]["operator"]["type"], "string");
        let req = schema["required"].as_array().expect("arr");
        assert_eq!(req.len(), 3);
        assert_eq!(req[0], "num1");
    }

    #[test]
    fn input_schema_empty_has_no_required() {
        let schema = input_schema(&ParameterSchema::new());
        assert!(schema["properties"].as_object().expect("obj").is_empty());
        assert!(schema.get("required").is_none());
    }
}
