//! Operation lists accepted by the controller.
//!
//! Both package configuration and environment updates arrive as ordered lists
//! of `change`/`remove` operations. The wire shapes are:
//!
//! ```text
//! { "op": "change" | "remove", "field": "<name>", "value": <any> }
//! { "op": "change" | "remove", "variable": "<NAME>", "value": "<string>" }
//! ```
//!
//! Parsing is strict about `op`: anything other than `change` or `remove` is
//! rejected with [`OperationError::UnknownOp`] before any operation in the list
//! is applied. Missing `field`/`variable` keys are accepted here and treated as
//! no-ops when applied.

use std::fmt;
use std::str::FromStr;

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;

/// Errors raised while parsing an operation list.
#[derive(Debug, Error)]
pub enum OperationError {
  /// The `op` key named something other than `change` or `remove`.
  #[error("operation {index}: unknown op '{op}' (expected 'change' or 'remove')")]
  UnknownOp { index: usize, op: String },

  /// An operation did not have the expected shape.
  #[error("operation {index}: {source}")]
  Malformed {
    index: usize,
    #[source]
    source: serde_json::Error,
  },

  /// The input was not a JSON array.
  #[error("operations must be a JSON array, got {found}")]
  NotAList { found: &'static str },

  /// The input was not valid JSON.
  #[error("invalid operations JSON: {0}")]
  Json(#[from] serde_json::Error),
}

/// The kind of mutation an operation performs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Op {
  Change,
  Remove,
}

impl Op {
  pub fn as_str(&self) -> &'static str {
    match self {
      Op::Change => "change",
      Op::Remove => "remove",
    }
  }
}

impl fmt::Display for Op {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "{}", self.as_str())
  }
}

/// Error returned when a string does not name an [`Op`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown op '{0}'")]
pub struct UnknownOp(pub String);

impl FromStr for Op {
  type Err = UnknownOp;

  fn from_str(s: &str) -> Result<Self, Self::Err> {
    match s {
      "change" => Ok(Op::Change),
      "remove" => Ok(Op::Remove),
      other => Err(UnknownOp(other.to_string())),
    }
  }
}

/// A single change/remove against a package descriptor field.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PackageOperation {
  pub op: Op,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub field: Option<String>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub value: Option<Value>,
}

impl PackageOperation {
  pub fn change(field: impl Into<String>, value: impl Into<Value>) -> Self {
    Self {
      op: Op::Change,
      field: Some(field.into()),
      value: Some(value.into()),
    }
  }

  pub fn remove(field: impl Into<String>) -> Self {
    Self {
      op: Op::Remove,
      field: Some(field.into()),
      value: None,
    }
  }
}

/// A single change/remove against an environment variable.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EnvOperation {
  pub op: Op,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub variable: Option<String>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub value: Option<String>,
}

impl EnvOperation {
  pub fn change(variable: impl Into<String>, value: impl Into<String>) -> Self {
    Self {
      op: Op::Change,
      variable: Some(variable.into()),
      value: Some(value.into()),
    }
  }

  pub fn remove(variable: impl Into<String>) -> Self {
    Self {
      op: Op::Remove,
      variable: Some(variable.into()),
      value: None,
    }
  }
}

/// Parse a JSON array of package operations.
pub fn parse_package_operations(value: &Value) -> Result<Vec<PackageOperation>, OperationError> {
  parse_list(value)
}

/// Parse a JSON array of environment operations.
pub fn parse_env_operations(value: &Value) -> Result<Vec<EnvOperation>, OperationError> {
  parse_list(value)
}

/// Parse a JSON document of package operations from text.
pub fn package_operations_from_str(text: &str) -> Result<Vec<PackageOperation>, OperationError> {
  let value: Value = serde_json::from_str(text)?;
  parse_package_operations(&value)
}

/// Parse a JSON document of environment operations from text.
pub fn env_operations_from_str(text: &str) -> Result<Vec<EnvOperation>, OperationError> {
  let value: Value = serde_json::from_str(text)?;
  parse_env_operations(&value)
}

fn parse_list<T: DeserializeOwned>(value: &Value) -> Result<Vec<T>, OperationError> {
  let items = value.as_array().ok_or(OperationError::NotAList {
    found: json_kind(value),
  })?;

  items
    .iter()
    .enumerate()
    .map(|(index, item)| {
      // Check `op` first so an unknown verb is reported by name instead of as a serde variant error
      if let Some(op) = item.get("op").and_then(Value::as_str) {
        op.parse::<Op>().map_err(|UnknownOp(op)| OperationError::UnknownOp { index, op })?;
      }
      T::deserialize(item).map_err(|source| OperationError::Malformed { index, source })
    })
    .collect()
}

/// Short name for the kind of a JSON value, used in error messages.
pub(crate) fn json_kind(value: &Value) -> &'static str {
  match value {
    Value::Null => "null",
    Value::Bool(_) => "boolean",
    Value::Number(_) => "number",
    Value::String(_) => "string",
    Value::Array(_) => "array",
    Value::Object(_) => "object",
  }
}
