//! Applying change/remove operation lists to a package descriptor.
//!
//! Operations run strictly in list order, so a later operation on the same
//! field wins. The list is applied to a working copy that replaces the
//! descriptor only once every operation has succeeded: a value of the wrong
//! type leaves the descriptor exactly as it was.
//!
//! `version` is special-cased on `change`: the value is split with
//! [`split_version`] and a `-BUILD` suffix overwrites `build`. A bare version
//! leaves `build` alone, and removing `version` never clears `build`.
//!
//! A `change` without a value (or with `null`) makes any other typed field
//! absent, the same as `remove`.

use std::path::PathBuf;

use serde_json::Value;
use thiserror::Error;
use tracing::{debug, warn};

use super::types::{Field, PackageDescriptor};
use super::version::split_version;
use crate::ops::{Op, PackageOperation, json_kind};

/// Errors that can occur while patching a descriptor.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PatchError {
  /// A `change` carried a value the field cannot hold.
  #[error("operation {index}: field '{field}' expects {expected}, got {found}")]
  InvalidValue {
    index: usize,
    field: String,
    expected: &'static str,
    found: &'static str,
  },
}

/// Apply `operations` to `descriptor` in order.
///
/// On error the descriptor is unchanged.
pub fn apply(descriptor: &mut PackageDescriptor, operations: &[PackageOperation]) -> Result<(), PatchError> {
  let mut working = descriptor.clone();
  for (index, operation) in operations.iter().enumerate() {
    apply_one(&mut working, index, operation)?;
  }
  *descriptor = working;
  Ok(())
}

fn apply_one(descriptor: &mut PackageDescriptor, index: usize, operation: &PackageOperation) -> Result<(), PatchError> {
  let Some(name) = operation.field.as_deref() else {
    warn!(index, op = %operation.op, "package operation has no field, skipping");
    return Ok(());
  };

  let field = Field::parse(name);
  if !field.is_known() {
    debug!(index, field = %field, "passing through unknown package field");
  }

  match operation.op {
    Op::Change => change(descriptor, index, &field, operation.value.as_ref())?,
    Op::Remove => remove(descriptor, &field),
  }

  debug!(index, op = %operation.op, field = %field, "applied package operation");
  Ok(())
}

fn change(
  descriptor: &mut PackageDescriptor,
  index: usize,
  field: &Field,
  value: Option<&Value>,
) -> Result<(), PatchError> {
  let invalid = |expected: &'static str| PatchError::InvalidValue {
    index,
    field: field.to_string(),
    expected,
    found: value.map_or("null or no value", json_kind),
  };

  // missing or null clears typed fields; version still needs a string
  let unset = value.is_none_or(Value::is_null);
  if unset && !matches!(field, Field::Version | Field::Other(_)) {
    remove(descriptor, field);
    return Ok(());
  }

  match field {
    Field::Version => {
      let raw = value.and_then(Value::as_str).ok_or_else(|| invalid("a string"))?;
      let split = split_version(raw);
      descriptor.version = Some(split.version);
      if let Some(build) = split.build {
        descriptor.build = Some(build);
      }
    }
    Field::Build => {
      let build = value.and_then(build_id).ok_or_else(|| invalid("a string or number"))?;
      descriptor.build = Some(build);
    }
    Field::ReleaseOnly => {
      let flag = value.and_then(Value::as_bool).ok_or_else(|| invalid("a boolean"))?;
      descriptor.release_only = Some(flag);
    }
    Field::Os => {
      let overrides = value.and_then(Value::as_object).ok_or_else(|| invalid("an object"))?;
      descriptor.os = Some(overrides.clone());
    }
    Field::Files => {
      let path = value.and_then(Value::as_str).ok_or_else(|| invalid("a path string"))?;
      descriptor.files = Some(PathBuf::from(path));
    }
    Field::Other(name) => {
      descriptor
        .extra
        .insert(name.clone(), value.cloned().unwrap_or(Value::Null));
    }
    _ => {
      let text = value.and_then(Value::as_str).ok_or_else(|| invalid("a string"))?;
      if let Some(slot) = string_slot(descriptor, field) {
        *slot = Some(text.to_string());
      }
    }
  }

  Ok(())
}

fn remove(descriptor: &mut PackageDescriptor, field: &Field) {
  match field {
    Field::ReleaseOnly => descriptor.release_only = None,
    Field::Os => descriptor.os = None,
    Field::Files => descriptor.files = None,
    Field::Other(name) => {
      descriptor.extra.remove(name);
    }
    // `version` goes through here too; `build` is deliberately left as is
    _ => {
      if let Some(slot) = string_slot(descriptor, field) {
        *slot = None;
      }
    }
  }
}

fn string_slot<'a>(descriptor: &'a mut PackageDescriptor, field: &Field) -> Option<&'a mut Option<String>> {
  match field {
    Field::Branch => Some(&mut descriptor.branch),
    Field::Owner => Some(&mut descriptor.owner),
    Field::Project => Some(&mut descriptor.project),
    Field::Version => Some(&mut descriptor.version),
    Field::Build => Some(&mut descriptor.build),
    Field::Architecture => Some(&mut descriptor.architecture),
    Field::Platform => Some(&mut descriptor.platform),
    Field::OsName => Some(&mut descriptor.os_name),
    Field::OsVersion => Some(&mut descriptor.os_version),
    Field::ReleaseOnly | Field::Os | Field::Files | Field::Other(_) => None,
  }
}

/// Build identifiers arrive as strings or as bare CI build numbers.
fn build_id(value: &Value) -> Option<String> {
  match value {
    Value::String(s) => Some(s.clone()),
    Value::Number(n) => Some(n.to_string()),
    _ => None,
  }
}
