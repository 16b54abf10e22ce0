//! Applying change/remove operation lists to an environment.

use std::collections::BTreeMap;

use serde::ser::{Serialize, SerializeMap, Serializer};
use tracing::{debug, warn};

use super::source::{Environment, is_valid_name};
use crate::consts::REMOVED_KEY;
use crate::ops::{EnvOperation, Op};

/// What an environment operation list changed.
///
/// Serializes as `{ "<NAME>": "<value>", ..., "removed": ["<NAME>", ...] }`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EnvDiff {
  /// Variables set by a `change`, with the value they ended up with.
  pub changed: BTreeMap<String, String>,
  /// Variables deleted by a `remove`, in the order they were encountered.
  pub removed: Vec<String>,
}

impl EnvDiff {
  pub fn is_empty(&self) -> bool {
    self.changed.is_empty() && self.removed.is_empty()
  }
}

impl Serialize for EnvDiff {
  fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
    let changed = self.changed.iter().filter(|(name, _)| name.as_str() != REMOVED_KEY);
    let mut map = serializer.serialize_map(None)?;
    for (name, value) in changed {
      map.serialize_entry(name, value)?;
    }
    map.serialize_entry(REMOVED_KEY, &self.removed)?;
    map.end()
  }
}

/// Apply `operations` to `env` in order and report what changed.
///
/// A variable changed and later removed in the same list appears in both
/// `changed` and `removed`. Operations without a variable name, or with a name
/// the platform cannot store, are skipped.
pub fn apply<E: Environment + ?Sized>(env: &mut E, operations: &[EnvOperation]) -> EnvDiff {
  let mut diff = EnvDiff::default();

  for (index, operation) in operations.iter().enumerate() {
    let Some(name) = operation.variable.as_deref() else {
      warn!(index, op = %operation.op, "environment operation has no variable, skipping");
      continue;
    };
    if !is_valid_name(name) {
      warn!(index, variable = ?name, "invalid environment variable name, skipping");
      continue;
    }
    if name == REMOVED_KEY {
      warn!(index, variable = name, "variable name collides with the diff's removed list");
    }

    match operation.op {
      Op::Change => {
        let value = operation.value.as_deref().unwrap_or_default();
        if value.contains('\0') {
          warn!(index, variable = name, "environment value contains a NUL byte, skipping");
          continue;
        }
        env.set(name, value);
        diff.changed.insert(name.to_string(), value.to_string());
      }
      Op::Remove => {
        env.remove(name);
        diff.removed.push(name.to_string());
      }
    }
    debug!(index, op = %operation.op, variable = name, "applied environment operation");
  }

  diff
}
