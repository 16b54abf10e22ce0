//! Access to environment variables behind a narrow interface.
//!
//! The controller never touches `std::env` directly; it goes through an
//! [`Environment`]. [`ProcessEnv`] is the real process environment,
//! [`MemoryEnv`] a self-contained map for tests and dry runs.

use std::collections::BTreeMap;

/// Read/write access to a set of environment variables.
pub trait Environment {
  fn get(&self, name: &str) -> Option<String>;
  fn set(&mut self, name: &str, value: &str);
  fn remove(&mut self, name: &str);
}

impl<E: Environment + ?Sized> Environment for &mut E {
  fn get(&self, name: &str) -> Option<String> {
    (**self).get(name)
  }

  fn set(&mut self, name: &str, value: &str) {
    (**self).set(name, value)
  }

  fn remove(&mut self, name: &str) {
    (**self).remove(name)
  }
}

/// The live environment of the current process.
///
/// Changes are process-wide and last until the process exits or a later
/// operation reverses them.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProcessEnv;

impl Environment for ProcessEnv {
  fn get(&self, name: &str) -> Option<String> {
    std::env::var(name).ok()
  }

  fn set(&mut self, name: &str, value: &str) {
    // SAFETY: configuration control is single-threaded; nothing else reads or
    // writes the environment while an operation list is being applied.
    unsafe { std::env::set_var(name, value) }
  }

  fn remove(&mut self, name: &str) {
    // SAFETY: see `set`.
    unsafe { std::env::remove_var(name) }
  }
}

/// An in-memory environment.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MemoryEnv {
  vars: BTreeMap<String, String>,
}

impl MemoryEnv {
  pub fn new() -> Self {
    Self::default()
  }

  pub fn vars(&self) -> &BTreeMap<String, String> {
    &self.vars
  }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for MemoryEnv {
  fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
    Self {
      vars: iter.into_iter().map(|(k, v)| (k.into(), v.into())).collect(),
    }
  }
}

impl Environment for MemoryEnv {
  fn get(&self, name: &str) -> Option<String> {
    self.vars.get(name).cloned()
  }

  fn set(&mut self, name: &str, value: &str) {
    self.vars.insert(name.to_string(), value.to_string());
  }

  fn remove(&mut self, name: &str) {
    self.vars.remove(name);
  }
}

/// Whether `name` can be stored as an environment variable name on every platform.
pub fn is_valid_name(name: &str) -> bool {
  !name.is_empty() && !name.contains(['=', '\0'])
}
