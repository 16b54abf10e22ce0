//! The configuration object the controller mutates.
//!
//! A [`Config`] owns the package descriptor and the filter derived from it.
//! Defaults come from [`PackageDescriptor::default`]; [`Config::from_env`]
//! layers `NONSTOP_*` variables on top by turning them into ordinary change
//! operations, so overrides get exactly the same treatment (including version
//! splitting) as operations sent later by the service.

use serde::Serialize;
use thiserror::Error;
use tracing::debug;

use crate::consts::ENV_PREFIX;
use crate::env::Environment;
use crate::filter::Filter;
use crate::ops::PackageOperation;
use crate::package::{self, PackageDescriptor, PatchError};
use crate::platform::paths::resolve_files_dir;

/// Errors while building a configuration from the environment.
#[derive(Debug, Error)]
pub enum ConfigError {
  #[error("{variable} must be true/false, 1/0 or yes/no, got '{value}'")]
  InvalidFlag { variable: String, value: String },

  #[error("invalid override: {0}")]
  Patch(#[from] PatchError),
}

/// Live service configuration: the tracked package and its matching filter.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Config {
  pub package: PackageDescriptor,
  pub filter: Filter,
}

impl Default for Config {
  fn default() -> Self {
    Self::new(PackageDescriptor::default())
  }
}

impl Config {
  /// Wrap `package`, deriving its filter.
  pub fn new(package: PackageDescriptor) -> Self {
    let filter = Filter::derive(&package);
    Self { package, filter }
  }

  /// Recompute the filter from the current descriptor.
  pub fn refresh_filter(&mut self) {
    self.filter = Filter::derive(&self.package);
  }

  /// Default configuration with `NONSTOP_*` overrides read from `env`.
  ///
  /// Recognized variables: `NONSTOP_BRANCH`, `NONSTOP_OWNER`, `NONSTOP_PROJECT`,
  /// `NONSTOP_VERSION`, `NONSTOP_BUILD`, `NONSTOP_RELEASE_ONLY`,
  /// `NONSTOP_ARCHITECTURE`, `NONSTOP_PLATFORM`, `NONSTOP_OS_NAME`,
  /// `NONSTOP_OS_VERSION` and `NONSTOP_FILES` (relative paths are resolved
  /// against the working directory).
  pub fn from_env<E: Environment + ?Sized>(env: &E) -> Result<Self, ConfigError> {
    let mut package = PackageDescriptor::default();
    let operations = env_overrides(env)?;
    if !operations.is_empty() {
      debug!(count = operations.len(), "applying environment overrides");
      package::apply(&mut package, &operations)?;
    }
    Ok(Self::new(package))
  }
}

const STRING_OVERRIDES: &[(&str, &str)] = &[
  ("BRANCH", "branch"),
  ("OWNER", "owner"),
  ("PROJECT", "project"),
  // Build before version so a `-BUILD` suffix on the version takes precedence
  ("BUILD", "build"),
  ("VERSION", "version"),
  ("ARCHITECTURE", "architecture"),
  ("PLATFORM", "platform"),
  ("OS_NAME", "osName"),
  ("OS_VERSION", "osVersion"),
];

fn env_overrides<E: Environment + ?Sized>(env: &E) -> Result<Vec<PackageOperation>, ConfigError> {
  let mut operations = Vec::new();

  for (suffix, field) in STRING_OVERRIDES {
    if let Some(value) = env.get(&format!("{ENV_PREFIX}{suffix}")) {
      operations.push(PackageOperation::change(*field, value));
    }
  }

  let release_only_var = format!("{ENV_PREFIX}RELEASE_ONLY");
  if let Some(value) = env.get(&release_only_var) {
    let flag = parse_flag(&value).ok_or(ConfigError::InvalidFlag {
      variable: release_only_var,
      value,
    })?;
    operations.push(PackageOperation::change("releaseOnly", flag));
  }

  if let Some(value) = env.get(&format!("{ENV_PREFIX}FILES")) {
    let files = resolve_files_dir(&value);
    operations.push(PackageOperation::change("files", files.to_string_lossy().into_owned()));
  }

  Ok(operations)
}

fn parse_flag(value: &str) -> Option<bool> {
  match value.trim().to_ascii_lowercase().as_str() {
    "true" | "1" | "yes" => Some(true),
    "false" | "0" | "no" => Some(false),
    _ => None,
  }
}
