//! The package descriptor and the names of its fields.

use std::collections::BTreeMap;
use std::fmt;
use std::path::PathBuf;

use serde::Serialize;
use serde_json::{Map, Value};

use crate::consts::{DEFAULT_OS_NAME, DEFAULT_OS_VERSION};
use crate::platform::arch::Arch;
use crate::platform::host_platform;
use crate::platform::paths::files_dir;

/// Describes which package the service should track and where to keep it.
///
/// Every field can be absent: a `remove` operation clears it. Fields outside the
/// documented set are kept in `extra` so operations for newer descriptor shapes
/// pass through without being lost; they never take part in matching.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PackageDescriptor {
  /// Source branch the build was produced from.
  pub branch: Option<String>,
  /// Artifact owner / namespace.
  pub owner: Option<String>,
  /// Artifact project name.
  pub project: Option<String>,
  /// Release version without any build suffix (`MAJOR.MINOR.PATCH`).
  pub version: Option<String>,
  /// Build identifier, set directly or split off a `version` value.
  pub build: Option<String>,
  /// Only match release builds.
  pub release_only: Option<bool>,
  pub architecture: Option<String>,
  pub platform: Option<String>,
  pub os_name: Option<String>,
  pub os_version: Option<String>,
  /// Reserved for OS-specific overrides.
  pub os: Option<Map<String, Value>>,
  /// Local directory downloaded packages are stored in.
  pub files: Option<PathBuf>,
  #[serde(flatten)]
  pub extra: BTreeMap<String, Value>,
}

impl Default for PackageDescriptor {
  fn default() -> Self {
    Self {
      branch: None,
      owner: None,
      project: None,
      version: None,
      build: None,
      release_only: Some(false),
      architecture: Some(Arch::default().to_string()),
      platform: Some(host_platform()),
      os_name: Some(DEFAULT_OS_NAME.to_string()),
      os_version: Some(DEFAULT_OS_VERSION.to_string()),
      os: Some(Map::new()),
      files: Some(files_dir()),
      extra: BTreeMap::new(),
    }
  }
}

impl PackageDescriptor {
  /// Start from the defaults with the identifying fields filled in.
  pub fn new(owner: impl Into<String>, project: impl Into<String>, branch: impl Into<String>) -> Self {
    Self {
      owner: Some(owner.into()),
      project: Some(project.into()),
      branch: Some(branch.into()),
      ..Self::default()
    }
  }
}

/// A descriptor field addressed by an operation.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Field {
  Branch,
  Owner,
  Project,
  Version,
  Build,
  ReleaseOnly,
  Architecture,
  Platform,
  OsName,
  OsVersion,
  Os,
  Files,
  /// Any name outside the documented set.
  Other(String),
}

impl Field {
  /// Resolve an operation's `field` string. Names are matched exactly, as written on the wire.
  pub fn parse(name: &str) -> Self {
    match name {
      "branch" => Field::Branch,
      "owner" => Field::Owner,
      "project" => Field::Project,
      "version" => Field::Version,
      "build" => Field::Build,
      "releaseOnly" => Field::ReleaseOnly,
      "architecture" => Field::Architecture,
      "platform" => Field::Platform,
      "osName" => Field::OsName,
      "osVersion" => Field::OsVersion,
      "os" => Field::Os,
      "files" => Field::Files,
      other => Field::Other(other.to_string()),
    }
  }

  pub fn as_str(&self) -> &str {
    match self {
      Field::Branch => "branch",
      Field::Owner => "owner",
      Field::Project => "project",
      Field::Version => "version",
      Field::Build => "build",
      Field::ReleaseOnly => "releaseOnly",
      Field::Architecture => "architecture",
      Field::Platform => "platform",
      Field::OsName => "osName",
      Field::OsVersion => "osVersion",
      Field::Os => "os",
      Field::Files => "files",
      Field::Other(name) => name,
    }
  }

  pub fn is_known(&self) -> bool {
    !matches!(self, Field::Other(_))
  }
}

impl fmt::Display for Field {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "{}", self.as_str())
  }
}
