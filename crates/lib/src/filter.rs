//! The matching filter derived from a package descriptor.
//!
//! Downstream matching compares filters to decide whether the set of
//! candidate builds changed, so the filter is never edited directly: it is a
//! pure projection of the descriptor, recomputed in full after every
//! successful mutation. Absent values are omitted from [`Filter::to_hash`]
//! entirely, so a filter whose version was removed compares equal to one
//! that never had a version.

use serde::Serialize;
use serde_json::{Map, Value};

use crate::package::PackageDescriptor;
use crate::util::hash::Hashable;

/// The subset of descriptor fields used to select matching build artifacts.
///
/// `files`, `os` and passthrough fields are not part of matching and never
/// appear here.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Filter {
  #[serde(skip_serializing_if = "Option::is_none")]
  pub architecture: Option<String>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub branch: Option<String>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub build: Option<String>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub os_name: Option<String>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub os_version: Option<String>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub owner: Option<String>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub platform: Option<String>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub project: Option<String>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub release_only: Option<bool>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub version: Option<String>,
}

impl Hashable for Filter {}

impl Filter {
  /// Project `descriptor` into a fresh filter.
  pub fn derive(descriptor: &PackageDescriptor) -> Self {
    Self {
      architecture: descriptor.architecture.clone(),
      branch: descriptor.branch.clone(),
      build: descriptor.build.clone(),
      os_name: descriptor.os_name.clone(),
      os_version: descriptor.os_version.clone(),
      owner: descriptor.owner.clone(),
      platform: descriptor.platform.clone(),
      project: descriptor.project.clone(),
      release_only: descriptor.release_only,
      version: descriptor.version.clone(),
    }
  }

  /// Plain mapping of the fields that are present, keyed by their wire names.
  pub fn to_hash(&self) -> Map<String, Value> {
    let mut hash = Map::new();
    insert_str(&mut hash, "architecture", &self.architecture);
    insert_str(&mut hash, "branch", &self.branch);
    insert_str(&mut hash, "build", &self.build);
    insert_str(&mut hash, "osName", &self.os_name);
    insert_str(&mut hash, "osVersion", &self.os_version);
    insert_str(&mut hash, "owner", &self.owner);
    insert_str(&mut hash, "platform", &self.platform);
    insert_str(&mut hash, "project", &self.project);
    if let Some(release_only) = self.release_only {
      hash.insert("releaseOnly".to_string(), Value::Bool(release_only));
    }
    insert_str(&mut hash, "version", &self.version);
    hash
  }
}

fn insert_str(hash: &mut Map<String, Value>, key: &str, value: &Option<String>) {
  if let Some(value) = value {
    hash.insert(key.to_string(), Value::String(value.clone()));
  }
}
