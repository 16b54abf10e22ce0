//! Splitting of `MAJOR.MINOR.PATCH[-BUILD]` version strings.

use serde::Serialize;

/// A version string separated into its release version and optional build suffix.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct VersionSplit {
  pub version: String,
  pub build: Option<String>,
}

/// Split a version string at its first `-`.
///
/// `"0.1.1-10"` becomes version `"0.1.1"` with build `"10"`; a string without a
/// `-` is returned whole with no build. Everything after the first `-` is the
/// build, so `"1.0.0-rc-2"` yields build `"rc-2"` and `"1.0.0-"` yields an
/// empty build.
pub fn split_version(input: &str) -> VersionSplit {
  match input.split_once('-') {
    Some((version, build)) => VersionSplit {
      version: version.to_string(),
      build: Some(build.to_string()),
    },
    None => VersionSplit {
      version: input.to_string(),
      build: None,
    },
  }
}
