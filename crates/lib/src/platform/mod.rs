pub mod arch;
pub mod os;
pub mod paths;

use arch::Arch;
use os::Os;
use std::fmt;

/// Platform identifier combining OS and architecture (e.g., "linux-x64")
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Platform {
  pub os: Os,
  pub arch: Arch,
}

impl Platform {
  /// Create a new platform identifier
  pub fn new(os: Os, arch: Arch) -> Self {
    Self { os, arch }
  }

  /// Detect the current platform at runtime
  ///
  /// Returns `None` if the OS or architecture is not supported
  pub fn current() -> Option<Self> {
    Some(Self {
      os: Os::current()?,
      arch: Arch::current()?,
    })
  }

  /// Returns the platform pair string (e.g., "darwin-arm64")
  pub fn pair(&self) -> String {
    format!("{}-{}", self.os, self.arch)
  }
}

impl fmt::Display for Platform {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "{}", self.pair())
  }
}

/// Returns the platform identifier of the host, as used for the package `platform` default.
///
/// Hosts outside the known set fall back to Rust's own OS name rather than failing.
pub fn host_platform() -> String {
  Os::current()
    .map(|os| os.as_str().to_string())
    .unwrap_or_else(|| std::env::consts::OS.to_string())
}
