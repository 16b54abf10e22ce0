//! Package descriptor model and mutation.
//!
//! - `types`: the descriptor and its field names
//! - `version`: splitting `MAJOR.MINOR.PATCH[-BUILD]` strings
//! - `patch`: applying change/remove operation lists

pub mod patch;
pub mod types;
pub mod version;

pub use patch::{PatchError, apply};
pub use types::{Field, PackageDescriptor};
pub use version::{VersionSplit, split_version};
