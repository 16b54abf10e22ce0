//! Shared constants.

/// Length of the truncated SHA-256 prefix used for object hashes.
pub const OBJ_HASH_PREFIX_LEN: usize = 20;

/// Directory (relative to the working directory) that downloaded packages land in.
pub const DEFAULT_FILES_DIR: &str = "downloads";

pub const DEFAULT_OS_NAME: &str = "any";
pub const DEFAULT_OS_VERSION: &str = "any";

/// Key that carries removed variable names in an environment diff.
pub const REMOVED_KEY: &str = "removed";

/// Prefix for environment variables that override package defaults.
pub const ENV_PREFIX: &str = "NONSTOP_";
