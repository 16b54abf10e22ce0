use std::path::PathBuf;

use crate::consts::DEFAULT_FILES_DIR;

/// Returns the default directory downloaded packages are stored in.
///
/// Resolved against the current working directory so the descriptor always carries
/// an absolute path. Falls back to the bare relative name if the working directory
/// cannot be determined.
pub fn files_dir() -> PathBuf {
  match std::env::current_dir() {
    Ok(cwd) => dunce::simplified(&cwd.join(DEFAULT_FILES_DIR)).to_path_buf(),
    Err(_) => PathBuf::from(DEFAULT_FILES_DIR),
  }
}

/// Resolves a configured files path, anchoring relative paths at the working directory.
pub fn resolve_files_dir(path: &str) -> PathBuf {
  let path = PathBuf::from(path);
  if path.is_absolute() {
    return path;
  }
  match std::env::current_dir() {
    Ok(cwd) => dunce::simplified(&cwd.join(&path)).to_path_buf(),
    Err(_) => path,
  }
}
