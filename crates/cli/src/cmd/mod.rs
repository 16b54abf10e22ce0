mod configure;
mod env;
mod info;

use std::io::Read;

use anyhow::{Context, Result};

pub use configure::cmd_configure;
pub use env::cmd_env;
pub use info::cmd_info;

/// Read an operation list from `source`, a file path or `-` for stdin.
fn read_operations(source: &str) -> Result<String> {
  if source == "-" {
    let mut text = String::new();
    std::io::stdin()
      .read_to_string(&mut text)
      .context("Failed to read operations from stdin")?;
    return Ok(text);
  }
  std::fs::read_to_string(source).with_context(|| format!("Failed to read operations file {}", source))
}
