//! Implementation of the `nonstop configure` command.
//!
//! Builds the default configuration (with `NONSTOP_*` overrides), applies the
//! given package operations through the controller and prints the resulting
//! package descriptor and filter.

use anyhow::{Context, Result};
use tracing::debug;

use nonstop_lib::ops::package_operations_from_str;
use nonstop_lib::util::hash::Hashable;
use nonstop_lib::{Config, Controller, ProcessEnv};

use super::read_operations;
use crate::output::{OutputFormat, display_value, print_json, print_stat, print_success, truncate_hash};
use crate::state::LoggingStateMachine;

pub fn cmd_configure(source: &str, format: OutputFormat, verbose: bool) -> Result<()> {
  let text = read_operations(source)?;
  let operations = package_operations_from_str(&text).context("Invalid package operations")?;

  let mut config = Config::from_env(&ProcessEnv).context("Invalid NONSTOP_* override")?;
  let mut fsm = LoggingStateMachine::default();

  Controller::new(&mut config, &mut fsm)
    .configure(&operations)
    .context("Configure failed")?;
  debug!(resets = fsm.resets, "configure complete");

  let hash = config.filter.compute_hash().context("Failed to hash filter")?;

  if format.is_json() {
    let json = serde_json::json!({
      "package": config.package,
      "filter": config.filter.to_hash(),
      "hash": hash,
    });
    return print_json(&json);
  }

  print_success(&format!("Applied {} operation(s)", operations.len()));
  print_stat("Filter", truncate_hash(&hash.0));
  println!();
  for (key, value) in config.filter.to_hash() {
    print_stat(&key, &display_value(&value));
  }
  if verbose {
    if let Some(files) = &config.package.files {
      print_stat("files", &files.display().to_string());
    }
    for (key, value) in &config.package.extra {
      print_stat(key, &display_value(value));
    }
  }
  Ok(())
}
