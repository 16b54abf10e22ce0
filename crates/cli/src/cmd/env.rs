//! Implementation of the `nonstop env` command.
//!
//! Applies environment operations to this process and reports the diff. Mostly
//! useful for checking an operation list before sending it to a running service.

use anyhow::{Context, Result};

use nonstop_lib::ops::env_operations_from_str;
use nonstop_lib::{Config, Controller, NoopStateMachine};

use super::read_operations;
use crate::output::{ChangeKind, OutputFormat, print_change, print_info, print_json};

pub fn cmd_env(source: &str, format: OutputFormat) -> Result<()> {
  let text = read_operations(source)?;
  let operations = env_operations_from_str(&text).context("Invalid environment operations")?;

  let mut config = Config::default();
  let mut fsm = NoopStateMachine;
  let diff = Controller::new(&mut config, &mut fsm).set_environment(&operations);

  if format.is_json() {
    return print_json(&diff);
  }

  if diff.is_empty() {
    print_info("No environment changes");
    return Ok(());
  }
  for (name, value) in &diff.changed {
    print_change(ChangeKind::Modify, &format!("{} = {}", name, value));
  }
  for name in &diff.removed {
    print_change(ChangeKind::Remove, name);
  }
  Ok(())
}
