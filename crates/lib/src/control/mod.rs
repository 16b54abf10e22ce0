//! Configuration control.
//!
//! [`Controller`] is the entry point the service hands operation lists to. It
//! borrows the live [`Config`] and the [`StateMachine`] for its whole
//! lifetime, so a patch, the filter derivation that follows it, and the
//! state-machine reset always happen as one uninterrupted sequence. Callers
//! sharing a configuration between threads hold a single lock around the
//! controller for the same reason.

mod state_machine;

use serde_json::Value;
use thiserror::Error;
use tracing::{debug, info};

pub use state_machine::{NoopStateMachine, StateMachine};

use crate::config::Config;
use crate::env::{self, EnvDiff, Environment, ProcessEnv};
use crate::ops::{EnvOperation, OperationError, PackageOperation, parse_env_operations, parse_package_operations};
use crate::package::{self, PatchError};

/// Errors returned by [`Controller`] operations.
#[derive(Debug, Error)]
pub enum ControlError {
  /// The operation list could not be parsed.
  #[error(transparent)]
  Operation(#[from] OperationError),

  /// An operation carried a value its field cannot hold. Nothing was changed.
  #[error(transparent)]
  Patch(#[from] PatchError),

  /// The state machine failed to reset. The new configuration is already in place.
  #[error("state machine reset failed: {0}")]
  Reset(#[source] Box<dyn std::error::Error + Send + Sync>),
}

/// Applies configuration and environment operation lists.
pub struct Controller<'a, M: StateMachine, E: Environment = ProcessEnv> {
  config: &'a mut Config,
  state_machine: &'a mut M,
  env: E,
}

impl<'a, M: StateMachine> Controller<'a, M, ProcessEnv> {
  /// Control `config`, signalling `state_machine`, against the process environment.
  pub fn new(config: &'a mut Config, state_machine: &'a mut M) -> Self {
    Self {
      config,
      state_machine,
      env: ProcessEnv,
    }
  }
}

impl<'a, M: StateMachine, E: Environment> Controller<'a, M, E> {
  /// Use `env` instead of the process environment for [`Controller::set_environment`].
  pub fn with_environment<E2: Environment>(self, env: E2) -> Controller<'a, M, E2> {
    Controller {
      config: self.config,
      state_machine: self.state_machine,
      env,
    }
  }

  pub fn config(&self) -> &Config {
    &*self.config
  }

  pub fn environment(&self) -> &E {
    &self.env
  }

  /// Apply `operations` to the package descriptor, re-derive the filter and reset the state machine.
  ///
  /// The state machine is reset exactly once per call, however many operations
  /// there are. If any operation is invalid nothing changes and no reset
  /// happens.
  pub fn configure(&mut self, operations: &[PackageOperation]) -> Result<(), ControlError> {
    package::apply(&mut self.config.package, operations)?;
    self.config.refresh_filter();
    debug!(filter = ?self.config.filter.to_hash(), "derived package filter");

    info!(operations = operations.len(), "package configuration changed, resetting");
    self
      .state_machine
      .reset(&*self.config)
      .map_err(|e| ControlError::Reset(Box::new(e)))
  }

  /// Parse a JSON operation list and [`configure`](Controller::configure) with it.
  pub fn configure_json(&mut self, operations: &Value) -> Result<(), ControlError> {
    let operations = parse_package_operations(operations)?;
    self.configure(&operations)
  }

  /// Apply `operations` to the environment and report what changed.
  ///
  /// Leaves the configuration and the state machine alone.
  pub fn set_environment(&mut self, operations: &[EnvOperation]) -> EnvDiff {
    let diff = env::apply(&mut self.env, operations);
    info!(
      changed = diff.changed.len(),
      removed = diff.removed.len(),
      "environment updated"
    );
    diff
  }

  /// Parse a JSON operation list and [`set_environment`](Controller::set_environment) with it.
  pub fn set_environment_json(&mut self, operations: &Value) -> Result<EnvDiff, ControlError> {
    let operations = parse_env_operations(operations)?;
    Ok(self.set_environment(&operations))
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::env::MemoryEnv;
  use crate::util::testutil::{FailingStateMachine, RecordingStateMachine, sample_config};
  use serde_json::json;

  #[test]
  fn configure_resets_once_with_new_config() {
    let mut config = sample_config();
    let mut fsm = RecordingStateMachine::default();

    Controller::new(&mut config, &mut fsm)
      .configure(&[
        PackageOperation::change("branch", "develop"),
        PackageOperation::change("version", "0.1.1"),
        PackageOperation::change("owner", "person"),
        PackageOperation::change("releaseOnly", true),
      ])
      .unwrap();

    assert_eq!(fsm.resets.len(), 1);
    assert_eq!(fsm.resets[0], config);
    assert_eq!(fsm.starts, 0);
    assert_eq!(fsm.stops, 0);
  }

  #[test]
  fn empty_operation_list_still_resets() {
    let mut config = sample_config();
    let mut fsm = RecordingStateMachine::default();

    Controller::new(&mut config, &mut fsm).configure(&[]).unwrap();
    assert_eq!(fsm.resets.len(), 1);
  }

  #[test]
  fn invalid_value_skips_reset() {
    let mut config = sample_config();
    let before = config.clone();
    let mut fsm = RecordingStateMachine::default();

    let err = Controller::new(&mut config, &mut fsm)
      .configure(&[
        PackageOperation::change("branch", "develop"),
        PackageOperation::change("releaseOnly", "nope"),
      ])
      .unwrap_err();

    assert!(matches!(err, ControlError::Patch(_)));
    assert_eq!(config, before);
    assert!(fsm.resets.is_empty());
  }

  #[test]
  fn unknown_op_is_rejected_before_anything_applies() {
    let mut config = sample_config();
    let before = config.clone();
    let mut fsm = RecordingStateMachine::default();

    let err = Controller::new(&mut config, &mut fsm)
      .configure_json(&json!([
        { "op": "change", "field": "branch", "value": "develop" },
        { "op": "rename", "field": "owner", "value": "x" },
      ]))
      .unwrap_err();

    assert!(matches!(err, ControlError::Operation(OperationError::UnknownOp { index: 1, .. })));
    assert_eq!(config, before);
    assert!(fsm.resets.is_empty());
  }

  #[test]
  fn null_value_clears_field_and_resets() {
    let mut config = sample_config();
    let mut fsm = RecordingStateMachine::default();

    let mut controller = Controller::new(&mut config, &mut fsm);
    controller
      .configure_json(&json!([{ "op": "change", "field": "branch", "value": null }]))
      .unwrap();

    assert_eq!(controller.config().package.branch, None);
    assert!(!controller.config().filter.to_hash().contains_key("branch"));
    assert_eq!(controller.config().filter.project.as_deref(), Some("test"));
    assert_eq!(fsm.resets.len(), 1);
  }

  #[test]
  fn reset_failure_propagates_after_mutation() {
    let mut config = sample_config();
    let mut fsm = FailingStateMachine;

    let err = Controller::new(&mut config, &mut fsm)
      .configure(&[PackageOperation::change("branch", "develop")])
      .unwrap_err();

    assert!(matches!(err, ControlError::Reset(_)));
    assert!(err.to_string().contains("state machine reset failed"));
    assert_eq!(config.package.branch.as_deref(), Some("develop"));
    assert_eq!(config.filter.branch.as_deref(), Some("develop"));
  }

  #[test]
  fn set_environment_uses_injected_environment() {
    let mut config = sample_config();
    let before = config.clone();
    let mut fsm = RecordingStateMachine::default();
    let mut env = MemoryEnv::from_iter([("TO_CHANGE", "change this"), ("TO_REMOVE", "remove this")]);

    let diff = Controller::new(&mut config, &mut fsm)
      .with_environment(&mut env)
      .set_environment(&[
        EnvOperation::change("TO_CHANGE", "new value"),
        EnvOperation::remove("TO_REMOVE"),
      ]);

    assert_eq!(
      serde_json::to_value(&diff).unwrap(),
      json!({ "TO_CHANGE": "new value", "removed": ["TO_REMOVE"] })
    );
    assert_eq!(env.get("TO_CHANGE").as_deref(), Some("new value"));
    assert_eq!(env.get("TO_REMOVE"), None);
    assert_eq!(config, before);
    assert!(fsm.resets.is_empty());
  }

  #[test]
  fn set_environment_json_rejects_unknown_op() {
    let mut config = sample_config();
    let mut fsm = NoopStateMachine;
    let mut controller = Controller::new(&mut config, &mut fsm).with_environment(MemoryEnv::new());

    let err = controller
      .set_environment_json(&json!([{ "op": "unset", "variable": "X" }]))
      .unwrap_err();
    assert!(matches!(err, ControlError::Operation(OperationError::UnknownOp { .. })));
    assert!(controller.environment().vars().is_empty());
  }
}
