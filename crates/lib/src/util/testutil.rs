//! Test utilities for nonstop-lib.
//!
//! Substitute state machines and a baseline configuration shared by the unit
//! tests of several modules.

use thiserror::Error;

use crate::config::Config;
use crate::control::StateMachine;
use crate::package::PackageDescriptor;

/// Baseline configuration: `me/test` on `master`, everything else defaulted.
pub fn sample_config() -> Config {
  Config::new(PackageDescriptor::new("me", "test", "master"))
}

/// Records every signal it receives. `resets` holds a copy of each config passed to `reset`.
#[derive(Debug, Default)]
pub struct RecordingStateMachine {
  pub resets: Vec<Config>,
  pub starts: usize,
  pub stops: usize,
}

#[derive(Debug, Error)]
#[error("state machine unavailable")]
pub struct Unavailable;

impl StateMachine for RecordingStateMachine {
  type Error = Unavailable;

  fn reset(&mut self, config: &Config) -> Result<(), Self::Error> {
    self.resets.push(config.clone());
    Ok(())
  }

  fn start(&mut self) -> Result<(), Self::Error> {
    self.starts += 1;
    Ok(())
  }

  fn stop(&mut self) -> Result<(), Self::Error> {
    self.stops += 1;
    Ok(())
  }
}

/// Fails every signal.
#[derive(Debug, Default)]
pub struct FailingStateMachine;

impl StateMachine for FailingStateMachine {
  type Error = Unavailable;

  fn reset(&mut self, _config: &Config) -> Result<(), Self::Error> {
    Err(Unavailable)
  }

  fn start(&mut self) -> Result<(), Self::Error> {
    Err(Unavailable)
  }

  fn stop(&mut self) -> Result<(), Self::Error> {
    Err(Unavailable)
  }
}
