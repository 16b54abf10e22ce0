//! The state machine the controller signals after configuration changes.

use std::convert::Infallible;

use crate::config::Config;

/// The service's download/install state machine, as seen from configuration control.
///
/// Only `reset` is driven from here; `start` and `stop` belong to the service
/// lifecycle. `reset` must tolerate being called repeatedly.
pub trait StateMachine {
  type Error: std::error::Error + Send + Sync + 'static;

  /// Restart selection from scratch against `config`.
  fn reset(&mut self, config: &Config) -> Result<(), Self::Error>;

  fn start(&mut self) -> Result<(), Self::Error>;

  fn stop(&mut self) -> Result<(), Self::Error>;
}

/// A state machine that ignores every signal.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopStateMachine;

impl StateMachine for NoopStateMachine {
  type Error = Infallible;

  fn reset(&mut self, _config: &Config) -> Result<(), Self::Error> {
    Ok(())
  }

  fn start(&mut self) -> Result<(), Self::Error> {
    Ok(())
  }

  fn stop(&mut self) -> Result<(), Self::Error> {
    Ok(())
  }
}
