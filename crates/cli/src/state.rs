//! State machine stand-in for running configuration control outside the service.

use std::convert::Infallible;

use tracing::info;

use nonstop_lib::util::hash::Hashable;
use nonstop_lib::{Config, StateMachine};

/// Logs each signal instead of driving downloads.
#[derive(Debug, Default)]
pub struct LoggingStateMachine {
  pub resets: usize,
}

impl StateMachine for LoggingStateMachine {
  type Error = Infallible;

  fn reset(&mut self, config: &Config) -> Result<(), Self::Error> {
    self.resets += 1;
    match config.filter.compute_hash() {
      Ok(hash) => info!(filter = %hash, "state machine reset"),
      Err(e) => info!(error = %e, "state machine reset, filter hash unavailable"),
    }
    Ok(())
  }

  fn start(&mut self) -> Result<(), Self::Error> {
    info!("state machine start");
    Ok(())
  }

  fn stop(&mut self) -> Result<(), Self::Error> {
    info!("state machine stop");
    Ok(())
  }
}
