//! Shared helpers for library integration tests.

use std::convert::Infallible;

use nonstop_lib::{Config, PackageDescriptor, StateMachine};

/// The configuration a freshly started service would have for `me/test`.
pub fn service_config() -> Config {
  Config::new(PackageDescriptor::new("me", "test", "master"))
}

/// Counts resets and remembers the filter hash each one saw.
#[derive(Debug, Default)]
pub struct CountingStateMachine {
  pub resets: usize,
  pub seen: Vec<serde_json::Map<String, serde_json::Value>>,
}

impl StateMachine for CountingStateMachine {
  type Error = Infallible;

  fn reset(&mut self, config: &Config) -> Result<(), Self::Error> {
    self.resets += 1;
    self.seen.push(config.filter.to_hash());
    Ok(())
  }

  fn start(&mut self) -> Result<(), Self::Error> {
    Ok(())
  }

  fn stop(&mut self) -> Result<(), Self::Error> {
    Ok(())
  }
}
