//! Info command implementation.
//!
//! Shows the detected host platform and the filter a default configuration matches with.

use anyhow::Result;

use nonstop_lib::platform::Platform;
use nonstop_lib::{Config, ProcessEnv};

use crate::output::{OutputFormat, display_value, print_info, print_json, print_stat};

pub fn cmd_info(format: OutputFormat) -> Result<()> {
  let platform = Platform::current();
  let config = Config::from_env(&ProcessEnv)?;

  if format.is_json() {
    let json = serde_json::json!({
      "platform": platform.map(|p| p.pair()),
      "filter": config.filter.to_hash(),
    });
    return print_json(&json);
  }

  println!("System:");
  match platform {
    Some(platform) => print_stat("Platform", &platform.pair()),
    None => print_info("Could not detect platform."),
  }
  println!();
  println!("Default filter:");
  for (key, value) in config.filter.to_hash() {
    print_stat(&key, &display_value(&value));
  }
  Ok(())
}
