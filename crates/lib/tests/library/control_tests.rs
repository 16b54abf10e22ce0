use nonstop_lib::platform::host_platform;
use nonstop_lib::platform::paths::files_dir;
use nonstop_lib::util::hash::Hashable;
use nonstop_lib::{Controller, Filter, PackageOperation};
use serde_json::{Value, json};

use super::common::{CountingStateMachine, service_config};

#[test]
fn configure_remove_and_split_sequence() {
  let mut config = service_config();
  let mut fsm = CountingStateMachine::default();

  // Setting branch, version, owner and releaseOnly
  Controller::new(&mut config, &mut fsm)
    .configure(&[
      PackageOperation::change("branch", "develop"),
      PackageOperation::change("version", "0.1.1"),
      PackageOperation::change("owner", "person"),
      PackageOperation::change("releaseOnly", true),
    ])
    .unwrap();

  assert_eq!(
    serde_json::to_value(&config.package).unwrap(),
    json!({
      "architecture": "x64",
      "branch": "develop",
      "build": null,
      "files": files_dir(),
      "os": {},
      "osName": "any",
      "osVersion": "any",
      "owner": "person",
      "platform": host_platform(),
      "project": "test",
      "releaseOnly": true,
      "version": "0.1.1",
    })
  );
  assert_eq!(
    Value::Object(config.filter.to_hash()),
    json!({
      "architecture": "x64",
      "branch": "develop",
      "osName": "any",
      "osVersion": "any",
      "owner": "person",
      "platform": host_platform(),
      "project": "test",
      "releaseOnly": true,
      "version": "0.1.1",
    })
  );
  assert_eq!(fsm.resets, 1);

  // Then removing version
  Controller::new(&mut config, &mut fsm)
    .configure(&[
      PackageOperation::remove("version"),
      PackageOperation::change("releaseOnly", false),
    ])
    .unwrap();

  assert_eq!(config.package.version, None);
  assert_eq!(config.package.release_only, Some(false));
  assert_eq!(
    Value::Object(config.filter.to_hash()),
    json!({
      "architecture": "x64",
      "branch": "develop",
      "osName": "any",
      "osVersion": "any",
      "owner": "person",
      "platform": host_platform(),
      "project": "test",
      "releaseOnly": false,
    })
  );
  assert_eq!(fsm.resets, 2);

  // Then changing owner and a version with the build included
  Controller::new(&mut config, &mut fsm)
    .configure(&[
      PackageOperation::change("version", "0.1.1-10"),
      PackageOperation::change("owner", "you"),
    ])
    .unwrap();

  assert_eq!(config.package.version.as_deref(), Some("0.1.1"));
  assert_eq!(config.package.build.as_deref(), Some("10"));
  assert_eq!(
    Value::Object(config.filter.to_hash()),
    json!({
      "architecture": "x64",
      "branch": "develop",
      "build": "10",
      "osName": "any",
      "osVersion": "any",
      "owner": "you",
      "platform": host_platform(),
      "project": "test",
      "releaseOnly": false,
      "version": "0.1.1",
    })
  );
  assert_eq!(fsm.resets, 3);
  assert_eq!(fsm.seen.last(), Some(&config.filter.to_hash()));
}

#[test]
fn build_survives_version_removal() {
  let mut config = service_config();
  let mut fsm = CountingStateMachine::default();

  Controller::new(&mut config, &mut fsm)
    .configure(&[PackageOperation::change("version", "2.0.0-5")])
    .unwrap();
  Controller::new(&mut config, &mut fsm)
    .configure(&[PackageOperation::change("version", "2.0.1")])
    .unwrap();
  assert_eq!(config.package.build.as_deref(), Some("5"));

  Controller::new(&mut config, &mut fsm)
    .configure(&[PackageOperation::remove("version")])
    .unwrap();

  assert_eq!(config.package.version, None);
  assert_eq!(config.filter.version, None);
  assert_eq!(config.package.build.as_deref(), Some("5"));
  assert_eq!(config.filter.build.as_deref(), Some("5"));
}

#[test]
fn reset_count_is_independent_of_operation_count() {
  for count in 1..=5 {
    let mut config = service_config();
    let mut fsm = CountingStateMachine::default();
    let operations: Vec<_> = (0..count)
      .map(|i| PackageOperation::change("branch", format!("feature-{i}")))
      .collect();

    Controller::new(&mut config, &mut fsm).configure(&operations).unwrap();
    assert_eq!(fsm.resets, 1, "{count} operations should reset once");
  }
}

#[test]
fn filter_always_mirrors_package() {
  let mut config = service_config();
  let mut fsm = CountingStateMachine::default();

  Controller::new(&mut config, &mut fsm)
    .configure_json(&json!([
      { "op": "change", "field": "architecture", "value": "arm64" },
      { "op": "remove", "field": "osVersion" },
      { "op": "change", "field": "channel", "value": "beta" },
    ]))
    .unwrap();

  let derived = Filter::derive(&config.package);
  assert_eq!(config.filter, derived);
  assert_eq!(config.filter.compute_hash().unwrap(), derived.compute_hash().unwrap());
  assert!(!config.filter.to_hash().contains_key("channel"));
  assert!(!config.filter.to_hash().contains_key("osVersion"));
}
