use nonstop_lib::{Controller, EnvOperation, NoopStateMachine};
use serde_json::json;
use serial_test::serial;

use super::common::service_config;

#[test]
#[serial]
fn set_environment_changes_process_environment() {
  temp_env::with_vars(
    [("TO_CHANGE", Some("change this")), ("TO_REMOVE", Some("remove this"))],
    || {
      let mut config = service_config();
      let before = config.clone();
      let mut fsm = NoopStateMachine;

      let diff = Controller::new(&mut config, &mut fsm).set_environment(&[
        EnvOperation::change("TO_CHANGE", "new value"),
        EnvOperation::remove("TO_REMOVE"),
      ]);

      assert_eq!(
        serde_json::to_value(&diff).unwrap(),
        json!({ "TO_CHANGE": "new value", "removed": ["TO_REMOVE"] })
      );
      assert_eq!(std::env::var("TO_CHANGE").as_deref(), Ok("new value"));
      assert!(std::env::var("TO_REMOVE").is_err());
      assert_eq!(config, before);
    },
  );
}

#[test]
#[serial]
fn set_environment_json_round_trip() {
  temp_env::with_var("NONSTOP_IT_LEVEL", None::<&str>, || {
    let mut config = service_config();
    let mut fsm = NoopStateMachine;

    let diff = Controller::new(&mut config, &mut fsm)
      .set_environment_json(&json!([{ "op": "change", "variable": "NONSTOP_IT_LEVEL", "value": "debug" }]))
      .unwrap();

    assert_eq!(diff.changed["NONSTOP_IT_LEVEL"], "debug");
    assert!(diff.removed.is_empty());
    assert_eq!(std::env::var("NONSTOP_IT_LEVEL").as_deref(), Ok("debug"));
  });
}
