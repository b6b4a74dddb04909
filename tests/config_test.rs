//! Tests for configuration validation and scheduler builders.

use roundloop::builders::{build_callback_scheduler, build_coroutine_scheduler};
use roundloop::config::SchedulerConfig;
use roundloop::core::{resume_fn, SchedulerError, Step};

#[test]
fn test_default_config_is_valid() {
    let cfg = SchedulerConfig::default();
    assert!(cfg.validate().is_ok());
}

#[test]
fn test_config_rejects_empty_name() {
    let cfg = SchedulerConfig {
        name: String::new(),
        initial_capacity: 16,
        trace_rounds: false,
    };
    assert!(cfg.validate().is_err());
}

#[test]
fn test_config_rejects_zero_capacity() {
    let cfg = SchedulerConfig {
        name: "loop".into(),
        initial_capacity: 0,
        trace_rounds: false,
    };
    assert!(cfg.validate().is_err());
}

#[test]
fn test_config_from_json() {
    let cfg = SchedulerConfig::from_json_str(
        r#"{"name":"demo","initial_capacity":32,"trace_rounds":true}"#,
    )
    .unwrap();
    assert_eq!(cfg.name, "demo");
    assert_eq!(cfg.initial_capacity, 32);
    assert!(cfg.trace_rounds);
}

#[test]
fn test_config_from_json_trace_rounds_defaults_off() {
    let cfg =
        SchedulerConfig::from_json_str(r#"{"name":"demo","initial_capacity":32}"#).unwrap();
    assert!(!cfg.trace_rounds);
}

#[test]
fn test_config_from_json_rejects_invalid() {
    let err =
        SchedulerConfig::from_json_str(r#"{"name":"demo","initial_capacity":0}"#).unwrap_err();
    assert!(err.contains("initial_capacity"));
}

#[test]
fn test_builder_rejects_invalid_config() {
    let cfg = SchedulerConfig {
        name: String::new(),
        initial_capacity: 8,
        trace_rounds: false,
    };
    let err = build_callback_scheduler(&cfg).unwrap_err();
    assert!(matches!(err, SchedulerError::InvalidConfig(_)));
}

#[test]
fn test_builder_plumbs_trace_rounds() {
    let traced = SchedulerConfig {
        trace_rounds: true,
        ..SchedulerConfig::default()
    };
    assert!(build_callback_scheduler(&traced).unwrap().trace_rounds());
    assert!(build_coroutine_scheduler::<u32>(&traced).unwrap().trace_rounds());

    let quiet = SchedulerConfig::default();
    assert!(!build_callback_scheduler(&quiet).unwrap().trace_rounds());
    assert!(!build_coroutine_scheduler::<u32>(&quiet).unwrap().trace_rounds());
}

#[test]
fn test_built_schedulers_run() {
    let cfg = SchedulerConfig::default();

    let mut callbacks = build_callback_scheduler(&cfg).unwrap();
    callbacks.schedule(|_| Ok(()));
    callbacks.run_to_completion().unwrap();
    assert_eq!(callbacks.rounds(), 1);

    let mut coroutines = build_coroutine_scheduler::<u32>(&cfg).unwrap();
    let handle = coroutines.schedule(resume_fn(|_input: Option<u32>| Ok(Step::Completed(5))));
    coroutines.run_to_completion().unwrap();
    assert_eq!(handle.value(), Some(5));
}
