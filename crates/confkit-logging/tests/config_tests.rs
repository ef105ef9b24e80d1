//! Building named loggers from declarations
//!
//! Loggers live in a process-wide registry, so every test uses its own name
//! and the tests that reconfigure a shared name run serially.

use confkit_conf::ConfigNode;
use confkit_logging::{
	DEFAULT_LAYOUT, LogLevel, LoggingError, get_logger, logger_from_config, logger_from_file,
	logger_from_json, logger_from_yaml,
};
use rstest::rstest;
use serde_json::json;
use serial_test::serial;
use std::fs;
use std::io::Write;
use std::path::Path;
use std::sync::Arc;

fn file_logger(name: &str, path: &Path, level: &str) -> serde_json::Value {
	json!({
		"name": name,
		"level": level,
		"time": "%H:%M",
		"appenders": [{
			"type": "file",
			"file": path.to_string_lossy(),
			"layout": "%N %L : %M",
			"roll": { "duration": "0s" },
		}],
	})
}

#[rstest]
#[serial(logger_registry)]
fn test_file_logger_writes_formatted_records() {
	let dir = tempfile::tempdir().unwrap();
	let path = dir.path().join("logs/app.log");

	let logger = logger_from_config(&ConfigNode::from_value(file_logger("it.file", &path, "info"))).unwrap();
	logger.debug("hidden");
	logger.info("started");
	logger.fatal("stopped");

	assert_eq!(
		fs::read_to_string(&path).unwrap(),
		"it.file INFO : started\nit.file FATAL : stopped\n"
	);
}

#[rstest]
#[serial(logger_registry)]
fn test_reconfiguring_a_name_updates_the_shared_logger() {
	let dir = tempfile::tempdir().unwrap();
	let first_path = dir.path().join("first.log");
	let second_path = dir.path().join("second.log");

	let first = logger_from_config(&ConfigNode::from_value(file_logger("it.shared", &first_path, "ALL"))).unwrap();
	let second = logger_from_config(&ConfigNode::from_value(file_logger("it.shared", &second_path, "ERROR"))).unwrap();

	assert!(Arc::ptr_eq(&first, &second));
	assert!(Arc::ptr_eq(&first, &get_logger("it.shared")));
	assert_eq!(first.level(), LogLevel::ERROR);

	first.error("after");
	assert_eq!(fs::read_to_string(&first_path).unwrap(), "");
	assert_eq!(fs::read_to_string(&second_path).unwrap(), "it.shared ERROR : after\n");
}

#[rstest]
#[serial(logger_registry)]
fn test_failed_reconfiguration_leaves_logger_untouched() {
	let dir = tempfile::tempdir().unwrap();
	let path = dir.path().join("kept.log");
	let logger = logger_from_config(&ConfigNode::from_value(file_logger("it.atomic", &path, "WARN"))).unwrap();

	let err = logger_from_json(
		br#"{"name": "it.atomic", "level": "DEBUG", "appenders": [{"type": "stderr"}, {"type": "carrier-pigeon"}]}"#,
	)
	.unwrap_err();

	assert!(matches!(err, LoggingError::UnknownAppender(ref kind) if kind == "carrier-pigeon"));
	assert_eq!(logger.level(), LogLevel::WARN);
	assert_eq!(logger.appenders().len(), 1);
	assert_eq!(logger.appenders()[0].kind(), "file");
}

#[rstest]
#[serial(logger_registry)]
fn test_single_console_appender_accepts_records() {
	let logger = logger_from_yaml(b"name: it.console\nlevel: INFO\nappenders:\n  - type: console\n").unwrap();

	assert_eq!(logger.level(), LogLevel::INFO);
	assert_eq!(logger.appenders().len(), 1);
	assert_eq!(logger.appenders()[0].kind(), "console");
	assert_eq!(logger.appenders()[0].layout().pattern(), DEFAULT_LAYOUT);
	assert!(logger.enabled(LogLevel::WARN));

	logger.debug("below threshold");
	logger.info("to stdout");
	logger.log_message("to stdout");
	logger.fatal("to stdout");
	logger.flush();
}

#[rstest]
#[case(json!({ "name": "it.level.num", "level": 35, "appenders": [{ "type": "stderr" }] }), LogLevel(35))]
#[case(json!({ "name": "it.level.str", "level": "45", "appenders": [{ "type": "stderr" }] }), LogLevel(45))]
#[case(json!({ "name": "it.level.sym", "level": "fatal", "appenders": [{ "type": "stderr" }] }), LogLevel::FATAL)]
#[case(json!({ "name": "it.level.none", "appenders": [{ "type": "stderr" }] }), LogLevel::ALL)]
fn test_levels(#[case] value: serde_json::Value, #[case] expected: LogLevel) {
	let logger = logger_from_config(&ConfigNode::from_value(value)).unwrap();
	assert_eq!(logger.level(), expected);
}

#[rstest]
fn test_unknown_level() {
	let err = logger_from_yaml(b"name: it.bad-level\nlevel: LOUD\nappenders: [{type: console}]\n").unwrap_err();
	assert!(matches!(err, LoggingError::UnknownLevel(ref level) if level == "LOUD"));
}

#[rstest]
#[case(b"name: it.no-appenders\nappenders: []\n".as_slice())]
#[case(b"name: it.no-appenders\n".as_slice())]
fn test_no_appenders(#[case] document: &[u8]) {
	let err = logger_from_yaml(document).unwrap_err();
	assert!(matches!(err, LoggingError::NoAppenders(ref name) if name == "it.no-appenders"));
}

#[rstest]
fn test_missing_name() {
	let err = logger_from_yaml(b"appenders: [{type: console}]\n").unwrap_err();
	assert!(matches!(err, LoggingError::MissingField(ref key) if key == "name"));
}

#[rstest]
fn test_invalid_time_format() {
	let err = logger_from_yaml(b"name: it.bad-time\ntime: '%Q'\nappenders: [{type: console}]\n").unwrap_err();
	assert!(matches!(err, LoggingError::InvalidTimeFormat(_)));
}

#[rstest]
#[serial(logger_registry)]
fn test_from_json_file() {
	let dir = tempfile::tempdir().unwrap();
	let log_path = dir.path().join("json.log");
	let config_path = dir.path().join("logger.json");
	let mut config = fs::File::create(&config_path).unwrap();
	config
		.write_all(file_logger("it.json-file", &log_path, "INFO").to_string().as_bytes())
		.unwrap();

	let logger = logger_from_file(&config_path).unwrap();
	logger.warn("from json");

	assert_eq!(fs::read_to_string(&log_path).unwrap(), "it.json-file WARN : from json\n");
}
