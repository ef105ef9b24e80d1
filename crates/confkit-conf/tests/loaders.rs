//! Loading configuration documents from bytes and files

use confkit_conf::{ConfigError, ConfigNode};
use rstest::rstest;
use std::io::Write;
use tempfile::Builder;

const YAML: &str = "
database:
  - type: redis
    host:
      addr: localhost
";

const JSON: &str = r#"{"database": [{"type": "redis", "host": {"addr": "localhost"}}]}"#;

#[rstest]
fn test_yaml_and_json_produce_the_same_tree() {
	let yaml = ConfigNode::from_yaml(YAML.as_bytes()).unwrap();
	let json = ConfigNode::from_json(JSON.as_bytes()).unwrap();
	assert_eq!(yaml.value(), json.value());
}

#[rstest]
#[case("yaml", YAML)]
#[case("yml", YAML)]
#[case("json", JSON)]
fn test_from_file_picks_format_by_extension(#[case] extension: &str, #[case] body: &str) {
	let mut file = Builder::new()
		.suffix(&format!(".{}", extension))
		.tempfile()
		.unwrap();
	file.write_all(body.as_bytes()).unwrap();

	let node = ConfigNode::from_file(file.path()).unwrap();
	let entries = node.sub_array("database").unwrap().unwrap();
	assert_eq!(entries.len(), 1);
	assert_eq!(entries[0].get_str("type").unwrap().as_deref(), Some("redis"));
	assert_eq!(
		entries[0].get_str("host.addr").unwrap().as_deref(),
		Some("localhost")
	);
}

#[rstest]
fn test_from_file_rejects_unknown_extension() {
	let file = Builder::new().suffix(".toml").tempfile().unwrap();
	let err = ConfigNode::from_file(file.path()).unwrap_err();
	assert!(matches!(err, ConfigError::UnsupportedFormat(_)));
}

#[rstest]
fn test_missing_file_is_io_error() {
	let err = ConfigNode::from_yaml_file("/definitely/not/here.yaml").unwrap_err();
	assert!(matches!(err, ConfigError::Io(_)));
}

#[rstest]
fn test_malformed_documents() {
	assert!(matches!(
		ConfigNode::from_yaml(b"key: [unterminated").unwrap_err(),
		ConfigError::Yaml(_)
	));
	assert!(matches!(
		ConfigNode::from_json(b"{\"key\":").unwrap_err(),
		ConfigError::Json(_)
	));
}
