//! One document carrying both backend and logger declarations

use confkit::{BackendKind, ConfigNode, LogLevel, LoggingError, db, logger_from_document};
use rstest::rstest;

const DOCUMENT: &[u8] = b"
database:
  - type: redis
    host: { addr: 127.0.0.1, port: 1 }
logger:
  name: document.app
  level: warn
  appenders:
    - type: stderr
      layout: '%L %M'
";

#[rstest]
#[tokio::test]
async fn test_database_and_logger_from_one_document() {
	let root = ConfigNode::from_yaml(DOCUMENT).unwrap();

	let registry = db::connect(&root).await.unwrap();
	assert_eq!(registry.kinds(), vec![BackendKind::Redis]);
	registry.close().await;

	let logger = logger_from_document(&root).unwrap().unwrap();
	assert_eq!(logger.name(), "document.app");
	assert_eq!(logger.level(), LogLevel::WARN);
}

#[rstest]
fn test_document_without_logger() {
	let root = ConfigNode::from_yaml(b"database: []\n").unwrap();
	assert!(logger_from_document(&root).unwrap().is_none());
}

#[rstest]
fn test_logger_errors_carry_the_document_path() {
	let root = ConfigNode::from_yaml(b"logger:\n  appenders: [{type: console}]\n").unwrap();
	let err = logger_from_document(&root).unwrap_err();
	assert!(matches!(err, LoggingError::MissingField(ref key) if key == "logger.name"));
}
