//! Configuration error types

use crate::duration::DurationError;

/// Result type for configuration lookups
pub type Result<T> = std::result::Result<T, ConfigError>;

/// Errors raised while loading a document or reading a field from it
#[non_exhaustive]
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
	#[error("IO error: {0}")]
	Io(#[from] std::io::Error),

	#[error("YAML error: {0}")]
	Yaml(#[from] serde_yaml::Error),

	#[error("JSON error: {0}")]
	Json(#[from] serde_json::Error),

	#[error("Unsupported configuration format: {0}")]
	UnsupportedFormat(String),

	#[error("Missing required field `{0}`")]
	MissingField(String),

	#[error("Field `{key}` has an invalid type: expected {expected}")]
	InvalidType { key: String, expected: &'static str },

	#[error("Field `{key}` is out of range: {value}")]
	OutOfRange { key: String, value: i64 },

	#[error("Field `{key}` holds an invalid duration: {source}")]
	InvalidDuration {
		key: String,
		#[source]
		source: DurationError,
	},
}

impl ConfigError {
	/// Path of the field this error refers to, when there is one
	pub fn key(&self) -> Option<&str> {
		match self {
			ConfigError::MissingField(key)
			| ConfigError::InvalidType { key, .. }
			| ConfigError::OutOfRange { key, .. }
			| ConfigError::InvalidDuration { key, .. } => Some(key),
			_ => None,
		}
	}
}
