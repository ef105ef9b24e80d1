//! Logger construction errors

use confkit_conf::ConfigError;

pub type Result<T> = std::result::Result<T, LoggingError>;

#[non_exhaustive]
#[derive(Debug, thiserror::Error)]
pub enum LoggingError {
	#[error("Configuration error: {0}")]
	Config(#[from] ConfigError),

	#[error("Logger configuration is missing `{0}`")]
	MissingField(String),

	#[error("Invalid time format: {0:?}")]
	InvalidTimeFormat(String),

	#[error("Unknown log level: {0}")]
	UnknownLevel(String),

	/// A logger must have somewhere to write; silence it with `level: NONE`
	#[error("Logger `{0}` has no appenders; set `level: NONE` to silence it instead")]
	NoAppenders(String),

	#[error("Unknown appender type: {0}")]
	UnknownAppender(String),

	#[error("I/O error: {0}")]
	Io(#[from] std::io::Error),
}
