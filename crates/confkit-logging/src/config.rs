//! Loggers from configuration
//!
//! ```yaml
//! name: app                        # required
//! level: INFO                      # name or number, defaults to ALL
//! time: "%Y-%m-%d %H:%M:%S"        # timestamp format for %T
//! appenders:                       # required, at least one
//!   - type: console                # console, stderr or file
//!     layout: "%N %T %L : %M"
//!   - type: file
//!     file: logs/app.log
//!     roll:
//!       duration: 24h              # 0s never rotates
//! ```
//!
//! Building is all-or-nothing: every appender is created before the named
//! logger is touched, so a bad declaration leaves an existing logger as it
//! was.

use crate::appender::{Appender, ConsoleAppender, StderrAppender};
use crate::error::{LoggingError, Result};
use crate::layout::{DEFAULT_LAYOUT, Layout};
use crate::level::LogLevel;
use crate::logger::{DEFAULT_TIME_FORMAT, Logger};
use crate::manager::get_logger;
use crate::record::is_valid_time_format;
use crate::rolling::{DEFAULT_ROTATION, RollingFileAppender};
use confkit_conf::{ConfigNode, parse_duration};
use std::path::Path;
use std::sync::Arc;
use std::time::Duration;

/// Build (or reconfigure) the named logger a declaration describes
pub fn logger_from_config(node: &ConfigNode) -> Result<Arc<Logger>> {
	let name = node
		.get_str("name")?
		.ok_or_else(|| LoggingError::MissingField(node.key_path("name")))?;

	let level = match node.get_str("level")? {
		Some(level) => level
			.parse::<LogLevel>()
			.map_err(LoggingError::UnknownLevel)?,
		None => LogLevel::ALL,
	};

	let time_format = node
		.get_str("time")?
		.unwrap_or_else(|| DEFAULT_TIME_FORMAT.to_string());
	if !is_valid_time_format(&time_format) {
		return Err(LoggingError::InvalidTimeFormat(time_format));
	}

	let declarations = node.sub_array("appenders")?.unwrap_or_default();
	if declarations.is_empty() {
		return Err(LoggingError::NoAppenders(name));
	}
	let appenders = declarations
		.iter()
		.map(appender_from_config)
		.collect::<Result<Vec<_>>>()?;

	let logger = get_logger(&name);
	logger.set_level(level);
	logger.set_time_format(time_format);
	logger.set_appenders(appenders);
	tracing::debug!(logger = %name, level = %level, "Configured logger");
	Ok(logger)
}

/// Build one appender from its declaration
pub fn appender_from_config(node: &ConfigNode) -> Result<Arc<dyn Appender>> {
	let kind = node
		.get_str("type")?
		.ok_or_else(|| LoggingError::MissingField(node.key_path("type")))?;
	let layout = Layout::new(
		node.get_str("layout")?
			.as_deref()
			.unwrap_or(DEFAULT_LAYOUT),
	);

	match kind.trim().to_ascii_lowercase().as_str() {
		"console" => Ok(Arc::new(ConsoleAppender::new(layout))),
		"stderr" => Ok(Arc::new(StderrAppender::new(layout))),
		"file" => {
			let file = node
				.get_str("file")?
				.ok_or_else(|| LoggingError::MissingField(node.key_path("file")))?;
			let interval = rotation_interval(node);
			Ok(Arc::new(RollingFileAppender::new(file, layout, interval)?))
		}
		_ => Err(LoggingError::UnknownAppender(kind)),
	}
}

/// `roll.duration`, tolerating malformed values
///
/// Absent means the default of 24h. A value that does not parse is reported
/// and also falls back to 24h rather than failing the logger. Zero disables
/// rotation.
fn rotation_interval(node: &ConfigNode) -> Option<Duration> {
	let key = "roll.duration";
	let parsed = match node.get_str(key) {
		Ok(None) => return Some(DEFAULT_ROTATION),
		Ok(Some(text)) => parse_duration(&text).map_err(|e| e.to_string()),
		Err(e) => Err(e.to_string()),
	};
	match parsed {
		Ok(interval) if interval.is_zero() => None,
		Ok(interval) => Some(interval),
		Err(reason) => {
			tracing::warn!(key = %node.key_path(key), %reason, "Invalid rotation interval, using 24h");
			Some(DEFAULT_ROTATION)
		}
	}
}

/// Parse a YAML declaration and build its logger
pub fn logger_from_yaml(input: &[u8]) -> Result<Arc<Logger>> {
	logger_from_config(&ConfigNode::from_yaml(input)?)
}

/// Parse a JSON declaration and build its logger
pub fn logger_from_json(input: &[u8]) -> Result<Arc<Logger>> {
	logger_from_config(&ConfigNode::from_json(input)?)
}

pub fn logger_from_yaml_file(path: impl AsRef<Path>) -> Result<Arc<Logger>> {
	logger_from_config(&ConfigNode::from_yaml_file(path)?)
}

pub fn logger_from_json_file(path: impl AsRef<Path>) -> Result<Arc<Logger>> {
	logger_from_config(&ConfigNode::from_json_file(path)?)
}

/// Load a file by extension (`.yml`, `.yaml`, `.json`) and build its logger
pub fn logger_from_file(path: impl AsRef<Path>) -> Result<Arc<Logger>> {
	logger_from_config(&ConfigNode::from_file(path)?)
}

const LOGGER_STUB: &str = "\
name: app  # required, loggers with the same name are shared
level: INFO  # optional, ALL TRACE DEBUG INFO LOG WARN ERROR FATAL NONE or a number, defaults to ALL
time: \"%Y-%m-%d %H:%M:%S\"  # optional timestamp format for %T
appenders:  # required, at least one; use level NONE to silence a logger
  - type: console  # console, stderr or file
    layout: \"%N %T %L : %M\"  # optional, %N name, %T time, %L level, %M message, %% percent
  - type: file
    file: logs/app.log  # required for file appenders
    roll:
      duration: 24h  # optional rotation interval, defaults to 24h, 0s never rotates
";

/// An annotated logger declaration
pub fn logger_config_stub() -> &'static str {
	LOGGER_STUB
}
