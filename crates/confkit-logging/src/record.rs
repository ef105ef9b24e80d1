use crate::level::LogLevel;
use chrono::format::{Item, StrftimeItems};
use chrono::{DateTime, Local};
use std::fmt::Write;

/// One message on its way to the appenders
#[derive(Debug, Clone)]
pub struct LogRecord {
	pub level: LogLevel,
	pub logger_name: String,
	pub message: String,
	pub time: DateTime<Local>,
	/// `time` rendered with the logger's time format
	pub timestamp: String,
}

impl LogRecord {
	pub fn new(level: LogLevel, logger_name: String, message: String, time_format: &str) -> Self {
		Self::at(Local::now(), level, logger_name, message, time_format)
	}

	pub fn at(
		time: DateTime<Local>,
		level: LogLevel,
		logger_name: String,
		message: String,
		time_format: &str,
	) -> Self {
		let mut timestamp = String::new();
		if write!(timestamp, "{}", time.format(time_format)).is_err() {
			timestamp = time.to_rfc3339();
		}
		Self {
			level,
			logger_name,
			message,
			time,
			timestamp,
		}
	}
}

/// Whether chrono accepts `format` as a strftime layout
pub fn is_valid_time_format(format: &str) -> bool {
	StrftimeItems::new(format).all(|item| !matches!(item, Item::Error))
}
