use crate::appender::Appender;
use crate::level::LogLevel;
use crate::record::LogRecord;
use parking_lot::RwLock;
use std::fmt;
use std::sync::Arc;

pub const DEFAULT_TIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

struct LoggerState {
	level: LogLevel,
	time_format: String,
	appenders: Vec<Arc<dyn Appender>>,
}

/// A named logger writing to a list of appenders
///
/// All methods take `&self`; a logger is shared as `Arc<Logger>` and may be
/// reconfigured while other threads log through it.
pub struct Logger {
	name: String,
	state: RwLock<LoggerState>,
}

impl Logger {
	/// A logger at level ALL with no appenders
	pub fn new(name: impl Into<String>) -> Self {
		Self {
			name: name.into(),
			state: RwLock::new(LoggerState {
				level: LogLevel::ALL,
				time_format: DEFAULT_TIME_FORMAT.to_string(),
				appenders: Vec::new(),
			}),
		}
	}

	pub fn name(&self) -> &str {
		&self.name
	}

	pub fn level(&self) -> LogLevel {
		self.state.read().level
	}

	pub fn set_level(&self, level: LogLevel) {
		self.state.write().level = level;
	}

	pub fn time_format(&self) -> String {
		self.state.read().time_format.clone()
	}

	pub fn set_time_format(&self, format: impl Into<String>) {
		self.state.write().time_format = format.into();
	}

	pub fn add_appender(&self, appender: Arc<dyn Appender>) {
		self.state.write().appenders.push(appender);
	}

	/// Replace every appender at once
	pub fn set_appenders(&self, appenders: Vec<Arc<dyn Appender>>) {
		self.state.write().appenders = appenders;
	}

	pub fn appenders(&self) -> Vec<Arc<dyn Appender>> {
		self.state.read().appenders.clone()
	}

	/// Whether a record at `level` would be written
	///
	/// A logger at NONE writes nothing.
	pub fn enabled(&self, level: LogLevel) -> bool {
		let threshold = self.level();
		threshold != LogLevel::NONE && level >= threshold
	}

	/// Write `message` at `level` to every appender
	///
	/// A failing appender is reported through `tracing` and does not stop the
	/// others.
	pub fn log(&self, level: LogLevel, message: impl Into<String>) {
		let (record, appenders) = {
			let state = self.state.read();
			if state.level == LogLevel::NONE || level < state.level {
				return;
			}
			let record = LogRecord::new(level, self.name.clone(), message.into(), &state.time_format);
			(record, state.appenders.clone())
		};

		for appender in appenders {
			if let Err(e) = appender.append(&record) {
				tracing::error!(
					logger = %self.name,
					appender = appender.kind(),
					error = %e,
					"Failed to write log record"
				);
			}
		}
	}

	pub fn trace(&self, message: impl Into<String>) {
		self.log(LogLevel::TRACE, message);
	}

	pub fn debug(&self, message: impl Into<String>) {
		self.log(LogLevel::DEBUG, message);
	}

	pub fn info(&self, message: impl Into<String>) {
		self.log(LogLevel::INFO, message);
	}

	/// Write at level LOG, between INFO and WARN
	pub fn log_message(&self, message: impl Into<String>) {
		self.log(LogLevel::LOG, message);
	}

	pub fn warn(&self, message: impl Into<String>) {
		self.log(LogLevel::WARN, message);
	}

	pub fn error(&self, message: impl Into<String>) {
		self.log(LogLevel::ERROR, message);
	}

	pub fn fatal(&self, message: impl Into<String>) {
		self.log(LogLevel::FATAL, message);
	}

	/// Flush every appender, reporting failures through `tracing`
	pub fn flush(&self) {
		for appender in self.appenders() {
			if let Err(e) = appender.flush() {
				tracing::error!(logger = %self.name, appender = appender.kind(), error = %e, "Failed to flush appender");
			}
		}
	}
}

impl fmt::Debug for Logger {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		let state = self.state.read();
		let kinds: Vec<&str> = state.appenders.iter().map(|a| a.kind()).collect();
		f.debug_struct("Logger")
			.field("name", &self.name)
			.field("level", &state.level)
			.field("time_format", &state.time_format)
			.field("appenders", &kinds)
			.finish()
	}
}
