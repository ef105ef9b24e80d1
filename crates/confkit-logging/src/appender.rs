//! Log sinks

use crate::layout::Layout;
use crate::record::LogRecord;
use parking_lot::Mutex;
use std::io::{self, Write};
use std::sync::Arc;

/// A destination for formatted records
///
/// Appenders are shared between threads; an I/O failure is returned to the
/// logger, which reports it and carries on with the next appender.
pub trait Appender: Send + Sync {
	fn append(&self, record: &LogRecord) -> io::Result<()>;

	fn flush(&self) -> io::Result<()> {
		Ok(())
	}

	/// Short name of the sink, as used in configuration (`console`, `file`, ...)
	fn kind(&self) -> &'static str;

	fn layout(&self) -> &Layout;
}

/// Writes to standard output
#[derive(Debug, Clone, Default)]
pub struct ConsoleAppender {
	layout: Layout,
}

impl ConsoleAppender {
	pub fn new(layout: Layout) -> Self {
		Self { layout }
	}
}

impl Appender for ConsoleAppender {
	fn append(&self, record: &LogRecord) -> io::Result<()> {
		let mut out = io::stdout().lock();
		writeln!(out, "{}", self.layout.format(record))
	}

	fn flush(&self) -> io::Result<()> {
		io::stdout().lock().flush()
	}

	fn kind(&self) -> &'static str {
		"console"
	}

	fn layout(&self) -> &Layout {
		&self.layout
	}
}

/// Writes to standard error
#[derive(Debug, Clone, Default)]
pub struct StderrAppender {
	layout: Layout,
}

impl StderrAppender {
	pub fn new(layout: Layout) -> Self {
		Self { layout }
	}
}

impl Appender for StderrAppender {
	fn append(&self, record: &LogRecord) -> io::Result<()> {
		let mut out = io::stderr().lock();
		writeln!(out, "{}", self.layout.format(record))
	}

	fn kind(&self) -> &'static str {
		"stderr"
	}

	fn layout(&self) -> &Layout {
		&self.layout
	}
}

/// Keeps formatted lines in memory
///
/// Clones share the same buffer, so a test can hand one clone to a logger
/// and inspect the other.
#[derive(Debug, Clone, Default)]
pub struct MemoryAppender {
	layout: Layout,
	lines: Arc<Mutex<Vec<String>>>,
}

impl MemoryAppender {
	pub fn new(layout: Layout) -> Self {
		Self {
			layout,
			lines: Arc::new(Mutex::new(Vec::new())),
		}
	}

	pub fn lines(&self) -> Vec<String> {
		self.lines.lock().clone()
	}

	pub fn len(&self) -> usize {
		self.lines.lock().len()
	}

	pub fn is_empty(&self) -> bool {
		self.lines.lock().is_empty()
	}

	pub fn clear(&self) {
		self.lines.lock().clear();
	}
}

impl Appender for MemoryAppender {
	fn append(&self, record: &LogRecord) -> io::Result<()> {
		self.lines.lock().push(self.layout.format(record));
		Ok(())
	}

	fn kind(&self) -> &'static str {
		"memory"
	}

	fn layout(&self) -> &Layout {
		&self.layout
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::level::LogLevel;
	use rstest::rstest;

	#[rstest]
	fn test_memory_appender_shares_buffer_between_clones() {
		let appender = MemoryAppender::new(Layout::new("%L %M"));
		let handle = appender.clone();

		appender
			.append(&LogRecord::new(LogLevel::INFO, "app".into(), "one".into(), ""))
			.unwrap();
		appender
			.append(&LogRecord::new(LogLevel::FATAL, "app".into(), "two".into(), ""))
			.unwrap();

		assert_eq!(handle.lines(), vec!["INFO one", "FATAL two"]);
		handle.clear();
		assert!(appender.is_empty());
	}

	#[rstest]
	fn test_kinds() {
		assert_eq!(ConsoleAppender::default().kind(), "console");
		assert_eq!(StderrAppender::default().kind(), "stderr");
		assert_eq!(MemoryAppender::default().kind(), "memory");
	}
}
