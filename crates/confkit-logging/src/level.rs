//! Numeric log levels
//!
//! Levels are plain numbers so configurations may use values between the
//! named ones. A record passes a logger when its level is at least the
//! logger's threshold.

use std::fmt;
use std::str::FromStr;

/// Defaults to [`LogLevel::ALL`]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct LogLevel(pub u32);

impl LogLevel {
	pub const ALL: LogLevel = LogLevel(0);
	pub const TRACE: LogLevel = LogLevel(10);
	pub const DEBUG: LogLevel = LogLevel(20);
	pub const INFO: LogLevel = LogLevel(30);
	pub const LOG: LogLevel = LogLevel(40);
	pub const WARN: LogLevel = LogLevel(50);
	pub const ERROR: LogLevel = LogLevel(60);
	pub const FATAL: LogLevel = LogLevel(70);
	pub const NONE: LogLevel = LogLevel(100);

	const NAMED: [(&'static str, LogLevel); 9] = [
		("ALL", LogLevel::ALL),
		("TRACE", LogLevel::TRACE),
		("DEBUG", LogLevel::DEBUG),
		("INFO", LogLevel::INFO),
		("LOG", LogLevel::LOG),
		("WARN", LogLevel::WARN),
		("ERROR", LogLevel::ERROR),
		("FATAL", LogLevel::FATAL),
		("NONE", LogLevel::NONE),
	];

	/// Look up a symbolic name, ignoring case
	pub fn from_name(name: &str) -> Option<Self> {
		let name = name.trim();
		Self::NAMED
			.iter()
			.find(|(known, _)| known.eq_ignore_ascii_case(name))
			.map(|&(_, level)| level)
	}

	/// The symbolic name, if this level has one
	pub fn name(self) -> Option<&'static str> {
		Self::NAMED
			.iter()
			.find(|(_, level)| *level == self)
			.map(|&(name, _)| name)
	}

	pub fn value(self) -> u32 {
		self.0
	}
}

impl fmt::Display for LogLevel {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self.name() {
			Some(name) => f.write_str(name),
			None => write!(f, "{}", self.0),
		}
	}
}

/// Parses a number first, then a symbolic name
///
/// # Examples
///
/// ```
/// use confkit_logging::LogLevel;
///
/// assert_eq!("35".parse::<LogLevel>().unwrap(), LogLevel(35));
/// assert_eq!("warn".parse::<LogLevel>().unwrap(), LogLevel::WARN);
/// assert!("verbose".parse::<LogLevel>().is_err());
/// ```
impl FromStr for LogLevel {
	type Err = String;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		if let Ok(value) = s.trim().parse::<u32>() {
			return Ok(LogLevel(value));
		}
		Self::from_name(s).ok_or_else(|| s.to_string())
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;

	#[rstest]
	#[case("all", LogLevel::ALL)]
	#[case("Trace", LogLevel::TRACE)]
	#[case("DEBUG", LogLevel::DEBUG)]
	#[case("info", LogLevel::INFO)]
	#[case("log", LogLevel::LOG)]
	#[case("WaRn", LogLevel::WARN)]
	#[case("error", LogLevel::ERROR)]
	#[case("fatal", LogLevel::FATAL)]
	#[case("none", LogLevel::NONE)]
	#[case("0", LogLevel::ALL)]
	#[case("45", LogLevel(45))]
	#[case(" 60 ", LogLevel::ERROR)]
	fn test_parse(#[case] input: &str, #[case] expected: LogLevel) {
		assert_eq!(input.parse::<LogLevel>().unwrap(), expected);
	}

	#[rstest]
	#[case("verbose")]
	#[case("-5")]
	#[case("")]
	fn test_parse_rejects(#[case] input: &str) {
		assert!(input.parse::<LogLevel>().is_err());
	}

	#[rstest]
	fn test_ordering() {
		assert!(LogLevel::ALL < LogLevel::TRACE);
		assert!(LogLevel::TRACE < LogLevel::DEBUG);
		assert!(LogLevel::DEBUG < LogLevel::INFO);
		assert!(LogLevel::INFO < LogLevel::LOG);
		assert!(LogLevel::LOG < LogLevel::WARN);
		assert!(LogLevel::WARN < LogLevel::ERROR);
		assert!(LogLevel::ERROR < LogLevel::FATAL);
		assert!(LogLevel::FATAL < LogLevel::NONE);
	}

	#[rstest]
	fn test_display() {
		assert_eq!(LogLevel::WARN.to_string(), "WARN");
		assert_eq!(LogLevel(42).to_string(), "42");
	}
}
