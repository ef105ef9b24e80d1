//! Record layouts
//!
//! A layout is a pattern with `%` tokens:
//!
//! | token | replaced by      |
//! |-------|------------------|
//! | `%N`  | logger name      |
//! | `%T`  | timestamp        |
//! | `%L`  | level name       |
//! | `%M`  | message          |
//! | `%%`  | a literal `%`    |
//!
//! Any other text, including unrecognized tokens, is copied unchanged.

use crate::record::LogRecord;

pub const DEFAULT_LAYOUT: &str = "%N %T %L : %M";

#[derive(Debug, Clone, PartialEq, Eq)]
enum Segment {
	Literal(String),
	Name,
	Time,
	Level,
	Message,
}

/// A parsed layout pattern
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Layout {
	pattern: String,
	segments: Vec<Segment>,
}

impl Layout {
	pub fn new(pattern: &str) -> Self {
		let mut segments = Vec::new();
		let mut literal = String::new();
		let mut chars = pattern.chars().peekable();

		while let Some(c) = chars.next() {
			if c != '%' {
				literal.push(c);
				continue;
			}
			let token = match chars.peek() {
				Some('N') => Segment::Name,
				Some('T') => Segment::Time,
				Some('L') => Segment::Level,
				Some('M') => Segment::Message,
				Some('%') => {
					chars.next();
					literal.push('%');
					continue;
				}
				_ => {
					literal.push('%');
					continue;
				}
			};
			chars.next();
			if !literal.is_empty() {
				segments.push(Segment::Literal(std::mem::take(&mut literal)));
			}
			segments.push(token);
		}
		if !literal.is_empty() {
			segments.push(Segment::Literal(literal));
		}

		Self {
			pattern: pattern.to_string(),
			segments,
		}
	}

	pub fn pattern(&self) -> &str {
		&self.pattern
	}

	/// Render a record, without a trailing newline
	///
	/// # Examples
	///
	/// ```
	/// use confkit_logging::{Layout, LogLevel, LogRecord};
	///
	/// let record = LogRecord::new(LogLevel::WARN, "app".into(), "disk full".into(), "");
	/// assert_eq!(Layout::new("[%L] %N: %M (100%%)").format(&record), "[WARN] app: disk full (100%)");
	/// ```
	pub fn format(&self, record: &LogRecord) -> String {
		let mut out = String::with_capacity(self.pattern.len() + record.message.len() + 32);
		for segment in &self.segments {
			match segment {
				Segment::Literal(text) => out.push_str(text),
				Segment::Name => out.push_str(&record.logger_name),
				Segment::Time => out.push_str(&record.timestamp),
				Segment::Level => out.push_str(&record.level.to_string()),
				Segment::Message => out.push_str(&record.message),
			}
		}
		out
	}
}

impl Default for Layout {
	fn default() -> Self {
		Self::new(DEFAULT_LAYOUT)
	}
}
