//! Duration strings
//!
//! A duration is one or more `<decimal><unit>` terms written back to back,
//! for example `"300ms"`, `"1.5h"` or `"2h45m"`. Valid units are `ns`, `us`
//! (or `µs`), `ms`, `s`, `m` and `h`. The bare string `"0"` is accepted as
//! zero. Negative durations are rejected.

use std::time::Duration;

const NANOS_PER_SEC: u128 = 1_000_000_000;

/// Reasons a duration string can be rejected
#[non_exhaustive]
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DurationError {
	#[error("empty duration")]
	Empty,

	#[error("negative duration {0:?}")]
	Negative(String),

	#[error("invalid number in duration {0:?}")]
	InvalidNumber(String),

	#[error("missing unit in duration {0:?}")]
	MissingUnit(String),

	#[error("unknown unit {unit:?} in duration {input:?}")]
	UnknownUnit { unit: String, input: String },

	#[error("duration {0:?} overflows")]
	Overflow(String),
}

fn unit_nanos(unit: &str) -> Option<u128> {
	match unit {
		"ns" => Some(1),
		"us" | "µs" | "μs" => Some(1_000),
		"ms" => Some(1_000_000),
		"s" => Some(NANOS_PER_SEC),
		"m" => Some(60 * NANOS_PER_SEC),
		"h" => Some(3_600 * NANOS_PER_SEC),
		_ => None,
	}
}

/// Parse a duration string
///
/// # Examples
///
/// ```
/// use confkit_conf::parse_duration;
/// use std::time::Duration;
///
/// assert_eq!(parse_duration("0s").unwrap(), Duration::ZERO);
/// assert_eq!(parse_duration("5m").unwrap(), Duration::from_secs(300));
/// assert_eq!(parse_duration("24h").unwrap(), Duration::from_secs(86_400));
/// assert_eq!(parse_duration("1h30m").unwrap(), Duration::from_secs(5_400));
/// assert_eq!(parse_duration("1.5s").unwrap(), Duration::from_millis(1_500));
/// assert!(parse_duration("bogus").is_err());
/// ```
pub fn parse_duration(input: &str) -> Result<Duration, DurationError> {
	let trimmed = input.trim();
	if trimmed.is_empty() {
		return Err(DurationError::Empty);
	}
	if trimmed.starts_with('-') {
		return Err(DurationError::Negative(input.to_string()));
	}
	let body = trimmed.strip_prefix('+').unwrap_or(trimmed);
	if body == "0" {
		return Ok(Duration::ZERO);
	}
	if body.is_empty() {
		return Err(DurationError::InvalidNumber(input.to_string()));
	}

	let mut total: u128 = 0;
	let mut rest = body;
	while !rest.is_empty() {
		let number_end = rest
			.find(|c: char| !(c.is_ascii_digit() || c == '.'))
			.unwrap_or(rest.len());
		let number = &rest[..number_end];
		rest = &rest[number_end..];

		let unit_end = rest
			.find(|c: char| c.is_ascii_digit() || c == '.')
			.unwrap_or(rest.len());
		let unit = &rest[..unit_end];
		rest = &rest[unit_end..];

		if number.is_empty() {
			return Err(DurationError::InvalidNumber(input.to_string()));
		}
		if unit.is_empty() {
			return Err(DurationError::MissingUnit(input.to_string()));
		}
		let scale = unit_nanos(unit).ok_or_else(|| DurationError::UnknownUnit {
			unit: unit.to_string(),
			input: input.to_string(),
		})?;

		let term = term_nanos(number, scale, input)?;
		total = total
			.checked_add(term)
			.ok_or_else(|| DurationError::Overflow(input.to_string()))?;
	}

	let secs = u64::try_from(total / NANOS_PER_SEC)
		.map_err(|_| DurationError::Overflow(input.to_string()))?;
	// Remainder of a division by 1e9 always fits in u32
	let nanos = (total % NANOS_PER_SEC) as u32;
	Ok(Duration::new(secs, nanos))
}

fn term_nanos(number: &str, scale: u128, input: &str) -> Result<u128, DurationError> {
	let (whole, fraction) = number.split_once('.').unwrap_or((number, ""));
	if fraction.contains('.') || (whole.is_empty() && fraction.is_empty()) {
		return Err(DurationError::InvalidNumber(input.to_string()));
	}

	let whole: u128 = if whole.is_empty() {
		0
	} else {
		whole
			.parse()
			.map_err(|_| DurationError::Overflow(input.to_string()))?
	};
	let mut nanos = whole
		.checked_mul(scale)
		.ok_or_else(|| DurationError::Overflow(input.to_string()))?;

	if !fraction.is_empty() {
		// Digits past nanosecond precision of an hour cannot change the result
		let digits = &fraction[..fraction.len().min(18)];
		let value: u128 = digits
			.parse()
			.map_err(|_| DurationError::InvalidNumber(input.to_string()))?;
		let denominator = 10u128.pow(digits.len() as u32);
		nanos = nanos
			.checked_add(value * scale / denominator)
			.ok_or_else(|| DurationError::Overflow(input.to_string()))?;
	}
	Ok(nanos)
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;

	#[rstest]
	#[case("0", Duration::ZERO)]
	#[case("0s", Duration::ZERO)]
	#[case("5m", Duration::from_secs(300))]
	#[case("24h", Duration::from_secs(86_400))]
	#[case("250ms", Duration::from_millis(250))]
	#[case("10us", Duration::from_micros(10))]
	#[case("10µs", Duration::from_micros(10))]
	#[case("7ns", Duration::from_nanos(7))]
	#[case("2h45m", Duration::from_secs(9_900))]
	#[case("1.5h", Duration::from_secs(5_400))]
	#[case(".5s", Duration::from_millis(500))]
	#[case("+3s", Duration::from_secs(3))]
	#[case(" 1m ", Duration::from_secs(60))]
	fn test_parse_duration_accepts(#[case] input: &str, #[case] expected: Duration) {
		assert_eq!(parse_duration(input).unwrap(), expected);
	}

	#[rstest]
	#[case("", DurationError::Empty)]
	#[case("bogus", DurationError::InvalidNumber("bogus".to_string()))]
	#[case("10", DurationError::MissingUnit("10".to_string()))]
	#[case("-5s", DurationError::Negative("-5s".to_string()))]
	#[case("1.2.3s", DurationError::InvalidNumber("1.2.3s".to_string()))]
	fn test_parse_duration_rejects(#[case] input: &str, #[case] expected: DurationError) {
		assert_eq!(parse_duration(input).unwrap_err(), expected);
	}

	#[rstest]
	fn test_parse_duration_unknown_unit() {
		let err = parse_duration("3d").unwrap_err();
		assert!(matches!(err, DurationError::UnknownUnit { ref unit, .. } if unit == "d"));
	}

	#[rstest]
	#[case("99999999999999999999999999999h")]
	#[case("94522879700260684295381835.9h")]
	#[case("20000000000000000000s")]
	fn test_parse_duration_overflow(#[case] input: &str) {
		let err = parse_duration(input).unwrap_err();
		assert!(matches!(err, DurationError::Overflow(_)));
	}
}
