//! Pool settings for the relational engines
//!
//! Read from the `pool` and `timeout` sub-objects of a declaration:
//!
//! ```yaml
//! pool:
//!   max: 20         # max connections, 0 keeps the driver default
//!   min: 2          # connections kept open while idle
//!   lifetime: 30m   # close connections older than this
//!   idletime: 10m   # close connections idle for longer than this
//! timeout:
//!   conn: 5s        # how long to wait for a connection, including the first one
//! ```

use crate::error::{DbError, Result};
use crate::kind::BackendKind;
use confkit_conf::ConfigNode;
use sqlx::pool::PoolOptions;
use std::time::Duration;

/// Pool sizing and timeouts; absent fields keep sqlx's own defaults
#[non_exhaustive]
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PoolSettings {
	pub max_connections: Option<u32>,
	pub min_connections: Option<u32>,
	pub max_lifetime: Option<Duration>,
	pub idle_timeout: Option<Duration>,
	pub acquire_timeout: Option<Duration>,
}

impl PoolSettings {
	pub fn new() -> Self {
		Self::default()
	}

	/// Read pool settings from a backend declaration
	pub fn from_config(backend: BackendKind, node: &ConfigNode) -> Result<Self> {
		let mut settings = Self::new();

		if let Some(pool) = node.sub("pool")? {
			settings.max_connections = pool.get_u32("max")?.filter(|&max| max != 0);
			settings.min_connections = pool.get_u32("min")?;
			settings.max_lifetime = pool.get_duration("lifetime")?;
			settings.idle_timeout = pool.get_duration("idletime")?;
		}
		if let Some(timeout) = node.sub("timeout")? {
			settings.acquire_timeout = timeout.get_duration("conn")?;
		}

		settings.validate(backend)?;
		Ok(settings)
	}

	pub fn validate(&self, backend: BackendKind) -> Result<()> {
		if let (Some(min), Some(max)) = (self.min_connections, self.max_connections)
			&& min > max
		{
			return Err(DbError::invalid(
				backend,
				"pool.min",
				format!("min connections ({}) exceeds max connections ({})", min, max),
			));
		}
		Ok(())
	}

	/// Apply the configured values on top of an sqlx pool builder
	pub fn apply<DB: sqlx::Database>(&self, mut options: PoolOptions<DB>) -> PoolOptions<DB> {
		if let Some(max) = self.max_connections {
			options = options.max_connections(max);
		}
		if let Some(min) = self.min_connections {
			options = options.min_connections(min);
		}
		if let Some(lifetime) = self.max_lifetime {
			options = options.max_lifetime(lifetime);
		}
		if let Some(idle) = self.idle_timeout {
			options = options.idle_timeout(idle);
		}
		if let Some(timeout) = self.acquire_timeout {
			options = options.acquire_timeout(timeout);
		}
		options
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;
	use serde_json::json;

	fn settings(value: serde_json::Value) -> Result<PoolSettings> {
		PoolSettings::from_config(BackendKind::PostgreSql, &ConfigNode::from_value(value))
	}

	#[rstest]
	fn test_absent_sections_keep_defaults() {
		assert_eq!(settings(json!({})).unwrap(), PoolSettings::default());
	}

	#[rstest]
	fn test_reads_every_field() {
		let parsed = settings(json!({
			"pool": { "max": 20, "min": 2, "lifetime": "30m", "idletime": "10m" },
			"timeout": { "conn": "5s" },
		}))
		.unwrap();
		assert_eq!(parsed.max_connections, Some(20));
		assert_eq!(parsed.min_connections, Some(2));
		assert_eq!(parsed.max_lifetime, Some(Duration::from_secs(1800)));
		assert_eq!(parsed.idle_timeout, Some(Duration::from_secs(600)));
		assert_eq!(parsed.acquire_timeout, Some(Duration::from_secs(5)));
	}

	#[rstest]
	fn test_zero_max_keeps_default() {
		let parsed = settings(json!({ "pool": { "max": 0 } })).unwrap();
		assert_eq!(parsed.max_connections, None);
	}

	#[rstest]
	fn test_min_above_max_is_rejected() {
		let err = settings(json!({ "pool": { "max": 2, "min": 5 } })).unwrap_err();
		assert!(matches!(err, DbError::InvalidValue { ref field, .. } if field == "pool.min"));
	}

	#[rstest]
	fn test_malformed_duration_is_rejected() {
		let err = settings(json!({ "timeout": { "conn": "bogus" } })).unwrap_err();
		assert!(matches!(err, DbError::Config(_)));
	}
}
