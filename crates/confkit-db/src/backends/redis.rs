//! Redis declarations
//!
//! ```yaml
//! type: redis
//! url: redis://:password@localhost:6379/0   # wins over host/database/credentials
//! host:
//!   addr: localhost
//!   port: 6379
//!   net: tcp            # or unix, then addr is the socket path
//! database: 0
//! username: default
//! password: secret
//! pool:
//!   maxactive: 16       # max pooled connections, 0 keeps the default
//!   lifetime: 30m       # drop connections older than this
//!   idletime: 5m        # drop connections idle for longer than this
//! timeout:
//!   pool: 2s            # wait for a free connection
//!   conn: 1s            # open a new connection
//! ```
//!
//! Pool settings apply whether the target comes from `url` or from the fields.

use crate::error::{DbError, Result};
use crate::kind::BackendKind;
use confkit_conf::ConfigNode;
use deadpool_redis::{Config as PoolConfig, Connection, Pool, Runtime, Timeouts};
use redis::{ConnectionAddr, ConnectionInfo, IntoConnectionInfo, RedisConnectionInfo};
use std::path::PathBuf;
use std::time::Duration;

const KIND: BackendKind = BackendKind::Redis;

/// Validated Redis target plus pool settings
#[derive(Debug, Clone)]
pub struct RedisOptions {
	info: ConnectionInfo,
	max_size: Option<usize>,
	timeouts: Timeouts,
	max_lifetime: Option<Duration>,
	idle_timeout: Option<Duration>,
}

impl RedisOptions {
	/// Translate a `type: redis` declaration
	pub fn from_config(node: &ConfigNode) -> Result<Self> {
		let info = match node.get_str("url")? {
			Some(url) => url
				.as_str()
				.into_connection_info()
				.map_err(|e| DbError::invalid_url(KIND, e))?,
			None => connection_info(node)?,
		};

		let mut options = Self {
			info,
			max_size: None,
			timeouts: Timeouts::default(),
			max_lifetime: None,
			idle_timeout: None,
		};

		if let Some(pool) = node.sub("pool")? {
			options.max_size = pool
				.get_u32("maxactive")?
				.filter(|&n| n != 0)
				.map(|n| n as usize);
			options.max_lifetime = pool.get_duration("lifetime")?;
			options.idle_timeout = pool.get_duration("idletime")?;
		}
		if let Some(timeout) = node.sub("timeout")? {
			options.timeouts.wait = timeout.get_duration("pool")?;
			options.timeouts.create = timeout.get_duration("conn")?;
		}

		Ok(options)
	}

	pub fn connection_info(&self) -> &ConnectionInfo {
		&self.info
	}

	pub fn max_size(&self) -> Option<usize> {
		self.max_size
	}

	pub fn timeouts(&self) -> &Timeouts {
		&self.timeouts
	}

	pub fn max_lifetime(&self) -> Option<Duration> {
		self.max_lifetime
	}

	pub fn idle_timeout(&self) -> Option<Duration> {
		self.idle_timeout
	}

	/// Create the pool
	///
	/// Connections are opened on first checkout, so an unreachable server is
	/// reported by [`RedisHandle::get`] rather than here.
	pub fn connect(&self) -> Result<RedisHandle> {
		let mut config = PoolConfig::from_connection_info(self.info.clone());
		let mut pool_config = config.get_pool_config();
		if let Some(max_size) = self.max_size {
			pool_config.max_size = max_size;
		}
		pool_config.timeouts = self.timeouts;
		config.pool = Some(pool_config);

		let pool = config.create_pool(Some(Runtime::Tokio1))?;
		Ok(RedisHandle {
			pool,
			max_lifetime: self.max_lifetime,
			idle_timeout: self.idle_timeout,
		})
	}

	/// One-line summary without credentials
	pub fn describe(&self) -> String {
		format!("addr={} database={}", self.info.addr, self.info.redis.db)
	}
}

fn connection_info(node: &ConfigNode) -> Result<ConnectionInfo> {
	let host = node
		.sub("host")?
		.ok_or_else(|| DbError::missing(KIND, node.key_path("host")))?;
	let addr = host
		.get_str("addr")?
		.ok_or_else(|| DbError::missing(KIND, host.key_path("addr")))?;

	let net = host.get_str("net")?.unwrap_or_else(|| "tcp".to_string());
	let addr = match net.to_ascii_lowercase().as_str() {
		"tcp" => {
			let port = KIND
				.normalize_port(host.get_u16("port")?)
				.unwrap_or_else(|| KIND.well_known_port());
			ConnectionAddr::Tcp(addr, port)
		}
		"unix" => ConnectionAddr::Unix(PathBuf::from(addr)),
		other => {
			return Err(DbError::invalid(
				KIND,
				host.key_path("net"),
				format!("unsupported network {:?}, expected tcp or unix", other),
			));
		}
	};

	Ok(ConnectionInfo {
		addr,
		redis: RedisConnectionInfo {
			db: node.get_i64("database")?.unwrap_or(0),
			username: node.get_str("username")?,
			password: node.get_str("password")?,
			..Default::default()
		},
	})
}

/// A Redis pool that enforces connection lifetime and idle limits
#[derive(Clone)]
pub struct RedisHandle {
	pool: Pool,
	max_lifetime: Option<Duration>,
	idle_timeout: Option<Duration>,
}

impl RedisHandle {
	/// Check out a connection
	///
	/// Pooled connections past their lifetime or idle limit are dropped first.
	pub async fn get(&self) -> Result<Connection> {
		self.evict_expired();
		Ok(self.pool.get().await?)
	}

	pub fn pool(&self) -> &Pool {
		&self.pool
	}

	/// Drop idle connections past their lifetime or idle limit
	pub fn evict_expired(&self) -> usize {
		if self.max_lifetime.is_none() && self.idle_timeout.is_none() {
			return 0;
		}
		let lifetime = self.max_lifetime;
		let idle = self.idle_timeout;
		let result = self.pool.retain(|_, metrics| {
			lifetime.is_none_or(|max| metrics.age() < max)
				&& idle.is_none_or(|max| metrics.last_used() < max)
		});
		if !result.removed.is_empty() {
			tracing::debug!(removed = result.removed.len(), "Evicted expired Redis connections");
		}
		result.removed.len()
	}

	pub fn close(&self) {
		self.pool.close();
	}
}

impl std::fmt::Debug for RedisHandle {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_struct("RedisHandle")
			.field("status", &self.pool.status())
			.field("max_lifetime", &self.max_lifetime)
			.field("idle_timeout", &self.idle_timeout)
			.finish()
	}
}
