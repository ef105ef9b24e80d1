//! Per-engine option translation
//!
//! Each module turns one declaration object into the driver's own option type
//! without touching the network. [`BackendOptions::connect`] then opens the
//! handle the registry stores.

pub mod mongodb;
pub mod mysql;
pub mod postgres;
pub mod redis;

pub use self::mongodb::MongoDbOptions;
pub use self::mysql::MySqlOptions;
pub use self::postgres::PostgresOptions;
pub use self::redis::{RedisHandle, RedisOptions};

use crate::error::Result;
use crate::kind::BackendKind;
use crate::registry::Handle;
use confkit_conf::ConfigNode;

/// Options for one declared backend, ready to connect
#[derive(Debug, Clone)]
pub enum BackendOptions {
	MongoDb(MongoDbOptions),
	PostgreSql(PostgresOptions),
	MySql(MySqlOptions),
	Redis(RedisOptions),
}

impl BackendOptions {
	/// Translate one declaration
	///
	/// Returns `Ok(None)` when the `type` names an engine this crate does not
	/// know; such entries are skipped by the factory.
	pub async fn from_config(node: &ConfigNode) -> Result<Option<Self>> {
		let type_name = node.require_str("type")?;

		let Some(kind) = BackendKind::from_type_name(&type_name) else {
			return Ok(None);
		};

		let options = match kind {
			BackendKind::MongoDb => Self::MongoDb(MongoDbOptions::from_config(node).await?),
			BackendKind::PostgreSql => Self::PostgreSql(PostgresOptions::from_config(node)?),
			BackendKind::MySql => Self::MySql(MySqlOptions::from_config(node)?),
			BackendKind::Redis => Self::Redis(RedisOptions::from_config(node)?),
		};
		Ok(Some(options))
	}

	pub fn kind(&self) -> BackendKind {
		match self {
			Self::MongoDb(_) => BackendKind::MongoDb,
			Self::PostgreSql(_) => BackendKind::PostgreSql,
			Self::MySql(_) => BackendKind::MySql,
			Self::Redis(_) => BackendKind::Redis,
		}
	}

	/// Open the handle for this backend
	///
	/// PostgreSQL and MySQL verify the server with a ping; MongoDB and Redis
	/// connect lazily.
	pub async fn connect(self) -> Result<Handle> {
		Ok(match self {
			Self::MongoDb(options) => Handle::MongoDb(options.connect()?),
			Self::PostgreSql(options) => Handle::PostgreSql(options.connect().await?),
			Self::MySql(options) => Handle::MySql(options.connect().await?),
			Self::Redis(options) => Handle::Redis(options.connect()?),
		})
	}

	/// One-line summary without credentials
	pub fn describe(&self) -> String {
		match self {
			Self::MongoDb(options) => options.describe(),
			Self::PostgreSql(options) => options.describe(),
			Self::MySql(options) => options.describe(),
			Self::Redis(options) => options.describe(),
		}
	}
}
