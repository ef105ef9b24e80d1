//! Handles produced by the factory, keyed by backend kind

use crate::backends::RedisHandle;
use crate::error::{DbError, Result};
use crate::kind::BackendKind;
use mongodb::{Client, ClientSession};
use sqlx::{MySqlPool, PgPool};
use std::collections::HashMap;

/// An open handle for one backend
#[derive(Debug, Clone)]
pub enum Handle {
	MongoDb(Client),
	PostgreSql(PgPool),
	MySql(MySqlPool),
	Redis(RedisHandle),
}

impl Handle {
	pub fn kind(&self) -> BackendKind {
		match self {
			Handle::MongoDb(_) => BackendKind::MongoDb,
			Handle::PostgreSql(_) => BackendKind::PostgreSql,
			Handle::MySql(_) => BackendKind::MySql,
			Handle::Redis(_) => BackendKind::Redis,
		}
	}

	/// Release the handle's connections
	pub async fn close(self) {
		match self {
			Handle::MongoDb(client) => client.shutdown().await,
			Handle::PostgreSql(pool) => pool.close().await,
			Handle::MySql(pool) => pool.close().await,
			Handle::Redis(handle) => handle.close(),
		}
	}
}

/// Zero or one handle per backend kind
///
/// Built once by [`crate::connect`] and read-only afterwards. Each getter
/// fails with [`DbError::NotInitialized`] when its backend was not declared.
///
/// Handles cannot be added from outside the factory:
///
/// ```compile_fail
/// # async fn example() -> confkit_db::Result<()> {
/// let mut registry = confkit_db::from_yaml(b"[]").await?;
/// let other = confkit_db::from_yaml(b"[]").await?;
/// registry.insert(confkit_db::Handle::Redis(other.redis_handle()?.clone()));
/// # Ok(())
/// # }
/// ```
#[derive(Debug)]
pub struct ConnectionRegistry {
	handles: HashMap<BackendKind, Handle>,
}

impl ConnectionRegistry {
	pub(crate) fn new() -> Self {
		Self {
			handles: HashMap::new(),
		}
	}

	/// Store a handle, returning the one it replaces
	pub(crate) fn insert(&mut self, handle: Handle) -> Option<Handle> {
		self.handles.insert(handle.kind(), handle)
	}

	fn get(&self, kind: BackendKind) -> Result<&Handle> {
		self.handles.get(&kind).ok_or(DbError::NotInitialized(kind))
	}

	/// Start a new session on the shared MongoDB client
	pub async fn mongodb_session(&self) -> Result<ClientSession> {
		let client = self.mongodb_client()?;
		Ok(client.start_session().await?)
	}

	pub fn mongodb_client(&self) -> Result<&Client> {
		match self.get(BackendKind::MongoDb)? {
			Handle::MongoDb(client) => Ok(client),
			_ => Err(DbError::NotInitialized(BackendKind::MongoDb)),
		}
	}

	pub fn postgres(&self) -> Result<&PgPool> {
		match self.get(BackendKind::PostgreSql)? {
			Handle::PostgreSql(pool) => Ok(pool),
			_ => Err(DbError::NotInitialized(BackendKind::PostgreSql)),
		}
	}

	pub fn mysql(&self) -> Result<&MySqlPool> {
		match self.get(BackendKind::MySql)? {
			Handle::MySql(pool) => Ok(pool),
			_ => Err(DbError::NotInitialized(BackendKind::MySql)),
		}
	}

	/// Check out one pooled Redis connection
	///
	/// Waits at most the configured `timeout.pool` for a free connection.
	pub async fn redis(&self) -> Result<deadpool_redis::Connection> {
		self.redis_handle()?.get().await
	}

	pub fn redis_pool(&self) -> Result<&deadpool_redis::Pool> {
		Ok(self.redis_handle()?.pool())
	}

	pub fn redis_handle(&self) -> Result<&RedisHandle> {
		match self.get(BackendKind::Redis)? {
			Handle::Redis(handle) => Ok(handle),
			_ => Err(DbError::NotInitialized(BackendKind::Redis)),
		}
	}

	pub fn contains(&self, kind: BackendKind) -> bool {
		self.handles.contains_key(&kind)
	}

	/// Configured kinds in declaration-independent, stable order
	pub fn kinds(&self) -> Vec<BackendKind> {
		let mut kinds: Vec<BackendKind> = self.handles.keys().copied().collect();
		kinds.sort();
		kinds
	}

	pub fn len(&self) -> usize {
		self.handles.len()
	}

	pub fn is_empty(&self) -> bool {
		self.handles.is_empty()
	}

	/// Close every handle
	pub async fn close(self) {
		for (kind, handle) in self.handles {
			tracing::debug!(backend = %kind, "Closing connection");
			handle.close().await;
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;

	#[rstest]
	#[tokio::test]
	async fn test_empty_registry_reports_not_initialized() {
		let registry = ConnectionRegistry::new();
		assert!(registry.is_empty());
		assert!(registry.kinds().is_empty());

		assert!(matches!(
			registry.mongodb_client(),
			Err(DbError::NotInitialized(BackendKind::MongoDb))
		));
		assert!(matches!(registry.mongodb_session().await, Err(ref e) if e.is_not_initialized()));
		assert!(matches!(
			registry.postgres(),
			Err(DbError::NotInitialized(BackendKind::PostgreSql))
		));
		assert!(matches!(registry.mysql(), Err(DbError::NotInitialized(BackendKind::MySql))));
		assert!(matches!(
			registry.redis().await,
			Err(DbError::NotInitialized(BackendKind::Redis))
		));
		assert!(matches!(registry.redis_pool(), Err(ref e) if e.is_not_initialized()));
	}
}
