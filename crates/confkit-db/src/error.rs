//! Database factory error types

use crate::kind::BackendKind;
use confkit_conf::ConfigError;

/// Result type for the database factory
pub type Result<T> = std::result::Result<T, DbError>;

/// Errors raised while translating declarations or opening connections
#[non_exhaustive]
#[derive(Debug, thiserror::Error)]
pub enum DbError {
	/// A field could not be read from the configuration tree
	#[error("Configuration error: {0}")]
	Config(#[from] ConfigError),

	/// The document does not hold a list of backend declarations
	#[error("Invalid database document: {0}")]
	InvalidDocument(String),

	/// A field the backend cannot do without is absent
	#[error("{backend} configuration is missing `{field}`")]
	MissingField { backend: BackendKind, field: String },

	/// The `url` field was rejected by the driver's own parser
	#[error("Invalid {backend} url: {reason}")]
	InvalidUrl { backend: BackendKind, reason: String },

	/// A field is present but holds a value the driver does not accept
	#[error("Invalid {backend} `{field}`: {reason}")]
	InvalidValue {
		backend: BackendKind,
		field: String,
		reason: String,
	},

	#[error("SQL driver error: {0}")]
	Sqlx(#[from] sqlx::Error),

	#[error("MongoDB error: {0}")]
	MongoDb(#[from] mongodb::error::Error),

	#[error("Redis error: {0}")]
	Redis(#[from] redis::RedisError),

	#[error("Failed to create Redis pool: {0}")]
	RedisPoolCreate(#[from] deadpool_redis::CreatePoolError),

	#[error("Failed to get connection from Redis pool: {0}")]
	RedisPool(#[from] deadpool_redis::PoolError),

	/// The registry holds no handle for the requested backend
	#[error("{0} is not initialized")]
	NotInitialized(BackendKind),
}

impl DbError {
	pub(crate) fn missing(backend: BackendKind, field: impl Into<String>) -> Self {
		DbError::MissingField {
			backend,
			field: field.into(),
		}
	}

	pub(crate) fn invalid(
		backend: BackendKind,
		field: impl Into<String>,
		reason: impl ToString,
	) -> Self {
		DbError::InvalidValue {
			backend,
			field: field.into(),
			reason: reason.to_string(),
		}
	}

	pub(crate) fn invalid_url(backend: BackendKind, reason: impl ToString) -> Self {
		DbError::InvalidUrl {
			backend,
			reason: reason.to_string(),
		}
	}

	/// Whether this error reports an unconfigured backend
	pub fn is_not_initialized(&self) -> bool {
		matches!(self, DbError::NotInitialized(_))
	}
}
