//! # confkit
//!
//! Database connections and loggers from YAML or JSON configuration.
//!
//! One document can carry both a `database:` list and a `logger:`
//! declaration:
//!
//! ```yaml
//! database:
//!   - type: postgresql
//!     host: { addr: localhost }
//!     db: app
//!   - type: redis
//!     url: redis://localhost:6379/0
//! logger:
//!   name: app
//!   level: INFO
//!   appenders:
//!     - type: console
//! ```
//!
//! ## Feature Flags
//!
//! - `database` (default): [`db`], the MongoDB, PostgreSQL, MySQL and Redis
//!   factory
//! - `logging` (default): [`logging`], named loggers and their appenders
//!
//! [`conf`] is always available.

pub use confkit_conf as conf;
#[cfg(feature = "database")]
pub use confkit_db as db;
#[cfg(feature = "logging")]
pub use confkit_logging as logging;

pub use confkit_conf::{ConfigError, ConfigNode};

#[cfg(feature = "database")]
pub use confkit_db::{BackendKind, ConnectionRegistry, DbError};

#[cfg(feature = "logging")]
pub use confkit_logging::{LogLevel, Logger, LoggingError, get_logger};

/// Key of the logger declaration in a combined document
#[cfg(feature = "logging")]
pub const LOGGER_KEY: &str = "logger";

/// Configure the logger declared under `logger`, if the document has one
#[cfg(feature = "logging")]
pub fn logger_from_document(
	root: &ConfigNode,
) -> confkit_logging::Result<Option<std::sync::Arc<Logger>>> {
	match root.sub(LOGGER_KEY)? {
		Some(node) => confkit_logging::logger_from_config(&node).map(Some),
		None => Ok(None),
	}
}
