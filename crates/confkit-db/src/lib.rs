//! # confkit database factory
//!
//! Builds ready-to-use MongoDB, PostgreSQL, MySQL and Redis handles from a
//! declarative document.
//!
//! A document lists backend declarations, either at its root or under a
//! `database` key. Each declaration names its engine with `type` and carries
//! either a `url` or discrete fields (`host`, `db`, `username`, ...). The
//! factory translates every declaration into the driver's own options, opens
//! the connections in declared order and returns a [`ConnectionRegistry`]
//! holding at most one handle per engine.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! # async fn example() -> confkit_db::Result<()> {
//! let registry = confkit_db::from_yaml(b"
//! database:
//!   - type: postgresql
//!     host: { addr: localhost }
//!     db: app
//!     username: app
//!   - type: redis
//!     host: { addr: localhost }
//! ").await?;
//!
//! let pool = registry.postgres()?;
//! let mut conn = registry.redis().await?;
//! # let _ = (pool, &mut conn);
//! registry.close().await;
//! # Ok(())
//! # }
//! ```
//!
//! ## Behavior
//!
//! - `type` is matched case-insensitively; unknown types are skipped with a
//!   warning.
//! - A later declaration of the same engine replaces the earlier handle.
//! - The first failure closes every handle opened so far and is returned.
//! - PostgreSQL and MySQL are pinged on connect. MongoDB and Redis connect
//!   lazily.
//!
//! ## Module Organization
//!
//! - [`backends`]: per-engine option translation
//! - [`pool`]: pool settings shared by the relational engines
//! - [`factory`]: document to registry
//! - [`registry`]: the handle registry
//! - [`stub`]: annotated configuration stubs

pub mod backends;
pub mod error;
pub mod factory;
pub mod kind;
pub mod pool;
pub mod registry;
pub mod stub;

pub use backends::BackendOptions;
pub use error::{DbError, Result};
pub use factory::{connect, from_file, from_json, from_json_file, from_yaml, from_yaml_file, translate};
pub use kind::BackendKind;
pub use pool::PoolSettings;
pub use registry::{ConnectionRegistry, Handle};
pub use stub::{config_stub, generate_config_stub};
