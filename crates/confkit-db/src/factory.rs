//! Top-level factory: a document of backend declarations to a registry
//!
//! The document is either a bare list of declarations or an object whose
//! `database` key holds that list:
//!
//! ```yaml
//! database:
//!   - type: postgresql
//!     host: { addr: localhost }
//!   - type: redis
//!     host: { addr: localhost }
//! ```

use crate::backends::BackendOptions;
use crate::error::{DbError, Result};
use crate::registry::ConnectionRegistry;
use confkit_conf::ConfigNode;
use std::path::Path;

/// Key holding the declaration list when the document root is an object
pub const DATABASE_KEY: &str = "database";

/// The declaration list of a document
pub fn declarations(root: &ConfigNode) -> Result<Vec<ConfigNode>> {
	if root.is_array() {
		return Ok(root.sub_array("")?.unwrap_or_default());
	}
	if root.is_object()
		&& let Some(entries) = root.sub_array(DATABASE_KEY)?
	{
		return Ok(entries);
	}
	Err(DbError::InvalidDocument(format!(
		"expected a list of backends or a `{}` key holding one",
		DATABASE_KEY
	)))
}

/// Translate every declaration without connecting
///
/// Each entry maps to `None` when its `type` is not a known backend.
pub async fn translate(root: &ConfigNode) -> Result<Vec<(ConfigNode, Option<BackendOptions>)>> {
	let mut translated = Vec::new();
	for entry in declarations(root)? {
		let options = BackendOptions::from_config(&entry).await?;
		translated.push((entry, options));
	}
	Ok(translated)
}

/// Build a registry from a parsed document
///
/// Declarations are processed in order and each connection is opened before
/// the next entry is read. Unknown types are skipped with a warning, and a
/// later declaration of the same backend replaces the earlier handle. On the
/// first error every handle already opened by this call is closed and the
/// error is returned.
pub async fn connect(root: &ConfigNode) -> Result<ConnectionRegistry> {
	let mut registry = ConnectionRegistry::new();
	let outcome = populate(root, &mut registry).await;
	finish(registry, outcome).await
}

/// Hand out the registry, or close it when population failed
async fn finish(registry: ConnectionRegistry, outcome: Result<()>) -> Result<ConnectionRegistry> {
	match outcome {
		Ok(()) => Ok(registry),
		Err(e) => {
			tracing::debug!(opened = registry.len(), "Closing connections after failure");
			registry.close().await;
			Err(e)
		}
	}
}

async fn populate(root: &ConfigNode, registry: &mut ConnectionRegistry) -> Result<()> {
	for entry in declarations(root)? {
		let Some(options) = BackendOptions::from_config(&entry).await? else {
			tracing::warn!(
				entry = %entry.path(),
				type_name = %entry.get_str("type").ok().flatten().unwrap_or_default(),
				"Skipping unsupported backend type"
			);
			continue;
		};

		let kind = options.kind();
		tracing::debug!(backend = %kind, target = %options.describe(), "Connecting");
		let handle = options.connect().await?;
		tracing::info!(backend = %kind, "Connected");

		if let Some(replaced) = registry.insert(handle) {
			tracing::warn!(backend = %kind, entry = %entry.path(), "Backend declared twice, replacing earlier connection");
			replaced.close().await;
		}
	}
	Ok(())
}

/// Parse a YAML document and build its registry
pub async fn from_yaml(input: &[u8]) -> Result<ConnectionRegistry> {
	connect(&ConfigNode::from_yaml(input)?).await
}

/// Parse a JSON document and build its registry
pub async fn from_json(input: &[u8]) -> Result<ConnectionRegistry> {
	connect(&ConfigNode::from_json(input)?).await
}

pub async fn from_yaml_file(path: impl AsRef<Path>) -> Result<ConnectionRegistry> {
	connect(&ConfigNode::from_yaml_file(path)?).await
}

pub async fn from_json_file(path: impl AsRef<Path>) -> Result<ConnectionRegistry> {
	connect(&ConfigNode::from_json_file(path)?).await
}

/// Load a file by extension (`.yml`, `.yaml`, `.json`) and build its registry
pub async fn from_file(path: impl AsRef<Path>) -> Result<ConnectionRegistry> {
	connect(&ConfigNode::from_file(path)?).await
}
