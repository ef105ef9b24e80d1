//! Configuration tree
//!
//! [`ConfigNode`] owns a parsed document (or a piece of one) together with the
//! dotted path it was reached by, so errors can name the exact field that was
//! wrong (`database[1].host.addr`).

use crate::duration::parse_duration;
use crate::error::{ConfigError, Result};
use serde_json::Value;
use std::fs;
use std::path::Path;
use std::time::Duration;

/// A read-only node in a configuration document
#[derive(Debug, Clone, PartialEq)]
pub struct ConfigNode {
	value: Value,
	path: String,
}

impl ConfigNode {
	/// Wrap an already parsed value as a document root
	pub fn from_value(value: Value) -> Self {
		Self {
			value,
			path: String::new(),
		}
	}

	/// Parse a YAML document
	///
	/// # Examples
	///
	/// ```
	/// use confkit_conf::ConfigNode;
	///
	/// let node = ConfigNode::from_yaml(b"name: app\nlevel: 30").unwrap();
	/// assert_eq!(node.get_i64("level").unwrap(), Some(30));
	/// ```
	pub fn from_yaml(input: &[u8]) -> Result<Self> {
		let value: Value = serde_yaml::from_slice(input)?;
		Ok(Self::from_value(value))
	}

	/// Parse a JSON document
	///
	/// # Examples
	///
	/// ```
	/// use confkit_conf::ConfigNode;
	///
	/// let node = ConfigNode::from_json(br#"{"name": "app"}"#).unwrap();
	/// assert_eq!(node.get_str("name").unwrap().as_deref(), Some("app"));
	/// ```
	pub fn from_json(input: &[u8]) -> Result<Self> {
		let value: Value = serde_json::from_slice(input)?;
		Ok(Self::from_value(value))
	}

	/// Read and parse a YAML file
	pub fn from_yaml_file(path: impl AsRef<Path>) -> Result<Self> {
		let bytes = fs::read(path.as_ref())?;
		Self::from_yaml(&bytes)
	}

	/// Read and parse a JSON file
	pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self> {
		let bytes = fs::read(path.as_ref())?;
		Self::from_json(&bytes)
	}

	/// Read and parse a file, choosing the format from its extension
	///
	/// `.yml` and `.yaml` are read as YAML, `.json` as JSON.
	pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
		let path = path.as_ref();
		let extension = path
			.extension()
			.and_then(|ext| ext.to_str())
			.map(str::to_ascii_lowercase);
		match extension.as_deref() {
			Some("yml") | Some("yaml") => Self::from_yaml_file(path),
			Some("json") => Self::from_json_file(path),
			_ => Err(ConfigError::UnsupportedFormat(path.display().to_string())),
		}
	}

	/// The raw value of this node
	pub fn value(&self) -> &Value {
		&self.value
	}

	/// Dotted path of this node from the document root (empty for the root)
	pub fn path(&self) -> &str {
		&self.path
	}

	pub fn is_array(&self) -> bool {
		self.value.is_array()
	}

	pub fn is_object(&self) -> bool {
		self.value.is_object()
	}

	/// Full path of `key` below this node, for error messages
	pub fn key_path(&self, key: &str) -> String {
		match (self.path.is_empty(), key.is_empty()) {
			(_, true) => self.path.clone(),
			(true, false) => key.to_string(),
			(false, false) => format!("{}.{}", self.path, key),
		}
	}

	/// Look up a raw value by dotted key
	///
	/// An empty key refers to the node itself. `null` counts as absent.
	pub fn lookup(&self, key: &str) -> Option<&Value> {
		if key.is_empty() {
			return Some(&self.value).filter(|v| !v.is_null());
		}
		let mut current = &self.value;
		for segment in key.split('.') {
			current = current.as_object()?.get(segment)?;
		}
		Some(current).filter(|v| !v.is_null())
	}

	/// Whether `key` is present and not `null`
	pub fn contains(&self, key: &str) -> bool {
		self.lookup(key).is_some()
	}

	/// Read a scalar as text
	///
	/// Strings are returned as-is; numbers and booleans are rendered to text so
	/// that `port: 5432` and `port: "5432"` read the same way.
	pub fn get_str(&self, key: &str) -> Result<Option<String>> {
		match self.lookup(key) {
			None => Ok(None),
			Some(Value::String(s)) => Ok(Some(s.clone())),
			Some(Value::Number(n)) => Ok(Some(n.to_string())),
			Some(Value::Bool(b)) => Ok(Some(b.to_string())),
			Some(_) => Err(self.invalid_type(key, "a string")),
		}
	}

	/// Read a required string, failing with [`ConfigError::MissingField`]
	pub fn require_str(&self, key: &str) -> Result<String> {
		self.get_str(key)?
			.ok_or_else(|| ConfigError::MissingField(self.key_path(key)))
	}

	/// Read an integer
	pub fn get_i64(&self, key: &str) -> Result<Option<i64>> {
		match self.lookup(key) {
			None => Ok(None),
			Some(Value::Number(n)) => n
				.as_i64()
				.map(Some)
				.ok_or_else(|| self.invalid_type(key, "an integer")),
			Some(_) => Err(self.invalid_type(key, "an integer")),
		}
	}

	/// Read an integer that must fit in `u16` (ports)
	pub fn get_u16(&self, key: &str) -> Result<Option<u16>> {
		self.get_ranged(key)
	}

	/// Read an integer that must fit in `u32` (pool sizes)
	pub fn get_u32(&self, key: &str) -> Result<Option<u32>> {
		self.get_ranged(key)
	}

	/// Read an integer that must fit in `u64`
	pub fn get_u64(&self, key: &str) -> Result<Option<u64>> {
		self.get_ranged(key)
	}

	fn get_ranged<T: TryFrom<i64>>(&self, key: &str) -> Result<Option<T>> {
		match self.get_i64(key)? {
			None => Ok(None),
			Some(value) => T::try_from(value).map(Some).map_err(|_| ConfigError::OutOfRange {
				key: self.key_path(key),
				value,
			}),
		}
	}

	/// Read a boolean
	pub fn get_bool(&self, key: &str) -> Result<Option<bool>> {
		match self.lookup(key) {
			None => Ok(None),
			Some(Value::Bool(b)) => Ok(Some(*b)),
			Some(_) => Err(self.invalid_type(key, "a boolean")),
		}
	}

	/// Read a duration string such as `"30s"`
	///
	/// A malformed duration is an error, never a silent default.
	pub fn get_duration(&self, key: &str) -> Result<Option<Duration>> {
		match self.get_str(key)? {
			None => Ok(None),
			Some(text) => parse_duration(&text)
				.map(Some)
				.map_err(|source| ConfigError::InvalidDuration {
					key: self.key_path(key),
					source,
				}),
		}
	}

	/// Descend into a nested object
	pub fn sub(&self, key: &str) -> Result<Option<ConfigNode>> {
		match self.lookup(key) {
			None => Ok(None),
			Some(value @ Value::Object(_)) => Ok(Some(ConfigNode {
				value: value.clone(),
				path: self.key_path(key),
			})),
			Some(_) => Err(self.invalid_type(key, "an object")),
		}
	}

	/// Descend into an array, yielding one node per element
	///
	/// An empty key reads this node itself as the array.
	pub fn sub_array(&self, key: &str) -> Result<Option<Vec<ConfigNode>>> {
		let base = self.key_path(key);
		match self.lookup(key) {
			None => Ok(None),
			Some(Value::Array(items)) => Ok(Some(
				items
					.iter()
					.enumerate()
					.map(|(index, value)| ConfigNode {
						value: value.clone(),
						path: format!("{}[{}]", base, index),
					})
					.collect(),
			)),
			Some(_) => Err(self.invalid_type(key, "an array")),
		}
	}

	fn invalid_type(&self, key: &str, expected: &'static str) -> ConfigError {
		ConfigError::InvalidType {
			key: self.key_path(key),
			expected,
		}
	}
}

impl From<Value> for ConfigNode {
	fn from(value: Value) -> Self {
		Self::from_value(value)
	}
}
