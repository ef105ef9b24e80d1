//! Backend kinds

use std::fmt;

/// The storage backends a declaration can ask for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum BackendKind {
	/// Document store
	MongoDb,
	/// Relational engine, keyword/value DSN
	PostgreSql,
	/// Relational engine, URL DSN
	MySql,
	/// Key-value cache
	Redis,
}

impl BackendKind {
	pub const ALL: [BackendKind; 4] = [
		BackendKind::MongoDb,
		BackendKind::PostgreSql,
		BackendKind::MySql,
		BackendKind::Redis,
	];

	/// Match a declaration's `type` field, ignoring case
	///
	/// # Examples
	///
	/// ```
	/// use confkit_db::BackendKind;
	///
	/// assert_eq!(BackendKind::from_type_name("PostgreSQL"), Some(BackendKind::PostgreSql));
	/// assert_eq!(BackendKind::from_type_name("redis"), Some(BackendKind::Redis));
	/// assert_eq!(BackendKind::from_type_name("cassandra"), None);
	/// ```
	pub fn from_type_name(name: &str) -> Option<Self> {
		Self::ALL
			.into_iter()
			.find(|kind| kind.type_name().eq_ignore_ascii_case(name.trim()))
	}

	/// The value of `type` that selects this backend
	pub fn type_name(self) -> &'static str {
		match self {
			BackendKind::MongoDb => "mongodb",
			BackendKind::PostgreSql => "postgresql",
			BackendKind::MySql => "mysql",
			BackendKind::Redis => "redis",
		}
	}

	/// Human readable product name
	pub fn display_name(self) -> &'static str {
		match self {
			BackendKind::MongoDb => "MongoDB",
			BackendKind::PostgreSql => "PostgreSQL",
			BackendKind::MySql => "MySQL",
			BackendKind::Redis => "Redis",
		}
	}

	/// Conventional server port, omitted from addresses when given explicitly
	pub fn well_known_port(self) -> u16 {
		match self {
			BackendKind::MongoDb => 27017,
			BackendKind::PostgreSql => 5432,
			BackendKind::MySql => 3306,
			BackendKind::Redis => 6379,
		}
	}

	/// `None` for ports that mean "use the default": zero or the well-known port
	pub fn normalize_port(self, port: Option<u16>) -> Option<u16> {
		port.filter(|&p| p != 0 && p != self.well_known_port())
	}
}

impl fmt::Display for BackendKind {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.display_name())
	}
}
