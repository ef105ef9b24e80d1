//! Subcommand implementations
//!
//! Each command writes its report to the given writer so it can be checked
//! without a terminal.

use anyhow::{Context, bail};
use colored::Colorize;
use confkit_conf::ConfigNode;
use confkit_db::{BackendKind, BackendOptions, factory};
use std::io::Write;
use std::path::Path;

/// Print a `database:` stub for `types`, optionally followed by a logger stub
pub fn run_stub(types: &[String], logger: bool, out: &mut impl Write) -> anyhow::Result<()> {
	for name in types {
		if BackendKind::from_type_name(name).is_none() {
			tracing::warn!(type_name = %name, "Unknown backend type, no stub generated");
		}
	}

	write!(out, "{}", confkit_db::generate_config_stub(types))?;
	if logger {
		if !types.is_empty() {
			writeln!(out)?;
		}
		writeln!(out, "logger:")?;
		for line in confkit_logging::logger_config_stub().lines() {
			writeln!(out, "  {}", line)?;
		}
	}
	Ok(())
}

/// Translate every declaration in `path` without connecting
///
/// Each entry gets one line. Fails when any entry is invalid.
pub async fn run_check(path: &Path, out: &mut impl Write) -> anyhow::Result<()> {
	let root = ConfigNode::from_file(path).with_context(|| format!("Failed to load {}", path.display()))?;
	let entries = factory::declarations(&root)?;

	let mut invalid = 0usize;
	for entry in &entries {
		match BackendOptions::from_config(entry).await {
			Ok(Some(options)) => writeln!(
				out,
				"{} {} {}: {}",
				"ok".green(),
				entry.path(),
				options.kind().display_name(),
				options.describe()
			)?,
			Ok(None) => writeln!(
				out,
				"{} {} unsupported type {:?}",
				"skip".yellow(),
				entry.path(),
				entry.get_str("type")?.unwrap_or_default()
			)?,
			Err(e) => {
				invalid += 1;
				writeln!(out, "{} {} {}", "error".red(), entry.path(), e)?;
			}
		}
	}

	if invalid > 0 {
		bail!("{} of {} declarations are invalid", invalid, entries.len());
	}
	Ok(())
}

/// Connect every declaration in `path`, report, then close
pub async fn run_connect(path: &Path, out: &mut impl Write) -> anyhow::Result<()> {
	let registry = confkit_db::from_file(path)
		.await
		.with_context(|| format!("Failed to connect using {}", path.display()))?;

	if registry.is_empty() {
		writeln!(out, "{}", "No backends configured".yellow())?;
	}
	for kind in registry.kinds() {
		writeln!(out, "{} {}", "connected".green(), kind.display_name())?;
	}
	registry.close().await;
	Ok(())
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;

	fn write_config(body: &str) -> tempfile::NamedTempFile {
		let mut file = tempfile::Builder::new().suffix(".yaml").tempfile().unwrap();
		file.write_all(body.as_bytes()).unwrap();
		file
	}

	#[rstest]
	fn test_stub_for_backends() {
		let mut out = Vec::new();
		run_stub(&["redis".to_string(), "nope".to_string()], false, &mut out).unwrap();
		let text = String::from_utf8(out).unwrap();
		assert!(text.starts_with("database:\n  - type: redis"));
		assert!(!text.contains("logger:"));
	}

	#[rstest]
	fn test_stub_with_logger_is_one_document() {
		let mut out = Vec::new();
		run_stub(&["mysql".to_string()], true, &mut out).unwrap();
		let root = ConfigNode::from_yaml(&out).unwrap();
		assert_eq!(root.sub_array("database").unwrap().unwrap().len(), 1);
		assert_eq!(root.get_str("logger.name").unwrap().as_deref(), Some("app"));
	}

	#[rstest]
	fn test_logger_stub_alone() {
		let mut out = Vec::new();
		run_stub(&[], true, &mut out).unwrap();
		let root = ConfigNode::from_yaml(&out).unwrap();
		assert!(root.contains("logger.appenders"));
	}

	#[rstest]
	#[tokio::test]
	async fn test_check_reports_every_entry() {
		let file = write_config(
			"
database:
  - type: redis
    host: { addr: cache }
  - type: couchdb
  - type: postgresql
    db: app
",
		);
		let mut out = Vec::new();
		let err = run_check(file.path(), &mut out).await.unwrap_err();
		let text = String::from_utf8(out).unwrap();

		assert!(text.contains("database[0] Redis: addr=cache:6379"));
		assert!(text.contains("database[1] unsupported type \"couchdb\""));
		assert!(text.contains("database[2]"));
		assert!(text.contains("missing `database[2].host`"));
		assert!(err.to_string().contains("1 of 3"));
	}

	#[rstest]
	#[tokio::test]
	async fn test_check_valid_file() {
		let file = write_config("- type: mysql\n  host: { addr: db }\n");
		let mut out = Vec::new();
		run_check(file.path(), &mut out).await.unwrap();
		assert!(String::from_utf8(out).unwrap().contains("MySQL: host=db port=3306"));
	}

	#[rstest]
	#[tokio::test]
	async fn test_connect_lazy_backends() {
		let file = write_config("- type: redis\n  host: { addr: 127.0.0.1, port: 1 }\n");
		let mut out = Vec::new();
		run_connect(file.path(), &mut out).await.unwrap();
		assert!(String::from_utf8(out).unwrap().contains("Redis"));
	}
}
