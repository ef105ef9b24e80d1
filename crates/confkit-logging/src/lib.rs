//! # confkit logging
//!
//! Named loggers configured from YAML or JSON.
//!
//! A logger has a numeric threshold, a timestamp format and a list of
//! appenders. Each appender renders records with its own [`Layout`] and
//! writes them to standard output, standard error, a time-rotated file, or
//! memory.
//!
//! ## Quick Start
//!
//! ```rust
//! use confkit_logging::{LogLevel, logger_from_yaml};
//!
//! let logger = logger_from_yaml(b"
//! name: docs.quickstart
//! level: WARN
//! appenders:
//!   - type: stderr
//!     layout: '%L %M'
//! ").unwrap();
//!
//! logger.info("dropped");
//! logger.error("disk full");
//! assert_eq!(logger.level(), LogLevel::WARN);
//! ```
//!
//! Loggers are shared by name: configuring `app` twice updates the same
//! [`Logger`], and [`get_logger`] hands out that instance anywhere in the
//! process.
//!
//! ## Levels
//!
//! `ALL` 0, `TRACE` 10, `DEBUG` 20, `INFO` 30, `LOG` 40, `WARN` 50, `ERROR` 60,
//! `FATAL` 70, `NONE` 100. Any other number is accepted as well.

pub mod appender;
pub mod config;
pub mod error;
pub mod layout;
pub mod level;
pub mod logger;
pub mod manager;
pub mod record;
pub mod rolling;

pub use appender::{Appender, ConsoleAppender, MemoryAppender, StderrAppender};
pub use config::{
	appender_from_config, logger_config_stub, logger_from_config, logger_from_file,
	logger_from_json, logger_from_json_file, logger_from_yaml, logger_from_yaml_file,
};
pub use error::{LoggingError, Result};
pub use layout::{DEFAULT_LAYOUT, Layout};
pub use level::LogLevel;
pub use logger::{DEFAULT_TIME_FORMAT, Logger};
pub use manager::{find_logger, get_logger, logger_names};
pub use record::LogRecord;
pub use rolling::RollingFileAppender;
