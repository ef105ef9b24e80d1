//! # confkit configuration tree
//!
//! A small read-only view over a parsed YAML or JSON document.
//!
//! Every lookup distinguishes three outcomes: the field is present and has the
//! requested shape (`Ok(Some(_))`), the field is absent or `null` (`Ok(None)`),
//! or the field is present with the wrong shape (`Err(_)`). Builders further
//! up the stack decide which absences are fatal.
//!
//! ## Quick Start
//!
//! ```rust
//! use confkit_conf::ConfigNode;
//! use std::time::Duration;
//!
//! let node = ConfigNode::from_yaml(b"
//! host:
//!   addr: localhost
//!   port: 5432
//! timeout:
//!   conn: 5m
//! ").unwrap();
//!
//! let host = node.sub("host").unwrap().unwrap();
//! assert_eq!(host.get_str("addr").unwrap().as_deref(), Some("localhost"));
//! assert_eq!(host.get_u16("port").unwrap(), Some(5432));
//! assert_eq!(node.get_duration("timeout.conn").unwrap(), Some(Duration::from_secs(300)));
//! assert_eq!(node.get_str("username").unwrap(), None);
//! ```
//!
//! ## Module Organization
//!
//! - [`node`]: the [`ConfigNode`] tree and its loaders
//! - [`duration`]: duration strings such as `"1h30m"` or `"250ms"`
//! - [`error`]: [`ConfigError`]

pub mod duration;
pub mod error;
pub mod node;

pub use duration::{DurationError, parse_duration};
pub use error::{ConfigError, Result};
pub use node::ConfigNode;
