//! Process-wide registry of named loggers

use crate::logger::Logger;
use once_cell::sync::Lazy;
use parking_lot::Mutex;
use std::collections::HashMap;
use std::sync::Arc;

static LOGGERS: Lazy<Mutex<HashMap<String, Arc<Logger>>>> = Lazy::new(|| Mutex::new(HashMap::new()));

/// The logger registered under `name`, created on first use
///
/// # Examples
///
/// ```
/// use confkit_logging::get_logger;
/// use std::sync::Arc;
///
/// let a = get_logger("docs.manager");
/// let b = get_logger("docs.manager");
/// assert!(Arc::ptr_eq(&a, &b));
/// ```
pub fn get_logger(name: &str) -> Arc<Logger> {
	LOGGERS
		.lock()
		.entry(name.to_string())
		.or_insert_with(|| Arc::new(Logger::new(name)))
		.clone()
}

/// The logger registered under `name`, without creating one
pub fn find_logger(name: &str) -> Option<Arc<Logger>> {
	LOGGERS.lock().get(name).cloned()
}

/// Names of every registered logger, sorted
pub fn logger_names() -> Vec<String> {
	let mut names: Vec<String> = LOGGERS.lock().keys().cloned().collect();
	names.sort();
	names
}
