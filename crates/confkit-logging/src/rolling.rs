//! Time-rotated log files
//!
//! Time is cut into windows of the rotation interval, aligned to the Unix
//! epoch on the local wall clock: with a 24h interval each window is one
//! local calendar day. When a record falls into a later window than the
//! current file, the file is renamed to `<file>.<window start>` (formatted
//! `%Y%m%d-%H%M%S`) and a fresh file is opened under the original name.

use crate::appender::Appender;
use crate::layout::Layout;
use crate::record::LogRecord;
use chrono::{DateTime, Local};
use parking_lot::Mutex;
use std::fs::{self, File, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::time::Duration;

pub const DEFAULT_ROTATION: Duration = Duration::from_secs(24 * 60 * 60);

const SUFFIX_FORMAT: &str = "%Y%m%d-%H%M%S";

/// Start of the window holding `time`, in local seconds since the epoch
pub fn window_start(time: DateTime<Local>, interval: Duration) -> i64 {
	let step = interval.as_secs().max(1) as i64;
	let local = time.naive_local().and_utc().timestamp();
	local.div_euclid(step) * step
}

/// File name a window is archived under
pub fn rotated_path(path: &Path, window: i64) -> PathBuf {
	let suffix = DateTime::from_timestamp(window, 0)
		.map(|start| start.naive_utc().format(SUFFIX_FORMAT).to_string())
		.unwrap_or_else(|| window.to_string());
	let mut name = path.as_os_str().to_os_string();
	name.push(".");
	name.push(suffix);
	PathBuf::from(name)
}

struct RollingState {
	file: Option<File>,
	window: i64,
}

/// Appends to a file, rotating it on window boundaries
pub struct RollingFileAppender {
	path: PathBuf,
	layout: Layout,
	interval: Option<Duration>,
	state: Mutex<RollingState>,
}

impl RollingFileAppender {
	/// Open (or create) `path`
	///
	/// `interval` of `None` or zero never rotates. Missing parent directories
	/// are created. An existing file keeps the window of its last
	/// modification, so a stale file is rotated by the first record.
	pub fn new(path: impl Into<PathBuf>, layout: Layout, interval: Option<Duration>) -> io::Result<Self> {
		let path = path.into();
		let interval = interval.filter(|d| !d.is_zero());

		if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
			fs::create_dir_all(parent)?;
		}

		let window = match interval {
			Some(interval) => {
				let modified = fs::metadata(&path)
					.and_then(|meta| meta.modified())
					.map(DateTime::<Local>::from)
					.unwrap_or_else(|_| Local::now());
				window_start(modified, interval)
			}
			None => 0,
		};
		let file = open_append(&path)?;

		Ok(Self {
			path,
			layout,
			interval,
			state: Mutex::new(RollingState {
				file: Some(file),
				window,
			}),
		})
	}

	pub fn path(&self) -> &Path {
		&self.path
	}

	pub fn interval(&self) -> Option<Duration> {
		self.interval
	}

	fn rotate(&self, state: &mut RollingState, window: i64) -> io::Result<()> {
		drop(state.file.take());
		let target = rotated_path(&self.path, state.window);
		let renamed = match fs::rename(&self.path, &target) {
			Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(()),
			other => other,
		};
		state.window = window;
		state.file = Some(open_append(&self.path)?);
		tracing::debug!(path = %self.path.display(), archived = %target.display(), "Rotated log file");
		renamed
	}
}

impl Appender for RollingFileAppender {
	fn append(&self, record: &LogRecord) -> io::Result<()> {
		let mut state = self.state.lock();

		if let Some(interval) = self.interval {
			let window = window_start(record.time, interval);
			if window > state.window {
				self.rotate(&mut state, window)?;
			}
		}

		if state.file.is_none() {
			state.file = Some(open_append(&self.path)?);
		}
		match state.file.as_mut() {
			Some(file) => writeln!(file, "{}", self.layout.format(record)),
			None => Ok(()),
		}
	}

	fn flush(&self) -> io::Result<()> {
		match self.state.lock().file.as_mut() {
			Some(file) => file.flush(),
			None => Ok(()),
		}
	}

	fn kind(&self) -> &'static str {
		"file"
	}

	fn layout(&self) -> &Layout {
		&self.layout
	}
}

impl std::fmt::Debug for RollingFileAppender {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_struct("RollingFileAppender")
			.field("path", &self.path)
			.field("layout", &self.layout)
			.field("interval", &self.interval)
			.finish()
	}
}

fn open_append(path: &Path) -> io::Result<File> {
	OpenOptions::new().create(true).append(true).open(path)
}
