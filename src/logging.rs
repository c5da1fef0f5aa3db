//! Tracing setup.
//!
//! The terminal belongs to the UI while a session runs, so log output goes to
//! a file. `RUST_LOG` takes precedence over the configured level.

use std::fs::{self, File, OpenOptions};
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use anyhow::{Context, Result, anyhow};
use tracing_subscriber::EnvFilter;
use tracing_subscriber::filter::LevelFilter;

use crate::app_dirs;

const LOG_FILE_NAME: &str = "recap.log";

/// Where and how verbosely to log.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogSettings {
	pub level: String,
	/// Explicit log file. Defaults to `recap.log` in the data directory.
	pub file: Option<PathBuf>,
}

impl Default for LogSettings {
	fn default() -> Self {
		Self {
			level: "info".to_string(),
			file: None,
		}
	}
}

/// Whether `level` names a tracing level filter (`off`, `error` .. `trace`).
#[must_use]
pub fn is_valid_level(level: &str) -> bool {
	level.trim().parse::<LevelFilter>().is_ok()
}

/// Resolve the log file path for `settings`.
pub fn log_path(settings: &LogSettings) -> Result<PathBuf> {
	match &settings.file {
		Some(path) => Ok(path.clone()),
		None => Ok(app_dirs::get_data_dir()?.join(LOG_FILE_NAME)),
	}
}

/// Install the global subscriber. Returns the file being written to.
pub fn initialize(settings: &LogSettings) -> Result<PathBuf> {
	let path = log_path(settings)?;
	let file = open_log_file(&path)?;

	let filter = match EnvFilter::try_from_default_env() {
		Ok(filter) => filter,
		Err(_) => EnvFilter::try_new(settings.level.trim())
			.with_context(|| format!("invalid log level `{}`", settings.level))?,
	};

	tracing_subscriber::fmt()
		.with_env_filter(filter)
		.with_writer(Mutex::new(file))
		.with_ansi(false)
		.with_target(false)
		.try_init()
		.map_err(|err| anyhow!(err))?;

	Ok(path)
}

fn open_log_file(path: &Path) -> Result<File> {
	if let Some(parent) = path.parent()
		&& !parent.as_os_str().is_empty()
	{
		fs::create_dir_all(parent)
			.with_context(|| format!("failed to create log directory {}", parent.display()))?;
	}
	OpenOptions::new()
		.create(true)
		.append(true)
		.open(path)
		.with_context(|| format!("failed to open log file {}", path.display()))
}
