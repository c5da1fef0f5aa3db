use std::path::PathBuf;

use thiserror::Error;

use super::SettingSource;

/// A configuration value that failed validation, with where it came from.
#[derive(Debug, Error)]
pub(crate) enum ConfigError {
	#[error("invalid value for ui.theme from {origin}: expected one of: {known} (value: {value})")]
	UnknownTheme {
		value: String,
		origin: SettingSource,
		known: String,
	},
	#[error(
		"invalid value for logging.level from {origin}: expected off, error, warn, info, debug or trace (value: {value})"
	)]
	InvalidLogLevel { value: String, origin: SettingSource },
	#[error(
		"invalid value for catalog.path from {origin}: must point to a file, not a directory (value: {})",
		.path.display()
	)]
	CatalogIsDirectory { path: PathBuf, origin: SettingSource },
}
