//! Where `recap` keeps its configuration and log files.
//!
//! `RECAP_CONFIG_DIR` and `RECAP_DATA_DIR` win over the platform locations
//! reported by the `directories` crate. Empty values count as unset.

use std::env;
use std::ffi::OsString;
use std::path::PathBuf;

use anyhow::{Result, anyhow};
use directories::ProjectDirs;

#[derive(Debug, Clone, Copy)]
enum AppDir {
	Config,
	Data,
}

impl AppDir {
	fn env_var(self) -> &'static str {
		match self {
			Self::Config => "RECAP_CONFIG_DIR",
			Self::Data => "RECAP_DATA_DIR",
		}
	}

	fn resolve(self) -> Result<PathBuf> {
		if let Some(dir) = non_empty(env::var_os(self.env_var())) {
			return Ok(dir);
		}

		let dirs = ProjectDirs::from("io", "albo", "recap")
			.ok_or_else(|| anyhow!("no home directory to derive {self:?} directory from"))?;
		let dir = match self {
			Self::Config => dirs.config_local_dir(),
			Self::Data => dirs.data_local_dir(),
		};
		Ok(dir.to_path_buf())
	}
}

fn non_empty(value: Option<OsString>) -> Option<PathBuf> {
	value.filter(|value| !value.is_empty()).map(PathBuf::from)
}

/// Directory searched for `config.toml`.
pub fn get_config_dir() -> Result<PathBuf> {
	AppDir::Config.resolve()
}

/// Directory holding `recap.log` unless a log file is configured.
pub fn get_data_dir() -> Result<PathBuf> {
	AppDir::Data.resolve()
}
