use std::env;
use std::path::PathBuf;

use anyhow::{Context, Result};
use config::{Config, Environment, File};
use recap::app_dirs;

use crate::cli::CliArgs;

/// Merge config files and `RECAP__*` variables, lowest precedence first.
///
/// Default locations are optional; files passed with `--config` must exist.
pub(super) fn build_config(cli: &CliArgs) -> Result<Config> {
	let defaults: Vec<File<_, _>> = if cli.no_config {
		Vec::new()
	} else {
		default_config_files()
			.into_iter()
			.map(|path| File::from(path).required(false))
			.collect()
	};
	let explicit: Vec<File<_, _>> = cli
		.config
		.iter()
		.map(|path| File::from(path.as_path()).required(true))
		.collect();
	let environment = Environment::with_prefix("recap")
		.prefix_separator("__")
		.separator("__")
		.try_parsing(true);

	Config::builder()
		.add_source(defaults)
		.add_source(explicit)
		.add_source(environment)
		.build()
		.context("failed to read configuration")
}

/// `<config_dir>/config.toml`, then `.recap.toml` and `recap.toml` in the
/// working directory.
pub(super) fn default_config_files() -> Vec<PathBuf> {
	let user = app_dirs::get_config_dir()
		.ok()
		.map(|dir| dir.join("config.toml"));
	let local = env::current_dir()
		.ok()
		.into_iter()
		.flat_map(|cwd| [cwd.join(".recap.toml"), cwd.join("recap.toml")]);

	user.into_iter().chain(local).collect()
}
