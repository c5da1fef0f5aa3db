use std::env;
use std::path::PathBuf;

use anyhow::{Error, Result};
use recap::UiLabels;
use recap::logging::LogSettings;
use serde::Deserialize;

use super::resolved::{ConfigSources, ResolvedConfig, SettingSource};
use crate::cli::CliArgs;

const DEFAULT_THEME: &str = "slate";

/// Mirror of the configuration file representation before CLI overrides and
/// validation are applied.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub(super) struct RawConfig {
	catalog: CatalogSection,
	ui: UiSection,
	logging: LoggingSection,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
struct CatalogSection {
	path: Option<PathBuf>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
struct UiSection {
	initial_query: Option<String>,
	start_open: Option<bool>,
	theme: Option<String>,
	placeholder: Option<String>,
	summaries_title: Option<String>,
	launcher_label: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
struct LoggingSection {
	level: Option<String>,
	file: Option<PathBuf>,
}

impl RawConfig {
	/// Apply CLI overrides on top of the raw configuration values.
	pub(super) fn apply_cli_overrides(&mut self, cli: &CliArgs) {
		if let Some(path) = cli.catalog.clone() {
			self.catalog.path = Some(path);
		}
		if let Some(query) = cli.initial_query.clone() {
			self.ui.initial_query = Some(query);
		}
		if cli.open {
			self.ui.start_open = Some(true);
		}
		if let Some(theme) = cli.theme.clone() {
			self.ui.theme = Some(theme);
		}
		if let Some(text) = cli.placeholder.clone() {
			self.ui.placeholder = Some(text);
		}
		if let Some(text) = cli.summaries_title.clone() {
			self.ui.summaries_title = Some(text);
		}
		if let Some(text) = cli.launcher_label.clone() {
			self.ui.launcher_label = Some(text);
		}
		if let Some(level) = cli.log_level.clone() {
			self.logging.level = Some(level);
		}
		if let Some(file) = cli.log_file.clone() {
			self.logging.file = Some(file);
		}
	}

	/// Convert the raw configuration into a [`ResolvedConfig`], validating and
	/// filling defaults where required.
	pub(super) fn resolve(self, cli: &CliArgs) -> Result<ResolvedConfig> {
		let sources = ConfigSources {
			theme: detect_source(
				cli.theme.is_some(),
				self.ui.theme.is_some(),
				"RECAP__UI__THEME",
				"--theme",
				"ui.theme",
			),
			log_level: detect_source(
				cli.log_level.is_some(),
				self.logging.level.is_some(),
				"RECAP__LOGGING__LEVEL",
				"--log-level",
				"logging.level",
			),
			catalog_path: detect_source(
				cli.catalog.is_some(),
				self.catalog.path.is_some(),
				"RECAP__CATALOG__PATH",
				"--catalog",
				"catalog.path",
			),
		};

		let mut labels = UiLabels::default();
		if let Some(text) = self.ui.placeholder {
			labels.placeholder = text;
		}
		if let Some(text) = self.ui.summaries_title {
			labels.summaries_title = text;
		}
		if let Some(text) = self.ui.launcher_label {
			labels.launcher_label = text;
		}

		let defaults = LogSettings::default();
		let config = ResolvedConfig {
			catalog_path: self.catalog.path,
			initial_query: self.ui.initial_query.unwrap_or_default(),
			start_open: self.ui.start_open.unwrap_or(false),
			theme: self
				.ui
				.theme
				.unwrap_or_else(|| DEFAULT_THEME.to_string()),
			labels,
			logging: LogSettings {
				level: self.logging.level.unwrap_or(defaults.level),
				file: self.logging.file,
			},
		};

		config.validate(&sources).map_err(Error::new)?;

		Ok(config)
	}
}

fn detect_source(
	cli_present: bool,
	value_present: bool,
	env_var: &'static str,
	cli_flag: &'static str,
	key: &'static str,
) -> Option<SettingSource> {
	if !value_present {
		return None;
	}

	if cli_present {
		return Some(SettingSource::CliFlag(cli_flag));
	}

	if env::var_os(env_var).is_some() {
		return Some(SettingSource::Environment(env_var));
	}

	Some(SettingSource::ConfigKey(key))
}
