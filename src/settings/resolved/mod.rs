use std::path::PathBuf;

use recap::UiLabels;
use recap::logging::LogSettings;

mod errors;
mod sources;
mod summary;
mod validation;

pub(crate) use errors::ConfigError;
pub(crate) use sources::{ConfigSources, SettingSource};

/// Settings for one session after layering and validation.
///
/// `catalog_path` of `None` means the built-in articles are used.
#[derive(Debug)]
pub struct ResolvedConfig {
	pub catalog_path: Option<PathBuf>,
	pub initial_query: String,
	pub start_open: bool,
	pub theme: String,
	pub labels: UiLabels,
	pub logging: LogSettings,
}

impl ResolvedConfig {
	pub(super) fn validate(&self, sources: &ConfigSources) -> Result<(), ConfigError> {
		validation::validate(self, sources)
	}
}
