use recap::logging;
use recap::ui::style;

use super::{ConfigError, ConfigSources, ResolvedConfig};

pub(super) fn validate(
	config: &ResolvedConfig,
	sources: &ConfigSources,
) -> Result<(), ConfigError> {
	if style::by_name(&config.theme).is_none() {
		return Err(ConfigError::UnknownTheme {
			value: config.theme.clone(),
			origin: sources.source_for_theme(),
			known: style::names().join(", "),
		});
	}

	if !logging::is_valid_level(&config.logging.level) {
		return Err(ConfigError::InvalidLogLevel {
			value: config.logging.level.clone(),
			origin: sources.source_for_log_level(),
		});
	}

	if let Some(path) = &config.catalog_path
		&& path.is_dir()
	{
		return Err(ConfigError::CatalogIsDirectory {
			path: path.clone(),
			origin: sources.source_for_catalog_path(),
		});
	}

	Ok(())
}

#[cfg(test)]
mod tests {
	use recap::UiLabels;
	use recap::logging::LogSettings;

	use super::super::SettingSource;
	use super::*;

	fn config() -> ResolvedConfig {
		ResolvedConfig {
			catalog_path: None,
			initial_query: String::new(),
			start_open: false,
			theme: "slate".to_string(),
			labels: UiLabels::default(),
			logging: LogSettings::default(),
		}
	}

	#[test]
	fn defaults_are_valid() {
		assert!(validate(&config(), &ConfigSources::default()).is_ok());
	}

	#[test]
	fn validation_rejects_unknown_theme() {
		let config = ResolvedConfig {
			theme: "neon".to_string(),
			..config()
		};
		let sources = ConfigSources {
			theme: Some(SettingSource::CliFlag("--theme")),
			..ConfigSources::default()
		};

		let err = validate(&config, &sources).unwrap_err();
		assert!(matches!(err, ConfigError::UnknownTheme { .. }));
		let message = err.to_string();
		assert!(message.contains("value: neon"));
		assert!(message.contains("CLI flag"));
		assert!(message.contains("slate, light, solarized"));
	}

	#[test]
	fn validation_rejects_unknown_log_level() {
		let config = ResolvedConfig {
			logging: LogSettings {
				level: "loud".to_string(),
				file: None,
			},
			..config()
		};
		let sources = ConfigSources {
			log_level: Some(SettingSource::Environment("RECAP__LOGGING__LEVEL")),
			..ConfigSources::default()
		};

		let err = validate(&config, &sources).unwrap_err();
		assert!(matches!(err, ConfigError::InvalidLogLevel { .. }));
		assert!(err.to_string().contains("environment variable"));
	}

	#[test]
	fn validation_rejects_directory_catalog() {
		let dir = tempfile::tempdir().expect("temp dir");
		let config = ResolvedConfig {
			catalog_path: Some(dir.path().to_path_buf()),
			..config()
		};

		let err = validate(&config, &ConfigSources::default()).unwrap_err();
		assert!(matches!(err, ConfigError::CatalogIsDirectory { .. }));
		assert!(err.to_string().contains("configuration key `catalog.path`"));
	}
}
