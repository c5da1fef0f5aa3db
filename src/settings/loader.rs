use anyhow::{Context, Result};

use super::raw::RawConfig;
use super::resolved::ResolvedConfig;
use super::sources::build_config;
use crate::cli::CliArgs;

/// Resolve settings for this run: merged config files and `RECAP__*`
/// variables first, then CLI flags on top, then validation.
pub fn load(cli: &CliArgs) -> Result<ResolvedConfig> {
	let mut raw = read_raw(cli)?;
	raw.apply_cli_overrides(cli);
	raw.resolve(cli)
}

fn read_raw(cli: &CliArgs) -> Result<RawConfig> {
	build_config(cli)?
		.try_deserialize::<RawConfig>()
		.context("configuration does not match the expected [catalog], [ui] and [logging] tables")
}

#[cfg(test)]
mod tests {
	use std::io::Write;

	use clap::Parser;

	use super::*;

	#[test]
	fn explicit_file_feeds_resolved_settings() {
		let mut file = tempfile::Builder::new()
			.suffix(".toml")
			.tempfile()
			.expect("temp file");
		writeln!(file, "[ui]\nsummaries_title = \"Digest\"\ntheme = \"day\"").expect("write");

		let path = file.path().to_string_lossy().into_owned();
		let cli = CliArgs::parse_from(["recap", "--no-config", "--config", &path, "-q", "fund"]);
		let resolved = load(&cli).expect("loads");
		assert_eq!(resolved.labels.summaries_title, "Digest");
		assert_eq!(resolved.theme, "day");
		assert_eq!(resolved.initial_query, "fund");
	}

	#[test]
	fn wrongly_typed_value_is_reported() {
		let mut file = tempfile::Builder::new()
			.suffix(".toml")
			.tempfile()
			.expect("temp file");
		writeln!(file, "[ui]\nstart_open = \"sometimes\"").expect("write");

		let path = file.path().to_string_lossy().into_owned();
		let cli = CliArgs::parse_from(["recap", "--no-config", "--config", &path]);
		let err = load(&cli).expect_err("rejects non-boolean");
		assert!(format!("{err:#}").contains("expected"));
	}
}
