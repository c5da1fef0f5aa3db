use std::path::PathBuf;

use clap::{ArgAction, ColorChoice, Parser};

use super::options::OutputFormat;
use super::styles::{cli_styles, long_version};

/// Command-line arguments accepted by the `recap` binary.
#[derive(Parser, Debug)]
#[command(
	name = "recap",
	version,
	long_version = long_version(),
	about = "Search and preview article summaries in the terminal",
	color = ColorChoice::Auto,
	styles = cli_styles()
)]
pub(crate) struct CliArgs {
	#[arg(
		short,
		long = "config",
		value_name = "FILE",
		env = "RECAP_CONFIG",
		action = ArgAction::Append,
		help = "Additional configuration file to merge (default: none)"
	)]
	pub(crate) config: Vec<PathBuf>,
	#[arg(
		short = 'n',
		long = "no-config",
		help = "Skip loading default configuration files (default: disabled)"
	)]
	pub(crate) no_config: bool,
	#[arg(
		long,
		value_name = "FILE",
		help = "Load articles from a TOML catalog (default: built-in articles)"
	)]
	pub(crate) catalog: Option<PathBuf>,
	#[arg(
		short = 'q',
		long,
		value_name = "QUERY",
		help = "Provide an initial search query (default: empty)"
	)]
	pub(crate) initial_query: Option<String>,
	#[arg(
		long,
		help = "Start with the search modal open (default: show the launcher)"
	)]
	pub(crate) open: bool,
	#[arg(
		long,
		value_name = "THEME",
		help = "Select a theme by name (default: slate)"
	)]
	pub(crate) theme: Option<String>,
	#[arg(
		long,
		value_name = "TEXT",
		help = "Override the search input placeholder (default: Search...)"
	)]
	pub(crate) placeholder: Option<String>,
	#[arg(
		long = "summaries-title",
		value_name = "TEXT",
		help = "Override the heading above the result list (default: Summaries)"
	)]
	pub(crate) summaries_title: Option<String>,
	#[arg(
		long = "launcher-label",
		value_name = "TEXT",
		help = "Override the launcher button caption (default: Open Search)"
	)]
	pub(crate) launcher_label: Option<String>,
	#[arg(
		long = "log-level",
		value_name = "LEVEL",
		help = "Log verbosity: off, error, warn, info, debug, trace (default: info)"
	)]
	pub(crate) log_level: Option<String>,
	#[arg(
		long = "log-file",
		value_name = "FILE",
		help = "Write logs to this file (default: recap.log in the data directory)"
	)]
	pub(crate) log_file: Option<PathBuf>,
	#[arg(
		long = "list-themes",
		help = "List available themes and exit"
	)]
	pub(crate) list_themes: bool,
	#[arg(
		long = "print-config",
		help = "Print the resolved configuration before starting"
	)]
	pub(crate) print_config: bool,
	#[arg(
		short = 'o',
		long,
		value_enum,
		default_value_t = OutputFormat::Plain,
		help = "How to print the session outcome on exit"
	)]
	pub(crate) output: OutputFormat,
}
