mod cli;
mod settings;
mod workflow;

use anyhow::Result;
use cli::{CliArgs, OutputFormat, parse_cli, print_json, print_plain};
use recap::logging::{self, LogSettings};
use workflow::SearchWorkflow;

fn main() -> Result<()> {
	let cli = parse_cli();
	if cli.list_themes {
		list_themes();
		return Ok(());
	}
	session(&cli)
}

fn list_themes() {
	recap::ui::style::names()
		.into_iter()
		.for_each(|name| println!("{name}"));
}

fn session(cli: &CliArgs) -> Result<()> {
	let resolved = settings::load(cli)?;
	if cli.print_config {
		resolved.print_summary();
	}
	start_logging(&resolved.logging);

	let outcome = SearchWorkflow::from_config(resolved)?.run()?;
	match cli.output {
		OutputFormat::Plain => print_plain(&outcome),
		OutputFormat::Json => print_json(&outcome)?,
	}
	Ok(())
}

/// Logging is best-effort: a missing data directory should not block a session.
fn start_logging(settings: &LogSettings) {
	match logging::initialize(settings) {
		Ok(path) => tracing::info!(log = %path.display(), "recap starting"),
		Err(err) => eprintln!("warning: logging disabled: {err:#}"),
	}
}
