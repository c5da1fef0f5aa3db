use std::sync::OnceLock;

use clap::builder::Styles;
use clap::builder::styling::{AnsiColor, Effects};
use recap::app_dirs;

static LONG_VERSION: OnceLock<String> = OnceLock::new();

/// Version banner listing the directories `recap` reads from and writes to.
pub(super) fn long_version() -> &'static str {
	LONG_VERSION.get_or_init(|| {
		let describe = |dir: anyhow::Result<std::path::PathBuf>| match dir {
			Ok(path) => path.display().to_string(),
			Err(err) => format!("unavailable ({err})"),
		};

		[
			env!("CARGO_PKG_VERSION").to_string(),
			format!("config:  {}", describe(app_dirs::get_config_dir())),
			format!("data:    {}", describe(app_dirs::get_data_dir())),
			"catalog: built-in unless --catalog or catalog.path is set".to_string(),
		]
		.join("\n")
	})
}

/// Help colours: magenta headings, bold flags.
pub(super) fn cli_styles() -> Styles {
	Styles::styled()
		.header(AnsiColor::Magenta.on_default().effects(Effects::BOLD | Effects::UNDERLINE))
		.usage(AnsiColor::Magenta.on_default().effects(Effects::BOLD))
		.literal(AnsiColor::BrightWhite.on_default().effects(Effects::BOLD))
		.placeholder(AnsiColor::BrightBlack.on_default())
		.error(AnsiColor::Red.on_default().effects(Effects::BOLD))
		.valid(AnsiColor::Green.on_default())
		.invalid(AnsiColor::Yellow.on_default())
}
