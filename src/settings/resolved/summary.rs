use super::ResolvedConfig;

impl ResolvedConfig {
	/// Print the effective settings, one per line.
	pub fn print_summary(&self) {
		print_summary(self);
	}
}

fn print_summary(config: &ResolvedConfig) {
	println!("Effective configuration:");
	match &config.catalog_path {
		Some(path) => println!("  Catalog: {}", path.display()),
		None => println!("  Catalog: (built-in articles)"),
	}
	println!("  Initial query: '{}'", config.initial_query);
	println!(
		"  Start open: {}",
		if config.start_open { "yes" } else { "no" }
	);
	println!("  UI theme: {}", config.theme);
	println!("  Placeholder: {}", config.labels.placeholder);
	println!("  Summaries title: {}", config.labels.summaries_title);
	println!("  Launcher label: {}", config.labels.launcher_label);
	println!("  Log level: {}", config.logging.level);
	match &config.logging.file {
		Some(path) => println!("  Log file: {}", path.display()),
		None => println!("  Log file: (data directory)"),
	}
}
