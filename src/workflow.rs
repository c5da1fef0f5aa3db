use std::path::Path;

use anyhow::{Context, Result};
use recap::{Catalog, SearchUi, SessionOutcome, UiLabels};

use crate::settings::ResolvedConfig;

/// Coordinates building and running the interactive search session.
pub(crate) struct SearchWorkflow {
	search_ui: SearchUi,
}

impl SearchWorkflow {
	pub(crate) fn from_config(config: ResolvedConfig) -> Result<Self> {
		let search_ui = SearchUiFactory::build(config)?;
		Ok(Self { search_ui })
	}

	pub(crate) fn run(self) -> Result<SessionOutcome> {
		self.search_ui.run()
	}
}

/// Helper for translating resolved configuration into a configured `SearchUi`.
struct SearchUiFactory {
	search_ui: SearchUi,
}

impl SearchUiFactory {
	fn build(config: ResolvedConfig) -> Result<SearchUi> {
		let ResolvedConfig {
			catalog_path,
			initial_query,
			start_open,
			theme,
			labels,
			logging: _,
		} = config;

		let builder = Self::new(catalog_path.as_deref())?
			.with_labels(labels)
			.with_initial_query(initial_query)
			.with_theme(&theme)
			.start_open(start_open);

		Ok(builder.finish())
	}

	fn new(catalog_path: Option<&Path>) -> Result<Self> {
		let catalog = match catalog_path {
			Some(path) => Catalog::load(path)
				.with_context(|| format!("failed to load catalog from {}", path.display()))?,
			None => Catalog::seeded(),
		};
		tracing::info!(articles = catalog.len(), "catalog ready");
		Ok(Self {
			search_ui: SearchUi::new(catalog),
		})
	}

	fn with_labels(mut self, labels: UiLabels) -> Self {
		self.search_ui = self.search_ui.with_labels(labels);
		self
	}

	fn with_initial_query(mut self, query: String) -> Self {
		if !query.is_empty() {
			self.search_ui = self.search_ui.with_initial_query(query);
		}
		self
	}

	fn with_theme(mut self, theme: &str) -> Self {
		self.search_ui = self.search_ui.with_theme_name(theme);
		self
	}

	fn start_open(mut self, open: bool) -> Self {
		self.search_ui = self.search_ui.start_open(open);
		self
	}

	fn finish(self) -> SearchUi {
		self.search_ui
	}
}
