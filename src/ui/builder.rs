use anyhow::Result;

use super::App;
use super::config::UiLabels;
use super::style::Theme;
use crate::catalog::Catalog;
use crate::outcome::SessionOutcome;

/// A small builder for configuring the modal before running it.
pub struct SearchUi {
	catalog: Catalog,
	labels: Option<UiLabels>,
	theme: Option<Theme>,
	initial_query: Option<String>,
	start_open: bool,
}

impl SearchUi {
	/// Create a new search UI over the provided catalog.
	#[must_use]
	pub fn new(catalog: Catalog) -> Self {
		Self {
			catalog,
			labels: None,
			theme: None,
			initial_query: None,
			start_open: false,
		}
	}

	/// Create a search UI over the built-in article set.
	#[must_use]
	pub fn seeded() -> Self {
		Self::new(Catalog::seeded())
	}

	#[must_use]
	pub fn with_labels(mut self, labels: UiLabels) -> Self {
		self.labels = Some(labels);
		self
	}

	#[must_use]
	pub fn with_initial_query(mut self, query: impl Into<String>) -> Self {
		self.initial_query = Some(query.into());
		self
	}

	/// Apply a built-in theme by name. Unknown names keep the current theme.
	#[must_use]
	pub fn with_theme_name(mut self, name: &str) -> Self {
		if let Some(theme) = super::style::by_name(name) {
			self.theme = Some(theme);
		}
		self
	}

	#[must_use]
	pub fn with_theme(mut self, theme: Theme) -> Self {
		self.theme = Some(theme);
		self
	}

	/// Show the modal immediately instead of the launcher.
	#[must_use]
	pub fn start_open(mut self, open: bool) -> Self {
		self.start_open = open;
		self
	}

	/// Build the [`App`] without entering the terminal.
	#[must_use]
	pub fn build<'a>(self) -> App<'a> {
		let mut app = App::new(self.catalog);
		if let Some(labels) = self.labels {
			app.set_labels(labels);
		}
		if let Some(theme) = self.theme {
			app.set_theme(theme);
		}
		if let Some(query) = self.initial_query {
			app.modal.set_query(query);
		}
		if self.start_open {
			app.modal.open();
		}
		app
	}

	/// Run the interactive search UI with the configured options.
	pub fn run(self) -> Result<SessionOutcome> {
		self.build().run()
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::ui::state::ModalState;
	use crate::ui::style;

	#[test]
	fn builder_applies_query_and_open_state() {
		let app = SearchUi::seeded()
			.with_initial_query("Meta")
			.start_open(true)
			.build();
		assert_eq!(app.modal.state(), ModalState::OpenNoSelection);
		assert_eq!(app.modal.visible_len(), 1);
	}

	#[test]
	fn builder_resolves_theme_names() {
		let app = SearchUi::seeded().with_theme_name("solarized").build();
		assert_eq!(Some(app.theme), style::by_name("solarized"));

		let app = SearchUi::seeded().with_theme_name("does-not-exist").build();
		assert_eq!(app.theme, style::default_theme());
	}

	#[test]
	fn builder_overrides_labels() {
		let labels = UiLabels::default().with_summaries_title("Digest");
		let app = SearchUi::seeded().with_labels(labels).build();
		assert_eq!(app.labels.summaries_title, "Digest");
		assert_eq!(app.labels.placeholder, "Search...");
	}
}
