//! Core state container for the terminal application's front-end.
//!
//! The [`App`] wraps the [`SearchModal`] with the presentation concerns the
//! modal itself does not care about: labels, theme, and the screen regions
//! recorded during the last draw for mouse hit-testing.

use ratatui::layout::{Position, Rect};

use super::SearchModal;
use crate::catalog::{ArticleId, Catalog};
use crate::outcome::SessionOutcome;
use crate::ui::config::UiLabels;
use crate::ui::style::Theme;

/// Screen regions produced by the most recent frame.
#[derive(Debug, Clone, Default)]
pub(crate) struct HitAreas {
	pub launcher: Rect,
	pub modal: Option<Rect>,
	pub close_button: Option<Rect>,
	pub rows: Vec<(Rect, ArticleId)>,
}

impl HitAreas {
	pub(crate) fn row_at(&self, position: Position) -> Option<ArticleId> {
		self.rows
			.iter()
			.find(|(area, _)| area.contains(position))
			.map(|(_, id)| *id)
	}

	pub(crate) fn inside_modal(&self, position: Position) -> bool {
		self.modal.is_some_and(|area| area.contains(position))
	}

	pub(crate) fn on_close_button(&self, position: Position) -> bool {
		self.close_button.is_some_and(|area| area.contains(position))
	}
}

/// Aggregate state shared across the terminal UI.
pub struct App<'a> {
	pub modal: SearchModal<'a>,
	pub labels: UiLabels,
	pub theme: Theme,
	pub(crate) hit_areas: HitAreas,
}

impl<'a> App<'a> {
	/// Construct an [`App`] with default labels and theme.
	#[must_use]
	pub fn new(catalog: Catalog) -> Self {
		let mut app = Self {
			modal: SearchModal::new(catalog),
			labels: UiLabels::default(),
			theme: Theme::default(),
			hit_areas: HitAreas::default(),
		};
		app.apply_input_style();
		app
	}

	pub fn set_theme(&mut self, theme: Theme) {
		self.theme = theme;
		self.apply_input_style();
	}

	pub fn set_labels(&mut self, labels: UiLabels) {
		self.labels = labels;
		self.apply_input_style();
	}

	/// Snapshot of the session as it stands right now.
	#[must_use]
	pub fn outcome(&self) -> SessionOutcome {
		SessionOutcome {
			query: self.modal.query().to_string(),
			open: self.modal.is_open(),
			selection: self.modal.selected().cloned(),
		}
	}

	fn apply_input_style(&mut self) {
		let placeholder = self.labels.placeholder.clone();
		let placeholder_style = self.theme.muted();
		let prompt_style = self.theme.prompt();
		let input = self.modal.query_input_mut();
		input.set_placeholder(placeholder, placeholder_style);
		input.set_style(prompt_style);
	}
}
