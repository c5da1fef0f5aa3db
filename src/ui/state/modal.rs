//! The modal controller: visibility, query, cursor and selection.
//!
//! Every operation here is synchronous and total. The filtered view is
//! recomputed eagerly whenever the query changes, and the selection is kept
//! as an id into the catalog so it survives any filter.

use ratatui::crossterm::event::KeyEvent;
use ratatui::widgets::ListState;

use crate::catalog::{Article, ArticleId, Catalog};
use crate::filter::filter_indices;
use crate::ui::input::QueryInput;

/// Coarse widget state derived from the open flag and the selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModalState {
	Closed,
	OpenNoSelection,
	OpenWithSelection,
}

/// Search-and-preview modal over a fixed [`Catalog`].
#[derive(Debug, Clone)]
pub struct SearchModal<'a> {
	catalog: Catalog,
	query: QueryInput<'a>,
	open: bool,
	selected: Option<ArticleId>,
	visible: Vec<usize>,
	cursor: ListState,
}

impl<'a> SearchModal<'a> {
	/// Construct a closed modal with an empty query and no selection.
	#[must_use]
	pub fn new(catalog: Catalog) -> Self {
		let mut modal = Self {
			catalog,
			query: QueryInput::new(String::new()),
			open: false,
			selected: None,
			visible: Vec::new(),
			cursor: ListState::default(),
		};
		modal.refresh();
		modal
	}

	#[must_use]
	pub fn catalog(&self) -> &Catalog {
		&self.catalog
	}

	#[must_use]
	pub fn is_open(&self) -> bool {
		self.open
	}

	#[must_use]
	pub fn state(&self) -> ModalState {
		match (self.open, self.selected) {
			(false, _) => ModalState::Closed,
			(true, None) => ModalState::OpenNoSelection,
			(true, Some(_)) => ModalState::OpenWithSelection,
		}
	}

	/// Show the modal. Query and selection are left exactly as they were.
	pub fn open(&mut self) {
		if !self.open {
			self.open = true;
			tracing::debug!(
				query = self.query(),
				selected = ?self.selected,
				"modal opened"
			);
		}
	}

	/// Hide the modal and its detail panel without resetting any state.
	pub fn close(&mut self) {
		if self.open {
			self.open = false;
			tracing::debug!("modal closed");
		}
	}

	pub fn toggle(&mut self) {
		if self.open {
			self.close();
		} else {
			self.open();
		}
	}

	#[must_use]
	pub fn query(&self) -> &str {
		self.query.text()
	}

	/// Replace the query and recompute the visible list.
	pub fn set_query(&mut self, query: impl Into<String>) {
		self.query.set_text(query);
		self.refresh();
	}

	/// Route a key press to the query editor. Returns `true` when the query
	/// changed.
	pub fn input(&mut self, key: KeyEvent) -> bool {
		if self.query.input(key) {
			self.refresh();
			true
		} else {
			false
		}
	}

	/// Articles matching the current query, in catalog order.
	#[must_use]
	pub fn visible(&self) -> Vec<&Article> {
		self.visible
			.iter()
			.map(|&index| &self.catalog.articles()[index])
			.collect()
	}

	#[must_use]
	pub fn visible_len(&self) -> usize {
		self.visible.len()
	}

	/// Replace the selection. Ids outside the catalog are ignored and leave
	/// the current selection untouched.
	pub fn select(&mut self, id: ArticleId) -> bool {
		if !self.catalog.contains(id) {
			tracing::warn!(id, "ignoring selection of unknown article");
			return false;
		}
		if self.selected != Some(id) {
			tracing::debug!(id, "article selected");
		}
		self.selected = Some(id);
		if let Some(position) = self.position_of(id) {
			self.cursor.select(Some(position));
		}
		true
	}

	/// Select the article under the keyboard cursor.
	pub fn select_cursor(&mut self) -> bool {
		match self.cursor_article().map(|article| article.id) {
			Some(id) => self.select(id),
			None => false,
		}
	}

	#[must_use]
	pub fn selected_id(&self) -> Option<ArticleId> {
		self.selected
	}

	/// The selected article, whether or not it passes the current filter.
	#[must_use]
	pub fn selected(&self) -> Option<&Article> {
		self.selected.and_then(|id| self.catalog.get(id))
	}

	/// Position of the keyboard cursor within the visible list.
	#[must_use]
	pub fn cursor(&self) -> Option<usize> {
		self.cursor.selected()
	}

	#[must_use]
	pub fn cursor_article(&self) -> Option<&Article> {
		let position = self.cursor.selected()?;
		let index = *self.visible.get(position)?;
		self.catalog.articles().get(index)
	}

	pub fn move_cursor_up(&mut self) {
		if let Some(position) = self.cursor.selected()
			&& position > 0
		{
			self.cursor.select(Some(position - 1));
		}
	}

	pub fn move_cursor_down(&mut self) {
		if let Some(position) = self.cursor.selected()
			&& position + 1 < self.visible.len()
		{
			self.cursor.select(Some(position + 1));
		}
	}

	pub(crate) fn query_input(&self) -> &QueryInput<'a> {
		&self.query
	}

	pub(crate) fn query_input_mut(&mut self) -> &mut QueryInput<'a> {
		&mut self.query
	}

	/// Visible articles alongside the cursor state, borrowed together for
	/// stateful list rendering.
	pub(crate) fn list_parts(&mut self) -> (Vec<&Article>, &mut ListState) {
		let articles = self.catalog.articles();
		let visible = self.visible.iter().map(|&index| &articles[index]).collect();
		(visible, &mut self.cursor)
	}

	fn position_of(&self, id: ArticleId) -> Option<usize> {
		self.visible
			.iter()
			.position(|&index| self.catalog.articles()[index].id == id)
	}

	fn refresh(&mut self) {
		self.visible = filter_indices(self.catalog.articles(), self.query.text());
		self.ensure_cursor();
		tracing::trace!(
			query = self.query.text(),
			matches = self.visible.len(),
			"filter recomputed"
		);
	}

	/// Keep the cursor inside the visible list.
	fn ensure_cursor(&mut self) {
		let len = self.visible.len();
		match self.cursor.selected() {
			_ if len == 0 => self.cursor.select(None),
			None => self.cursor.select(Some(0)),
			Some(position) if position >= len => self.cursor.select(Some(len - 1)),
			Some(_) => {}
		}
	}
}

#[cfg(test)]
mod tests {
	use ratatui::crossterm::event::{KeyCode, KeyModifiers};

	use super::*;

	fn modal() -> SearchModal<'static> {
		SearchModal::new(Catalog::seeded())
	}

	fn visible_titles(modal: &SearchModal<'_>) -> Vec<String> {
		modal
			.visible()
			.into_iter()
			.map(|article| article.title.clone())
			.collect()
	}

	fn type_text(modal: &mut SearchModal<'_>, text: &str) {
		for ch in text.chars() {
			modal.input(KeyEvent::new(KeyCode::Char(ch), KeyModifiers::NONE));
		}
	}

	#[test]
	fn starts_closed_with_everything_visible() {
		let modal = modal();
		assert_eq!(modal.state(), ModalState::Closed);
		assert_eq!(modal.query(), "");
		assert_eq!(modal.visible_len(), 3);
		assert_eq!(modal.cursor(), Some(0));
		assert!(modal.selected().is_none());
	}

	#[test]
	fn keystrokes_refilter_synchronously() {
		let mut modal = modal();
		modal.open();
		type_text(&mut modal, "Me");
		assert_eq!(visible_titles(&modal), ["Meta's Data Setup"]);
		modal.input(KeyEvent::new(KeyCode::Backspace, KeyModifiers::NONE));
		modal.input(KeyEvent::new(KeyCode::Backspace, KeyModifiers::NONE));
		assert_eq!(modal.visible_len(), 3);
	}

	#[test]
	fn selection_survives_being_filtered_out() {
		let mut modal = modal();
		modal.open();
		assert!(modal.select(1));
		modal.set_query("July");
		assert_eq!(visible_titles(&modal), ["July Fund"]);
		assert_eq!(
			modal.selected().map(|article| article.title.as_str()),
			Some("Apple's WWDC 2023")
		);
		assert_eq!(modal.state(), ModalState::OpenWithSelection);
	}

	#[test]
	fn close_and_reopen_preserve_query_and_selection() {
		let mut modal = modal();
		modal.open();
		modal.set_query("meta");
		assert!(modal.select_cursor());
		modal.close();
		assert_eq!(modal.state(), ModalState::Closed);
		assert_eq!(modal.query(), "meta");

		modal.open();
		assert_eq!(modal.state(), ModalState::OpenWithSelection);
		assert_eq!(modal.query(), "meta");
		assert_eq!(modal.selected_id(), Some(2));
	}

	#[test]
	fn reopening_without_selection_returns_to_no_selection() {
		let mut modal = modal();
		modal.toggle();
		assert_eq!(modal.state(), ModalState::OpenNoSelection);
		modal.toggle();
		modal.toggle();
		assert_eq!(modal.state(), ModalState::OpenNoSelection);
	}

	#[test]
	fn selecting_another_article_replaces_the_selection() {
		let mut modal = modal();
		modal.open();
		assert!(modal.select(1));
		assert!(modal.select(3));
		assert_eq!(modal.selected_id(), Some(3));
		assert_eq!(modal.cursor(), Some(2));
	}

	#[test]
	fn unknown_ids_cannot_be_selected() {
		let mut modal = modal();
		assert!(modal.select(2));
		assert!(!modal.select(42));
		assert_eq!(modal.selected_id(), Some(2));
	}

	#[test]
	fn cursor_is_clamped_to_the_filtered_list() {
		let mut modal = modal();
		modal.move_cursor_down();
		modal.move_cursor_down();
		modal.move_cursor_down();
		assert_eq!(modal.cursor(), Some(2));

		modal.set_query("fund");
		assert_eq!(modal.cursor(), Some(0));
		assert_eq!(
			modal.cursor_article().map(|article| article.id),
			Some(3)
		);

		modal.set_query("nothing matches");
		assert_eq!(modal.cursor(), None);
		assert!(!modal.select_cursor());

		modal.set_query("");
		assert_eq!(modal.cursor(), Some(0));
		modal.move_cursor_up();
		assert_eq!(modal.cursor(), Some(0));
	}

	#[test]
	fn empty_catalog_is_a_valid_state() {
		let mut modal = SearchModal::new(Catalog::default());
		modal.open();
		assert_eq!(modal.visible_len(), 0);
		assert_eq!(modal.cursor(), None);
		modal.move_cursor_down();
		assert!(!modal.select_cursor());
		assert_eq!(modal.state(), ModalState::OpenNoSelection);
	}
}
