use anyhow::Result;
use ratatui::crossterm::event::{
	KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};
use ratatui::layout::Position;

use super::App;
use crate::outcome::SessionOutcome;

impl<'a> App<'a> {
	/// Apply a key press. Returns the session outcome once the user quits.
	pub fn handle_key(&mut self, key: KeyEvent) -> Result<Option<SessionOutcome>> {
		if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
			return Ok(Some(self.outcome()));
		}

		if !self.modal.is_open() {
			match key.code {
				KeyCode::Enter | KeyCode::Char('/') => self.modal.open(),
				KeyCode::Esc | KeyCode::Char('q') => return Ok(Some(self.outcome())),
				_ => {}
			}
			return Ok(None);
		}

		match key.code {
			KeyCode::Esc => self.modal.close(),
			KeyCode::Up => self.modal.move_cursor_up(),
			KeyCode::Down => self.modal.move_cursor_down(),
			KeyCode::Enter => {
				self.modal.select_cursor();
			}
			_ => {
				self.modal.input(key);
			}
		}
		Ok(None)
	}

	/// Apply a mouse event against the regions recorded by the last draw.
	pub fn handle_mouse(&mut self, mouse: MouseEvent) {
		let position = Position::new(mouse.column, mouse.row);
		match mouse.kind {
			MouseEventKind::Down(MouseButton::Left) => self.click(position),
			MouseEventKind::ScrollUp if self.modal.is_open() => self.modal.move_cursor_up(),
			MouseEventKind::ScrollDown if self.modal.is_open() => self.modal.move_cursor_down(),
			_ => {}
		}
	}

	fn click(&mut self, position: Position) {
		if !self.modal.is_open() {
			if self.hit_areas.launcher.contains(position) {
				self.modal.open();
			}
			return;
		}

		if self.hit_areas.on_close_button(position) {
			self.modal.close();
		} else if let Some(id) = self.hit_areas.row_at(position) {
			self.modal.select(id);
		} else if !self.hit_areas.inside_modal(position) {
			tracing::debug!(column = position.x, row = position.y, "backdrop clicked");
			self.modal.close();
		}
	}
}

#[cfg(test)]
mod tests {
	use ratatui::Terminal;
	use ratatui::backend::TestBackend;
	use ratatui::crossterm::event::KeyEventKind;

	use super::*;
	use crate::catalog::Catalog;
	use crate::ui::state::ModalState;

	fn press(app: &mut App<'_>, code: KeyCode) -> Option<SessionOutcome> {
		app.handle_key(KeyEvent::new(code, KeyModifiers::NONE))
			.expect("key handled")
	}

	fn type_text(app: &mut App<'_>, text: &str) {
		for ch in text.chars() {
			assert!(press(app, KeyCode::Char(ch)).is_none());
		}
	}

	fn draw(app: &mut App<'_>) {
		let mut terminal = Terminal::new(TestBackend::new(100, 24)).expect("terminal");
		terminal.draw(|frame| app.draw(frame)).expect("draw frame");
	}

	fn left_click(column: u16, row: u16) -> MouseEvent {
		MouseEvent {
			kind: MouseEventKind::Down(MouseButton::Left),
			column,
			row,
			modifiers: KeyModifiers::NONE,
		}
	}

	#[test]
	fn enter_opens_and_escape_closes() {
		let mut app = App::new(Catalog::seeded());
		assert!(press(&mut app, KeyCode::Enter).is_none());
		assert!(app.modal.is_open());
		assert!(press(&mut app, KeyCode::Esc).is_none());
		assert!(!app.modal.is_open());
	}

	#[test]
	fn typing_then_enter_selects_the_first_match() {
		let mut app = App::new(Catalog::seeded());
		press(&mut app, KeyCode::Char('/'));
		type_text(&mut app, "fund");
		press(&mut app, KeyCode::Enter);
		assert_eq!(app.modal.selected_id(), Some(3));
		assert_eq!(app.modal.state(), ModalState::OpenWithSelection);
	}

	#[test]
	fn tab_leaves_query_and_results_alone() {
		let mut app = App::new(Catalog::seeded());
		press(&mut app, KeyCode::Enter);
		type_text(&mut app, "Me");
		assert_eq!(app.modal.visible_len(), 1);

		assert!(press(&mut app, KeyCode::Tab).is_none());
		assert_eq!(app.modal.query(), "Me");
		assert_eq!(app.modal.visible_len(), 1);
	}

	#[test]
	fn initial_query_cannot_be_undone() {
		let mut app = App::new(Catalog::seeded());
		app.modal.set_query("Meta");
		app.modal.open();
		app.handle_key(KeyEvent::new(KeyCode::Char('u'), KeyModifiers::CONTROL))
			.expect("key handled");
		assert_eq!(app.modal.query(), "Meta");
		assert_eq!(app.modal.visible_len(), 1);
	}

	#[test]
	fn q_is_query_text_while_open_and_quits_while_closed() {
		let mut app = App::new(Catalog::seeded());
		press(&mut app, KeyCode::Enter);
		type_text(&mut app, "q");
		assert_eq!(app.modal.query(), "q");

		press(&mut app, KeyCode::Esc);
		let outcome = press(&mut app, KeyCode::Char('q')).expect("quit");
		assert_eq!(outcome.query, "q");
		assert!(!outcome.open);
		assert!(outcome.selection.is_none());
	}

	#[test]
	fn ctrl_c_quits_from_any_state() {
		let mut app = App::new(Catalog::seeded());
		press(&mut app, KeyCode::Enter);
		press(&mut app, KeyCode::Down);
		press(&mut app, KeyCode::Enter);
		let outcome = app
			.handle_key(KeyEvent::new_with_kind(
				KeyCode::Char('c'),
				KeyModifiers::CONTROL,
				KeyEventKind::Press,
			))
			.expect("key handled")
			.expect("quit");
		assert!(outcome.open);
		assert_eq!(outcome.selection.map(|article| article.id), Some(2));
	}

	#[test]
	fn clicking_a_row_selects_it() {
		let mut app = App::new(Catalog::seeded());
		app.modal.open();
		draw(&mut app);

		let (row, id) = app.hit_areas.rows[2];
		app.handle_mouse(left_click(row.x + 1, row.y));
		assert_eq!(app.modal.selected_id(), Some(id));
		assert_eq!(id, 3);
	}

	#[test]
	fn clicking_the_backdrop_closes_without_reset() {
		let mut app = App::new(Catalog::seeded());
		app.modal.open();
		app.modal.set_query("a");
		app.modal.select(1);
		draw(&mut app);

		app.handle_mouse(left_click(0, 0));
		assert_eq!(app.modal.state(), ModalState::Closed);

		draw(&mut app);
		let launcher = app.hit_areas.launcher;
		app.handle_mouse(left_click(launcher.x + 1, launcher.y + 1));
		assert_eq!(app.modal.state(), ModalState::OpenWithSelection);
		assert_eq!(app.modal.query(), "a");
	}

	#[test]
	fn clicking_inside_the_modal_keeps_it_open() {
		let mut app = App::new(Catalog::seeded());
		app.modal.open();
		draw(&mut app);

		let modal = app.hit_areas.modal.expect("modal drawn");
		app.handle_mouse(left_click(modal.right() - 3, modal.bottom() - 2));
		assert!(app.modal.is_open());

		let close = app.hit_areas.close_button.expect("close button drawn");
		app.handle_mouse(left_click(close.x, close.y));
		assert!(!app.modal.is_open());
	}
}
