//! Single-line query editor backed by `tui-textarea`.

use ratatui::crossterm::event::KeyEvent;
use ratatui::style::Style;
use tui_textarea::{CursorMove, Input, Key, TextArea};

/// Text input holding the current query.
///
/// The underlying [`TextArea`] is multi-line; line breaks are rejected so the
/// query always stays on its first line.
#[derive(Debug, Clone)]
pub struct QueryInput<'a> {
	textarea: TextArea<'a>,
	placeholder: String,
	placeholder_style: Style,
	style: Style,
}

impl<'a> QueryInput<'a> {
	#[must_use]
	pub fn new(initial: impl Into<String>) -> Self {
		let mut input = Self {
			textarea: TextArea::default(),
			placeholder: String::new(),
			placeholder_style: Style::default(),
			style: Style::default(),
		};
		input.set_text(initial);
		input
	}

	/// Current query text.
	#[must_use]
	pub fn text(&self) -> &str {
		self.textarea
			.lines()
			.first()
			.map(String::as_str)
			.unwrap_or("")
	}

	/// Replace the query, keeping placeholder and styling.
	///
	/// The editor is rebuilt, so the replaced text cannot be undone.
	pub fn set_text(&mut self, text: impl Into<String>) {
		let text: String = text.into();
		let single_line = text.replace(['\r', '\n'], " ");
		self.textarea = TextArea::new(vec![single_line]);
		self.textarea.move_cursor(CursorMove::End);
		self.apply_look();
	}

	/// Feed a key event to the editor. Returns `true` when the text changed.
	pub fn input(&mut self, key: KeyEvent) -> bool {
		let input: Input = key.into();
		match input {
			Input {
				key: Key::Enter | Key::Tab,
				..
			}
			| Input {
				key: Key::Char('m' | 'j'),
				ctrl: true,
				..
			} => false,
			input => self.textarea.input(input),
		}
	}

	pub fn set_placeholder(&mut self, placeholder: impl Into<String>, style: Style) {
		self.placeholder = placeholder.into();
		self.placeholder_style = style;
		self.apply_look();
	}

	pub fn set_style(&mut self, style: Style) {
		self.style = style;
		self.apply_look();
	}

	fn apply_look(&mut self) {
		self.textarea.set_placeholder_text(self.placeholder.clone());
		self.textarea.set_placeholder_style(self.placeholder_style);
		self.textarea.set_style(self.style);
		self.textarea.set_cursor_line_style(Style::default());
	}

	pub(crate) fn widget(&self) -> &TextArea<'a> {
		&self.textarea
	}
}
