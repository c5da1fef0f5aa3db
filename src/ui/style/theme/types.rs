use ratatui::style::{Color, Modifier, Style};

/// Colour palette for the launcher and modal. Widget styles are derived from
/// these five colours.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Theme {
	/// Headings, borders and the detail title.
	pub text: Color,
	/// Search glyph and query text.
	pub accent: Color,
	/// Dates, placeholder, close glyph and the backdrop.
	pub muted: Color,
	/// Background of the row under the keyboard cursor.
	pub surface: Color,
	/// Foreground of the selected article.
	pub selection: Color,
}

impl Theme {
	#[must_use]
	pub fn heading(&self) -> Style {
		Style::new().fg(self.text).add_modifier(Modifier::BOLD)
	}

	#[must_use]
	pub fn border(&self) -> Style {
		Style::new().fg(self.text)
	}

	#[must_use]
	pub fn prompt(&self) -> Style {
		Style::new().fg(self.accent)
	}

	#[must_use]
	pub fn muted(&self) -> Style {
		Style::new().fg(self.muted)
	}

	#[must_use]
	pub fn cursor_row(&self) -> Style {
		Style::new().bg(self.surface).fg(self.selection)
	}

	#[must_use]
	pub fn selected(&self) -> Style {
		Style::new().fg(self.selection).add_modifier(Modifier::BOLD)
	}

	/// Dimming layer drawn over the launcher while the modal is open.
	#[must_use]
	pub fn backdrop(&self) -> Style {
		Style::new().fg(self.muted).add_modifier(Modifier::DIM)
	}
}
