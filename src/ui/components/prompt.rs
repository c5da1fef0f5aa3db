use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::widgets::Paragraph;

use crate::ui::input::QueryInput;
use crate::ui::style::Theme;

pub(crate) const SEARCH_GLYPH: &str = "\u{2315}";
pub(crate) const CLOSE_GLYPH: &str = "\u{2715}";

/// Argument bundle for rendering the prompt row.
pub struct PromptContext<'a, 'b> {
	pub input: &'a QueryInput<'b>,
	pub theme: &'a Theme,
}

/// Render the search glyph, query editor and close button on one row.
///
/// Returns the bounds of the close button.
pub fn render_prompt(frame: &mut Frame, area: Rect, ctx: PromptContext<'_, '_>) -> Rect {
	let [glyph_area, input_area, close_area] = Layout::horizontal([
		Constraint::Length(2),
		Constraint::Min(1),
		Constraint::Length(2),
	])
	.areas(area);

	frame.render_widget(
		Paragraph::new(SEARCH_GLYPH).style(ctx.theme.prompt()),
		glyph_area,
	);
	frame.render_widget(ctx.input.widget(), input_area);
	frame.render_widget(
		Paragraph::new(CLOSE_GLYPH)
			.alignment(Alignment::Right)
			.style(ctx.theme.muted()),
		close_area,
	);

	Rect {
		x: close_area.right().saturating_sub(1),
		width: 1.min(close_area.width),
		..close_area
	}
}
