use ratatui::Frame;
use ratatui::layout::{Alignment, Rect};
use ratatui::widgets::{Block, BorderType, Paragraph};
use unicode_width::UnicodeWidthStr;

use crate::ui::config::UiLabels;
use crate::ui::layout::centered;
use crate::ui::style::Theme;

/// Render the launcher button centered in `area` and return its bounds.
pub fn render_launcher(frame: &mut Frame, area: Rect, labels: &UiLabels, theme: &Theme) -> Rect {
	let caption = format!(" {} ", labels.launcher_label);
	// Two columns for the left and right border.
	let width = u16::try_from(caption.width())
		.unwrap_or(u16::MAX)
		.saturating_add(2);
	let button = centered(area, width, 3);

	let block = Block::bordered()
		.border_type(BorderType::Rounded)
		.border_style(theme.border());
	let paragraph = Paragraph::new(caption)
		.alignment(Alignment::Center)
		.style(theme.heading())
		.block(block);
	frame.render_widget(paragraph, button);

	if button.bottom() < area.bottom() && !labels.launcher_hint.is_empty() {
		let hint_area = Rect {
			x: area.x,
			y: button.bottom(),
			width: area.width,
			height: 1,
		};
		let hint = Paragraph::new(labels.launcher_hint.as_str())
			.alignment(Alignment::Center)
			.style(theme.muted());
		frame.render_widget(hint, hint_area);
	}

	button
}
