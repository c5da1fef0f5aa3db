use ratatui::layout::Rect;

/// Widest the modal grows, in columns.
pub(crate) const MODAL_MAX_WIDTH: u16 = 80;
/// Tallest the modal grows, in rows.
pub(crate) const MODAL_MAX_HEIGHT: u16 = 28;

/// Center a `width` x `height` box inside `area`, shrinking it to fit.
pub(crate) fn centered(area: Rect, width: u16, height: u16) -> Rect {
	let width = width.min(area.width);
	let height = height.min(area.height);
	Rect {
		x: area.x + (area.width - width) / 2,
		y: area.y + (area.height - height) / 2,
		width,
		height,
	}
}

/// Region occupied by the modal, leaving a margin of backdrop on every side
/// when the terminal is large enough.
pub(crate) fn modal_area(area: Rect) -> Rect {
	let width = area.width.saturating_sub(4).min(MODAL_MAX_WIDTH);
	let height = area.height.saturating_sub(2).min(MODAL_MAX_HEIGHT);
	centered(area, width, height)
}
