use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::Style;
use ratatui::text::Line;
use ratatui::widgets::{HighlightSpacing, List, ListItem, ListState, Paragraph};

use crate::catalog::{Article, ArticleId};
use crate::ui::style::Theme;

const CURSOR_SYMBOL: &str = "\u{25b8} ";

/// Argument bundle for rendering the summaries column.
pub struct SummariesContext<'a> {
	pub title: &'a str,
	pub articles: &'a [&'a Article],
	pub selected: Option<ArticleId>,
	pub theme: &'a Theme,
}

/// Render the heading and the list of matching titles.
///
/// Returns the screen row occupied by each visible article so clicks can be
/// mapped back to ids. An empty result set renders an empty list.
pub fn render_summaries(
	frame: &mut Frame,
	area: Rect,
	state: &mut ListState,
	ctx: SummariesContext<'_>,
) -> Vec<(Rect, ArticleId)> {
	let [heading_area, _, list_area] = Layout::vertical([
		Constraint::Length(1),
		Constraint::Length(1),
		Constraint::Min(0),
	])
	.areas(area);

	frame.render_widget(
		Paragraph::new(ctx.title).style(ctx.theme.heading()),
		heading_area,
	);

	let items: Vec<ListItem<'_>> = ctx
		.articles
		.iter()
		.map(|article| {
			let style = if ctx.selected == Some(article.id) {
				ctx.theme.selected()
			} else {
				Style::default()
			};
			ListItem::new(Line::from(article.title.as_str())).style(style)
		})
		.collect();

	let list = List::new(items)
		.highlight_style(ctx.theme.cursor_row())
		.highlight_symbol(CURSOR_SYMBOL)
		.highlight_spacing(HighlightSpacing::Always);
	frame.render_stateful_widget(list, list_area, state);

	let offset = state.offset();
	ctx.articles
		.iter()
		.enumerate()
		.skip(offset)
		.take(usize::from(list_area.height))
		.map(|(position, article)| {
			let row = Rect {
				y: list_area.y + (position - offset) as u16,
				height: 1,
				..list_area
			};
			(row, article.id)
		})
		.collect()
}
