//! Detail view for the selected article.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::Modifier;
use ratatui::text::{Line, Span, Text};
use ratatui::widgets::{Block, BorderType, Paragraph, Wrap};

use crate::catalog::Article;
use crate::ui::style::Theme;

const THUMBNAIL_GLYPH: &str = "\u{25a3} ";

/// Context for rendering the preview pane.
pub struct PreviewContext<'a> {
	pub article: Option<&'a Article>,
	pub theme: &'a Theme,
}

/// Render the selected article, or nothing when there is no selection.
pub fn render_preview(frame: &mut Frame, area: Rect, ctx: PreviewContext<'_>) {
	let Some(article) = ctx.article else {
		return;
	};

	let block = Block::bordered()
		.border_type(BorderType::Rounded)
		.border_style(ctx.theme.border());
	let paragraph = Paragraph::new(detail_text(article, ctx.theme))
		.wrap(Wrap { trim: false })
		.block(block);
	frame.render_widget(paragraph, area);
}

/// Lines shown for `article`: date, title, content, then the thumbnail
/// block when a thumbnail is present.
#[must_use]
pub fn detail_text<'a>(article: &'a Article, theme: &Theme) -> Text<'a> {
	let mut lines = vec![
		Line::styled(article.date.as_str(), theme.muted()),
		Line::styled(article.title.as_str(), theme.heading()),
		Line::default(),
	];
	lines.extend(article.content.lines().map(Line::raw));

	if let Some(thumbnail) = &article.thumbnail {
		lines.push(Line::default());
		lines.push(Line::from(vec![
			Span::styled(THUMBNAIL_GLYPH, theme.prompt()),
			Span::styled(
				thumbnail.as_str(),
				theme.muted().add_modifier(Modifier::UNDERLINED),
			),
		]));
		if let Some(label) = &article.time_to_read {
			lines.push(Line::styled(
				format!("Time to read: {label}"),
				theme.muted(),
			));
		}
	}

	Text::from(lines)
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::catalog::Catalog;

	fn plain(text: &Text<'_>) -> Vec<String> {
		text.lines.iter().map(|line| line.to_string()).collect()
	}

	#[test]
	fn thumbnail_block_follows_content() {
		let catalog = Catalog::seeded();
		let article = catalog.get(1).expect("seed article");
		let lines = plain(&detail_text(article, &Theme::default()));

		assert_eq!(lines[0], "JUL 2, 2023");
		assert_eq!(lines[1], "Apple's WWDC 2023");
		assert!(lines[3].starts_with("\u{2022} Controlled by natural inputs"));
		assert_eq!(lines[4], "");
		assert!(lines[5].starts_with("\u{2022} Powered by visionOS"));
		assert!(lines[7].ends_with("w=300&h=300&fit=crop"));
		assert_eq!(lines.last().map(String::as_str), Some("Time to read: 7 min"));
	}

	#[test]
	fn missing_thumbnail_omits_read_time() {
		let catalog = Catalog::seeded();
		let article = catalog.get(2).expect("seed article");
		assert!(article.time_to_read.is_some());

		let lines = plain(&detail_text(article, &Theme::default()));
		assert_eq!(
			lines,
			[
				"JUN 28, 2023",
				"Meta's Data Setup",
				"",
				"Comprehensive overview of Meta's latest data infrastructure and privacy measures.",
			]
		);
	}

	#[test]
	fn thumbnail_without_read_time_shows_only_the_reference() {
		let article = Article::new(5, "Pictured", "MAY 1, 2024", "Body")
			.with_thumbnail("https://example.com/p.png");
		let lines = plain(&detail_text(&article, &Theme::default()));
		assert_eq!(lines.len(), 6);
		assert!(lines[5].contains("https://example.com/p.png"));
		assert!(lines.iter().all(|line| !line.starts_with("Time to read")));
	}
}
