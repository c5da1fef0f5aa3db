use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Margin, Rect};
use ratatui::widgets::{Block, BorderType, Borders, Clear};

use super::App;
use super::components::{
	PreviewContext, PromptContext, SummariesContext, render_launcher, render_preview,
	render_prompt, render_summaries,
};
use super::layout::modal_area;
use super::state::HitAreas;

impl<'a> App<'a> {
	/// Draw the launcher and, when open, the modal on top of a dimmed backdrop.
	pub fn draw(&mut self, frame: &mut Frame) {
		let area = frame.area();
		let mut hit_areas = HitAreas {
			launcher: render_launcher(frame, area, &self.labels, &self.theme),
			..HitAreas::default()
		};

		if self.modal.is_open() {
			frame.render_widget(Block::default().style(self.theme.backdrop()), area);
			self.render_modal(frame, modal_area(area), &mut hit_areas);
		}

		self.hit_areas = hit_areas;
	}

	fn render_modal(&mut self, frame: &mut Frame, area: Rect, hit_areas: &mut HitAreas) {
		frame.render_widget(Clear, area);
		let frame_block = Block::bordered()
			.border_type(BorderType::Rounded)
			.border_style(self.theme.border());
		let inner = frame_block.inner(area);
		frame.render_widget(frame_block, area);
		hit_areas.modal = Some(area);

		let [prompt_area, divider_area, body_area] = Layout::vertical([
			Constraint::Length(1),
			Constraint::Length(1),
			Constraint::Min(0),
		])
		.areas(inner.inner(Margin {
			horizontal: 1,
			vertical: 0,
		}));

		hit_areas.close_button = Some(render_prompt(
			frame,
			prompt_area,
			PromptContext {
				input: self.modal.query_input(),
				theme: &self.theme,
			},
		));
		frame.render_widget(
			Block::default()
				.borders(Borders::TOP)
				.border_style(self.theme.border()),
			divider_area,
		);

		let [list_area, preview_area] =
			Layout::horizontal([Constraint::Percentage(50), Constraint::Percentage(50)])
				.spacing(2)
				.areas(body_area);

		let selected = self.modal.selected_id();
		let (visible, cursor) = self.modal.list_parts();
		hit_areas.rows = render_summaries(
			frame,
			list_area,
			cursor,
			SummariesContext {
				title: &self.labels.summaries_title,
				articles: &visible,
				selected,
				theme: &self.theme,
			},
		);

		render_preview(
			frame,
			preview_area,
			PreviewContext {
				article: self.modal.selected(),
				theme: &self.theme,
			},
		);
	}
}
