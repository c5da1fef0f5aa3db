use std::io;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, mpsc};
use std::thread;
use std::time::Duration;

use anyhow::{Context, Result, anyhow};
use ratatui::crossterm::event::{
	self, DisableMouseCapture, EnableMouseCapture, Event, KeyEventKind,
};
use ratatui::crossterm::execute;

use crate::catalog::Catalog;
use crate::outcome::SessionOutcome;
use crate::ui::App;

/// Construct an [`App`] for the provided catalog and run it to completion.
pub fn run(catalog: Catalog) -> Result<SessionOutcome> {
	let mut app = App::new(catalog);
	app.run()
}

impl<'a> App<'a> {
	/// Pump the terminal event loop until the user quits.
	pub fn run(&mut self) -> Result<SessionOutcome> {
		let mut terminal = ratatui::init();
		if let Err(err) = execute!(io::stdout(), EnableMouseCapture) {
			tracing::warn!(error = %err, "mouse capture unavailable");
		}
		tracing::info!(articles = self.modal.catalog().len(), "session started");

		let (event_tx, event_rx) = mpsc::channel();
		let event_loop_running = Arc::new(AtomicBool::new(true));
		let event_loop_flag = Arc::clone(&event_loop_running);

		let event_thread = thread::spawn(move || -> Result<()> {
			while event_loop_flag.load(Ordering::Relaxed) {
				if event::poll(Duration::from_millis(50))? {
					let event = event::read()?;
					if event_tx.send(event).is_err() {
						break;
					}
				}
			}
			Ok(())
		});

		let result: Result<SessionOutcome> = 'event_loop: loop {
			if let Err(err) = terminal
				.draw(|frame| self.draw(frame))
				.context("failed to draw frame")
			{
				break Err(err);
			}

			let first = match event_rx.recv() {
				Ok(event) => event,
				Err(_) => break Err(anyhow!("input event channel disconnected")),
			};

			for event in std::iter::once(first).chain(event_rx.try_iter()) {
				let outcome = match event {
					Event::Key(key) if key.kind == KeyEventKind::Press => match self.handle_key(key)
					{
						Ok(outcome) => outcome,
						Err(err) => break 'event_loop Err(err),
					},
					Event::Mouse(mouse) => {
						self.handle_mouse(mouse);
						None
					}
					_ => None,
				};
				if let Some(outcome) = outcome {
					break 'event_loop Ok(outcome);
				}
			}
		};

		if let Err(err) = execute!(io::stdout(), DisableMouseCapture) {
			tracing::warn!(error = %err, "failed to release mouse capture");
		}
		ratatui::restore();

		event_loop_running.store(false, Ordering::Relaxed);
		match event_thread.join() {
			Ok(join_result) => join_result?,
			Err(err) => std::panic::resume_unwind(err),
		}

		if let Ok(outcome) = &result {
			tracing::info!(
				query = outcome.query.as_str(),
				selected = ?outcome.selection.as_ref().map(|article| article.id),
				"session finished"
			);
		}
		result
	}
}
