/// Text rendered around the modal and on the launcher screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UiLabels {
	/// Placeholder shown in the empty query input.
	pub placeholder: String,
	/// Heading above the list of matching summaries.
	pub summaries_title: String,
	/// Caption of the launcher button visible while the modal is closed.
	pub launcher_label: String,
	/// Key hint rendered beneath the launcher button.
	pub launcher_hint: String,
}

impl Default for UiLabels {
	fn default() -> Self {
		Self {
			placeholder: "Search...".to_string(),
			summaries_title: "Summaries".to_string(),
			launcher_label: "Open Search".to_string(),
			launcher_hint: "Enter to open \u{b7} q to quit".to_string(),
		}
	}
}

impl UiLabels {
	#[must_use]
	pub fn with_placeholder(mut self, placeholder: impl Into<String>) -> Self {
		self.placeholder = placeholder.into();
		self
	}

	#[must_use]
	pub fn with_summaries_title(mut self, title: impl Into<String>) -> Self {
		self.summaries_title = title.into();
		self
	}

	#[must_use]
	pub fn with_launcher_label(mut self, label: impl Into<String>) -> Self {
		self.launcher_label = label.into();
		self
	}
}
