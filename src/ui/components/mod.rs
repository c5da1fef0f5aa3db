//! UI building blocks shared across rendering and state modules.

/// Closed-state launcher button.
pub mod launcher;
/// Detail view for the selected article.
pub mod preview;
/// Search glyph, query editor and close button.
pub mod prompt;
/// List of matching article titles.
pub mod summaries;

pub use launcher::render_launcher;
pub use preview::{PreviewContext, detail_text, render_preview};
pub use prompt::{PromptContext, render_prompt};
pub use summaries::{SummariesContext, render_summaries};
