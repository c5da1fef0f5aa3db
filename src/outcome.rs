use crate::catalog::Article;

/// State of the modal at the moment the user quit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionOutcome {
	pub query: String,
	/// Whether the modal was still open when the session ended.
	pub open: bool,
	pub selection: Option<Article>,
}
