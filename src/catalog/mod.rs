//! Article records and the read-only catalog that holds them.
//!
//! A [`Catalog`] is assembled once at startup, either from the built-in seed
//! set or from a TOML document, and is never mutated afterwards. Everything
//! else in the crate borrows from it.

mod error;
mod seed;

use std::collections::HashSet;
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

pub use error::CatalogError;

/// Stable identifier of an [`Article`].
pub type ArticleId = u32;

/// A single article summary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Article {
	pub id: ArticleId,
	pub title: String,
	/// Display string, never parsed.
	pub date: String,
	/// Body text. Embedded line breaks are preserved when rendered.
	pub content: String,
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub time_to_read: Option<String>,
	/// Thumbnail URL.
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub thumbnail: Option<String>,
}

impl Article {
	#[must_use]
	pub fn new(
		id: ArticleId,
		title: impl Into<String>,
		date: impl Into<String>,
		content: impl Into<String>,
	) -> Self {
		Self {
			id,
			title: title.into(),
			date: date.into(),
			content: content.into(),
			time_to_read: None,
			thumbnail: None,
		}
	}

	#[must_use]
	pub fn with_time_to_read(mut self, label: impl Into<String>) -> Self {
		self.time_to_read = Some(label.into());
		self
	}

	#[must_use]
	pub fn with_thumbnail(mut self, url: impl Into<String>) -> Self {
		self.thumbnail = Some(url.into());
		self
	}
}

/// On-disk shape of a catalog file.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct CatalogDocument {
	articles: Vec<Article>,
}

/// Ordered, read-only sequence of articles with unique ids.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
	articles: Vec<Article>,
}

impl Catalog {
	/// Build a catalog, rejecting duplicated ids.
	pub fn new(articles: Vec<Article>) -> Result<Self, CatalogError> {
		let mut seen = HashSet::with_capacity(articles.len());
		for article in &articles {
			if !seen.insert(article.id) {
				return Err(CatalogError::DuplicateId { id: article.id });
			}
		}
		Ok(Self { articles })
	}

	/// The built-in article set.
	#[must_use]
	pub fn seeded() -> Self {
		Self {
			articles: seed::articles(),
		}
	}

	/// Parse a catalog from a TOML document.
	pub fn from_toml_str(source: &str) -> Result<Self, CatalogError> {
		Self::parse(source, "<inline>")
	}

	/// Read and parse a catalog file.
	pub fn load(path: &Path) -> Result<Self, CatalogError> {
		let source = fs::read_to_string(path).map_err(|source| CatalogError::Read {
			path: path.to_path_buf(),
			source,
		})?;
		let catalog = Self::parse(&source, &path.display().to_string())?;
		tracing::info!(
			path = %path.display(),
			articles = catalog.len(),
			"loaded article catalog"
		);
		Ok(catalog)
	}

	fn parse(source: &str, origin: &str) -> Result<Self, CatalogError> {
		let document: CatalogDocument =
			toml::from_str(source).map_err(|source| CatalogError::Parse {
				origin: origin.to_string(),
				source,
			})?;
		Self::new(document.articles)
	}

	#[must_use]
	pub fn articles(&self) -> &[Article] {
		&self.articles
	}

	#[must_use]
	pub fn get(&self, id: ArticleId) -> Option<&Article> {
		self.articles.iter().find(|article| article.id == id)
	}

	#[must_use]
	pub fn contains(&self, id: ArticleId) -> bool {
		self.get(id).is_some()
	}

	#[must_use]
	pub fn len(&self) -> usize {
		self.articles.len()
	}

	#[must_use]
	pub fn is_empty(&self) -> bool {
		self.articles.is_empty()
	}
}
