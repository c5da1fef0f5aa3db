use std::io;
use std::path::PathBuf;

use thiserror::Error;

use super::ArticleId;

/// Failures raised while assembling a [`Catalog`](super::Catalog).
#[derive(Debug, Error)]
pub enum CatalogError {
	#[error("failed to read catalog {}: {source}", path.display())]
	Read {
		path: PathBuf,
		#[source]
		source: io::Error,
	},
	#[error("failed to parse catalog {origin}: {source}")]
	Parse {
		origin: String,
		#[source]
		source: toml::de::Error,
	},
	#[error("article id {id} appears more than once in the catalog")]
	DuplicateId { id: ArticleId },
}
