//! Core crate exports for building and running the `recap` terminal modal.
//!
//! The root module re-exports the catalog, filter and UI entry points so that
//! embedders can drive the modal without digging through the module
//! hierarchy.

pub mod app_dirs;
pub mod catalog;
pub mod filter;
pub mod logging;
mod outcome;
pub mod ui;

pub use catalog::{Article, ArticleId, Catalog, CatalogError};
pub use filter::{filter_articles, filter_indices};
pub use outcome::SessionOutcome;
pub use ui::{App, ModalState, SearchModal, SearchUi, UiLabels, run};
