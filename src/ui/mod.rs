//! Interactive terminal UI for `recap`.
//!
//! The [`builder`] module exposes the public-facing [`SearchUi`] builder. The
//! remaining submodules implement the event loop, rendering pipeline, modal
//! state and the widgets and themes that draw it.

mod actions;
mod builder;
pub mod components;
mod config;
pub mod input;
mod layout;
mod render;
mod runtime;
mod state;
pub mod style;

pub use builder::SearchUi;
pub use config::UiLabels;
pub use runtime::run;
pub use state::{App, ModalState, SearchModal};
