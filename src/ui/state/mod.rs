//! State owned by the terminal front-end.

mod app;
mod modal;

pub use app::App;
pub(crate) use app::HitAreas;
pub use modal::{ModalState, SearchModal};
