//! Visual styling for the modal.
//!
//! Themes are plain colour schemes resolved by name. The built-in set is
//! compiled in; there is no runtime registration.

pub mod theme;

pub use theme::{Theme, by_name, default_theme, names};
