//! Configuration loading and resolution utilities.
//!
//! `load` is the primary entry point and returns a [`ResolvedConfig`] that is
//! used by the application. Values are layered from defaults, config files,
//! `RECAP__*` environment variables and finally CLI flags.

mod loader;
mod raw;
mod resolved;
mod sources;

pub use loader::load;
pub use resolved::ResolvedConfig;
