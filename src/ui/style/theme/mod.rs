mod builtins;
mod types;

pub use types::Theme;

use builtins::BUILT_INS;

/// Theme used when no name is configured.
#[must_use]
pub fn default_theme() -> Theme {
	builtins::SLATE
}

/// Canonical names of every built-in theme, in display order.
#[must_use]
pub fn names() -> Vec<&'static str> {
	BUILT_INS.iter().map(|(name, _, _)| *name).collect()
}

/// Look up a theme by canonical name or alias, ignoring case and surrounding
/// whitespace.
#[must_use]
pub fn by_name(name: &str) -> Option<Theme> {
	let wanted = name.trim().to_ascii_lowercase();
	BUILT_INS
		.iter()
		.find(|(canonical, aliases, _)| *canonical == wanted || aliases.contains(&wanted.as_str()))
		.map(|(_, _, theme)| *theme)
}

impl Default for Theme {
	fn default() -> Self {
		default_theme()
	}
}
