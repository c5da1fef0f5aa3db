use ratatui::style::Color;

use super::types::Theme;

pub(super) const SLATE: Theme = Theme {
	text: Color::Rgb(226, 232, 240),
	accent: Color::LightCyan,
	muted: Color::DarkGray,
	surface: Color::Rgb(30, 41, 59),
	selection: Color::Rgb(250, 204, 21),
};

pub(super) const LIGHT: Theme = Theme {
	text: Color::Rgb(15, 23, 42),
	accent: Color::Rgb(0, 102, 153),
	muted: Color::Rgb(100, 100, 100),
	surface: Color::Rgb(200, 200, 200),
	selection: Color::Rgb(120, 120, 0),
};

pub(super) const SOLARIZED: Theme = Theme {
	text: Color::Rgb(253, 246, 227),
	accent: Color::Rgb(38, 139, 210),
	muted: Color::Rgb(88, 110, 117),
	surface: Color::Rgb(0, 43, 54),
	selection: Color::Rgb(181, 137, 0),
};

/// Canonical name, accepted aliases, palette. Listing order is this order.
pub(super) const BUILT_INS: &[(&str, &[&str], Theme)] = &[
	("slate", &["dark", "default"], SLATE),
	("light", &["day"], LIGHT),
	("solarized", &[], SOLARIZED),
];
