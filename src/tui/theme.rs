//! Built-in color schemes.

use ratatui::style::{Color, Modifier, Style};

use crate::focus::FocusState;

/// Styles for every piece of chrome the surfaces draw.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Theme {
	/// Body text.
	pub text: Style,
	/// Placeholders, section captions and disabled controls.
	pub muted: Style,
	/// Emphasis for the active input and primary buttons.
	pub accent: Style,
	/// Borders of idle inputs and panels.
	pub border: Style,
	/// Border of an input under the pointer.
	pub border_hover: Style,
	/// Border of a focused input.
	pub border_focus: Style,
	/// People and tag chips.
	pub chip: Style,
	/// Chosen facet values.
	pub selected: Style,
	/// Background behind an open modal.
	pub overlay: Style,
	/// Modal panels and popovers.
	pub panel: Style,
}

impl Theme {
	/// Border style for an input in the given interaction state.
	#[must_use]
	pub fn input_border(&self, state: FocusState) -> Style {
		match state {
			FocusState::Default => self.border,
			FocusState::Hovered => self.border_hover,
			FocusState::Active | FocusState::Typing => self.border_focus,
		}
	}

	#[must_use]
	pub fn button(&self, enabled: bool) -> Style {
		if enabled {
			self.accent.add_modifier(Modifier::BOLD)
		} else {
			self.muted
		}
	}

	/// Style for one option of a single-choice row.
	#[must_use]
	pub fn option(&self, chosen: bool) -> Style {
		if chosen { self.selected } else { self.text }
	}
}

pub const SLATE: Theme = Theme {
	text: Style::new().fg(Color::Rgb(226, 232, 240)),
	muted: Style::new().fg(Color::Rgb(100, 116, 139)),
	accent: Style::new().fg(Color::Rgb(56, 189, 248)),
	border: Style::new().fg(Color::Rgb(71, 85, 105)),
	border_hover: Style::new().fg(Color::Rgb(148, 163, 184)),
	border_focus: Style::new().fg(Color::Rgb(56, 189, 248)),
	chip: Style::new()
		.fg(Color::Rgb(226, 232, 240))
		.bg(Color::Rgb(51, 65, 85)),
	selected: Style::new()
		.fg(Color::Rgb(15, 23, 42))
		.bg(Color::Rgb(56, 189, 248)),
	overlay: Style::new().bg(Color::Rgb(2, 6, 23)),
	panel: Style::new()
		.fg(Color::Rgb(226, 232, 240))
		.bg(Color::Rgb(15, 23, 42)),
};

pub const PAPER: Theme = Theme {
	text: Style::new().fg(Color::Rgb(15, 23, 42)),
	muted: Style::new().fg(Color::Rgb(120, 120, 120)),
	accent: Style::new().fg(Color::Rgb(0, 102, 153)),
	border: Style::new().fg(Color::Rgb(180, 180, 180)),
	border_hover: Style::new().fg(Color::Rgb(100, 100, 100)),
	border_focus: Style::new().fg(Color::Rgb(0, 102, 153)),
	chip: Style::new()
		.fg(Color::Rgb(15, 23, 42))
		.bg(Color::Rgb(226, 232, 240)),
	selected: Style::new()
		.fg(Color::Rgb(255, 255, 255))
		.bg(Color::Rgb(0, 102, 153)),
	overlay: Style::new().bg(Color::Rgb(200, 200, 200)),
	panel: Style::new()
		.fg(Color::Rgb(15, 23, 42))
		.bg(Color::Rgb(250, 250, 250)),
};

const BUILT_IN: [(&str, Theme); 2] = [("slate", SLATE), ("paper", PAPER)];

pub const DEFAULT_THEME: &str = "slate";

/// Names of the built-in themes, default first.
#[must_use]
pub fn names() -> Vec<&'static str> {
	BUILT_IN.iter().map(|(name, _)| *name).collect()
}

/// Look a theme up by name, ignoring case.
#[must_use]
pub fn by_name(name: &str) -> Option<Theme> {
	BUILT_IN
		.iter()
		.find(|(candidate, _)| candidate.eq_ignore_ascii_case(name.trim()))
		.map(|(_, theme)| *theme)
}

impl Default for Theme {
	fn default() -> Self {
		SLATE
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn lookup_ignores_case_and_whitespace() {
		assert_eq!(by_name(" Paper "), Some(PAPER));
		assert_eq!(by_name("unknown"), None);
	}

	#[test]
	fn default_theme_is_listed_first() {
		assert_eq!(names().first().copied(), Some(DEFAULT_THEME));
		assert!(by_name(DEFAULT_THEME).is_some());
	}

	#[test]
	fn focused_inputs_use_the_focus_border() {
		assert_eq!(SLATE.input_border(FocusState::Typing), SLATE.border_focus);
		assert_eq!(SLATE.input_border(FocusState::Hovered), SLATE.border_hover);
	}
}
