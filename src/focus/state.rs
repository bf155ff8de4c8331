/// The booleans a text input's visual state is derived from.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FocusFlags {
	pub focused: bool,
	pub hovered: bool,
	pub has_text: bool,
	/// Armed when an input mounts or a modal opens; cleared by the first
	/// focus.
	pub just_opened: bool,
	/// Committed text still shows through the grace period.
	pub text_during_grace: bool,
	/// Set when the search box collapsed while holding text, so the next focus
	/// reveals the dropdown before returning to typing.
	pub reveal_pending: bool,
}

/// Visual state of a text input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FocusState {
	Default,
	Hovered,
	Active,
	Typing,
}

impl FocusState {
	/// Pure derivation from the current flags. No history is consulted.
	#[must_use]
	pub fn derive(flags: FocusFlags) -> Self {
		let text_shows = flags.text_during_grace && flags.has_text;
		if flags.just_opened && !flags.focused && !text_shows {
			return FocusState::Default;
		}
		match (flags.focused, flags.has_text) {
			(true, true) if flags.reveal_pending => FocusState::Active,
			(true, true) => FocusState::Typing,
			(true, false) => FocusState::Active,
			(false, true) => FocusState::Typing,
			(false, false) if flags.hovered => FocusState::Hovered,
			(false, false) => FocusState::Default,
		}
	}

	#[must_use]
	pub fn label(self) -> &'static str {
		match self {
			FocusState::Default => "default",
			FocusState::Hovered => "hovered",
			FocusState::Active => "active",
			FocusState::Typing => "typing",
		}
	}
}

/// Which of the competing layers of an input is emphasized.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Layer {
	/// Placeholder chrome, shown while nothing is committed or during the
	/// grace period after a modal opens.
	Placeholder,
	/// Committed text drawn as its own clickable layer.
	DisplayText,
	/// The editable input with a caret.
	NativeInput,
}

/// What a renderer needs to draw one input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Presentation {
	pub state: FocusState,
	pub layer: Layer,
	pub show_clear: bool,
	/// Caret position in characters, present only on the live input.
	pub caret: Option<usize>,
}

impl Presentation {
	#[must_use]
	pub fn of(flags: FocusFlags, caret: usize) -> Self {
		let state = FocusState::derive(flags);
		let layer = if flags.focused {
			Layer::NativeInput
		} else if state == FocusState::Typing {
			Layer::DisplayText
		} else {
			Layer::Placeholder
		};
		Self {
			state,
			layer,
			show_clear: flags.has_text,
			caret: (layer == Layer::NativeInput).then_some(caret),
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	fn flags(focused: bool, hovered: bool, has_text: bool, just_opened: bool) -> FocusFlags {
		FocusFlags {
			focused,
			hovered,
			has_text,
			just_opened,
			..FocusFlags::default()
		}
	}

	#[test]
	fn derivation_table() {
		use FocusState::*;
		let cases = [
			(flags(false, false, false, false), Default),
			(flags(false, true, false, false), Hovered),
			(flags(true, false, false, false), Active),
			(flags(true, true, false, false), Active),
			(flags(true, false, true, false), Typing),
			(flags(false, false, true, false), Typing),
			(flags(false, true, true, false), Typing),
			(flags(false, false, true, true), Default),
			(flags(false, true, false, true), Default),
			(flags(true, false, true, true), Typing),
		];
		for (input, expected) in cases {
			assert_eq!(FocusState::derive(input), expected, "{input:?}");
		}
	}

	#[test]
	fn every_flag_combination_follows_the_precedence() {
		for bits in 0u8..64 {
			let input = FocusFlags {
				focused: bits & 1 != 0,
				hovered: bits & 2 != 0,
				has_text: bits & 4 != 0,
				just_opened: bits & 8 != 0,
				reveal_pending: bits & 16 != 0,
				text_during_grace: bits & 32 != 0,
			};
			let state = FocusState::derive(input);
			let grace = input.just_opened && !(input.text_during_grace && input.has_text);

			if !input.focused && grace {
				assert_eq!(state, FocusState::Default, "{input:?}");
			}
			if input.focused && !input.has_text {
				assert_eq!(state, FocusState::Active, "{input:?}");
			}
			if input.focused && input.has_text {
				let expected = if input.reveal_pending {
					FocusState::Active
				} else {
					FocusState::Typing
				};
				assert_eq!(state, expected, "{input:?}");
			}
			if !input.focused && !grace && input.has_text {
				assert_eq!(state, FocusState::Typing, "{input:?}");
			}
			assert_eq!(
				state == FocusState::Hovered,
				input.hovered && !input.focused && !input.has_text && !input.just_opened,
				"{input:?}"
			);
		}
	}

	#[test]
	fn inline_text_shows_through_the_grace_period() {
		let input = FocusFlags {
			has_text: true,
			hovered: true,
			just_opened: true,
			text_during_grace: true,
			..FocusFlags::default()
		};
		assert_eq!(FocusState::derive(input), FocusState::Typing);
		assert_eq!(Presentation::of(input, 0).layer, Layer::DisplayText);

		let empty = FocusFlags {
			has_text: false,
			..input
		};
		assert_eq!(FocusState::derive(empty), FocusState::Default);
	}

	#[test]
	fn reveal_shows_active_while_focused_with_text() {
		let input = FocusFlags {
			focused: true,
			has_text: true,
			reveal_pending: true,
			..FocusFlags::default()
		};
		assert_eq!(FocusState::derive(input), FocusState::Active);
	}

	#[test]
	fn exactly_one_layer_is_emphasized() {
		let typed_unfocused = Presentation::of(flags(false, false, true, false), 3);
		assert_eq!(typed_unfocused.layer, Layer::DisplayText);
		assert_eq!(typed_unfocused.caret, None);
		assert!(typed_unfocused.show_clear);

		let focused = Presentation::of(flags(true, false, true, false), 2);
		assert_eq!(focused.layer, Layer::NativeInput);
		assert_eq!(focused.caret, Some(2));

		let grace = Presentation::of(flags(false, false, true, true), 0);
		assert_eq!(grace.layer, Layer::Placeholder);
		assert!(grace.show_clear);
	}
}
