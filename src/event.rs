//! Input events as the surfaces see them, independent of any terminal crate.

use crate::element::Element;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
	Char(char),
	Backspace,
	Delete,
	Left,
	Right,
	Home,
	End,
	Enter,
	Escape,
	Tab,
	BackTab,
}

/// One discrete interaction, processed to completion before the next.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UiEvent {
	/// The pointer moved; `target` is whatever element is now under it.
	PointerMove(Option<Element>),
	/// Pointer pressed. Focus movement and outside-click detection happen here.
	PointerDown(Option<Element>),
	/// Pointer released over the same element it was pressed on.
	Click(Element),
	Key(Key),
	/// Time passed; only timers are evaluated.
	Tick,
}

