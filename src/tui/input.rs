//! Translation of terminal events into shell events.

use ratatui::crossterm::event::{
	KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};

use super::hitmap::HitMap;
use crate::element::Element;
use crate::event::{Key, UiEvent};

/// Map a key press to the keys the shell understands.
#[must_use]
pub fn map_key(key: KeyEvent) -> Option<Key> {
	let chord = key.modifiers.intersects(KeyModifiers::CONTROL | KeyModifiers::ALT);
	let mapped = match key.code {
		KeyCode::Char(ch) if !chord => Key::Char(ch),
		KeyCode::Backspace => Key::Backspace,
		KeyCode::Delete => Key::Delete,
		KeyCode::Left => Key::Left,
		KeyCode::Right => Key::Right,
		KeyCode::Home => Key::Home,
		KeyCode::End => Key::End,
		KeyCode::Enter => Key::Enter,
		KeyCode::Esc => Key::Escape,
		KeyCode::Tab if key.modifiers.contains(KeyModifiers::SHIFT) => Key::BackTab,
		KeyCode::Tab => Key::Tab,
		KeyCode::BackTab => Key::BackTab,
		_ => return None,
	};
	Some(mapped)
}

/// Ctrl+C ends the session from anywhere.
#[must_use]
pub fn is_interrupt(key: KeyEvent) -> bool {
	key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL)
}

/// Turns raw mouse events into pointer-down and click pairs.
///
/// A click is only reported when the button is released over the element it
/// went down on.
#[derive(Debug, Default)]
pub struct PointerTracker {
	pressed: Option<Element>,
}

impl PointerTracker {
	pub fn mouse(&mut self, mouse: MouseEvent, hits: &HitMap) -> Vec<UiEvent> {
		let target = hits.hit(mouse.column, mouse.row);
		match mouse.kind {
			MouseEventKind::Moved | MouseEventKind::Drag(MouseButton::Left) => {
				vec![UiEvent::PointerMove(target)]
			}
			MouseEventKind::Down(MouseButton::Left) => {
				self.pressed = target;
				vec![UiEvent::PointerMove(target), UiEvent::PointerDown(target)]
			}
			MouseEventKind::Up(MouseButton::Left) => match (self.pressed.take(), target) {
				(Some(pressed), Some(released)) if pressed == released => {
					vec![UiEvent::Click(released)]
				}
				_ => Vec::new(),
			},
			_ => Vec::new(),
		}
	}
}

#[cfg(test)]
mod tests {
	use ratatui::crossterm::event::KeyEventKind;
	use ratatui::layout::Rect;

	use super::*;

	fn mouse(kind: MouseEventKind, column: u16, row: u16) -> MouseEvent {
		MouseEvent {
			kind,
			column,
			row,
			modifiers: KeyModifiers::NONE,
		}
	}

	fn hits() -> HitMap {
		let mut hits = HitMap::default();
		hits.push(Rect::new(0, 0, 10, 1), Element::SearchInput);
		hits.push(Rect::new(9, 0, 1, 1), Element::SearchClear);
		hits
	}

	#[test]
	fn press_and_release_on_the_same_element_clicks() {
		let hits = hits();
		let mut tracker = PointerTracker::default();
		assert_eq!(
			tracker.mouse(mouse(MouseEventKind::Down(MouseButton::Left), 9, 0), &hits),
			[
				UiEvent::PointerMove(Some(Element::SearchClear)),
				UiEvent::PointerDown(Some(Element::SearchClear))
			]
		);
		assert_eq!(
			tracker.mouse(mouse(MouseEventKind::Up(MouseButton::Left), 9, 0), &hits),
			[UiEvent::Click(Element::SearchClear)]
		);
	}

	#[test]
	fn releasing_elsewhere_does_not_click() {
		let hits = hits();
		let mut tracker = PointerTracker::default();
		tracker.mouse(mouse(MouseEventKind::Down(MouseButton::Left), 9, 0), &hits);
		assert!(
			tracker
				.mouse(mouse(MouseEventKind::Up(MouseButton::Left), 2, 0), &hits)
				.is_empty()
		);
	}

	#[test]
	fn keys_map_to_shell_keys() {
		let shift_tab =
			KeyEvent::new_with_kind(KeyCode::Tab, KeyModifiers::SHIFT, KeyEventKind::Press);
		assert_eq!(map_key(shift_tab), Some(Key::BackTab));
		let ctrl_c = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
		assert_eq!(map_key(ctrl_c), None);
		assert!(is_interrupt(ctrl_c));
		assert_eq!(
			map_key(KeyEvent::new(KeyCode::Char('x'), KeyModifiers::NONE)),
			Some(Key::Char('x'))
		);
	}
}
