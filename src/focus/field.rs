use std::time::{Duration, Instant};

use tracing::debug;

use super::state::{FocusFlags, FocusState, Presentation};
use crate::element::{Element, Region};
use crate::timer::{Timer, Timing, earliest};

/// Per-input timing and behaviour switches.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldConfig {
	pub blur_delay: Duration,
	pub caret_delay: Duration,
	pub refocus_delay: Duration,
	pub reveal_hold: Duration,
	/// Focus landing inside this region at blur time keeps the field open.
	pub keep_open: Option<Region>,
	pub reveal_on_refocus: bool,
	/// Committed text is drawn during the grace period instead of the
	/// placeholder.
	pub text_during_grace: bool,
}

impl FieldConfig {
	/// Configuration for the main query inputs.
	#[must_use]
	pub fn search(timing: &Timing) -> Self {
		Self {
			blur_delay: timing.search_blur,
			caret_delay: timing.caret_restore,
			refocus_delay: timing.refocus,
			reveal_hold: timing.reveal_hold,
			keep_open: None,
			reveal_on_refocus: false,
			text_during_grace: false,
		}
	}

	/// Configuration for the tag and location inputs of the modal.
	#[must_use]
	pub fn picker(timing: &Timing, keep_open: Region) -> Self {
		Self {
			blur_delay: timing.field_blur,
			keep_open: Some(keep_open),
			..Self::search(timing)
		}
	}

	#[must_use]
	pub fn with_keep_open(mut self, region: Region) -> Self {
		self.keep_open = Some(region);
		self
	}

	#[must_use]
	pub fn with_reveal_on_refocus(mut self) -> Self {
		self.reveal_on_refocus = true;
		self
	}

	#[must_use]
	pub fn with_text_during_grace(mut self) -> Self {
		self.text_during_grace = true;
		self
	}
}

/// What happened during a [`FocusField::tick`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FieldEvents {
	/// The blur debounce elapsed and the field lost its focused state.
	pub collapsed: bool,
	/// A deferred refocus is due; the owner should move live focus here.
	pub wants_focus: bool,
}

/// A single-line text input with debounced focus handling.
#[derive(Debug, Clone)]
pub struct FocusField {
	id: Element,
	config: FieldConfig,
	text: String,
	/// Caret position in characters.
	caret: usize,
	focused: bool,
	hovered: bool,
	just_opened: bool,
	reveal_pending: bool,
	blur_timer: Timer,
	caret_timer: Timer,
	refocus_timer: Timer,
	reveal_timer: Timer,
}

impl FocusField {
	#[must_use]
	pub fn new(id: Element, config: FieldConfig) -> Self {
		Self {
			id,
			config,
			text: String::new(),
			caret: 0,
			focused: false,
			hovered: false,
			just_opened: false,
			reveal_pending: false,
			blur_timer: Timer::default(),
			caret_timer: Timer::default(),
			refocus_timer: Timer::default(),
			reveal_timer: Timer::default(),
		}
	}

	#[must_use]
	pub fn id(&self) -> Element {
		self.id
	}

	#[must_use]
	pub fn text(&self) -> &str {
		&self.text
	}

	#[must_use]
	pub fn caret(&self) -> usize {
		self.caret
	}

	#[must_use]
	pub fn is_focused(&self) -> bool {
		self.focused
	}

	#[must_use]
	pub fn is_hovered(&self) -> bool {
		self.hovered
	}

	#[must_use]
	pub fn just_opened(&self) -> bool {
		self.just_opened
	}

	#[must_use]
	pub fn flags(&self) -> FocusFlags {
		FocusFlags {
			focused: self.focused,
			hovered: self.hovered,
			has_text: !self.text.is_empty(),
			just_opened: self.just_opened,
			reveal_pending: self.reveal_pending,
			text_during_grace: self.config.text_during_grace,
		}
	}

	#[must_use]
	pub fn state(&self) -> FocusState {
		FocusState::derive(self.flags())
	}

	#[must_use]
	pub fn presentation(&self) -> Presentation {
		Presentation::of(self.flags(), self.caret)
	}

	/// Take focus immediately. Any pending blur is forgotten.
	pub fn focus(&mut self, now: Instant) {
		if !self.focused {
			debug!(field = ?self.id, "focus");
		}
		self.focused = true;
		self.hovered = false;
		self.just_opened = false;
		self.blur_timer.cancel();
		self.refocus_timer.cancel();
		self.caret_timer.schedule(now, self.config.caret_delay);
		if self.reveal_pending {
			self.reveal_timer.schedule(now, self.config.reveal_hold);
		}
	}

	/// Start the blur debounce. The field stays focused until [`tick`]
	/// confirms that live focus really went elsewhere.
	///
	/// [`tick`]: FocusField::tick
	pub fn blur(&mut self, now: Instant) {
		if self.focused {
			self.blur_timer.schedule(now, self.config.blur_delay);
		}
	}

	/// Drop the focused state now. Returns whether the field was focused.
	pub fn collapse(&mut self) -> bool {
		let was_focused = self.focused;
		self.focused = false;
		self.blur_timer.cancel();
		self.caret_timer.cancel();
		self.refocus_timer.cancel();
		self.reveal_timer.cancel();
		if was_focused {
			self.reveal_pending =
				self.config.reveal_on_refocus && !self.text.trim().is_empty();
			debug!(field = ?self.id, reveal = self.reveal_pending, "collapse");
		}
		was_focused
	}

	/// Hover only registers while unfocused.
	pub fn pointer_enter(&mut self) {
		if !self.focused {
			self.hovered = true;
		}
	}

	pub fn pointer_leave(&mut self) {
		self.hovered = false;
	}

	pub fn insert_char(&mut self, ch: char) {
		let at = self.byte_index(self.caret);
		self.text.insert(at, ch);
		self.caret += 1;
		self.edited();
	}

	pub fn insert_str(&mut self, value: &str) {
		let at = self.byte_index(self.caret);
		self.text.insert_str(at, value);
		self.caret += value.chars().count();
		self.edited();
	}

	/// Delete the character before the caret. Returns `false` when there was
	/// nothing to delete.
	pub fn backspace(&mut self) -> bool {
		if self.caret == 0 {
			return false;
		}
		let start = self.byte_index(self.caret - 1);
		let end = self.byte_index(self.caret);
		self.text.replace_range(start..end, "");
		self.caret -= 1;
		self.edited();
		true
	}

	/// Delete the character under the caret.
	pub fn delete(&mut self) -> bool {
		if self.caret >= self.char_len() {
			return false;
		}
		let start = self.byte_index(self.caret);
		let end = self.byte_index(self.caret + 1);
		self.text.replace_range(start..end, "");
		self.edited();
		true
	}

	pub fn left(&mut self) {
		self.caret = self.caret.saturating_sub(1);
	}

	pub fn right(&mut self) {
		self.caret = (self.caret + 1).min(self.char_len());
	}

	pub fn home(&mut self) {
		self.caret = 0;
	}

	pub fn end(&mut self) {
		self.caret = self.char_len();
	}

	/// Replace the text and move the caret to its end.
	pub fn set_text(&mut self, value: impl Into<String>) {
		self.text = value.into();
		self.caret = self.char_len();
		self.edited();
	}

	/// Empty the text and schedule focus to come back to the input.
	pub fn clear(&mut self, now: Instant) {
		self.text.clear();
		self.caret = 0;
		self.edited();
		self.blur_timer.cancel();
		self.refocus_timer.schedule(now, self.config.refocus_delay);
	}

	/// Empty the text and unfocus without waiting for the blur debounce.
	pub fn escape(&mut self) {
		self.text.clear();
		self.caret = 0;
		self.edited();
		self.collapse();
	}

	/// A press on the committed-text layer asks for focus back.
	pub fn activate_display(&mut self, now: Instant) {
		self.refocus_timer.schedule(now, self.config.refocus_delay);
	}

	/// Arm the grace period: hover is ignored until the first focus.
	pub fn reopen(&mut self) {
		self.cancel_timers();
		self.focused = false;
		self.hovered = false;
		self.reveal_pending = false;
		self.just_opened = true;
	}

	/// Back to a fresh, empty, unfocused input.
	pub fn reset(&mut self) {
		self.cancel_timers();
		self.text.clear();
		self.caret = 0;
		self.focused = false;
		self.hovered = false;
		self.reveal_pending = false;
		self.just_opened = false;
	}

	/// Fire whatever timers are due.
	///
	/// `live_focus` is the element holding keyboard focus right now; the blur
	/// debounce consults it instead of whatever was true when blur started.
	pub fn tick(&mut self, now: Instant, live_focus: Option<Element>) -> FieldEvents {
		let mut events = FieldEvents::default();

		if self.blur_timer.fire(now) {
			let kept = live_focus.is_some_and(|element| {
				element == self.id || Some(element.region()) == self.config.keep_open
			});
			if !kept {
				events.collapsed = self.collapse();
			}
		}
		if self.refocus_timer.fire(now) {
			events.wants_focus = true;
		}
		if self.caret_timer.fire(now) {
			self.caret = self.char_len();
		}
		if self.reveal_timer.fire(now) {
			self.reveal_pending = false;
		}

		events
	}

	#[must_use]
	pub fn next_deadline(&self) -> Option<Instant> {
		earliest([
			self.blur_timer.due(),
			self.caret_timer.due(),
			self.refocus_timer.due(),
			self.reveal_timer.due(),
		])
	}

	#[must_use]
	pub fn blur_pending(&self) -> bool {
		self.blur_timer.is_pending()
	}

	fn cancel_timers(&mut self) {
		self.blur_timer.cancel();
		self.caret_timer.cancel();
		self.refocus_timer.cancel();
		self.reveal_timer.cancel();
	}

	fn edited(&mut self) {
		self.reveal_pending = false;
		self.reveal_timer.cancel();
	}

	fn char_len(&self) -> usize {
		self.text.chars().count()
	}

	fn byte_index(&self, char_index: usize) -> usize {
		self.text
			.char_indices()
			.nth(char_index)
			.map_or(self.text.len(), |(index, _)| index)
	}
}
