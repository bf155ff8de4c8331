use tracing::trace;

use crate::element::Element;

/// Intent a surface reports to its container.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Signal {
	QueryChanged(String),
	TogglePerson(String),
	RemovePerson(String),
	/// Keep only the first `n` selected people.
	RemovePeopleBeyond(usize),
	/// Replace the selected people.
	SelectPeople(Vec<String>),
	OpenAdvancedFilters,
	OpenPeopleView,
	Close,
	Search,
}

/// Keyboard focus moves a surface asks its container to perform.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FocusChange {
	Take(Element),
	/// Give up live focus if `Element` still holds it.
	Release(Element),
}

/// Everything a surface produced while handling one event.
///
/// The container drains it afterwards. Signals it has no use for are simply
/// dropped.
#[derive(Debug, Default)]
pub struct Outbox {
	signals: Vec<Signal>,
	focus: Vec<FocusChange>,
}

impl Outbox {
	pub fn emit(&mut self, signal: Signal) {
		trace!(?signal, "signal");
		self.signals.push(signal);
	}

	pub fn take_focus(&mut self, element: Element) {
		self.focus.push(FocusChange::Take(element));
	}

	pub fn release_focus(&mut self, element: Element) {
		self.focus.push(FocusChange::Release(element));
	}

	pub fn drain_signals(&mut self) -> Vec<Signal> {
		std::mem::take(&mut self.signals)
	}

	pub fn drain_focus(&mut self) -> Vec<FocusChange> {
		std::mem::take(&mut self.focus)
	}

	#[must_use]
	pub fn is_empty(&self) -> bool {
		self.signals.is_empty() && self.focus.is_empty()
	}
}
