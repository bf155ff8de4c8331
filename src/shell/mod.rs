//! The container that owns the canonical query and people selection and
//! routes every event to the surface on top.
//!
//! Keyboard focus is tracked here as `live_focus`, the element that would
//! receive the next keystroke. Each input's own `focused` flag lags behind
//! it by the blur debounce, and the debounce checks `live_focus` when it fires.

use std::time::Instant;

use rand::SeedableRng;
use rand::rngs::StdRng;
use tracing::{debug, info};

use crate::catalog::DEFAULT_TAGS;
use crate::criteria::FilterCriteria;
use crate::element::{Element, Surface};
use crate::event::{Key, UiEvent};
use crate::focus::FocusField;
use crate::selection::PeopleSelection;
use crate::surfaces::{AdvancedSearchModal, FocusChange, PeopleViewModal, SearchBox, Signal};
use crate::timer::{Timing, earliest};

/// Every text input, in the order timers are evaluated.
const INPUTS: [Element; 4] = [
	Element::SearchInput,
	Element::ModalSearchInput,
	Element::LocationInput,
	Element::TagsInput,
];

/// How a session ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShellOutcome {
	Searched(FilterCriteria),
	Cancelled,
}

/// Starting state for a [`SearchShell`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShellOptions {
	pub timing: Timing,
	pub initial_query: String,
	pub people: Vec<String>,
	pub tags: Vec<String>,
	/// Seed for the people view shuffle; `None` draws from the OS.
	pub seed: Option<u64>,
}

impl Default for ShellOptions {
	fn default() -> Self {
		Self {
			timing: Timing::default(),
			initial_query: String::new(),
			people: Vec::new(),
			tags: DEFAULT_TAGS.iter().map(|tag| tag.to_string()).collect(),
			seed: None,
		}
	}
}

type SearchHook = Box<dyn FnMut(&FilterCriteria)>;

pub struct SearchShell {
	query: String,
	people: PeopleSelection,
	search_box: SearchBox,
	advanced: AdvancedSearchModal,
	people_view: PeopleViewModal,
	live_focus: Option<Element>,
	hovered: Option<Element>,
	rng: StdRng,
	on_search: Option<SearchHook>,
	outcome: Option<ShellOutcome>,
}

impl SearchShell {
	#[must_use]
	pub fn new(options: ShellOptions) -> Self {
		let mut search_box = SearchBox::new(&options.timing);
		if !options.initial_query.is_empty() {
			search_box.query_mut().set_text(options.initial_query.as_str());
		}
		let mut people = PeopleSelection::new();
		people.sync_from(&options.people);
		let rng = match options.seed {
			Some(seed) => StdRng::seed_from_u64(seed),
			None => StdRng::from_entropy(),
		};

		Self {
			query: options.initial_query,
			people,
			search_box,
			advanced: AdvancedSearchModal::new(&options.timing, options.tags),
			people_view: PeopleViewModal::new(),
			live_focus: None,
			hovered: None,
			rng,
			on_search: None,
			outcome: None,
		}
	}

	/// Install a callback run with the final criteria whenever Search fires.
	#[must_use]
	pub fn on_search(mut self, hook: impl FnMut(&FilterCriteria) + 'static) -> Self {
		self.on_search = Some(Box::new(hook));
		self
	}

	#[must_use]
	pub fn query(&self) -> &str {
		&self.query
	}

	#[must_use]
	pub fn people(&self) -> &PeopleSelection {
		&self.people
	}

	#[must_use]
	pub fn search_box(&self) -> &SearchBox {
		&self.search_box
	}

	#[must_use]
	pub fn advanced(&self) -> &AdvancedSearchModal {
		&self.advanced
	}

	#[must_use]
	pub fn people_view(&self) -> &PeopleViewModal {
		&self.people_view
	}

	#[must_use]
	pub fn live_focus(&self) -> Option<Element> {
		self.live_focus
	}

	#[must_use]
	pub fn hovered(&self) -> Option<Element> {
		self.hovered
	}

	/// The surface receiving input: the last modal opened, else the search box.
	#[must_use]
	pub fn top_surface(&self) -> Surface {
		if self.people_view.is_open() {
			Surface::PeopleView
		} else if self.advanced.is_open() {
			Surface::AdvancedSearch
		} else {
			Surface::SearchBox
		}
	}

	/// The criteria a search issued now would carry.
	#[must_use]
	pub fn criteria(&self) -> FilterCriteria {
		let mut criteria = self.advanced.criteria();
		criteria.query = self.query.clone();
		criteria.people = self.people.to_vec();
		criteria
	}

	/// Earliest pending timer across every input.
	#[must_use]
	pub fn next_deadline(&self) -> Option<Instant> {
		earliest(
			INPUTS
				.iter()
				.filter_map(|input| self.field(*input))
				.map(FocusField::next_deadline),
		)
	}

	/// Process one event to completion, then fire due timers.
	///
	/// Returns the outcome once the session is over.
	pub fn handle(&mut self, event: UiEvent, now: Instant) -> Option<ShellOutcome> {
		match event {
			UiEvent::PointerMove(target) => self.pointer_move(target),
			UiEvent::PointerDown(target) => self.pointer_down(target, now),
			UiEvent::Click(target) => self.click(target, now),
			UiEvent::Key(key) => self.key(key, now),
			UiEvent::Tick => {}
		}
		self.fire_timers(now);
		self.outcome.take()
	}

	/// End the session without searching.
	pub fn cancel(&mut self) -> ShellOutcome {
		info!("session cancelled");
		ShellOutcome::Cancelled
	}

	fn on_top(&self, element: Element) -> bool {
		element.surface() == self.top_surface()
	}

	fn field(&self, element: Element) -> Option<&FocusField> {
		match element {
			Element::SearchInput => Some(self.search_box.query()),
			Element::ModalSearchInput => Some(self.advanced.query()),
			Element::LocationInput => Some(self.advanced.location_input()),
			Element::TagsInput => Some(self.advanced.tags_input()),
			_ => None,
		}
	}

	fn field_mut(&mut self, element: Element) -> Option<&mut FocusField> {
		match element {
			Element::SearchInput => Some(self.search_box.query_mut()),
			other => self.advanced.field_mut(other),
		}
	}

	fn pointer_move(&mut self, target: Option<Element>) {
		let target = target.filter(|element| self.on_top(*element));
		if target == self.hovered {
			return;
		}
		let before = self.hovered.and_then(Element::owning_input);
		let after = target.and_then(Element::owning_input);
		if before != after {
			if let Some(field) = before.and_then(|input| self.field_mut(input)) {
				field.pointer_leave();
			}
			if let Some(field) = after.and_then(|input| self.field_mut(input)) {
				field.pointer_enter();
			}
		}
		self.hovered = target;
	}

	fn pointer_down(&mut self, target: Option<Element>, now: Instant) {
		let target = target.filter(|element| self.on_top(*element));
		if self.top_surface() == Surface::AdvancedSearch {
			self.advanced.pointer_down(target);
			self.flush(now);
		}
		match target {
			Some(element) if element.suppresses_blur() => {}
			Some(element) => self.move_focus(takes_focus(element).then_some(element), now),
			None => self.move_focus(None, now),
		}
		self.flush(now);
	}

	fn click(&mut self, target: Element, now: Instant) {
		if !self.on_top(target) {
			return;
		}
		match target.surface() {
			Surface::SearchBox => self.search_box.click(target, now, &self.people),
			Surface::AdvancedSearch => self.advanced.click(target, now),
			Surface::PeopleView => self.people_view.click(target),
		}
		self.flush(now);
	}

	fn key(&mut self, key: Key, now: Instant) {
		if matches!(key, Key::Tab | Key::BackTab) {
			self.cycle_focus(key == Key::Tab, now);
			return;
		}

		let typing = self
			.live_focus
			.filter(|element| element.is_focusable() && self.on_top(*element));
		match typing {
			Some(Element::SearchInput) => {
				self.search_box.key(key, &self.people);
			}
			Some(focus) => {
				self.advanced.key(focus, key);
			}
			None => self.unfocused_key(key, now),
		}
		self.flush(now);
	}

	fn unfocused_key(&mut self, key: Key, now: Instant) {
		match (self.top_surface(), key) {
			(Surface::SearchBox, Key::Escape) => self.outcome = Some(self.cancel()),
			(Surface::SearchBox, Key::Char(ch)) => {
				self.move_focus(Some(Element::SearchInput), now);
				self.search_box.key(Key::Char(ch), &self.people);
			}
			(Surface::SearchBox, Key::Enter) => {
				if self.search_box.can_search() {
					self.search();
				}
			}
			(Surface::AdvancedSearch | Surface::PeopleView, Key::Escape) => self.close_top(),
			(Surface::AdvancedSearch, Key::Enter) => {
				if self.advanced.can_search() {
					self.search();
				}
			}
			(Surface::PeopleView, Key::Enter) => self.people_view.apply(),
			_ => {}
		}
	}

	fn cycle_focus(&mut self, forward: bool, now: Instant) {
		let inputs: &[Element] = match self.top_surface() {
			Surface::SearchBox => &Element::SEARCH_BOX_INPUTS,
			Surface::AdvancedSearch => &Element::MODAL_INPUTS,
			Surface::PeopleView => &[],
		};
		if inputs.is_empty() {
			return;
		}
		let current = self
			.live_focus
			.and_then(|focus| inputs.iter().position(|input| *input == focus));
		let next = match (current, forward) {
			(None, true) => 0,
			(None, false) => inputs.len() - 1,
			(Some(index), true) => (index + 1) % inputs.len(),
			(Some(index), false) => (index + inputs.len() - 1) % inputs.len(),
		};
		self.move_focus(Some(inputs[next]), now);
		self.flush(now);
	}

	/// Move live focus like a browser would: every other input starts its
	/// blur debounce and the new holder focuses at once.
	fn move_focus(&mut self, to: Option<Element>, now: Instant) {
		let settled = self.live_focus == to
			&& to.is_none_or(|element| {
				!element.is_focusable() || self.field(element).is_some_and(FocusField::is_focused)
			});
		if settled {
			return;
		}
		self.live_focus = to;
		for input in INPUTS {
			if Some(input) == to {
				continue;
			}
			if let Some(field) = self.field_mut(input)
				&& !field.blur_pending()
			{
				field.blur(now);
			}
		}
		if let Some(element) = to
			&& let Some(field) = self.field_mut(element)
		{
			field.focus(now);
			if element.surface() == Surface::AdvancedSearch {
				self.advanced.focused(element);
			}
		}
	}

	/// Collapse every input right away, for surface switches.
	fn drop_focus(&mut self) {
		self.live_focus = None;
		for input in INPUTS {
			if let Some(field) = self.field_mut(input)
				&& field.collapse()
				&& input.surface() == Surface::AdvancedSearch
			{
				self.advanced.collapsed(input);
			}
		}
	}

	fn fire_timers(&mut self, now: Instant) {
		for input in INPUTS {
			let live = self.live_focus;
			let Some(field) = self.field_mut(input) else {
				continue;
			};
			let events = field.tick(now, live);
			if events.collapsed && input.surface() == Surface::AdvancedSearch {
				self.advanced.collapsed(input);
			}
			if events.wants_focus && self.on_top(input) {
				self.move_focus(Some(input), now);
			}
		}
		self.flush(now);
	}

	/// Drain every surface's outbox until nothing is left.
	fn flush(&mut self, now: Instant) {
		loop {
			let mut focus = self.search_box.outbox().drain_focus();
			focus.extend(self.advanced.outbox().drain_focus());
			focus.extend(self.people_view.outbox().drain_focus());
			let mut signals = self.search_box.outbox().drain_signals();
			signals.extend(self.advanced.outbox().drain_signals());
			signals.extend(self.people_view.outbox().drain_signals());
			if focus.is_empty() && signals.is_empty() {
				return;
			}

			for change in focus {
				match change {
					FocusChange::Take(element) => self.move_focus(Some(element), now),
					FocusChange::Release(element) => {
						if self.live_focus == Some(element) {
							self.live_focus = None;
						}
					}
				}
			}
			for signal in signals {
				self.apply(signal);
			}
		}
	}

	fn apply(&mut self, signal: Signal) {
		debug!(?signal, "apply");
		match signal {
			Signal::QueryChanged(text) => {
				let inline = self.search_box.query_mut();
				if inline.text() != text {
					inline.set_text(text.as_str());
				}
				self.advanced.sync_query(&text);
				self.query = text;
			}
			Signal::TogglePerson(person) => {
				self.people.toggle(&person);
				self.sync_people();
			}
			Signal::RemovePerson(person) => {
				self.people.remove(&person);
				self.sync_people();
			}
			Signal::RemovePeopleBeyond(keep) => {
				self.people.truncate_to(keep);
				self.sync_people();
			}
			Signal::SelectPeople(people) => {
				self.people.sync_from(&people);
				self.sync_people();
			}
			Signal::OpenAdvancedFilters => self.open_advanced(),
			Signal::OpenPeopleView => self.open_people_view(),
			Signal::Close => self.close_top(),
			Signal::Search => self.search(),
		}
	}

	fn sync_people(&mut self) {
		self.advanced.sync_people(self.people.as_slice());
	}

	fn open_advanced(&mut self) {
		if self.advanced.is_open() {
			return;
		}
		self.drop_focus();
		self.advanced.open(&self.query, self.people.as_slice());
	}

	fn open_people_view(&mut self) {
		if self.people_view.is_open() {
			return;
		}
		self.drop_focus();
		self.people_view.open(&mut self.rng);
	}

	fn close_top(&mut self) {
		if self.people_view.is_open() {
			self.people_view.close();
		} else if self.advanced.is_open() {
			self.drop_focus();
			self.advanced.close();
		}
		self.hovered = None;
	}

	fn search(&mut self) {
		let criteria = self.criteria();
		info!(query = %criteria.query, people = criteria.people.len(), "search");
		if let Some(hook) = self.on_search.as_mut() {
			hook(&criteria);
		}
		self.outcome = Some(ShellOutcome::Searched(criteria));
	}
}

/// Whether a press on `element` leaves it holding focus, the way a button
/// does. Backdrops and panel bodies hand focus back to nothing.
fn takes_focus(element: Element) -> bool {
	!matches!(
		element,
		Element::ModalOverlay | Element::ModalBody | Element::PeopleOverlay | Element::PeopleBody
	)
}
