use std::time::Instant;

use super::signal::{Outbox, Signal};
use crate::catalog::{FEATURED_PEOPLE, RECENT_SEARCHES};
use crate::element::{Element, Region};
use crate::event::Key;
use crate::focus::{FieldConfig, FocusField};
use crate::selection::{CHIP_OVERFLOW_LIMIT, PeopleSelection};
use crate::timer::Timing;

pub const PLACEHOLDER: &str = "Search photos by content, people, or metadata";

/// The inline search box and its suggestion dropdown.
#[derive(Debug)]
pub struct SearchBox {
	query: FocusField,
	recent: Vec<String>,
	outbox: Outbox,
}

impl SearchBox {
	#[must_use]
	pub fn new(timing: &Timing) -> Self {
		let config = FieldConfig::search(timing)
			.with_keep_open(Region::SearchDropdown)
			.with_reveal_on_refocus()
			.with_text_during_grace();
		let mut query = FocusField::new(Element::SearchInput, config);
		query.reopen();
		Self {
			query,
			recent: RECENT_SEARCHES.iter().map(|text| text.to_string()).collect(),
			outbox: Outbox::default(),
		}
	}

	#[must_use]
	pub fn query(&self) -> &FocusField {
		&self.query
	}

	pub(crate) fn query_mut(&mut self) -> &mut FocusField {
		&mut self.query
	}

	#[must_use]
	pub fn recent_searches(&self) -> &[String] {
		&self.recent
	}

	/// The dropdown follows the input's focused state.
	#[must_use]
	pub fn dropdown_visible(&self) -> bool {
		self.query.is_focused()
	}

	/// The dropdown's Search button needs something to search for.
	#[must_use]
	pub fn can_search(&self) -> bool {
		!self.query.text().trim().is_empty()
	}

	pub(crate) fn outbox(&mut self) -> &mut Outbox {
		&mut self.outbox
	}

	pub(crate) fn click(&mut self, element: Element, now: Instant, people: &PeopleSelection) {
		match element {
			Element::SearchClear => {
				self.query.clear(now);
				self.query_changed();
			}
			Element::SearchDisplayText => self.query.activate_display(now),
			Element::PersonChipClose(index) => {
				if let Some(person) = people.as_slice().get(index) {
					self.outbox.emit(Signal::RemovePerson(person.clone()));
				}
			}
			Element::OverflowChipClose => {
				self.outbox
					.emit(Signal::RemovePeopleBeyond(CHIP_OVERFLOW_LIMIT));
			}
			Element::RecentSearch(index) => {
				if let Some(text) = self.recent.get(index).cloned() {
					self.query.set_text(text);
					self.query_changed();
				}
			}
			Element::RecentSearchRemove(index) => {
				if index < self.recent.len() {
					self.recent.remove(index);
				}
			}
			Element::RecentClearAll => self.recent.clear(),
			Element::SuggestedPerson(index) => {
				if let Some(person) = FEATURED_PEOPLE.get(index) {
					self.query.set_text(person.name);
					self.query_changed();
				}
			}
			Element::SeeAllPeople => self.outbox.emit(Signal::OpenPeopleView),
			Element::AdvancedFiltersLink => self.outbox.emit(Signal::OpenAdvancedFilters),
			Element::DropdownSearchButton => {
				if self.can_search() {
					self.outbox.emit(Signal::Search);
				}
			}
			_ => {}
		}
	}

	/// Keys typed while the query input holds focus.
	pub(crate) fn key(&mut self, key: Key, people: &PeopleSelection) -> bool {
		match key {
			Key::Char(ch) => {
				self.query.insert_char(ch);
				self.query_changed();
			}
			Key::Backspace => {
				if self.query.text().is_empty() {
					if let Some(last) = people.as_slice().last() {
						self.outbox.emit(Signal::RemovePerson(last.clone()));
					}
				} else if self.query.backspace() {
					self.query_changed();
				}
			}
			Key::Delete => {
				if self.query.delete() {
					self.query_changed();
				}
			}
			Key::Left => self.query.left(),
			Key::Right => self.query.right(),
			Key::Home => self.query.home(),
			Key::End => self.query.end(),
			Key::Escape => {
				self.query.escape();
				self.query_changed();
				self.outbox.release_focus(Element::SearchInput);
			}
			Key::Enter => {
				if self.can_search() {
					self.outbox.emit(Signal::Search);
				}
			}
			Key::Tab | Key::BackTab => return false,
		}
		true
	}

	fn query_changed(&mut self) {
		let text = self.query.text().to_string();
		self.outbox.emit(Signal::QueryChanged(text));
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	fn people(names: &[&str]) -> PeopleSelection {
		let mut selection = PeopleSelection::new();
		selection.sync_from(names);
		selection
	}

	#[test]
	fn backspace_on_empty_query_removes_last_person() {
		let mut search = SearchBox::new(&Timing::default());
		let selected = people(&["Noah Brown", "Emma Williams"]);
		assert!(search.key(Key::Backspace, &selected));
		assert_eq!(
			search.outbox().drain_signals(),
			[Signal::RemovePerson("Emma Williams".into())]
		);
	}

	#[test]
	fn backspace_with_text_edits_the_query() {
		let mut search = SearchBox::new(&Timing::default());
		let selected = people(&["Noah Brown"]);
		search.key(Key::Char('a'), &selected);
		search.key(Key::Char('b'), &selected);
		search.outbox().drain_signals();
		search.key(Key::Backspace, &selected);
		assert_eq!(
			search.outbox().drain_signals(),
			[Signal::QueryChanged("a".into())]
		);
	}

	#[test]
	fn chip_close_names_the_person_at_that_index() {
		let mut search = SearchBox::new(&Timing::default());
		let selected = people(&["a", "b", "c", "d"]);
		search.click(Element::PersonChipClose(1), Instant::now(), &selected);
		assert_eq!(
			search.outbox().drain_signals(),
			[Signal::RemovePerson("b".into())]
		);
	}

	#[test]
	fn overflow_close_trims_to_the_visible_chips() {
		let mut search = SearchBox::new(&Timing::default());
		let selected = people(&["a", "b", "c", "d"]);
		search.click(Element::OverflowChipClose, Instant::now(), &selected);
		assert_eq!(
			search.outbox().drain_signals(),
			[Signal::RemovePeopleBeyond(2)]
		);
	}

	#[test]
	fn recent_searches_fill_the_query_and_can_be_removed() {
		let now = Instant::now();
		let mut search = SearchBox::new(&Timing::default());
		let selected = PeopleSelection::new();
		search.click(Element::RecentSearch(2), now, &selected);
		assert_eq!(search.query().text(), "christmas holidays 2025");

		search.click(Element::RecentSearchRemove(0), now, &selected);
		assert_eq!(search.recent_searches(), ["emma", "christmas holidays 2025"]);
		search.click(Element::RecentClearAll, now, &selected);
		assert!(search.recent_searches().is_empty());
	}

	#[test]
	fn dropdown_search_needs_a_non_blank_query() {
		let now = Instant::now();
		let mut search = SearchBox::new(&Timing::default());
		let selected = PeopleSelection::new();
		search.key(Key::Char(' '), &selected);
		search.outbox().drain_signals();
		search.click(Element::DropdownSearchButton, now, &selected);
		assert!(search.outbox().drain_signals().is_empty());

		search.click(Element::SuggestedPerson(1), now, &selected);
		search.click(Element::DropdownSearchButton, now, &selected);
		assert_eq!(
			search.outbox().drain_signals(),
			[
				Signal::QueryChanged("Sophia Martinez".into()),
				Signal::Search
			]
		);
	}
}
