use std::time::Instant;

use tracing::debug;

use super::signal::{Outbox, Signal};
use crate::catalog::{CAMERAS, FEATURED_PEOPLE, LOCATIONS, TAG_SUGGESTIONS};
use crate::criteria::{FileType, FilterCriteria};
use crate::element::{Element, Region};
use crate::event::Key;
use crate::focus::{FieldConfig, FocusField};
use crate::popover::{Popover, PopoverGroup};
use crate::selection::{PeopleSelection, TagList};
use crate::suggest::{EmptyQuery, SuggestionSource};
use crate::timer::Timing;

const TAG_SOURCE: SuggestionSource<'static> =
	SuggestionSource::new(&TAG_SUGGESTIONS, EmptyQuery::ShowAll);
const LOCATION_SOURCE: SuggestionSource<'static> =
	SuggestionSource::new(&LOCATIONS, EmptyQuery::ShowNone);

/// The advanced search modal: query, facets, tags and people.
#[derive(Debug)]
pub struct AdvancedSearchModal {
	open: bool,
	query: FocusField,
	location_input: FocusField,
	tags_input: FocusField,
	/// Facets edited by this modal. Query and people live in their own fields.
	criteria: FilterCriteria,
	/// Mirror of the container's people selection.
	people: PeopleSelection,
	popovers: PopoverGroup,
	file_types_expanded: bool,
	outbox: Outbox,
}

impl AdvancedSearchModal {
	#[must_use]
	pub fn new<I, S>(timing: &Timing, tags: I) -> Self
	where
		I: IntoIterator<Item = S>,
		S: Into<String>,
	{
		Self {
			open: false,
			query: FocusField::new(Element::ModalSearchInput, FieldConfig::search(timing)),
			location_input: FocusField::new(
				Element::LocationInput,
				FieldConfig::picker(timing, Region::Location),
			),
			tags_input: FocusField::new(
				Element::TagsInput,
				FieldConfig::picker(timing, Region::Tags),
			),
			criteria: FilterCriteria::with_tags(tags),
			people: PeopleSelection::new(),
			popovers: PopoverGroup::default(),
			file_types_expanded: false,
			outbox: Outbox::default(),
		}
	}

	#[must_use]
	pub fn is_open(&self) -> bool {
		self.open
	}

	/// Closed to open. The query is seeded from `initial_search_value` when
	/// that is non-empty, and the grace period is re-armed.
	pub fn open(&mut self, initial_search_value: &str, people: &[String]) {
		if !initial_search_value.is_empty() {
			self.query.set_text(initial_search_value);
		}
		self.query.reopen();
		self.people.sync_from(people);
		self.open = true;
		debug!(query = initial_search_value, people = people.len(), "advanced search open");
	}

	/// Open to closed. Query, people and tags survive; everything else goes
	/// back to defaults and every timer is cancelled.
	pub fn close(&mut self) {
		self.open = false;
		self.popovers.close_all();
		self.query.reopen();
		self.location_input.reset();
		self.tags_input.reset();
		self.criteria.reset_transient();
		self.file_types_expanded = false;
		debug!("advanced search closed");
	}

	/// Snapshot of every facet plus the current query and people.
	#[must_use]
	pub fn criteria(&self) -> FilterCriteria {
		let mut criteria = self.criteria.clone();
		criteria.query = self.query.text().to_string();
		criteria.people = self.people.to_vec();
		criteria
	}

	#[must_use]
	pub fn facets(&self) -> &FilterCriteria {
		&self.criteria
	}

	#[must_use]
	pub fn tags(&self) -> &TagList {
		&self.criteria.tags
	}

	#[must_use]
	pub fn query(&self) -> &FocusField {
		&self.query
	}

	#[must_use]
	pub fn location_input(&self) -> &FocusField {
		&self.location_input
	}

	#[must_use]
	pub fn tags_input(&self) -> &FocusField {
		&self.tags_input
	}

	#[must_use]
	pub fn people(&self) -> &PeopleSelection {
		&self.people
	}

	#[must_use]
	pub fn popovers(&self) -> &PopoverGroup {
		&self.popovers
	}

	#[must_use]
	pub fn file_types_expanded(&self) -> bool {
		self.file_types_expanded
	}

	#[must_use]
	pub fn offered_file_types(&self) -> &'static [&'static str] {
		FileType::offered(self.file_types_expanded)
	}

	/// Tag suggestions currently listed under the tag input.
	#[must_use]
	pub fn tag_suggestions(&self) -> Vec<&'static str> {
		if !self.popovers.is_open(Popover::TagSuggestions) {
			return Vec::new();
		}
		TAG_SOURCE.visible(
			self.tags_input.text(),
			self.tags_input.is_focused(),
			self.criteria.tags.as_slice(),
		)
	}

	#[must_use]
	pub fn location_suggestions(&self) -> Vec<&'static str> {
		if !self.popovers.is_open(Popover::LocationSuggestions) {
			return Vec::new();
		}
		LOCATION_SOURCE.visible(
			self.location_input.text(),
			self.location_input.is_focused(),
			&[],
		)
	}

	/// Search is offered only when something would narrow the results.
	#[must_use]
	pub fn can_search(&self) -> bool {
		!self.criteria().is_empty()
	}

	pub(crate) fn outbox(&mut self) -> &mut Outbox {
		&mut self.outbox
	}

	pub(crate) fn field_mut(&mut self, element: Element) -> Option<&mut FocusField> {
		match element {
			Element::ModalSearchInput => Some(&mut self.query),
			Element::LocationInput => Some(&mut self.location_input),
			Element::TagsInput => Some(&mut self.tags_input),
			_ => None,
		}
	}

	pub(crate) fn sync_people(&mut self, people: &[String]) {
		self.people.sync_from(people);
	}

	pub(crate) fn sync_query(&mut self, text: &str) {
		if self.query.text() != text {
			self.query.set_text(text);
		}
	}

	/// An input just received focus.
	pub(crate) fn focused(&mut self, element: Element) {
		let popover = match element {
			Element::TagsInput => Popover::TagSuggestions,
			Element::LocationInput => Popover::LocationSuggestions,
			_ => return,
		};
		if let Some(displaced) = self.popovers.open(popover) {
			self.displaced(displaced);
		}
	}

	/// An input's blur debounce elapsed.
	pub(crate) fn collapsed(&mut self, element: Element) {
		match element {
			Element::TagsInput => {
				self.popovers.close(Popover::TagSuggestions);
			}
			Element::LocationInput => {
				self.popovers.close(Popover::LocationSuggestions);
			}
			_ => {}
		}
	}

	/// Outside-click detection for the open popover.
	pub(crate) fn pointer_down(&mut self, target: Option<Element>) {
		if let Some(closed) = self.popovers.pointer_down(target.map(Element::region)) {
			debug!(popover = ?closed, "closed by outside press");
			self.release_feeder(closed);
		}
	}

	pub(crate) fn click(&mut self, element: Element, now: Instant) {
		match element {
			Element::ModalOverlay | Element::ModalClose => self.outbox.emit(Signal::Close),
			Element::ModalSearchClear => {
				self.query.clear(now);
				self.query_changed();
			}
			Element::ModalSearchDisplayText => self.query.activate_display(now),
			Element::MediaType(media_type) => self.criteria.media_type = media_type,
			Element::ModalPersonChipClose(index) => {
				if let Some(person) = self.people.as_slice().get(index).cloned() {
					self.toggle_person(&person);
				}
			}
			Element::ModalPerson(index) => {
				if let Some(person) = FEATURED_PEOPLE.get(index) {
					self.toggle_person(person.name);
				}
			}
			Element::ModalSeeAllPeople => self.outbox.emit(Signal::OpenPeopleView),
			Element::DateInput => self.toggle_popover(Popover::Date),
			Element::DatePreset(preset) => {
				self.criteria.date = preset;
				self.popovers.close(Popover::Date);
			}
			Element::DatePrevMonth => self.criteria.calendar = self.criteria.calendar.previous(),
			Element::DateNextMonth => self.criteria.calendar = self.criteria.calendar.next(),
			Element::DateApply | Element::DateCancel => {
				self.popovers.close(Popover::Date);
			}
			Element::LocationClear => {
				self.location_input.clear(now);
				self.criteria.location.clear();
			}
			Element::LocationDisplayText => self.location_input.activate_display(now),
			Element::LocationSuggestion(index) => self.select_location(index),
			Element::CameraInput => self.toggle_popover(Popover::Camera),
			Element::CameraOption(index) => {
				if let Some(camera) = CAMERAS.get(index) {
					self.criteria.camera = (*camera).to_string();
				}
				self.popovers.close(Popover::Camera);
			}
			Element::FileTypeAll => self.criteria.file_type = FileType::All,
			Element::FileType(index) => {
				if let Some(ext) = self.offered_file_types().get(index) {
					self.criteria.file_type = FileType::Extension((*ext).to_string());
				}
			}
			Element::FileTypesMore => self.file_types_expanded = !self.file_types_expanded,
			Element::Scope(scope) => self.criteria.scope = scope,
			Element::TagsClear => self.tags_input.clear(now),
			Element::TagChipClose(index) => {
				if let Some(tag) = self.criteria.tags.get(index).map(str::to_string) {
					self.criteria.tags.remove(&tag);
				}
			}
			Element::TagSuggestion(index) => self.select_tag(index),
			Element::ClearAll => self.clear_all(),
			Element::ModalSearchButton => {
				if self.can_search() {
					self.outbox.emit(Signal::Search);
				}
			}
			_ => {}
		}
	}

	/// Keys typed while one of the modal's inputs holds focus.
	pub(crate) fn key(&mut self, focus: Element, key: Key) -> bool {
		match focus {
			Element::ModalSearchInput => self.query_key(key),
			Element::LocationInput => self.location_key(key),
			Element::TagsInput => self.tags_key(key),
			_ => false,
		}
	}

	/// Reset the facets, the people and the query.
	///
	/// The calendar month and the query input's grace period are untouched.
	pub fn clear_all(&mut self) {
		self.criteria.clear_all();
		self.query.set_text("");
		self.people.clear();
		self.location_input.reset();
		self.tags_input.reset();
		self.file_types_expanded = false;
		self.popovers.close_all();
		self.outbox.release_focus(Element::LocationInput);
		self.outbox.release_focus(Element::TagsInput);
		self.outbox.emit(Signal::QueryChanged(String::new()));
		self.outbox.emit(Signal::SelectPeople(Vec::new()));
		debug!("clear all");
	}

	fn query_key(&mut self, key: Key) -> bool {
		match key {
			Key::Escape => {
				self.query.escape();
				self.query_changed();
				self.outbox.release_focus(Element::ModalSearchInput);
			}
			Key::Enter => {
				if self.can_search() {
					self.outbox.emit(Signal::Search);
				}
			}
			other => {
				if edit(&mut self.query, other) {
					self.query_changed();
				}
			}
		}
		true
	}

	fn location_key(&mut self, key: Key) -> bool {
		match key {
			Key::Escape => {
				self.location_input.escape();
				self.criteria.location.clear();
				self.popovers.close(Popover::LocationSuggestions);
				self.outbox.release_focus(Element::LocationInput);
			}
			Key::Enter => {
				if !self.location_suggestions().is_empty() {
					self.select_location(0);
				}
			}
			other => {
				if edit(&mut self.location_input, other) {
					self.criteria.location.clear();
					if let Some(displaced) = self.popovers.open(Popover::LocationSuggestions) {
						self.displaced(displaced);
					}
				}
			}
		}
		true
	}

	fn tags_key(&mut self, key: Key) -> bool {
		match key {
			Key::Escape => {
				self.tags_input.escape();
				self.popovers.close(Popover::TagSuggestions);
				self.outbox.release_focus(Element::TagsInput);
			}
			Key::Enter => {
				if !self.tag_suggestions().is_empty() {
					self.select_tag(0);
				}
			}
			other => {
				edit(&mut self.tags_input, other);
			}
		}
		true
	}

	fn select_location(&mut self, index: usize) {
		let Some(location) = self.location_suggestions().get(index).copied() else {
			return;
		};
		self.criteria.location = location.to_string();
		self.location_input.set_text(location);
		self.location_input.collapse();
		self.popovers.close(Popover::LocationSuggestions);
		self.outbox.release_focus(Element::LocationInput);
	}

	fn select_tag(&mut self, index: usize) {
		let Some(tag) = self.tag_suggestions().get(index).copied() else {
			return;
		};
		self.criteria.tags.add(tag);
		self.tags_input.set_text("");
		self.tags_input.collapse();
		self.popovers.close(Popover::TagSuggestions);
		self.outbox.release_focus(Element::TagsInput);
	}

	fn toggle_person(&mut self, person: &str) {
		self.people.toggle(person);
		self.outbox.emit(Signal::TogglePerson(person.to_string()));
	}

	fn toggle_popover(&mut self, popover: Popover) {
		if let Some(displaced) = self.popovers.toggle(popover) {
			self.displaced(displaced);
		}
	}

	fn displaced(&mut self, popover: Popover) {
		debug!(?popover, "displaced by sibling");
		self.release_feeder(popover);
	}

	/// Collapse the input that feeds a suggestion popover.
	fn release_feeder(&mut self, popover: Popover) {
		let (field, element) = match popover {
			Popover::TagSuggestions => (&mut self.tags_input, Element::TagsInput),
			Popover::LocationSuggestions => (&mut self.location_input, Element::LocationInput),
			Popover::Date | Popover::Camera => return,
		};
		if field.collapse() {
			self.outbox.release_focus(element);
		}
	}

	fn query_changed(&mut self) {
		let text = self.query.text().to_string();
		self.outbox.emit(Signal::QueryChanged(text));
	}
}

/// Apply an editing key to a field. Returns whether the text changed.
fn edit(field: &mut FocusField, key: Key) -> bool {
	match key {
		Key::Char(ch) => {
			field.insert_char(ch);
			true
		}
		Key::Backspace => field.backspace(),
		Key::Delete => field.delete(),
		Key::Left => {
			field.left();
			false
		}
		Key::Right => {
			field.right();
			false
		}
		Key::Home => {
			field.home();
			false
		}
		Key::End => {
			field.end();
			false
		}
		Key::Enter | Key::Escape | Key::Tab | Key::BackTab => false,
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::catalog::DEFAULT_TAGS;
	use crate::criteria::{DatePreset, MediaType, SearchScope};
	use crate::focus::FocusState;

	fn modal() -> AdvancedSearchModal {
		AdvancedSearchModal::new(&Timing::default(), DEFAULT_TAGS)
	}

	#[test]
	fn opening_with_prefilled_query_shows_default_state() {
		let mut modal = modal();
		modal.open("sunset", &[]);
		assert_eq!(modal.query().text(), "sunset");
		assert_eq!(modal.query().state(), FocusState::Default);
		modal.field_mut(Element::ModalSearchInput)
			.expect("query field")
			.focus(Instant::now());
		assert_eq!(modal.query().state(), FocusState::Typing);
	}

	#[test]
	fn empty_initial_value_keeps_previous_query() {
		let mut modal = modal();
		modal.open("dunes", &[]);
		modal.close();
		modal.open("", &[]);
		assert_eq!(modal.query().text(), "dunes");
	}

	#[test]
	fn close_resets_facets_but_keeps_query_people_and_tags() {
		let now = Instant::now();
		let mut modal = modal();
		modal.open("dunes", &["Noah Brown".to_string()]);
		modal.click(Element::MediaType(MediaType::Videos), now);
		modal.click(Element::Scope(SearchScope::Favorites), now);
		modal.click(Element::DateInput, now);
		modal.click(Element::DatePreset(DatePreset::LastMonth), now);
		modal.click(Element::CameraInput, now);
		modal.close();

		let criteria = modal.criteria();
		assert_eq!(criteria.media_type, MediaType::Photos);
		assert_eq!(criteria.scope, SearchScope::All);
		assert_eq!(criteria.date, DatePreset::AnyDate);
		assert_eq!(criteria.query, "dunes");
		assert_eq!(criteria.people, ["Noah Brown"]);
		assert_eq!(criteria.tags.as_slice(), ["beach", "summer 2025"]);
		assert_eq!(modal.popovers().current(), None);
	}

	#[test]
	fn date_preset_commits_and_closes() {
		let now = Instant::now();
		let mut modal = modal();
		modal.open("", &[]);
		modal.click(Element::DateInput, now);
		assert!(modal.popovers().is_open(Popover::Date));
		modal.click(Element::DateNextMonth, now);
		assert!(modal.popovers().is_open(Popover::Date));
		modal.click(Element::DatePreset(DatePreset::ThisYear), now);
		assert_eq!(modal.facets().date, DatePreset::ThisYear);
		assert_eq!(modal.facets().calendar.to_string(), "March 2024");
		assert!(!modal.popovers().is_open(Popover::Date));
	}

	#[test]
	fn camera_and_date_popovers_exclude_each_other() {
		let now = Instant::now();
		let mut modal = modal();
		modal.open("", &[]);
		modal.click(Element::DateInput, now);
		modal.click(Element::CameraInput, now);
		assert!(modal.popovers().is_open(Popover::Camera));
		assert!(!modal.popovers().is_open(Popover::Date));
		modal.click(Element::CameraOption(4), now);
		assert_eq!(modal.facets().camera, "Nikon D850");
		assert_eq!(modal.popovers().current(), None);
	}

	#[test]
	fn tag_suggestion_adds_tag_and_collapses_input() {
		let now = Instant::now();
		let mut modal = modal();
		modal.open("", &[]);
		modal.field_mut(Element::TagsInput).expect("tags").focus(now);
		modal.focused(Element::TagsInput);
		assert_eq!(modal.tag_suggestions()[0], "holiday");

		modal.click(Element::TagSuggestion(0), now);
		assert_eq!(
			modal.tags().as_slice(),
			["beach", "summer 2025", "holiday"]
		);
		assert!(!modal.tags_input().is_focused());
		assert!(modal.tag_suggestions().is_empty());
		assert!(
			modal
				.outbox()
				.drain_focus()
				.contains(&super::super::FocusChange::Release(Element::TagsInput))
		);
	}

	#[test]
	fn typing_a_location_clears_the_committed_one() {
		let now = Instant::now();
		let mut modal = modal();
		modal.open("", &[]);
		modal.field_mut(Element::LocationInput).expect("location").focus(now);
		modal.focused(Element::LocationInput);
		assert!(modal.location_suggestions().is_empty());

		for ch in "phoe".chars() {
			modal.key(Element::LocationInput, Key::Char(ch));
		}
		assert_eq!(modal.location_suggestions(), ["Phoenix, Arizona, USA"]);
		modal.key(Element::LocationInput, Key::Enter);
		assert_eq!(modal.facets().location, "Phoenix, Arizona, USA");
		assert_eq!(modal.location_input().text(), "Phoenix, Arizona, USA");

		modal.field_mut(Element::LocationInput).expect("location").focus(now);
		modal.key(Element::LocationInput, Key::Backspace);
		assert!(modal.facets().location.is_empty());
	}

	#[test]
	fn clear_all_resets_documented_fields() {
		let now = Instant::now();
		let mut modal = modal();
		modal.open("tide pools", &["Emma Williams".to_string()]);
		modal.click(Element::MediaType(MediaType::All), now);
		modal.click(Element::FileTypesMore, now);
		modal.click(Element::FileType(9), now);
		modal.click(Element::Scope(SearchScope::Archive), now);
		modal.click(Element::DatePrevMonth, now);
		let just_opened = modal.query().just_opened();

		modal.clear_all();

		let criteria = modal.criteria();
		assert_eq!(criteria.media_type, MediaType::Photos);
		assert_eq!(criteria.file_type, FileType::All);
		assert_eq!(criteria.scope, SearchScope::All);
		assert!(criteria.tags.is_empty());
		assert!(criteria.people.is_empty());
		assert_eq!(criteria.date, DatePreset::AnyDate);
		assert!(criteria.location.is_empty());
		assert_eq!(criteria.camera, "Any camera");
		assert!(criteria.query.is_empty());
		assert_eq!(criteria.calendar.to_string(), "January 2024");
		assert!(!modal.file_types_expanded());
		assert_eq!(modal.query().just_opened(), just_opened);

		let signals = modal.outbox().drain_signals();
		assert!(signals.contains(&Signal::SelectPeople(Vec::new())));
	}

	#[test]
	fn search_is_disabled_for_empty_criteria() {
		let now = Instant::now();
		let mut modal = AdvancedSearchModal::new(&Timing::default(), Vec::<String>::new());
		modal.open("", &[]);
		modal.click(Element::ModalSearchButton, now);
		assert!(modal.outbox().drain_signals().is_empty());

		modal.click(Element::Scope(SearchScope::Trash), now);
		modal.click(Element::ModalSearchButton, now);
		assert_eq!(modal.outbox().drain_signals(), [Signal::Search]);
	}

	#[test]
	fn people_toggles_are_mirrored_out() {
		let now = Instant::now();
		let mut modal = modal();
		modal.open("", &["Noah Brown".to_string()]);
		modal.click(Element::ModalPerson(0), now);
		modal.click(Element::ModalPersonChipClose(0), now);
		assert_eq!(modal.people().as_slice(), ["Oliver Thompson"]);
		assert_eq!(
			modal.outbox().drain_signals(),
			[
				Signal::TogglePerson("Oliver Thompson".into()),
				Signal::TogglePerson("Noah Brown".into())
			]
		);
	}
}
