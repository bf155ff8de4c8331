//! Every interactive target on the three surfaces.
//!
//! Elements are what the pointer lands on and what keyboard focus rests on.
//! The shell never inspects widget internals to decide focus movement; it
//! asks the element whether it is a text input, whether pressing on it must
//! leave the current focus alone, and which region it belongs to.

use crate::criteria::{DatePreset, MediaType, SearchScope};

/// Which surface an element is drawn on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Surface {
	SearchBox,
	AdvancedSearch,
	PeopleView,
}

/// Containers used for outside-click boundaries and keep-open checks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Region {
	/// Inline search box chrome: input, clear control and people chips.
	SearchBox,
	/// The suggestion dropdown under the inline search box.
	SearchDropdown,
	ModalOverlay,
	ModalPanel,
	ModalSearch,
	People,
	DatePicker,
	Location,
	Camera,
	Tags,
	PeopleOverlay,
	PeopleView,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Element {
	// inline search box
	SearchInput,
	SearchClear,
	SearchDisplayText,
	PersonChipClose(usize),
	OverflowChipClose,
	RecentSearch(usize),
	RecentSearchRemove(usize),
	RecentClearAll,
	SuggestedPerson(usize),
	SeeAllPeople,
	AdvancedFiltersLink,
	DropdownSearchButton,
	// advanced search modal
	ModalOverlay,
	ModalClose,
	ModalBody,
	ModalSearchInput,
	ModalSearchClear,
	ModalSearchDisplayText,
	MediaType(MediaType),
	ModalPersonChipClose(usize),
	ModalPerson(usize),
	ModalSeeAllPeople,
	DateInput,
	DatePreset(DatePreset),
	/// Blank space inside the open date picker.
	DatePanel,
	DatePrevMonth,
	DateNextMonth,
	DateApply,
	DateCancel,
	LocationInput,
	LocationClear,
	LocationDisplayText,
	LocationSuggestion(usize),
	CameraInput,
	/// Blank space inside the open camera menu.
	CameraMenu,
	CameraOption(usize),
	FileTypeAll,
	/// Index into the extensions currently offered.
	FileType(usize),
	FileTypesMore,
	Scope(SearchScope),
	TagsInput,
	TagsClear,
	TagChipClose(usize),
	TagSuggestion(usize),
	ClearAll,
	ModalSearchButton,
	// people view
	PeopleOverlay,
	PeopleBody,
	PeopleBack,
	RosterPerson(usize),
	PeopleApply,
}

impl Element {
	/// Text inputs in tab order, per surface.
	pub const SEARCH_BOX_INPUTS: [Element; 1] = [Element::SearchInput];
	pub const MODAL_INPUTS: [Element; 3] = [
		Element::ModalSearchInput,
		Element::LocationInput,
		Element::TagsInput,
	];

	#[must_use]
	pub fn surface(self) -> Surface {
		match self.region() {
			Region::SearchBox | Region::SearchDropdown => Surface::SearchBox,
			Region::PeopleOverlay | Region::PeopleView => Surface::PeopleView,
			_ => Surface::AdvancedSearch,
		}
	}

	#[must_use]
	pub fn region(self) -> Region {
		use Element::*;
		match self {
			SearchInput | SearchClear | SearchDisplayText | PersonChipClose(_)
			| OverflowChipClose => Region::SearchBox,
			RecentSearch(_) | RecentSearchRemove(_) | RecentClearAll | SuggestedPerson(_)
			| SeeAllPeople | AdvancedFiltersLink | DropdownSearchButton => Region::SearchDropdown,
			ModalOverlay => Region::ModalOverlay,
			ModalClose | ModalBody | Element::MediaType(_) | FileTypeAll | FileType(_)
			| FileTypesMore | Scope(_) | ClearAll | ModalSearchButton => Region::ModalPanel,
			ModalSearchInput | ModalSearchClear | ModalSearchDisplayText => Region::ModalSearch,
			ModalPersonChipClose(_) | ModalPerson(_) | ModalSeeAllPeople => Region::People,
			DateInput | DatePanel | Element::DatePreset(_) | DatePrevMonth | DateNextMonth
			| DateApply | DateCancel => Region::DatePicker,
			LocationInput | LocationClear | LocationDisplayText | LocationSuggestion(_) => {
				Region::Location
			}
			CameraInput | CameraMenu | CameraOption(_) => Region::Camera,
			TagsInput | TagsClear | TagChipClose(_) | TagSuggestion(_) => Region::Tags,
			PeopleOverlay => Region::PeopleOverlay,
			PeopleBody | PeopleBack | RosterPerson(_) | PeopleApply => Region::PeopleView,
		}
	}

	/// Whether the element takes keyboard focus when pressed.
	#[must_use]
	pub fn is_focusable(self) -> bool {
		matches!(
			self,
			Element::SearchInput
				| Element::ModalSearchInput
				| Element::LocationInput
				| Element::TagsInput
		)
	}

	/// Pressing these leaves focus where it is, so the click lands before any
	/// blur debounce gets a chance to collapse the surrounding chrome.
	#[must_use]
	pub fn suppresses_blur(self) -> bool {
		use Element::*;
		matches!(
			self,
			SearchClear
				| SearchDisplayText
				| PersonChipClose(_)
				| OverflowChipClose
				| RecentSearch(_)
				| RecentSearchRemove(_)
				| RecentClearAll
				| SuggestedPerson(_)
				| ModalSearchClear
				| ModalSearchDisplayText
				| ModalPersonChipClose(_)
				| LocationClear
				| LocationDisplayText
				| LocationSuggestion(_)
				| TagsClear
				| TagChipClose(_)
				| TagSuggestion(_)
		)
	}

	/// The text input an element belongs to, if any.
	///
	/// Clear controls and committed-text layers act on their input.
	#[must_use]
	pub fn owning_input(self) -> Option<Element> {
		use Element::*;
		match self {
			SearchInput | SearchClear | SearchDisplayText => Some(SearchInput),
			ModalSearchInput | ModalSearchClear | ModalSearchDisplayText => Some(ModalSearchInput),
			LocationInput | LocationClear | LocationDisplayText => Some(LocationInput),
			TagsInput | TagsClear => Some(TagsInput),
			_ => None,
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn only_text_inputs_are_focusable() {
		for input in Element::MODAL_INPUTS
			.iter()
			.chain(Element::SEARCH_BOX_INPUTS.iter())
		{
			assert!(input.is_focusable());
			assert!(!input.suppresses_blur());
		}
		assert!(!Element::DateInput.is_focusable());
		assert!(!Element::ModalSearchButton.is_focusable());
	}

	#[test]
	fn clear_controls_keep_focus_on_their_input() {
		for clear in [
			Element::SearchClear,
			Element::ModalSearchClear,
			Element::LocationClear,
			Element::TagsClear,
		] {
			assert!(clear.suppresses_blur());
			let input = clear.owning_input().expect("clear control has an input");
			assert_eq!(input.region(), clear.region());
		}
	}

	#[test]
	fn suggestions_sit_inside_their_input_region() {
		assert_eq!(Element::TagSuggestion(3).region(), Region::Tags);
		assert_eq!(Element::LocationSuggestion(0).region(), Region::Location);
		assert_eq!(Element::RecentSearch(1).surface(), Surface::SearchBox);
		assert_eq!(Element::RosterPerson(70).surface(), Surface::PeopleView);
		assert_eq!(Element::DatePreset(DatePreset::Today).surface(), Surface::AdvancedSearch);
	}
}
