//! The aggregate of every facet the advanced search surface edits.

use std::fmt;

use serde::Serialize;

use crate::selection::TagList;

/// Label of the camera facet when no model is chosen.
pub const ANY_CAMERA: &str = "Any camera";

/// Extensions offered before "see more" is pressed.
pub const COLLAPSED_FILE_TYPES: [&str; 7] =
	[".jpeg", ".png", ".heic", ".webp", ".gif", ".raw", ".tiff"];

/// Extensions offered once the list is expanded.
pub const EXPANDED_FILE_TYPES: [&str; 15] = [
	".jpeg", ".png", ".heic", ".webp", ".gif", ".raw", ".tiff", ".bmp", ".avif", ".jxl", ".heif",
	".svg", ".psd", ".jp2", ".rw2",
];

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum MediaType {
	All,
	#[default]
	Photos,
	Videos,
}

impl MediaType {
	pub const ALL: [MediaType; 3] = [MediaType::All, MediaType::Photos, MediaType::Videos];

	#[must_use]
	pub fn label(self) -> &'static str {
		match self {
			MediaType::All => "All types",
			MediaType::Photos => "Photos",
			MediaType::Videos => "Videos",
		}
	}
}

/// File type facet: either unrestricted or a single extension.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FileType {
	#[default]
	All,
	Extension(String),
}

impl FileType {
	#[must_use]
	pub fn label(&self) -> &str {
		match self {
			FileType::All => "All",
			FileType::Extension(ext) => ext,
		}
	}

	/// Return the extensions shown for the given expansion state.
	#[must_use]
	pub fn offered(expanded: bool) -> &'static [&'static str] {
		if expanded {
			&EXPANDED_FILE_TYPES
		} else {
			&COLLAPSED_FILE_TYPES
		}
	}
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SearchScope {
	#[default]
	All,
	Albums,
	Favorites,
	LockedFolder,
	Archive,
	Folders,
	Trash,
}

impl SearchScope {
	pub const ALL: [SearchScope; 7] = [
		SearchScope::All,
		SearchScope::Albums,
		SearchScope::Favorites,
		SearchScope::LockedFolder,
		SearchScope::Archive,
		SearchScope::Folders,
		SearchScope::Trash,
	];

	#[must_use]
	pub fn label(self) -> &'static str {
		match self {
			SearchScope::All => "All",
			SearchScope::Albums => "Albums",
			SearchScope::Favorites => "Favorites",
			SearchScope::LockedFolder => "Locked folder",
			SearchScope::Archive => "Archive",
			SearchScope::Folders => "Folders",
			SearchScope::Trash => "Trash",
		}
	}
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DatePreset {
	Today,
	Yesterday,
	ThisWeek,
	LastWeek,
	ThisMonth,
	LastMonth,
	ThisYear,
	LastYear,
	#[default]
	AnyDate,
}

impl DatePreset {
	pub const ALL: [DatePreset; 9] = [
		DatePreset::Today,
		DatePreset::Yesterday,
		DatePreset::ThisWeek,
		DatePreset::LastWeek,
		DatePreset::ThisMonth,
		DatePreset::LastMonth,
		DatePreset::ThisYear,
		DatePreset::LastYear,
		DatePreset::AnyDate,
	];

	#[must_use]
	pub fn label(self) -> &'static str {
		match self {
			DatePreset::Today => "Today",
			DatePreset::Yesterday => "Yesterday",
			DatePreset::ThisWeek => "This week",
			DatePreset::LastWeek => "Last week",
			DatePreset::ThisMonth => "This month",
			DatePreset::LastMonth => "Last month",
			DatePreset::ThisYear => "This year",
			DatePreset::LastYear => "Last year",
			DatePreset::AnyDate => "Any date",
		}
	}
}

impl fmt::Display for DatePreset {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.label())
	}
}

const MONTH_NAMES: [&str; 12] = [
	"January",
	"February",
	"March",
	"April",
	"May",
	"June",
	"July",
	"August",
	"September",
	"October",
	"November",
	"December",
];

/// Month shown by the calendar half of the date picker.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CalendarMonth {
	pub year: i32,
	/// 1-based month number.
	pub month: u8,
}

impl Default for CalendarMonth {
	fn default() -> Self {
		Self {
			year: 2024,
			month: 2,
		}
	}
}

impl CalendarMonth {
	#[must_use]
	pub fn previous(self) -> Self {
		if self.month <= 1 {
			Self {
				year: self.year - 1,
				month: 12,
			}
		} else {
			Self {
				year: self.year,
				month: self.month - 1,
			}
		}
	}

	#[must_use]
	pub fn next(self) -> Self {
		if self.month >= 12 {
			Self {
				year: self.year + 1,
				month: 1,
			}
		} else {
			Self {
				year: self.year,
				month: self.month + 1,
			}
		}
	}
}

impl fmt::Display for CalendarMonth {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		let name = MONTH_NAMES
			.get(usize::from(self.month.saturating_sub(1)))
			.copied()
			.unwrap_or("?");
		write!(f, "{name} {}", self.year)
	}
}

/// Every facet selection plus the free-text query.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FilterCriteria {
	pub media_type: MediaType,
	pub file_type: FileType,
	pub scope: SearchScope,
	pub date: DatePreset,
	pub calendar: CalendarMonth,
	/// Committed location; empty when none was picked.
	pub location: String,
	pub camera: String,
	pub tags: TagList,
	pub people: Vec<String>,
	pub query: String,
}

impl Default for FilterCriteria {
	fn default() -> Self {
		Self {
			media_type: MediaType::default(),
			file_type: FileType::default(),
			scope: SearchScope::default(),
			date: DatePreset::default(),
			calendar: CalendarMonth::default(),
			location: String::new(),
			camera: ANY_CAMERA.to_string(),
			tags: TagList::default(),
			people: Vec::new(),
			query: String::new(),
		}
	}
}

impl FilterCriteria {
	/// Fresh criteria seeded with the tags a new surface starts with.
	#[must_use]
	pub fn with_tags<I, S>(tags: I) -> Self
	where
		I: IntoIterator<Item = S>,
		S: Into<String>,
	{
		let mut criteria = Self::default();
		for tag in tags {
			criteria.tags.add(tag);
		}
		criteria
	}

	/// Reset the documented facets. The calendar month is left where it is.
	pub fn clear_all(&mut self) {
		self.media_type = MediaType::Photos;
		self.file_type = FileType::All;
		self.scope = SearchScope::All;
		self.tags.clear();
		self.people.clear();
		self.date = DatePreset::AnyDate;
		self.location.clear();
		self.camera = ANY_CAMERA.to_string();
		self.query.clear();
	}

	/// Reset the facets that do not survive a close of the modal.
	pub(crate) fn reset_transient(&mut self) {
		self.media_type = MediaType::default();
		self.file_type = FileType::default();
		self.scope = SearchScope::default();
		self.date = DatePreset::default();
		self.calendar = CalendarMonth::default();
		self.location.clear();
		self.camera = ANY_CAMERA.to_string();
	}

	/// `true` when nothing would narrow a search. The media type always holds
	/// a value and does not count.
	#[must_use]
	pub fn is_empty(&self) -> bool {
		self.query.trim().is_empty()
			&& self.people.is_empty()
			&& self.tags.is_empty()
			&& self.location.is_empty()
			&& self.date == DatePreset::AnyDate
			&& self.camera == ANY_CAMERA
			&& self.file_type == FileType::All
			&& self.scope == SearchScope::All
	}
}
