//! Substring filtering of fixed candidate lists.

/// Behaviour of a source while its query is empty.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EmptyQuery {
	/// Offer every candidate not yet selected as soon as the input focuses.
	ShowAll,
	/// Stay silent until something other than whitespace was typed.
	ShowNone,
}

/// A fixed list of candidates plus its empty-query policy.
#[derive(Debug, Clone, Copy)]
pub struct SuggestionSource<'a> {
	candidates: &'a [&'a str],
	empty_query: EmptyQuery,
}

impl<'a> SuggestionSource<'a> {
	#[must_use]
	pub const fn new(candidates: &'a [&'a str], empty_query: EmptyQuery) -> Self {
		Self {
			candidates,
			empty_query,
		}
	}

	/// Candidates to show for `query`, in list order.
	///
	/// Nothing is shown while the input is unfocused. Items in `excluded` are
	/// never shown. Matching is a case-insensitive substring test.
	#[must_use]
	pub fn visible(&self, query: &str, focused: bool, excluded: &[String]) -> Vec<&'a str> {
		if !focused {
			return Vec::new();
		}
		let empty = query.trim().is_empty();
		if empty && self.empty_query == EmptyQuery::ShowNone {
			return Vec::new();
		}

		let needle = query.to_lowercase();
		self.candidates
			.iter()
			.copied()
			.filter(|candidate| !excluded.iter().any(|item| item == candidate))
			.filter(|candidate| empty || candidate.to_lowercase().contains(&needle))
			.collect()
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::catalog::{LOCATIONS, TAG_SUGGESTIONS};

	const TAGS: SuggestionSource<'static> =
		SuggestionSource::new(&TAG_SUGGESTIONS, EmptyQuery::ShowAll);
	const PLACES: SuggestionSource<'static> =
		SuggestionSource::new(&LOCATIONS, EmptyQuery::ShowNone);

	fn owned(items: &[&str]) -> Vec<String> {
		items.iter().map(|item| item.to_string()).collect()
	}

	#[test]
	fn focused_empty_query_lists_everything_not_selected() {
		let excluded = owned(&["beach", "summer 2025"]);
		for blank in ["", " ", "\t  "] {
			let visible = TAGS.visible(blank, true, &excluded);
			assert_eq!(visible.len(), TAG_SUGGESTIONS.len() - 1, "{blank:?}");
			assert_eq!(visible[0], "holiday");
		}
		assert_eq!(TAGS.visible(" ", true, &[]).len(), TAG_SUGGESTIONS.len());
	}

	#[test]
	fn unfocused_sources_are_silent() {
		assert!(TAGS.visible("", false, &[]).is_empty());
		assert!(PLACES.visible("phoenix", false, &[]).is_empty());
	}

	#[test]
	fn results_never_include_excluded_items() {
		let excluded = owned(&["holiday", "Pursuit of excitement"]);
		for query in ["", "o", "HOL", "e", "zzz", " "] {
			for item in TAGS.visible(query, true, &excluded) {
				assert!(!excluded.iter().any(|ex| ex == item), "{item} for {query:?}");
			}
		}
	}

	#[test]
	fn substring_filter_matches_case_insensitively() {
		for query in ["o", "HOL", "es", "2025", "quest", "x"] {
			let visible = TAGS.visible(query, true, &[]);
			for candidate in TAG_SUGGESTIONS {
				let expected = candidate.to_lowercase().contains(&query.to_lowercase());
				assert_eq!(visible.contains(&candidate), expected, "{candidate} / {query}");
			}
		}
	}

	#[test]
	fn locations_wait_for_a_non_blank_query() {
		assert!(PLACES.visible("", true, &[]).is_empty());
		assert!(PLACES.visible("   ", true, &[]).is_empty());
		assert_eq!(
			PLACES.visible("arizona", true, &[]),
			&LOCATIONS[..5]
		);
		assert_eq!(PLACES.visible("san ", true, &[]).len(), 2);
	}
}
