use serde::Serialize;

/// Labels longer than this many characters are shortened on chips.
pub const TAG_LABEL_LIMIT: usize = 20;

/// Tags in the order they were added, without duplicates.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct TagList {
	tags: Vec<String>,
}

impl TagList {
	/// Append the tag unless it is already present.
	pub fn add(&mut self, tag: impl Into<String>) -> bool {
		let tag = tag.into();
		if self.contains(&tag) {
			return false;
		}
		self.tags.push(tag);
		true
	}

	pub fn remove(&mut self, tag: &str) -> bool {
		let before = self.tags.len();
		self.tags.retain(|existing| existing != tag);
		self.tags.len() != before
	}

	pub fn clear(&mut self) {
		self.tags.clear();
	}

	#[must_use]
	pub fn contains(&self, tag: &str) -> bool {
		self.tags.iter().any(|existing| existing == tag)
	}

	#[must_use]
	pub fn len(&self) -> usize {
		self.tags.len()
	}

	#[must_use]
	pub fn is_empty(&self) -> bool {
		self.tags.is_empty()
	}

	#[must_use]
	pub fn get(&self, index: usize) -> Option<&str> {
		self.tags.get(index).map(String::as_str)
	}

	#[must_use]
	pub fn as_slice(&self) -> &[String] {
		&self.tags
	}

	pub fn iter(&self) -> impl Iterator<Item = &str> {
		self.tags.iter().map(String::as_str)
	}
}

/// Chip text for a tag. The stored value is never shortened.
#[must_use]
pub fn chip_label(tag: &str) -> String {
	if tag.chars().count() > TAG_LABEL_LIMIT {
		let mut label: String = tag.chars().take(TAG_LABEL_LIMIT).collect();
		label.push_str("...");
		label
	} else {
		tag.to_string()
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn add_then_remove_restores_previous_order() {
		let mut tags = TagList::default();
		tags.add("beach");
		tags.add("summer 2025");
		let before = tags.clone();

		assert!(tags.add("holiday"));
		assert!(tags.remove("holiday"));
		assert_eq!(tags, before);
		assert_eq!(tags.as_slice(), ["beach", "summer 2025"]);
	}

	#[test]
	fn duplicate_add_is_ignored() {
		let mut tags = TagList::default();
		assert!(tags.add("beach"));
		assert!(!tags.add("beach"));
		assert_eq!(tags.len(), 1);
	}

	#[test]
	fn removing_middle_tag_keeps_neighbours_in_order() {
		let mut tags = TagList::default();
		for tag in ["a", "b", "c"] {
			tags.add(tag);
		}
		tags.remove("b");
		assert_eq!(tags.as_slice(), ["a", "c"]);
	}

	#[test]
	fn long_labels_are_truncated_for_chips_only() {
		let tag = "Expedition into nature's wonders";
		assert_eq!(chip_label(tag), "Expedition into natu...");
		assert_eq!(chip_label("holiday"), "holiday");
		assert_eq!(chip_label("exactly twenty chars"), "exactly twenty chars");

		let mut tags = TagList::default();
		tags.add(tag);
		assert_eq!(tags.get(0), Some(tag));
	}
}
