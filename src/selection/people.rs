use serde::Serialize;

/// People chosen as a facet, kept in the order they were first selected.
///
/// Membership is by exact name. Order only matters for chip rendering and
/// for "remove the last chip" on Backspace.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct PeopleSelection {
	names: Vec<String>,
}

impl PeopleSelection {
	#[must_use]
	pub fn new() -> Self {
		Self::default()
	}

	/// Add the person when absent, remove them when present.
	///
	/// Returns `true` if the person is selected afterwards.
	pub fn toggle(&mut self, person: &str) -> bool {
		if self.remove(person) {
			false
		} else {
			self.names.push(person.to_string());
			true
		}
	}

	/// Insert without toggling. Returns `false` if already present.
	pub fn insert(&mut self, person: impl Into<String>) -> bool {
		let person = person.into();
		if self.contains(&person) {
			return false;
		}
		self.names.push(person);
		true
	}

	pub fn remove(&mut self, person: &str) -> bool {
		let before = self.names.len();
		self.names.retain(|name| name != person);
		self.names.len() != before
	}

	/// Keep the first `len` people and return the ones dropped.
	pub fn truncate_to(&mut self, len: usize) -> Vec<String> {
		if self.names.len() <= len {
			return Vec::new();
		}
		self.names.split_off(len)
	}

	/// Replace the contents with `people`, dropping duplicates.
	pub fn sync_from<S: AsRef<str>>(&mut self, people: &[S]) {
		self.names.clear();
		for person in people {
			self.insert(person.as_ref());
		}
	}

	pub fn clear(&mut self) {
		self.names.clear();
	}

	#[must_use]
	pub fn contains(&self, person: &str) -> bool {
		self.names.iter().any(|name| name == person)
	}

	#[must_use]
	pub fn len(&self) -> usize {
		self.names.len()
	}

	#[must_use]
	pub fn is_empty(&self) -> bool {
		self.names.is_empty()
	}

	#[must_use]
	pub fn as_slice(&self) -> &[String] {
		&self.names
	}

	pub fn iter(&self) -> impl Iterator<Item = &str> {
		self.names.iter().map(String::as_str)
	}

	#[must_use]
	pub fn to_vec(&self) -> Vec<String> {
		self.names.clone()
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	fn selection(names: &[&str]) -> PeopleSelection {
		let mut selection = PeopleSelection::new();
		selection.sync_from(names);
		selection
	}

	#[test]
	fn double_toggle_is_identity() {
		let roster = ["Emma Williams", "Noah Brown", "Liam Johnson", "Mia Reed"];
		for start in [&[][..], &roster[..1], &roster[..3]] {
			let original = selection(start);
			for person in roster {
				let mut toggled = original.clone();
				toggled.toggle(person);
				toggled.toggle(person);
				let mut expected: Vec<&str> = original.iter().collect();
				let mut actual: Vec<&str> = toggled.iter().collect();
				expected.sort_unstable();
				actual.sort_unstable();
				assert_eq!(actual, expected, "toggling {person} twice changed the set");
			}
		}
	}

	#[test]
	fn toggle_reports_membership() {
		let mut people = PeopleSelection::new();
		assert!(people.toggle("Ava Brooks"));
		assert!(people.contains("Ava Brooks"));
		assert!(!people.toggle("Ava Brooks"));
		assert!(people.is_empty());
	}

	#[test]
	fn truncate_returns_removed_tail() {
		let mut people = selection(&["a", "b", "c", "d"]);
		assert_eq!(people.truncate_to(2), vec!["c".to_string(), "d".to_string()]);
		assert_eq!(people.as_slice(), ["a", "b"]);
		assert!(people.truncate_to(2).is_empty());
	}

	#[test]
	fn sync_drops_duplicates() {
		let people = selection(&["Zoe Gray", "Zoe Gray", "Mia King"]);
		assert_eq!(people.len(), 2);
	}
}
