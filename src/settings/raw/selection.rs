use serde::Deserialize;

use crate::cli::CliArgs;

/// `[people]` values prior to validation.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub(super) struct PeopleSection {
	pub(super) initial: Option<Vec<String>>,
	pub(super) seed: Option<u64>,
}

impl PeopleSection {
	pub(super) fn apply_cli_overrides(&mut self, cli: &CliArgs) {
		if let Some(people) = &cli.people {
			self.initial = Some(people.clone());
		}
		if let Some(seed) = cli.seed {
			self.seed = Some(seed);
		}
	}
}

/// `[tags]` values prior to validation.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub(super) struct TagsSection {
	pub(super) initial: Option<Vec<String>>,
}

impl TagsSection {
	pub(super) fn apply_cli_overrides(&mut self, cli: &CliArgs) {
		if let Some(tags) = &cli.tags {
			self.initial = Some(tags.clone());
		}
	}
}

/// Trim names, drop blanks and keep the first occurrence of duplicates.
pub(super) fn sanitize_names(values: Vec<String>) -> Vec<String> {
	let mut cleaned: Vec<String> = Vec::new();
	for value in values {
		let trimmed = value.trim();
		if trimmed.is_empty() || cleaned.iter().any(|name| name == trimmed) {
			continue;
		}
		cleaned.push(trimmed.to_string());
	}
	cleaned
}
