use anyhow::Result;
use picsift::{FilterCriteria, SessionOutcome};
use serde_json::json;

/// Print a plain-text representation of the session outcome.
pub(crate) fn print_plain(outcome: &SessionOutcome) {
	if !outcome.accepted {
		println!("Search cancelled (query: '{}')", outcome.criteria.query);
		return;
	}

	for line in describe(&outcome.criteria) {
		println!("{line}");
	}
}

/// One `facet: value` line per criterion that narrows the search.
fn describe(criteria: &FilterCriteria) -> Vec<String> {
	let mut lines = Vec::new();
	if !criteria.query.trim().is_empty() {
		lines.push(format!("query: {}", criteria.query));
	}
	lines.push(format!("type: {}", criteria.media_type.label()));
	if !criteria.people.is_empty() {
		lines.push(format!("people: {}", criteria.people.join(", ")));
	}
	if !criteria.tags.is_empty() {
		lines.push(format!("tags: {}", criteria.tags.as_slice().join(", ")));
	}
	lines.push(format!("date: {}", criteria.date.label()));
	if !criteria.location.is_empty() {
		lines.push(format!("location: {}", criteria.location));
	}
	lines.push(format!("camera: {}", criteria.camera));
	lines.push(format!("file type: {}", criteria.file_type.label()));
	lines.push(format!("search in: {}", criteria.scope.label()));
	lines
}

/// Format the session outcome as a JSON string.
pub(crate) fn format_outcome_json(outcome: &SessionOutcome) -> Result<String> {
	let payload = json!({
		"accepted": outcome.accepted,
		"criteria": serde_json::to_value(&outcome.criteria)?,
	});

	Ok(serde_json::to_string_pretty(&payload)?)
}

/// Print the JSON representation of the session outcome.
pub(crate) fn print_json(outcome: &SessionOutcome) -> Result<()> {
	println!("{}", format_outcome_json(outcome)?);
	Ok(())
}
