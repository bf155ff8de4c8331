use std::time::Duration;

use super::ResolvedConfig;

pub(super) fn print_summary(config: &ResolvedConfig) {
	println!("Effective configuration:");
	println!("  UI theme: {}", config.theme);
	if !config.initial_query.is_empty() {
		println!("  Initial query: {}", config.initial_query);
	}
	println!("  People: {}", list_or_none(&config.people));
	println!("  Tags: {}", list_or_none(&config.tags));
	match config.seed {
		Some(seed) => println!("  Shuffle seed: {seed}"),
		None => println!("  Shuffle seed: (random)"),
	}
	println!("  Search blur: {}", millis(config.timing.search_blur));
	println!("  Field blur: {}", millis(config.timing.field_blur));
	println!("  Caret restore: {}", millis(config.timing.caret_restore));
	println!("  Refocus: {}", millis(config.timing.refocus));
	println!("  Reveal hold: {}", millis(config.timing.reveal_hold));
	println!(
		"  Logging: {}",
		bool_to_word(config.logging.file.is_some())
	);
	if let Some(file) = &config.logging.file {
		println!("  Log file: {}", file.display());
	}
	if let Some(filter) = &config.logging.filter {
		println!("  Log filter: {filter}");
	}
}

fn list_or_none(values: &[String]) -> String {
	if values.is_empty() {
		"(none)".to_string()
	} else {
		values.join(", ")
	}
}

fn millis(delay: Duration) -> String {
	format!("{}ms", delay.as_millis())
}

fn bool_to_word(value: bool) -> &'static str {
	if value { "yes" } else { "no" }
}

#[cfg(test)]
mod tests {
	use picsift::logging::LogSettings;
	use picsift::timer::Timing;

	use super::*;

	#[test]
	fn bool_to_word_matches_expectations() {
		assert_eq!(super::bool_to_word(true), "yes");
		assert_eq!(super::bool_to_word(false), "no");
	}

	#[test]
	fn lists_fall_back_to_none() {
		assert_eq!(list_or_none(&[]), "(none)");
		assert_eq!(list_or_none(&["Ava".into(), "Ben".into()]), "Ava, Ben");
		assert_eq!(millis(Duration::from_millis(150)), "150ms");
	}

	#[test]
	fn summary_prints_without_panic() {
		let config = ResolvedConfig {
			theme: "slate".into(),
			initial_query: "beach".into(),
			people: vec!["Ava".into()],
			tags: Vec::new(),
			seed: Some(1),
			timing: Timing::default(),
			logging: LogSettings::default(),
		};

		print_summary(&config);
	}
}
