use std::path::PathBuf;

use clap::Parser;

use super::RawConfig;
use super::selection::sanitize_names;
use crate::cli::CliArgs;

#[test]
fn cli_overrides_take_precedence() {
	let cli = CliArgs::parse_from([
		"picsift",
		"--query",
		"harbour",
		"--people",
		"Ava,Ben",
		"--tags",
		"beach",
		"--theme",
		"paper",
		"--seed",
		"3",
		"--search-blur-ms",
		"250",
		"--field-blur-ms",
		"300",
		"--log-file",
		"/tmp/picsift.log",
	]);

	let mut config = RawConfig::default();
	config.apply_cli_overrides(&cli);

	assert_eq!(config.ui.initial_query, cli.initial_query);
	assert_eq!(config.ui.theme, cli.theme);
	assert_eq!(config.people.initial, cli.people);
	assert_eq!(config.people.seed, Some(3));
	assert_eq!(config.tags.initial, cli.tags);
	assert_eq!(config.timing.search_blur_ms, Some(250));
	assert_eq!(config.timing.field_blur_ms, Some(300));
	assert_eq!(config.logging.file, Some(PathBuf::from("/tmp/picsift.log")));
}

#[test]
fn absent_flags_keep_file_values() {
	let cli = CliArgs::parse_from(["picsift"]);
	let mut config = RawConfig::default();
	config.ui.theme = Some("paper".into());
	config.timing.refocus_ms = Some(20);
	config.apply_cli_overrides(&cli);

	assert_eq!(config.ui.theme.as_deref(), Some("paper"));
	assert_eq!(config.timing.refocus_ms, Some(20));
}

#[test]
fn names_are_trimmed_and_deduplicated() {
	let cleaned = sanitize_names(vec![
		" Ava ".into(),
		String::new(),
		"Ben".into(),
		"Ava".into(),
	]);
	assert_eq!(cleaned, ["Ava", "Ben"]);
}

#[test]
fn unset_tags_fall_back_to_the_samples() {
	let cli = CliArgs::parse_from(["picsift", "--no-config"]);
	let config = RawConfig::default().resolve(&cli).expect("defaults are valid");
	assert_eq!(config.tags.len(), picsift::catalog::DEFAULT_TAGS.len());
	assert_eq!(config.theme, picsift::tui::theme::DEFAULT_THEME);
	assert!(config.people.is_empty());
}
