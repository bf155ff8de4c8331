use clap::{CommandFactory, FromArgMatches};

use super::{CliArgs, OutputFormat};

fn parse(args: &[&str]) -> CliArgs {
	let command = CliArgs::command();
	let mut matches = command.get_matches_from(args.iter().copied());
	CliArgs::from_arg_matches_mut(&mut matches).expect("parses")
}

#[test]
fn command_has_about_text() {
	let command = CliArgs::command();
	assert!(command.get_about().is_some());
}

#[test]
fn parse_cli_accepts_default_arguments() {
	let parsed = parse(&["picsift"]);
	assert_eq!(parsed.output, OutputFormat::Plain);
	assert!(parsed.people.is_none());
	assert!(!parsed.no_config);
}

#[test]
fn list_flags_split_on_commas() {
	let parsed = parse(&[
		"picsift",
		"--people",
		"Ava,Ben",
		"--tags",
		"beach,sunset",
		"-o",
		"json",
	]);
	assert_eq!(
		parsed.people,
		Some(vec!["Ava".to_string(), "Ben".to_string()])
	);
	assert_eq!(
		parsed.tags,
		Some(vec!["beach".to_string(), "sunset".to_string()])
	);
	assert_eq!(parsed.output, OutputFormat::Json);
}

#[test]
fn config_flag_can_repeat() {
	let parsed = parse(&["picsift", "-c", "a.toml", "--config", "b.toml"]);
	assert_eq!(parsed.config.len(), 2);
}
