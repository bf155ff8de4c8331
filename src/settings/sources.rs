use std::env;
use std::path::PathBuf;

use anyhow::{Context, Result};
use config::{Config, Environment, File};
use picsift::app_dirs;

use crate::cli::CliArgs;

/// Prefix of `PICSIFT__SECTION__KEY` overrides.
const ENV_PREFIX: &str = "picsift";
/// Keys whose environment values are comma separated lists.
const ENV_LIST_KEYS: [&str; 2] = ["people.initial", "tags.initial"];

/// Layer default files, explicit `--config` files and the environment, in
/// increasing precedence. CLI flags are applied after deserialization.
pub(super) fn build_config(cli: &CliArgs) -> Result<Config> {
	let mut builder = Config::builder();

	for (path, required) in config_files(cli) {
		builder = builder.add_source(File::from(path).required(required));
	}
	builder = builder.add_source(environment());

	builder.build().context("failed to read configuration")
}

/// Every file to merge, paired with whether it has to exist.
fn config_files(cli: &CliArgs) -> Vec<(PathBuf, bool)> {
	let defaults = if cli.no_config {
		Vec::new()
	} else {
		default_config_files()
	};

	defaults
		.into_iter()
		.map(|path| (path, false))
		.chain(cli.config.iter().map(|path| (path.clone(), true)))
		.collect()
}

fn environment() -> Environment {
	ENV_LIST_KEYS.iter().fold(
		Environment::with_prefix(ENV_PREFIX)
			.separator("__")
			.try_parsing(true)
			.list_separator(","),
		|env, key| env.with_list_parse_key(key),
	)
}

/// `config.toml` in the config directory, then `.picsift.toml` and
/// `picsift.toml` in the working directory.
fn default_config_files() -> Vec<PathBuf> {
	let mut files = Vec::new();

	if let Ok(dir) = app_dirs::get_config_dir() {
		files.push(dir.join("config.toml"));
	}
	if let Ok(cwd) = env::current_dir() {
		files.extend([".picsift.toml", "picsift.toml"].map(|name| cwd.join(name)));
	}

	files
}

#[cfg(test)]
mod tests {
	use std::path::Path;

	use clap::Parser;

	use super::*;

	#[test]
	fn default_files_include_current_directory_variants() {
		let files = default_config_files();
		assert!(files.iter().any(|path| path.ends_with(".picsift.toml")));
		assert!(files.iter().any(|path| path.ends_with("picsift.toml")));
	}

	#[test]
	fn explicit_files_are_required_and_come_last() {
		let cli = CliArgs::parse_from(["picsift", "-c", "one.toml", "-c", "two.toml"]);
		let files = config_files(&cli);
		let explicit: Vec<_> = files.iter().filter(|(_, required)| *required).collect();
		assert_eq!(explicit.len(), 2);
		assert_eq!(files.last().map(|(path, _)| path.as_path()), Some(Path::new("two.toml")));
	}

	#[test]
	fn no_config_skips_the_defaults() {
		let cli = CliArgs::parse_from(["picsift", "--no-config"]);
		assert!(config_files(&cli).is_empty());
	}
}
