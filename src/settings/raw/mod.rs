use std::env;

use anyhow::{Error, Result};
use picsift::catalog::DEFAULT_TAGS;
use picsift::tui::theme::DEFAULT_THEME;
use serde::Deserialize;

use crate::cli::CliArgs;

use super::resolved::{ConfigSources, ResolvedConfig, SettingSource};

mod logging;
mod selection;
mod timing;
mod ui;

use logging::LoggingSection;
use selection::{PeopleSection, TagsSection, sanitize_names};
use timing::TimingSection;
use ui::UiSection;

/// Mirror of the configuration file representation before CLI overrides and
/// validation are applied.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub(super) struct RawConfig {
	ui: UiSection,
	people: PeopleSection,
	tags: TagsSection,
	timing: TimingSection,
	logging: LoggingSection,
}

impl RawConfig {
	/// Apply CLI overrides on top of the raw configuration values.
	pub(super) fn apply_cli_overrides(&mut self, cli: &CliArgs) {
		self.ui.apply_cli_overrides(cli);
		self.people.apply_cli_overrides(cli);
		self.tags.apply_cli_overrides(cli);
		self.timing.apply_cli_overrides(cli);
		self.logging.apply_cli_overrides(cli);
	}

	/// Convert the raw configuration into a [`ResolvedConfig`], validating and
	/// filling defaults where required.
	pub(super) fn resolve(self, cli: &CliArgs) -> Result<ResolvedConfig> {
		let sources = ConfigSources {
			theme: detect_source(
				cli.theme.is_some(),
				self.ui.theme.is_some(),
				"PICSIFT__UI__THEME",
				"--theme",
				"ui.theme",
			),
			search_blur: detect_source(
				cli.search_blur_ms.is_some(),
				self.timing.search_blur_ms.is_some(),
				"PICSIFT__TIMING__SEARCH_BLUR_MS",
				"--search-blur-ms",
				"timing.search_blur_ms",
			),
			field_blur: detect_source(
				cli.field_blur_ms.is_some(),
				self.timing.field_blur_ms.is_some(),
				"PICSIFT__TIMING__FIELD_BLUR_MS",
				"--field-blur-ms",
				"timing.field_blur_ms",
			),
			caret_restore: detect_source(
				false,
				self.timing.caret_restore_ms.is_some(),
				"PICSIFT__TIMING__CARET_RESTORE_MS",
				"",
				"timing.caret_restore_ms",
			),
			refocus: detect_source(
				false,
				self.timing.refocus_ms.is_some(),
				"PICSIFT__TIMING__REFOCUS_MS",
				"",
				"timing.refocus_ms",
			),
			reveal_hold: detect_source(
				false,
				self.timing.reveal_hold_ms.is_some(),
				"PICSIFT__TIMING__REVEAL_HOLD_MS",
				"",
				"timing.reveal_hold_ms",
			),
			log_filter: detect_source(
				false,
				self.logging.filter.is_some(),
				"PICSIFT__LOGGING__FILTER",
				"",
				"logging.filter",
			),
		};

		let timing = self.timing.finalize();
		let theme = self
			.ui
			.theme
			.map(|name| name.trim().to_string())
			.unwrap_or_else(|| DEFAULT_THEME.to_string());
		let tags = match self.tags.initial {
			Some(tags) => sanitize_names(tags),
			None => DEFAULT_TAGS.iter().map(|tag| tag.to_string()).collect(),
		};

		let config = ResolvedConfig {
			theme,
			initial_query: self.ui.initial_query.unwrap_or_default(),
			people: sanitize_names(self.people.initial.unwrap_or_default()),
			tags,
			seed: self.people.seed,
			timing,
			logging: self.logging.finalize(),
		};

		config.validate(&sources).map_err(Error::new)?;

		Ok(config)
	}
}

fn detect_source(
	cli_present: bool,
	value_present: bool,
	env_var: &'static str,
	cli_flag: &'static str,
	key: &'static str,
) -> Option<SettingSource> {
	if !value_present {
		return None;
	}

	if cli_present {
		return Some(SettingSource::CliFlag(cli_flag));
	}

	if env::var_os(env_var).is_some() {
		return Some(SettingSource::Environment(env_var));
	}

	Some(SettingSource::ConfigKey(key))
}

#[cfg(test)]
mod tests;
