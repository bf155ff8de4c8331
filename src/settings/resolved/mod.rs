use picsift::logging::LogSettings;
use picsift::timer::Timing;
use picsift::tui::theme;
use picsift::{ShellOptions, Theme};

mod errors;
mod sources;
mod summary;
mod validation;

pub(crate) use errors::ConfigError;
pub(crate) use sources::{ConfigSources, SettingSource};

/// Application-ready configuration derived from user input, config files and
/// defaults.
#[derive(Debug, Clone)]
pub struct ResolvedConfig {
	pub theme: String,
	pub initial_query: String,
	pub people: Vec<String>,
	pub tags: Vec<String>,
	pub seed: Option<u64>,
	pub timing: Timing,
	pub logging: LogSettings,
}

impl ResolvedConfig {
	pub(super) fn validate(&self, sources: &ConfigSources) -> Result<(), ConfigError> {
		validation::validate(self, sources)
	}

	/// Print a human readable summary of the effective configuration.
	pub fn print_summary(&self) {
		summary::print_summary(self);
	}

	/// The selected theme. Names are checked during validation.
	#[must_use]
	pub fn theme(&self) -> Theme {
		theme::by_name(&self.theme).unwrap_or_default()
	}

	/// Starting state for the search shell.
	#[must_use]
	pub fn shell_options(&self) -> ShellOptions {
		ShellOptions {
			timing: self.timing,
			initial_query: self.initial_query.clone(),
			people: self.people.clone(),
			tags: self.tags.clone(),
			seed: self.seed,
		}
	}
}
