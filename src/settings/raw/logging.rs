use std::path::PathBuf;

use picsift::logging::LogSettings;
use serde::Deserialize;

use crate::cli::CliArgs;

/// `[logging]` values prior to validation.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub(super) struct LoggingSection {
	pub(super) file: Option<PathBuf>,
	pub(super) filter: Option<String>,
}

impl LoggingSection {
	pub(super) fn apply_cli_overrides(&mut self, cli: &CliArgs) {
		if let Some(path) = cli.log_file.clone() {
			self.file = Some(path);
		}
	}

	pub(super) fn finalize(self) -> LogSettings {
		LogSettings {
			file: self.file.filter(|path| !path.as_os_str().is_empty()),
			filter: self
				.filter
				.map(|filter| filter.trim().to_string())
				.filter(|filter| !filter.is_empty()),
		}
	}
}
