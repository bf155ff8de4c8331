//! File-backed diagnostics.
//!
//! The terminal belongs to the UI while a session runs, so events go to a log
//! file or nowhere at all.

use std::fs::{self, OpenOptions};
use std::path::PathBuf;
use std::sync::Mutex;

use anyhow::{Context, Result};
use tracing_subscriber::EnvFilter;
use tracing_subscriber::fmt;
use tracing_subscriber::prelude::*;

use crate::app_dirs;

/// Environment variable holding a filter that overrides the configured one.
pub const LOG_ENV: &str = "PICSIFT_LOG";

/// Filter used when neither the environment nor configuration name one.
pub const DEFAULT_FILTER: &str = "info";

const DEFAULT_LOG_FILE: &str = "picsift.log";

/// Where logs go and which events are kept.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LogSettings {
	pub file: Option<PathBuf>,
	pub filter: Option<String>,
}

impl LogSettings {
	/// Explicit file, or the cache directory default when only `PICSIFT_LOG`
	/// is set.
	fn destination(&self) -> Option<PathBuf> {
		if let Some(file) = &self.file {
			return Some(file.clone());
		}
		if std::env::var_os(LOG_ENV).is_none() {
			return None;
		}
		app_dirs::get_cache_dir()
			.ok()
			.map(|dir| dir.join(DEFAULT_LOG_FILE))
	}
}

/// Pick the filter directive: environment first, then configuration.
#[must_use]
pub fn filter_directive(env_value: Option<&str>, configured: Option<&str>) -> String {
	env_value
		.filter(|value| !value.trim().is_empty())
		.or(configured)
		.unwrap_or(DEFAULT_FILTER)
		.to_string()
}

/// Install the global subscriber. Returns the log file in use, or `None` when
/// logging stays disabled.
pub fn initialize(settings: &LogSettings) -> Result<Option<PathBuf>> {
	let Some(path) = settings.destination() else {
		return Ok(None);
	};

	if let Some(parent) = path.parent()
		&& !parent.as_os_str().is_empty()
	{
		fs::create_dir_all(parent)
			.with_context(|| format!("failed to create log directory {}", parent.display()))?;
	}
	let file = OpenOptions::new()
		.create(true)
		.append(true)
		.open(&path)
		.with_context(|| format!("failed to open log file {}", path.display()))?;

	let env_value = std::env::var(LOG_ENV).ok();
	let directive = filter_directive(env_value.as_deref(), settings.filter.as_deref());
	let filter = EnvFilter::try_new(&directive)
		.with_context(|| format!("invalid log filter `{directive}`"))?;

	let file_layer = fmt::layer()
		.with_writer(Mutex::new(file))
		.with_ansi(false)
		.with_target(true);

	tracing_subscriber::registry()
		.with(filter)
		.with(file_layer)
		.try_init()
		.context("a global tracing subscriber is already installed")?;

	tracing::info!(path = %path.display(), "logging initialized");
	Ok(Some(path))
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn environment_filter_wins_over_configuration() {
		assert_eq!(filter_directive(Some("debug"), Some("warn")), "debug");
		assert_eq!(filter_directive(None, Some("warn")), "warn");
		assert_eq!(filter_directive(Some("  "), None), DEFAULT_FILTER);
	}

	#[test]
	fn explicit_file_is_the_destination() {
		let settings = LogSettings {
			file: Some(PathBuf::from("/tmp/picsift-test.log")),
			filter: None,
		};
		assert_eq!(
			settings.destination(),
			Some(PathBuf::from("/tmp/picsift-test.log"))
		);
	}
}
