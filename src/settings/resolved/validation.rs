use std::time::Duration;

use picsift::tui::theme;
use tracing_subscriber::EnvFilter;

use super::errors::DelayLimit;
use super::{ConfigError, ConfigSources, ResolvedConfig, SettingSource};

/// Longest accepted delay for any timer.
const MAX_DELAY_MS: u128 = 2_000;
/// Refocus has to feel immediate.
const MAX_REFOCUS_MS: u128 = 100;

pub(super) fn validate(
	config: &ResolvedConfig,
	sources: &ConfigSources,
) -> Result<(), ConfigError> {
	if theme::by_name(&config.theme).is_none() {
		return Err(ConfigError::UnknownTheme {
			name: config.theme.clone(),
			origin: sources.source_for_theme(),
			known: theme::names(),
		});
	}

	let timing = &config.timing;
	check_blur("timing.search_blur_ms", timing.search_blur, sources.source_for_search_blur())?;
	check_blur("timing.field_blur_ms", timing.field_blur, sources.source_for_field_blur())?;
	check_at_most(
		"timing.caret_restore_ms",
		timing.caret_restore,
		MAX_DELAY_MS,
		sources.source_for_caret_restore(),
	)?;
	check_at_most(
		"timing.refocus_ms",
		timing.refocus,
		MAX_REFOCUS_MS,
		sources.source_for_refocus(),
	)?;
	check_at_most(
		"timing.reveal_hold_ms",
		timing.reveal_hold,
		MAX_DELAY_MS,
		sources.source_for_reveal_hold(),
	)?;

	if let Some(filter) = &config.logging.filter {
		EnvFilter::try_new(filter).map_err(|source| ConfigError::LogFilter {
			filter: filter.clone(),
			origin: sources.source_for_log_filter(),
			source,
		})?;
	}

	Ok(())
}

fn check_blur(
	key: &'static str,
	delay: Duration,
	origin: SettingSource,
) -> Result<(), ConfigError> {
	if delay.is_zero() {
		return Err(ConfigError::Delay {
			key,
			millis: 0,
			origin,
			limit: DelayLimit::NonZero,
		});
	}
	check_at_most(key, delay, MAX_DELAY_MS, origin)
}

fn check_at_most(
	key: &'static str,
	delay: Duration,
	max_ms: u128,
	origin: SettingSource,
) -> Result<(), ConfigError> {
	let millis = delay.as_millis();
	if millis > max_ms {
		return Err(ConfigError::Delay {
			key,
			millis,
			origin,
			limit: DelayLimit::AtMost(max_ms),
		});
	}
	Ok(())
}

#[cfg(test)]
mod tests {
	use picsift::logging::LogSettings;
	use picsift::timer::Timing;

	use super::*;

	fn config(timing: Timing) -> ResolvedConfig {
		ResolvedConfig {
			theme: "slate".into(),
			initial_query: String::new(),
			people: Vec::new(),
			tags: Vec::new(),
			seed: None,
			timing,
			logging: LogSettings::default(),
		}
	}

	#[test]
	fn defaults_are_valid() {
		let sources = ConfigSources::default();
		assert!(validate(&config(Timing::default()), &sources).is_ok());
	}

	#[test]
	fn validation_rejects_zero_search_blur() {
		let timing = Timing {
			search_blur: Duration::ZERO,
			..Timing::default()
		};
		let sources = ConfigSources {
			search_blur: Some(SettingSource::CliFlag("--search-blur-ms")),
			..ConfigSources::default()
		};

		let err = validate(&config(timing), &sources).unwrap_err();
		assert_eq!(err.key(), "timing.search_blur_ms");
		assert_eq!(
			err.to_string(),
			"CLI flag `--search-blur-ms` is 0ms but must be greater than zero"
		);
	}

	#[test]
	fn validation_rejects_slow_refocus() {
		let timing = Timing {
			refocus: Duration::from_millis(250),
			..Timing::default()
		};
		let sources = ConfigSources {
			refocus: Some(SettingSource::Environment("PICSIFT__TIMING__REFOCUS_MS")),
			..ConfigSources::default()
		};

		let err = validate(&config(timing), &sources).unwrap_err();
		assert_eq!(err.key(), "timing.refocus_ms");
		assert!(matches!(
			err,
			ConfigError::Delay {
				millis: 250,
				limit: DelayLimit::AtMost(100),
				..
			}
		));
		assert!(err.to_string().contains("environment variable"));
	}

	#[test]
	fn validation_rejects_unknown_theme() {
		let mut config = config(Timing::default());
		config.theme = "neon".into();

		let err = validate(&config, &ConfigSources::default()).unwrap_err();
		assert_eq!(err.key(), "ui.theme");
		let message = err.to_string();
		assert!(message.contains("`neon` from configuration key `ui.theme`"));
		assert!(message.contains("slate, paper"));
	}

	#[test]
	fn validation_rejects_malformed_log_filter() {
		let mut config = config(Timing::default());
		config.logging.filter = Some("picsift=loud".into());

		let err = validate(&config, &ConfigSources::default()).unwrap_err();
		assert_eq!(err.key(), "logging.filter");
		assert!(std::error::Error::source(&err).is_some());
	}
}
