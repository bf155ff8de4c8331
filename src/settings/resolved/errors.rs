use thiserror::Error;
use tracing_subscriber::filter::ParseError;

use super::SettingSource;

/// A setting that loaded fine but cannot drive a session.
#[derive(Debug, Error)]
pub(crate) enum ConfigError {
	#[error("unknown theme `{name}` from {origin}; available themes: {}", known.join(", "))]
	UnknownTheme {
		name: String,
		origin: SettingSource,
		known: Vec<&'static str>,
	},
	#[error("{origin} is {millis}ms but {limit}")]
	Delay {
		key: &'static str,
		millis: u128,
		origin: SettingSource,
		limit: DelayLimit,
	},
	#[error("log filter `{filter}` from {origin} does not parse")]
	LogFilter {
		filter: String,
		origin: SettingSource,
		#[source]
		source: ParseError,
	},
}

/// Bound a delay broke.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub(crate) enum DelayLimit {
	#[error("must be greater than zero")]
	NonZero,
	#[error("must be at most {0}ms")]
	AtMost(u128),
}

impl ConfigError {
	/// Configuration key of the offending setting.
	pub(crate) fn key(&self) -> &'static str {
		match self {
			Self::UnknownTheme { .. } => "ui.theme",
			Self::Delay { key, .. } => key,
			Self::LogFilter { .. } => "logging.filter",
		}
	}
}
