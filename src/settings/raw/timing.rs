use std::time::Duration;

use picsift::timer::Timing;
use serde::Deserialize;

use crate::cli::CliArgs;

/// `[timing]` delays in milliseconds prior to validation.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub(super) struct TimingSection {
	pub(super) search_blur_ms: Option<u64>,
	pub(super) field_blur_ms: Option<u64>,
	pub(super) caret_restore_ms: Option<u64>,
	pub(super) refocus_ms: Option<u64>,
	pub(super) reveal_hold_ms: Option<u64>,
}

impl TimingSection {
	pub(super) fn apply_cli_overrides(&mut self, cli: &CliArgs) {
		if let Some(ms) = cli.search_blur_ms {
			self.search_blur_ms = Some(ms);
		}
		if let Some(ms) = cli.field_blur_ms {
			self.field_blur_ms = Some(ms);
		}
	}

	/// Fill unset delays from [`Timing::default`].
	pub(super) fn finalize(&self) -> Timing {
		let defaults = Timing::default();
		let pick = |value: Option<u64>, fallback: Duration| {
			value.map_or(fallback, Duration::from_millis)
		};
		Timing {
			search_blur: pick(self.search_blur_ms, defaults.search_blur),
			field_blur: pick(self.field_blur_ms, defaults.field_blur),
			caret_restore: pick(self.caret_restore_ms, defaults.caret_restore),
			refocus: pick(self.refocus_ms, defaults.refocus),
			reveal_hold: pick(self.reveal_hold_ms, defaults.reveal_hold),
		}
	}
}
