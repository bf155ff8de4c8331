use std::fmt;

#[derive(Debug, Clone)]
pub(crate) enum SettingSource {
	CliFlag(&'static str),
	Environment(&'static str),
	ConfigKey(&'static str),
}

impl fmt::Display for SettingSource {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Self::CliFlag(flag) => write!(f, "CLI flag `{flag}`"),
			Self::Environment(var) => write!(f, "environment variable `{var}`"),
			Self::ConfigKey(key) => write!(f, "configuration key `{key}`"),
		}
	}
}

/// Where each validated setting came from, when it was set at all.
#[derive(Debug, Default, Clone)]
pub(crate) struct ConfigSources {
	pub(crate) theme: Option<SettingSource>,
	pub(crate) search_blur: Option<SettingSource>,
	pub(crate) field_blur: Option<SettingSource>,
	pub(crate) caret_restore: Option<SettingSource>,
	pub(crate) refocus: Option<SettingSource>,
	pub(crate) reveal_hold: Option<SettingSource>,
	pub(crate) log_filter: Option<SettingSource>,
}

fn or_key(source: &Option<SettingSource>, key: &'static str) -> SettingSource {
	source.clone().unwrap_or(SettingSource::ConfigKey(key))
}

impl ConfigSources {
	pub(crate) fn source_for_theme(&self) -> SettingSource {
		or_key(&self.theme, "ui.theme")
	}

	pub(crate) fn source_for_search_blur(&self) -> SettingSource {
		or_key(&self.search_blur, "timing.search_blur_ms")
	}

	pub(crate) fn source_for_field_blur(&self) -> SettingSource {
		or_key(&self.field_blur, "timing.field_blur_ms")
	}

	pub(crate) fn source_for_caret_restore(&self) -> SettingSource {
		or_key(&self.caret_restore, "timing.caret_restore_ms")
	}

	pub(crate) fn source_for_refocus(&self) -> SettingSource {
		or_key(&self.refocus, "timing.refocus_ms")
	}

	pub(crate) fn source_for_reveal_hold(&self) -> SettingSource {
		or_key(&self.reveal_hold, "timing.reveal_hold_ms")
	}

	pub(crate) fn source_for_log_filter(&self) -> SettingSource {
		or_key(&self.log_filter, "logging.filter")
	}
}
