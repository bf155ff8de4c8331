use std::fmt::Write;
use std::path::PathBuf;

use anyhow::Result;
use clap::builder::Styles;
use clap::builder::styling::{AnsiColor, Effects};
use picsift::app_dirs;
use picsift::tui::theme;

fn describe_dir(dir: Result<PathBuf>) -> String {
	match dir {
		Ok(path) => path.display().to_string(),
		Err(err) => format!("unavailable ({err})"),
	}
}

/// Version text for `--version`: where picsift looks for files and which
/// themes it ships.
pub(super) fn version_banner() -> &'static str {
	let mut text = format!("picsift {}\n", env!("CARGO_PKG_VERSION"));
	let _ = writeln!(text, "config: {}", describe_dir(app_dirs::get_config_dir()));
	let _ = writeln!(text, "cache:  {}", describe_dir(app_dirs::get_cache_dir()));
	let _ = write!(text, "themes: {}", theme::names().join(", "));

	Box::leak(text.into_boxed_str())
}

pub(super) fn help_styles() -> Styles {
	Styles::styled()
		.header(AnsiColor::Blue.on_default().effects(Effects::BOLD | Effects::UNDERLINE))
		.usage(AnsiColor::Blue.on_default().effects(Effects::BOLD))
		.literal(AnsiColor::Magenta.on_default())
		.placeholder(AnsiColor::BrightBlack.on_default())
		.valid(AnsiColor::Green.on_default())
		.invalid(AnsiColor::Red.on_default().effects(Effects::BOLD))
}
