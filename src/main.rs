mod cli;
mod settings;

use anyhow::Result;
use cli::{OutputFormat, parse_cli, print_json, print_plain};
use picsift::SearchShell;
use settings::ResolvedConfig;

fn main() -> Result<()> {
	let cli = parse_cli();

	if cli.list_themes {
		for name in picsift::tui::theme::names() {
			println!("{name}");
		}
		return Ok(());
	}

	let resolved = settings::load(&cli)?;

	if cli.print_config {
		resolved.print_summary();
	}

	picsift::logging::initialize(&resolved.logging)?;

	run_session(cli.output, &resolved)
}

/// Run the interactive session and print the outcome in the chosen format.
fn run_session(format: OutputFormat, settings: &ResolvedConfig) -> Result<()> {
	let shell = SearchShell::new(settings.shell_options());
	let outcome = picsift::run(shell, settings.theme())?;

	match format {
		OutputFormat::Plain => print_plain(&outcome),
		OutputFormat::Json => print_json(&outcome)?,
	}

	Ok(())
}
