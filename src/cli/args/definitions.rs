use std::path::PathBuf;

use clap::{ArgAction, ColorChoice, Parser};

use super::banner::{help_styles, version_banner};
use super::options::OutputFormat;

/// Command-line arguments accepted by the `picsift` binary.
#[derive(Parser, Debug)]
#[command(
	name = "picsift",
	version,
	long_version = version_banner(),
	about = "Interactive photo search box with advanced filters",
	color = ColorChoice::Auto,
	styles = help_styles()
)]
pub(crate) struct CliArgs {
	#[arg(
		short,
		long = "config",
		value_name = "FILE",
		env = "PICSIFT_CONFIG",
		action = ArgAction::Append,
		help = "Additional configuration file to merge (default: none)"
	)]
	pub(crate) config: Vec<PathBuf>,
	#[arg(
		short = 'n',
		long = "no-config",
		help = "Skip loading default configuration files (default: disabled)"
	)]
	pub(crate) no_config: bool,
	#[arg(
		short = 'q',
		long = "query",
		value_name = "QUERY",
		help = "Provide an initial search query (default: empty)"
	)]
	pub(crate) initial_query: Option<String>,
	#[arg(
		long = "people",
		value_delimiter = ',',
		value_name = "NAME",
		help = "Comma-separated people selected at start (default: none)"
	)]
	pub(crate) people: Option<Vec<String>>,
	#[arg(
		long = "tags",
		value_delimiter = ',',
		value_name = "TAG",
		help = "Comma-separated tags the advanced search starts with (default: sample tags)"
	)]
	pub(crate) tags: Option<Vec<String>>,
	#[arg(
		long,
		value_name = "THEME",
		help = "Select a theme by name (default: slate)"
	)]
	pub(crate) theme: Option<String>,
	#[arg(
		long,
		value_name = "NUM",
		help = "Seed the people view shuffle (default: random)"
	)]
	pub(crate) seed: Option<u64>,
	#[arg(
		long = "search-blur-ms",
		value_name = "MS",
		help = "Delay before an unfocused search input collapses (default: 150)"
	)]
	pub(crate) search_blur_ms: Option<u64>,
	#[arg(
		long = "field-blur-ms",
		value_name = "MS",
		help = "Delay before an unfocused tag or location input collapses (default: 200)"
	)]
	pub(crate) field_blur_ms: Option<u64>,
	#[arg(
		long = "log-file",
		value_name = "PATH",
		help = "Write diagnostic logs to this file (default: disabled)"
	)]
	pub(crate) log_file: Option<PathBuf>,
	#[arg(
		short = 'p',
		long = "print-config",
		help = "Print the resolved configuration before running (default: disabled)"
	)]
	pub(crate) print_config: bool,
	#[arg(
		short = 'l',
		long = "list-themes",
		help = "List supported themes and exit (default: disabled)"
	)]
	pub(crate) list_themes: bool,
	#[arg(
		short = 'o',
		long = "output",
		value_enum,
		default_value_t = OutputFormat::Plain,
		help = "Choose how to print the result"
	)]
	pub(crate) output: OutputFormat,
}
