//! Where `picsift` reads configuration from and writes its default log to.
//!
//! `PICSIFT_CONFIG_DIR` and `PICSIFT_CACHE_DIR` replace the platform
//! locations from the `directories` crate when set to a non-empty path.

use std::env;
use std::ffi::OsString;
use std::path::PathBuf;

use anyhow::{Result, anyhow};
use directories::ProjectDirs;

#[derive(Debug, Clone, Copy)]
enum AppDir {
	Config,
	Cache,
}

impl AppDir {
	fn env_var(self) -> &'static str {
		match self {
			AppDir::Config => "PICSIFT_CONFIG_DIR",
			AppDir::Cache => "PICSIFT_CACHE_DIR",
		}
	}

	fn resolve(self) -> Result<PathBuf> {
		if let Some(dir) = non_empty(env::var_os(self.env_var())) {
			return Ok(dir);
		}

		let dirs = ProjectDirs::from("io", "picsift", "picsift")
			.ok_or_else(|| anyhow!("no home directory to place picsift files in"))?;
		let dir = match self {
			AppDir::Config => dirs.config_local_dir(),
			AppDir::Cache => dirs.cache_dir(),
		};
		Ok(dir.to_path_buf())
	}
}

fn non_empty(value: Option<OsString>) -> Option<PathBuf> {
	value.filter(|value| !value.is_empty()).map(PathBuf::from)
}

/// Directory holding `config.toml`.
pub fn get_config_dir() -> Result<PathBuf> {
	AppDir::Config.resolve()
}

/// Directory holding `picsift.log` when logging is enabled without a file.
pub fn get_cache_dir() -> Result<PathBuf> {
	AppDir::Cache.resolve()
}
