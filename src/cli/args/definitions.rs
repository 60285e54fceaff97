use std::path::PathBuf;

use anyhow::Result;
use clap::{ArgAction, ColorChoice, Parser};
use ywar::ConfigSources;
use ywar::app_dirs;

use super::styles::{cli_styles, long_version};

/// Command-line arguments accepted by the `ywar` binary.
#[derive(Parser, Debug)]
#[command(
	name = "ywar",
	version,
	long_version = long_version(),
	about = "Load, validate and summarise the YWAR route tracker configuration",
	color = ColorChoice::Auto,
	styles = cli_styles()
)]
pub(crate) struct CliArgs {
	#[arg(
		short = 'd',
		long = "config-dir",
		value_name = "DIR",
		help = "Directory holding default.toml and user.toml (default: $YWAR_CONFIG_DIR or the platform config directory)"
	)]
	pub(crate) config_dir: Option<PathBuf>,
	#[arg(
		long,
		value_name = "FILE",
		help = "Read defaults from this document instead of <config-dir>/default.toml"
	)]
	pub(crate) defaults: Option<PathBuf>,
	#[arg(
		short = 'u',
		long,
		value_name = "FILE",
		conflicts_with = "no_user",
		help = "Read user overrides from this document instead of <config-dir>/user.toml"
	)]
	pub(crate) user: Option<PathBuf>,
	#[arg(long = "no-user", help = "Ignore the user document (default: disabled)")]
	pub(crate) no_user: bool,
	#[arg(
		long = "no-env",
		help = "Ignore YWAR__* environment overrides (default: disabled)"
	)]
	pub(crate) no_env: bool,
	#[arg(
		long = "write-defaults",
		help = "Write the bundled defaults to the defaults path if it does not exist, then exit"
	)]
	pub(crate) write_defaults: bool,
	#[arg(long = "list-themes", help = "List the configured theme names and exit")]
	pub(crate) list_themes: bool,
	#[arg(
		long = "print-config",
		help = "Print the merged configuration tree as JSON and exit"
	)]
	pub(crate) print_config: bool,
	#[arg(
		short,
		long,
		action = ArgAction::Count,
		help = "Increase log verbosity (-v info, -vv debug, -vvv trace)"
	)]
	pub(crate) verbose: u8,
}

impl CliArgs {
	/// Translate the flags into the configuration layers to load.
	pub(crate) fn config_sources(&self) -> Result<ConfigSources> {
		let dir = match &self.config_dir {
			Some(dir) => dir.clone(),
			None => app_dirs::get_config_dir()?,
		};

		let mut sources = ConfigSources::in_dir(&dir);
		if let Some(defaults) = &self.defaults {
			sources.defaults = defaults.clone();
		}
		if let Some(user) = &self.user {
			sources = sources.with_user(user);
		}
		if self.no_user {
			sources = sources.without_user();
		}
		if self.no_env {
			sources = sources.without_env();
		}
		Ok(sources)
	}
}
