mod cli;

use anyhow::Result;
use ywar::logging;
use ywar::settings;
use ywar::shell::ShellDescription;
use ywar::theme::ThemeCatalog;

use crate::cli::{parse_cli, print_json, print_overview};

fn main() -> Result<()> {
	let cli = parse_cli();
	logging::initialize(cli.verbose);

	let sources = cli.config_sources()?;
	if cli.write_defaults {
		let path = &sources.defaults;
		if settings::write_default_document(path)? {
			println!("Wrote defaults to {}", path.display());
		} else {
			println!("Defaults already present at {}", path.display());
		}
		return Ok(());
	}

	let config = settings::load(&sources)?;
	log::debug!("loaded configuration from {} layer(s)", config.layers().len());
	let shell = ShellDescription::from_config(&config)?;

	if cli.list_themes {
		for name in ThemeCatalog::new(&config.settings().themes).names() {
			println!("{name}");
		}
		return Ok(());
	}

	if cli.print_config {
		return print_json(config.tree());
	}

	print_overview(&config, &shell);
	Ok(())
}
