use std::path::Path;

use super::document::read_document;
use super::environment::environment_overrides;
use super::errors::ConfigError;
use super::merge::merge;
use super::resolved::{ConfigLayer, ResolvedConfig};
use super::sources::{ConfigSources, SettingSource};

/// Load the defaults, the optional user document and the optional environment
/// overrides, then merge them in that order.
pub fn load(sources: &ConfigSources) -> Result<ResolvedConfig, ConfigError> {
	let defaults = load_defaults(&sources.defaults)?;
	let mut tree = defaults.tree.clone();
	let mut layers = vec![defaults];

	if let Some(path) = &sources.user
		&& let Some(layer) = load_user(path)?
	{
		tree = merge(&tree, &layer.tree);
		layers.push(layer);
	}

	if let Some(prefix) = &sources.env_prefix {
		let overrides = environment_overrides(prefix)?;
		if !overrides.is_empty() {
			tree = merge(&tree, &overrides);
			layers.push(ConfigLayer {
				source: SettingSource::Environment(prefix.clone()),
				tree: overrides,
			});
		}
	}

	ResolvedConfig::new(tree, layers)
}

fn load_defaults(path: &Path) -> Result<ConfigLayer, ConfigError> {
	let tree = read_document(path).map_err(|source| ConfigError::MissingConfiguration {
		path: path.to_path_buf(),
		source,
	})?;
	log::debug!("loaded defaults from {}", path.display());
	Ok(ConfigLayer {
		source: SettingSource::Defaults(path.to_path_buf()),
		tree,
	})
}

/// A user document that does not exist is not an error; one that exists but
/// does not parse is.
fn load_user(path: &Path) -> Result<Option<ConfigLayer>, ConfigError> {
	match read_document(path) {
		Ok(tree) => {
			log::debug!("loaded user overrides from {}", path.display());
			Ok(Some(ConfigLayer {
				source: SettingSource::UserFile(path.to_path_buf()),
				tree,
			}))
		}
		Err(err) if err.is_not_found() => {
			log::info!("no user configuration at {}", path.display());
			Ok(None)
		}
		Err(source) => Err(ConfigError::MalformedOverride {
			path: path.to_path_buf(),
			source,
		}),
	}
}
