use super::errors::ConfigError;
use super::sections::Settings;
use super::sources::SettingSource;
use super::tree::ConfigTree;

mod summary;
mod validation;

/// One parsed configuration source.
#[derive(Debug, Clone)]
pub struct ConfigLayer {
	pub source: SettingSource,
	pub tree: ConfigTree,
}

/// The effective configuration: the merged tree, its typed view, and the
/// layers it was built from. Established once at startup and passed around by
/// reference.
#[derive(Debug)]
pub struct ResolvedConfig {
	tree: ConfigTree,
	settings: Settings,
	layers: Vec<ConfigLayer>,
}

impl ResolvedConfig {
	pub(super) fn new(tree: ConfigTree, layers: Vec<ConfigLayer>) -> Result<Self, ConfigError> {
		let settings: Settings = tree.try_deserialize().map_err(ConfigError::Layout)?;
		let config = Self {
			tree,
			settings,
			layers,
		};
		validation::validate(&config)?;
		Ok(config)
	}

	#[must_use]
	pub fn tree(&self) -> &ConfigTree {
		&self.tree
	}

	#[must_use]
	pub fn settings(&self) -> &Settings {
		&self.settings
	}

	#[must_use]
	pub fn layers(&self) -> &[ConfigLayer] {
		&self.layers
	}

	/// The last layer that set `path`, i.e. the one whose value won.
	#[must_use]
	pub fn origin_of(&self, path: &str) -> Option<&SettingSource> {
		self.layers
			.iter()
			.rev()
			.find(|layer| layer.tree.contains_path(path))
			.map(|layer| &layer.source)
	}

	/// Print a human readable summary of the effective configuration.
	pub fn print_summary(&self) {
		summary::print_summary(self);
	}
}
