use std::fmt;
use std::path::{Path, PathBuf};

use super::document::DocumentFormat;

/// Prefix for environment overrides, e.g. `YWAR__WINDOW__WIDTH=1024`.
pub const ENV_PREFIX: &str = "YWAR";

const DEFAULTS_STEM: &str = "default";
const USER_STEM: &str = "user";

/// The layer a setting was read from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SettingSource {
	Defaults(PathBuf),
	UserFile(PathBuf),
	Environment(String),
}

impl fmt::Display for SettingSource {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Self::Defaults(path) => write!(f, "default configuration `{}`", path.display()),
			Self::UserFile(path) => write!(f, "user configuration `{}`", path.display()),
			Self::Environment(prefix) => write!(f, "environment variables `{prefix}__*`"),
		}
	}
}

/// Where the configuration layers come from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigSources {
	pub defaults: PathBuf,
	pub user: Option<PathBuf>,
	pub env_prefix: Option<String>,
}

impl ConfigSources {
	/// Sources consisting of a single required defaults document.
	pub fn new(defaults: impl Into<PathBuf>) -> Self {
		Self {
			defaults: defaults.into(),
			user: None,
			env_prefix: None,
		}
	}

	/// The standard layout of a configuration directory: `default.*` and
	/// `user.*` documents plus `YWAR__` environment overrides.
	pub fn in_dir(dir: &Path) -> Self {
		Self {
			defaults: locate(dir, DEFAULTS_STEM),
			user: Some(locate(dir, USER_STEM)),
			env_prefix: Some(ENV_PREFIX.to_string()),
		}
	}

	#[must_use]
	pub fn with_user(mut self, path: impl Into<PathBuf>) -> Self {
		self.user = Some(path.into());
		self
	}

	#[must_use]
	pub fn without_user(mut self) -> Self {
		self.user = None;
		self
	}

	#[must_use]
	pub fn with_env_prefix(mut self, prefix: impl Into<String>) -> Self {
		self.env_prefix = Some(prefix.into());
		self
	}

	#[must_use]
	pub fn without_env(mut self) -> Self {
		self.env_prefix = None;
		self
	}
}

/// Find `<stem>.<ext>` in `dir`, trying each known extension in order. Falls
/// back to the TOML name so that error messages point at the preferred file.
fn locate(dir: &Path, stem: &str) -> PathBuf {
	DocumentFormat::EXTENSIONS
		.iter()
		.map(|extension| dir.join(format!("{stem}.{extension}")))
		.find(|candidate| candidate.is_file())
		.unwrap_or_else(|| dir.join(format!("{stem}.toml")))
}
