use std::path::PathBuf;

use thiserror::Error;

use super::document::DocumentError;
use super::sources::SettingSource;

/// Failures while establishing the process configuration. All of them are
/// fatal at startup.
#[derive(Debug, Error)]
pub enum ConfigError {
	#[error("required configuration {} is missing or unreadable", path.display())]
	MissingConfiguration {
		path: PathBuf,
		#[source]
		source: DocumentError,
	},
	#[error("user configuration {} could not be parsed", path.display())]
	MalformedOverride {
		path: PathBuf,
		#[source]
		source: DocumentError,
	},
	#[error("failed to read environment overrides with prefix `{prefix}`")]
	Environment {
		prefix: String,
		#[source]
		source: config::ConfigError,
	},
	#[error("merged configuration does not match the expected layout")]
	Layout(#[source] serde_json::Error),
	#[error("invalid value for {key} from {origin}: {reason} (value: {value})")]
	InvalidSetting {
		key: String,
		value: String,
		origin: SettingSource,
		reason: String,
	},
}

impl ConfigError {
	pub(crate) fn invalid<K, V, R>(key: K, value: V, origin: SettingSource, reason: R) -> Self
	where
		K: Into<String>,
		V: ToString,
		R: Into<String>,
	{
		Self::InvalidSetting {
			key: key.into(),
			value: value.to_string(),
			origin,
			reason: reason.into(),
		}
	}
}
