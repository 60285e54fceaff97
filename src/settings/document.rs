//! Parsing of configuration documents into [`ConfigTree`] values.
//!
//! TOML and YAML are accepted. Both are normalised into the same tree shape so
//! the merge never has to care which format a layer came from.

use std::fs;
use std::io;
use std::path::Path;

use thiserror::Error;

use super::tree::{ConfigNode, ConfigTree, ConfigValue};

/// Serialization formats understood by the loader.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentFormat {
	Toml,
	Yaml,
}

impl DocumentFormat {
	/// File extensions probed for each format, in preference order.
	pub const EXTENSIONS: &'static [&'static str] = &["toml", "yaml", "yml"];

	/// Pick the format from a file extension. Paths without an extension are
	/// read as TOML.
	pub fn from_path(path: &Path) -> Result<Self, DocumentError> {
		let Some(extension) = path.extension() else {
			return Ok(Self::Toml);
		};
		match extension.to_string_lossy().to_ascii_lowercase().as_str() {
			"toml" => Ok(Self::Toml),
			"yaml" | "yml" => Ok(Self::Yaml),
			other => Err(DocumentError::UnsupportedFormat(other.to_string())),
		}
	}
}

#[derive(Debug, Error)]
pub enum DocumentError {
	#[error("failed to read document")]
	Io(#[from] io::Error),
	#[error("invalid TOML")]
	Toml(#[from] toml::de::Error),
	#[error("invalid YAML")]
	Yaml(#[from] serde_yaml::Error),
	#[error("`{key}` is null; configuration values cannot be empty")]
	Null { key: String },
	#[error("`{key}` uses a mapping key that is not a scalar")]
	NonScalarKey { key: String },
	#[error("`{key}` is a list containing a table; lists may only hold plain values")]
	TableInList { key: String },
	#[error("`{key}` holds an integer outside the supported range")]
	IntegerOutOfRange { key: String },
	#[error("the document root must be a table")]
	NotATable,
	#[error("unsupported configuration format `.{0}`")]
	UnsupportedFormat(String),
}

impl DocumentError {
	pub(crate) fn is_not_found(&self) -> bool {
		matches!(self, Self::Io(err) if err.kind() == io::ErrorKind::NotFound)
	}
}

/// Read and parse the document at `path`, choosing the format by extension.
///
/// The file is read before its extension is checked, so a missing file is
/// always reported as [`DocumentError::Io`] with [`io::ErrorKind::NotFound`].
pub fn read_document(path: &Path) -> Result<ConfigTree, DocumentError> {
	let text = fs::read_to_string(path)?;
	let format = DocumentFormat::from_path(path)?;
	parse_document(&text, format)
}

/// Parse `text` as a configuration document.
pub fn parse_document(text: &str, format: DocumentFormat) -> Result<ConfigTree, DocumentError> {
	match format {
		DocumentFormat::Toml => {
			let table: toml::Table = toml::from_str(text)?;
			tree_from_toml(table, "")
		}
		DocumentFormat::Yaml => {
			let value: serde_yaml::Value = serde_yaml::from_str(text)?;
			match value {
				// An empty YAML document carries no settings.
				serde_yaml::Value::Null => Ok(ConfigTree::new()),
				serde_yaml::Value::Mapping(mapping) => tree_from_yaml(mapping, ""),
				_ => Err(DocumentError::NotATable),
			}
		}
	}
}

fn tree_from_toml(table: toml::Table, prefix: &str) -> Result<ConfigTree, DocumentError> {
	let mut tree = ConfigTree::new();
	for (key, value) in table {
		let path = join_path(prefix, &key);
		let node = match value {
			toml::Value::Table(child) => ConfigNode::Table(tree_from_toml(child, &path)?),
			other => ConfigNode::Value(value_from_toml(other, &path)?),
		};
		tree.insert(key, node);
	}
	Ok(tree)
}

fn value_from_toml(value: toml::Value, path: &str) -> Result<ConfigValue, DocumentError> {
	Ok(match value {
		toml::Value::String(text) => ConfigValue::String(text),
		toml::Value::Integer(number) => ConfigValue::Integer(number),
		toml::Value::Float(number) => ConfigValue::Float(number),
		toml::Value::Boolean(flag) => ConfigValue::Boolean(flag),
		toml::Value::Datetime(datetime) => ConfigValue::String(datetime.to_string()),
		toml::Value::Array(items) => ConfigValue::List(
			items
				.into_iter()
				.map(|item| value_from_toml(item, path))
				.collect::<Result<_, _>>()?,
		),
		toml::Value::Table(_) => {
			return Err(DocumentError::TableInList {
				key: path.to_string(),
			});
		}
	})
}

fn tree_from_yaml(mapping: serde_yaml::Mapping, prefix: &str) -> Result<ConfigTree, DocumentError> {
	let mut tree = ConfigTree::new();
	for (key, value) in mapping {
		let key = yaml_key(&key, prefix)?;
		let path = join_path(prefix, &key);
		let node = match value {
			serde_yaml::Value::Mapping(child) => ConfigNode::Table(tree_from_yaml(child, &path)?),
			other => ConfigNode::Value(value_from_yaml(other, &path)?),
		};
		tree.insert(key, node);
	}
	Ok(tree)
}

fn value_from_yaml(value: serde_yaml::Value, path: &str) -> Result<ConfigValue, DocumentError> {
	match value {
		serde_yaml::Value::Null => Err(DocumentError::Null {
			key: path.to_string(),
		}),
		serde_yaml::Value::Bool(flag) => Ok(ConfigValue::Boolean(flag)),
		serde_yaml::Value::Number(number) => {
			if let Some(integer) = number.as_i64() {
				Ok(ConfigValue::Integer(integer))
			} else if number.is_u64() {
				Err(DocumentError::IntegerOutOfRange {
					key: path.to_string(),
				})
			} else {
				Ok(ConfigValue::Float(number.as_f64().unwrap_or(f64::NAN)))
			}
		}
		serde_yaml::Value::String(text) => Ok(ConfigValue::String(text)),
		serde_yaml::Value::Sequence(items) => items
			.into_iter()
			.map(|item| value_from_yaml(item, path))
			.collect::<Result<Vec<_>, _>>()
			.map(ConfigValue::List),
		serde_yaml::Value::Mapping(_) => Err(DocumentError::TableInList {
			key: path.to_string(),
		}),
		serde_yaml::Value::Tagged(tagged) => value_from_yaml(tagged.value, path),
	}
}

fn yaml_key(key: &serde_yaml::Value, prefix: &str) -> Result<String, DocumentError> {
	match key {
		serde_yaml::Value::String(text) => Ok(text.clone()),
		serde_yaml::Value::Number(number) => Ok(number.to_string()),
		serde_yaml::Value::Bool(flag) => Ok(flag.to_string()),
		_ => Err(DocumentError::NonScalarKey {
			key: join_path(prefix, "?"),
		}),
	}
}

fn join_path(prefix: &str, key: &str) -> String {
	if prefix.is_empty() {
		key.to_string()
	} else {
		format!("{prefix}.{key}")
	}
}

#[cfg(test)]
mod tests {
	use std::path::PathBuf;

	use super::*;

	#[test]
	fn format_follows_extension() {
		assert_eq!(
			DocumentFormat::from_path(&PathBuf::from("user.yml")).unwrap(),
			DocumentFormat::Yaml
		);
		assert_eq!(
			DocumentFormat::from_path(&PathBuf::from("default.TOML")).unwrap(),
			DocumentFormat::Toml
		);
		assert!(matches!(
			DocumentFormat::from_path(&PathBuf::from("user.json")),
			Err(DocumentError::UnsupportedFormat(ext)) if ext == "json"
		));
	}

	#[test]
	fn toml_and_yaml_produce_the_same_tree() {
		let from_toml = parse_document(
			"[window]\nwidth = 800\nresizable = true\n[ui.font]\nfamily = \"Consolas\"\n",
			DocumentFormat::Toml,
		)
		.unwrap();
		let from_yaml = parse_document(
			"window:\n  width: 800\n  resizable: true\nui:\n  font:\n    family: Consolas\n",
			DocumentFormat::Yaml,
		)
		.unwrap();

		assert_eq!(from_toml, from_yaml);
	}

	#[test]
	fn empty_yaml_document_is_an_empty_tree() {
		let tree = parse_document("# nothing here\n", DocumentFormat::Yaml).unwrap();
		assert!(tree.is_empty());
	}

	#[test]
	fn yaml_nulls_are_rejected_with_their_path() {
		let err = parse_document("ui:\n  theme:\n", DocumentFormat::Yaml).unwrap_err();
		assert!(matches!(err, DocumentError::Null { key } if key == "ui.theme"));
	}

	#[test]
	fn yaml_numeric_keys_become_strings() {
		let tree = parse_document("depths:\n  0: base\n  1: deep\n", DocumentFormat::Yaml).unwrap();
		assert!(tree.contains_path("depths.0"));
		assert!(tree.contains_path("depths.1"));
	}

	#[test]
	fn yaml_scalar_root_is_rejected() {
		let err = parse_document("just a string", DocumentFormat::Yaml).unwrap_err();
		assert!(matches!(err, DocumentError::NotATable));
	}

	#[test]
	fn tables_inside_lists_are_rejected_in_both_formats() {
		let toml = parse_document("[ui]\nx = [{ a = 1 }]\n", DocumentFormat::Toml).unwrap_err();
		let yaml = parse_document("ui:\n  x:\n    - a: 1\n", DocumentFormat::Yaml).unwrap_err();

		assert!(matches!(toml, DocumentError::TableInList { ref key } if key == "ui.x"));
		assert!(matches!(yaml, DocumentError::TableInList { ref key } if key == "ui.x"));
		assert_eq!(toml.to_string(), yaml.to_string());
	}

	#[test]
	fn broken_toml_reports_a_parse_error() {
		let err = parse_document("[window\nwidth = ", DocumentFormat::Toml).unwrap_err();
		assert!(matches!(err, DocumentError::Toml(_)));
	}

	#[test]
	fn missing_file_is_reported_as_not_found() {
		let dir = tempfile::tempdir().unwrap();
		let err = read_document(&dir.path().join("user.toml")).unwrap_err();
		assert!(err.is_not_found());
	}

	#[test]
	fn missing_file_with_unknown_extension_is_still_not_found() {
		let dir = tempfile::tempdir().unwrap();
		let err = read_document(&dir.path().join("user.json")).unwrap_err();
		assert!(err.is_not_found());
	}

	#[test]
	fn existing_file_with_unknown_extension_is_unsupported() {
		let dir = tempfile::tempdir().unwrap();
		let path = dir.path().join("user.json");
		fs::write(&path, "{}").unwrap();
		let err = read_document(&path).unwrap_err();
		assert!(matches!(err, DocumentError::UnsupportedFormat(ext) if ext == "json"));
	}
}
