use std::collections::BTreeMap;
use std::collections::btree_map;

use serde::Serialize;
use serde::de::DeserializeOwned;

/// A scalar (or list) stored at a leaf of a [`ConfigTree`].
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum ConfigValue {
	Boolean(bool),
	Integer(i64),
	Float(f64),
	String(String),
	/// Lists are opaque to merging and are replaced wholesale.
	List(Vec<ConfigValue>),
}

/// Either a leaf value or a nested table.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum ConfigNode {
	Value(ConfigValue),
	Table(ConfigTree),
}

impl ConfigNode {
	#[must_use]
	pub fn as_table(&self) -> Option<&ConfigTree> {
		match self {
			Self::Table(table) => Some(table),
			Self::Value(_) => None,
		}
	}

	#[must_use]
	pub fn as_value(&self) -> Option<&ConfigValue> {
		match self {
			Self::Value(value) => Some(value),
			Self::Table(_) => None,
		}
	}
}

/// Hierarchical named settings. Keys are kept sorted.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct ConfigTree {
	entries: BTreeMap<String, ConfigNode>,
}

impl ConfigTree {
	#[must_use]
	pub fn new() -> Self {
		Self::default()
	}

	#[must_use]
	pub fn is_empty(&self) -> bool {
		self.entries.is_empty()
	}

	#[must_use]
	pub fn len(&self) -> usize {
		self.entries.len()
	}

	pub fn iter(&self) -> btree_map::Iter<'_, String, ConfigNode> {
		self.entries.iter()
	}

	pub fn keys(&self) -> impl Iterator<Item = &str> {
		self.entries.keys().map(String::as_str)
	}

	#[must_use]
	pub fn get(&self, key: &str) -> Option<&ConfigNode> {
		self.entries.get(key)
	}

	pub(crate) fn get_mut(&mut self, key: &str) -> Option<&mut ConfigNode> {
		self.entries.get_mut(key)
	}

	pub fn insert(&mut self, key: impl Into<String>, node: impl Into<ConfigNode>) -> Option<ConfigNode> {
		self.entries.insert(key.into(), node.into())
	}

	/// Look up a dotted path such as `ui.font.size`.
	#[must_use]
	pub fn lookup(&self, path: &str) -> Option<&ConfigNode> {
		let mut segments = path.split('.');
		let mut node = self.entries.get(segments.next()?)?;
		for segment in segments {
			node = node.as_table()?.entries.get(segment)?;
		}
		Some(node)
	}

	#[must_use]
	pub fn contains_path(&self, path: &str) -> bool {
		self.lookup(path).is_some()
	}

	/// Store `node` under a dotted path, creating intermediate tables.
	///
	/// A leaf sitting where a table is needed is replaced by a new table.
	pub fn insert_path(&mut self, path: &str, node: impl Into<ConfigNode>) {
		let mut segments: Vec<&str> = path.split('.').collect();
		let Some(last) = segments.pop() else {
			return;
		};

		let mut table = self;
		for segment in segments {
			let slot = table
				.entries
				.entry(segment.to_string())
				.or_insert_with(|| ConfigNode::Table(ConfigTree::new()));
			if let ConfigNode::Value(_) = slot {
				*slot = ConfigNode::Table(ConfigTree::new());
			}
			let ConfigNode::Table(child) = slot else {
				return;
			};
			table = child;
		}
		table.entries.insert(last.to_string(), node.into());
	}

	/// Deserialize the tree into a typed view.
	pub fn try_deserialize<T: DeserializeOwned>(&self) -> Result<T, serde_json::Error> {
		serde_json::from_value(serde_json::to_value(self)?)
	}
}

impl<'a> IntoIterator for &'a ConfigTree {
	type Item = (&'a String, &'a ConfigNode);
	type IntoIter = btree_map::Iter<'a, String, ConfigNode>;

	fn into_iter(self) -> Self::IntoIter {
		self.entries.iter()
	}
}

impl<K: Into<String>, N: Into<ConfigNode>> FromIterator<(K, N)> for ConfigTree {
	fn from_iter<I: IntoIterator<Item = (K, N)>>(iter: I) -> Self {
		Self {
			entries: iter
				.into_iter()
				.map(|(key, node)| (key.into(), node.into()))
				.collect(),
		}
	}
}

impl From<ConfigTree> for ConfigNode {
	fn from(tree: ConfigTree) -> Self {
		Self::Table(tree)
	}
}

impl From<ConfigValue> for ConfigNode {
	fn from(value: ConfigValue) -> Self {
		Self::Value(value)
	}
}

impl From<bool> for ConfigNode {
	fn from(value: bool) -> Self {
		Self::Value(ConfigValue::Boolean(value))
	}
}

impl From<i64> for ConfigNode {
	fn from(value: i64) -> Self {
		Self::Value(ConfigValue::Integer(value))
	}
}

impl From<i32> for ConfigNode {
	fn from(value: i32) -> Self {
		Self::Value(ConfigValue::Integer(i64::from(value)))
	}
}

impl From<u32> for ConfigNode {
	fn from(value: u32) -> Self {
		Self::Value(ConfigValue::Integer(i64::from(value)))
	}
}

impl From<f64> for ConfigNode {
	fn from(value: f64) -> Self {
		Self::Value(ConfigValue::Float(value))
	}
}

impl From<&str> for ConfigNode {
	fn from(value: &str) -> Self {
		Self::Value(ConfigValue::String(value.to_string()))
	}
}

impl From<String> for ConfigNode {
	fn from(value: String) -> Self {
		Self::Value(ConfigValue::String(value))
	}
}
