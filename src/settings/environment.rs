use std::collections::BTreeMap;

use config::{Environment, Source, Value, ValueKind};

use super::errors::ConfigError;
use super::tree::{ConfigNode, ConfigTree, ConfigValue};

/// Collect `<PREFIX>__SECTION__KEY` variables into a tree. Values are parsed
/// into booleans and numbers where possible.
pub(super) fn environment_overrides(prefix: &str) -> Result<ConfigTree, ConfigError> {
	collect(prefix, Environment::with_prefix(prefix))
}

fn collect(prefix: &str, source: Environment) -> Result<ConfigTree, ConfigError> {
	let failed = |source| ConfigError::Environment {
		prefix: prefix.to_string(),
		source,
	};
	let values: BTreeMap<String, Value> = source
		.separator("__")
		.try_parsing(true)
		.collect()
		.map_err(failed)?
		.into_iter()
		.collect();

	if let Some((leaf, nested)) = find_collision(values.keys()) {
		return Err(failed(config::ConfigError::Message(format!(
			"`{leaf}` is set both as a value and as the table holding `{nested}`"
		))));
	}

	let mut tree = ConfigTree::new();
	for (key, value) in values {
		log::debug!("environment override for {key}");
		tree.insert_path(&key, node_from_value(value));
	}
	Ok(tree)
}

/// A key that is also the parent of another key, e.g. `window` and
/// `window.width`.
fn find_collision<'a>(
	keys: impl Iterator<Item = &'a String> + Clone,
) -> Option<(&'a str, &'a str)> {
	keys.clone().find_map(|leaf| {
		let parent = format!("{leaf}.");
		keys.clone()
			.find(|other| other.starts_with(&parent))
			.map(|nested| (leaf.as_str(), nested.as_str()))
	})
}

fn node_from_value(value: Value) -> ConfigNode {
	match value.kind {
		ValueKind::Table(table) => ConfigNode::Table(
			table
				.into_iter()
				.map(|(key, value)| (key, node_from_value(value)))
				.collect(),
		),
		other => ConfigNode::Value(scalar_from_kind(other)),
	}
}

fn scalar_from_kind(kind: ValueKind) -> ConfigValue {
	match kind {
		ValueKind::Boolean(flag) => ConfigValue::Boolean(flag),
		ValueKind::I64(number) => ConfigValue::Integer(number),
		ValueKind::I128(number) => integer_or_text(i64::try_from(number), number),
		ValueKind::U64(number) => integer_or_text(i64::try_from(number), number),
		ValueKind::U128(number) => integer_or_text(i64::try_from(number), number),
		ValueKind::Float(number) => ConfigValue::Float(number),
		ValueKind::String(text) => ConfigValue::String(text),
		ValueKind::Array(items) => ConfigValue::List(
			items
				.into_iter()
				.map(|item| scalar_from_kind(item.kind))
				.collect(),
		),
		ValueKind::Nil => ConfigValue::String(String::new()),
		ValueKind::Table(table) => ConfigValue::String(format!("{table:?}")),
	}
}

fn integer_or_text<E>(converted: Result<i64, E>, original: impl ToString) -> ConfigValue {
	match converted {
		Ok(number) => ConfigValue::Integer(number),
		Err(_) => ConfigValue::String(original.to_string()),
	}
}
