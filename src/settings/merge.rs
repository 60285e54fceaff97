use super::tree::{ConfigNode, ConfigTree};

/// Deep-merge `overrides` onto `base`, returning a new tree.
///
/// Tables present on both sides merge key-wise. In every other case the
/// override value replaces the base value outright, including scalar/table
/// mismatches in either direction. Keys only present in `base` are kept.
#[must_use]
pub fn merge(base: &ConfigTree, overrides: &ConfigTree) -> ConfigTree {
	let mut result = base.clone();
	merge_into(&mut result, overrides);
	result
}

fn merge_into(target: &mut ConfigTree, overrides: &ConfigTree) {
	for (key, node) in overrides {
		match (target.get_mut(key), node) {
			(Some(ConfigNode::Table(existing)), ConfigNode::Table(incoming)) => {
				merge_into(existing, incoming);
			}
			_ => {
				target.insert(key.clone(), node.clone());
			}
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::settings::document::{DocumentFormat, parse_document};

	fn toml(text: &str) -> ConfigTree {
		parse_document(text, DocumentFormat::Toml).expect("valid TOML fixture")
	}

	fn sample() -> ConfigTree {
		toml(
			r##"
			[app]
			title = "YWAR"
			version = "0.1"

			[ui.font]
			family = "Segoe UI"
			size = 11

			[themes.light]
			accent = "#2563eb"
			"##,
		)
	}

	#[test]
	fn empty_override_is_a_no_op() {
		let base = sample();
		assert_eq!(merge(&base, &ConfigTree::new()), base);
	}

	#[test]
	fn self_merge_is_idempotent() {
		let base = sample();
		assert_eq!(merge(&base, &base), base);
	}

	#[test]
	fn disjoint_trees_keep_every_key() {
		let base = toml("a = 1\n[b]\nx = true");
		let overrides = toml("c = \"three\"\n[d]\ny = 2.5");

		let merged = merge(&base, &overrides);

		assert_eq!(merged.len(), 4);
		for path in ["a", "b.x", "c", "d.y"] {
			let expected = base.lookup(path).or_else(|| overrides.lookup(path));
			assert_eq!(merged.lookup(path), expected, "{path}");
		}
	}

	#[test]
	fn nested_merge_preserves_sibling_keys() {
		let base = toml("[a]\nx = 1\ny = 2");
		let overrides = toml("[a]\ny = 9");

		assert_eq!(merge(&base, &overrides), toml("[a]\nx = 1\ny = 9"));
	}

	#[test]
	fn scalar_override_replaces_table_wholesale() {
		let base = toml("[a]\nx = 1");
		let overrides = toml("a = 5");

		assert_eq!(merge(&base, &overrides), toml("a = 5"));
	}

	#[test]
	fn table_override_replaces_scalar_wholesale() {
		let base = toml("a = 5");
		let overrides = toml("[a]\nx = 1");

		assert_eq!(merge(&base, &overrides), toml("[a]\nx = 1"));
	}

	#[test]
	fn lists_are_replaced_not_concatenated() {
		let base = toml("modifiers = [\"bold\", \"italic\"]");
		let overrides = toml("modifiers = [\"dim\"]");

		assert_eq!(merge(&base, &overrides), overrides);
	}

	#[test]
	fn inputs_are_left_untouched() {
		let base = sample();
		let overrides = toml("[ui.font]\nsize = 14");
		let snapshot = base.clone();

		let merged = merge(&base, &overrides);

		assert_eq!(base, snapshot);
		assert_eq!(
			merged.lookup("ui.font.family"),
			base.lookup("ui.font.family")
		);
		assert_eq!(merged.lookup("ui.font.size"), overrides.lookup("ui.font.size"));
	}
}
