use std::collections::BTreeMap;

use crate::settings::ThemeColors;

/// Case-insensitive index over the `themes.*` tables of the configuration.
#[derive(Debug)]
pub struct ThemeCatalog<'a> {
	themes: BTreeMap<String, (&'a str, &'a ThemeColors)>,
}

impl<'a> ThemeCatalog<'a> {
	pub fn new(themes: &'a BTreeMap<String, ThemeColors>) -> Self {
		let mut catalog = BTreeMap::new();
		for (name, colors) in themes {
			let normalized = normalize_name(name);
			if let Some((previous, _)) = catalog.insert(normalized, (name.as_str(), colors)) {
				log::warn!("theme `{name}` shadows `{previous}`; names are case-insensitive");
			}
		}
		Self { themes: catalog }
	}

	/// Look up a theme by case-insensitive name. Returns the name as written
	/// in the configuration alongside the colours.
	#[must_use]
	pub fn by_name(&self, name: &str) -> Option<(&'a str, &'a ThemeColors)> {
		self.themes.get(&normalize_name(name)).copied()
	}

	/// Theme names as written in the configuration, sorted case-insensitively.
	#[must_use]
	pub fn names(&self) -> Vec<&'a str> {
		self.themes.values().map(|(name, _)| *name).collect()
	}
}

fn normalize_name(name: &str) -> String {
	name.trim().to_ascii_lowercase()
}
