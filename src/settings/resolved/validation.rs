use super::super::errors::ConfigError;
use super::super::sources::SettingSource;
use super::ResolvedConfig;

pub(super) fn validate(config: &ResolvedConfig) -> Result<(), ConfigError> {
	let settings = &config.settings;
	let window = &settings.window;

	for (key, value) in [
		("window.width", window.width),
		("window.height", window.height),
		("window.min_width", window.min_width),
		("window.min_height", window.min_height),
	] {
		if value == 0 {
			return Err(invalid(config, key, value, "must be greater than zero"));
		}
	}

	if window.min_width > window.width {
		return Err(invalid(
			config,
			"window.min_width",
			window.min_width,
			format!("must not exceed window.width ({})", window.width),
		));
	}

	if window.min_height > window.height {
		return Err(invalid(
			config,
			"window.min_height",
			window.min_height,
			format!("must not exceed window.height ({})", window.height),
		));
	}

	let font = &settings.ui.font;
	for (key, value) in [
		("ui.font.size", font.size),
		("ui.font.header_size", font.header_size),
		("ui.font.timer_size", font.timer_size),
	] {
		if value == 0 {
			return Err(invalid(config, key, value, "must be greater than zero"));
		}
	}

	if settings.themes.is_empty() {
		return Err(invalid(config, "themes", "{}", "at least one theme must be defined"));
	}

	for (key, value) in [
		("controls.complete_task_1", &settings.controls.complete_task_1),
		("controls.complete_task_2", &settings.controls.complete_task_2),
		("controls.skip_task", &settings.controls.skip_task),
		("controls.undo_task", &settings.controls.undo_task),
	] {
		if value.trim().is_empty() {
			return Err(invalid(config, key, value, "a key name is required"));
		}
	}

	Ok(())
}

fn invalid(
	config: &ResolvedConfig,
	key: &str,
	value: impl ToString,
	reason: impl Into<String>,
) -> ConfigError {
	let origin = config
		.origin_of(key)
		.or_else(|| config.layers.first().map(|layer| &layer.source))
		.cloned()
		.unwrap_or_else(|| SettingSource::Defaults(Default::default()));
	ConfigError::invalid(key, value, origin, reason)
}

#[cfg(test)]
mod tests {
	use std::path::PathBuf;

	use super::*;
	use crate::settings::document::{DocumentFormat, parse_document};
	use crate::settings::{ConfigLayer, DEFAULT_DOCUMENT, merge};

	fn resolve(user: &str) -> Result<ResolvedConfig, ConfigError> {
		let defaults = parse_document(DEFAULT_DOCUMENT, DocumentFormat::Toml).unwrap();
		let user = parse_document(user, DocumentFormat::Toml).unwrap();
		let tree = merge(&defaults, &user);
		let layers = vec![
			ConfigLayer {
				source: SettingSource::Defaults(PathBuf::from("default.toml")),
				tree: defaults,
			},
			ConfigLayer {
				source: SettingSource::UserFile(PathBuf::from("user.toml")),
				tree: user,
			},
		];
		ResolvedConfig::new(tree, layers)
	}

	#[test]
	fn bundled_defaults_validate() {
		assert!(resolve("").is_ok());
	}

	#[test]
	fn zero_width_is_rejected_and_blamed_on_the_user_file() {
		let err = resolve("[window]\nwidth = 0").unwrap_err();
		let message = err.to_string();
		assert!(matches!(err, ConfigError::InvalidSetting { ref key, .. } if key == "window.width"));
		assert!(message.contains("value: 0"));
		assert!(message.contains("user configuration"));
	}

	#[test]
	fn minimum_larger_than_size_is_rejected() {
		let err = resolve("[window]\nwidth = 800\nmin_width = 900").unwrap_err();
		assert!(matches!(err, ConfigError::InvalidSetting { ref key, .. } if key == "window.min_width"));
	}

	#[test]
	fn blank_control_binding_is_rejected() {
		let err = resolve("[controls]\nskip_task = \"  \"").unwrap_err();
		assert!(err.to_string().contains("controls.skip_task"));
	}

	#[test]
	fn wrong_type_is_a_layout_error() {
		let err = resolve("window = \"maximised\"").unwrap_err();
		assert!(matches!(err, ConfigError::Layout(_)));
	}
}
