use std::fs;
use std::path::Path;

use anyhow::{Context, Result};

/// The default document shipped with the application. It lists every key the
/// application reads.
pub const DEFAULT_DOCUMENT: &str = include_str!("../../config/default.toml");

/// Write the bundled defaults to `path` unless a file already exists there.
///
/// Returns `true` when the file was written.
pub fn write_default_document(path: &Path) -> Result<bool> {
	if path.exists() {
		log::info!("leaving existing defaults at {}", path.display());
		return Ok(false);
	}

	if let Some(parent) = path.parent() {
		fs::create_dir_all(parent)
			.with_context(|| format!("failed to create {}", parent.display()))?;
	}
	fs::write(path, DEFAULT_DOCUMENT)
		.with_context(|| format!("failed to write defaults to {}", path.display()))?;
	log::info!("wrote bundled defaults to {}", path.display());
	Ok(true)
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::settings::document::{DocumentFormat, parse_document};

	const RECOGNIZED_KEYS: &[&str] = &[
		"app.title",
		"app.version",
		"window.width",
		"window.height",
		"window.min_width",
		"window.min_height",
		"window.resizable",
		"window.fullscreen",
		"ui.theme",
		"ui.font.family",
		"ui.font.size",
		"ui.font.header_size",
		"ui.font.monospace_family",
		"ui.font.timer_size",
		"controls.complete_task_1",
		"controls.complete_task_2",
		"controls.skip_task",
		"controls.undo_task",
		"timer.precision_ms",
		"containers.section.base.accent",
		"containers.location.base.accent",
		"containers.task.base.accent",
	];

	const THEME_KEYS: &[&str] = &[
		"background",
		"foreground",
		"panel_bg",
		"accent",
		"highlight",
		"border",
	];

	#[test]
	fn bundled_document_lists_every_recognized_key() {
		let tree = parse_document(DEFAULT_DOCUMENT, DocumentFormat::Toml).unwrap();
		for key in RECOGNIZED_KEYS {
			assert!(tree.contains_path(key), "missing {key}");
		}

		let themes = tree.lookup("themes").and_then(|node| node.as_table()).unwrap();
		assert!(!themes.is_empty());
		for (name, _) in themes {
			for key in THEME_KEYS {
				assert!(
					tree.contains_path(&format!("themes.{name}.{key}")),
					"theme {name} is missing {key}"
				);
			}
		}
	}

	#[test]
	fn writes_once_and_then_leaves_the_file_alone() {
		let dir = tempfile::tempdir().unwrap();
		let path = dir.path().join("nested").join("default.toml");

		assert!(write_default_document(&path).unwrap());
		fs::write(&path, "# edited").unwrap();
		assert!(!write_default_document(&path).unwrap());
		assert_eq!(fs::read_to_string(&path).unwrap(), "# edited");
	}
}
