//! Typed view of the merged configuration tree.

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Deserializer};

#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
	pub app: AppSection,
	pub window: WindowSection,
	pub ui: UiSection,
	pub themes: BTreeMap<String, ThemeColors>,
	pub controls: ControlsSection,
	pub timer: TimerSection,
	pub containers: ContainerStylesSection,
}

#[derive(Debug, Clone, Deserialize)]
pub struct AppSection {
	pub title: String,
	/// Accepts `0.1`, `1` or `"0.1.0"`; YAML and environment values often
	/// arrive as numbers.
	#[serde(deserialize_with = "scalar_text")]
	pub version: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct WindowSection {
	pub width: u32,
	pub height: u32,
	pub min_width: u32,
	pub min_height: u32,
	pub resizable: bool,
	#[serde(default)]
	pub fullscreen: bool,
}

#[derive(Debug, Clone, Deserialize)]
pub struct UiSection {
	#[serde(default)]
	pub theme: Option<String>,
	pub font: FontSection,
}

#[derive(Debug, Clone, Deserialize)]
pub struct FontSection {
	pub family: String,
	pub size: u16,
	pub header_size: u16,
	pub monospace_family: String,
	pub timer_size: u16,
}

/// Raw colour strings for one named theme.
#[derive(Debug, Clone, Deserialize)]
pub struct ThemeColors {
	pub background: String,
	pub foreground: String,
	pub panel_bg: String,
	pub accent: String,
	pub highlight: String,
	pub border: String,
}

/// Key names bound to the footer actions.
#[derive(Debug, Clone, Deserialize)]
pub struct ControlsSection {
	pub complete_task_1: String,
	pub complete_task_2: String,
	pub skip_task: String,
	pub undo_task: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct TimerSection {
	pub precision_ms: bool,
}

/// Per-kind style tables for nested containers.
#[derive(Debug, Clone, Deserialize)]
pub struct ContainerStylesSection {
	pub section: KindStyles,
	pub location: KindStyles,
	pub task: KindStyles,
}

#[derive(Debug, Clone, Deserialize)]
pub struct KindStyles {
	pub base: StyleSpec,
	/// Keyed by relative depth (`"0"`, `"1"`, ...).
	#[serde(default)]
	pub depths: BTreeMap<String, StyleSpec>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct StyleSpec {
	pub accent: String,
	#[serde(default)]
	pub fg: Option<String>,
	#[serde(default)]
	pub bg: Option<String>,
	#[serde(default)]
	pub modifiers: Vec<String>,
	#[serde(default)]
	pub indent: u16,
}

fn scalar_text<'de, D>(deserializer: D) -> Result<String, D::Error>
where
	D: Deserializer<'de>,
{
	#[derive(Deserialize)]
	#[serde(untagged)]
	enum Scalar {
		Text(String),
		Integer(i64),
		Float(f64),
	}

	Ok(match Scalar::deserialize(deserializer)? {
		Scalar::Text(text) => text,
		Scalar::Integer(number) => number.to_string(),
		Scalar::Float(number) => number.to_string(),
	})
}

impl fmt::Display for WindowSection {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(
			f,
			"{}x{} (min {}x{})",
			self.width, self.height, self.min_width, self.min_height
		)
	}
}
