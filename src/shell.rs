//! Structural description of the main window: geometry, footer controls and
//! the placeholder panel layout. Nothing here draws; the host UI toolkit reads
//! these values.

use std::fmt;

use anyhow::{Context, Result};

use crate::containers::StyleRegistry;
use crate::settings::{ControlsSection, ResolvedConfig, Settings};
use crate::theme::{ResolvedTheme, apply_theme};

/// Relative widths of the left (route) and right (timer, map, notes) panes.
pub const LEFT_PANE_WEIGHT: u16 = 3;
pub const RIGHT_PANE_WEIGHT: u16 = 4;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WindowSpec {
	pub title: String,
	pub width: u32,
	pub height: u32,
	pub min_width: u32,
	pub min_height: u32,
	pub resizable: bool,
	pub fullscreen: bool,
}

impl WindowSpec {
	pub fn from_settings(settings: &Settings) -> Self {
		let window = &settings.window;
		Self {
			title: format!("{} v{}", settings.app.title, settings.app.version),
			width: window.width,
			height: window.height,
			min_width: window.min_width,
			min_height: window.min_height,
			resizable: window.resizable,
			fullscreen: window.fullscreen,
		}
	}

	/// Initial size in `<width>x<height>` form.
	#[must_use]
	pub fn geometry(&self) -> String {
		format!("{}x{}", self.width, self.height)
	}
}

/// Footer actions. Their handlers are stubs until the task engine exists.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ControlAction {
	CompleteTask,
	SkipTask,
	UndoTask,
}

impl ControlAction {
	#[must_use]
	pub fn label(self) -> &'static str {
		match self {
			Self::CompleteTask => "Complete Task",
			Self::SkipTask => "Skip Task",
			Self::UndoTask => "Undo Task",
		}
	}

	pub fn dispatch(self) {
		log::info!("{} pressed", self.label());
	}
}

impl fmt::Display for ControlAction {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.label())
	}
}

/// An action and the keys that trigger it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ControlBinding {
	pub action: ControlAction,
	pub keys: Vec<String>,
}

impl ControlBinding {
	/// Button caption, e.g. `Complete Task (Space/Return)`.
	#[must_use]
	pub fn caption(&self) -> String {
		let keys = self
			.keys
			.iter()
			.map(|key| key_caption(key))
			.collect::<Vec<_>>()
			.join("/");
		format!("{} ({keys})", self.action.label())
	}

	#[must_use]
	pub fn matches(&self, key: &str) -> bool {
		self.keys
			.iter()
			.any(|bound| bound.trim().eq_ignore_ascii_case(key.trim()))
	}
}

/// Bindings in footer order.
#[must_use]
pub fn control_bindings(controls: &ControlsSection) -> Vec<ControlBinding> {
	vec![
		ControlBinding {
			action: ControlAction::CompleteTask,
			keys: vec![
				controls.complete_task_1.clone(),
				controls.complete_task_2.clone(),
			],
		},
		ControlBinding {
			action: ControlAction::SkipTask,
			keys: vec![controls.skip_task.clone()],
		},
		ControlBinding {
			action: ControlAction::UndoTask,
			keys: vec![controls.undo_task.clone()],
		},
	]
}

/// The action bound to `key`, if any.
#[must_use]
pub fn action_for_key(bindings: &[ControlBinding], key: &str) -> Option<ControlAction> {
	bindings
		.iter()
		.find(|binding| binding.matches(key))
		.map(|binding| binding.action)
}

/// Run the stub handler bound to `key` and report which action it was.
pub fn handle_key(bindings: &[ControlBinding], key: &str) -> Option<ControlAction> {
	let action = action_for_key(bindings, key)?;
	action.dispatch();
	Some(action)
}

/// `SPACE` -> `Space`, `backspace` -> `Backspace`.
fn key_caption(key: &str) -> String {
	let lower = key.trim().to_lowercase();
	let mut chars = lower.chars();
	match chars.next() {
		Some(first) => first.to_uppercase().chain(chars).collect(),
		None => String::new(),
	}
}

/// Placeholder content of the two main panes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PanelLayout {
	pub left_weight: u16,
	pub right_weight: u16,
	pub section_header: &'static str,
	pub timer_placeholder: &'static str,
}

impl PanelLayout {
	pub fn from_settings(settings: &Settings) -> Self {
		Self {
			left_weight: LEFT_PANE_WEIGHT,
			right_weight: RIGHT_PANE_WEIGHT,
			section_header: "Current Section",
			timer_placeholder: timer_placeholder(settings.timer.precision_ms),
		}
	}
}

#[must_use]
pub fn timer_placeholder(precision_ms: bool) -> &'static str {
	if precision_ms {
		"00:00:00.000"
	} else {
		"00:00:00"
	}
}

/// Everything the host UI builds from a resolved configuration.
///
/// Construction resolves the active theme and the container style tables, so
/// a broken colour or modifier anywhere in them fails here.
#[derive(Debug)]
pub struct ShellDescription {
	pub window: WindowSpec,
	pub bindings: Vec<ControlBinding>,
	pub layout: PanelLayout,
	pub theme: ResolvedTheme,
	pub container_styles: StyleRegistry,
}

impl ShellDescription {
	pub fn from_config(config: &ResolvedConfig) -> Result<Self> {
		let settings = config.settings();
		let theme = apply_theme(settings).context("failed to apply theme")?;
		let container_styles = StyleRegistry::from_settings(&settings.containers)
			.context("failed to build container styles")?;

		Ok(Self {
			window: WindowSpec::from_settings(settings),
			bindings: control_bindings(&settings.controls),
			layout: PanelLayout::from_settings(settings),
			theme,
			container_styles,
		})
	}
}
