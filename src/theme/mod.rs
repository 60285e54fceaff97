//! Translate configuration values into concrete colours, fonts and named text
//! styles.

mod catalog;
mod colour;

use anyhow::{Context, Result, anyhow};
use ratatui::style::{Color, Modifier, Style};

use crate::settings::{FontSection, Settings, ThemeColors};

pub use catalog::ThemeCatalog;
pub use colour::parse_color;
pub(crate) use colour::style_from_parts;

/// Theme used when `ui.theme` is not set.
pub const DEFAULT_THEME: &str = "light";

/// Padding applied to buttons, in character cells.
pub const BUTTON_PADDING: u16 = 6;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
	pub background: Color,
	pub foreground: Color,
	pub panel_bg: Color,
	pub accent: Color,
	pub highlight: Color,
	pub border: Color,
}

impl Palette {
	fn from_colors(colors: &ThemeColors, context: &str) -> Result<Self> {
		let color = |key: &str, value: &str| {
			parse_color(value).with_context(|| format!("{context}.{key}: invalid colour `{value}`"))
		};
		Ok(Self {
			background: color("background", &colors.background)?,
			foreground: color("foreground", &colors.foreground)?,
			panel_bg: color("panel_bg", &colors.panel_bg)?,
			accent: color("accent", &colors.accent)?,
			highlight: color("highlight", &colors.highlight)?,
			border: color("border", &colors.border)?,
		})
	}
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FontSpec {
	pub family: String,
	pub size: u16,
	pub bold: bool,
}

impl FontSpec {
	fn new(family: &str, size: u16) -> Self {
		Self {
			family: family.to_string(),
			size,
			bold: false,
		}
	}

	fn bold(mut self) -> Self {
		self.bold = true;
		self
	}
}

/// A font paired with the colours and modifiers to draw it with.
#[derive(Debug, Clone, PartialEq)]
pub struct TextStyle {
	pub font: FontSpec,
	pub style: Style,
}

/// Named styles for the widgets the shell builds.
#[derive(Debug, Clone, PartialEq)]
pub struct StyleSheet {
	pub frame: Style,
	pub label: TextStyle,
	pub button: TextStyle,
	pub button_padding: u16,
	pub header: TextStyle,
	pub highlight: TextStyle,
	pub timer: TextStyle,
}

impl StyleSheet {
	fn new(palette: &Palette, fonts: &FontSection) -> Self {
		let body = FontSpec::new(&fonts.family, fonts.size);
		let text = Style::new().fg(palette.foreground);

		Self {
			frame: Style::new().bg(palette.panel_bg),
			label: TextStyle {
				font: body.clone(),
				style: text,
			},
			button: TextStyle {
				font: body.clone(),
				style: text,
			},
			button_padding: BUTTON_PADDING,
			header: TextStyle {
				font: FontSpec::new(&fonts.family, fonts.header_size),
				style: text,
			},
			highlight: TextStyle {
				font: body.bold(),
				style: Style::new()
					.fg(palette.highlight)
					.add_modifier(Modifier::BOLD),
			},
			timer: TextStyle {
				font: FontSpec::new(&fonts.monospace_family, fonts.timer_size).bold(),
				style: text.add_modifier(Modifier::BOLD),
			},
		}
	}
}

/// Colours, fonts and widget styles resolved from the active theme.
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedTheme {
	pub name: String,
	pub palette: Palette,
	pub styles: StyleSheet,
}

impl ResolvedTheme {
	/// Style for the root window background.
	#[must_use]
	pub fn window_style(&self) -> Style {
		Style::new()
			.bg(self.palette.background)
			.fg(self.palette.foreground)
	}

	#[must_use]
	pub fn border_style(&self) -> Style {
		Style::new().fg(self.palette.border)
	}
}

/// Resolve `ui.theme` (or [`DEFAULT_THEME`]) against `themes.*` and derive
/// the widget styles.
pub fn apply_theme(settings: &Settings) -> Result<ResolvedTheme> {
	let requested = settings.ui.theme.as_deref().unwrap_or(DEFAULT_THEME);
	let catalog = ThemeCatalog::new(&settings.themes);

	let (name, colors) = catalog.by_name(requested).ok_or_else(|| {
		anyhow!(
			"unknown theme `{requested}` (available: {})",
			catalog.names().join(", ")
		)
	})?;

	let palette = Palette::from_colors(colors, &format!("themes.{name}"))?;
	let styles = StyleSheet::new(&palette, &settings.ui.font);
	log::debug!("applied theme `{name}`");

	Ok(ResolvedTheme {
		name: name.to_string(),
		palette,
		styles,
	})
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::settings::document::{DocumentFormat, parse_document};
	use crate::settings::{DEFAULT_DOCUMENT, merge};

	fn settings(user: &str) -> Settings {
		let defaults = parse_document(DEFAULT_DOCUMENT, DocumentFormat::Toml).unwrap();
		let user = parse_document(user, DocumentFormat::Toml).unwrap();
		merge(&defaults, &user).try_deserialize().unwrap()
	}

	#[test]
	fn configured_theme_is_applied() {
		let theme = apply_theme(&settings("[ui]\ntheme = \"DARK\"")).unwrap();
		assert_eq!(theme.name, "dark");
		assert_eq!(theme.palette.background, Color::Rgb(0x18, 0x18, 0x1b));
		assert_eq!(theme.styles.frame.bg, Some(theme.palette.panel_bg));
	}

	#[test]
	fn window_and_border_styles_use_the_palette() {
		let theme = apply_theme(&settings("[ui]\ntheme = \"dark\"")).unwrap();
		let window = theme.window_style();

		assert_eq!(window.bg, Some(theme.palette.background));
		assert_eq!(window.fg, Some(theme.palette.foreground));
		assert_eq!(theme.border_style().fg, Some(theme.palette.border));
		assert_eq!(theme.border_style().bg, None);
	}

	#[test]
	fn falls_back_to_light_when_unset() {
		let mut settings = settings("");
		settings.ui.theme = None;
		assert_eq!(apply_theme(&settings).unwrap().name, DEFAULT_THEME);
	}

	#[test]
	fn unknown_theme_lists_alternatives() {
		let err = apply_theme(&settings("[ui]\ntheme = \"neon\"")).unwrap_err();
		let message = err.to_string();
		assert!(message.contains("neon"));
		assert!(message.contains("dark, light"));
	}

	#[test]
	fn bad_theme_colour_names_the_key() {
		let err = apply_theme(&settings("[themes.light]\nborder = \"#12\"")).unwrap_err();
		assert!(format!("{err:#}").contains("themes.light.border"));
	}

	#[test]
	fn fonts_follow_the_ui_section() {
		let theme = apply_theme(&settings("[ui.font]\ntimer_size = 40")).unwrap();
		let styles = &theme.styles;

		assert_eq!(styles.header.font.size, 16);
		assert_eq!(styles.timer.font.family, "Consolas");
		assert_eq!(styles.timer.font.size, 40);
		assert!(styles.timer.font.bold);
		assert!(styles.highlight.font.bold);
		assert!(!styles.label.font.bold);
		assert_eq!(styles.button_padding, BUTTON_PADDING);
	}
}
