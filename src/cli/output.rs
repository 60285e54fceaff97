use std::io::{self, Write};

use anyhow::{Context, Result};
use ratatui::style::Style;
use ywar::containers::{ContainerKind, StyleToken};
use ywar::shell::ShellDescription;
use ywar::theme::TextStyle;
use ywar::{ConfigTree, ResolvedConfig};

/// Write the merged configuration tree as pretty JSON.
pub(crate) fn print_json(tree: &ConfigTree) -> Result<()> {
	let stdout = io::stdout();
	let mut handle = stdout.lock();
	serde_json::to_writer_pretty(&mut handle, tree).context("failed to serialise configuration")?;
	writeln!(handle)?;
	Ok(())
}

/// Print everything a host UI would build from the resolved configuration.
pub(crate) fn print_overview(config: &ResolvedConfig, shell: &ShellDescription) {
	config.print_summary();

	let window = &shell.window;
	let layout = &shell.layout;
	println!();
	println!("Window: \"{}\" {}", window.title, window.geometry());
	println!(
		"  Panes: route {} / timer {}",
		layout.left_weight, layout.right_weight
	);
	println!("  Left header: {}", layout.section_header);
	println!("  Timer: {}", layout.timer_placeholder);
	for binding in &shell.bindings {
		println!("  Button: {}", binding.caption());
	}

	let theme = &shell.theme;
	println!();
	println!("Theme: {}", theme.name);
	let palette = &theme.palette;
	println!("  background {:?}", palette.background);
	println!("  foreground {:?}", palette.foreground);
	println!("  panel_bg   {:?}", palette.panel_bg);
	println!("  accent     {:?}", palette.accent);
	println!("  highlight  {:?}", palette.highlight);
	println!("  border     {:?}", palette.border);
	println!("  {:<10} {}", "window", describe_style(theme.window_style()));
	println!("  {:<10} {}", "borders", describe_style(theme.border_style()));
	print_text_style("label", &theme.styles.label);
	print_text_style("button", &theme.styles.button);
	print_text_style("header", &theme.styles.header);
	print_text_style("highlight", &theme.styles.highlight);
	print_text_style("timer", &theme.styles.timer);

	println!();
	println!("Container styles:");
	let registry = &shell.container_styles;
	for kind in ContainerKind::INSTANTIABLE {
		let Some(table) = registry.table(kind) else {
			println!("  {kind}: (none)");
			continue;
		};
		println!("  {kind}: base {}", describe_token(table.base()));
		if let Some(max) = table.max_depth() {
			for depth in 0..=max {
				let token = table.resolve(depth);
				println!("    depth {depth}: {}", describe_token(token));
			}
		}
	}
}

fn print_text_style(name: &str, text: &TextStyle) {
	let weight = if text.font.bold { " bold" } else { "" };
	println!(
		"  {name:<10} {} {}pt{weight} {}",
		text.font.family,
		text.font.size,
		describe_style(text.style)
	);
}

fn describe_token(token: &StyleToken) -> String {
	format!(
		"accent {:?}, indent {}, {}",
		token.accent,
		token.indent,
		describe_style(token.header)
	)
}

fn describe_style(style: Style) -> String {
	let mut parts = Vec::new();
	if let Some(fg) = style.fg {
		parts.push(format!("fg {fg:?}"));
	}
	if let Some(bg) = style.bg {
		parts.push(format!("bg {bg:?}"));
	}
	if !style.add_modifier.is_empty() {
		parts.push(format!("{:?}", style.add_modifier));
	}
	if parts.is_empty() {
		"plain".to_string()
	} else {
		parts.join(", ")
	}
}
