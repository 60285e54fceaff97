use super::ResolvedConfig;

pub(super) fn print_summary(config: &ResolvedConfig) {
	let settings = &config.settings;

	println!("Effective configuration:");
	for layer in &config.layers {
		println!("  Layer: {} ({} keys)", layer.source, layer.tree.len());
	}
	println!("  Title: {} v{}", settings.app.title, settings.app.version);
	println!("  Window: {}", settings.window);
	println!("  Resizable: {}", bool_to_word(settings.window.resizable));
	println!("  Fullscreen: {}", bool_to_word(settings.window.fullscreen));
	println!(
		"  UI theme: {}",
		settings.ui.theme.as_deref().unwrap_or("(default)")
	);
	println!(
		"  Themes available: {}",
		settings.themes.keys().cloned().collect::<Vec<_>>().join(", ")
	);
	println!(
		"  Font: {} {}pt (headers {}pt)",
		settings.ui.font.family, settings.ui.font.size, settings.ui.font.header_size
	);
	println!(
		"  Timer font: {} {}pt",
		settings.ui.font.monospace_family, settings.ui.font.timer_size
	);
	println!(
		"  Millisecond timer: {}",
		bool_to_word(settings.timer.precision_ms)
	);
	if let Some(origin) = config.origin_of("ui.theme") {
		println!("  Theme chosen by: {origin}");
	}
}

fn bool_to_word(value: bool) -> &'static str {
	if value { "yes" } else { "no" }
}
