use anyhow::{Context, Result, anyhow, bail};
use ratatui::style::{Color, Modifier, Style};

const NAMED_COLOURS: &[(&str, Color)] = &[
	("reset", Color::Reset),
	("default", Color::Reset),
	("black", Color::Black),
	("red", Color::Red),
	("green", Color::Green),
	("yellow", Color::Yellow),
	("blue", Color::Blue),
	("magenta", Color::Magenta),
	("cyan", Color::Cyan),
	("gray", Color::Gray),
	("grey", Color::Gray),
	("dark_gray", Color::DarkGray),
	("dark_grey", Color::DarkGray),
	("light_red", Color::LightRed),
	("light_green", Color::LightGreen),
	("light_yellow", Color::LightYellow),
	("light_blue", Color::LightBlue),
	("light_magenta", Color::LightMagenta),
	("light_cyan", Color::LightCyan),
	("white", Color::White),
];

/// Text effects accepted in `modifiers` lists.
const MODIFIERS: &[(&str, Modifier)] = &[
	("bold", Modifier::BOLD),
	("dim", Modifier::DIM),
	("italic", Modifier::ITALIC),
	("underlined", Modifier::UNDERLINED),
	("underline", Modifier::UNDERLINED),
];

/// Build a style from optional foreground/background colours and modifier
/// names. `context` prefixes every error, e.g. `containers.task.base`.
pub(crate) fn style_from_parts(
	fg: Option<&str>,
	bg: Option<&str>,
	modifiers: &[String],
	context: &str,
) -> Result<Style> {
	let mut style = Style::new();

	if let Some(fg) = fg {
		let colour = parse_color(fg)
			.with_context(|| format!("{context}: invalid foreground colour `{fg}`"))?;
		style = style.fg(colour);
	}
	if let Some(bg) = bg {
		let colour = parse_color(bg)
			.with_context(|| format!("{context}: invalid background colour `{bg}`"))?;
		style = style.bg(colour);
	}

	modifiers.iter().try_fold(style, |style, name| {
		lookup(MODIFIERS, name)
			.map(|modifier| style.add_modifier(modifier))
			.ok_or_else(|| anyhow!("{context}: invalid modifier `{name}`"))
	})
}

/// Parse `#rgb`, `#rrggbb`, `rgb(r, g, b)`, a 256-colour index or one of the
/// sixteen terminal colour names.
pub fn parse_color(input: &str) -> Result<Color> {
	let value = input.trim();

	if let Some(digits) = value.strip_prefix('#') {
		hex_colour(digits)
	} else if let Some(channels) = call_arguments(value, "rgb") {
		rgb_colour(channels)
	} else if let Ok(index) = value.parse::<u8>() {
		Ok(Color::Indexed(index))
	} else {
		lookup(NAMED_COLOURS, value).ok_or_else(|| anyhow!("unknown colour `{value}`"))
	}
}

/// Case-insensitive table lookup; spaces and dashes match underscores.
fn lookup<T: Copy>(table: &[(&str, T)], name: &str) -> Option<T> {
	let name = name.trim().to_ascii_lowercase().replace([' ', '-'], "_");
	table
		.iter()
		.find(|(candidate, _)| *candidate == name)
		.map(|(_, value)| *value)
}

/// `rgb( 1, 2, 3 )` -> `" 1, 2, 3 "`.
fn call_arguments<'a>(value: &'a str, function: &str) -> Option<&'a str> {
	value
		.strip_prefix(function)?
		.trim_start()
		.strip_prefix('(')?
		.strip_suffix(')')
}

fn hex_colour(digits: &str) -> Result<Color> {
	if !digits.bytes().all(|byte| byte.is_ascii_hexdigit()) {
		bail!("`#{digits}` contains non-hexadecimal characters");
	}

	let packed = match digits.len() {
		6 => u32::from_str_radix(digits, 16)?,
		// #abc is shorthand for #aabbcc.
		3 => digits.bytes().fold(0, |packed, digit| {
			let nibble = char::from(digit).to_digit(16).unwrap_or(0);
			(packed << 8) | (nibble << 4) | nibble
		}),
		other => bail!("hex colours need 3 or 6 digits, `#{digits}` has {other}"),
	};

	let [_, red, green, blue] = packed.to_be_bytes();
	Ok(Color::Rgb(red, green, blue))
}

fn rgb_colour(channels: &str) -> Result<Color> {
	let parsed = channels
		.split(',')
		.map(|channel| {
			let channel = channel.trim();
			channel
				.parse::<u8>()
				.with_context(|| format!("rgb() channel `{channel}` is not in 0..=255"))
		})
		.collect::<Result<Vec<_>>>()?;

	match parsed[..] {
		[red, green, blue] => Ok(Color::Rgb(red, green, blue)),
		_ => bail!("rgb() takes three channels, got {}", parsed.len()),
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn parses_hex_forms() {
		assert_eq!(parse_color("#2563eb").unwrap(), Color::Rgb(0x25, 0x63, 0xeb));
		assert_eq!(parse_color("#fff").unwrap(), Color::Rgb(255, 255, 255));
		assert_eq!(parse_color("#1a3").unwrap(), Color::Rgb(0x11, 0xaa, 0x33));
		assert!(parse_color("#12345").is_err());
		assert!(parse_color("#zzzzzz").is_err());
		assert!(parse_color("#é12").is_err());
	}

	#[test]
	fn parses_functional_indexed_and_named_forms() {
		assert_eq!(parse_color("rgb(1, 2, 3)").unwrap(), Color::Rgb(1, 2, 3));
		assert_eq!(parse_color(" rgb (10,20,30) ").unwrap(), Color::Rgb(10, 20, 30));
		assert_eq!(parse_color("42").unwrap(), Color::Indexed(42));
		assert_eq!(parse_color("Dark Grey").unwrap(), Color::DarkGray);
		assert_eq!(parse_color("light-blue").unwrap(), Color::LightBlue);
		assert!(parse_color("rgb(1, 2)").is_err());
		assert!(parse_color("rgb(1, 2, 300)").is_err());
		assert!(parse_color("chartreuse-ish").is_err());
	}

	#[test]
	fn style_errors_name_their_context() {
		let err = style_from_parts(Some("#nothex"), None, &[], "themes.dark").unwrap_err();
		assert!(format!("{err:#}").contains("themes.dark"));

		let err = style_from_parts(None, None, &["sparkly".into()], "containers.task").unwrap_err();
		assert!(format!("{err:#}").contains("invalid modifier `sparkly`"));
	}

	#[test]
	fn modifiers_accumulate() {
		let style = style_from_parts(
			Some("red"),
			Some("#000"),
			&["bold".into(), "Italic".into(), "underlined".into()],
			"test",
		)
		.unwrap();
		assert_eq!(style.fg, Some(Color::Red));
		assert_eq!(style.bg, Some(Color::Rgb(0, 0, 0)));
		assert!(
			style
				.add_modifier
				.contains(Modifier::BOLD | Modifier::ITALIC | Modifier::UNDERLINED)
		);
	}
}
