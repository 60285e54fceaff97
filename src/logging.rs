use log::LevelFilter;

/// Environment variable holding an `env_logger` filter, e.g. `ywar=debug`.
pub const LOG_ENV: &str = "YWAR_LOG";

/// Install the global logger. `verbosity` counts `-v` flags; `YWAR_LOG`
/// takes precedence when set. Calling this twice is harmless.
pub fn initialize(verbosity: u8) {
	let _ = env_logger::Builder::new()
		.filter_level(level_for(verbosity))
		.parse_env(LOG_ENV)
		.format_timestamp(None)
		.format_target(false)
		.try_init();
}

fn level_for(verbosity: u8) -> LevelFilter {
	match verbosity {
		0 => LevelFilter::Warn,
		1 => LevelFilter::Info,
		2 => LevelFilter::Debug,
		_ => LevelFilter::Trace,
	}
}
