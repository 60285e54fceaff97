//! Configuration and container styling core for the YWAR route tracker.
//!
//! [`settings`] loads the default and user documents and deep-merges them into
//! one immutable tree, [`theme`] turns the merged values into colours and
//! fonts, and [`containers`] assigns depth-based styles to nested sections,
//! locations and tasks. [`shell`] describes the window the host toolkit
//! builds from the same configuration.

pub mod app_dirs;
pub mod containers;
pub mod logging;
pub mod settings;
pub mod shell;
pub mod theme;

pub use containers::{
	Container, ContainerError, ContainerId, ContainerKind, ContainerTree, StyleRegistry,
	StyleTable, StyleToken,
};
pub use settings::{
	ConfigError, ConfigNode, ConfigSources, ConfigTree, ConfigValue, ResolvedConfig, Settings,
	load, merge,
};
pub use theme::{ResolvedTheme, apply_theme};
