//! Configuration loading, merging and resolution.
//!
//! A required defaults document and an optional user document (plus optional
//! environment overrides) are parsed into [`ConfigTree`]s and deep-merged with
//! [`merge`]. `load` is the primary entry point and returns a
//! [`ResolvedConfig`] holding the merged tree and its typed [`Settings`] view.

mod defaults;
pub mod document;
mod environment;
mod errors;
mod loader;
mod merge;
mod resolved;
mod sections;
mod sources;
mod tree;

pub use defaults::{DEFAULT_DOCUMENT, write_default_document};
pub use document::{DocumentError, DocumentFormat};
pub use errors::ConfigError;
pub use loader::load;
pub use merge::merge;
pub use resolved::{ConfigLayer, ResolvedConfig};
pub use sections::{
	AppSection, ContainerStylesSection, ControlsSection, FontSection, KindStyles, Settings,
	StyleSpec, ThemeColors, TimerSection, UiSection, WindowSection,
};
pub use sources::{ConfigSources, ENV_PREFIX, SettingSource};
pub use tree::{ConfigNode, ConfigTree, ConfigValue};
