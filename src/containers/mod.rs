//! Nested display containers (sections, locations, tasks) and their
//! depth-based styling.
//!
//! A container's depth is counted relative to ancestors of the same kind, not
//! the absolute tree depth: a task directly under a deeply nested location is
//! still at depth zero. Depth and style are resolved once, when the container
//! is created.

mod hierarchy;
mod kind;
mod style;

use thiserror::Error;

pub use hierarchy::{Ancestors, Container, ContainerId, ContainerTree};
pub use kind::ContainerKind;
pub use style::{StyleRegistry, StyleTable, StyleToken};

#[derive(Debug, Error)]
pub enum ContainerError {
	#[error("invalid container kind `{0}`")]
	InvalidContainerKind(String),
	#[error("parent container {parent} does not belong to this hierarchy")]
	MalformedHierarchy { parent: ContainerId },
}
