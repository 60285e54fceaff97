use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};

use super::{ContainerError, ContainerKind, StyleRegistry, StyleToken};

static NEXT_TREE_ID: AtomicU64 = AtomicU64::new(1);

/// Handle to a container inside a [`ContainerTree`]. Handles remember which
/// tree issued them, so a handle from another tree is detected rather than
/// silently aliasing an unrelated node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ContainerId {
	tree: u64,
	index: usize,
}

impl fmt::Display for ContainerId {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "#{}/{}", self.tree, self.index)
	}
}

/// A node of the display hierarchy. Depth and style are fixed at creation.
#[derive(Debug, Clone)]
pub struct Container {
	kind: ContainerKind,
	title: String,
	parent: Option<ContainerId>,
	relative_depth: usize,
	style: StyleToken,
	children: Vec<ContainerId>,
}

impl Container {
	#[must_use]
	pub fn kind(&self) -> ContainerKind {
		self.kind
	}

	#[must_use]
	pub fn title(&self) -> &str {
		&self.title
	}

	#[must_use]
	pub fn parent(&self) -> Option<ContainerId> {
		self.parent
	}

	/// Number of ancestors sharing this container's kind.
	#[must_use]
	pub fn relative_depth(&self) -> usize {
		self.relative_depth
	}

	#[must_use]
	pub fn style(&self) -> &StyleToken {
		&self.style
	}

	#[must_use]
	pub fn children(&self) -> &[ContainerId] {
		&self.children
	}
}

/// Arena owning every container of one display hierarchy.
///
/// Containers cannot be moved once inserted; their depth and style are
/// computed from the ancestor chain at insertion time only.
#[derive(Debug)]
pub struct ContainerTree {
	id: u64,
	styles: StyleRegistry,
	nodes: Vec<Container>,
	roots: Vec<ContainerId>,
}

impl ContainerTree {
	pub fn new(styles: StyleRegistry) -> Self {
		Self {
			id: NEXT_TREE_ID.fetch_add(1, Ordering::Relaxed),
			styles,
			nodes: Vec::new(),
			roots: Vec::new(),
		}
	}

	/// Create a container under `parent` (or as a root) and return its handle.
	pub fn insert(
		&mut self,
		parent: Option<ContainerId>,
		kind: ContainerKind,
		title: impl Into<String>,
	) -> Result<ContainerId, ContainerError> {
		if !kind.is_instantiable() {
			return Err(ContainerError::InvalidContainerKind(kind.to_string()));
		}
		if let Some(parent) = parent {
			self.check(parent)?;
		}

		let relative_depth = self.count_same_kind_ancestors(parent, kind);
		let style = self.styles.resolve(kind, relative_depth)?.clone();
		let id = ContainerId {
			tree: self.id,
			index: self.nodes.len(),
		};

		self.nodes.push(Container {
			kind,
			title: title.into(),
			parent,
			relative_depth,
			style,
			children: Vec::new(),
		});
		match parent {
			Some(parent) => self.nodes[parent.index].children.push(id),
			None => self.roots.push(id),
		}

		log::trace!("created {kind} {id} at relative depth {relative_depth}");
		Ok(id)
	}

	/// Like [`insert`](Self::insert), with the kind given by name.
	pub fn insert_named(
		&mut self,
		parent: Option<ContainerId>,
		kind: &str,
		title: impl Into<String>,
	) -> Result<ContainerId, ContainerError> {
		let kind = kind.parse()?;
		self.insert(parent, kind, title)
	}

	#[must_use]
	pub fn get(&self, id: ContainerId) -> Option<&Container> {
		if id.tree != self.id {
			return None;
		}
		self.nodes.get(id.index)
	}

	#[must_use]
	pub fn roots(&self) -> &[ContainerId] {
		&self.roots
	}

	#[must_use]
	pub fn len(&self) -> usize {
		self.nodes.len()
	}

	#[must_use]
	pub fn is_empty(&self) -> bool {
		self.nodes.is_empty()
	}

	#[must_use]
	pub fn styles(&self) -> &StyleRegistry {
		&self.styles
	}

	/// Walk from `id`'s parent up to its root.
	pub fn ancestors(&self, id: ContainerId) -> Ancestors<'_> {
		Ancestors {
			tree: self,
			next: self.get(id).and_then(Container::parent),
		}
	}

	fn check(&self, id: ContainerId) -> Result<(), ContainerError> {
		match self.get(id) {
			Some(_) => Ok(()),
			None => Err(ContainerError::MalformedHierarchy { parent: id }),
		}
	}

	fn count_same_kind_ancestors(&self, parent: Option<ContainerId>, kind: ContainerKind) -> usize {
		let mut count = 0;
		let mut cursor = parent;
		while let Some(id) = cursor {
			let node = &self.nodes[id.index];
			if node.kind == kind {
				count += 1;
			}
			cursor = node.parent;
		}
		count
	}
}

/// Iterator over the ancestors of a container, nearest first.
pub struct Ancestors<'a> {
	tree: &'a ContainerTree,
	next: Option<ContainerId>,
}

impl<'a> Iterator for Ancestors<'a> {
	type Item = (ContainerId, &'a Container);

	fn next(&mut self) -> Option<Self::Item> {
		let id = self.next?;
		let node = self.tree.get(id)?;
		self.next = node.parent;
		Some((id, node))
	}
}

#[cfg(test)]
mod tests {
	use ratatui::style::Color;

	use super::*;
	use crate::containers::StyleTable;

	fn registry() -> StyleRegistry {
		let mut registry = StyleRegistry::new();
		registry
			.insert(
				ContainerKind::Section,
				StyleTable::new(StyleToken::new(Color::Blue)),
			)
			.unwrap();
		registry
			.insert(
				ContainerKind::Location,
				StyleTable::new(StyleToken::new(Color::Green)),
			)
			.unwrap();
		registry
			.insert(
				ContainerKind::Task,
				StyleTable::new(StyleToken::new(Color::Gray))
					.with_depth(0, StyleToken::new(Color::Yellow))
					.with_depth(1, StyleToken::new(Color::Red)),
			)
			.unwrap();
		registry
	}

	#[test]
	fn depth_counts_only_same_kind_ancestors() {
		let mut tree = ContainerTree::new(registry());
		let section = tree.insert(None, ContainerKind::Section, "Forest").unwrap();
		let outer = tree.insert(Some(section), ContainerKind::Task, "Collect key").unwrap();
		let inner = tree.insert(Some(outer), ContainerKind::Task, "Open chest").unwrap();

		assert_eq!(tree.get(section).unwrap().relative_depth(), 0);
		assert_eq!(tree.get(outer).unwrap().relative_depth(), 0);
		assert_eq!(tree.get(inner).unwrap().relative_depth(), 1);
	}

	#[test]
	fn deep_absolute_position_does_not_raise_relative_depth() {
		let mut tree = ContainerTree::new(registry());
		let mut parent = tree.insert(None, ContainerKind::Section, "Act 1").unwrap();
		for name in ["Town", "Castle", "Tower", "Roof"] {
			parent = tree.insert(Some(parent), ContainerKind::Location, name).unwrap();
		}
		let task = tree.insert(Some(parent), ContainerKind::Task, "Ring bell").unwrap();

		assert_eq!(tree.ancestors(task).count(), 5);
		assert_eq!(tree.get(task).unwrap().relative_depth(), 0);
		assert_eq!(tree.get(parent).unwrap().relative_depth(), 3);
	}

	#[test]
	fn style_comes_from_kind_and_depth_with_base_fallback() {
		let mut tree = ContainerTree::new(registry());
		let first = tree.insert(None, ContainerKind::Task, "a").unwrap();
		let second = tree.insert(Some(first), ContainerKind::Task, "b").unwrap();
		let third = tree.insert(Some(second), ContainerKind::Task, "c").unwrap();

		assert_eq!(tree.get(first).unwrap().style().accent, Color::Yellow);
		assert_eq!(tree.get(second).unwrap().style().accent, Color::Red);
		assert_eq!(tree.get(third).unwrap().relative_depth(), 2);
		assert_eq!(tree.get(third).unwrap().style().accent, Color::Gray);
	}

	#[test]
	fn children_are_appended_in_order() {
		let mut tree = ContainerTree::new(registry());
		let section = tree.insert(None, ContainerKind::Section, "Route").unwrap();
		let a = tree.insert(Some(section), ContainerKind::Location, "A").unwrap();
		let b = tree.insert(Some(section), ContainerKind::Location, "B").unwrap();
		let other_root = tree.insert(None, ContainerKind::Section, "Extras").unwrap();

		assert_eq!(tree.get(section).unwrap().children(), &[a, b]);
		assert_eq!(tree.get(a).unwrap().parent(), Some(section));
		assert_eq!(tree.roots(), &[section, other_root]);
		assert_eq!(tree.len(), 4);
	}

	#[test]
	fn base_and_unknown_kinds_are_rejected() {
		let mut tree = ContainerTree::new(registry());
		assert!(matches!(
			tree.insert(None, ContainerKind::Base, "nope"),
			Err(ContainerError::InvalidContainerKind(kind)) if kind == "base"
		));
		assert!(matches!(
			tree.insert_named(None, "checkpoint", "nope"),
			Err(ContainerError::InvalidContainerKind(kind)) if kind == "checkpoint"
		));
		assert!(tree.is_empty());
	}

	#[test]
	fn kind_without_style_table_is_rejected() {
		let mut tree = ContainerTree::new(StyleRegistry::new());
		assert!(matches!(
			tree.insert(None, ContainerKind::Task, "unstyled"),
			Err(ContainerError::InvalidContainerKind(_))
		));
		assert!(tree.is_empty());
	}

	#[test]
	fn foreign_parent_is_a_malformed_hierarchy() {
		let mut first = ContainerTree::new(registry());
		let mut second = ContainerTree::new(registry());
		let foreign = first.insert(None, ContainerKind::Section, "elsewhere").unwrap();

		let err = second
			.insert(Some(foreign), ContainerKind::Task, "orphan")
			.unwrap_err();
		assert!(matches!(err, ContainerError::MalformedHierarchy { parent } if parent == foreign));
		assert!(second.get(foreign).is_none());
		assert!(second.is_empty());
	}

	#[test]
	fn named_insertion_parses_kinds() {
		let mut tree = ContainerTree::new(registry());
		let id = tree.insert_named(None, "Location", "Harbour").unwrap();
		assert_eq!(tree.get(id).unwrap().kind(), ContainerKind::Location);
		assert_eq!(tree.get(id).unwrap().title(), "Harbour");
	}
}
