use std::collections::{BTreeMap, HashMap};

use anyhow::{Context, Result, bail};
use ratatui::style::{Color, Style};

use super::{ContainerError, ContainerKind};
use crate::settings::{ContainerStylesSection, KindStyles, StyleSpec};
use crate::theme::{parse_color, style_from_parts};

/// Visual descriptor assigned to a container from its kind and relative
/// depth.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StyleToken {
	/// Colour of the accent bar drawn along the container edge.
	pub accent: Color,
	/// Header text style.
	pub header: Style,
	/// Extra indentation of the child area, in cells.
	pub indent: u16,
}

impl StyleToken {
	#[must_use]
	pub fn new(accent: Color) -> Self {
		Self {
			accent,
			header: Style::new(),
			indent: 0,
		}
	}

	#[must_use]
	pub fn with_header(mut self, header: Style) -> Self {
		self.header = header;
		self
	}

	#[must_use]
	pub fn with_indent(mut self, indent: u16) -> Self {
		self.indent = indent;
		self
	}

	fn from_spec(spec: &StyleSpec, context: &str) -> Result<Self> {
		let accent = parse_color(&spec.accent)
			.with_context(|| format!("{context}.accent: invalid colour `{}`", spec.accent))?;
		let header = style_from_parts(
			spec.fg.as_deref(),
			spec.bg.as_deref(),
			&spec.modifiers,
			context,
		)?;
		Ok(Self::new(accent).with_header(header).with_indent(spec.indent))
	}
}

/// Depth to style mapping for one kind, with a base style used for any depth
/// that has no entry of its own.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StyleTable {
	base: StyleToken,
	depths: BTreeMap<usize, StyleToken>,
}

impl StyleTable {
	#[must_use]
	pub fn new(base: StyleToken) -> Self {
		Self {
			base,
			depths: BTreeMap::new(),
		}
	}

	#[must_use]
	pub fn with_depth(mut self, depth: usize, token: StyleToken) -> Self {
		self.depths.insert(depth, token);
		self
	}

	#[must_use]
	pub fn base(&self) -> &StyleToken {
		&self.base
	}

	/// Highest depth with an explicit entry, if any.
	#[must_use]
	pub fn max_depth(&self) -> Option<usize> {
		self.depths.keys().next_back().copied()
	}

	/// Style for `depth`, falling back to the base style.
	#[must_use]
	pub fn resolve(&self, depth: usize) -> &StyleToken {
		self.depths.get(&depth).unwrap_or(&self.base)
	}

	fn from_section(styles: &KindStyles, context: &str) -> Result<Self> {
		let base = StyleToken::from_spec(&styles.base, &format!("{context}.base"))?;
		let mut table = Self::new(base);

		for (key, spec) in &styles.depths {
			let depth_context = format!("{context}.depths.{key}");
			let depth: usize = key.trim().parse().with_context(|| {
				format!("{depth_context}: depth keys must be non-negative integers")
			})?;
			let token = StyleToken::from_spec(spec, &depth_context)?;
			if table.depths.insert(depth, token).is_some() {
				bail!("{depth_context}: depth {depth} is defined more than once");
			}
		}

		Ok(table)
	}
}

/// Style tables for every instantiable [`ContainerKind`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StyleRegistry {
	tables: HashMap<ContainerKind, StyleTable>,
}

impl StyleRegistry {
	#[must_use]
	pub fn new() -> Self {
		Self::default()
	}

	/// Build the registry from the `containers.*` configuration sections.
	pub fn from_settings(section: &ContainerStylesSection) -> Result<Self> {
		let mut registry = Self::new();
		for (kind, styles) in [
			(ContainerKind::Section, &section.section),
			(ContainerKind::Location, &section.location),
			(ContainerKind::Task, &section.task),
		] {
			let table = StyleTable::from_section(styles, &format!("containers.{kind}"))?;
			registry.insert(kind, table)?;
		}
		Ok(registry)
	}

	/// Register the table for `kind`, replacing any previous one.
	pub fn insert(&mut self, kind: ContainerKind, table: StyleTable) -> Result<(), ContainerError> {
		if !kind.is_instantiable() {
			return Err(ContainerError::InvalidContainerKind(kind.to_string()));
		}
		self.tables.insert(kind, table);
		Ok(())
	}

	#[must_use]
	pub fn table(&self, kind: ContainerKind) -> Option<&StyleTable> {
		self.tables.get(&kind)
	}

	/// Resolve the style for `kind` at `depth`. Depth never causes a failure;
	/// only a kind without a table does.
	pub fn resolve(&self, kind: ContainerKind, depth: usize) -> Result<&StyleToken, ContainerError> {
		self.tables
			.get(&kind)
			.map(|table| table.resolve(depth))
			.ok_or_else(|| ContainerError::InvalidContainerKind(kind.to_string()))
	}
}
