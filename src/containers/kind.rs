use std::fmt;
use std::str::FromStr;

use super::ContainerError;

/// Semantic category of a node in the display hierarchy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ContainerKind {
	/// Placeholder kind shared by every container before it is specialised.
	/// Never instantiated.
	Base,
	Section,
	Location,
	Task,
}

impl ContainerKind {
	/// Every kind that can be placed in a hierarchy.
	pub const INSTANTIABLE: [ContainerKind; 3] = [Self::Section, Self::Location, Self::Task];

	#[must_use]
	pub fn as_str(self) -> &'static str {
		match self {
			Self::Base => "base",
			Self::Section => "section",
			Self::Location => "location",
			Self::Task => "task",
		}
	}

	#[must_use]
	pub fn code(self) -> u8 {
		match self {
			Self::Base => 0,
			Self::Section => 1,
			Self::Location => 2,
			Self::Task => 3,
		}
	}

	#[must_use]
	pub fn is_instantiable(self) -> bool {
		self != Self::Base
	}
}

impl fmt::Display for ContainerKind {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.as_str())
	}
}

impl FromStr for ContainerKind {
	type Err = ContainerError;

	fn from_str(value: &str) -> Result<Self, Self::Err> {
		match value.trim().to_ascii_lowercase().as_str() {
			"base" => Ok(Self::Base),
			"section" => Ok(Self::Section),
			"location" => Ok(Self::Location),
			"task" => Ok(Self::Task),
			_ => Err(ContainerError::InvalidContainerKind(value.to_string())),
		}
	}
}

impl TryFrom<u8> for ContainerKind {
	type Error = ContainerError;

	fn try_from(code: u8) -> Result<Self, Self::Error> {
		match code {
			0 => Ok(Self::Base),
			1 => Ok(Self::Section),
			2 => Ok(Self::Location),
			3 => Ok(Self::Task),
			other => Err(ContainerError::InvalidContainerKind(other.to_string())),
		}
	}
}
