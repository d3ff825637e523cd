//! Table configuration
//!
//! Loaded from TOML, for example:
//!
//! ```toml
//! page_size = 20
//! page_size_options = [10, 20, 50]
//! window_siblings = 2
//! ```

use crate::error::{Result, TableError};
use crate::pagination::DEFAULT_WINDOW_SIBLINGS;
use crate::state::{DEFAULT_PAGE_SIZE, TableState};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Per-view table settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct TableConfig {
	/// Initial number of rows per page
	pub page_size: usize,
	/// Page sizes offered by the page-size selector
	pub page_size_options: Vec<usize>,
	/// Pages shown on each side of the current page
	pub window_siblings: usize,
}

impl Default for TableConfig {
	fn default() -> Self {
		Self {
			page_size: DEFAULT_PAGE_SIZE,
			page_size_options: vec![10, 20, 50, 100],
			window_siblings: DEFAULT_WINDOW_SIBLINGS,
		}
	}
}

impl TableConfig {
	/// Parses and validates a TOML document
	pub fn from_toml_str(s: &str) -> Result<Self> {
		let config: Self = toml::from_str(s)?;
		config.validate()?;
		Ok(config)
	}

	/// Reads, parses and validates a TOML file
	pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
		let content = std::fs::read_to_string(path.as_ref())?;
		Self::from_toml_str(&content)
	}

	/// Checks value ranges
	pub fn validate(&self) -> Result<()> {
		if self.page_size == 0 {
			return Err(TableError::InvalidConfig(
				"page_size must be greater than 0".to_string(),
			));
		}
		if self.page_size_options.contains(&0) {
			return Err(TableError::InvalidConfig(
				"page_size_options must not contain 0".to_string(),
			));
		}
		if !self.page_size_options.is_empty() && !self.page_size_options.contains(&self.page_size) {
			return Err(TableError::InvalidConfig(format!(
				"page_size {} is not one of page_size_options {:?}",
				self.page_size, self.page_size_options
			)));
		}
		Ok(())
	}

	/// Fresh state for a table using this configuration
	pub fn initial_state(&self) -> TableState {
		TableState::new(self.page_size)
	}
}
