//! Error types for table configuration and export
//!
//! Deriving a view never fails; only loading configuration and exporting
//! rows can.

use thiserror::Error;

/// Errors produced by this crate
#[derive(Debug, Error)]
pub enum TableError {
	/// Configuration values are out of range
	#[error("Invalid table configuration: {0}")]
	InvalidConfig(String),

	/// Configuration could not be parsed
	#[error("Failed to parse table configuration: {0}")]
	ConfigParse(#[from] toml::de::Error),

	/// Rows could not be exported
	#[error("Export error: {0}")]
	Export(String),

	/// CSV writing failed
	#[cfg(feature = "export")]
	#[error("CSV error: {0}")]
	Csv(#[from] csv::Error),

	/// JSON serialization failed
	#[error("JSON error: {0}")]
	Json(#[from] serde_json::Error),

	/// I/O operation failed
	#[error("IO error: {0}")]
	Io(#[from] std::io::Error),
}

/// Result type alias for table operations
pub type Result<T> = std::result::Result<T, TableError>;
