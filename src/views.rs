//! Views module.
//!
//! Table definitions for the HRMS list screens. Each screen reuses the same
//! table mechanism with its own fields, filter groups and defaults.
//!
//! # Examples
//!
//! ```rust
//! use hrms::models::Department;
//! use hrms::views::employees::employee_table;
//! use hrms::{TableConfig, TableController};
//!
//! let departments = vec![Department::new(1, "Engineering")];
//! let table = TableController::from_config(employee_table(&departments), &TableConfig::default());
//! assert_eq!(table.view().filtered_count(), 0);
//! ```

use chrono::NaiveDate;
use hrms_tables::FieldValue;

pub mod employees;
pub mod leave;
pub mod projects;

/// Dates are exposed as ISO-8601 text, which sorts chronologically
pub(crate) fn date_value(date: NaiveDate) -> FieldValue {
	FieldValue::Text(date.format("%Y-%m-%d").to_string())
}
