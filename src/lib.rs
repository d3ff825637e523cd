//! # HRMS
//!
//! Table views for a Human Resources Management System.
//!
//! The employee, project and leave screens of the HRMS all show the same
//! kind of table: a record collection fetched from the backend is searched,
//! filtered, sorted and paginated according to the user's current settings.
//! This crate provides those table definitions on top of the generic
//! `hrms-tables` mechanism.
//!
//! ## Crates
//!
//! - `hrms-tables` - Fields, filters, search, sorting, pagination, state and export
//! - `hrms-store` - Observable snapshot store used for table state
//!
//! ## Feature Flags
//!
//! - `export` (default) - CSV and JSON export of table views
//!
//! ## Quick Example
//!
//! ```rust
//! use chrono::NaiveDate;
//! use hrms::models::{LeaveRequest, LeaveStatus, LeaveType};
//! use hrms::views::leave::{leave_state, leave_table};
//! use hrms::{TableConfig, TableController};
//!
//! let config = TableConfig::default();
//! let mut table = TableController::with_state(leave_table(), leave_state(&config, false));
//! table.set_records(vec![LeaveRequest {
//!     id: 1,
//!     employee_name: "Ada Lovelace".into(),
//!     leave_type: LeaveType::Annual,
//!     status: LeaveStatus::Pending,
//!     start_date: NaiveDate::from_ymd_opt(2024, 7, 1).unwrap(),
//!     end_date: NaiveDate::from_ymd_opt(2024, 7, 5).unwrap(),
//!     reason: None,
//! }]);
//!
//! table.set_search_term("ada");
//! let view = table.view();
//! assert_eq!(view.filtered_count(), 1);
//! assert!(!view.controls.is_visible());
//! ```

pub mod models;
pub mod views;

// Re-export the table mechanism
pub use hrms_tables::{
	Field, FieldValue, FilterGroup, FilterMode, FilterOption, FilterValue, Filters, Page,
	PageItem, PaginationControls, Paginator, Result, SearchTerm, SortDirection, SortSpec,
	TableConfig, TableController, TableDefinition, TableError, TableState, TableView, page_window,
};

// Re-export the state store
pub use hrms_store::{Store, SubscriptionId};

#[cfg(feature = "export")]
pub use hrms_tables::export;
