//! Data tables for HRMS views
//!
//! This crate implements the generic table mechanism shared by the
//! employee, project and leave screens: a record collection is filtered,
//! searched, sorted and paginated according to a [`TableState`] snapshot.
//!
//! # Features
//!
//! - **Fields**: Caller-supplied accessors over any record type
//! - **Filtering**: Scalar and multi-select filters, or a custom predicate
//! - **Search**: Case-insensitive substring match over searchable fields
//! - **Sorting**: Stable natural ordering with nulls last
//! - **Pagination**: Page slicing and an ellipsis page-number window
//! - **State**: Immutable snapshots in an observable store
//! - **Export**: CSV and JSON export (requires `export` feature)
//!
//! # Architecture
//!
//! ```mermaid
//! graph TD
//!     A[TableController] --> B[TableDefinition]
//!     A --> C[Store of TableState]
//!     A --> D[Records]
//!     B --> E[Fields]
//!     B --> F[Filter Groups]
//!     B --> G[Filter Mode]
//!     A --> H[TableView]
//!     H --> I[Page]
//!     H --> J[PaginationControls]
//! ```
//!
//! # Example
//!
//! ```rust
//! use hrms_tables::{Field, FilterValue, TableController, TableDefinition};
//!
//! struct Employee {
//!     name: String,
//!     department: String,
//! }
//!
//! let definition = TableDefinition::new()
//!     .field(Field::new("name", "Name", |e: &Employee| e.name.as_str().into()).searchable(true))
//!     .field(Field::new("department", "Department", |e: &Employee| {
//!         e.department.as_str().into()
//!     }));
//!
//! let mut table = TableController::new(definition);
//! table.set_records(vec![
//!     Employee { name: "Alice".into(), department: "HR".into() },
//!     Employee { name: "Bob".into(), department: "IT".into() },
//! ]);
//! table.set_filter("department", Some(FilterValue::from("IT")));
//!
//! let view = table.view();
//! assert_eq!(view.filtered_count(), 1);
//! assert_eq!(view.visible_rows()[0].name, "Bob");
//! ```

#![warn(missing_docs)]
#![warn(rustdoc::broken_intra_doc_links)]

pub mod config;
pub mod controller;
pub mod error;
#[cfg(feature = "export")]
pub mod export;
pub mod field;
pub mod filter;
pub mod pagination;
pub mod search;
pub mod sort;
pub mod state;
pub mod table;
pub mod value;

// Re-exports for convenience
pub use config::TableConfig;
pub use controller::TableController;
pub use error::{Result, TableError};
pub use field::Field;
pub use filter::{FilterGroup, FilterMode, FilterOption, FilterValue, Filters};
pub use hrms_store::{Store, SubscriptionId};
pub use pagination::{Page, PageItem, PaginationControls, Paginator, page_window};
pub use search::SearchTerm;
pub use sort::{SortDirection, SortSpec};
pub use state::TableState;
pub use table::{TableDefinition, TableView};
pub use value::FieldValue;
