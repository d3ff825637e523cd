//! Field definitions
//!
//! A [`Field`] names one column of a table and knows how to extract its
//! [`FieldValue`] from a record. The table never assumes a record shape:
//! every read goes through the accessor supplied here.

use crate::value::FieldValue;
use std::fmt;
use std::sync::Arc;

/// Accessor type used by [`Field`]
pub type Accessor<R> = Arc<dyn Fn(&R) -> FieldValue + Send + Sync>;

/// A named, typed view onto one attribute of a record
///
/// # Example
///
/// ```rust
/// use hrms_tables::{Field, FieldValue};
///
/// struct Employee {
///     name: String,
///     salary: i64,
/// }
///
/// let name = Field::new("name", "Name", |e: &Employee| e.name.as_str().into())
///     .searchable(true);
/// let salary = Field::new("salary", "Salary", |e: &Employee| e.salary.into());
///
/// let alice = Employee { name: "Alice".into(), salary: 5000 };
/// assert_eq!(name.value(&alice), FieldValue::from("Alice"));
/// assert_eq!(salary.value(&alice), FieldValue::Int(5000));
/// ```
pub struct Field<R> {
	name: String,
	label: String,
	accessor: Accessor<R>,
	sortable: bool,
	searchable: bool,
}

impl<R> Field<R> {
	/// Creates a new sortable, non-searchable field
	pub fn new<F>(name: impl Into<String>, label: impl Into<String>, accessor: F) -> Self
	where
		F: Fn(&R) -> FieldValue + Send + Sync + 'static,
	{
		Self {
			name: name.into(),
			label: label.into(),
			accessor: Arc::new(accessor),
			sortable: true,
			searchable: false,
		}
	}

	/// Sets whether this field can be sorted on
	pub fn sortable(mut self, sortable: bool) -> Self {
		self.sortable = sortable;
		self
	}

	/// Sets whether the search term is matched against this field
	pub fn searchable(mut self, searchable: bool) -> Self {
		self.searchable = searchable;
		self
	}

	/// Field key used by filters, sort keys and exports
	pub fn name(&self) -> &str {
		&self.name
	}

	/// Human readable header text
	pub fn label(&self) -> &str {
		&self.label
	}

	/// Whether this field can be sorted on
	pub fn is_sortable(&self) -> bool {
		self.sortable
	}

	/// Whether this field takes part in search
	pub fn is_searchable(&self) -> bool {
		self.searchable
	}

	/// Extracts this field's value from `record`
	pub fn value(&self, record: &R) -> FieldValue {
		(self.accessor)(record)
	}
}

impl Field<serde_json::Value> {
	/// Field over an opaque JSON object row, reading `key`
	///
	/// Missing keys and non-object rows yield [`FieldValue::Null`].
	pub fn json(key: impl Into<String>, label: impl Into<String>) -> Self {
		let key = key.into();
		let lookup = key.clone();
		Self::new(key, label, move |row: &serde_json::Value| {
			row.get(&lookup).map_or(FieldValue::Null, FieldValue::from)
		})
	}
}

impl<R> Clone for Field<R> {
	fn clone(&self) -> Self {
		Self {
			name: self.name.clone(),
			label: self.label.clone(),
			accessor: Arc::clone(&self.accessor),
			sortable: self.sortable,
			searchable: self.searchable,
		}
	}
}

impl<R> fmt::Debug for Field<R> {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("Field")
			.field("name", &self.name)
			.field("label", &self.label)
			.field("sortable", &self.sortable)
			.field("searchable", &self.searchable)
			.finish_non_exhaustive()
	}
}
