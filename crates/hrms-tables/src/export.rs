//! CSV and JSON export of derived table views
//!
//! Columns follow the definition's field order; headers use field labels
//! for CSV and field names as JSON object keys.

use crate::error::{Result, TableError};
use crate::field::Field;
use crate::table::{TableDefinition, TableView};
use serde_json::{Map, Value};
use std::io::Write;

/// Which rows of a view are exported
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ExportScope {
	/// Every filtered row, in sort order
	#[default]
	AllRows,
	/// Only the visible page
	CurrentPage,
}

impl<'a, R> TableView<'a, R> {
	/// Rows selected by `scope`
	pub fn rows_for(&self, scope: ExportScope) -> &[&'a R] {
		match scope {
			ExportScope::AllRows => &self.rows,
			ExportScope::CurrentPage => &self.page.items,
		}
	}
}

/// Writes `rows` as CSV with a header line
pub fn write_csv<R, W: Write>(fields: &[Field<R>], rows: &[&R], writer: W) -> Result<()> {
	let mut csv = csv::Writer::from_writer(writer);
	csv.write_record(fields.iter().map(Field::label))?;
	for row in rows {
		csv.write_record(fields.iter().map(|f| f.value(row).display()))?;
	}
	csv.flush()?;
	Ok(())
}

/// Exports a view as a CSV string
pub fn to_csv_string<R>(
	definition: &TableDefinition<R>,
	view: &TableView<'_, R>,
	scope: ExportScope,
) -> Result<String> {
	let mut buffer = Vec::new();
	write_csv(definition.fields(), view.rows_for(scope), &mut buffer)?;
	String::from_utf8(buffer).map_err(|e| TableError::Export(e.to_string()))
}

/// Converts `rows` to a JSON array of objects keyed by field name
pub fn to_json_value<R>(fields: &[Field<R>], rows: &[&R]) -> Value {
	Value::Array(
		rows.iter()
			.map(|row| {
				let object: Map<String, Value> = fields
					.iter()
					.map(|f| (f.name().to_string(), Value::from(f.value(row))))
					.collect();
				Value::Object(object)
			})
			.collect(),
	)
}

/// Exports a view as pretty-printed JSON
pub fn to_json_string<R>(
	definition: &TableDefinition<R>,
	view: &TableView<'_, R>,
	scope: ExportScope,
) -> Result<String> {
	let value = to_json_value(definition.fields(), view.rows_for(scope));
	Ok(serde_json::to_string_pretty(&value)?)
}
