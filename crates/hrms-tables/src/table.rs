//! Table definitions and derived views
//!
//! A [`TableDefinition`] describes a table over record type `R`. Given the
//! full record collection and a [`TableState`], [`TableDefinition::derive`]
//! runs the pipeline filter → search → sort → paginate and returns a
//! [`TableView`] borrowing from the collection.

use crate::field::Field;
use crate::filter::{FilterGroup, FilterMode, Filters};
use crate::pagination::{DEFAULT_WINDOW_SIBLINGS, Page, PaginationControls, Paginator};
use crate::search::SearchTerm;
use crate::sort::sort_rows;
use crate::state::TableState;
use std::fmt;

/// Declarative description of one table
///
/// ```mermaid
/// graph LR
///     A[records] --> B[filters AND search]
///     B --> C[stable sort]
///     C --> D[paginate]
///     D --> E[TableView]
/// ```
#[cfg_attr(doc, aquamarine::aquamarine)]
pub struct TableDefinition<R> {
	fields: Vec<Field<R>>,
	filter_groups: Vec<FilterGroup>,
	filter_mode: FilterMode<R>,
	window_siblings: usize,
}

impl<R> Default for TableDefinition<R> {
	fn default() -> Self {
		Self::new()
	}
}

impl<R> Clone for TableDefinition<R> {
	fn clone(&self) -> Self {
		Self {
			fields: self.fields.clone(),
			filter_groups: self.filter_groups.clone(),
			filter_mode: self.filter_mode.clone(),
			window_siblings: self.window_siblings,
		}
	}
}

impl<R> fmt::Debug for TableDefinition<R> {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("TableDefinition")
			.field("fields", &self.fields)
			.field("filter_groups", &self.filter_groups)
			.field("filter_mode", &self.filter_mode)
			.field("window_siblings", &self.window_siblings)
			.finish()
	}
}

impl<R> TableDefinition<R> {
	/// Creates a definition with no fields
	pub fn new() -> Self {
		Self {
			fields: Vec::new(),
			filter_groups: Vec::new(),
			filter_mode: FilterMode::Default,
			window_siblings: DEFAULT_WINDOW_SIBLINGS,
		}
	}

	/// Adds a field
	pub fn field(mut self, field: Field<R>) -> Self {
		self.fields.push(field);
		self
	}

	/// Adds filter metadata
	pub fn filter_group(mut self, group: FilterGroup) -> Self {
		self.filter_groups.push(group);
		self
	}

	/// Replaces per-field filter matching with `predicate`
	pub fn filter_predicate<F>(mut self, predicate: F) -> Self
	where
		F: Fn(&R, &Filters) -> bool + Send + Sync + 'static,
	{
		self.filter_mode = FilterMode::custom(predicate);
		self
	}

	/// Sets how many pages are shown around the current page
	pub fn window_siblings(mut self, siblings: usize) -> Self {
		self.window_siblings = siblings;
		self
	}

	/// All fields in declaration order
	pub fn fields(&self) -> &[Field<R>] {
		&self.fields
	}

	/// Looks up a field by name
	pub fn get_field(&self, name: &str) -> Option<&Field<R>> {
		self.fields.iter().find(|f| f.name() == name)
	}

	/// Names of the fields search runs against
	pub fn searchable_fields(&self) -> Vec<&str> {
		self.fields
			.iter()
			.filter(|f| f.is_searchable())
			.map(Field::name)
			.collect()
	}

	/// Filter metadata for the view's filter controls
	pub fn filter_groups(&self) -> &[FilterGroup] {
		&self.filter_groups
	}

	/// Active filter mode
	pub fn filter_mode(&self) -> &FilterMode<R> {
		&self.filter_mode
	}

	/// Records passing the filters and the search term, in input order
	pub fn filter<'a>(&self, records: &'a [R], state: &TableState) -> Vec<&'a R> {
		let term = SearchTerm::new(state.search_term());
		let filters = state.filters();
		records
			.iter()
			.filter(|r| self.filter_mode.matches(r, filters, &self.fields))
			.filter(|r| term.matches(*r, &self.fields))
			.collect()
	}

	/// Filtered records in sort order
	pub fn filter_and_sort<'a>(&self, records: &'a [R], state: &TableState) -> Vec<&'a R> {
		let mut rows = self.filter(records, state);
		sort_rows(&mut rows, state.sort(), &self.fields);
		rows
	}

	/// Runs the whole pipeline for `state`
	pub fn derive<'a>(&self, records: &'a [R], state: &TableState) -> TableView<'a, R> {
		let rows = self.filter_and_sort(records, state);
		let paginator = Paginator::new(rows.len(), state.page_size());
		let page = paginator.page(&rows, state.current_page());
		let controls = PaginationControls::for_page(&page, self.window_siblings);

		tracing::debug!(
			total = records.len(),
			filtered = rows.len(),
			page = page.number,
			total_pages = page.total_pages,
			"derived table view"
		);

		TableView {
			total_records: records.len(),
			rows,
			page,
			controls,
		}
	}
}

/// Result of deriving a table for one state snapshot
#[derive(Debug, Clone)]
pub struct TableView<'a, R> {
	/// Size of the unfiltered collection
	pub total_records: usize,
	/// Every filtered row in sort order
	pub rows: Vec<&'a R>,
	/// The visible page
	pub page: Page<&'a R>,
	/// Pagination area contents
	pub controls: PaginationControls,
}

impl<R> TableView<'_, R> {
	/// Number of rows after filtering and search
	pub fn filtered_count(&self) -> usize {
		self.rows.len()
	}

	/// Rows on the visible page
	pub fn visible_rows(&self) -> &[&R] {
		&self.page.items
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::filter::FilterValue;
	use crate::sort::SortDirection;
	use crate::value::FieldValue;
	use rstest::{fixture, rstest};

	#[derive(Debug, Clone, PartialEq)]
	struct Employee {
		id: u32,
		name: &'static str,
		department: &'static str,
	}

	#[fixture]
	fn employees() -> Vec<Employee> {
		let departments = ["HR", "IT", "Finance"];
		(1..=23)
			.map(|id| Employee {
				id,
				name: if id % 2 == 0 { "Even" } else { "Odd" },
				department: departments[(id as usize) % 3],
			})
			.collect()
	}

	#[fixture]
	fn definition() -> TableDefinition<Employee> {
		TableDefinition::new()
			.field(Field::new("id", "ID", |e: &Employee| FieldValue::from(e.id)))
			.field(Field::new("name", "Name", |e: &Employee| e.name.into()).searchable(true))
			.field(Field::new("department", "Department", |e: &Employee| {
				e.department.into()
			}))
	}

	fn ids(rows: &[&Employee]) -> Vec<u32> {
		rows.iter().map(|e| e.id).collect()
	}

	#[rstest]
	fn test_first_page(definition: TableDefinition<Employee>, employees: Vec<Employee>) {
		let view = definition.derive(&employees, &TableState::new(10));
		assert_eq!(view.total_records, 23);
		assert_eq!(view.filtered_count(), 23);
		assert_eq!(ids(view.visible_rows()), (1..=10).collect::<Vec<_>>());
		assert_eq!(view.page.total_pages, 3);
		assert!(view.controls.is_visible());
	}

	#[rstest]
	fn test_filter_search_sort_compose(
		definition: TableDefinition<Employee>,
		employees: Vec<Employee>,
	) {
		let state = TableState::new(10)
			.set_filter("department", Some(FilterValue::from("IT")))
			.set_search_term("odd")
			.set_sort("id", SortDirection::Desc);
		let view = definition.derive(&employees, &state);
		// IT = id % 3 == 1, odd ids only.
		assert_eq!(ids(&view.rows), vec![19, 13, 7, 1]);
		assert!(!view.controls.is_visible());
	}

	#[rstest]
	fn test_out_of_range_page_is_clamped(
		definition: TableDefinition<Employee>,
		employees: Vec<Employee>,
	) {
		let state = TableState::new(10).set_current_page(7);
		let view = definition.derive(&employees, &state);
		assert_eq!(view.page.number, 3);
		assert_eq!(ids(view.visible_rows()), vec![21, 22, 23]);
	}

	#[rstest]
	fn test_custom_predicate(employees: Vec<Employee>) {
		let definition = definition().filter_predicate(|e: &Employee, filters: &Filters| {
			match filters.get("bucket") {
				Some(value) => value.matches(if e.id <= 5 { "low" } else { "high" }),
				None => true,
			}
		});
		let state = TableState::new(10).set_filter("bucket", Some("low".into()));
		assert_eq!(ids(&definition.filter(&employees, &state)), vec![1, 2, 3, 4, 5]);
	}

	#[rstest]
	fn test_searchable_fields(definition: TableDefinition<Employee>) {
		assert_eq!(definition.searchable_fields(), vec!["name"]);
		assert!(definition.get_field("department").is_some());
		assert!(definition.get_field("salary").is_none());
	}
}
