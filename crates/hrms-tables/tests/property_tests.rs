//! Property-based tests for the table pipeline
//!
//! Property-based tests for pagination, filtering, search and sorting.


use fixtures::{TestEmployee, employee_definition};
use hrms_tables::{FilterValue, Paginator, SortDirection, TableState};
use proptest::prelude::*;
use rstest::*;

fn employee_strategy() -> impl Strategy<Value = TestEmployee> {
	(
		0i64..50,
		"[A-Za-z]{1,8}",
		prop::sample::select(vec!["Engineering", "Finance", "HR"]),
		prop::sample::select(vec!["active", "inactive", "on_leave"]),
		prop::option::of(0i64..10),
	)
		.prop_map(|(id, name, department, status, salary)| {
			TestEmployee::new(id, &name, department, status, salary)
		})
}

fn employees_strategy() -> impl Strategy<Value = Vec<TestEmployee>> {
	prop::collection::vec(employee_strategy(), 0..60)
}

fn ids(rows: &[&TestEmployee]) -> Vec<i64> {
	rows.iter().map(|e| e.id).collect()
}

// ============================================================================
// Property-Based Tests: Pagination
// ============================================================================

proptest! {
	/// Test: Pagination coverage
	///
	/// Category: Property
	/// Verifies that concatenating every page rebuilds the collection exactly once.
	#[rstest]
	fn prop_pages_cover_collection(
		records in employees_strategy(),
		page_size in 1usize..15,
		sort_desc in any::<bool>(),
	) {
		let definition = employee_definition();
		let direction = if sort_desc { SortDirection::Desc } else { SortDirection::Asc };
		let state = TableState::new(page_size).set_sort("salary", direction);
		let full = definition.filter_and_sort(&records, &state);
		let total_pages = Paginator::new(full.len(), page_size).total_pages();

		let mut concatenated = Vec::new();
		for page in 1..=total_pages {
			let view = definition.derive(&records, &state.set_current_page(page));
			prop_assert_eq!(view.page.number, page);
			concatenated.extend(view.page.items.iter().copied());
		}

		prop_assert_eq!(ids(&concatenated), ids(&full));
		prop_assert!(concatenated.iter().zip(full.iter()).all(|(a, b)| std::ptr::eq(*a, *b)));
	}

	/// Test: Raw bounds never overlap and stay inside the collection
	///
	/// Category: Property
	/// Verifies that page ranges tile `0..total_items`.
	#[rstest]
	fn prop_bounds_tile_collection(total in 0usize..500, page_size in 1usize..40) {
		let paginator = Paginator::new(total, page_size);
		let mut expected_start = 0;
		for page in 1..=paginator.total_pages() {
			let range = paginator.bounds(page);
			prop_assert_eq!(range.start, expected_start);
			prop_assert!(range.end <= total);
			expected_start = range.end;
		}
		prop_assert_eq!(expected_start, total);
		prop_assert!(paginator.bounds(paginator.total_pages() + 1).is_empty());
	}
}

// ============================================================================
// Property-Based Tests: Filtering and Search
// ============================================================================

proptest! {
	/// Test: Filter idempotence
	///
	/// Category: Property
	/// Verifies that filtering an already filtered set changes nothing.
	#[rstest]
	fn prop_filter_idempotent(
		records in employees_strategy(),
		department in prop::sample::select(vec!["Engineering", "Finance", "HR"]),
		statuses in prop::sample::subsequence(vec!["active", "inactive", "on_leave"], 0..=3),
	) {
		let definition = employee_definition();
		let state = TableState::new(10)
			.set_filter("department", Some(FilterValue::from(department)))
			.set_filter("status", Some(FilterValue::from(statuses)));

		let once: Vec<TestEmployee> = definition
			.filter(&records, &state)
			.into_iter()
			.cloned()
			.collect();
		let twice: Vec<TestEmployee> = definition
			.filter(&once, &state)
			.into_iter()
			.cloned()
			.collect();

		prop_assert_eq!(once, twice);
	}

	/// Test: Search monotonicity
	///
	/// Category: Property
	/// Verifies that extending a search term never adds matches.
	#[rstest]
	fn prop_search_monotonic(
		records in employees_strategy(),
		prefix in "[a-z]{0,3}",
		suffix in "[a-z]{0,3}",
	) {
		let definition = employee_definition();
		let longer = format!("{prefix}{suffix}");
		let shorter_state = TableState::new(10).set_search_term(prefix.as_str());
		let longer_state = TableState::new(10).set_search_term(longer.as_str());

		let shorter_hits = definition.filter(&records, &shorter_state);
		let longer_hits = definition.filter(&records, &longer_state);

		prop_assert!(longer_hits.len() <= shorter_hits.len());
		for hit in longer_hits {
			prop_assert!(shorter_hits.iter().any(|r| std::ptr::eq(*r, hit)));
		}
	}
}

// ============================================================================
// Property-Based Tests: Sorting and State
// ============================================================================

proptest! {
	/// Test: Sort stability
	///
	/// Category: Property
	/// Verifies that records with equal keys keep their input order.
	#[rstest]
	fn prop_sort_stable(records in employees_strategy(), desc in any::<bool>()) {
		let definition = employee_definition();
		let direction = if desc { SortDirection::Desc } else { SortDirection::Asc };
		let state = TableState::new(10).set_sort("department", direction);
		let sorted = definition.filter_and_sort(&records, &state);

		let position = |e: &TestEmployee| records.iter().position(|r| std::ptr::eq(r, e));
		for pair in sorted.windows(2) {
			if pair[0].department == pair[1].department {
				prop_assert!(position(pair[0]) < position(pair[1]));
			}
		}
	}

	/// Test: Page reset invariant
	///
	/// Category: Property
	/// Verifies that search, filter and page size changes land on page 1.
	#[rstest]
	fn prop_page_reset(page in 1usize..1000, size in 1usize..100, term in "[a-z]{0,5}") {
		let state = TableState::new(10).set_current_page(page);
		prop_assert_eq!(state.set_search_term(term.as_str()).current_page(), 1);
		prop_assert_eq!(state.set_filter("status", Some("active".into())).current_page(), 1);
		prop_assert_eq!(state.set_filter("status", None).current_page(), 1);
		prop_assert_eq!(state.set_page_size(size).current_page(), 1);
		prop_assert_eq!(state.clear_filters().current_page(), 1);
	}
}
