//! Table state snapshots
//!
//! [`TableState`] is immutable from the outside: every mutator borrows the
//! current snapshot and returns the next one. Changing the search term, a
//! filter or the page size always lands on page 1.

use crate::filter::{FilterValue, Filters};
use crate::sort::{SortDirection, SortSpec};

/// Page size used when none is configured
pub const DEFAULT_PAGE_SIZE: usize = 10;

/// Values [`TableState::reset`] returns to
#[derive(Debug, Clone, PartialEq, Eq)]
struct Defaults {
	page_size: usize,
	filters: Filters,
	sort: Option<SortSpec>,
}

/// Pagination, search, filter and sort settings of one table view
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableState {
	current_page: usize,
	page_size: usize,
	search_term: String,
	filters: Filters,
	sort: Option<SortSpec>,
	defaults: Defaults,
}

impl Default for TableState {
	fn default() -> Self {
		Self::new(DEFAULT_PAGE_SIZE)
	}
}

impl TableState {
	/// Creates a state on page 1 with no search, filters or sort
	pub fn new(page_size: usize) -> Self {
		Self::with_defaults(page_size, Filters::new(), None)
	}

	/// Creates a state with caller-supplied initial filters and sort
	pub fn with_defaults(page_size: usize, filters: Filters, sort: Option<SortSpec>) -> Self {
		let page_size = guard_page_size(page_size);
		Self {
			current_page: 1,
			page_size,
			search_term: String::new(),
			filters: filters.clone(),
			sort: sort.clone(),
			defaults: Defaults {
				page_size,
				filters,
				sort,
			},
		}
	}

	/// Current page (1-indexed)
	pub fn current_page(&self) -> usize {
		self.current_page
	}

	/// Items per page
	pub fn page_size(&self) -> usize {
		self.page_size
	}

	/// Raw search term as typed
	pub fn search_term(&self) -> &str {
		&self.search_term
	}

	/// Active filters
	pub fn filters(&self) -> &Filters {
		&self.filters
	}

	/// Active sort, if any
	pub fn sort(&self) -> Option<&SortSpec> {
		self.sort.as_ref()
	}

	/// Moves to page `page`; zero becomes page 1
	///
	/// Pages past the end are kept as requested and clamped when the view is
	/// derived.
	#[must_use]
	pub fn set_current_page(&self, page: usize) -> Self {
		Self {
			current_page: page.max(1),
			..self.clone()
		}
	}

	/// Changes the page size and returns to page 1
	#[must_use]
	pub fn set_page_size(&self, page_size: usize) -> Self {
		Self {
			page_size: guard_page_size(page_size),
			current_page: 1,
			..self.clone()
		}
	}

	/// Changes the search term and returns to page 1
	#[must_use]
	pub fn set_search_term(&self, term: impl Into<String>) -> Self {
		Self {
			search_term: term.into(),
			current_page: 1,
			..self.clone()
		}
	}

	/// Sets or removes (`None`) one filter and returns to page 1
	#[must_use]
	pub fn set_filter(&self, key: impl Into<String>, value: Option<FilterValue>) -> Self {
		let mut filters = self.filters.clone();
		filters.set(key, value);
		Self {
			filters,
			current_page: 1,
			..self.clone()
		}
	}

	/// Removes every filter and the search term, returning to page 1
	#[must_use]
	pub fn clear_filters(&self) -> Self {
		Self {
			filters: Filters::new(),
			search_term: String::new(),
			current_page: 1,
			..self.clone()
		}
	}

	/// Sorts by `key` in `direction`
	#[must_use]
	pub fn set_sort(&self, key: impl Into<String>, direction: SortDirection) -> Self {
		Self {
			sort: Some(SortSpec::new(key, direction)),
			..self.clone()
		}
	}

	/// Cycles the sort on `key`: ascending, descending, then unsorted
	///
	/// Switching to a different key starts at ascending.
	#[must_use]
	pub fn toggle_sort(&self, key: &str) -> Self {
		let sort = match &self.sort {
			Some(spec) if spec.key == key => match spec.direction {
				SortDirection::Asc => Some(SortSpec::new(key, SortDirection::Desc)),
				SortDirection::Desc => None,
			},
			_ => Some(SortSpec::new(key, SortDirection::Asc)),
		};
		Self {
			sort,
			..self.clone()
		}
	}

	/// Removes the sort, restoring input order
	#[must_use]
	pub fn clear_sort(&self) -> Self {
		Self {
			sort: None,
			..self.clone()
		}
	}

	/// Returns to the state this table was created with
	#[must_use]
	pub fn reset(&self) -> Self {
		Self::with_defaults(
			self.defaults.page_size,
			self.defaults.filters.clone(),
			self.defaults.sort.clone(),
		)
	}
}

fn guard_page_size(page_size: usize) -> usize {
	if page_size == 0 {
		tracing::warn!("page size of zero requested, using 1");
		1
	} else {
		page_size
	}
}
