//! Pagination functionality for tables
//!
//! [`Paginator`] does the page arithmetic, [`page_window`] builds the
//! compressed page-number list shown by pagination controls, and
//! [`PaginationControls`] decides whether controls are shown at all.

use serde::de::{self, Unexpected};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::ops::Range;

/// Default number of pages shown on each side of the current page
pub const DEFAULT_WINDOW_SIBLINGS: usize = 2;

/// Page arithmetic over a collection of `total_items`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Paginator {
	total_items: usize,
	page_size: usize,
}

impl Paginator {
	/// Creates a paginator
	///
	/// A `page_size` of zero is treated as one.
	pub fn new(total_items: usize, page_size: usize) -> Self {
		Self {
			total_items,
			page_size: page_size.max(1),
		}
	}

	/// Number of items being paginated
	pub fn total_items(&self) -> usize {
		self.total_items
	}

	/// Items per page
	pub fn page_size(&self) -> usize {
		self.page_size
	}

	/// Total number of pages, never less than one
	///
	/// An empty collection is still "page 1 of 1".
	pub fn total_pages(&self) -> usize {
		self.total_items.div_ceil(self.page_size).max(1)
	}

	/// Index range of `page` (1-indexed) in the collection
	///
	/// No bounds enforcement: a page past the end yields an empty range.
	pub fn bounds(&self, page: usize) -> Range<usize> {
		let start = page
			.saturating_sub(1)
			.saturating_mul(self.page_size)
			.min(self.total_items);
		let end = start.saturating_add(self.page_size).min(self.total_items);
		start..end
	}

	/// Clamps `page` into `1..=total_pages`
	pub fn clamp_page(&self, page: usize) -> usize {
		page.clamp(1, self.total_pages())
	}

	/// Builds the page for `requested`, clamped into range
	pub fn page<T: Clone>(&self, items: &[T], requested: usize) -> Page<T> {
		let number = self.clamp_page(requested);
		if number != requested {
			tracing::warn!(
				requested,
				number,
				total_pages = self.total_pages(),
				"requested page out of range, clamped"
			);
		}
		let range = self.bounds(number);
		Page {
			items: items.get(range).map(<[T]>::to_vec).unwrap_or_default(),
			number,
			requested,
			total_pages: self.total_pages(),
			total_items: self.total_items,
			page_size: self.page_size,
		}
	}
}

/// A single page of results
#[derive(Debug, Clone, PartialEq)]
pub struct Page<T> {
	/// Items on this page
	pub items: Vec<T>,
	/// Effective page number (1-indexed)
	pub number: usize,
	/// Page number that was asked for
	pub requested: usize,
	/// Total number of pages
	pub total_pages: usize,
	/// Total number of items across all pages
	pub total_items: usize,
	/// Items per page
	pub page_size: usize,
}

impl<T> Page<T> {
	/// Returns the 1-based index of the first item on this page, 0 if empty
	pub fn start_index(&self) -> usize {
		if self.items.is_empty() {
			0
		} else {
			(self.number - 1) * self.page_size + 1
		}
	}

	/// Returns the 1-based index of the last item on this page, 0 if empty
	pub fn end_index(&self) -> usize {
		if self.items.is_empty() {
			0
		} else {
			self.start_index() + self.items.len() - 1
		}
	}

	/// Returns true if there is a next page
	pub fn has_next(&self) -> bool {
		self.number < self.total_pages
	}

	/// Returns true if there is a previous page
	pub fn has_previous(&self) -> bool {
		self.number > 1
	}

	/// Whether the requested page had to be clamped
	pub fn was_clamped(&self) -> bool {
		self.number != self.requested
	}

	/// Returns the length of items in this page
	pub fn len(&self) -> usize {
		self.items.len()
	}

	/// Returns true if this page contains no items
	pub fn is_empty(&self) -> bool {
		self.items.is_empty()
	}
}

/// One entry of the visible page-number window
///
/// Serializes as the page number, or as the string `"..."` for a gap.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageItem {
	/// A clickable page number
	Page(usize),
	/// A collapsed run of page numbers
	Ellipsis,
}

impl fmt::Display for PageItem {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Self::Page(n) => write!(f, "{n}"),
			Self::Ellipsis => f.write_str(ELLIPSIS),
		}
	}
}

const ELLIPSIS: &str = "...";

impl Serialize for PageItem {
	fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
		match self {
			Self::Page(n) => serializer.serialize_u64(*n as u64),
			Self::Ellipsis => serializer.serialize_str(ELLIPSIS),
		}
	}
}

impl<'de> Deserialize<'de> for PageItem {
	fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
		#[derive(Deserialize)]
		#[serde(untagged)]
		enum Raw {
			Page(usize),
			Marker(String),
		}

		match Raw::deserialize(deserializer)? {
			Raw::Page(n) => Ok(Self::Page(n)),
			Raw::Marker(s) if s == ELLIPSIS => Ok(Self::Ellipsis),
			Raw::Marker(s) => Err(de::Error::invalid_value(
				Unexpected::Str(&s),
				&"a page number or \"...\"",
			)),
		}
	}
}

/// Compressed list of page numbers around `current`
///
/// Always contains page 1 and `total_pages`, plus up to `siblings` pages on
/// either side of `current`. Every gap collapses into one
/// [`PageItem::Ellipsis`].
///
/// ```rust
/// use hrms_tables::pagination::{page_window, PageItem::{Ellipsis, Page}};
///
/// assert_eq!(
///     page_window(5, 10, 2),
///     vec![Page(1), Ellipsis, Page(3), Page(4), Page(5), Page(6), Page(7), Ellipsis, Page(10)],
/// );
/// ```
pub fn page_window(current: usize, total_pages: usize, siblings: usize) -> Vec<PageItem> {
	let total_pages = total_pages.max(1);
	let current = current.clamp(1, total_pages);
	let low = current.saturating_sub(siblings).max(1);
	let high = current.saturating_add(siblings).min(total_pages);

	let mut pages = Vec::with_capacity(high - low + 3);
	if low > 1 {
		pages.push(1);
	}
	pages.extend(low..=high);
	if high < total_pages {
		pages.push(total_pages);
	}

	let mut window = Vec::with_capacity(pages.len() + 2);
	let mut previous: Option<usize> = None;
	for page in pages {
		if previous.is_some_and(|p| page > p + 1) {
			window.push(PageItem::Ellipsis);
		}
		window.push(PageItem::Page(page));
		previous = Some(page);
	}
	window
}

/// What the pagination area of a table shows
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum PaginationControls {
	/// Everything fits on one page; only a message is shown
	Hidden {
		/// "Showing all N items"
		message: String,
	},
	/// Page controls are shown
	Visible {
		/// Visible page-number window
		window: Vec<PageItem>,
		/// "Showing X to Y of N items"
		summary: String,
		/// Whether a previous-page control is enabled
		has_previous: bool,
		/// Whether a next-page control is enabled
		has_next: bool,
	},
}

impl PaginationControls {
	/// Controls for `page`
	pub fn for_page<T>(page: &Page<T>, siblings: usize) -> Self {
		if page.total_pages <= 1 {
			Self::Hidden {
				message: format!("Showing all {} items", page.total_items),
			}
		} else {
			Self::Visible {
				window: page_window(page.number, page.total_pages, siblings),
				summary: format!(
					"Showing {} to {} of {} items",
					page.start_index(),
					page.end_index(),
					page.total_items
				),
				has_previous: page.has_previous(),
				has_next: page.has_next(),
			}
		}
	}

	/// Whether page controls are rendered
	pub fn is_visible(&self) -> bool {
		matches!(self, Self::Visible { .. })
	}
}
