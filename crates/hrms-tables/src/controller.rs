//! Table controller
//!
//! Ties a [`TableDefinition`], the record collection supplied by the data
//! layer and an observable [`Store`] of [`TableState`] together. UI events
//! call the mutators; subscribers re-render by calling [`TableController::view`].

use crate::config::TableConfig;
use crate::filter::FilterValue;
use crate::sort::SortDirection;
use crate::state::TableState;
use crate::table::{TableDefinition, TableView};
use hrms_store::{Store, SubscriptionId};
use std::sync::Arc;

/// Owns the records and state of one mounted table
#[derive(Debug)]
pub struct TableController<R> {
	definition: TableDefinition<R>,
	records: Vec<R>,
	store: Store<TableState>,
	page_size_options: Vec<usize>,
}

impl<R> TableController<R> {
	/// Creates a controller with a default state
	pub fn new(definition: TableDefinition<R>) -> Self {
		Self::with_state(definition, TableState::default())
	}

	/// Creates a controller starting from `state`
	///
	/// Use this to supply initial filters or sort via
	/// [`TableState::with_defaults`].
	pub fn with_state(definition: TableDefinition<R>, state: TableState) -> Self {
		Self {
			definition,
			records: Vec::new(),
			store: Store::new(state),
			page_size_options: TableConfig::default().page_size_options,
		}
	}

	/// Creates a controller configured by `config`
	pub fn from_config(definition: TableDefinition<R>, config: &TableConfig) -> Self {
		let mut controller = Self::with_state(
			definition.window_siblings(config.window_siblings),
			config.initial_state(),
		);
		controller.page_size_options = config.page_size_options.clone();
		controller
	}

	/// Table definition
	pub fn definition(&self) -> &TableDefinition<R> {
		&self.definition
	}

	/// Page sizes offered to the user
	pub fn page_size_options(&self) -> &[usize] {
		&self.page_size_options
	}

	/// Replaces the record collection
	///
	/// The latest call wins; a fetch that resolves late overwrites newer data.
	pub fn set_records(&mut self, records: Vec<R>) {
		tracing::debug!(count = records.len(), "table records replaced");
		self.records = records;
	}

	/// Current record collection
	pub fn records(&self) -> &[R] {
		&self.records
	}

	/// Current state snapshot
	pub fn state(&self) -> Arc<TableState> {
		self.store.snapshot()
	}

	/// Underlying state store
	pub fn store(&self) -> &Store<TableState> {
		&self.store
	}

	/// Notifies `subscriber` after every state change
	pub fn subscribe<F>(&self, subscriber: F) -> SubscriptionId
	where
		F: Fn(&Arc<TableState>) + Send + Sync + 'static,
	{
		self.store.subscribe(subscriber)
	}

	/// Stops notifying a subscriber
	pub fn unsubscribe(&self, id: SubscriptionId) -> bool {
		self.store.unsubscribe(id)
	}

	/// Moves to `page`
	pub fn set_current_page(&self, page: usize) {
		tracing::debug!(page, "set current page");
		self.store.update(|s| s.set_current_page(page));
	}

	/// Changes the page size
	pub fn set_page_size(&self, page_size: usize) {
		tracing::debug!(page_size, "set page size");
		self.store.update(|s| s.set_page_size(page_size));
	}

	/// Changes the search term
	pub fn set_search_term(&self, term: &str) {
		tracing::debug!(term, "set search term");
		self.store.update(|s| s.set_search_term(term));
	}

	/// Sets or removes one filter
	pub fn set_filter(&self, key: &str, value: Option<FilterValue>) {
		tracing::debug!(key, ?value, "set filter");
		self.store.update(|s| s.set_filter(key, value));
	}

	/// Removes every filter and the search term
	pub fn clear_filters(&self) {
		tracing::debug!("clear filters");
		self.store.update(TableState::clear_filters);
	}

	/// Sorts by `key`
	pub fn set_sort(&self, key: &str, direction: SortDirection) {
		tracing::debug!(key, ?direction, "set sort");
		self.store.update(|s| s.set_sort(key, direction));
	}

	/// Cycles the sort on `key`
	pub fn toggle_sort(&self, key: &str) {
		tracing::debug!(key, "toggle sort");
		self.store.update(|s| s.toggle_sort(key));
	}

	/// Removes the sort
	pub fn clear_sort(&self) {
		tracing::debug!("clear sort");
		self.store.update(TableState::clear_sort);
	}

	/// Returns to the initial state
	pub fn reset(&self) {
		tracing::debug!("reset table state");
		self.store.update(TableState::reset);
	}

	/// Derives the view for the current snapshot
	///
	/// If the stored page is out of range the store is corrected to the
	/// page actually shown.
	pub fn view(&self) -> TableView<'_, R> {
		let state = self.store.snapshot();
		let view = self.definition.derive(&self.records, &state);
		if view.page.was_clamped() {
			let number = view.page.number;
			self.store.update(|s| s.set_current_page(number));
		}
		view
	}
}
