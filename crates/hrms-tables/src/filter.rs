//! Filter values, filter metadata and filter evaluation
//!
//! Absence from [`Filters`] is the only "no constraint" representation.
//! Empty strings and empty selections are normalized away when set, so
//! there is no sentinel value such as `"all"` to special-case.

use crate::field::Field;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::sync::Arc;

/// Active value of one filter
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FilterValue {
	/// Field must equal this value
	Single(String),
	/// Field must equal one of these values (multi-select)
	Multi(Vec<String>),
}

impl FilterValue {
	/// Drops empty input, returning `None` when nothing constrains
	pub fn normalize(self) -> Option<Self> {
		match self {
			Self::Single(value) if value.is_empty() => None,
			Self::Single(value) => Some(Self::Single(value)),
			Self::Multi(values) => {
				let values: Vec<String> = values.into_iter().filter(|v| !v.is_empty()).collect();
				if values.is_empty() {
					None
				} else {
					Some(Self::Multi(values))
				}
			}
		}
	}

	/// Whether a record field rendered as `candidate` satisfies this filter
	pub fn matches(&self, candidate: &str) -> bool {
		match self {
			Self::Single(value) => value == candidate,
			Self::Multi(values) => values.iter().any(|v| v == candidate),
		}
	}
}

impl From<&str> for FilterValue {
	fn from(value: &str) -> Self {
		Self::Single(value.to_string())
	}
}

impl From<String> for FilterValue {
	fn from(value: String) -> Self {
		Self::Single(value)
	}
}

impl From<Vec<String>> for FilterValue {
	fn from(values: Vec<String>) -> Self {
		Self::Multi(values)
	}
}

impl From<Vec<&str>> for FilterValue {
	fn from(values: Vec<&str>) -> Self {
		Self::Multi(values.into_iter().map(str::to_string).collect())
	}
}

/// Active filters keyed by field name
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Filters(BTreeMap<String, FilterValue>);

impl Filters {
	/// Creates an empty filter set
	pub fn new() -> Self {
		Self::default()
	}

	/// Sets or removes the filter on `key`
	///
	/// `None`, an empty string or an empty selection remove the filter.
	pub fn set(&mut self, key: impl Into<String>, value: Option<FilterValue>) {
		let key = key.into();
		match value.and_then(FilterValue::normalize) {
			Some(value) => {
				self.0.insert(key, value);
			}
			None => {
				self.0.remove(&key);
			}
		}
	}

	/// Builder form of [`Filters::set`]
	pub fn with(mut self, key: impl Into<String>, value: impl Into<FilterValue>) -> Self {
		self.set(key, Some(value.into()));
		self
	}

	/// Returns the active value for `key`
	pub fn get(&self, key: &str) -> Option<&FilterValue> {
		self.0.get(key)
	}

	/// Number of active filters
	pub fn len(&self) -> usize {
		self.0.len()
	}

	/// Returns `true` when nothing is filtered
	pub fn is_empty(&self) -> bool {
		self.0.is_empty()
	}

	/// Iterates active filters in key order
	pub fn iter(&self) -> impl Iterator<Item = (&str, &FilterValue)> {
		self.0.iter().map(|(k, v)| (k.as_str(), v))
	}
}

impl<K: Into<String>, V: Into<FilterValue>> FromIterator<(K, V)> for Filters {
	fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
		let mut filters = Self::new();
		for (key, value) in iter {
			filters.set(key, Some(value.into()));
		}
		filters
	}
}

/// One legal value of a [`FilterGroup`]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterOption {
	/// Stable option identifier
	pub key: String,
	/// Display text
	pub label: String,
	/// Value compared against the record field
	pub value: String,
}

impl FilterOption {
	/// Creates an option whose key equals its value
	pub fn new(value: impl Into<String>, label: impl Into<String>) -> Self {
		let value = value.into();
		Self {
			key: value.clone(),
			label: label.into(),
			value,
		}
	}
}

/// Describes one filterable dimension and its legal values
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterGroup {
	/// Field key this group filters on
	pub key: String,
	/// Display text
	pub label: String,
	/// Legal values
	pub options: Vec<FilterOption>,
}

impl FilterGroup {
	/// Creates a group with no options
	pub fn new(key: impl Into<String>, label: impl Into<String>) -> Self {
		Self {
			key: key.into(),
			label: label.into(),
			options: Vec::new(),
		}
	}

	/// Adds an option
	pub fn option(mut self, value: impl Into<String>, label: impl Into<String>) -> Self {
		self.options.push(FilterOption::new(value, label));
		self
	}

	/// Whether `value` is one of this group's options
	pub fn contains(&self, value: &str) -> bool {
		self.options.iter().any(|o| o.value == value)
	}
}

/// Predicate replacing per-field filter matching
pub type FilterPredicate<R> = Arc<dyn Fn(&R, &Filters) -> bool + Send + Sync>;

/// How active filters are applied to a record
pub enum FilterMode<R> {
	/// Each filter constrains the field of the same name
	Default,
	/// A caller predicate decides, e.g. when a filter spans several fields
	Custom(FilterPredicate<R>),
}

impl<R> FilterMode<R> {
	/// Wraps a predicate as [`FilterMode::Custom`]
	pub fn custom<F>(predicate: F) -> Self
	where
		F: Fn(&R, &Filters) -> bool + Send + Sync + 'static,
	{
		Self::Custom(Arc::new(predicate))
	}

	/// Whether `record` passes `filters`
	///
	/// In default mode a filter on a key no field carries is ignored.
	pub fn matches(&self, record: &R, filters: &Filters, fields: &[Field<R>]) -> bool {
		match self {
			Self::Custom(predicate) => predicate(record, filters),
			Self::Default => filters.iter().all(|(key, value)| {
				match fields.iter().find(|f| f.name() == key) {
					Some(field) => value.matches(&field.value(record).display()),
					None => true,
				}
			}),
		}
	}
}

impl<R> Default for FilterMode<R> {
	fn default() -> Self {
		Self::Default
	}
}

impl<R> Clone for FilterMode<R> {
	fn clone(&self) -> Self {
		match self {
			Self::Default => Self::Default,
			Self::Custom(predicate) => Self::Custom(Arc::clone(predicate)),
		}
	}
}

impl<R> fmt::Debug for FilterMode<R> {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Self::Default => f.write_str("Default"),
			Self::Custom(_) => f.write_str("Custom(..)"),
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::value::FieldValue;
	use rstest::rstest;

	#[derive(Debug)]
	struct Row {
		department: &'static str,
		status: &'static str,
	}

	fn fields() -> Vec<Field<Row>> {
		vec![
			Field::new("department", "Department", |r: &Row| r.department.into()),
			Field::new("status", "Status", |r: &Row| r.status.into()),
		]
	}

	#[rstest]
	#[case(FilterValue::from(""), None)]
	#[case(FilterValue::from("hr"), Some(FilterValue::from("hr")))]
	#[case(FilterValue::Multi(vec![]), None)]
	#[case(FilterValue::from(vec!["", "a"]), Some(FilterValue::from(vec!["a"])))]
	#[case(FilterValue::from(vec!["", ""]), None)]
	fn test_normalize(#[case] input: FilterValue, #[case] expected: Option<FilterValue>) {
		assert_eq!(input.normalize(), expected);
	}

	#[rstest]
	fn test_set_none_removes_filter() {
		let mut filters = Filters::new().with("status", "active");
		assert_eq!(filters.len(), 1);
		filters.set("status", None);
		assert!(filters.is_empty());
	}

	#[rstest]
	fn test_set_empty_string_removes_filter() {
		let mut filters = Filters::new().with("status", "active");
		filters.set("status", Some(FilterValue::from("")));
		assert!(filters.get("status").is_none());
	}

	#[rstest]
	fn test_default_mode_scalar_and_multi() {
		let fields = fields();
		let mode = FilterMode::Default;
		let row = Row {
			department: "Finance",
			status: "active",
		};

		let scalar = Filters::new().with("department", "Finance");
		assert!(mode.matches(&row, &scalar, &fields));

		let multi = Filters::new().with("status", vec!["inactive", "active"]);
		assert!(mode.matches(&row, &multi, &fields));

		let both = scalar.with("status", vec!["inactive"]);
		assert!(!mode.matches(&row, &both, &fields));
	}

	#[rstest]
	fn test_unknown_filter_key_is_ignored() {
		let fields = fields();
		let row = Row {
			department: "HR",
			status: "active",
		};
		let filters = Filters::new().with("salary_band", "B");
		assert!(FilterMode::Default.matches(&row, &filters, &fields));
	}

	#[rstest]
	fn test_custom_mode_replaces_field_matching() {
		let fields = fields();
		let mode = FilterMode::custom(|row: &Row, filters: &Filters| {
			filters
				.get("department")
				.is_none_or(|v| v.matches(&row.department.to_lowercase()))
		});
		let row = Row {
			department: "Finance",
			status: "active",
		};
		let filters = Filters::new().with("department", "finance");

		assert!(mode.matches(&row, &filters, &fields));
		assert!(!FilterMode::Default.matches(&row, &filters, &fields));
	}

	#[rstest]
	fn test_filter_group_contains() {
		let group = FilterGroup::new("status", "Status")
			.option("active", "Active")
			.option("inactive", "Inactive");
		assert!(group.contains("active"));
		assert!(!group.contains("all"));
		assert_eq!(group.options[0].key, "active");
	}

	#[rstest]
	fn test_numeric_field_matches_rendered_value() {
		let fields = vec![Field::new("level", "Level", |n: &i64| FieldValue::Int(*n))];
		let filters = Filters::new().with("level", "3");
		assert!(FilterMode::Default.matches(&3_i64, &filters, &fields));
		assert!(!FilterMode::Default.matches(&4_i64, &filters, &fields));
	}
}
