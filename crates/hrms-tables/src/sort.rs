//! Sorting functionality for tables

use crate::field::Field;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

/// Sort direction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
	/// Ascending order
	#[serde(alias = "ascending")]
	Asc,
	/// Descending order
	#[serde(alias = "descending")]
	Desc,
}

impl SortDirection {
	/// Returns the opposite direction
	pub fn toggle(&self) -> Self {
		match self {
			Self::Asc => Self::Desc,
			Self::Desc => Self::Asc,
		}
	}
}

/// Sort key and direction
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SortSpec {
	/// Field to sort on
	pub key: String,
	/// Direction
	pub direction: SortDirection,
}

impl SortSpec {
	/// Creates a sort specification
	pub fn new(key: impl Into<String>, direction: SortDirection) -> Self {
		Self {
			key: key.into(),
			direction,
		}
	}

	/// Parses a query-style sort key
	///
	/// `"name"` sorts ascending and `"-name"` descending. Returns `None` for
	/// an empty key.
	pub fn parse(s: &str) -> Option<Self> {
		let s = s.trim();
		let (direction, key) = match s.strip_prefix('-') {
			Some(key) => (SortDirection::Desc, key),
			None => (SortDirection::Asc, s),
		};
		if key.is_empty() {
			None
		} else {
			Some(Self::new(key, direction))
		}
	}
}

/// Stable in-place sort of `rows` by `spec`
///
/// Null values go last in both directions. Without a spec, or when the key
/// names no sortable field, the input order is left untouched.
pub fn sort_rows<R>(rows: &mut [&R], spec: Option<&SortSpec>, fields: &[Field<R>]) {
	let Some(spec) = spec else {
		return;
	};
	let Some(field) = fields
		.iter()
		.find(|f| f.name() == spec.key && f.is_sortable())
	else {
		tracing::debug!(key = %spec.key, "sort key matches no sortable field, keeping input order");
		return;
	};

	// Extract once so accessors run O(n) times rather than O(n log n).
	let mut keyed: Vec<_> = rows.iter().map(|r| (field.value(r), *r)).collect();
	keyed.sort_by(|(a, _), (b, _)| match (a.is_null(), b.is_null()) {
		(true, true) => Ordering::Equal,
		(true, false) => Ordering::Greater,
		(false, true) => Ordering::Less,
		(false, false) => match spec.direction {
			SortDirection::Asc => a.natural_cmp(b),
			SortDirection::Desc => b.natural_cmp(a),
		},
	});

	for (slot, (_, row)) in rows.iter_mut().zip(keyed) {
		*slot = row;
	}
}
