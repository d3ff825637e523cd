//! Case-insensitive substring search over searchable fields

use crate::field::Field;

/// A prepared search term
///
/// The raw term is trimmed and lowercased once, then matched against the
/// lowercased rendering of every searchable field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchTerm {
	needle: String,
}

impl SearchTerm {
	/// Prepares `raw` for matching
	pub fn new(raw: &str) -> Self {
		Self {
			needle: fold_case(raw.trim()),
		}
	}

	/// An empty term matches every record
	pub fn is_empty(&self) -> bool {
		self.needle.is_empty()
	}

	/// Whether `text` contains the term, ignoring case
	pub fn matches_text(&self, text: &str) -> bool {
		self.is_empty() || fold_case(text).contains(&self.needle)
	}

	/// Whether any searchable field of `record` contains the term
	pub fn matches<R>(&self, record: &R, fields: &[Field<R>]) -> bool {
		if self.is_empty() {
			return true;
		}
		fields
			.iter()
			.filter(|f| f.is_searchable())
			.any(|f| self.matches_text(&f.value(record).display()))
	}
}

/// Lowercases each character on its own, ignoring its neighbours
///
/// A term then folds the same way as every longer term it prefixes.
fn fold_case(text: &str) -> String {
	text.chars().flat_map(char::to_lowercase).collect()
}
