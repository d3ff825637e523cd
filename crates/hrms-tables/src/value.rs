//! Dynamic cell values
//!
//! Field accessors turn a record into a [`FieldValue`], which is what the
//! filter, search, sort and export stages work on.

use std::cmp::Ordering;
use std::fmt;

/// A single cell value extracted from a record
#[derive(Debug, Clone, PartialEq, Default)]
pub enum FieldValue {
	/// Missing value (`null` / `undefined`)
	#[default]
	Null,
	/// Boolean value
	Bool(bool),
	/// Integer value
	Int(i64),
	/// Floating point value
	Float(f64),
	/// Text value
	Text(String),
}

impl FieldValue {
	/// Returns `true` for [`FieldValue::Null`]
	pub fn is_null(&self) -> bool {
		matches!(self, Self::Null)
	}

	/// Renders the value as the string used for matching and export
	///
	/// `Null` renders as the empty string.
	pub fn display(&self) -> String {
		match self {
			Self::Null => String::new(),
			Self::Bool(b) => b.to_string(),
			Self::Int(i) => i.to_string(),
			Self::Float(f) => f.to_string(),
			Self::Text(s) => s.clone(),
		}
	}

	/// Rank used to order values of different kinds against each other
	fn kind_rank(&self) -> u8 {
		match self {
			Self::Bool(_) => 0,
			Self::Int(_) | Self::Float(_) => 1,
			Self::Text(_) => 2,
			Self::Null => 3,
		}
	}

	/// Natural ordering of two values
	///
	/// Numbers compare numerically (integers and floats mix), text compares
	/// lexicographically and `false < true`. Values of different kinds order
	/// by kind; `Null` orders after everything.
	pub fn natural_cmp(&self, other: &Self) -> Ordering {
		match (self, other) {
			(Self::Int(a), Self::Int(b)) => a.cmp(b),
			(Self::Int(a), Self::Float(b)) => (*a as f64).total_cmp(b),
			(Self::Float(a), Self::Int(b)) => a.total_cmp(&(*b as f64)),
			(Self::Float(a), Self::Float(b)) => a.total_cmp(b),
			(Self::Text(a), Self::Text(b)) => a.cmp(b),
			(Self::Bool(a), Self::Bool(b)) => a.cmp(b),
			_ => self.kind_rank().cmp(&other.kind_rank()),
		}
	}
}

impl fmt::Display for FieldValue {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(&self.display())
	}
}

impl From<bool> for FieldValue {
	fn from(value: bool) -> Self {
		Self::Bool(value)
	}
}

macro_rules! impl_from_int {
	($($ty:ty),*) => {
		$(
			impl From<$ty> for FieldValue {
				fn from(value: $ty) -> Self {
					Self::Int(i64::from(value))
				}
			}
		)*
	};
}

impl_from_int!(i8, i16, i32, i64, u8, u16, u32);

impl From<f32> for FieldValue {
	fn from(value: f32) -> Self {
		Self::Float(f64::from(value))
	}
}

impl From<f64> for FieldValue {
	fn from(value: f64) -> Self {
		Self::Float(value)
	}
}

impl From<&str> for FieldValue {
	fn from(value: &str) -> Self {
		Self::Text(value.to_string())
	}
}

impl From<String> for FieldValue {
	fn from(value: String) -> Self {
		Self::Text(value)
	}
}

impl From<&String> for FieldValue {
	fn from(value: &String) -> Self {
		Self::Text(value.clone())
	}
}

impl<T: Into<FieldValue>> From<Option<T>> for FieldValue {
	fn from(value: Option<T>) -> Self {
		value.map_or(Self::Null, Into::into)
	}
}

impl From<&serde_json::Value> for FieldValue {
	fn from(value: &serde_json::Value) -> Self {
		use serde_json::Value;

		match value {
			Value::Null => Self::Null,
			Value::Bool(b) => Self::Bool(*b),
			Value::Number(n) => match n.as_i64() {
				Some(i) => Self::Int(i),
				None => n.as_f64().map_or(Self::Null, Self::Float),
			},
			Value::String(s) => Self::Text(s.clone()),
			// Nested structures are matched on their JSON text.
			other => Self::Text(other.to_string()),
		}
	}
}

impl From<FieldValue> for serde_json::Value {
	fn from(value: FieldValue) -> Self {
		match value {
			FieldValue::Null => Self::Null,
			FieldValue::Bool(b) => Self::Bool(b),
			FieldValue::Int(i) => Self::from(i),
			FieldValue::Float(f) => {
				serde_json::Number::from_f64(f).map_or(Self::Null, Self::Number)
			}
			FieldValue::Text(s) => Self::String(s),
		}
	}
}
