use std::cmp::Ordering;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::record::Record;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
	#[default]
	Ascending,
	Descending,
}

impl SortDirection {
	#[must_use]
	pub fn flipped(self) -> Self {
		match self {
			Self::Ascending => Self::Descending,
			Self::Descending => Self::Ascending,
		}
	}

	/// Orient an ascending comparison result.
	#[must_use]
	pub fn apply(self, ordering: Ordering) -> Ordering {
		match self {
			Self::Ascending => ordering,
			Self::Descending => ordering.reverse(),
		}
	}
}

impl fmt::Display for SortDirection {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Self::Ascending => f.write_str("ascending"),
			Self::Descending => f.write_str("descending"),
		}
	}
}

/// Single-key ordering applied after filtering.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SortSpec {
	key: Option<String>,
	direction: SortDirection,
}

impl SortSpec {
	#[must_use]
	pub fn new(key: impl Into<String>, direction: SortDirection) -> Self {
		Self {
			key: Some(key.into()),
			direction,
		}
	}

	#[must_use]
	pub fn key(&self) -> Option<&str> {
		self.key.as_deref()
	}

	#[must_use]
	pub fn direction(&self) -> SortDirection {
		self.direction
	}

	/// Request ordering by `key`. Repeating the active key flips the direction,
	/// a different key starts ascending.
	pub fn request(&mut self, key: &str) {
		if self.key.as_deref() == Some(key) {
			self.direction = self.direction.flipped();
		} else {
			self.key = Some(key.to_string());
			self.direction = SortDirection::Ascending;
		}
	}

	/// Compare two items by the active key.
	///
	/// Without a key every pair compares equal. Items missing the key sort
	/// after items that carry it before the direction is applied.
	pub fn compare<T: Record>(&self, a: &T, b: &T) -> Ordering {
		let Some(key) = self.key.as_deref() else {
			return Ordering::Equal;
		};

		let ordering = match (a.field(key), b.field(key)) {
			(Some(left), Some(right)) => left.native_cmp(&right),
			(Some(_), None) => Ordering::Less,
			(None, Some(_)) => Ordering::Greater,
			(None, None) => Ordering::Equal,
		};
		self.direction.apply(ordering)
	}

	/// Stable-sort dataset indices by the active key.
	pub fn sort_indices<T: Record>(&self, items: &[T], indices: &mut [usize]) {
		if self.key.is_none() {
			return;
		}
		indices.sort_by(|&a, &b| self.compare(&items[a], &items[b]));
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::record::FieldValue;

	struct Row {
		id: String,
		name: &'static str,
		ideas: Option<f64>,
	}

	impl Record for Row {
		fn id(&self) -> &str {
			&self.id
		}

		fn field(&self, name: &str) -> Option<FieldValue<'_>> {
			match name {
				"name" => Some(FieldValue::Text(self.name)),
				"ideas" => self.ideas.map(FieldValue::Number),
				_ => None,
			}
		}
	}

	fn rows(values: &[(&'static str, Option<f64>)]) -> Vec<Row> {
		values
			.iter()
			.enumerate()
			.map(|(index, (name, ideas))| Row {
				id: index.to_string(),
				name: *name,
				ideas: *ideas,
			})
			.collect()
	}

	fn sorted(spec: &SortSpec, items: &[Row]) -> Vec<usize> {
		let mut indices: Vec<usize> = (0..items.len()).collect();
		spec.sort_indices(items, &mut indices);
		indices
	}

	#[test]
	fn request_toggles_direction_for_repeated_key() {
		let mut spec = SortSpec::default();
		spec.request("ideas");
		assert_eq!(spec.key(), Some("ideas"));
		assert_eq!(spec.direction(), SortDirection::Ascending);

		spec.request("ideas");
		assert_eq!(spec.direction(), SortDirection::Descending);

		spec.request("name");
		assert_eq!(spec.key(), Some("name"));
		assert_eq!(spec.direction(), SortDirection::Ascending);
	}

	#[test]
	fn no_key_preserves_natural_order() {
		let items = rows(&[("b", Some(2.0)), ("a", Some(1.0))]);
		assert_eq!(sorted(&SortSpec::default(), &items), vec![0, 1]);
	}

	#[test]
	fn numeric_keys_sort_numerically_in_both_directions() {
		let items = rows(&[("a", Some(10.0)), ("b", Some(9.0)), ("c", Some(100.0))]);
		let mut spec = SortSpec::new("ideas", SortDirection::Ascending);
		assert_eq!(sorted(&spec, &items), vec![1, 0, 2]);
		spec.request("ideas");
		assert_eq!(sorted(&spec, &items), vec![2, 0, 1]);
	}

	#[test]
	fn text_keys_sort_case_sensitively() {
		let items = rows(&[("beta", None), ("Alpha", None), ("alpha", None)]);
		let spec = SortSpec::new("name", SortDirection::Ascending);
		assert_eq!(sorted(&spec, &items), vec![1, 2, 0]);
	}

	#[test]
	fn ties_keep_input_order_in_both_directions() {
		let items = rows(&[
			("a", Some(3.0)),
			("b", Some(1.0)),
			("c", Some(3.0)),
			("d", Some(1.0)),
		]);
		let spec = SortSpec::new("ideas", SortDirection::Ascending);
		assert_eq!(sorted(&spec, &items), vec![1, 3, 0, 2]);
		let spec = SortSpec::new("ideas", SortDirection::Descending);
		assert_eq!(sorted(&spec, &items), vec![0, 2, 1, 3]);
	}

	#[test]
	fn missing_values_sort_last_when_ascending() {
		let items = rows(&[("a", None), ("b", Some(5.0))]);
		let spec = SortSpec::new("ideas", SortDirection::Ascending);
		assert_eq!(sorted(&spec, &items), vec![1, 0]);
	}

	#[test]
	fn unknown_key_yields_natural_order() {
		let items = rows(&[("b", Some(2.0)), ("a", Some(1.0))]);
		let spec = SortSpec::new("nonexistent", SortDirection::Descending);
		assert_eq!(sorted(&spec, &items), vec![0, 1]);
	}
}
