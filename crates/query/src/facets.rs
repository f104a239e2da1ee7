use std::collections::{BTreeMap, BTreeSet};

use serde::Serialize;

use crate::record::{FieldValue, Record};

/// A facet value present in the dataset and the number of items carrying it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FacetCount {
	pub name: String,
	pub count: usize,
}

impl FacetCount {
	#[must_use]
	pub fn new(name: impl Into<String>, count: usize) -> Self {
		Self {
			name: name.into(),
			count,
		}
	}
}

/// Collect the sorted, de-duplicated facet values of `field` across `items`.
///
/// Each item contributes at most once to a value's count even if it repeats
/// the value.
pub fn facet_universe<T: Record>(items: &[T], field: &str) -> Vec<FacetCount> {
	let mut counts: BTreeMap<&str, usize> = BTreeMap::new();

	for item in items {
		let values: BTreeSet<&str> = match item.field(field) {
			Some(FieldValue::Tags(tags)) => tags.iter().map(String::as_str).collect(),
			Some(FieldValue::Text(text)) => BTreeSet::from([text]),
			_ => continue,
		};
		for value in values {
			*counts.entry(value).or_default() += 1;
		}
	}

	counts
		.into_iter()
		.map(|(name, count)| FacetCount::new(name, count))
		.collect()
}

#[cfg(test)]
mod tests {
	use super::*;

	struct Tagged(Vec<String>);

	impl Record for Tagged {
		fn id(&self) -> &str {
			""
		}

		fn field(&self, name: &str) -> Option<FieldValue<'_>> {
			(name == "tags").then_some(FieldValue::Tags(&self.0))
		}
	}

	fn tagged(tags: &[&str]) -> Tagged {
		Tagged(tags.iter().map(|tag| tag.to_string()).collect())
	}

	#[test]
	fn universe_is_sorted_and_counted() {
		let items = vec![
			tagged(&["SaaS", "AI"]),
			tagged(&["SaaS", "FinTech"]),
			tagged(&["AI", "AI"]),
		];
		let universe = facet_universe(&items, "tags");
		assert_eq!(
			universe,
			vec![
				FacetCount::new("AI", 2),
				FacetCount::new("FinTech", 1),
				FacetCount::new("SaaS", 2),
			]
		);
	}

	#[test]
	fn unknown_field_yields_empty_universe() {
		let items = vec![tagged(&["AI"])];
		assert!(facet_universe(&items, "category").is_empty());
	}
}
