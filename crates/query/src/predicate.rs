//! Combine search text, facet selections and a range bucket into a single
//! inclusion test.

use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::config::QueryConfig;
use crate::error::QueryError;
use crate::record::Record;
use crate::state::QueryState;

/// Named numeric interval applied to the configured range field.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RangeBucket {
	/// No restriction.
	#[default]
	All,
	/// `value >= 80`
	High,
	/// `50 <= value < 80`
	Medium,
	/// `value < 50`
	Low,
}

impl RangeBucket {
	pub const HIGH_THRESHOLD: f64 = 80.0;
	pub const MEDIUM_THRESHOLD: f64 = 50.0;

	/// Whether `value` falls inside this bucket. [`RangeBucket::All`] accepts
	/// every value; the named buckets reject `NaN`.
	#[must_use]
	pub fn contains(self, value: f64) -> bool {
		match self {
			Self::All => true,
			Self::High => value >= Self::HIGH_THRESHOLD,
			Self::Medium => (Self::MEDIUM_THRESHOLD..Self::HIGH_THRESHOLD).contains(&value),
			Self::Low => value < Self::MEDIUM_THRESHOLD,
		}
	}

	/// Classify a score into its named bucket.
	#[must_use]
	pub fn classify(value: f64) -> Self {
		if value >= Self::HIGH_THRESHOLD {
			Self::High
		} else if value >= Self::MEDIUM_THRESHOLD {
			Self::Medium
		} else {
			Self::Low
		}
	}

	#[must_use]
	pub fn is_restrictive(self) -> bool {
		self != Self::All
	}

	#[must_use]
	pub fn as_str(self) -> &'static str {
		match self {
			Self::All => "all",
			Self::High => "high",
			Self::Medium => "medium",
			Self::Low => "low",
		}
	}
}

impl fmt::Display for RangeBucket {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.as_str())
	}
}

impl FromStr for RangeBucket {
	type Err = QueryError;

	fn from_str(value: &str) -> Result<Self, Self::Err> {
		match value.trim().to_ascii_lowercase().as_str() {
			"" | "all" | "none" => Ok(Self::All),
			"high" => Ok(Self::High),
			"medium" => Ok(Self::Medium),
			"low" => Ok(Self::Low),
			_ => Err(QueryError::UnknownBucket(value.to_string())),
		}
	}
}

/// Inclusion test derived from the current configuration and query state.
#[derive(Debug)]
pub struct Predicate<'q> {
	needle: String,
	searchable_fields: &'q [String],
	facet_field: Option<&'q str>,
	facets: &'q BTreeSet<String>,
	range_field: Option<&'q str>,
	bucket: RangeBucket,
}

impl<'q> Predicate<'q> {
	/// Capture the settled search text, active facets and range bucket.
	#[must_use]
	pub fn build(config: &'q QueryConfig, state: &'q QueryState) -> Self {
		Self {
			needle: state.debounced_search_text().to_lowercase(),
			searchable_fields: &config.searchable_fields,
			facet_field: config.facet_field.as_deref(),
			facets: state.active_facets(),
			range_field: config.range_field.as_deref(),
			bucket: state.range_filter(),
		}
	}

	/// Logical AND of the text, facet and range tests.
	pub fn matches<T: Record>(&self, item: &T) -> bool {
		self.matches_text(item) && self.matches_facets(item) && self.matches_range(item)
	}

	/// Indices of matching items, in dataset order.
	pub fn filter<T: Record>(&self, items: &[T]) -> Vec<usize> {
		items
			.iter()
			.enumerate()
			.filter(|(_, item)| self.matches(*item))
			.map(|(index, _)| index)
			.collect()
	}

	fn matches_text<T: Record>(&self, item: &T) -> bool {
		if self.needle.is_empty() {
			return true;
		}

		self.searchable_fields
			.iter()
			.filter_map(|name| item.field(name))
			.any(|value| {
				if let Some(text) = value.as_text() {
					text.to_lowercase().contains(&self.needle)
				} else if let Some(tags) = value.as_tags() {
					tags.iter().any(|tag| tag.to_lowercase().contains(&self.needle))
				} else {
					false
				}
			})
	}

	fn matches_facets<T: Record>(&self, item: &T) -> bool {
		if self.facets.is_empty() {
			return true;
		}

		// Active facets with nothing to match them against select no items.
		let Some(value) = self.facet_field.and_then(|name| item.field(name)) else {
			return false;
		};
		self.facets.iter().all(|facet| value.has_facet(facet))
	}

	fn matches_range<T: Record>(&self, item: &T) -> bool {
		if !self.bucket.is_restrictive() {
			return true;
		}
		let Some(field) = self.range_field else {
			return true;
		};

		item.field(field)
			.and_then(|value| value.as_number())
			.is_some_and(|value| self.bucket.contains(value))
	}
}
