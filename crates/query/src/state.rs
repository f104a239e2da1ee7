use std::collections::BTreeSet;

use crate::predicate::RangeBucket;
use crate::sort::SortSpec;

/// Mutable controller state of a [`QueryPipeline`](crate::QueryPipeline).
///
/// Fields are only changed through pipeline transitions so the page reset
/// rules always hold.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueryState {
	pub(crate) search_text: String,
	pub(crate) debounced_search_text: String,
	pub(crate) active_facets: BTreeSet<String>,
	pub(crate) range_filter: RangeBucket,
	pub(crate) sort: SortSpec,
	pub(crate) current_page: usize,
}

impl Default for QueryState {
	fn default() -> Self {
		Self {
			search_text: String::new(),
			debounced_search_text: String::new(),
			active_facets: BTreeSet::new(),
			range_filter: RangeBucket::All,
			sort: SortSpec::default(),
			current_page: 1,
		}
	}
}

impl QueryState {
	/// Most recent raw search input.
	#[must_use]
	pub fn search_text(&self) -> &str {
		&self.search_text
	}

	/// Settled search input used for filtering.
	#[must_use]
	pub fn debounced_search_text(&self) -> &str {
		&self.debounced_search_text
	}

	#[must_use]
	pub fn active_facets(&self) -> &BTreeSet<String> {
		&self.active_facets
	}

	#[must_use]
	pub fn is_facet_active(&self, facet: &str) -> bool {
		self.active_facets.contains(facet)
	}

	#[must_use]
	pub fn range_filter(&self) -> RangeBucket {
		self.range_filter
	}

	#[must_use]
	pub fn sort(&self) -> &SortSpec {
		&self.sort
	}

	#[must_use]
	pub fn current_page(&self) -> usize {
		self.current_page
	}

	/// Whether any search text, facet or range restriction is in effect.
	#[must_use]
	pub fn has_filters(&self) -> bool {
		!self.search_text.is_empty()
			|| !self.debounced_search_text.is_empty()
			|| !self.active_facets.is_empty()
			|| self.range_filter.is_restrictive()
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn defaults_start_unfiltered_on_first_page() {
		let state = QueryState::default();
		assert_eq!(state.current_page(), 1);
		assert_eq!(state.sort().key(), None);
		assert_eq!(state.range_filter(), RangeBucket::All);
		assert!(!state.has_filters());
	}

	#[test]
	fn pending_search_text_counts_as_filter() {
		let state = QueryState {
			search_text: "rob".into(),
			..QueryState::default()
		};
		assert!(state.has_filters());
	}
}
