//! The query pipeline: dataset and query state in, visible page out.
//!
//! Every transition ends with a recompute over the whole dataset: filter with
//! a [`Predicate`], order with the active [`SortSpec`], then window the result
//! with the pager. Filter-affecting transitions move back to the first page;
//! sort and page transitions keep the current page and let the pager clamp.

use std::num::NonZeroUsize;
use std::time::Instant;

use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use crate::config::QueryConfig;
use crate::debounce::Debouncer;
use crate::error::QueryError;
use crate::facets::{FacetCount, facet_universe};
use crate::pager::{self, PageWindow};
use crate::predicate::{Predicate, RangeBucket};
use crate::record::Record;
use crate::state::QueryState;

/// Inputs a hosting view can feed into a pipeline.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "value", rename_all = "snake_case")]
pub enum QueryEvent {
	/// Raw keystroke value; filtering follows once it settles.
	SetSearchText(String),
	ToggleFacet(String),
	SetRangeFilter(RangeBucket),
	RequestSort(String),
	SetPage(usize),
	NextPage,
	PreviousPage,
	ClearFilters,
}

/// Derived view of the pipeline after the latest recompute.
#[derive(Debug, Clone, PartialEq)]
pub struct VisibleState<'a, T> {
	pub items: Vec<&'a T>,
	pub total_pages: usize,
	/// Clamped 1-based page number.
	pub page: usize,
	pub filtered_count: usize,
	pub total_count: usize,
	start: usize,
}

impl<T> VisibleState<'_, T> {
	/// 1-based position of the first visible item, or 0 when nothing is shown.
	#[must_use]
	pub fn first_shown(&self) -> usize {
		if self.items.is_empty() { 0 } else { self.start + 1 }
	}

	/// 1-based position of the last visible item, or 0 when nothing is shown.
	#[must_use]
	pub fn last_shown(&self) -> usize {
		self.start + self.items.len()
	}

	#[must_use]
	pub fn is_empty(&self) -> bool {
		self.items.is_empty()
	}

	#[must_use]
	pub fn has_previous(&self) -> bool {
		self.page > 1
	}

	#[must_use]
	pub fn has_next(&self) -> bool {
		self.page < self.total_pages
	}
}

/// Owns a dataset and the query state that selects the visible page from it.
#[derive(Debug)]
pub struct QueryPipeline<T> {
	config: QueryConfig,
	page_size: NonZeroUsize,
	dataset: Vec<T>,
	facets: Vec<FacetCount>,
	state: QueryState,
	search: Debouncer<String>,
	ordered: Vec<usize>,
	window: PageWindow,
}

impl<T: Record> QueryPipeline<T> {
	/// Create an empty pipeline for `config`.
	///
	/// # Errors
	///
	/// Returns a [`QueryError`] if the configuration is invalid.
	pub fn new(config: QueryConfig) -> Result<Self, QueryError> {
		Self::with_dataset(config, Vec::new())
	}

	/// Create a pipeline already seeded with `dataset`.
	///
	/// # Errors
	///
	/// Returns a [`QueryError`] if the configuration is invalid.
	pub fn with_dataset(config: QueryConfig, dataset: Vec<T>) -> Result<Self, QueryError> {
		let page_size = config.validate()?;
		let search = Debouncer::new(config.debounce());
		let mut pipeline = Self {
			config,
			page_size,
			dataset: Vec::new(),
			facets: Vec::new(),
			state: QueryState::default(),
			search,
			ordered: Vec::new(),
			window: pager::window(0, page_size, 1),
		};
		pipeline.replace_dataset(dataset);
		Ok(pipeline)
	}

	#[must_use]
	pub fn config(&self) -> &QueryConfig {
		&self.config
	}

	#[must_use]
	pub fn page_size(&self) -> NonZeroUsize {
		self.page_size
	}

	#[must_use]
	pub fn state(&self) -> &QueryState {
		&self.state
	}

	#[must_use]
	pub fn dataset(&self) -> &[T] {
		&self.dataset
	}

	/// Facet values present in the current dataset, sorted by name.
	#[must_use]
	pub fn facets(&self) -> &[FacetCount] {
		&self.facets
	}

	/// Instant at which pending search text settles, if any is pending.
	#[must_use]
	pub fn search_deadline(&self) -> Option<Instant> {
		self.search.deadline()
	}

	/// Apply a [`QueryEvent`] received at `now`.
	pub fn apply(&mut self, event: QueryEvent, now: Instant) {
		match event {
			QueryEvent::SetSearchText(text) => self.set_search_text(text, now),
			QueryEvent::ToggleFacet(facet) => {
				self.toggle_facet(&facet);
			}
			QueryEvent::SetRangeFilter(bucket) => self.set_range_filter(bucket),
			QueryEvent::RequestSort(key) => self.request_sort(&key),
			QueryEvent::SetPage(page) => self.set_page(page),
			QueryEvent::NextPage => self.next_page(),
			QueryEvent::PreviousPage => self.previous_page(),
			QueryEvent::ClearFilters => self.clear_filters(),
		}
	}

	/// Record raw search input and schedule it to settle after the debounce
	/// window.
	pub fn set_search_text(&mut self, text: impl Into<String>, now: Instant) {
		let text = text.into();
		self.state.search_text.clone_from(&text);
		self.search.push(text, now);
	}

	/// Settle pending search input whose window has elapsed by `now`.
	///
	/// Returns `true` when the settled text changed the filtered result.
	pub fn tick(&mut self, now: Instant) -> bool {
		match self.search.poll(now) {
			Some(text) => self.debounced_search_text_changed(text),
			None => false,
		}
	}

	/// Settle pending search input immediately.
	pub fn flush_search(&mut self) -> bool {
		match self.search.flush() {
			Some(text) => self.debounced_search_text_changed(text),
			None => false,
		}
	}

	/// Install settled search text. Text equal to the current filter is ignored
	/// and keeps the current page.
	pub fn debounced_search_text_changed(&mut self, text: impl Into<String>) -> bool {
		let text = text.into();
		if text == self.state.debounced_search_text {
			return false;
		}
		debug!(search = %text, "search text settled");
		self.state.debounced_search_text = text;
		self.filters_changed();
		true
	}

	/// Add or remove `facet` from the active selection, returning whether it is
	/// now active.
	pub fn toggle_facet(&mut self, facet: &str) -> bool {
		let active = if self.state.active_facets.remove(facet) {
			false
		} else {
			self.state.active_facets.insert(facet.to_string());
			true
		};
		self.filters_changed();
		active
	}

	pub fn set_range_filter(&mut self, bucket: RangeBucket) {
		self.state.range_filter = bucket;
		self.filters_changed();
	}

	/// Order by `key`, toggling direction if it is already the active key.
	pub fn request_sort(&mut self, key: &str) {
		self.state.sort.request(key);
		debug!(
			key,
			direction = %self.state.sort.direction(),
			"sort requested"
		);
		self.recompute();
	}

	/// Move to page `page`; out-of-range values clamp.
	pub fn set_page(&mut self, page: usize) {
		self.state.current_page = page;
		self.rewindow();
	}

	pub fn next_page(&mut self) {
		self.set_page(self.state.current_page.saturating_add(1));
	}

	pub fn previous_page(&mut self) {
		self.set_page(self.state.current_page.saturating_sub(1));
	}

	/// Drop search text, facets and range restriction at once. Pending search
	/// input is discarded rather than settled later.
	pub fn clear_filters(&mut self) {
		self.search.cancel();
		self.state.search_text.clear();
		self.state.debounced_search_text.clear();
		self.state.active_facets.clear();
		self.state.range_filter = RangeBucket::All;
		self.filters_changed();
	}

	/// Install a new source dataset and return to the first page.
	pub fn replace_dataset(&mut self, dataset: Vec<T>) {
		self.facets = match self.config.facet_field.as_deref() {
			Some(field) => facet_universe(&dataset, field),
			None => Vec::new(),
		};
		self.dataset = dataset;
		debug!(items = self.dataset.len(), "dataset replaced");
		self.filters_changed();
	}

	/// Re-run filter, sort and pagination over the current inputs.
	pub fn recompute(&mut self) {
		let predicate = Predicate::build(&self.config, &self.state);
		let mut ordered = predicate.filter(&self.dataset);
		self.state.sort.sort_indices(&self.dataset, &mut ordered);
		self.ordered = ordered;
		self.rewindow();
	}

	/// Snapshot of the visible page and derived counts.
	#[must_use]
	pub fn visible(&self) -> VisibleState<'_, T> {
		let items = self
			.window
			.slice(&self.ordered)
			.iter()
			.map(|&index| &self.dataset[index])
			.collect();

		VisibleState {
			items,
			total_pages: self.window.total_pages,
			page: self.window.page,
			filtered_count: self.ordered.len(),
			total_count: self.dataset.len(),
			start: self.window.start,
		}
	}

	/// Every item passing the filter, in display order.
	pub fn ordered_items(&self) -> impl Iterator<Item = &T> + '_ {
		self.ordered.iter().map(|&index| &self.dataset[index])
	}

	fn filters_changed(&mut self) {
		if self.state.current_page != 1 {
			debug!(from = self.state.current_page, "filters changed, resetting page");
		}
		self.state.current_page = 1;
		self.recompute();
	}

	fn rewindow(&mut self) {
		self.window = pager::window(self.ordered.len(), self.page_size, self.state.current_page);
		self.state.current_page = self.window.page;
		trace!(
			page = self.window.page,
			total_pages = self.window.total_pages,
			filtered = self.ordered.len(),
			"page window updated"
		);
	}
}
