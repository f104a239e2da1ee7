use std::num::NonZeroUsize;
use std::time::Duration;

use serde::Deserialize;

use crate::error::QueryError;

/// Page size used when none is configured.
pub const DEFAULT_PAGE_SIZE: usize = 10;

/// Quiescence window applied to search input when none is configured.
pub const DEFAULT_DEBOUNCE_MS: u64 = 300;

/// Per-entity configuration supplied when a pipeline is constructed.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct QueryConfig {
	/// Fields whose text is matched against the search input.
	pub searchable_fields: Vec<String>,
	/// Field producing the facet values an item carries.
	pub facet_field: Option<String>,
	/// Numeric field used for range bucket filtering.
	pub range_field: Option<String>,
	pub page_size: usize,
	pub debounce_ms: u64,
}

impl Default for QueryConfig {
	fn default() -> Self {
		Self {
			searchable_fields: Vec::new(),
			facet_field: None,
			range_field: None,
			page_size: DEFAULT_PAGE_SIZE,
			debounce_ms: DEFAULT_DEBOUNCE_MS,
		}
	}
}

impl QueryConfig {
	/// Create a configuration searching the provided fields.
	#[must_use]
	pub fn new<I, S>(searchable_fields: I) -> Self
	where
		I: IntoIterator<Item = S>,
		S: Into<String>,
	{
		Self {
			searchable_fields: searchable_fields.into_iter().map(Into::into).collect(),
			..Self::default()
		}
	}

	#[must_use]
	pub fn with_facet_field(mut self, field: impl Into<String>) -> Self {
		self.facet_field = Some(field.into());
		self
	}

	#[must_use]
	pub fn with_range_field(mut self, field: impl Into<String>) -> Self {
		self.range_field = Some(field.into());
		self
	}

	#[must_use]
	pub fn with_page_size(mut self, page_size: usize) -> Self {
		self.page_size = page_size;
		self
	}

	#[must_use]
	pub fn with_debounce(mut self, delay: Duration) -> Self {
		self.debounce_ms = u64::try_from(delay.as_millis()).unwrap_or(u64::MAX);
		self
	}

	/// Quiescence window applied to search text updates.
	#[must_use]
	pub fn debounce(&self) -> Duration {
		Duration::from_millis(self.debounce_ms)
	}

	/// Validate the configuration, returning the page size as a non-zero value.
	///
	/// # Errors
	///
	/// Returns [`QueryError::ZeroPageSize`] or
	/// [`QueryError::NoSearchableFields`] when the configuration cannot drive a
	/// pipeline.
	pub fn validate(&self) -> Result<NonZeroUsize, QueryError> {
		if self.searchable_fields.is_empty() {
			return Err(QueryError::NoSearchableFields);
		}
		NonZeroUsize::new(self.page_size).ok_or(QueryError::ZeroPageSize)
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn builder_sets_every_field() {
		let config = QueryConfig::new(["title", "description"])
			.with_facet_field("tags")
			.with_range_field("score")
			.with_page_size(12)
			.with_debounce(Duration::from_millis(150));

		assert_eq!(config.searchable_fields, vec!["title", "description"]);
		assert_eq!(config.facet_field.as_deref(), Some("tags"));
		assert_eq!(config.range_field.as_deref(), Some("score"));
		assert_eq!(config.page_size, 12);
		assert_eq!(config.debounce(), Duration::from_millis(150));
	}

	#[test]
	fn validation_rejects_zero_page_size() {
		let config = QueryConfig::new(["name"]).with_page_size(0);
		assert_eq!(config.validate(), Err(QueryError::ZeroPageSize));
	}

	#[test]
	fn validation_requires_searchable_fields() {
		let config = QueryConfig::default();
		assert_eq!(config.validate(), Err(QueryError::NoSearchableFields));
	}

	#[test]
	fn deserializes_with_defaults() {
		let config: QueryConfig =
			serde_json::from_str(r#"{ "searchable_fields": ["name", "headline"] }"#)
				.expect("config parses");
		assert_eq!(config.page_size, DEFAULT_PAGE_SIZE);
		assert_eq!(config.debounce_ms, DEFAULT_DEBOUNCE_MS);
		assert_eq!(config.facet_field, None);
		assert_eq!(config.validate().map(NonZeroUsize::get), Ok(DEFAULT_PAGE_SIZE));
	}
}
