//! Entity shapes shown in the list views.

mod founder;
mod project;

pub use founder::Founder;
pub use project::Project;

use serde::Serialize;
use sparkboard_query::{QueryConfig, Record};

/// An entity that can be browsed through a query pipeline and printed as a
/// table row.
pub trait Listing: Record + Serialize + Clone + Send + 'static {
	/// Plural label used in summaries, e.g. "projects".
	const LABEL: &'static str;

	/// Column headers for tabular output.
	fn columns() -> &'static [&'static str];

	/// Cell values in [`Listing::columns`] order.
	fn cells(&self) -> Vec<String>;

	/// Searchable, facet and range fields for this entity.
	fn query_config() -> QueryConfig;
}

/// Render a score without a trailing `.0` for whole numbers.
pub(crate) fn format_score(score: f64) -> String {
	if score.fract() == 0.0 {
		format!("{score:.0}")
	} else {
		format!("{score:.1}")
	}
}
