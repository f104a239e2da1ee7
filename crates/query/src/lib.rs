//! Interactive dataset queries for list views.
//!
//! A [`QueryPipeline`] owns an in-memory dataset plus the query state a user
//! manipulates: debounced search text, facet selections, a score range bucket,
//! a single sort key and the current page. Each transition recomputes the
//! visible page. [`PipelineHandle`] adds an asynchronous initial load on top.

mod config;
mod debounce;
mod error;
mod evaluation;
mod facets;
mod handle;
pub mod pager;
mod pipeline;
mod predicate;
mod record;
mod sort;
mod state;

pub use config::{DEFAULT_DEBOUNCE_MS, DEFAULT_PAGE_SIZE, QueryConfig};
pub use debounce::Debouncer;
pub use error::{LoadError, QueryError};
pub use evaluation::{IdeaEvaluator, IdeaRequest, IdeaScores, ScoreDimension};
pub use facets::{FacetCount, facet_universe};
pub use handle::{LoadStatus, PipelineHandle};
pub use pipeline::{QueryEvent, QueryPipeline, VisibleState};
pub use predicate::{Predicate, RangeBucket};
pub use record::{FieldValue, Record};
pub use sort::{SortDirection, SortSpec};
pub use state::QueryState;
