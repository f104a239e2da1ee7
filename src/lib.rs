//! Browse the Sparkboard project and founder catalogs.
//!
//! Entity shapes, dataset loading and host plumbing live here; the filtering,
//! sorting and paging engine is re-exported from [`query`].

pub mod app_dirs;
pub mod catalog;
pub mod logging;
pub mod models;

pub use catalog::DatasetSource;
pub use models::{Founder, Listing, Project};
pub use sparkboard_query as query;
