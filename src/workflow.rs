use std::time::{Duration, Instant};

use anyhow::{Result, anyhow, bail};
use serde::Serialize;
use sparkboard::catalog::{self, DatasetSource};
use sparkboard::query::{
	FacetCount, LoadStatus, PipelineHandle, QueryEvent, RangeBucket, SortDirection,
};
use sparkboard::{Listing, Project};
use tracing::{debug, warn};

use crate::cli::EntityArg;
use crate::settings::ResolvedConfig;

/// Upper bound on how long a one-shot invocation waits for its dataset.
const LOAD_TIMEOUT: Duration = Duration::from_secs(30);

/// What one invocation asks for.
#[derive(Debug, Clone, Default)]
pub(crate) struct BrowseRequest {
	pub(crate) entity: EntityArg,
	pub(crate) events: Vec<QueryEvent>,
	pub(crate) slug: Option<String>,
	pub(crate) list_tags: bool,
}

#[derive(Debug, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub(crate) enum BrowseOutcome {
	Page(BrowseReport),
	Tags {
		entity: &'static str,
		tags: Vec<FacetCount>,
	},
	Project {
		slug: String,
		project: Option<Project>,
	},
}

/// One rendered page of a list view.
#[derive(Debug, Serialize)]
pub(crate) struct BrowseReport {
	pub(crate) entity: &'static str,
	#[serde(skip)]
	pub(crate) columns: &'static [&'static str],
	#[serde(skip)]
	pub(crate) rows: Vec<Vec<String>>,
	pub(crate) items: Vec<serde_json::Value>,
	pub(crate) page: usize,
	pub(crate) total_pages: usize,
	pub(crate) first_shown: usize,
	pub(crate) last_shown: usize,
	pub(crate) filtered_count: usize,
	pub(crate) total_count: usize,
	pub(crate) query: QuerySummary,
}

/// The filters and ordering that produced a report.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub(crate) struct QuerySummary {
	pub(crate) search: String,
	pub(crate) tags: Vec<String>,
	pub(crate) score: RangeBucket,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub(crate) sort: Option<String>,
	pub(crate) direction: SortDirection,
}

/// Runs a single browse request against the configured datasets.
pub(crate) struct BrowseWorkflow {
	settings: ResolvedConfig,
}

impl BrowseWorkflow {
	pub(crate) fn from_config(settings: ResolvedConfig) -> Self {
		Self { settings }
	}

	pub(crate) fn run(&self, request: BrowseRequest) -> Result<BrowseOutcome> {
		if let Some(slug) = request.slug {
			if request.entity != EntityArg::Projects {
				bail!("--slug only applies to projects");
			}
			let projects = catalog::load_projects(&self.settings.projects)?;
			let project = catalog::project_by_slug(&projects, &slug).cloned();
			return Ok(BrowseOutcome::Project { slug, project });
		}

		match request.entity {
			EntityArg::Projects => self.browse(
				self.settings.projects.clone(),
				catalog::load_projects,
				request.events,
				request.list_tags,
			),
			EntityArg::Founders => self.browse(
				self.settings.founders.clone(),
				catalog::load_founders,
				request.events,
				request.list_tags,
			),
		}
	}

	fn browse<T: Listing>(
		&self,
		source: DatasetSource,
		load: fn(&DatasetSource) -> Result<Vec<T>>,
		events: Vec<QueryEvent>,
		list_tags: bool,
	) -> Result<BrowseOutcome> {
		let config = T::query_config()
			.with_page_size(self.settings.page_size)
			.with_debounce(self.settings.debounce);
		let has_facets = config.facet_field.is_some();

		let mut handle = PipelineHandle::initialize(config, move || load(&source))?;
		match handle.wait_until_loaded(LOAD_TIMEOUT) {
			LoadStatus::Ready => {}
			LoadStatus::Failed(err) => return Err(anyhow::Error::new(err.clone())),
			LoadStatus::Loading => bail!("{} did not load within {LOAD_TIMEOUT:?}", T::LABEL),
		}

		if list_tags {
			let tags = handle.pipeline().facets().to_vec();
			return Ok(BrowseOutcome::Tags {
				entity: T::LABEL,
				tags,
			});
		}

		for event in events {
			if !has_facets && matches!(event, QueryEvent::ToggleFacet(_)) {
				warn!(entity = T::LABEL, "{} have no tags; tag filters match nothing", T::LABEL);
			}
			// Nothing is typed after the fact, so search text settles before the
			// next event rather than resetting the page behind it.
			let settles = matches!(event, QueryEvent::SetSearchText(_));
			handle.apply(event, Instant::now());
			if settles {
				handle.flush_search();
			}
		}

		report(&handle).map(BrowseOutcome::Page)
	}
}

fn report<T: Listing>(handle: &PipelineHandle<T>) -> Result<BrowseReport> {
	let visible = handle
		.visible()
		.ok_or_else(|| anyhow!("{} are still loading", T::LABEL))?;
	let state = handle.pipeline().state();

	let items = visible
		.items
		.iter()
		.map(|item| serde_json::to_value(item))
		.collect::<Result<Vec<_>, _>>()?;
	let rows = visible.items.iter().map(|item| item.cells()).collect();

	debug!(
		entity = T::LABEL,
		shown = visible.items.len(),
		filtered = visible.filtered_count,
		"page rendered"
	);

	Ok(BrowseReport {
		entity: T::LABEL,
		columns: T::columns(),
		rows,
		items,
		page: visible.page,
		total_pages: visible.total_pages,
		first_shown: visible.first_shown(),
		last_shown: visible.last_shown(),
		filtered_count: visible.filtered_count,
		total_count: visible.total_count,
		query: QuerySummary {
			search: state.debounced_search_text().to_string(),
			tags: state.active_facets().iter().cloned().collect(),
			score: state.range_filter(),
			sort: state.sort().key().map(str::to_string),
			direction: state.sort().direction(),
		},
	})
}
