mod definitions;
mod options;
mod styles;

use clap::Parser;
use sparkboard::query::QueryEvent;

pub(crate) use definitions::CliArgs;
pub(crate) use options::{EntityArg, OutputFormat};

/// Parse command line arguments into the strongly typed [`CliArgs`] structure.
pub(crate) fn parse_cli() -> CliArgs {
	CliArgs::parse()
}

impl CliArgs {
	/// Translate the browse flags into pipeline events.
	///
	/// Search, tags and the score bucket come first so the page request is
	/// applied to the final filtered set. Repeated `--sort` flags are replayed
	/// in order, so naming a key twice flips it to descending.
	pub(crate) fn query_events(&self) -> Vec<QueryEvent> {
		let mut events = Vec::new();

		if let Some(search) = &self.search {
			events.push(QueryEvent::SetSearchText(search.clone()));
		}
		for tag in &self.tags {
			let tag = tag.trim();
			if !tag.is_empty() {
				events.push(QueryEvent::ToggleFacet(tag.to_string()));
			}
		}
		if let Some(score) = self.score {
			events.push(QueryEvent::SetRangeFilter(score.into()));
		}
		for key in &self.sort {
			events.push(QueryEvent::RequestSort(key.clone()));
		}
		if let Some(page) = self.page {
			events.push(QueryEvent::SetPage(page));
		}

		events
	}
}
