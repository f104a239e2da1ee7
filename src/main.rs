mod cli;
mod settings;
mod workflow;

use anyhow::Result;
use cli::{CliArgs, OutputFormat, parse_cli, print_json, print_plain};
use settings::ResolvedConfig;
use sparkboard::logging;
use workflow::{BrowseRequest, BrowseWorkflow};

fn main() -> Result<()> {
	let cli = parse_cli();
	logging::initialize(cli.verbose)?;

	let resolved = settings::load(&cli)?;

	if cli.print_config {
		resolved.print_summary();
	}

	run_browse(&cli, resolved)
}

/// Execute the browse workflow and print output in the chosen format.
fn run_browse(cli: &CliArgs, settings: ResolvedConfig) -> Result<()> {
	let request = BrowseRequest {
		entity: cli.entity,
		events: cli.query_events(),
		slug: cli.slug.clone(),
		list_tags: cli.list_tags,
	};
	let outcome = BrowseWorkflow::from_config(settings).run(request)?;

	match cli.output {
		OutputFormat::Plain => print_plain(&outcome),
		OutputFormat::Json => print_json(&outcome)?,
	}

	Ok(())
}
