use anyhow::Result;
use sparkboard::Project;
use sparkboard::query::FacetCount;
use unicode_width::UnicodeWidthStr;

use crate::workflow::{BrowseOutcome, BrowseReport};

const COLUMN_GAP: &str = "  ";

/// Print a plain-text representation of the outcome.
pub(crate) fn print_plain(outcome: &BrowseOutcome) {
	for line in format_plain(outcome) {
		println!("{line}");
	}
}

pub(crate) fn format_plain(outcome: &BrowseOutcome) -> Vec<String> {
	match outcome {
		BrowseOutcome::Page(report) => format_page(report),
		BrowseOutcome::Tags { entity, tags } => format_tags(entity, tags),
		BrowseOutcome::Project { slug, project } => match project {
			Some(project) => format_project(project),
			None => vec![format!("Project not found: {slug}")],
		},
	}
}

fn format_page(report: &BrowseReport) -> Vec<String> {
	if report.rows.is_empty() {
		return vec![format!(
			"No {} found matching your criteria.",
			report.entity
		)];
	}

	let mut widths: Vec<usize> = report.columns.iter().map(|c| c.width()).collect();
	for row in &report.rows {
		for (width, cell) in widths.iter_mut().zip(row) {
			*width = (*width).max(cell.width());
		}
	}

	let mut lines = Vec::with_capacity(report.rows.len() + 4);
	lines.push(table_line(report.columns.iter().copied(), &widths));
	lines.push(table_line(
		widths.iter().map(|width| "-".repeat(*width)),
		&widths,
	));
	for row in &report.rows {
		lines.push(table_line(row.iter().map(String::as_str), &widths));
	}
	lines.push(String::new());
	lines.push(footer(report));
	lines
}

fn table_line<I, S>(cells: I, widths: &[usize]) -> String
where
	I: IntoIterator<Item = S>,
	S: AsRef<str>,
{
	let padded: Vec<String> = cells
		.into_iter()
		.zip(widths)
		.map(|(cell, width)| pad(cell.as_ref(), *width))
		.collect();
	padded.join(COLUMN_GAP).trim_end().to_string()
}

fn pad(cell: &str, width: usize) -> String {
	let fill = width.saturating_sub(cell.width());
	format!("{cell}{}", " ".repeat(fill))
}

fn footer(report: &BrowseReport) -> String {
	let mut line = format!(
		"Showing {} to {} of {} {} (page {} of {})",
		report.first_shown,
		report.last_shown,
		report.filtered_count,
		report.entity,
		report.page,
		report.total_pages,
	);
	if report.filtered_count != report.total_count {
		line.push_str(&format!(", {} in total", report.total_count));
	}
	line
}

fn format_tags(entity: &str, tags: &[FacetCount]) -> Vec<String> {
	if tags.is_empty() {
		return vec![format!("No tags found for {entity}.")];
	}
	tags.iter()
		.map(|tag| format!("{} ({})", tag.name, tag.count))
		.collect()
}

fn format_project(project: &Project) -> Vec<String> {
	let mut lines = vec![
		format!("{} ({})", project.title, project.slug),
		format!("Score: {} ({})", project.score, project.tier()),
		format!(
			"Founder: {}",
			project.founder_name.as_deref().unwrap_or(&project.founder)
		),
	];
	if !project.tags.is_empty() {
		lines.push(format!("Tags: {}", project.tags.join(", ")));
	}
	lines.push(format!("Created: {}", project.created_at));
	lines.push(String::new());
	lines.push(
		project
			.long_description
			.clone()
			.unwrap_or_else(|| project.description.clone()),
	);
	lines
}

/// Format the outcome as a JSON string.
pub(crate) fn format_outcome_json(outcome: &BrowseOutcome) -> Result<String> {
	Ok(serde_json::to_string_pretty(outcome)?)
}

/// Print the JSON representation of the outcome.
pub(crate) fn print_json(outcome: &BrowseOutcome) -> Result<()> {
	println!("{}", format_outcome_json(outcome)?);
	Ok(())
}
