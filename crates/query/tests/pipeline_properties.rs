use std::collections::BTreeSet;
use std::time::{Duration, Instant};

use sparkboard_query::{
	FieldValue, QueryConfig, QueryEvent, QueryPipeline, RangeBucket, Record, SortDirection,
};

#[derive(Debug, Clone, PartialEq)]
struct Project {
	id: String,
	title: String,
	description: String,
	score: f64,
	tags: Vec<String>,
}

impl Record for Project {
	fn id(&self) -> &str {
		&self.id
	}

	fn field(&self, name: &str) -> Option<FieldValue<'_>> {
		match name {
			"title" => Some(FieldValue::Text(&self.title)),
			"description" => Some(FieldValue::Text(&self.description)),
			"score" => Some(FieldValue::Number(self.score)),
			"tags" => Some(FieldValue::Tags(&self.tags)),
			_ => None,
		}
	}
}

fn project(id: usize, title: &str, score: f64, tags: &[&str]) -> Project {
	Project {
		id: id.to_string(),
		title: title.to_string(),
		description: format!("{title} for modern teams"),
		score,
		tags: tags.iter().map(|tag| tag.to_string()).collect(),
	}
}

fn project_config(page_size: usize) -> QueryConfig {
	QueryConfig::new(["title", "description"])
		.with_facet_field("tags")
		.with_range_field("score")
		.with_page_size(page_size)
}

/// 50 projects; scores cycle through the buckets and tags overlap.
fn catalog() -> Vec<Project> {
	const TAGS: [&str; 4] = ["AI", "SaaS", "FinTech", "Health"];
	(0..50)
		.map(|n| {
			let tags = [TAGS[n % 4], TAGS[(n / 4) % 4]];
			project(n, &format!("Project {n:02}"), ((n * 7) % 101) as f64, &tags)
		})
		.collect()
}

fn ids(pipeline: &QueryPipeline<Project>) -> Vec<String> {
	pipeline
		.visible()
		.items
		.iter()
		.map(|item| item.id.clone())
		.collect()
}

fn at_page_three(pipeline: &mut QueryPipeline<Project>) {
	pipeline.set_page(3);
	assert_eq!(pipeline.visible().total_pages, 5);
	assert_eq!(pipeline.state().current_page(), 3);
}

#[test]
fn recompute_is_idempotent() {
	let mut pipeline = QueryPipeline::with_dataset(project_config(10), catalog()).unwrap();
	pipeline.toggle_facet("SaaS");
	pipeline.request_sort("score");
	pipeline.set_page(2);

	let before = pipeline.visible();
	let before_state = pipeline.state().clone();
	let snapshot: Vec<Project> = before.items.iter().map(|&item| item.clone()).collect();
	let counts = (before.total_pages, before.page, before.filtered_count, before.total_count);

	pipeline.recompute();
	pipeline.recompute();

	let after = pipeline.visible();
	let after_items: Vec<Project> = after.items.iter().map(|&item| item.clone()).collect();
	assert_eq!(after_items, snapshot);
	assert_eq!(
		(after.total_pages, after.page, after.filtered_count, after.total_count),
		counts
	);
	assert_eq!(pipeline.state(), &before_state);
}

#[test]
fn adding_facets_never_widens_the_result() {
	let mut pipeline = QueryPipeline::with_dataset(project_config(10), catalog()).unwrap();
	let facets: Vec<String> = pipeline.facets().iter().map(|f| f.name.clone()).collect();

	let mut previous = pipeline.visible().filtered_count;
	for facet in &facets {
		pipeline.toggle_facet(facet);
		let current = pipeline.visible().filtered_count;
		assert!(current <= previous, "{facet} widened {previous} -> {current}");
		previous = current;
	}
}

#[test]
fn resorting_preserves_relative_order_of_ties() {
	let dataset = vec![
		project(0, "b", 50.0, &[]),
		project(1, "a", 90.0, &[]),
		project(2, "c", 50.0, &[]),
		project(3, "d", 90.0, &[]),
		project(4, "e", 50.0, &[]),
	];
	let mut pipeline = QueryPipeline::with_dataset(project_config(10), dataset).unwrap();

	pipeline.request_sort("score");
	assert_eq!(ids(&pipeline), vec!["0", "2", "4", "1", "3"]);

	pipeline.request_sort("score");
	assert_eq!(pipeline.state().sort().direction(), SortDirection::Descending);
	assert_eq!(ids(&pipeline), vec!["1", "3", "0", "2", "4"]);

	pipeline.request_sort("score");
	assert_eq!(ids(&pipeline), vec!["0", "2", "4", "1", "3"]);
}

#[test]
fn pages_concatenate_to_the_ordered_set() {
	let mut pipeline = QueryPipeline::with_dataset(project_config(7), catalog()).unwrap();
	pipeline.set_range_filter(RangeBucket::Medium);
	pipeline.request_sort("title");
	pipeline.request_sort("title");

	let expected: Vec<String> = pipeline.ordered_items().map(|item| item.id.clone()).collect();
	let total_pages = pipeline.visible().total_pages;

	let mut joined = Vec::new();
	for page in 1..=total_pages {
		pipeline.set_page(page);
		let visible = pipeline.visible();
		assert!(visible.items.len() <= 7);
		joined.extend(visible.items.iter().map(|item| item.id.clone()));
	}

	assert_eq!(joined, expected);
	let unique: BTreeSet<&String> = joined.iter().collect();
	assert_eq!(unique.len(), joined.len());
}

#[test]
fn debounced_burst_emits_once_with_final_text() {
	let config = project_config(10).with_debounce(Duration::from_millis(300));
	let mut pipeline = QueryPipeline::with_dataset(config, catalog()).unwrap();
	let start = Instant::now();
	let mut settled = Vec::new();

	for (millis, text) in [(0, "a"), (50, "ab"), (90, "abc")] {
		let now = start + Duration::from_millis(millis);
		if pipeline.tick(now) {
			settled.push(millis);
		}
		pipeline.set_search_text(text, now);
	}
	for millis in (100..=1_000).step_by(10) {
		if pipeline.tick(start + Duration::from_millis(millis)) {
			settled.push(millis);
		}
	}

	assert_eq!(settled, vec![390]);
	assert_eq!(pipeline.state().debounced_search_text(), "abc");
}

#[test]
fn filter_changes_reset_to_first_page() {
	let mut pipeline = QueryPipeline::with_dataset(project_config(10), catalog()).unwrap();

	at_page_three(&mut pipeline);
	pipeline.toggle_facet("AI");
	assert_eq!(pipeline.visible().page, 1);

	pipeline.toggle_facet("AI");
	at_page_three(&mut pipeline);
	pipeline.set_search_text("project", Instant::now());
	pipeline.flush_search();
	assert_eq!(pipeline.visible().page, 1);

	pipeline.clear_filters();
	at_page_three(&mut pipeline);
	pipeline.set_range_filter(RangeBucket::All);
	assert_eq!(pipeline.visible().page, 1);

	at_page_three(&mut pipeline);
	pipeline.replace_dataset(catalog());
	assert_eq!(pipeline.visible().page, 1);
}

#[test]
fn sorting_keeps_the_current_page() {
	let mut pipeline = QueryPipeline::with_dataset(project_config(10), catalog()).unwrap();
	at_page_three(&mut pipeline);
	pipeline.request_sort("score");
	assert_eq!(pipeline.state().current_page(), 3);
	assert_eq!(pipeline.visible().page, 3);
}

#[test]
fn sorting_still_clamps_an_out_of_range_page() {
	let mut pipeline = QueryPipeline::with_dataset(project_config(10), catalog()).unwrap();
	pipeline.set_page(99);
	pipeline.request_sort("title");
	assert_eq!(pipeline.state().current_page(), 5);
}

#[test]
fn twenty_five_founders_clamp_to_last_page() {
	let founders: Vec<Project> = (1..=25)
		.map(|n| project(n, &format!("Founder {n:02}"), 60.0, &[]))
		.collect();
	let mut pipeline = QueryPipeline::with_dataset(project_config(10), founders).unwrap();
	assert_eq!(pipeline.visible().total_pages, 3);

	pipeline.apply(QueryEvent::SetPage(4), Instant::now());
	let visible = pipeline.visible();
	assert_eq!(visible.page, 3);
	let shown: Vec<&str> = visible.items.iter().map(|item| item.id.as_str()).collect();
	assert_eq!(shown, vec!["21", "22", "23", "24", "25"]);
}

#[test]
fn facets_combine_with_and_semantics() {
	let dataset = vec![
		project(1, "Copilot", 85.0, &["AI", "SaaS"]),
		project(2, "Ledger", 72.0, &["SaaS", "FinTech"]),
	];
	let mut pipeline = QueryPipeline::with_dataset(project_config(10), dataset).unwrap();

	pipeline.toggle_facet("SaaS");
	assert_eq!(pipeline.visible().filtered_count, 2);

	pipeline.toggle_facet("SaaS");
	pipeline.toggle_facet("AI");
	pipeline.toggle_facet("FinTech");
	let visible = pipeline.visible();
	assert_eq!(visible.filtered_count, 0);
	assert!(visible.items.is_empty());
	assert_eq!(visible.total_pages, 1);
}

#[test]
fn empty_dataset_degrades_to_empty_results() {
	let mut pipeline = QueryPipeline::<Project>::new(project_config(10)).unwrap();
	pipeline.toggle_facet("AI");
	pipeline.request_sort("missing");
	pipeline.set_page(0);

	let visible = pipeline.visible();
	assert_eq!(visible.total_count, 0);
	assert_eq!(visible.page, 1);
	assert_eq!(visible.total_pages, 1);
	assert!(visible.is_empty());
}
