use serde::{Deserialize, Serialize};
use sparkboard_query::{FieldValue, QueryConfig, RangeBucket, Record};

use super::{Listing, format_score};

/// A startup idea listed on the board.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
	pub id: String,
	pub title: String,
	pub slug: String,
	pub description: String,
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub long_description: Option<String>,
	/// Identifier of the founder who submitted the idea.
	pub founder: String,
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub founder_name: Option<String>,
	/// Evaluation score in `0..=100`.
	pub score: f64,
	#[serde(default)]
	pub tags: Vec<String>,
	/// RFC 3339 creation timestamp; sorts chronologically as text.
	pub created_at: String,
}

impl Project {
	/// Score tier used for badges.
	#[must_use]
	pub fn tier(&self) -> RangeBucket {
		RangeBucket::classify(self.score)
	}
}

impl Record for Project {
	fn id(&self) -> &str {
		&self.id
	}

	fn field(&self, name: &str) -> Option<FieldValue<'_>> {
		match name {
			"id" => Some(FieldValue::Text(&self.id)),
			"title" => Some(FieldValue::Text(&self.title)),
			"slug" => Some(FieldValue::Text(&self.slug)),
			"description" => Some(FieldValue::Text(&self.description)),
			"long_description" | "longDescription" => {
				self.long_description.as_deref().map(FieldValue::Text)
			}
			"founder" => Some(FieldValue::Text(&self.founder)),
			"founder_name" | "founderName" => self.founder_name.as_deref().map(FieldValue::Text),
			"score" => Some(FieldValue::Number(self.score)),
			"tags" => Some(FieldValue::Tags(&self.tags)),
			"created_at" | "createdAt" => Some(FieldValue::Text(&self.created_at)),
			_ => None,
		}
	}
}

impl Listing for Project {
	const LABEL: &'static str = "projects";

	fn columns() -> &'static [&'static str] {
		&["Title", "Score", "Tier", "Tags", "Founder", "Slug"]
	}

	fn cells(&self) -> Vec<String> {
		vec![
			self.title.clone(),
			format_score(self.score),
			self.tier().to_string(),
			self.tags.join(", "),
			self.founder_name.clone().unwrap_or_else(|| self.founder.clone()),
			self.slug.clone(),
		]
	}

	fn query_config() -> QueryConfig {
		QueryConfig::new(["title", "description"])
			.with_facet_field("tags")
			.with_range_field("score")
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	const JSON: &str = r#"{
		"id": "p1",
		"title": "Kelp Farms",
		"slug": "kelp-farms",
		"description": "Ocean-grown protein",
		"founder": "f3",
		"founderName": "Ada Osei",
		"score": 82,
		"tags": ["Climate", "Food"],
		"createdAt": "2024-03-02T10:00:00Z"
	}"#;

	#[test]
	fn deserializes_camel_case_fields() {
		let project: Project = serde_json::from_str(JSON).expect("project parses");
		assert_eq!(project.founder_name.as_deref(), Some("Ada Osei"));
		assert_eq!(project.long_description, None);
		assert_eq!(project.created_at, "2024-03-02T10:00:00Z");
	}

	#[test]
	fn fields_accept_both_naming_styles() {
		let project: Project = serde_json::from_str(JSON).expect("project parses");
		assert_eq!(
			project.field("createdAt"),
			project.field("created_at"),
		);
		assert_eq!(project.field("score"), Some(FieldValue::Number(82.0)));
		assert_eq!(project.field("longDescription"), None);
		assert_eq!(project.field("unknown"), None);
	}

	#[test]
	fn cells_prefer_founder_name() {
		let project: Project = serde_json::from_str(JSON).expect("project parses");
		let cells = project.cells();
		assert_eq!(cells.len(), Project::columns().len());
		assert_eq!(cells[1], "82");
		assert_eq!(cells[2], "high");
		assert_eq!(cells[4], "Ada Osei");
	}
}
