use serde::{Deserialize, Serialize};
use sparkboard_query::{FieldValue, QueryConfig, Record};

use super::{Listing, format_score};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Founder {
	pub id: String,
	pub name: String,
	pub headline: String,
	/// Avatar image reference; an empty string counts as absent.
	#[serde(default, deserialize_with = "empty_as_none")]
	pub avatar: Option<String>,
	/// Number of ideas submitted.
	pub ideas: u32,
	pub average_score: f64,
}

impl Founder {
	/// Initial shown when no avatar is available.
	#[must_use]
	pub fn initial(&self) -> Option<char> {
		self.name.chars().next()
	}
}

fn empty_as_none<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
	D: serde::Deserializer<'de>,
{
	let value: Option<String> = Option::deserialize(deserializer)?;
	Ok(value.filter(|avatar| !avatar.trim().is_empty()))
}

impl Record for Founder {
	fn id(&self) -> &str {
		&self.id
	}

	fn field(&self, name: &str) -> Option<FieldValue<'_>> {
		match name {
			"id" => Some(FieldValue::Text(&self.id)),
			"name" => Some(FieldValue::Text(&self.name)),
			"headline" => Some(FieldValue::Text(&self.headline)),
			"avatar" => self.avatar.as_deref().map(FieldValue::Text),
			"ideas" => Some(FieldValue::Number(f64::from(self.ideas))),
			"average_score" | "averageScore" => Some(FieldValue::Number(self.average_score)),
			_ => None,
		}
	}
}

impl Listing for Founder {
	const LABEL: &'static str = "founders";

	fn columns() -> &'static [&'static str] {
		&["Founder", "Headline", "Ideas", "Avg. Score"]
	}

	fn cells(&self) -> Vec<String> {
		vec![
			self.name.clone(),
			self.headline.clone(),
			self.ideas.to_string(),
			format_score(self.average_score),
		]
	}

	fn query_config() -> QueryConfig {
		QueryConfig::new(["name", "headline"]).with_range_field("average_score")
	}
}
