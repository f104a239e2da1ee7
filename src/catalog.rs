//! Dataset loading for the list views.
//!
//! Each entity is read from a JSON array, either a user supplied file or the
//! sample data compiled into the binary.

use std::collections::HashSet;
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, ensure};
use serde::de::DeserializeOwned;
use sparkboard_query::Record;
use tracing::debug;

use crate::models::{Founder, Project};

const BUNDLED_PROJECTS: &str = include_str!("../data/projects.json");
const BUNDLED_FOUNDERS: &str = include_str!("../data/founders.json");

/// Where a dataset is read from.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum DatasetSource {
	/// Sample data shipped with the binary.
	#[default]
	Bundled,
	File(PathBuf),
}

impl fmt::Display for DatasetSource {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Self::Bundled => f.write_str("(bundled sample data)"),
			Self::File(path) => write!(f, "{}", path.display()),
		}
	}
}

pub fn load_projects(source: &DatasetSource) -> Result<Vec<Project>> {
	load(source, BUNDLED_PROJECTS)
}

pub fn load_founders(source: &DatasetSource) -> Result<Vec<Founder>> {
	load(source, BUNDLED_FOUNDERS)
}

/// Read a dataset and check that every record has a distinct identifier.
pub fn load<T>(source: &DatasetSource, bundled: &str) -> Result<Vec<T>>
where
	T: DeserializeOwned + Record,
{
	let items: Vec<T> = match source {
		DatasetSource::Bundled => {
			serde_json::from_str(bundled).context("bundled sample data is malformed")?
		}
		DatasetSource::File(path) => read_json(path)?,
	};
	ensure_unique_ids(&items)?;
	debug!(source = %source, count = items.len(), "dataset read");
	Ok(items)
}

fn read_json<T: DeserializeOwned>(path: &Path) -> Result<Vec<T>> {
	let text = fs::read_to_string(path)
		.with_context(|| format!("failed to read dataset {}", path.display()))?;
	serde_json::from_str(&text)
		.with_context(|| format!("failed to parse dataset {}", path.display()))
}

fn ensure_unique_ids<T: Record>(items: &[T]) -> Result<()> {
	let mut seen = HashSet::with_capacity(items.len());
	for item in items {
		ensure!(seen.insert(item.id()), "duplicate record id `{}`", item.id());
	}
	Ok(())
}

/// Find a project by its URL slug.
pub fn project_by_slug<'a>(projects: &'a [Project], slug: &str) -> Option<&'a Project> {
	projects.iter().find(|project| project.slug == slug)
}
