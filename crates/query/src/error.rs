use thiserror::Error;

/// Errors raised while constructing a query pipeline or parsing query inputs.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum QueryError {
	/// The configured page size was zero.
	#[error("page size must be greater than zero")]
	ZeroPageSize,

	/// No searchable fields were configured for the entity.
	#[error("at least one searchable field is required")]
	NoSearchableFields,

	/// A range bucket name did not match any known bucket.
	#[error("unknown range bucket '{0}' (expected all, high, medium or low)")]
	UnknownBucket(String),
}

/// Failure reported by a dataset loader.
///
/// The loader's error chain is rendered into a message at capture time so the
/// error can be stored in the handle status and compared in tests.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("dataset load failed: {message}")]
pub struct LoadError {
	message: String,
}

impl LoadError {
	pub(crate) fn from_error(err: &anyhow::Error) -> Self {
		Self {
			message: format!("{err:#}"),
		}
	}

	pub(crate) fn disconnected() -> Self {
		Self {
			message: "loader terminated without producing a result".to_string(),
		}
	}

	/// Rendered description of the underlying failure.
	#[must_use]
	pub fn message(&self) -> &str {
		&self.message
	}
}
