//! Interface to the idea evaluation collaborator.
//!
//! How scores are produced is the evaluator's business. This module fixes the
//! request and score record shapes and maps scores onto the same buckets the
//! range filter uses.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::predicate::RangeBucket;

/// An idea submitted for evaluation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IdeaRequest {
	pub idea: String,
	pub industry: String,
	pub stage: String,
}

impl IdeaRequest {
	#[must_use]
	pub fn new(
		idea: impl Into<String>,
		industry: impl Into<String>,
		stage: impl Into<String>,
	) -> Self {
		Self {
			idea: idea.into(),
			industry: industry.into(),
			stage: stage.into(),
		}
	}
}

/// The five scored dimensions of an evaluation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ScoreDimension {
	ExitSimilarity,
	Novelty,
	MarketMomentum,
	Demand,
	Saturation,
}

impl ScoreDimension {
	pub const ALL: [Self; 5] = [
		Self::ExitSimilarity,
		Self::Novelty,
		Self::MarketMomentum,
		Self::Demand,
		Self::Saturation,
	];

	#[must_use]
	pub fn label(self) -> &'static str {
		match self {
			Self::ExitSimilarity => "Exit similarity",
			Self::Novelty => "Novelty",
			Self::MarketMomentum => "Market momentum",
			Self::Demand => "Demand",
			Self::Saturation => "Saturation",
		}
	}
}

impl fmt::Display for ScoreDimension {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.label())
	}
}

/// Scores returned by an evaluator, each within `0..=100`.
///
/// Deserialized records are clamped the same way as [`IdeaScores::new`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", from = "RawIdeaScores")]
pub struct IdeaScores {
	exit_similarity: u8,
	novelty: u8,
	market_momentum: u8,
	demand: u8,
	saturation: u8,
	overall_score: u8,
}

impl IdeaScores {
	pub const MAX: u8 = 100;

	/// Build a score record, clamping every value to [`IdeaScores::MAX`].
	#[must_use]
	pub fn new(
		exit_similarity: u32,
		novelty: u32,
		market_momentum: u32,
		demand: u32,
		saturation: u32,
		overall_score: u32,
	) -> Self {
		Self {
			exit_similarity: clamp_score(exit_similarity),
			novelty: clamp_score(novelty),
			market_momentum: clamp_score(market_momentum),
			demand: clamp_score(demand),
			saturation: clamp_score(saturation),
			overall_score: clamp_score(overall_score),
		}
	}

	#[must_use]
	pub fn score(&self, dimension: ScoreDimension) -> u8 {
		match dimension {
			ScoreDimension::ExitSimilarity => self.exit_similarity,
			ScoreDimension::Novelty => self.novelty,
			ScoreDimension::MarketMomentum => self.market_momentum,
			ScoreDimension::Demand => self.demand,
			ScoreDimension::Saturation => self.saturation,
		}
	}

	#[must_use]
	pub fn overall(&self) -> u8 {
		self.overall_score
	}

	/// Every dimension paired with its bucket.
	#[must_use]
	pub fn buckets(&self) -> [(ScoreDimension, RangeBucket); 5] {
		ScoreDimension::ALL.map(|dimension| {
			(
				dimension,
				RangeBucket::classify(f64::from(self.score(dimension))),
			)
		})
	}
}

/// Wire shape of [`IdeaScores`] before clamping.
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawIdeaScores {
	exit_similarity: u32,
	novelty: u32,
	market_momentum: u32,
	demand: u32,
	saturation: u32,
	overall_score: u32,
}

impl From<RawIdeaScores> for IdeaScores {
	fn from(raw: RawIdeaScores) -> Self {
		Self::new(
			raw.exit_similarity,
			raw.novelty,
			raw.market_momentum,
			raw.demand,
			raw.saturation,
			raw.overall_score,
		)
	}
}

fn clamp_score(value: u32) -> u8 {
	u8::try_from(value.min(u32::from(IdeaScores::MAX))).unwrap_or(IdeaScores::MAX)
}

/// Produces [`IdeaScores`] for an [`IdeaRequest`].
///
/// `evaluate` may block on a remote service. Hosts call it off their event
/// thread and hand the result back over a channel, the way
/// [`PipelineHandle`](crate::PipelineHandle) runs its loader.
pub trait IdeaEvaluator {
	/// # Errors
	///
	/// Returns an error when the evaluation could not be produced.
	fn evaluate(&self, request: &IdeaRequest) -> anyhow::Result<IdeaScores>;
}

impl<F> IdeaEvaluator for F
where
	F: Fn(&IdeaRequest) -> anyhow::Result<IdeaScores>,
{
	fn evaluate(&self, request: &IdeaRequest) -> anyhow::Result<IdeaScores> {
		self(request)
	}
}
