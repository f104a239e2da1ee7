//! Field access for records flowing through the query pipeline.
//!
//! The pipeline never inspects concrete entity types. Instead every dataset
//! item implements [`Record`], exposing its fields by name as borrowed
//! [`FieldValue`]s that the predicate and sort stages know how to compare.

use std::cmp::Ordering;

/// A borrowed view of a single field on a [`Record`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FieldValue<'a> {
	Text(&'a str),
	Number(f64),
	Tags(&'a [String]),
}

impl<'a> FieldValue<'a> {
	/// Return the text payload, if this is a text field.
	#[must_use]
	pub fn as_text(&self) -> Option<&'a str> {
		match self {
			Self::Text(text) => Some(text),
			_ => None,
		}
	}

	/// Return the numeric payload, if this is a numeric field.
	#[must_use]
	pub fn as_number(&self) -> Option<f64> {
		match self {
			Self::Number(value) => Some(*value),
			_ => None,
		}
	}

	/// Return the tag list, if this is a tag field.
	#[must_use]
	pub fn as_tags(&self) -> Option<&'a [String]> {
		match self {
			Self::Tags(tags) => Some(tags),
			_ => None,
		}
	}

	/// Whether the field carries `facet` as one of its values.
	///
	/// A text field is treated as a single-valued tag list.
	pub(crate) fn has_facet(&self, facet: &str) -> bool {
		match self {
			Self::Tags(tags) => tags.iter().any(|tag| tag == facet),
			Self::Text(text) => *text == facet,
			Self::Number(_) => false,
		}
	}

	/// Native ordering: numeric for numbers, case-sensitive lexicographic for
	/// text. Values of different kinds order numbers before text before tags.
	pub(crate) fn native_cmp(&self, other: &Self) -> Ordering {
		match (self, other) {
			(Self::Number(a), Self::Number(b)) => a.total_cmp(b),
			(Self::Text(a), Self::Text(b)) => a.cmp(b),
			(Self::Tags(a), Self::Tags(b)) => a.cmp(b),
			_ => self.kind_rank().cmp(&other.kind_rank()),
		}
	}

	fn kind_rank(&self) -> u8 {
		match self {
			Self::Number(_) => 0,
			Self::Text(_) => 1,
			Self::Tags(_) => 2,
		}
	}
}

/// A dataset item the pipeline can search, filter and order.
pub trait Record {
	/// Stable identifier of the item.
	fn id(&self) -> &str;

	/// Look up a field by name. Unknown names return `None`.
	fn field(&self, name: &str) -> Option<FieldValue<'_>>;
}
