//! Delay propagation of rapidly changing input until it settles.
//!
//! The debouncer does not own a timer. Callers push values with the instant
//! they arrived and poll from their event loop; a value is released once the
//! quiescence window has elapsed without a newer push.

use std::time::{Duration, Instant};

#[derive(Debug, Clone)]
struct Pending<T> {
	value: T,
	deadline: Instant,
}

/// Holds at most one scheduled emission, superseded by every new push.
#[derive(Debug, Clone)]
pub struct Debouncer<T> {
	delay: Duration,
	pending: Option<Pending<T>>,
}

impl<T> Debouncer<T> {
	#[must_use]
	pub fn new(delay: Duration) -> Self {
		Self {
			delay,
			pending: None,
		}
	}

	#[must_use]
	pub fn delay(&self) -> Duration {
		self.delay
	}

	/// Schedule `value` for emission `delay` after `now`, replacing any value
	/// still waiting.
	pub fn push(&mut self, value: T, now: Instant) {
		self.pending = Some(Pending {
			value,
			deadline: now + self.delay,
		});
	}

	/// Release the pending value if its deadline has passed.
	pub fn poll(&mut self, now: Instant) -> Option<T> {
		match &self.pending {
			Some(pending) if pending.deadline <= now => {
				self.pending.take().map(|pending| pending.value)
			}
			_ => None,
		}
	}

	/// Release the pending value immediately regardless of its deadline.
	pub fn flush(&mut self) -> Option<T> {
		self.pending.take().map(|pending| pending.value)
	}

	/// Drop the pending value without emitting it.
	pub fn cancel(&mut self) {
		self.pending = None;
	}

	/// Instant at which the pending value becomes due.
	#[must_use]
	pub fn deadline(&self) -> Option<Instant> {
		self.pending.as_ref().map(|pending| pending.deadline)
	}

	#[must_use]
	pub fn is_pending(&self) -> bool {
		self.pending.is_some()
	}
}
