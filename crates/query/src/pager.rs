use std::num::NonZeroUsize;
use std::ops::Range;

/// Position of the visible page within an ordered result of `len` items.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageWindow {
	/// Clamped 1-based page number.
	pub page: usize,
	pub total_pages: usize,
	pub start: usize,
	pub end: usize,
}

impl PageWindow {
	#[must_use]
	pub fn range(&self) -> Range<usize> {
		self.start..self.end
	}

	#[must_use]
	pub fn len(&self) -> usize {
		self.end - self.start
	}

	#[must_use]
	pub fn is_empty(&self) -> bool {
		self.start == self.end
	}

	/// Slice `items` to this window.
	///
	/// # Panics
	///
	/// Panics if `items` is shorter than the length the window was computed for.
	#[must_use]
	pub fn slice<'a, T>(&self, items: &'a [T]) -> &'a [T] {
		&items[self.range()]
	}
}

/// Result of [`paginate`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Page<'a, T> {
	pub items: &'a [T],
	pub total_pages: usize,
	pub page: usize,
}

/// Number of pages needed for `len` items; never less than one.
#[must_use]
pub fn total_pages(len: usize, page_size: NonZeroUsize) -> usize {
	len.div_ceil(page_size.get()).max(1)
}

/// Compute the window for `current_page`, clamping it into `[1, total_pages]`.
#[must_use]
pub fn window(len: usize, page_size: NonZeroUsize, current_page: usize) -> PageWindow {
	let total_pages = total_pages(len, page_size);
	let page = current_page.clamp(1, total_pages);
	let start = ((page - 1) * page_size.get()).min(len);
	let end = start.saturating_add(page_size.get()).min(len);

	PageWindow {
		page,
		total_pages,
		start,
		end,
	}
}

/// Slice the page `current_page` out of `ordered`, clamping out-of-range pages.
#[must_use]
pub fn paginate<T>(ordered: &[T], page_size: NonZeroUsize, current_page: usize) -> Page<'_, T> {
	let window = window(ordered.len(), page_size, current_page);
	Page {
		items: window.slice(ordered),
		total_pages: window.total_pages,
		page: window.page,
	}
}
