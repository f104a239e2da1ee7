use std::sync::mpsc::{self, Receiver, RecvTimeoutError, TryRecvError};
use std::thread;
use std::time::{Duration, Instant};

use tracing::{debug, warn};

use crate::config::QueryConfig;
use crate::error::{LoadError, QueryError};
use crate::pipeline::{QueryEvent, QueryPipeline, VisibleState};
use crate::predicate::RangeBucket;
use crate::record::Record;

type LoadResult<T> = anyhow::Result<Vec<T>>;

/// Progress of the dataset load backing a [`PipelineHandle`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadStatus {
	Loading,
	Ready,
	/// The most recent load failed; the previous dataset is still installed.
	Failed(LoadError),
}

/// A [`QueryPipeline`] whose dataset arrives from a background loader.
///
/// The loader runs on its own thread; its result is picked up by [`tick`]
/// or [`wait_until_loaded`] on the owning thread, so every transition still
/// runs to completion on one thread.
///
/// [`tick`]: PipelineHandle::tick
/// [`wait_until_loaded`]: PipelineHandle::wait_until_loaded
#[derive(Debug)]
pub struct PipelineHandle<T> {
	pipeline: QueryPipeline<T>,
	status: LoadStatus,
	load_rx: Option<Receiver<LoadResult<T>>>,
}

impl<T> PipelineHandle<T>
where
	T: Record + Send + 'static,
{
	/// Build an empty pipeline for `config` and start loading its dataset.
	///
	/// # Errors
	///
	/// Returns a [`QueryError`] if the configuration is invalid.
	pub fn initialize<F>(config: QueryConfig, loader: F) -> Result<Self, QueryError>
	where
		F: FnOnce() -> LoadResult<T> + Send + 'static,
	{
		let pipeline = QueryPipeline::new(config)?;
		let mut handle = Self {
			pipeline,
			status: LoadStatus::Loading,
			load_rx: None,
		};
		handle.reload(loader);
		Ok(handle)
	}

	/// Start a new load. The result of any load still in flight is discarded.
	pub fn reload<F>(&mut self, loader: F)
	where
		F: FnOnce() -> LoadResult<T> + Send + 'static,
	{
		let (tx, rx) = mpsc::channel();
		thread::spawn(move || {
			let _ = tx.send(loader());
		});
		debug!("dataset load started");
		self.load_rx = Some(rx);
		self.status = LoadStatus::Loading;
	}

	#[must_use]
	pub fn status(&self) -> &LoadStatus {
		&self.status
	}

	#[must_use]
	pub fn is_loading(&self) -> bool {
		self.status == LoadStatus::Loading
	}

	#[must_use]
	pub fn pipeline(&self) -> &QueryPipeline<T> {
		&self.pipeline
	}

	/// Pick up a finished load and settle due search input.
	///
	/// Returns `true` when the visible state changed.
	pub fn tick(&mut self, now: Instant) -> bool {
		let loaded = self.pump_load();
		let settled = self.pipeline.tick(now);
		loaded || settled
	}

	/// Block until the pending load finishes or `timeout` elapses.
	pub fn wait_until_loaded(&mut self, timeout: Duration) -> &LoadStatus {
		if let Some(rx) = self.load_rx.take() {
			match rx.recv_timeout(timeout) {
				Ok(result) => self.finish_load(result),
				Err(RecvTimeoutError::Timeout) => self.load_rx = Some(rx),
				Err(RecvTimeoutError::Disconnected) => self.fail_load(LoadError::disconnected()),
			}
		}
		&self.status
	}

	/// The visible page, withheld while a load is in flight.
	#[must_use]
	pub fn visible(&self) -> Option<VisibleState<'_, T>> {
		match self.status {
			LoadStatus::Loading => None,
			LoadStatus::Ready | LoadStatus::Failed(_) => Some(self.pipeline.visible()),
		}
	}

	pub fn apply(&mut self, event: QueryEvent, now: Instant) {
		self.pipeline.apply(event, now);
	}

	pub fn set_search_text(&mut self, text: impl Into<String>, now: Instant) {
		self.pipeline.set_search_text(text, now);
	}

	pub fn flush_search(&mut self) -> bool {
		self.pipeline.flush_search()
	}

	pub fn toggle_facet(&mut self, facet: &str) -> bool {
		self.pipeline.toggle_facet(facet)
	}

	pub fn set_range_filter(&mut self, bucket: RangeBucket) {
		self.pipeline.set_range_filter(bucket);
	}

	pub fn request_sort(&mut self, key: &str) {
		self.pipeline.request_sort(key);
	}

	pub fn set_page(&mut self, page: usize) {
		self.pipeline.set_page(page);
	}

	pub fn next_page(&mut self) {
		self.pipeline.next_page();
	}

	pub fn previous_page(&mut self) {
		self.pipeline.previous_page();
	}

	pub fn clear_filters(&mut self) {
		self.pipeline.clear_filters();
	}

	fn pump_load(&mut self) -> bool {
		let Some(rx) = self.load_rx.take() else {
			return false;
		};

		match rx.try_recv() {
			Ok(result) => {
				self.finish_load(result);
				true
			}
			Err(TryRecvError::Empty) => {
				self.load_rx = Some(rx);
				false
			}
			Err(TryRecvError::Disconnected) => {
				self.fail_load(LoadError::disconnected());
				true
			}
		}
	}

	fn finish_load(&mut self, result: LoadResult<T>) {
		match result {
			Ok(items) => {
				debug!(items = items.len(), "dataset load completed");
				self.pipeline.replace_dataset(items);
				self.status = LoadStatus::Ready;
			}
			Err(err) => self.fail_load(LoadError::from_error(&err)),
		}
	}

	fn fail_load(&mut self, err: LoadError) {
		warn!(error = %err, "dataset load failed");
		self.status = LoadStatus::Failed(err);
	}
}
