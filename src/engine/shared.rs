//! Thread-safe engine handle.
//!
//! History and generator state form one unit: a batch must append its points
//! and classifications without interleaving with another batch. Every method
//! therefore takes the single engine lock for its whole duration.

use parking_lot::Mutex;
use std::sync::Arc;

use super::{Axis, Batch, EstimateSummary, SamplingEngine, SliceStatistics};
use crate::error::SimResult;

/// Cloneable handle to one [`SamplingEngine`] shared between callers.
#[derive(Debug, Clone, Default)]
pub struct SharedEngine {
    inner: Arc<Mutex<SamplingEngine>>,
}

impl SharedEngine {
    /// Wrap an engine.
    #[must_use]
    pub fn new(engine: SamplingEngine) -> Self {
        Self {
            inner: Arc::new(Mutex::new(engine)),
        }
    }

    /// See [`SamplingEngine::reset`].
    pub fn reset(&self, seed: Option<u64>) {
        self.inner.lock().reset(seed);
    }

    /// See [`SamplingEngine::next_batch`].
    pub fn next_batch(&self, k: usize) -> Batch {
        self.inner.lock().next_batch(k)
    }

    /// See [`SamplingEngine::total_count`].
    #[must_use]
    pub fn total_count(&self) -> u64 {
        self.inner.lock().total_count()
    }

    /// See [`SamplingEngine::inside_count`].
    #[must_use]
    pub fn inside_count(&self) -> u64 {
        self.inner.lock().inside_count()
    }

    /// See [`SamplingEngine::summary`].
    #[must_use]
    pub fn summary(&self) -> EstimateSummary {
        self.inner.lock().summary()
    }

    /// See [`SamplingEngine::compute_slice_statistics`].
    ///
    /// # Errors
    ///
    /// Returns an error for non-finite or non-positive slice parameters.
    pub fn compute_slice_statistics(
        &self,
        axis: Axis,
        slice_position: f64,
        thickness: f64,
    ) -> SimResult<SliceStatistics> {
        self.inner
            .lock()
            .compute_slice_statistics(axis, slice_position, thickness)
    }

    /// Run `f` with shared access to the engine under the lock.
    pub fn with_engine<R>(&self, f: impl FnOnce(&SamplingEngine) -> R) -> R {
        f(&self.inner.lock())
    }
}

impl From<SamplingEngine> for SharedEngine {
    fn from(engine: SamplingEngine) -> Self {
        Self::new(engine)
    }
}
