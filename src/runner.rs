//! Target-driven run controller.
//!
//! Drives a [`SamplingEngine`] toward a configured point count in fixed-size
//! batches, clamping the final batch so the target is never overshot. This
//! is the loop a GUI timer or headless driver calls once per tick.

use serde::{Deserialize, Serialize};
use std::time::{Duration, Instant};
use tracing::{debug, info};
use validator::Validate;

use crate::config::SimConfig;
use crate::engine::{Batch, EstimateSummary, SamplingEngine, SliceParams, SliceStatistics};
use crate::error::SimResult;

/// Outcome of a completed (or interrupted) run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RunReport {
    /// Run name from the configuration.
    pub name: String,
    /// Volumetric estimate.
    pub summary: EstimateSummary,
    /// Slice parameters used for `slice`.
    pub slice_params: SliceParams,
    /// Slice statistics at the end of the run.
    pub slice: SliceStatistics,
    /// Whether `slice` passes the configured display gate.
    pub slice_reportable: bool,
    /// Expected slab population `total · Δ / 2`.
    pub expected_slice_count: f64,
    /// Target point count.
    pub target_points: u64,
    /// Batches drawn.
    pub batches: u64,
    /// Wall-clock time spent drawing batches, in seconds.
    pub elapsed_secs: f64,
}

/// Batch loop over one engine.
#[derive(Debug)]
pub struct SimulationRun {
    config: SimConfig,
    slice_params: SliceParams,
    engine: SamplingEngine,
    batches: u64,
    elapsed: Duration,
}

impl SimulationRun {
    /// Create a run from a validated configuration and reset its engine.
    ///
    /// # Errors
    ///
    /// Returns an error if the run sizes are zero or the slice section is
    /// unusable.
    pub fn new(config: SimConfig) -> SimResult<Self> {
        config.validate()?;
        config.validate_semantic()?;
        let slice_params = config.slice_params()?;
        let mut run = Self {
            config,
            slice_params,
            engine: SamplingEngine::new(),
            batches: 0,
            elapsed: Duration::ZERO,
        };
        run.start();
        Ok(run)
    }

    /// Reset the engine with the configured seed and clear run counters.
    pub fn start(&mut self) {
        let seed = self.config.reproducibility.seed;
        self.engine.reset(seed);
        self.batches = 0;
        self.elapsed = Duration::ZERO;
        info!(
            ?seed,
            target = self.config.run.target_points,
            batch_size = self.config.run.batch_size,
            "run started"
        );
    }

    /// Draw the next batch, clamped to the remaining points.
    ///
    /// Returns `None` once the target is reached; nothing is drawn then.
    pub fn step(&mut self) -> Option<Batch> {
        let remaining = self.remaining();
        if remaining == 0 {
            return None;
        }
        let k = self.config.run.batch_size.min(remaining);
        let k = usize::try_from(k).unwrap_or(usize::MAX);

        let started = Instant::now();
        let batch = self.engine.next_batch(k);
        self.elapsed += started.elapsed();
        self.batches += 1;

        debug!(
            batch = self.batches,
            size = batch.len(),
            total = self.engine.total_count(),
            pi_3d = self.engine.pi_3d_estimate(),
            "batch drawn"
        );

        if self.is_complete() {
            info!(
                total = self.engine.total_count(),
                pi_3d = self.engine.pi_3d_estimate(),
                abs_err = self.engine.absolute_error_3d(),
                "run complete"
            );
        }
        Some(batch)
    }

    /// Step until the target is reached and report.
    pub fn run_to_completion(&mut self) -> RunReport {
        while self.step().is_some() {}
        self.report()
    }

    /// Points still to draw.
    #[must_use]
    pub fn remaining(&self) -> u64 {
        self.config
            .run
            .target_points
            .saturating_sub(self.engine.total_count())
    }

    /// Whether the target has been reached.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.remaining() == 0
    }

    /// Progress toward the target, in percent.
    #[must_use]
    pub fn progress(&self) -> f64 {
        let target = self.config.run.target_points;
        if target == 0 {
            return 100.0;
        }
        (100.0 * self.engine.total_count() as f64 / target as f64).min(100.0)
    }

    /// Slice statistics for the configured plane.
    #[must_use]
    pub fn slice_statistics(&self) -> SliceStatistics {
        self.engine.slice_statistics(&self.slice_params)
    }

    /// Snapshot of the current state.
    #[must_use]
    pub fn report(&self) -> RunReport {
        let slice = self.slice_statistics();
        let gate = &self.config.slice;
        RunReport {
            name: self.config.simulation.name.clone(),
            summary: self.engine.summary(),
            slice_params: self.slice_params,
            slice,
            slice_reportable: slice.is_reportable(gate.min_slice_count, gate.min_radius),
            expected_slice_count: self.engine.expected_slice_count(self.slice_params.thickness),
            target_points: self.config.run.target_points,
            batches: self.batches,
            elapsed_secs: self.elapsed.as_secs_f64(),
        }
    }

    /// The underlying engine.
    #[must_use]
    pub const fn engine(&self) -> &SamplingEngine {
        &self.engine
    }

    /// The run configuration.
    #[must_use]
    pub const fn config(&self) -> &SimConfig {
        &self.config
    }
}
