//! Core sampling engine.
//!
//! Implements the stateful π accumulator with:
//! - Deterministic RNG (PCG-64, optionally entropy-seeded)
//! - Batched generation with running aggregates
//! - Full point history for export and slice queries
//!
//! # Governing Equations
//!
//! ```text
//! Cube volume:      8
//! Sphere volume:    4π/3
//! P(inside):        π/6
//! Estimator:        π̂₃D = 6 · inside / total
//! ```

pub mod guard;
pub mod point;
pub mod rng;
pub mod shared;
pub mod slice;

use serde::{Deserialize, Serialize};
use tracing::debug;

pub use point::{Axis, Point3, PointRecord};
pub use rng::SimRng;
pub use shared::SharedEngine;
pub use slice::{SliceParams, SliceProjection, SliceStatistics};

use crate::error::SimResult;

/// 95% normal quantile used for confidence intervals.
const Z_95: f64 = 1.96;

/// Points and classifications produced by one [`SamplingEngine::next_batch`] call.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Batch {
    /// New points in generation order.
    pub points: Vec<Point3>,
    /// Index-aligned sphere membership of `points`.
    pub classifications: Vec<bool>,
}

impl Batch {
    /// Number of points in the batch.
    #[must_use]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Whether the batch is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Number of batch points inside the sphere.
    #[must_use]
    pub fn inside_count(&self) -> u64 {
        self.classifications.iter().filter(|&&c| c).count() as u64
    }
}

/// Snapshot of the volumetric estimate.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EstimateSummary {
    /// Seed of the current run, if any.
    pub seed: Option<u64>,
    /// Total points drawn.
    pub total: u64,
    /// Points inside the sphere.
    pub inside: u64,
    /// Points outside the sphere.
    pub outside: u64,
    /// π̂₃D.
    pub pi_3d_estimate: f64,
    /// |π̂₃D - π|.
    pub absolute_error_3d: f64,
    /// Binomial standard error of π̂₃D.
    pub std_error: f64,
    /// 95% confidence interval (estimate ± 1.96 * `std_error`).
    pub confidence_interval: (f64, f64),
}

impl EstimateSummary {
    /// Check if value is within the confidence interval.
    #[must_use]
    pub fn contains(&self, value: f64) -> bool {
        value >= self.confidence_interval.0 && value <= self.confidence_interval.1
    }
}

/// Monte Carlo π accumulator over the cube `[-1, 1]³`.
///
/// Owns the generator and the full history. Only [`reset`](Self::reset) and
/// [`next_batch`](Self::next_batch) mutate; every other method is a pure read.
#[derive(Debug, Clone, Default)]
pub struct SamplingEngine {
    /// Generator, `None` until the first reset or batch.
    rng: Option<SimRng>,
    /// Seed passed to the last reset.
    seed: Option<u64>,
    /// Every generated point in order.
    points: Vec<Point3>,
    /// Index-aligned sphere membership.
    classifications: Vec<bool>,
    /// Running inside count.
    inside: u64,
}

impl SamplingEngine {
    /// Create an empty engine with no generator.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an engine already reset with `seed`.
    #[must_use]
    pub fn with_seed(seed: u64) -> Self {
        let mut engine = Self::new();
        engine.reset(Some(seed));
        engine
    }

    /// Clear history and aggregates, then re-seed the generator.
    ///
    /// `None` seeds from OS entropy; the effective seed is not recorded.
    pub fn reset(&mut self, seed: Option<u64>) {
        self.seed = seed;
        self.rng = Some(SimRng::from_seed_option(seed));
        self.points.clear();
        self.classifications.clear();
        self.inside = 0;
        debug!(?seed, "sampling engine reset");
    }

    /// Draw `k` points uniformly from `[-1, 1]³`, classify and append them.
    ///
    /// Returns only the new points. `k == 0` changes nothing.
    pub fn next_batch(&mut self, k: usize) -> Batch {
        if k == 0 {
            return Batch::default();
        }

        // A never-reset engine is already empty, so seeding is all reset(None) would do.
        let rng = self.rng.get_or_insert_with(SimRng::from_entropy);

        let mut points = Vec::with_capacity(k);
        let mut classifications = Vec::with_capacity(k);
        let mut batch_inside = 0u64;
        for _ in 0..k {
            let point = rng.sample_cube_point();
            let inside = point.in_unit_sphere();
            batch_inside += u64::from(inside);
            points.push(point);
            classifications.push(inside);
        }

        self.points.extend_from_slice(&points);
        self.classifications.extend_from_slice(&classifications);
        self.inside += batch_inside;

        Batch {
            points,
            classifications,
        }
    }

    /// [`next_batch`](Self::next_batch) for signed, caller-supplied sizes.
    ///
    /// # Errors
    ///
    /// Returns [`SimError::InvalidParameter`](crate::SimError::InvalidParameter)
    /// if `k` is negative.
    pub fn next_batch_checked(&mut self, k: i64) -> SimResult<Batch> {
        let k = guard::check_batch_size(k)?;
        Ok(self.next_batch(k))
    }

    /// Seed passed to the last reset.
    #[must_use]
    pub const fn seed(&self) -> Option<u64> {
        self.seed
    }

    /// Points inside the sphere.
    #[must_use]
    pub const fn inside_count(&self) -> u64 {
        self.inside
    }

    /// Points outside the sphere.
    #[must_use]
    pub fn outside_count(&self) -> u64 {
        self.total_count() - self.inside
    }

    /// Total points drawn since the last reset.
    #[must_use]
    pub fn total_count(&self) -> u64 {
        self.points.len() as u64
    }

    /// Current volumetric estimate, 0 with no samples.
    #[must_use]
    pub fn pi_3d_estimate(&self) -> f64 {
        let total = self.total_count();
        if total == 0 {
            return 0.0;
        }
        6.0 * self.inside as f64 / total as f64
    }

    /// `|π̂₃D - π|`.
    #[must_use]
    pub fn absolute_error_3d(&self) -> f64 {
        (self.pi_3d_estimate() - std::f64::consts::PI).abs()
    }

    /// Binomial standard error of π̂₃D, 0 with no samples.
    #[must_use]
    pub fn standard_error_3d(&self) -> f64 {
        let total = self.total_count();
        if total == 0 {
            return 0.0;
        }
        let p = self.inside as f64 / total as f64;
        6.0 * (p * (1.0 - p) / total as f64).sqrt()
    }

    /// Full point history in generation order.
    #[must_use]
    pub fn all_points(&self) -> &[Point3] {
        &self.points
    }

    /// Full classification history, index-aligned with [`all_points`](Self::all_points).
    #[must_use]
    pub fn all_classifications(&self) -> &[bool] {
        &self.classifications
    }

    /// Export rows `x, y, z, in_sphere` in generation order.
    pub fn point_records(&self) -> impl Iterator<Item = PointRecord> + '_ {
        self.points
            .iter()
            .zip(&self.classifications)
            .map(|(&p, &inside)| PointRecord::new(p, inside))
    }

    /// Snapshot of the volumetric estimate.
    #[must_use]
    pub fn summary(&self) -> EstimateSummary {
        let estimate = self.pi_3d_estimate();
        let std_error = self.standard_error_3d();
        let half = Z_95 * std_error;
        EstimateSummary {
            seed: self.seed,
            total: self.total_count(),
            inside: self.inside,
            outside: self.outside_count(),
            pi_3d_estimate: estimate,
            absolute_error_3d: self.absolute_error_3d(),
            std_error,
            confidence_interval: (estimate - half, estimate + half),
        }
    }

    /// Slice statistics recomputed over the full history.
    ///
    /// Tangent or missing planes and empty slabs yield zero statistics.
    ///
    /// # Errors
    ///
    /// Returns an error if `slice_position` is not finite, or `thickness` is
    /// not finite or not positive.
    pub fn compute_slice_statistics(
        &self,
        axis: Axis,
        slice_position: f64,
        thickness: f64,
    ) -> SimResult<SliceStatistics> {
        let params = SliceParams::new(axis, slice_position, thickness)?;
        Ok(self.slice_statistics(&params))
    }

    /// Slice statistics for already validated parameters.
    #[must_use]
    pub fn slice_statistics(&self, params: &SliceParams) -> SliceStatistics {
        slice::compute(&self.points, params)
    }

    /// Slab points projected onto the slice plane, split by 3D classification.
    #[must_use]
    pub fn slice_projection(&self, params: &SliceParams) -> SliceProjection {
        slice::project(&self.points, &self.classifications, params)
    }

    /// Expected slab population `total · Δ / 2` for a slab inside the cube.
    #[must_use]
    pub fn expected_slice_count(&self, thickness: f64) -> f64 {
        self.total_count() as f64 * thickness.clamp(0.0, 2.0) / 2.0
    }
}
