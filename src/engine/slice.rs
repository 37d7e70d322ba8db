//! Planar slice statistics.
//!
//! # Governing Equations
//!
//! ```text
//! Slice circle:   r(s)² = 1 - s²
//! Slab:           |A - s| ≤ Δ/2
//! Estimator:      π̂₂D = 4 · I / (T · r²)
//! ```
//!
//! where `T` is the slab population and `I` the number of projected slab
//! points inside the circle. The estimator assumes `Δ` is small enough that
//! `r(A)` barely varies across the slab; that choice belongs to the caller.

use serde::{Deserialize, Serialize};

use super::guard::{check_finite, check_positive};
use super::point::{Axis, Point3};
use crate::error::SimResult;

/// Validated slice parameters.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SliceParams {
    /// Axis perpendicular to the slice plane.
    pub axis: Axis,
    /// Plane position `s` along `axis`.
    pub position: f64,
    /// Slab thickness `Δ`.
    pub thickness: f64,
}

impl SliceParams {
    /// Create slice parameters.
    ///
    /// Positions outside `[-1, 1]` are accepted; they produce zero statistics.
    ///
    /// # Errors
    ///
    /// Returns an error if `position` is not finite, or `thickness` is not
    /// finite or not positive.
    pub fn new(axis: Axis, position: f64, thickness: f64) -> SimResult<Self> {
        Ok(Self {
            axis,
            position: check_finite("slice_position", position)?,
            thickness: check_positive("thickness", thickness)?,
        })
    }

    /// Squared radius of the slice circle, `1 - s²` (may be `<= 0`).
    #[must_use]
    pub fn radius_squared(&self) -> f64 {
        1.0 - self.position * self.position
    }

    /// Whether `point` falls in the slab, boundary inclusive.
    #[must_use]
    pub fn contains(&self, point: &Point3) -> bool {
        (self.axis.coordinate(point) - self.position).abs() <= self.thickness / 2.0
    }
}

/// Result of a slice query.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct SliceStatistics {
    /// Points in the slab.
    pub slice_total: u64,
    /// Slab points whose projection lies inside the slice circle.
    pub slice_inside: u64,
    /// Planar π estimate, 0 when not computable.
    pub pi_2d_estimate: f64,
    /// `|pi_2d_estimate - π|`, 0 when not computable.
    pub absolute_error_2d: f64,
    /// Slice circle radius, 0 when not computable.
    pub radius: f64,
}

impl SliceStatistics {
    /// The zero result for empty history, tangent planes and empty slabs.
    pub const EMPTY: Self = Self {
        slice_total: 0,
        slice_inside: 0,
        pi_2d_estimate: 0.0,
        absolute_error_2d: 0.0,
        radius: 0.0,
    };

    /// Whether a 2D estimate was produced.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.slice_total == 0
    }

    /// Whether the estimate is trustworthy enough to display.
    ///
    /// Requires at least `min_count` slab points and `r(s) >= min_radius`.
    #[must_use]
    pub fn is_reportable(&self, min_count: u64, min_radius: f64) -> bool {
        !self.is_empty() && self.slice_total >= min_count && self.radius >= min_radius
    }

    /// `(slice_total, slice_inside, pi_2d_estimate, absolute_error_2d)`.
    #[must_use]
    pub const fn as_tuple(&self) -> (u64, u64, f64, f64) {
        (
            self.slice_total,
            self.slice_inside,
            self.pi_2d_estimate,
            self.absolute_error_2d,
        )
    }
}

/// Compute slice statistics from scratch over `points`.
#[must_use]
pub fn compute(points: &[Point3], params: &SliceParams) -> SliceStatistics {
    if points.is_empty() {
        return SliceStatistics::EMPTY;
    }

    let r_squared = params.radius_squared();
    if r_squared <= 0.0 {
        // Tangent or missing plane: no circle to sample.
        return SliceStatistics::EMPTY;
    }

    let mut slice_total = 0u64;
    let mut slice_inside = 0u64;
    for point in points.iter().filter(|p| params.contains(p)) {
        slice_total += 1;
        let (u, v) = params.axis.project(point);
        if u * u + v * v <= r_squared {
            slice_inside += 1;
        }
    }

    if slice_total == 0 {
        return SliceStatistics::EMPTY;
    }

    let pi_2d_estimate = 4.0 * slice_inside as f64 / (slice_total as f64 * r_squared);
    SliceStatistics {
        slice_total,
        slice_inside,
        pi_2d_estimate,
        absolute_error_2d: (pi_2d_estimate - std::f64::consts::PI).abs(),
        radius: r_squared.sqrt(),
    }
}

/// Slab points projected onto the slice plane, split by 3D classification.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SliceProjection {
    /// Projected slab points inside the unit sphere.
    pub inside: Vec<(f64, f64)>,
    /// Projected slab points outside the unit sphere.
    pub outside: Vec<(f64, f64)>,
}

impl SliceProjection {
    /// Total projected points.
    #[must_use]
    pub fn len(&self) -> usize {
        self.inside.len() + self.outside.len()
    }

    /// Whether the slab is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.inside.is_empty() && self.outside.is_empty()
    }
}

/// Project the slab of `points` onto the slice plane.
///
/// Unlike [`compute`], this does not require the plane to cut the sphere.
#[must_use]
pub fn project(
    points: &[Point3],
    classifications: &[bool],
    params: &SliceParams,
) -> SliceProjection {
    let mut projection = SliceProjection::default();
    for (point, &inside) in points.iter().zip(classifications) {
        if !params.contains(point) {
            continue;
        }
        let uv = params.axis.project(point);
        if inside {
            projection.inside.push(uv);
        } else {
            projection.outside.push(uv);
        }
    }
    projection
}

#[cfg(test)]
mod tests {
    use super::*;

    fn params(axis: Axis, position: f64, thickness: f64) -> SliceParams {
        SliceParams::new(axis, position, thickness).expect("valid params")
    }

    #[test]
    fn test_params_reject_non_finite() {
        assert!(SliceParams::new(Axis::Z, f64::NAN, 0.1).is_err());
        assert!(SliceParams::new(Axis::Z, 0.0, f64::INFINITY).is_err());
        assert!(SliceParams::new(Axis::Z, 0.0, 0.0).is_err());
        assert!(SliceParams::new(Axis::Z, 0.0, -0.1).is_err());
    }

    #[test]
    fn test_params_accept_out_of_range_position() {
        let p = params(Axis::Z, 1.5, 0.1);
        assert!(p.radius_squared() < 0.0);
    }

    #[test]
    fn test_slab_boundary_inclusive() {
        let p = params(Axis::X, 0.0, 0.5);
        assert!(p.contains(&Point3::new(0.25, 0.9, 0.9)));
        assert!(p.contains(&Point3::new(-0.25, 0.0, 0.0)));
        assert!(!p.contains(&Point3::new(0.2500001, 0.0, 0.0)));
    }

    #[test]
    fn test_empty_points() {
        let stats = compute(&[], &params(Axis::Z, 0.0, 0.1));
        assert_eq!(stats, SliceStatistics::EMPTY);
    }

    #[test]
    fn test_tangent_plane_is_empty() {
        let points = [Point3::new(0.0, 0.0, 1.0), Point3::new(0.0, 0.0, 0.99)];
        let stats = compute(&points, &params(Axis::Z, 1.0, 0.1));
        assert_eq!(stats.as_tuple(), (0, 0, 0.0, 0.0));
    }

    #[test]
    fn test_outside_plane_is_empty() {
        let points = [Point3::new(0.0, 0.0, 0.0)];
        let stats = compute(&points, &params(Axis::Z, -1.5, 4.0));
        assert!(stats.is_empty());
    }

    #[test]
    fn test_empty_slab() {
        let points = [Point3::new(0.0, 0.0, 0.9)];
        let stats = compute(&points, &params(Axis::Z, 0.0, 0.1));
        assert_eq!(stats, SliceStatistics::EMPTY);
    }

    #[test]
    fn test_hand_computed_estimate() {
        // Slab around z = 0.6, r² = 0.64.
        let points = [
            Point3::new(0.0, 0.0, 0.6),   // inside circle
            Point3::new(0.5, 0.5, 0.61),  // inside circle
            Point3::new(0.9, 0.9, 0.59),  // outside circle
            Point3::new(0.1, 0.1, -0.6),  // not in slab
        ];
        let stats = compute(&points, &params(Axis::Z, 0.6, 0.1));
        assert_eq!(stats.slice_total, 3);
        assert_eq!(stats.slice_inside, 2);
        let expected = 4.0 * 2.0 / (3.0 * 0.64);
        assert!((stats.pi_2d_estimate - expected).abs() < 1e-12);
        assert!((stats.absolute_error_2d - (expected - std::f64::consts::PI).abs()).abs() < 1e-12);
        assert!((stats.radius - 0.8).abs() < 1e-12);
    }

    #[test]
    fn test_projection_uses_remaining_axes() {
        // Along X the circle test uses (y, z); a large x must not matter.
        let points = [Point3::new(0.0, 0.1, 0.1), Point3::new(0.04, 0.95, 0.95)];
        let stats = compute(&points, &params(Axis::X, 0.0, 0.1));
        assert_eq!(stats.slice_total, 2);
        assert_eq!(stats.slice_inside, 1);
    }

    #[test]
    fn test_is_reportable() {
        let stats = SliceStatistics {
            slice_total: 100,
            slice_inside: 78,
            pi_2d_estimate: 3.12,
            absolute_error_2d: 0.02,
            radius: 1.0,
        };
        assert!(stats.is_reportable(50, 1e-3));
        assert!(!stats.is_reportable(200, 1e-3));
        assert!(!SliceStatistics::EMPTY.is_reportable(0, 0.0));

        let thin = SliceStatistics { radius: 1e-4, ..stats };
        assert!(!thin.is_reportable(50, 1e-3));
    }

    #[test]
    fn test_project_splits_by_classification() {
        let points = [
            Point3::new(0.1, 0.2, 0.0),
            Point3::new(0.9, 0.9, 0.01),
            Point3::new(0.0, 0.0, 0.5),
        ];
        let classifications = [true, false, true];
        let projection = project(&points, &classifications, &params(Axis::Z, 0.0, 0.1));
        assert_eq!(projection.inside, vec![(0.1, 0.2)]);
        assert_eq!(projection.outside, vec![(0.9, 0.9)]);
        assert_eq!(projection.len(), 2);
    }

    #[test]
    fn test_project_ignores_tangent_guard() {
        let points = [Point3::new(0.0, 0.0, 1.0)];
        let projection = project(&points, &[true], &params(Axis::Z, 1.0, 0.1));
        assert_eq!(projection.len(), 1);
    }
}
