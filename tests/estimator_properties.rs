//! Statistical and geometric properties of the estimators.

use pisim::prelude::*;
use proptest::prelude::*;
use std::f64::consts::PI;

// ============================================================================
// Convergence
// ============================================================================

#[test]
fn test_volumetric_estimate_converges() {
    let mut engine = SamplingEngine::with_seed(42);
    engine.next_batch(1_000_000);
    assert!(
        engine.absolute_error_3d() < 0.01,
        "π₃D = {} after 1M points",
        engine.pi_3d_estimate()
    );
    let summary = engine.summary();
    assert!(summary.confidence_interval.0 < summary.confidence_interval.1);
    assert!(summary.std_error < 0.005);
}

#[test]
fn test_central_slices_agree_across_axes() {
    let mut engine = SamplingEngine::with_seed(2024);
    engine.next_batch(1_000_000);

    for axis in Axis::ALL {
        let stats = engine
            .compute_slice_statistics(axis, 0.0, 0.05)
            .expect("valid slice");
        // E[T] = N·Δ/2 = 25 000
        assert!(
            (stats.slice_total as f64 - 25_000.0).abs() < 1_000.0,
            "{axis}: slab holds {} points",
            stats.slice_total
        );
        assert!(
            stats.absolute_error_2d < 0.05,
            "{axis}: π₂D = {}",
            stats.pi_2d_estimate
        );
        assert!((stats.radius - 1.0).abs() < 1e-12);
    }
}

#[test]
fn test_off_center_slice_uses_local_radius() {
    let mut engine = SamplingEngine::with_seed(8);
    engine.next_batch(1_000_000);
    let stats = engine
        .compute_slice_statistics(Axis::Z, 0.6, 0.05)
        .expect("valid slice");
    assert!((stats.radius - 0.8).abs() < 1e-12);
    assert!(stats.absolute_error_2d < 0.1, "π₂D = {}", stats.pi_2d_estimate);
}

// ============================================================================
// Degenerate geometry
// ============================================================================

#[test]
fn test_slice_outside_cube_is_zero() {
    let mut engine = SamplingEngine::with_seed(1);
    engine.next_batch(10_000);
    for position in [1.5, -1.5, 1.0, -1.0] {
        let stats = engine
            .compute_slice_statistics(Axis::X, position, 0.05)
            .expect("finite params");
        assert_eq!(stats.as_tuple(), (0, 0, 0.0, 0.0), "position {position}");
    }
}

#[test]
fn test_slice_before_sampling_is_zero() {
    let engine = SamplingEngine::new();
    let stats = engine
        .compute_slice_statistics(Axis::Z, 0.0, 0.05)
        .expect("valid slice");
    assert!(stats.is_empty());
    assert_eq!(engine.pi_3d_estimate(), 0.0);
}

#[test]
fn test_invalid_inputs_are_rejected() {
    let mut engine = SamplingEngine::with_seed(1);
    assert!(engine.next_batch_checked(-1).is_err());
    assert_eq!(engine.total_count(), 0);
    assert!(engine.compute_slice_statistics(Axis::Z, f64::NAN, 0.05).is_err());
    assert!(engine.compute_slice_statistics(Axis::Z, 0.0, 0.0).is_err());
}

// ============================================================================
// Property-based tests
// ============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn prop_points_stay_in_cube(seed: u64, k in 0usize..2000) {
        let mut engine = SamplingEngine::with_seed(seed);
        let batch = engine.next_batch(k);
        prop_assert_eq!(batch.len(), k);
        for p in &batch.points {
            prop_assert!((-1.0..=1.0).contains(&p.x));
            prop_assert!((-1.0..=1.0).contains(&p.y));
            prop_assert!((-1.0..=1.0).contains(&p.z));
        }
    }

    #[test]
    fn prop_counts_are_consistent(seed: u64, sizes in prop::collection::vec(0usize..500, 0..8)) {
        let mut engine = SamplingEngine::with_seed(seed);
        let mut expected_total = 0u64;
        for k in sizes {
            engine.next_batch(k);
            expected_total += k as u64;
        }
        prop_assert_eq!(engine.total_count(), expected_total);
        prop_assert_eq!(engine.inside_count() + engine.outside_count(), expected_total);
        prop_assert_eq!(engine.all_points().len(), engine.all_classifications().len());

        let mut recount = 0u64;
        for (p, &c) in engine.all_points().iter().zip(engine.all_classifications()) {
            prop_assert_eq!(p.in_unit_sphere(), c);
            recount += u64::from(c);
        }
        prop_assert_eq!(recount, engine.inside_count());
    }

    #[test]
    fn prop_split_equals_single(seed: u64, a in 0usize..300, b in 0usize..300) {
        let mut split = SamplingEngine::with_seed(seed);
        split.next_batch(a);
        split.next_batch(b);
        let mut single = SamplingEngine::with_seed(seed);
        single.next_batch(a + b);
        prop_assert_eq!(split.all_points(), single.all_points());
    }

    #[test]
    fn prop_slice_counts_bounded(
        seed: u64,
        axis_index in 0usize..3,
        position in -1.2f64..1.2,
        thickness in 0.001f64..0.5,
    ) {
        let axis = Axis::try_from(axis_index).expect("valid axis index");
        let mut engine = SamplingEngine::with_seed(seed);
        engine.next_batch(2000);
        let stats = engine
            .compute_slice_statistics(axis, position, thickness)
            .expect("finite params");
        prop_assert!(stats.slice_inside <= stats.slice_total);
        prop_assert!(stats.slice_total <= engine.total_count());
        if stats.slice_total > 0 {
            prop_assert!(stats.pi_2d_estimate >= 0.0);
            let expected_err = (stats.pi_2d_estimate - PI).abs();
            prop_assert!((stats.absolute_error_2d - expected_err).abs() < 1e-12);
        }
        if position.abs() >= 1.0 {
            prop_assert!(stats.is_empty());
        }
    }
}
