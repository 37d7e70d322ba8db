//! # pisim
//!
//! Monte Carlo estimation of π from a unit sphere inscribed in the cube
//! `[-1, 1]³`.
//!
//! Points are drawn uniformly in the cube and classified by sphere
//! membership. Two estimates are maintained:
//! - Volumetric: `π₃D = 6 · inside / total`
//! - Planar slice: `π₂D = 4 · I / (T · r²)` over a thin slab around a plane
//!
//! Runs are reproducible: a fixed seed replays the exact same point
//! sequence, regardless of how it is split into batches.
//!
//! ## Example
//!
//! ```rust
//! use pisim::prelude::*;
//!
//! let mut engine = SamplingEngine::with_seed(42);
//! engine.next_batch(10_000);
//!
//! let pi = engine.pi_3d_estimate();
//! assert!((pi - std::f64::consts::PI).abs() < 0.2);
//!
//! let slice = engine
//!     .compute_slice_statistics(Axis::Z, 0.0, 0.05)
//!     .expect("valid slice");
//! assert!(slice.slice_total > 0);
//! ```

#![forbid(unsafe_code)]
#![deny(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![warn(clippy::pedantic, clippy::nursery)]
#![allow(
    clippy::module_name_repetitions,
    clippy::similar_names,
    clippy::cast_precision_loss,
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    clippy::suboptimal_flops,
    clippy::missing_const_for_fn,
)]

pub mod cli;
pub mod config;
pub mod engine;
pub mod error;
pub mod logging;
pub mod runner;

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::config::{SimConfig, SimConfigBuilder};
    pub use crate::engine::{
        Axis, Batch, EstimateSummary, Point3, PointRecord, SamplingEngine, SharedEngine, SimRng,
        SliceParams, SliceProjection, SliceStatistics,
    };
    pub use crate::error::{SimError, SimResult};
    pub use crate::runner::{RunReport, SimulationRun};
}

/// Re-export for public API
pub use error::{SimError, SimResult};
