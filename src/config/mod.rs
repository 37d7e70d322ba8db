//! Configuration system with YAML schema and validation.
//!
//! Implements Poka-Yoke (mistake-proofing) through:
//! - Type-safe configuration structs
//! - Schema validation via serde and `validator`
//! - Runtime semantic validation
//!
//! # Example
//!
//! ```yaml
//! schema_version: "1.0"
//! reproducibility:
//!   seed: 42
//! run:
//!   target_points: 100000
//!   batch_size: 1000
//! slice:
//!   axis: z
//!   position: 0.0
//!   thickness: 0.05
//! ```

use serde::{Deserialize, Serialize};
use std::path::Path;
use validator::Validate;

use crate::engine::{Axis, SliceParams};
use crate::error::{SimError, SimResult};

/// Top-level run configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
#[serde(deny_unknown_fields)]
pub struct SimConfig {
    /// Schema version for forward compatibility.
    #[validate(length(min = 1))]
    #[serde(default = "default_schema_version")]
    pub schema_version: String,

    /// Run metadata.
    #[serde(default)]
    pub simulation: SimulationMeta,

    /// Reproducibility settings.
    #[serde(default)]
    pub reproducibility: ReproducibilityConfig,

    /// Target and batch sizing.
    #[validate(nested)]
    #[serde(default)]
    pub run: RunConfig,

    /// Slice plane and display gate.
    #[validate(nested)]
    #[serde(default)]
    pub slice: SliceConfig,
}

fn default_schema_version() -> String {
    "1.0".to_string()
}

impl SimConfig {
    /// Load configuration from a YAML file.
    ///
    /// # Errors
    ///
    /// Returns error if:
    /// - File cannot be read
    /// - YAML parsing fails
    /// - Validation fails
    pub fn load<P: AsRef<Path>>(path: P) -> SimResult<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_yaml(&content)
    }

    /// Parse configuration from YAML string.
    ///
    /// # Errors
    ///
    /// Returns error if parsing or validation fails.
    pub fn from_yaml(yaml: &str) -> SimResult<Self> {
        let config: Self = serde_yaml::from_str(yaml)?;

        // Poka-Yoke: validate all constraints
        config.validate()?;
        config.validate_semantic()?;

        Ok(config)
    }

    /// Serialize to YAML.
    ///
    /// # Errors
    ///
    /// Returns error if serialization fails.
    pub fn to_yaml(&self) -> SimResult<String> {
        Ok(serde_yaml::to_string(self)?)
    }

    /// Create a builder for configuration.
    #[must_use]
    pub fn builder() -> SimConfigBuilder {
        SimConfigBuilder::default()
    }

    /// Validate semantic constraints beyond schema.
    ///
    /// # Errors
    ///
    /// Returns error if the slice parameters are unusable.
    pub fn validate_semantic(&self) -> SimResult<()> {
        if !self.slice.thickness.is_finite() || self.slice.thickness <= 0.0 {
            return Err(SimError::config(format!(
                "Slice thickness must be positive, got {}",
                self.slice.thickness
            )));
        }
        if !self.slice.position.is_finite() {
            return Err(SimError::config("Slice position must be finite"));
        }
        Ok(())
    }

    /// Slice parameters for the engine.
    ///
    /// # Errors
    ///
    /// Returns error if the slice section holds non-finite values.
    pub fn slice_params(&self) -> SimResult<SliceParams> {
        SliceParams::new(self.slice.axis, self.slice.position, self.slice.thickness)
    }
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            schema_version: default_schema_version(),
            simulation: SimulationMeta::default(),
            reproducibility: ReproducibilityConfig::default(),
            run: RunConfig::default(),
            slice: SliceConfig::default(),
        }
    }
}

/// Configuration builder for programmatic construction.
#[derive(Debug, Default)]
pub struct SimConfigBuilder {
    seed: Option<u64>,
    target_points: Option<u64>,
    batch_size: Option<u64>,
    slice: Option<SliceConfig>,
}

impl SimConfigBuilder {
    /// Set the random seed.
    #[must_use]
    pub const fn seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Set the target point count.
    #[must_use]
    pub const fn target_points(mut self, target: u64) -> Self {
        self.target_points = Some(target);
        self
    }

    /// Set the batch size.
    #[must_use]
    pub const fn batch_size(mut self, batch: u64) -> Self {
        self.batch_size = Some(batch);
        self
    }

    /// Set slice plane axis, position and thickness.
    #[must_use]
    pub fn slice(mut self, axis: Axis, position: f64, thickness: f64) -> Self {
        self.slice = Some(SliceConfig {
            axis,
            position,
            thickness,
            ..SliceConfig::default()
        });
        self
    }

    /// Build the configuration.
    #[must_use]
    pub fn build(self) -> SimConfig {
        let mut config = SimConfig::default();

        if let Some(seed) = self.seed {
            config.reproducibility.seed = Some(seed);
        }
        if let Some(target) = self.target_points {
            config.run.target_points = target;
        }
        if let Some(batch) = self.batch_size {
            config.run.batch_size = batch;
        }
        if let Some(slice) = self.slice {
            config.slice = slice;
        }

        config
    }
}

/// Run metadata.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SimulationMeta {
    /// Run name.
    #[serde(default)]
    pub name: String,
    /// Description.
    #[serde(default)]
    pub description: String,
}

/// Reproducibility settings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReproducibilityConfig {
    /// Seed for the engine; absent means entropy seeding.
    #[serde(default)]
    pub seed: Option<u64>,
}

/// Target and batch sizing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate)]
pub struct RunConfig {
    /// Stop once this many points have been drawn.
    #[validate(range(min = 1))]
    #[serde(default = "default_target_points")]
    pub target_points: u64,
    /// Points per batch (the last batch is clamped to the target).
    #[validate(range(min = 1))]
    #[serde(default = "default_batch_size")]
    pub batch_size: u64,
}

const fn default_target_points() -> u64 {
    100_000
}

const fn default_batch_size() -> u64 {
    1_000
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            target_points: default_target_points(),
            batch_size: default_batch_size(),
        }
    }
}

/// Slice plane and the gate for displaying its estimate.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
pub struct SliceConfig {
    /// Axis perpendicular to the plane.
    #[serde(default)]
    pub axis: Axis,
    /// Plane position along `axis`.
    #[validate(range(min = -1.0, max = 1.0))]
    #[serde(default)]
    pub position: f64,
    /// Slab thickness.
    #[validate(range(max = 2.0))]
    #[serde(default = "default_thickness")]
    pub thickness: f64,
    /// Minimum slab population before a 2D estimate is shown.
    #[serde(default = "default_min_slice_count")]
    pub min_slice_count: u64,
    /// Minimum circle radius before a 2D estimate is shown.
    #[validate(range(min = 0.0))]
    #[serde(default = "default_min_radius")]
    pub min_radius: f64,
}

const fn default_thickness() -> f64 {
    0.05
}

const fn default_min_slice_count() -> u64 {
    50
}

const fn default_min_radius() -> f64 {
    1e-3
}

impl Default for SliceConfig {
    fn default() -> Self {
        Self {
            axis: Axis::default(),
            position: 0.0,
            thickness: default_thickness(),
            min_slice_count: default_min_slice_count(),
            min_radius: default_min_radius(),
        }
    }
}
