//! Sample points, axes and export records.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::SimError;

/// A sample point in the cube `[-1, 1]³`.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point3 {
    /// X coordinate.
    pub x: f64,
    /// Y coordinate.
    pub y: f64,
    /// Z coordinate.
    pub z: f64,
}

impl Point3 {
    /// Create a point from its coordinates.
    #[must_use]
    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    /// Squared Euclidean norm `x² + y² + z²`.
    #[must_use]
    pub fn norm_squared(&self) -> f64 {
        self.x * self.x + self.y * self.y + self.z * self.z
    }

    /// Whether the point lies in the closed unit ball.
    #[must_use]
    pub fn in_unit_sphere(&self) -> bool {
        self.norm_squared() <= 1.0
    }

    /// Coordinates as an array in x, y, z order.
    #[must_use]
    pub const fn to_array(self) -> [f64; 3] {
        [self.x, self.y, self.z]
    }
}

impl From<[f64; 3]> for Point3 {
    fn from([x, y, z]: [f64; 3]) -> Self {
        Self::new(x, y, z)
    }
}

/// Axis perpendicular to a slice plane.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Axis {
    /// X axis; the plane keeps (Y, Z).
    X,
    /// Y axis; the plane keeps (X, Z).
    Y,
    /// Z axis; the plane keeps (X, Y).
    #[default]
    Z,
}

impl Axis {
    /// All axes in index order.
    pub const ALL: [Self; 3] = [Self::X, Self::Y, Self::Z];

    /// Index of this axis (X=0, Y=1, Z=2).
    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            Self::X => 0,
            Self::Y => 1,
            Self::Z => 2,
        }
    }

    /// Coordinate of `point` along this axis.
    #[must_use]
    pub const fn coordinate(self, point: &Point3) -> f64 {
        match self {
            Self::X => point.x,
            Self::Y => point.y,
            Self::Z => point.z,
        }
    }

    /// Drop this axis' coordinate, keeping the other two in original order.
    #[must_use]
    pub const fn project(self, point: &Point3) -> (f64, f64) {
        match self {
            Self::X => (point.y, point.z),
            Self::Y => (point.x, point.z),
            Self::Z => (point.x, point.y),
        }
    }
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::X => "X",
            Self::Y => "Y",
            Self::Z => "Z",
        };
        f.write_str(name)
    }
}

impl TryFrom<usize> for Axis {
    type Error = SimError;

    fn try_from(index: usize) -> Result<Self, Self::Error> {
        match index {
            0 => Ok(Self::X),
            1 => Ok(Self::Y),
            2 => Ok(Self::Z),
            other => Err(SimError::invalid_parameter(
                "axis",
                format!("index must be 0, 1 or 2, got {other}"),
            )),
        }
    }
}

impl FromStr for Axis {
    type Err = SimError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "x" | "0" => Ok(Self::X),
            "y" | "1" => Ok(Self::Y),
            "z" | "2" => Ok(Self::Z),
            other => Err(SimError::invalid_parameter(
                "axis",
                format!("expected x, y or z, got '{other}'"),
            )),
        }
    }
}

/// One row of the point export table: `x, y, z, in_sphere`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PointRecord {
    /// X coordinate.
    pub x: f64,
    /// Y coordinate.
    pub y: f64,
    /// Z coordinate.
    pub z: f64,
    /// 1 if the point is inside the unit sphere, else 0.
    pub in_sphere: u8,
}

impl PointRecord {
    /// Build a record from a point and its classification.
    #[must_use]
    pub const fn new(point: Point3, inside: bool) -> Self {
        Self {
            x: point.x,
            y: point.y,
            z: point.z,
            in_sphere: inside as u8,
        }
    }
}
