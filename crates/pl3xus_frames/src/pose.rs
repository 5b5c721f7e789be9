//! Six-parameter pose: translation plus three slot-bound angles.

use nalgebra::{Isometry3, Vector3};
use serde::{Deserialize, Serialize};

use crate::error::{FrameError, Result};
use crate::frame::{compose, frame_to_isometry};
use crate::order::RotationOrder;

/// Number of values in a flat pose `[cx, cy, cz, ax, ay, az]`.
pub const POSE_LEN: usize = 6;

/// Translation and rotation angles of a frame.
///
/// Angles are in radians. `angles[i]` rotates about the `i`-th axis of the
/// order the pose is composed with, so the same pose means different things
/// under `xyz` and `zyx`.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Pose {
    /// Offsets (cx, cy, cz) in linear units
    pub translation: Vector3<f64>,

    /// Angles (ax, ay, az) in radians, one per order slot
    pub angles: Vector3<f64>,
}

impl Pose {
    pub fn new(cx: f64, cy: f64, cz: f64, ax: f64, ay: f64, az: f64) -> Self {
        Self {
            translation: Vector3::new(cx, cy, cz),
            angles: Vector3::new(ax, ay, az),
        }
    }

    /// All-zero pose, the identity frame.
    pub fn identity() -> Self {
        Self::default()
    }

    /// Create a pose from translation only (zero angles).
    pub fn from_translation(cx: f64, cy: f64, cz: f64) -> Self {
        Self::new(cx, cy, cz, 0.0, 0.0, 0.0)
    }

    /// Create a pose whose angles are given in degrees.
    pub fn from_degrees(cx: f64, cy: f64, cz: f64, ax: f64, ay: f64, az: f64) -> Self {
        Self::new(cx, cy, cz, ax.to_radians(), ay.to_radians(), az.to_radians())
    }

    /// Parse a flat `[cx, cy, cz, ax, ay, az]` slice.
    ///
    /// An empty slice yields the identity pose. Any other length than six is
    /// rejected.
    pub fn from_slice(values: &[f64]) -> Result<Self> {
        match values {
            [] => Ok(Self::identity()),
            [cx, cy, cz, ax, ay, az] => Ok(Self::new(*cx, *cy, *cz, *ax, *ay, *az)),
            _ => Err(FrameError::InvalidPoseShape { len: values.len() }),
        }
    }

    pub fn to_array(&self) -> [f64; POSE_LEN] {
        let t = &self.translation;
        let a = &self.angles;
        [t.x, t.y, t.z, a.x, a.y, a.z]
    }

    /// Rigid transform of this pose under `order`.
    pub fn to_isometry(&self, order: RotationOrder) -> Isometry3<f64> {
        frame_to_isometry(&compose(self, order))
    }
}

impl Default for Pose {
    fn default() -> Self {
        Self {
            translation: Vector3::zeros(),
            angles: Vector3::zeros(),
        }
    }
}

impl From<[f64; POSE_LEN]> for Pose {
    fn from([cx, cy, cz, ax, ay, az]: [f64; POSE_LEN]) -> Self {
        Self::new(cx, cy, cz, ax, ay, az)
    }
}

impl TryFrom<&[f64]> for Pose {
    type Error = FrameError;

    fn try_from(values: &[f64]) -> Result<Self> {
        Self::from_slice(values)
    }
}

impl TryFrom<Vec<f64>> for Pose {
    type Error = FrameError;

    fn try_from(values: Vec<f64>) -> Result<Self> {
        Self::from_slice(&values)
    }
}
