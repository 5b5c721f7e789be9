//! Homogeneous frame construction from XYZ + Euler/Tait-Bryan poses.
//!
//! A pose is six numbers `[cx, cy, cz, ax, ay, az]`: a translation followed
//! by three angles in radians. Together with one of twelve rotation orders
//! it maps to a 4×4 homogeneous transform
//!
//! ```text
//! T(cx, cy, cz) · R_order[0](ax) · R_order[1](ay) · R_order[2](az)
//! ```
//!
//! Angles bind to order slots by position, not by axis name: under `zyx`
//! the first angle rotates about Z.
//!
//! # Entry points
//!
//! - [`frame`]: flat slice and order token, defaults for missing inputs
//! - [`FrameBuilder`]: same, with configurable [`FrameSettings`]
//! - [`compose`]: typed [`Pose`] and [`RotationOrder`], infallible
//!
//! # Example
//!
//! ```rust
//! use pl3xus_frames::{compose, frame, Pose, RotationOrder};
//! use std::f64::consts::FRAC_PI_2;
//!
//! let m = frame(Some(&[100.0, 0.0, 0.0, 0.0, 0.0, FRAC_PI_2][..]), Some("zyx")).unwrap();
//! assert_eq!(m[(0, 3)], 100.0);
//!
//! let pose = Pose::new(100.0, 0.0, 0.0, 0.0, 0.0, FRAC_PI_2);
//! assert_eq!(compose(&pose, RotationOrder::Zyx), m);
//! ```

pub mod builder;
pub mod error;
pub mod frame;
pub mod order;
pub mod pose;

pub use builder::{AngleUnit, FrameBuilder, FrameSettings};
pub use error::{FrameError, Result};
pub use frame::{compose, frame_to_isometry, translation_matrix};
pub use order::{Axis, RotationOrder};
pub use pose::{POSE_LEN, Pose};

use nalgebra::Matrix4;

/// Build a frame with default settings.
///
/// Shorthand for `FrameBuilder::default().build(pose, order)`.
pub fn frame(pose: Option<&[f64]>, order: Option<&str>) -> Result<Matrix4<f64>> {
    FrameBuilder::default().build(pose, order)
}
