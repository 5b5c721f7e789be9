//! Homogeneous frame composition.
//!
//! A frame is `T · M1 · M2 · M3` where `T` carries the pose translation and
//! `Mi` is the elementary rotation about the `i`-th axis of the order,
//! driven by the `i`-th pose angle.

use nalgebra::{Isometry3, Matrix3, Matrix4, Rotation3, Translation3, UnitQuaternion, Vector3};

use crate::order::RotationOrder;
use crate::pose::Pose;

/// Identity with the last column set to `offset`.
pub fn translation_matrix(offset: &Vector3<f64>) -> Matrix4<f64> {
    Matrix4::new_translation(offset)
}

/// Compose the homogeneous frame of `pose` under `order`.
pub fn compose(pose: &Pose, order: RotationOrder) -> Matrix4<f64> {
    let frame = order
        .axes()
        .into_iter()
        .zip(pose.angles.iter())
        .fold(translation_matrix(&pose.translation), |acc, (axis, &angle)| {
            acc * axis.rotation(angle)
        });

    tracing::trace!(
        "Composed frame order={} pose={:?}",
        order,
        pose.to_array()
    );
    frame
}

/// Rigid transform encoded by a frame.
///
/// The rotation block is taken as-is; frames built by [`compose`] are
/// orthonormal up to rounding.
pub fn frame_to_isometry(frame: &Matrix4<f64>) -> Isometry3<f64> {
    let block: Matrix3<f64> = frame.fixed_view::<3, 3>(0, 0).into_owned();
    let rotation = UnitQuaternion::from_rotation_matrix(&Rotation3::from_matrix_unchecked(block));
    let translation = Translation3::new(frame[(0, 3)], frame[(1, 3)], frame[(2, 3)]);
    Isometry3::from_parts(translation, rotation)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::order::Axis;
    use nalgebra::Point3;
    use std::f64::consts::FRAC_PI_2;

    const TOLERANCE: f64 = 1e-10;

    #[test]
    fn test_translation_matrix() {
        let t = translation_matrix(&Vector3::new(1.0, -2.0, 3.5));
        assert_eq!(t[(0, 3)], 1.0);
        assert_eq!(t[(1, 3)], -2.0);
        assert_eq!(t[(2, 3)], 3.5);
        assert_eq!(t.fixed_view::<3, 3>(0, 0).into_owned(), Matrix3::identity());
        assert_eq!(t.row(3).into_owned(), nalgebra::RowVector4::new(0.0, 0.0, 0.0, 1.0));
    }

    #[test]
    fn test_slots_bind_positionally() {
        // zyx: first angle drives Z, last angle drives X
        let pose = Pose::new(0.0, 0.0, 0.0, 0.4, 0.0, 0.0);
        let frame = compose(&pose, RotationOrder::Zyx);
        assert!((frame - Axis::Z.rotation(0.4)).abs().max() < TOLERANCE);

        let pose = Pose::new(0.0, 0.0, 0.0, 0.0, 0.0, 0.4);
        let frame = compose(&pose, RotationOrder::Zyx);
        assert!((frame - Axis::X.rotation(0.4)).abs().max() < TOLERANCE);
    }

    #[test]
    fn test_proper_euler_reuses_axis() {
        // zxz with a zero middle angle collapses to a single Z rotation
        let pose = Pose::new(0.0, 0.0, 0.0, 0.3, 0.0, 0.5);
        let frame = compose(&pose, RotationOrder::Zxz);
        assert!((frame - Axis::Z.rotation(0.8)).abs().max() < TOLERANCE);
    }

    #[test]
    fn test_translation_applied_after_rotation() {
        let pose = Pose::new(10.0, 0.0, 0.0, 0.0, 0.0, FRAC_PI_2);
        let iso = pose.to_isometry(RotationOrder::Xyz);
        let p = iso.transform_point(&Point3::new(1.0, 0.0, 0.0));
        assert!((p.x - 10.0).abs() < TOLERANCE, "x should be 10, got {}", p.x);
        assert!((p.y - 1.0).abs() < TOLERANCE, "y should be 1, got {}", p.y);
        assert!(p.z.abs() < TOLERANCE, "z should be 0, got {}", p.z);
    }

    #[test]
    fn test_isometry_matches_frame() {
        let pose = Pose::new(1.0, 2.0, 3.0, 0.3, -0.7, 1.1);
        for order in RotationOrder::ALL {
            let frame = compose(&pose, order);
            let back = frame_to_isometry(&frame).to_homogeneous();
            assert!(
                (frame - back).abs().max() < TOLERANCE,
                "isometry mismatch for {}",
                order
            );
        }
    }
}
