//! Untyped entry point: flat pose slices and order tokens in, frames out.

use nalgebra::Matrix4;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::Result;
use crate::frame::compose;
use crate::order::RotationOrder;
use crate::pose::Pose;

/// Unit of the three angle slots accepted by [`FrameBuilder::build`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AngleUnit {
    #[default]
    Radians,
    Degrees,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
#[allow(missing_copy_implementations)]
/// Settings to configure how a [`FrameBuilder`] reads its inputs
pub struct FrameSettings {
    /// Order used when the caller passes no order token, or an empty one
    ///
    /// ## Default
    /// The default is `xyz`
    pub default_order: RotationOrder,
    /// Unit of the angle slots of incoming poses (default: radians)
    ///
    /// Degrees are converted to radians before composition.
    pub angle_unit: AngleUnit,
}

impl Default for FrameSettings {
    fn default() -> Self {
        Self {
            default_order: RotationOrder::Xyz,
            angle_unit: AngleUnit::Radians,
        }
    }
}

/// Builds homogeneous frames from flat `[cx, cy, cz, ax, ay, az]` poses.
///
/// The builder holds no state beyond its settings and can be shared freely
/// between threads.
#[derive(Clone, Debug, Default)]
pub struct FrameBuilder {
    settings: FrameSettings,
}

impl FrameBuilder {
    pub fn new(settings: FrameSettings) -> Self {
        Self { settings }
    }

    pub fn settings(&self) -> &FrameSettings {
        &self.settings
    }

    /// Build the frame for `pose` under `order`.
    ///
    /// A missing or empty pose is the identity pose. A missing or empty order
    /// falls back to [`FrameSettings::default_order`]. Anything else must be
    /// six values and one of the twelve order tokens.
    pub fn build(&self, pose: Option<&[f64]>, order: Option<&str>) -> Result<Matrix4<f64>> {
        let order = self.resolve_order(order)?;
        let pose = self.resolve_pose(pose)?;
        Ok(compose(&pose, order))
    }

    fn resolve_order(&self, token: Option<&str>) -> Result<RotationOrder> {
        match token {
            None | Some("") => {
                debug!("No rotation order given, using {}", self.settings.default_order);
                Ok(self.settings.default_order)
            }
            Some(token) => token
                .parse::<RotationOrder>()
                .inspect_err(|err| debug!("Rejected order: {}", err)),
        }
    }

    fn resolve_pose(&self, values: Option<&[f64]>) -> Result<Pose> {
        let mut pose = Pose::from_slice(values.unwrap_or_default())
            .inspect_err(|err| debug!("Rejected pose: {}", err))?;
        if self.settings.angle_unit == AngleUnit::Degrees {
            pose.angles = pose.angles.map(f64::to_radians);
        }
        Ok(pose)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::FrameError;
    use crate::order::Axis;
    use std::f64::consts::FRAC_PI_2;

    const TOLERANCE: f64 = 1e-10;

    #[test]
    fn test_defaults() {
        let settings = FrameSettings::default();
        assert_eq!(settings.default_order, RotationOrder::Xyz);
        assert_eq!(settings.angle_unit, AngleUnit::Radians);
    }

    #[test]
    fn test_empty_inputs_use_defaults() {
        let builder = FrameBuilder::default();
        assert_eq!(builder.build(Some(&[] as &[f64]), Some("")), Ok(Matrix4::identity()));
        assert_eq!(builder.build(None, None), Ok(Matrix4::identity()));
    }

    #[test]
    fn test_configured_default_order() {
        let builder = FrameBuilder::new(FrameSettings {
            default_order: RotationOrder::Zyx,
            ..Default::default()
        });
        let values = [0.0, 0.0, 0.0, 0.5, 0.0, 0.0];
        let frame = builder.build(Some(values.as_slice()), None).unwrap();
        assert!((frame - Axis::Z.rotation(0.5)).abs().max() < TOLERANCE);
    }

    #[test]
    fn test_degree_settings() {
        let builder = FrameBuilder::new(FrameSettings {
            angle_unit: AngleUnit::Degrees,
            ..Default::default()
        });
        let values = [0.0, 0.0, 0.0, 90.0, 0.0, 0.0];
        let frame = builder.build(Some(values.as_slice()), Some("xyz")).unwrap();
        assert!((frame - Axis::X.rotation(FRAC_PI_2)).abs().max() < TOLERANCE);
    }

    #[test]
    fn test_order_checked_before_pose() {
        let builder = FrameBuilder::default();
        let err = builder.build(Some(&[1.0][..]), Some("abc")).unwrap_err();
        assert_eq!(err, FrameError::InvalidOrderToken("abc".into()));
    }
}
