//! Rotation axes and the twelve angle-composition orders.
//!
//! An order names the axis used by each of the three angle slots of a pose.
//! Tait-Bryan orders use three distinct axes (`xyz`, `zyx`, ...). Proper
//! Euler orders reuse the first axis in the third slot (`zxz`, `xyx`, ...).

use std::fmt;
use std::str::FromStr;

use nalgebra::Matrix4;
use serde::{Deserialize, Serialize};

use crate::error::FrameError;

/// A coordinate axis.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Axis {
    X,
    Y,
    Z,
}

impl Axis {
    /// Right-handed elementary rotation about this axis, in homogeneous form.
    ///
    /// The fourth row and column are those of the identity.
    #[rustfmt::skip]
    pub fn rotation(self, angle: f64) -> Matrix4<f64> {
        let (s, c) = angle.sin_cos();
        match self {
            Axis::X => Matrix4::new(
                1.0, 0.0, 0.0, 0.0,
                0.0, c, -s, 0.0,
                0.0, s, c, 0.0,
                0.0, 0.0, 0.0, 1.0,
            ),
            Axis::Y => Matrix4::new(
                c, 0.0, s, 0.0,
                0.0, 1.0, 0.0, 0.0,
                -s, 0.0, c, 0.0,
                0.0, 0.0, 0.0, 1.0,
            ),
            Axis::Z => Matrix4::new(
                c, -s, 0.0, 0.0,
                s, c, 0.0, 0.0,
                0.0, 0.0, 1.0, 0.0,
                0.0, 0.0, 0.0, 1.0,
            ),
        }
    }

    fn as_char(self) -> char {
        match self {
            Axis::X => 'x',
            Axis::Y => 'y',
            Axis::Z => 'z',
        }
    }
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

/// Angle-composition order of a pose.
///
/// Slot `i` of the pose angles always rotates about `axes()[i]`, whatever
/// axis that happens to be.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum RotationOrder {
    #[default]
    Xyz,
    Xzy,
    Yxz,
    Yzx,
    Zxy,
    Zyx,
    Xyx,
    Xzx,
    Yxy,
    Yzy,
    Zxz,
    Zyz,
}

impl RotationOrder {
    /// All orders, Tait-Bryan first.
    pub const ALL: [RotationOrder; 12] = [
        RotationOrder::Xyz,
        RotationOrder::Xzy,
        RotationOrder::Yxz,
        RotationOrder::Yzx,
        RotationOrder::Zxy,
        RotationOrder::Zyx,
        RotationOrder::Xyx,
        RotationOrder::Xzx,
        RotationOrder::Yxy,
        RotationOrder::Yzy,
        RotationOrder::Zxz,
        RotationOrder::Zyz,
    ];

    /// Axis used by each angle slot.
    pub const fn axes(self) -> [Axis; 3] {
        use Axis::{X, Y, Z};
        match self {
            RotationOrder::Xyz => [X, Y, Z],
            RotationOrder::Xzy => [X, Z, Y],
            RotationOrder::Yxz => [Y, X, Z],
            RotationOrder::Yzx => [Y, Z, X],
            RotationOrder::Zxy => [Z, X, Y],
            RotationOrder::Zyx => [Z, Y, X],
            RotationOrder::Xyx => [X, Y, X],
            RotationOrder::Xzx => [X, Z, X],
            RotationOrder::Yxy => [Y, X, Y],
            RotationOrder::Yzy => [Y, Z, Y],
            RotationOrder::Zxz => [Z, X, Z],
            RotationOrder::Zyz => [Z, Y, Z],
        }
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            RotationOrder::Xyz => "xyz",
            RotationOrder::Xzy => "xzy",
            RotationOrder::Yxz => "yxz",
            RotationOrder::Yzx => "yzx",
            RotationOrder::Zxy => "zxy",
            RotationOrder::Zyx => "zyx",
            RotationOrder::Xyx => "xyx",
            RotationOrder::Xzx => "xzx",
            RotationOrder::Yxy => "yxy",
            RotationOrder::Yzy => "yzy",
            RotationOrder::Zxz => "zxz",
            RotationOrder::Zyz => "zyz",
        }
    }

    /// Three distinct axes.
    pub const fn is_tait_bryan(self) -> bool {
        !self.is_proper_euler()
    }

    /// First and third axes coincide.
    pub const fn is_proper_euler(self) -> bool {
        let [first, _, third] = self.axes();
        first as u8 == third as u8
    }
}

impl FromStr for RotationOrder {
    type Err = FrameError;

    fn from_str(token: &str) -> Result<Self, Self::Err> {
        RotationOrder::ALL
            .into_iter()
            .find(|order| order.as_str() == token)
            .ok_or_else(|| FrameError::InvalidOrderToken(token.to_string()))
    }
}

impl TryFrom<&str> for RotationOrder {
    type Error = FrameError;

    fn try_from(token: &str) -> Result<Self, Self::Error> {
        token.parse()
    }
}

impl TryFrom<String> for RotationOrder {
    type Error = FrameError;

    fn try_from(token: String) -> Result<Self, Self::Error> {
        token.parse()
    }
}

impl From<RotationOrder> for String {
    fn from(order: RotationOrder) -> Self {
        order.as_str().to_string()
    }
}

impl fmt::Display for RotationOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
