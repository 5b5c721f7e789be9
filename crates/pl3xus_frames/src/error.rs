use thiserror::Error;

/// Errors raised while building a frame.
///
/// Both variants flag caller mistakes. Nothing is retried and no partial
/// frame is ever returned.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FrameError {
    /// Pose was provided but does not hold exactly six values
    #[error("Invalid pose shape: expected 6 values [cx, cy, cz, ax, ay, az], got {len}")]
    InvalidPoseShape { len: usize },

    /// Order token is not one of the twelve recognized conventions
    #[error(
        "Invalid rotation order '{0}': expected one of xyz, xzy, yxz, yzx, zxy, zyx, xyx, xzx, yxy, yzy, zxz, zyz"
    )]
    InvalidOrderToken(String),
}

pub type Result<T> = std::result::Result<T, FrameError>;
