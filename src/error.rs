use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum EasingError {
    /// The x coordinate of control point `index` (1 or 2) lies outside [0, 1], so x(t)
    /// is no longer monotonic and cannot be inverted.
    #[error("x coordinate of control point {index} must be in the range [0, 1]")]
    InvalidControlPoint { index: usize },
}
