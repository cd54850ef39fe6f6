/// Represents the errors that can occur when building axes or when assigning
/// one axis collection from another.
#[non_exhaustive]
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// The source collection does not have as many axes as the target needs.
    #[error("expected {expected} axes, found {found}")]
    LengthMismatch { expected: usize, found: usize },
    /// A dynamic axis does not hold the type declared at its position.
    #[error("axis {position} holds a {found} axis, expected a {expected} axis")]
    AxisTypeMismatch {
        position: usize,
        expected: &'static str,
        found: &'static str,
    },
    /// Axis construction arguments were rejected.
    #[error("invalid axis: {0}")]
    InvalidAxis(String),
}
