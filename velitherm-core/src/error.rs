/// Failure of a thermodynamic computation.
///
/// Every function in this crate returns this error instead of NaN or infinity,
/// and none of them clamp their inputs.
#[derive(Debug, Clone, Copy, PartialEq, thiserror::Error)]
pub enum Error {
    #[error("{operation}: {quantity} must be finite, got {value}")]
    NonFinite { operation: &'static str, quantity: &'static str, value: f64 },
    #[error("{operation}: {quantity} must be positive, got {value}")]
    NonPositive { operation: &'static str, quantity: &'static str, value: f64 },
    #[error(
        "{operation}: altitude {altitude_m} m is not below {ceiling_m} m, where the standard \
         temperature would reach absolute zero"
    )]
    AltitudeBeyondLayer { operation: &'static str, altitude_m: f64, ceiling_m: f64 },
    #[error("{operation}: result is not finite")]
    NonFiniteResult { operation: &'static str },
    #[error("{operation}: result {value} underflowed to a non-positive value")]
    DegenerateResult { operation: &'static str, value: f64 },
}

/// Coarse classification of [`Error`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// An input was outside the physically valid range.
    Domain,
    /// The inputs were valid but the result is not representable.
    Numeric,
}

impl Error {
    #[must_use]
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::NonFinite { .. }
            | Self::NonPositive { .. }
            | Self::AltitudeBeyondLayer { .. } => ErrorKind::Domain,
            Self::NonFiniteResult { .. } | Self::DegenerateResult { .. } => ErrorKind::Numeric,
        }
    }

    /// Name of the operation that failed.
    #[must_use]
    pub fn operation(&self) -> &'static str {
        match *self {
            Self::NonFinite { operation, .. }
            | Self::NonPositive { operation, .. }
            | Self::AltitudeBeyondLayer { operation, .. }
            | Self::NonFiniteResult { operation }
            | Self::DegenerateResult { operation, .. } => operation,
        }
    }
}
