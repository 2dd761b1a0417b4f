use crate::StrError;
use std::fmt;

/// Defines the errors raised by the layered-conductivity calculations
///
/// * `InvalidLayer` -- a layer was given a thickness or conductivity that is not a finite positive number
/// * `Domain` -- an aggregate would divide by zero or yield a non-finite value
///   (empty stack, zero total thickness, zero summed resistance or conductivity)
///
/// Both variants carry a static message; they convert into [StrError] so that
/// `?` also works in functions returning `Result<_, StrError>`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum KeffError {
    /// Non-positive (or non-finite) thickness or conductivity
    InvalidLayer(&'static str),

    /// Degenerate aggregate (division by zero)
    Domain(&'static str),
}

impl KeffError {
    /// Returns the message associated with the error
    pub fn message(&self) -> &'static str {
        match self {
            KeffError::InvalidLayer(msg) => msg,
            KeffError::Domain(msg) => msg,
        }
    }
}

impl fmt::Display for KeffError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            KeffError::InvalidLayer(msg) => write!(f, "invalid layer: {}", msg),
            KeffError::Domain(msg) => write!(f, "domain error: {}", msg),
        }
    }
}

impl std::error::Error for KeffError {}

impl From<KeffError> for StrError {
    fn from(error: KeffError) -> Self {
        error.message()
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
