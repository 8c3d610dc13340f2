//! Error handling for binary field arithmetic

use alloc::borrow::Cow;
use core::fmt;

/// The error type for field construction and arithmetic
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Parameter validation error
    Parameter {
        /// Name of the invalid parameter
        name: Cow<'static, str>,
        /// Reason why the parameter is invalid
        reason: Cow<'static, str>,
    },

    /// Polynomial degree out of range
    Degree {
        /// Context where the degree error occurred
        context: &'static str,
        /// Actual degree of the offending polynomial
        degree: usize,
        /// Degrees must be strictly below this bound
        limit: usize,
    },
}

impl Error {
    /// Shorthand to create a Parameter error
    pub fn param<N: Into<Cow<'static, str>>, R: Into<Cow<'static, str>>>(
        name: N,
        reason: R,
    ) -> Self {
        Error::Parameter {
            name: name.into(),
            reason: reason.into(),
        }
    }
}

/// Result type for field construction and arithmetic
pub type Result<T> = core::result::Result<T, Error>;

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Parameter { name, reason } => {
                write!(f, "Invalid parameter '{}': {}", name, reason)
            }
            Error::Degree {
                context,
                degree,
                limit,
            } => {
                write!(
                    f,
                    "Invalid degree for {}: got {}, must be below {}",
                    context, degree, limit
                )
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for Error {}

// Include the validation submodule
pub mod validate;

#[cfg(test)]
mod tests;
