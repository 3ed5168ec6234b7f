//! Error types for Plegado operations.
//!
//! Provides rich error context for library consumers.

use std::fmt;

/// Main error type for Plegado operations.
///
/// Covers the two fatal failure modes of fold construction and lookup:
/// nonsensical configuration at construction time and out-of-range fold
/// indices at lookup time. Data-quality conditions (a class with fewer
/// samples than folds) are deliberately *not* errors; they are reported
/// through [`StratifiedKFold::is_faulty`](crate::folding::StratifiedKFold::is_faulty)
/// and the warning sink instead.
///
/// # Examples
///
/// ```
/// use plegado::error::PlegadoError;
///
/// let err = PlegadoError::FoldIndexOutOfRange { index: 5, k: 5 };
/// assert!(err.to_string().contains("5"));
/// ```
#[derive(Debug, Clone)]
pub enum PlegadoError {
    /// `get_fold` called with a fold index at or beyond the fold count.
    ///
    /// Negative indices are unrepresentable (`usize`), so only the upper
    /// bound is checked.
    FoldIndexOutOfRange {
        /// Requested fold index
        index: usize,
        /// Number of folds configured for the splitter
        k: usize,
    },

    /// Invalid configuration value provided at construction.
    InvalidConfiguration {
        /// Parameter name
        param: String,
        /// Provided value
        value: String,
        /// Constraint description
        constraint: String,
    },
}

impl fmt::Display for PlegadoError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PlegadoError::FoldIndexOutOfRange { index, k } => {
                write!(
                    f,
                    "fold index ({index}) must be less than the number of folds ({k})"
                )
            }
            PlegadoError::InvalidConfiguration {
                param,
                value,
                constraint,
            } => {
                write!(
                    f,
                    "Invalid configuration: {param} = {value}, expected {constraint}"
                )
            }
        }
    }
}

impl std::error::Error for PlegadoError {}

impl PlegadoError {
    /// Create an invalid configuration error with descriptive context
    #[must_use]
    pub fn invalid_configuration(param: &str, value: impl fmt::Display, constraint: &str) -> Self {
        Self::InvalidConfiguration {
            param: param.to_string(),
            value: value.to_string(),
            constraint: constraint.to_string(),
        }
    }
}

#[allow(clippy::cmp_owned)]
impl PartialEq<&str> for PlegadoError {
    fn eq(&self, other: &&str) -> bool {
        self.to_string() == *other
    }
}

#[allow(clippy::cmp_owned)]
impl PartialEq<PlegadoError> for &str {
    fn eq(&self, other: &PlegadoError) -> bool {
        *self == other.to_string()
    }
}

/// Convenience type alias for Results.
pub type Result<T> = std::result::Result<T, PlegadoError>;
