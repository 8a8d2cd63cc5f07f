//! Error types for the minimization core

use std::fmt;
use std::io;

/// Which safety bound of a [`MinimizeConfig`](super::MinimizeConfig) was exceeded
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LimitKind {
    /// Number of merge rounds performed by the prime implicant generator
    Rounds,
    /// Number of distinct patterns produced by a single merge round
    Implicants,
}

impl fmt::Display for LimitKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LimitKind::Rounds => write!(f, "merge rounds"),
            LimitKind::Implicants => write!(f, "implicants"),
        }
    }
}

/// Errors reported by [`minimize`](super::minimize) and [`Minimizer`](super::Minimizer)
///
/// Malformed text never reaches the core; these are the only failures it can
/// detect on already-parsed input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MinimizeError {
    /// A minterm cannot be represented with the given number of variables
    OutOfRange {
        /// The offending minterm, as supplied by the caller
        minterm: u64,
        /// Number of variables (bit width) in effect
        variables: usize,
    },
    /// A configured safety bound was exceeded
    ComputationTooLarge {
        /// The bound that was hit
        kind: LimitKind,
        /// The configured limit
        limit: usize,
        /// The value reached when the computation was stopped
        reached: usize,
    },
}

impl fmt::Display for MinimizeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MinimizeError::OutOfRange { minterm, variables } => write!(
                f,
                "Minterm {} exceeds maximum value for {} variables",
                minterm, variables
            ),
            MinimizeError::ComputationTooLarge {
                kind,
                limit,
                reached,
            } => write!(
                f,
                "Computation too large: {} {} exceeds the configured limit of {}",
                reached, kind, limit
            ),
        }
    }
}

impl std::error::Error for MinimizeError {}

impl From<MinimizeError> for io::Error {
    fn from(err: MinimizeError) -> Self {
        io::Error::new(io::ErrorKind::InvalidInput, err)
    }
}
