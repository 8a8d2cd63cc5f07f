//! Error types for textual problem input

use std::fmt;
use std::io;
use std::sync::Arc;

/// Errors raised while turning text into a minimization problem
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputError {
    /// Minterm text is not a comma-separated list of non-negative integers
    InvalidMinterms {
        /// The rejected text
        input: Arc<str>,
    },
    /// Variable text is not a comma-separated list of single letters
    InvalidVariables {
        /// The rejected text
        input: Arc<str>,
    },
    /// The same variable name appears twice
    DuplicateVariable {
        /// The repeated name
        name: Arc<str>,
    },
    /// The number of variables does not match the bit width of the minterms
    VariableCountMismatch {
        /// Bits needed by the largest minterm
        expected: usize,
        /// Variables supplied
        got: usize,
    },
    /// A problem file ended before both lines were read
    MissingLine {
        /// Which line was missing
        what: &'static str,
    },
}

impl fmt::Display for InputError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InputError::InvalidMinterms { input } => write!(
                f,
                "Minterms must be integers separated by commas, got {:?}",
                input
            ),
            InputError::InvalidVariables { input } => write!(
                f,
                "Variables must be letters separated by commas, got {:?}",
                input
            ),
            InputError::DuplicateVariable { name } => {
                write!(f, "Variable '{}' is listed more than once", name)
            }
            InputError::VariableCountMismatch { expected, got } => write!(
                f,
                "Number of variables must match required bit length of minterms: \
                 expected {}, got {}",
                expected, got
            ),
            InputError::MissingLine { what } => write!(f, "Missing {} line", what),
        }
    }
}

impl std::error::Error for InputError {}

impl From<InputError> for io::Error {
    fn from(err: InputError) -> Self {
        io::Error::new(io::ErrorKind::InvalidInput, err)
    }
}
