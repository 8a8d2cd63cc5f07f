//! Error types for sum-of-products parsing and evaluation

use std::fmt;
use std::io;
use std::sync::Arc;

/// Errors that occur when parsing a sum-of-products string
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseSopError {
    /// The input is not a valid sum of products
    InvalidSyntax {
        /// The error message from the parser
        message: Arc<str>,
        /// The original input string that failed to parse
        input: Arc<str>,
        /// Byte offset in the input where the error occurred, when known
        position: Option<usize>,
    },
}

impl fmt::Display for ParseSopError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParseSopError::InvalidSyntax {
                message,
                input,
                position,
            } => {
                if let Some(pos) = position {
                    write!(
                        f,
                        "Failed to parse expression at position {}: {}. Input: {:?}",
                        pos, message, input
                    )
                } else {
                    write!(
                        f,
                        "Failed to parse expression: {}. Input: {:?}",
                        message, input
                    )
                }
            }
        }
    }
}

impl std::error::Error for ParseSopError {}

impl From<ParseSopError> for io::Error {
    fn from(err: ParseSopError) -> Self {
        io::Error::new(io::ErrorKind::InvalidData, err)
    }
}

/// Errors that occur when tabulating an expression over a variable list
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EvalError {
    /// The expression mentions a variable that is not in the list
    UnknownVariable {
        /// The name that could not be resolved
        name: Arc<str>,
    },
    /// The truth table would have too many rows to enumerate
    TooManyVariables {
        /// Number of variables requested
        count: usize,
        /// Largest supported number of variables
        max: usize,
    },
}

impl fmt::Display for EvalError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EvalError::UnknownVariable { name } => {
                write!(f, "Variable '{}' is not in the variable list", name)
            }
            EvalError::TooManyVariables { count, max } => write!(
                f,
                "Cannot tabulate {} variables (at most {} supported)",
                count, max
            ),
        }
    }
}

impl std::error::Error for EvalError {}

impl From<EvalError> for io::Error {
    fn from(err: EvalError) -> Self {
        io::Error::new(io::ErrorKind::InvalidInput, err)
    }
}
