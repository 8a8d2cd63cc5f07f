//! Crate-level error type
//!
//! Each module reports its own error enum; [`Error`] wraps all of them so that
//! callers chaining parsing, minimization and verification can use a single
//! `?`-friendly type.

use crate::expression::{EvalError, ParseSopError};
use crate::input::InputError;
use crate::minimize::MinimizeError;
use std::fmt;
use std::io;

/// Any error produced by this crate
#[derive(Debug)]
pub enum Error {
    /// Minimization failed
    Minimize(MinimizeError),
    /// Problem text was rejected
    Input(InputError),
    /// A sum-of-products string could not be parsed
    Parse(ParseSopError),
    /// An expression could not be tabulated
    Eval(EvalError),
    /// IO error wrapper
    Io(io::Error),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Minimize(e) => write!(f, "{}", e),
            Error::Input(e) => write!(f, "{}", e),
            Error::Parse(e) => write!(f, "{}", e),
            Error::Eval(e) => write!(f, "{}", e),
            Error::Io(e) => write!(f, "{}", e),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Minimize(e) => Some(e),
            Error::Input(e) => Some(e),
            Error::Parse(e) => Some(e),
            Error::Eval(e) => Some(e),
            Error::Io(e) => Some(e),
        }
    }
}

impl From<MinimizeError> for Error {
    fn from(err: MinimizeError) -> Self {
        Error::Minimize(err)
    }
}

impl From<InputError> for Error {
    fn from(err: InputError) -> Self {
        Error::Input(err)
    }
}

impl From<ParseSopError> for Error {
    fn from(err: ParseSopError) -> Self {
        Error::Parse(err)
    }
}

impl From<EvalError> for Error {
    fn from(err: EvalError) -> Self {
        Error::Eval(err)
    }
}

impl From<io::Error> for Error {
    fn from(err: io::Error) -> Self {
        Error::Io(err)
    }
}

// Conversion from Error to io::Error for callers that only deal in io::Result
impl From<Error> for io::Error {
    fn from(err: Error) -> Self {
        match err {
            Error::Minimize(e) => e.into(),
            Error::Input(e) => e.into(),
            Error::Parse(e) => e.into(),
            Error::Eval(e) => e.into(),
            Error::Io(e) => e,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error as _;

    #[test]
    fn test_wraps_minimize_error() {
        let err: Error = MinimizeError::OutOfRange {
            minterm: 9,
            variables: 2,
        }
        .into();
        assert!(err.to_string().contains("Minterm 9"));
        assert!(err.source().is_some());
    }

    #[test]
    fn test_io_round_trip_keeps_kind() {
        let io_err = io::Error::new(io::ErrorKind::NotFound, "file not found");
        let err: Error = io_err.into();
        assert!(err.to_string().contains("file not found"));
        let back: io::Error = err.into();
        assert_eq!(back.kind(), io::ErrorKind::NotFound);
    }

    #[test]
    fn test_to_io_error_kinds() {
        let err: Error = InputError::MissingLine { what: "minterms" }.into();
        let io_err: io::Error = err.into();
        assert_eq!(io_err.kind(), io::ErrorKind::InvalidInput);
    }
}
