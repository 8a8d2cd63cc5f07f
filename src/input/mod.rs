//! Textual problem input
//!
//! Minterms are written as comma-separated decimal integers (`0,1,5,7`) and
//! variables as comma-separated single letters (`A,B,C`). The number of
//! variables must equal the bit width of the largest minterm.
//!
//! Problem files hold the minterm line followed by the variable line; blank
//! lines and lines starting with `#` are skipped.

mod error;

pub use error::InputError;

use crate::minimize::{MinimizeError, Minimizer, Solution};
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;
use std::sync::Arc;

/// Parse a comma-separated list of non-negative decimal integers
///
/// # Examples
///
/// ```
/// use qmc_logic::input::parse_minterms;
///
/// assert_eq!(parse_minterms(" 0,1,5 ").unwrap(), vec![0, 1, 5]);
/// assert!(parse_minterms("1, 2").is_err());
/// assert!(parse_minterms("-1").is_err());
/// ```
pub fn parse_minterms(text: &str) -> Result<Vec<u64>, InputError> {
    let text = text.trim();
    let invalid = || InputError::InvalidMinterms {
        input: Arc::from(text),
    };

    text.split(',')
        .map(|item| {
            if item.is_empty() || !item.bytes().all(|b| b.is_ascii_digit()) {
                return Err(invalid());
            }
            item.parse::<u64>().map_err(|_| invalid())
        })
        .collect()
}

/// Parse a comma-separated list of single ASCII letters
///
/// # Errors
///
/// [`InputError::InvalidVariables`] for anything else, and
/// [`InputError::DuplicateVariable`] when a letter repeats.
pub fn parse_variables(text: &str) -> Result<Vec<String>, InputError> {
    let text = text.trim();
    let mut variables: Vec<String> = Vec::new();

    for item in text.split(',') {
        let mut chars = item.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) if c.is_ascii_alphabetic() => {}
            _ => {
                return Err(InputError::InvalidVariables {
                    input: Arc::from(text),
                })
            }
        }
        if variables.iter().any(|v| v == item) {
            return Err(InputError::DuplicateVariable {
                name: Arc::from(item),
            });
        }
        variables.push(item.to_string());
    }
    Ok(variables)
}

/// Number of bits needed for the largest minterm, `ceil(log2(max + 1))`
///
/// A list containing only `0` still needs one variable.
pub fn required_width(minterms: &[u64]) -> usize {
    let max = minterms.iter().copied().max().unwrap_or(0);
    ((u64::BITS - max.leading_zeros()) as usize).max(1)
}

/// A validated minimization problem
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Problem {
    minterms: Vec<u64>,
    variables: Vec<String>,
}

impl Problem {
    /// Parse and cross-check the minterm and variable texts
    ///
    /// # Examples
    ///
    /// ```
    /// use qmc_logic::input::Problem;
    ///
    /// let problem = Problem::parse("0,1,5,7", "A,B,C").unwrap();
    /// assert_eq!(problem.minimize().unwrap(), "A'B' + AC");
    /// assert!(Problem::parse("0,1,5,7", "A,B").is_err());
    /// ```
    pub fn parse(minterms: &str, variables: &str) -> Result<Self, InputError> {
        let minterms = parse_minterms(minterms)?;
        let variables = parse_variables(variables)?;

        let expected = required_width(&minterms);
        if variables.len() != expected {
            return Err(InputError::VariableCountMismatch {
                expected,
                got: variables.len(),
            });
        }

        Ok(Problem {
            minterms,
            variables,
        })
    }

    /// Read a problem from its two-line text form
    pub fn from_reader<R: BufRead>(reader: R) -> io::Result<Self> {
        let mut lines = Vec::with_capacity(2);
        for line in reader.lines() {
            let line = line?;
            let line = line.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }
            lines.push(line.to_string());
            if lines.len() == 2 {
                break;
            }
        }

        let mut lines = lines.into_iter();
        let minterms = lines
            .next()
            .ok_or(InputError::MissingLine { what: "minterms" })?;
        let variables = lines
            .next()
            .ok_or(InputError::MissingLine { what: "variables" })?;
        Ok(Self::parse(&minterms, &variables)?)
    }

    /// Read a problem from a file
    pub fn from_file<P: AsRef<Path>>(path: P) -> io::Result<Self> {
        let file = File::open(path)?;
        Self::from_reader(BufReader::new(file))
    }

    /// The minterms, in input order
    pub fn minterms(&self) -> &[u64] {
        &self.minterms
    }

    /// The variable names, most significant first
    pub fn variables(&self) -> &[String] {
        &self.variables
    }

    /// Solve with the given minimizer
    pub fn solve(&self, minimizer: &Minimizer) -> Result<Solution, MinimizeError> {
        minimizer.solve(&self.minterms, &self.variables)
    }

    /// Solve with the default configuration and render the result
    pub fn minimize(&self) -> Result<String, MinimizeError> {
        crate::minimize(&self.minterms, &self.variables)
    }
}
