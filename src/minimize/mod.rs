//! Quine-McCluskey minimization
//!
//! The computation runs in a fixed sequence of stages, each consuming the
//! previous stage's output:
//!
//! 1. every minterm is range-checked and encoded as a [`BitPattern`]
//! 2. patterns are grouped by ones count and merged round by round until no
//!    two patterns in adjacent groups differ in a single position; patterns
//!    that never merged are the prime implicants
//! 3. each prime implicant is expanded into the input minterms it covers
//!    ([`CoverageTable`])
//! 4. essential implicants are selected, then the implicant covering the most
//!    still-uncovered minterms is picked until everything is covered
//!    ([`SelectedCover`])
//! 5. the cover is rendered as a sum of products
//!
//! Nothing is shared between calls, so [`minimize`] can be called from any
//! number of threads at once.

mod cover;
mod error;
mod groups;
mod primes;
mod table;

pub use cover::SelectedCover;
pub use error::{LimitKind, MinimizeError};
pub use table::CoverageTable;

use crate::expression::SopExpr;
use crate::pattern::{check_range, BitPattern};
use crate::render::render;
use groups::Groups;
use std::collections::HashSet;
use std::fmt;
use std::sync::Arc;

/// Safety bounds for a minimization run
///
/// The prime implicant stage can grow exponentially with the number of
/// variables. Both bounds default to `None` (unbounded); when set, exceeding
/// one fails with [`MinimizeError::ComputationTooLarge`] instead of running on.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MinimizeConfig {
    /// Maximum number of merge rounds that may produce new patterns
    ///
    /// **Default:** `None`
    pub max_rounds: Option<usize>,

    /// Maximum number of distinct patterns a single merge round may produce
    ///
    /// **Default:** `None`
    pub max_implicants: Option<usize>,
}

impl MinimizeConfig {
    /// Create a new configuration with defaults
    pub fn new() -> Self {
        Self::default()
    }

    /// Limit the number of merge rounds
    pub fn with_max_rounds(mut self, limit: usize) -> Self {
        self.max_rounds = Some(limit);
        self
    }

    /// Limit the number of patterns produced per round
    pub fn with_max_implicants(mut self, limit: usize) -> Self {
        self.max_implicants = Some(limit);
        self
    }
}

/// Runs minimizations with a fixed [`MinimizeConfig`]
#[derive(Debug, Clone, Default)]
pub struct Minimizer {
    config: MinimizeConfig,
}

impl Minimizer {
    /// Create a minimizer with the given configuration
    pub fn new(config: MinimizeConfig) -> Self {
        Minimizer { config }
    }

    /// The configuration in use
    pub fn config(&self) -> &MinimizeConfig {
        &self.config
    }

    /// Minimize and return every intermediate result
    ///
    /// The number of variables, and therefore the width of every pattern, is
    /// `variables.len()`.
    ///
    /// # Errors
    ///
    /// - [`MinimizeError::OutOfRange`] for the first minterm above
    ///   `2^variables.len() - 1`, before any other work is done
    /// - [`MinimizeError::ComputationTooLarge`] if a configured bound is hit
    pub fn solve<S: AsRef<str>>(
        &self,
        minterms: &[u64],
        variables: &[S],
    ) -> Result<Solution, MinimizeError> {
        let width = variables.len();
        check_range(minterms, width)?;

        let variables: Arc<[Arc<str>]> =
            variables.iter().map(|v| Arc::from(v.as_ref())).collect();

        log::debug!(
            "minimizing {} minterms over {} variables",
            minterms.len(),
            width
        );

        let groups = Groups::from_minterms(minterms, width);
        let primes = primes::prime_implicants(groups, &self.config)?;

        let minterm_set: HashSet<u64> = minterms.iter().copied().collect();
        let table = CoverageTable::build(&primes, &minterm_set);
        let cover = cover::select(&table, minterms);

        Ok(Solution {
            variables,
            minterms: minterms.into(),
            primes: primes.into_iter().collect(),
            table,
            cover,
        })
    }

    /// Minimize and render the result as a sum-of-products string
    pub fn minimize<S: AsRef<str>>(
        &self,
        minterms: &[u64],
        variables: &[S],
    ) -> Result<String, MinimizeError> {
        Ok(self.solve(minterms, variables)?.expression())
    }
}

/// Minimize a function given by its minterms
///
/// Returns `"0"` for an empty minterm list and `"1"` when every input
/// combination is a minterm.
///
/// # Examples
///
/// ```
/// use qmc_logic::minimize;
///
/// assert_eq!(minimize(&[5], &["A", "B", "C"]).unwrap(), "AB'C");
/// assert_eq!(minimize(&[0, 1], &["A", "B"]).unwrap(), "A'");
/// assert_eq!(minimize(&[], &["A", "B"]).unwrap(), "0");
/// assert!(minimize(&[9], &["A", "B"]).is_err());
/// ```
///
/// # Errors
///
/// Returns [`MinimizeError::OutOfRange`] if a minterm does not fit in
/// `variables.len()` bits.
pub fn minimize<S: AsRef<str>>(
    minterms: &[u64],
    variables: &[S],
) -> Result<String, MinimizeError> {
    Minimizer::default().minimize(minterms, variables)
}

/// The result of a minimization, with its intermediate stages
#[derive(Debug, Clone)]
pub struct Solution {
    variables: Arc<[Arc<str>]>,
    minterms: Arc<[u64]>,
    primes: Vec<BitPattern>,
    table: CoverageTable,
    cover: SelectedCover,
}

impl Solution {
    /// Variable names, most significant first
    pub fn variables(&self) -> &[Arc<str>] {
        &self.variables
    }

    /// The minterms as supplied by the caller
    pub fn minterms(&self) -> &[u64] {
        &self.minterms
    }

    /// Prime implicants in discovery order
    pub fn prime_implicants(&self) -> &[BitPattern] {
        &self.primes
    }

    /// Coverage of each prime implicant
    pub fn table(&self) -> &CoverageTable {
        &self.table
    }

    /// The selected cover
    pub fn cover(&self) -> &SelectedCover {
        &self.cover
    }

    /// Render the selected cover as a sum of products
    pub fn expression(&self) -> String {
        render(self.cover.implicants(), &self.variables[..])
    }

    /// The selected cover as a parsed-form expression
    pub fn to_expr(&self) -> SopExpr {
        SopExpr::from_cover(self.cover.implicants(), &self.variables[..])
    }
}

impl fmt::Display for Solution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.expression())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_input() {
        assert_eq!(minimize(&[], &["A", "B"]).unwrap(), "0");
    }

    #[test]
    fn test_single_isolated_minterm() {
        assert_eq!(minimize(&[5], &["A", "B", "C"]).unwrap(), "AB'C");
    }

    #[test]
    fn test_simple_merge() {
        assert_eq!(minimize(&[0, 1], &["A", "B"]).unwrap(), "A'");
    }

    #[test]
    fn test_out_of_range() {
        let err = minimize(&[9], &["A", "B"]).unwrap_err();
        assert_eq!(
            err,
            MinimizeError::OutOfRange {
                minterm: 9,
                variables: 2
            }
        );
    }

    #[test]
    fn test_out_of_range_reports_offending_minterm() {
        let err = minimize(&[1, 2, 8], &["A", "B", "C"]).unwrap_err();
        assert!(matches!(err, MinimizeError::OutOfRange { minterm: 8, .. }));
    }

    #[test]
    fn test_tautology_renders_one() {
        assert_eq!(minimize(&[0, 1, 2, 3], &["A", "B"]).unwrap(), "1");
    }

    #[test]
    fn test_solution_stages() {
        let solution = Minimizer::default()
            .solve(&[0, 1, 2, 5, 6, 7], &["A", "B", "C"])
            .unwrap();
        assert_eq!(solution.prime_implicants().len(), 6);
        assert_eq!(solution.table().len(), 6);
        assert_eq!(solution.cover().len(), 3);
        assert_eq!(solution.cover().essential_count(), 0);
        assert_eq!(solution.variables().len(), 3);
        assert_eq!(solution.minterms(), &[0, 1, 2, 5, 6, 7]);
        assert_eq!(solution.to_string(), solution.expression());
    }

    #[test]
    fn test_config_limits() {
        let minimizer = Minimizer::new(MinimizeConfig::new().with_max_rounds(1));
        assert_eq!(minimizer.config().max_rounds, Some(1));
        let err = minimizer.minimize(&[0, 1, 2, 3], &["A", "B"]).unwrap_err();
        assert!(matches!(
            err,
            MinimizeError::ComputationTooLarge {
                kind: LimitKind::Rounds,
                ..
            }
        ));
        // Two variables never need more than two rounds
        let minimizer = Minimizer::new(MinimizeConfig::new().with_max_rounds(2));
        assert_eq!(minimizer.minimize(&[0, 1, 2, 3], &["A", "B"]).unwrap(), "1");
    }

    #[test]
    fn test_owned_variable_names() {
        let names: Vec<String> = vec!["X".to_string(), "Y".to_string()];
        assert_eq!(minimize(&[3], &names).unwrap(), "XY");
    }
}
