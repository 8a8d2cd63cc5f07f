//! # Quine-McCluskey Logic Minimizer
//!
//! This crate computes a minimal sum-of-products expression for a Boolean
//! function given as a list of minterms (the input combinations on which the
//! function is true) and an ordered list of variable names.
//!
//! ## Overview
//!
//! Minimization follows the Quine-McCluskey method:
//!
//! - minterms are encoded as bit patterns, grouped by ones count, and merged
//!   pairwise until no further merge is possible; what never merged are the
//!   prime implicants
//! - each prime implicant is expanded into the minterms it covers
//! - essential implicants are taken first, then the implicant covering the most
//!   remaining minterms, until everything is covered
//! - the chosen implicants are rendered as `AB'C + A'D`
//!
//! Ties in the greedy phase go to the implicant discovered first, so results
//! are deterministic. The cover is not guaranteed to be globally minimal when
//! several choices tie.
//!
//! ## Minimizing
//!
//! ```
//! use qmc_logic::minimize;
//!
//! # fn main() -> Result<(), qmc_logic::MinimizeError> {
//! let expr = minimize(&[0, 1, 5, 7], &["A", "B", "C"])?;
//! assert_eq!(expr, "A'B' + AC");
//!
//! // Constant functions
//! assert_eq!(minimize(&[], &["A", "B"])?, "0");
//! assert_eq!(minimize(&[0, 1, 2, 3], &["A", "B"])?, "1");
//! # Ok(())
//! # }
//! ```
//!
//! ## Inspecting the stages
//!
//! [`Minimizer::solve`] returns a [`Solution`] holding the prime implicants,
//! the coverage table and the selected cover:
//!
//! ```
//! use qmc_logic::{MinimizeConfig, Minimizer};
//!
//! # fn main() -> Result<(), qmc_logic::MinimizeError> {
//! let minimizer = Minimizer::new(MinimizeConfig::new().with_max_implicants(10_000));
//! let solution = minimizer.solve(&[0, 1, 2, 5, 6, 7], &["A", "B", "C"])?;
//!
//! for implicant in solution.prime_implicants() {
//!     println!("{} covers {:?}", implicant, solution.table().coverage(implicant));
//! }
//! println!("{} essential", solution.cover().essential_count());
//! println!("{}", solution);
//! # Ok(())
//! # }
//! ```
//!
//! ## Checking a result
//!
//! Rendered expressions parse back into a [`SopExpr`], whose truth table can be
//! compared with the original minterms:
//!
//! ```
//! use qmc_logic::{minimize, SopExpr};
//!
//! # fn main() -> Result<(), qmc_logic::Error> {
//! let variables = ["A", "B", "C", "D"];
//! let minterms = [0, 2, 5, 7, 8, 10, 13, 15];
//! let rendered = minimize(&minterms, &variables)?;
//!
//! let expr = SopExpr::parse(&rendered)?;
//! assert_eq!(expr.minterms(&variables)?, minterms);
//! # Ok(())
//! # }
//! ```
//!
//! ## Thread Safety
//!
//! Every call works on its own data and returns a value; nothing is cached
//! between calls. [`minimize`] can be called from any number of threads at once
//! without synchronization.

// Public modules
pub mod error;
pub mod expression;
pub mod input;
pub mod minimize;
pub mod pattern;
pub mod render;

// Re-export high-level public API
pub use error::Error;
pub use expression::{EvalError, Literal, ParseSopError, Product, SopExpr};
pub use input::{InputError, Problem};
pub use minimize::{
    minimize, CoverageTable, LimitKind, MinimizeConfig, MinimizeError, Minimizer, SelectedCover,
    Solution,
};
pub use pattern::BitPattern;
pub use render::render;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reexports() {
        let expr = minimize(&[1, 3], &["A", "B"]).unwrap();
        assert_eq!(expr, "B");
        let parsed = SopExpr::parse(&expr).unwrap();
        assert_eq!(parsed.minterms(&["A", "B"]).unwrap(), vec![1, 3]);
    }

    #[test]
    fn test_known_results() {
        assert_eq!(minimize(&[], &["A", "B"]).unwrap(), "0");
        assert_eq!(minimize(&[5], &["A", "B", "C"]).unwrap(), "AB'C");
        assert_eq!(minimize(&[0, 1], &["A", "B"]).unwrap(), "A'");
        assert!(matches!(
            minimize(&[9], &["A", "B"]),
            Err(MinimizeError::OutOfRange { minterm: 9, .. })
        ));
    }
}
