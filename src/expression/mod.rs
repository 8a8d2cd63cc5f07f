//! Sum-of-products expressions
//!
//! [`SopExpr`] is the parsed form of the strings produced by
//! [`minimize`](crate::minimize). It can be evaluated under an assignment or
//! tabulated over an ordered variable list, which turns a rendered result back
//! into the minterms it is true on.
//!
//! ```
//! use qmc_logic::{minimize, SopExpr};
//!
//! let rendered = minimize(&[1, 3, 5, 7], &["A", "B", "C"]).unwrap();
//! let expr = SopExpr::parse(&rendered).unwrap();
//! assert_eq!(expr.minterms(&["A", "B", "C"]).unwrap(), vec![1, 3, 5, 7]);
//! ```

mod error;
mod parser;

pub use error::{EvalError, ParseSopError};

use crate::pattern::BitPattern;
use crate::render::{COMPLEMENT_MARKER, FALSE, TERM_SEPARATOR, TRUE};
use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

/// Largest variable count [`SopExpr::minterms`] will enumerate
pub const MAX_TABULATED_VARIABLES: usize = 24;

/// A variable or its complement
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Literal {
    name: Arc<str>,
    negated: bool,
}

impl Literal {
    /// Create a literal; `negated` selects the complemented form
    pub fn new(name: &str, negated: bool) -> Self {
        Literal {
            name: Arc::from(name),
            negated,
        }
    }

    /// The variable name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// True for a complemented variable
    pub fn is_negated(&self) -> bool {
        self.negated
    }
}

/// A conjunction of literals; the empty product is constant true
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Product {
    literals: Vec<Literal>,
}

impl Product {
    /// Create a product from its literals
    pub fn new(literals: Vec<Literal>) -> Self {
        Product { literals }
    }

    /// The literals in order
    pub fn literals(&self) -> &[Literal] {
        &self.literals
    }

    /// Evaluate under an assignment; unassigned variables read as false
    pub fn evaluate(&self, assignment: &HashMap<&str, bool>) -> bool {
        self.literals.iter().all(|lit| {
            let value = assignment.get(lit.name()).copied().unwrap_or(false);
            value != lit.negated
        })
    }
}

/// A sum of products
///
/// No products is constant false; a product with no literals is constant true.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SopExpr {
    terms: Vec<Product>,
}

impl SopExpr {
    /// The constant-false expression
    pub fn zero() -> Self {
        SopExpr { terms: Vec::new() }
    }

    /// The constant-true expression
    pub fn one() -> Self {
        SopExpr {
            terms: vec![Product::default()],
        }
    }

    /// Build from a list of products
    pub fn from_products(terms: Vec<Product>) -> Self {
        SopExpr { terms }
    }

    /// Build from implicants over the given variable names
    pub fn from_cover<'a, S: AsRef<str>>(
        cover: impl IntoIterator<Item = &'a BitPattern>,
        variables: &[S],
    ) -> Self {
        let terms = cover
            .into_iter()
            .map(|implicant| {
                let literals = implicant
                    .bits()
                    .iter()
                    .zip(variables)
                    .filter_map(|(bit, name)| bit.map(|v| Literal::new(name.as_ref(), !v)))
                    .collect();
                Product::new(literals)
            })
            .collect();
        SopExpr { terms }
    }

    /// The products in order
    pub fn terms(&self) -> &[Product] {
        &self.terms
    }

    /// True if the expression is the constant zero
    pub fn is_zero(&self) -> bool {
        self.terms.is_empty()
    }

    /// True if some product has no literals, making the whole sum true
    pub fn is_one(&self) -> bool {
        self.terms.iter().any(|t| t.literals.is_empty())
    }

    /// Distinct variable names in order of first appearance
    pub fn variables(&self) -> Vec<&str> {
        let mut seen = Vec::new();
        for lit in self.terms.iter().flat_map(|t| t.literals.iter()) {
            if !seen.contains(&lit.name()) {
                seen.push(lit.name());
            }
        }
        seen
    }

    /// Evaluate under an assignment; unassigned variables read as false
    pub fn evaluate(&self, assignment: &HashMap<&str, bool>) -> bool {
        self.terms.iter().any(|t| t.evaluate(assignment))
    }

    /// Rows of the truth table over `variables` on which the expression is true
    ///
    /// Row `r` assigns bit `n - 1 - i` of `r` to `variables[i]`, so the first
    /// variable is the most significant bit, matching minterm numbering.
    /// The result is ascending.
    ///
    /// # Errors
    ///
    /// - [`EvalError::UnknownVariable`] if the expression uses a name not in
    ///   `variables`
    /// - [`EvalError::TooManyVariables`] above [`MAX_TABULATED_VARIABLES`]
    pub fn minterms<S: AsRef<str>>(&self, variables: &[S]) -> Result<Vec<u64>, EvalError> {
        let width = variables.len();
        if width > MAX_TABULATED_VARIABLES {
            return Err(EvalError::TooManyVariables {
                count: width,
                max: MAX_TABULATED_VARIABLES,
            });
        }

        let index: HashMap<&str, usize> = variables
            .iter()
            .enumerate()
            .map(|(i, v)| (v.as_ref(), width - 1 - i))
            .collect();

        // Each product becomes a (care mask, required value) pair; a product
        // requiring both polarities of one variable is never true.
        let mut cubes = Vec::with_capacity(self.terms.len());
        'terms: for term in &self.terms {
            let mut mask = 0u64;
            let mut value = 0u64;
            for lit in &term.literals {
                let bit = match index.get(lit.name()) {
                    Some(&shift) => 1u64 << shift,
                    None => {
                        return Err(EvalError::UnknownVariable {
                            name: Arc::clone(&lit.name),
                        })
                    }
                };
                let want = if lit.negated { 0 } else { bit };
                if mask & bit != 0 && value & bit != want {
                    continue 'terms;
                }
                mask |= bit;
                value |= want;
            }
            cubes.push((mask, value));
        }

        Ok((0..1u64 << width)
            .filter(|row| cubes.iter().any(|(mask, value)| row & mask == *value))
            .collect())
    }

    /// Whether two expressions have the same truth table over `variables`
    pub fn equivalent_over<S: AsRef<str>>(
        &self,
        other: &SopExpr,
        variables: &[S],
    ) -> Result<bool, EvalError> {
        Ok(self.minterms(variables)? == other.minterms(variables)?)
    }
}

impl fmt::Display for Literal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)?;
        if self.negated {
            write!(f, "{}", COMPLEMENT_MARKER)?;
        }
        Ok(())
    }
}

impl fmt::Display for Product {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.literals.is_empty() {
            return write!(f, "{}", TRUE);
        }
        for lit in &self.literals {
            write!(f, "{}", lit)?;
        }
        Ok(())
    }
}

impl fmt::Display for SopExpr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_zero() {
            return write!(f, "{}", FALSE);
        }
        if self.is_one() {
            return write!(f, "{}", TRUE);
        }
        for (i, term) in self.terms.iter().enumerate() {
            if i > 0 {
                write!(f, "{}", TERM_SEPARATOR)?;
            }
            write!(f, "{}", term)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_constants() {
        assert_eq!(SopExpr::zero().to_string(), "0");
        assert_eq!(SopExpr::one().to_string(), "1");
        assert_eq!(SopExpr::zero().minterms(&["A"]).unwrap(), Vec::<u64>::new());
        assert_eq!(SopExpr::one().minterms(&["A", "B"]).unwrap(), vec![0, 1, 2, 3]);
    }

    #[test]
    fn test_evaluate() {
        let expr = SopExpr::parse("AB' + C").unwrap();
        let mut assignment = HashMap::new();
        assignment.insert("A", true);
        assignment.insert("B", false);
        assert!(expr.evaluate(&assignment));
        assignment.insert("B", true);
        assert!(!expr.evaluate(&assignment));
        assignment.insert("C", true);
        assert!(expr.evaluate(&assignment));
    }

    #[test]
    fn test_minterms_msb_first() {
        let expr = SopExpr::parse("AB'C").unwrap();
        assert_eq!(expr.minterms(&["A", "B", "C"]).unwrap(), vec![5]);
        // Reordering the variable list renumbers the rows
        assert_eq!(expr.minterms(&["C", "B", "A"]).unwrap(), vec![5]);
        assert_eq!(expr.minterms(&["B", "A", "C"]).unwrap(), vec![3]);
    }

    #[test]
    fn test_minterms_of_sum() {
        let expr = SopExpr::parse("A' + BC").unwrap();
        assert_eq!(
            expr.minterms(&["A", "B", "C"]).unwrap(),
            vec![0, 1, 2, 3, 7]
        );
    }

    #[test]
    fn test_contradictory_product() {
        let expr = SopExpr::parse("AA' + B").unwrap();
        assert_eq!(expr.minterms(&["A", "B"]).unwrap(), vec![1, 3]);
    }

    #[test]
    fn test_unknown_variable() {
        let expr = SopExpr::parse("AQ").unwrap();
        let err = expr.minterms(&["A", "B"]).unwrap_err();
        assert_eq!(
            err,
            EvalError::UnknownVariable {
                name: Arc::from("Q")
            }
        );
    }

    #[test]
    fn test_too_many_variables() {
        let names: Vec<String> = (0..30).map(|i| format!("x{}", i)).collect();
        assert!(matches!(
            SopExpr::one().minterms(&names),
            Err(EvalError::TooManyVariables { count: 30, .. })
        ));
    }

    #[test]
    fn test_from_cover() {
        let cover: Vec<BitPattern> = vec!["1-0".parse().unwrap(), "---".parse().unwrap()];
        let expr = SopExpr::from_cover(&cover[..1], &["A", "B", "C"]);
        assert_eq!(expr.to_string(), "AC'");
        let expr = SopExpr::from_cover(&cover, &["A", "B", "C"]);
        assert!(expr.is_one());
        assert_eq!(expr.to_string(), "1");
    }

    #[test]
    fn test_equivalent_over() {
        let a = SopExpr::parse("AB + AB'").unwrap();
        let b = SopExpr::parse("A").unwrap();
        assert!(a.equivalent_over(&b, &["A", "B"]).unwrap());
        let c = SopExpr::parse("B").unwrap();
        assert!(!a.equivalent_over(&c, &["A", "B"]).unwrap());
    }
}
