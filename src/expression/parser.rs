//! Parsing support for sum-of-products strings

use super::error::ParseSopError;
use super::SopExpr;
use lalrpop_util::ParseError;
use std::sync::Arc;

// Lalrpop-generated parser module (generated in OUT_DIR at build time)
#[allow(clippy::all)]
mod parser_impl {
    #![allow(clippy::all)]
    #![allow(dead_code)]
    #![allow(unused_variables)]
    #![allow(unused_imports)]
    #![allow(non_snake_case)]
    #![allow(non_camel_case_types)]
    #![allow(non_upper_case_globals)]
    include!(concat!(env!("OUT_DIR"), "/expression/sop.rs"));
}

impl SopExpr {
    /// Parse a sum of products in the format produced by the renderer
    ///
    /// - `0` and `1` are the constants
    /// - products are juxtaposed literals, joined with `+`
    /// - a literal is a letter optionally followed by digits (`A`, `x12`),
    ///   complemented by a trailing `'`
    /// - whitespace is ignored
    ///
    /// # Examples
    ///
    /// ```
    /// use qmc_logic::SopExpr;
    ///
    /// let expr = SopExpr::parse("AB'C + A'").unwrap();
    /// assert_eq!(expr.terms().len(), 2);
    /// assert_eq!(expr.to_string(), "AB'C + A'");
    /// assert!(SopExpr::parse("A + + B").is_err());
    /// ```
    pub fn parse(input: &str) -> Result<Self, ParseSopError> {
        parser_impl::SopParser::new().parse(input).map_err(|e| {
            let position = match &e {
                ParseError::InvalidToken { location } => Some(*location),
                ParseError::UnrecognizedEof { location, .. } => Some(*location),
                ParseError::UnrecognizedToken {
                    token: (start, _, _),
                    ..
                } => Some(*start),
                ParseError::ExtraToken {
                    token: (start, _, _),
                } => Some(*start),
                ParseError::User { .. } => None,
            };
            ParseSopError::InvalidSyntax {
                message: Arc::from(e.to_string().as_str()),
                input: Arc::from(input),
                position,
            }
        })
    }
}
