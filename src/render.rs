//! Sum-of-products rendering
//!
//! Products are written by juxtaposing variable names, with `'` after a
//! complemented variable, and joined with `" + "`: `AB'C + A'D`.

use crate::pattern::BitPattern;

/// Marker appended to a complemented variable
pub const COMPLEMENT_MARKER: char = '\'';

/// Separator between product terms
pub const TERM_SEPARATOR: &str = " + ";

/// Rendering of the constant-false function
pub const FALSE: &str = "0";

/// Rendering of the constant-true function
pub const TRUE: &str = "1";

/// Render a single product term
///
/// Don't-care positions are skipped. An all-don't-care pattern renders as
/// [`TRUE`] rather than as an empty string.
pub fn render_term<S: AsRef<str>>(implicant: &BitPattern, variables: &[S]) -> String {
    if implicant.is_tautology() {
        return TRUE.to_string();
    }

    let mut term = String::new();
    for (bit, name) in implicant.bits().iter().zip(variables) {
        if let Some(value) = bit {
            term.push_str(name.as_ref());
            if !value {
                term.push(COMPLEMENT_MARKER);
            }
        }
    }
    term
}

/// Render a cover as a sum of products, in the given order
///
/// An empty cover is the constant [`FALSE`]; a cover containing the
/// all-don't-care implicant is the constant [`TRUE`].
///
/// # Examples
///
/// ```
/// use qmc_logic::{render, BitPattern};
///
/// let cover: Vec<BitPattern> = vec!["10-".parse().unwrap(), "0-1".parse().unwrap()];
/// assert_eq!(render(&cover, &["A", "B", "C"]), "AB' + A'C");
/// assert_eq!(render(&[] as &[BitPattern], &["A"]), "0");
/// ```
pub fn render<'a, S: AsRef<str>>(
    cover: impl IntoIterator<Item = &'a BitPattern>,
    variables: &[S],
) -> String {
    let mut terms = Vec::new();
    for implicant in cover {
        if implicant.is_tautology() {
            return TRUE.to_string();
        }
        terms.push(render_term(implicant, variables));
    }

    if terms.is_empty() {
        FALSE.to_string()
    } else {
        terms.join(TERM_SEPARATOR)
    }
}
