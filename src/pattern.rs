//! Fixed-width bit patterns over `{0, 1, -}`
//!
//! A [`BitPattern`] is either a concrete minterm (no don't-care positions) or an
//! implicant produced by merging minterms. Positions are stored most
//! significant bit first, in the same order as the variable names, using the
//! same `Option<bool>` encoding as cube inputs elsewhere in the crate:
//! - `Some(false)` - variable must be 0
//! - `Some(true)` - variable must be 1
//! - `None` - don't care

use crate::minimize::MinimizeError;
use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

/// A product term over a fixed number of variables
///
/// Equality and hashing are by symbol sequence, so identical implicants reached
/// through different merge paths collapse to one entry in a set.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct BitPattern {
    bits: Arc<[Option<bool>]>,
}

/// Value of bit `index` (counted from the least significant end) as a mask
#[inline]
fn bit(index: usize) -> u64 {
    1u64.checked_shl(index as u32).unwrap_or(0)
}

/// Whether `minterm` can be written with `width` bits
#[inline]
pub(crate) fn fits_width(minterm: u64, width: usize) -> bool {
    width >= u64::BITS as usize || minterm >> width == 0
}

/// Check every minterm against `2^width - 1`, reporting the first one that
/// does not fit
pub(crate) fn check_range(minterms: &[u64], width: usize) -> Result<(), MinimizeError> {
    match minterms.iter().find(|&&m| !fits_width(m, width)) {
        Some(&minterm) => Err(MinimizeError::OutOfRange {
            minterm,
            variables: width,
        }),
        None => Ok(()),
    }
}

impl BitPattern {
    /// Encode a minterm as a concrete pattern of `width` bits
    ///
    /// # Errors
    ///
    /// Returns [`MinimizeError::OutOfRange`] if `minterm > 2^width - 1`.
    ///
    /// # Examples
    ///
    /// ```
    /// use qmc_logic::BitPattern;
    ///
    /// let p = BitPattern::from_minterm(5, 4).unwrap();
    /// assert_eq!(p.to_string(), "0101");
    /// assert!(BitPattern::from_minterm(9, 2).is_err());
    /// ```
    pub fn from_minterm(minterm: u64, width: usize) -> Result<Self, MinimizeError> {
        if !fits_width(minterm, width) {
            return Err(MinimizeError::OutOfRange {
                minterm,
                variables: width,
            });
        }
        Ok(Self::encode(minterm, width))
    }

    /// Encode without the range check; high bits beyond `width` are dropped
    pub(crate) fn encode(minterm: u64, width: usize) -> Self {
        let bits: Vec<Option<bool>> = (0..width)
            .rev()
            .map(|index| Some(minterm & bit(index) != 0))
            .collect();
        BitPattern { bits: bits.into() }
    }

    /// Build a pattern from explicit positions, most significant first
    pub fn from_bits(bits: &[Option<bool>]) -> Self {
        BitPattern { bits: bits.into() }
    }

    /// The positions of this pattern, most significant first
    pub fn bits(&self) -> &[Option<bool>] {
        &self.bits
    }

    /// Number of variables
    pub fn len(&self) -> usize {
        self.bits.len()
    }

    /// True for a zero-width pattern
    pub fn is_empty(&self) -> bool {
        self.bits.is_empty()
    }

    /// Number of positions that must be 1
    pub fn ones(&self) -> usize {
        self.bits.iter().filter(|b| **b == Some(true)).count()
    }

    /// Number of don't-care positions
    pub fn dont_cares(&self) -> usize {
        self.bits.iter().filter(|b| b.is_none()).count()
    }

    /// Key used to regroup patterns between merge rounds
    ///
    /// Don't-care positions count as ones here. For concrete minterms this is
    /// just [`ones`](Self::ones).
    pub fn group_key(&self) -> usize {
        self.bits.iter().filter(|b| **b != Some(false)).count()
    }

    /// Number of literals the rendered product term will contain
    pub fn literal_count(&self) -> usize {
        self.len() - self.dont_cares()
    }

    /// True when every position is don't care (the constant-one product)
    pub fn is_tautology(&self) -> bool {
        self.bits.iter().all(Option::is_none)
    }

    /// Merge two patterns that differ in exactly one position
    ///
    /// Each position must either be identical in both patterns or hold
    /// opposite literals; a literal against a don't care blocks the merge.
    /// Returns `None` unless there is exactly one opposing position.
    pub fn merge(&self, other: &BitPattern) -> Option<BitPattern> {
        if self.len() != other.len() {
            return None;
        }

        let mut diff = None;
        for (i, (a, b)) in self.bits.iter().zip(other.bits.iter()).enumerate() {
            if a == b {
                continue;
            }
            if a.is_none() || b.is_none() || diff.is_some() {
                return None;
            }
            diff = Some(i);
        }

        let pos = diff?;
        let mut bits = self.bits.to_vec();
        bits[pos] = None;
        Some(BitPattern { bits: bits.into() })
    }

    /// Whether the concrete assignment `minterm` satisfies this pattern
    pub fn covers(&self, minterm: u64) -> bool {
        let width = self.len();
        fits_width(minterm, width)
            && self.bits.iter().enumerate().all(|(i, b)| match b {
                Some(v) => (minterm & bit(width - 1 - i) != 0) == *v,
                None => true,
            })
    }

    /// Iterate over every concrete minterm this pattern stands for
    ///
    /// A pattern with `d` don't-care positions yields `2^d` values, in
    /// ascending order.
    pub fn expand(&self) -> Expansion {
        let width = self.len();
        let mut base = 0u64;
        let mut free = Vec::new();
        for (i, b) in self.bits.iter().enumerate() {
            let mask = bit(width - 1 - i);
            match b {
                Some(true) => base |= mask,
                Some(false) => {}
                // Positions beyond u64 can only ever be 0
                None if mask != 0 => free.push(mask),
                None => {}
            }
        }
        // Least significant free position varies fastest
        free.reverse();
        Expansion {
            base,
            free,
            next: Some(0),
        }
    }
}

/// Iterator returned by [`BitPattern::expand`]
#[derive(Debug, Clone)]
pub struct Expansion {
    base: u64,
    free: Vec<u64>,
    next: Option<u64>,
}

impl Iterator for Expansion {
    type Item = u64;

    fn next(&mut self) -> Option<u64> {
        let counter = self.next?;
        let value = self
            .free
            .iter()
            .enumerate()
            .filter(|(k, _)| counter & bit(*k) != 0)
            .fold(self.base, |acc, (_, mask)| acc | mask);

        self.next = counter
            .checked_add(1)
            .filter(|c| self.free.len() >= u64::BITS as usize || c >> self.free.len() == 0);
        Some(value)
    }
}

impl fmt::Display for BitPattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for b in self.bits.iter() {
            let c = match b {
                Some(false) => '0',
                Some(true) => '1',
                None => '-',
            };
            write!(f, "{}", c)?;
        }
        Ok(())
    }
}

impl fmt::Debug for BitPattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "BitPattern(\"{}\")", self)
    }
}

/// Error returned when parsing a [`BitPattern`] from text
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsePatternError {
    /// The character that is not one of `0`, `1`, `-`
    pub symbol: char,
    /// Its index in the input
    pub position: usize,
}

impl fmt::Display for ParsePatternError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Invalid symbol '{}' at position {}. Expected '0', '1', or '-'.",
            self.symbol, self.position
        )
    }
}

impl std::error::Error for ParsePatternError {}

impl FromStr for BitPattern {
    type Err = ParsePatternError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let bits = s
            .chars()
            .enumerate()
            .map(|(position, symbol)| match symbol {
                '0' => Ok(Some(false)),
                '1' => Ok(Some(true)),
                '-' => Ok(None),
                _ => Err(ParsePatternError { symbol, position }),
            })
            .collect::<Result<Vec<_>, _>>()?;
        Ok(BitPattern { bits: bits.into() })
    }
}
