//! Prime implicant coverage table

use crate::pattern::BitPattern;
use indexmap::IndexMap;
use std::collections::{BTreeSet, HashSet};

/// Maps each prime implicant to the input minterms it covers
///
/// Entries keep the order in which the implicants were discovered, which is
/// the iteration order cover selection uses to break ties.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CoverageTable {
    entries: IndexMap<BitPattern, BTreeSet<u64>>,
}

impl CoverageTable {
    /// Expand every implicant and keep only values present in `minterms`
    pub(crate) fn build<'a>(
        primes: impl IntoIterator<Item = &'a BitPattern>,
        minterms: &HashSet<u64>,
    ) -> Self {
        let entries = primes
            .into_iter()
            .map(|prime| {
                let covered = prime.expand().filter(|m| minterms.contains(m)).collect();
                (prime.clone(), covered)
            })
            .collect();
        CoverageTable { entries }
    }

    /// Number of implicants in the table
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True if the table has no implicants
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Minterms covered by `implicant`, if it is in the table
    pub fn coverage(&self, implicant: &BitPattern) -> Option<&BTreeSet<u64>> {
        self.entries.get(implicant)
    }

    /// Iterate over `(implicant, covered minterms)` in table order
    pub fn iter(&self) -> impl Iterator<Item = (&BitPattern, &BTreeSet<u64>)> {
        self.entries.iter()
    }

    /// Implicants whose coverage contains `minterm`, in table order
    pub fn covering(&self, minterm: u64) -> impl Iterator<Item = &BitPattern> {
        self.entries
            .iter()
            .filter(move |(_, covered)| covered.contains(&minterm))
            .map(|(implicant, _)| implicant)
    }
}
