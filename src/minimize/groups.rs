//! Grouping of patterns by ones count

use crate::pattern::BitPattern;
use indexmap::IndexSet;
use std::collections::{BTreeMap, BTreeSet};

/// Patterns sharing one grouping key, in first-insertion order
pub(crate) type Group = IndexSet<BitPattern>;

/// Patterns partitioned by [`BitPattern::group_key`], ascending by key
///
/// Concrete minterms have no don't-care positions, so their key is the plain
/// ones count; merged patterns count each don't care as a one.
#[derive(Debug, Clone, Default)]
pub(crate) struct Groups {
    groups: BTreeMap<usize, Group>,
}

impl Groups {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// Encode and group minterms that already passed the range check
    ///
    /// Minterms are inserted in ascending order whatever order the caller
    /// listed them in, so every later stage depends only on the minterm set.
    pub(crate) fn from_minterms(minterms: &[u64], width: usize) -> Self {
        let distinct: BTreeSet<u64> = minterms.iter().copied().collect();
        let mut groups = Self::new();
        for m in distinct {
            groups.insert(BitPattern::encode(m, width));
        }
        groups
    }

    /// Add a pattern to its group; returns false if it was already present
    pub(crate) fn insert(&mut self, pattern: BitPattern) -> bool {
        self.groups
            .entry(pattern.group_key())
            .or_default()
            .insert(pattern)
    }

    /// Total number of patterns across all groups
    pub(crate) fn len(&self) -> usize {
        self.groups.values().map(IndexSet::len).sum()
    }

    #[cfg(test)]
    pub(crate) fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    pub(crate) fn num_groups(&self) -> usize {
        self.groups.len()
    }

    /// All patterns, by ascending key then insertion order
    pub(crate) fn patterns(&self) -> impl Iterator<Item = &BitPattern> {
        self.groups.values().flatten()
    }

    /// Consecutive present groups whose keys differ by exactly one
    pub(crate) fn adjacent_pairs(&self) -> impl Iterator<Item = (&Group, &Group)> {
        self.groups
            .iter()
            .zip(self.groups.iter().skip(1))
            .filter(|((lower, _), (upper, _))| **upper == **lower + 1)
            .map(|((_, lower), (_, upper))| (lower, upper))
    }

    #[cfg(test)]
    pub(crate) fn keys(&self) -> Vec<usize> {
        self.groups.keys().copied().collect()
    }

    #[cfg(test)]
    pub(crate) fn group(&self, key: usize) -> Option<&Group> {
        self.groups.get(&key)
    }
}
