//! Cover selection: essential implicants first, then greedy picks

use super::table::CoverageTable;
use crate::pattern::BitPattern;
use indexmap::IndexSet;
use std::collections::HashSet;

/// Implicants chosen to cover every input minterm
///
/// Essential implicants come first, in the order the caller's minterms first
/// required them, followed by greedy picks in selection order. Which
/// implicants are selected depends only on the minterm set.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SelectedCover {
    implicants: IndexSet<BitPattern>,
    essential: usize,
}

impl SelectedCover {
    /// The selected implicants in selection order
    pub fn implicants(&self) -> impl Iterator<Item = &BitPattern> {
        self.implicants.iter()
    }

    /// How many of the leading implicants were essential
    pub fn essential_count(&self) -> usize {
        self.essential
    }

    /// The selected implicants that were not essential
    pub fn greedy(&self) -> impl Iterator<Item = &BitPattern> {
        self.implicants.iter().skip(self.essential)
    }

    /// Number of selected implicants
    pub fn len(&self) -> usize {
        self.implicants.len()
    }

    /// True if nothing was selected (only for an empty minterm list)
    pub fn is_empty(&self) -> bool {
        self.implicants.is_empty()
    }

    /// Whether `implicant` was selected
    pub fn contains(&self, implicant: &BitPattern) -> bool {
        self.implicants.contains(implicant)
    }
}

/// Choose implicants from `table` until every minterm is covered
///
/// `minterms` is scanned in caller order; duplicates are harmless.
pub(crate) fn select(table: &CoverageTable, minterms: &[u64]) -> SelectedCover {
    let mut implicants: IndexSet<BitPattern> = IndexSet::new();
    let mut covered: HashSet<u64> = HashSet::new();

    // Marking minterms covered can leave others with a single candidate, so
    // rescan until a pass selects nothing.
    loop {
        let mut found = false;
        for &minterm in minterms {
            if covered.contains(&minterm) {
                continue;
            }

            let mut candidates = table.covering(minterm);
            if let (Some(implicant), None) = (candidates.next(), candidates.next()) {
                implicants.insert(implicant.clone());
                if let Some(coverage) = table.coverage(implicant) {
                    covered.extend(coverage.iter().copied());
                }
                found = true;
            }
        }
        if !found {
            break;
        }
    }
    let essential = implicants.len();

    let distinct: HashSet<u64> = minterms.iter().copied().collect();
    while covered.len() < distinct.len() {
        let mut best: Option<(&BitPattern, usize)> = None;

        for (implicant, coverage) in table.iter() {
            if implicants.contains(implicant) {
                continue;
            }
            let gain = coverage.iter().filter(|m| !covered.contains(*m)).count();
            // Strictly greater: the first entry in table order wins ties
            if gain > best.map_or(0, |(_, g)| g) {
                best = Some((implicant, gain));
            }
        }

        let Some((implicant, _)) = best else {
            break;
        };
        implicants.insert(implicant.clone());
        if let Some(coverage) = table.coverage(implicant) {
            covered.extend(coverage.iter().copied());
        }
    }

    log::debug!(
        "selected {} implicants ({} essential, {} greedy) for {} minterms",
        implicants.len(),
        essential,
        implicants.len() - essential,
        distinct.len()
    );

    SelectedCover {
        implicants,
        essential,
    }
}
