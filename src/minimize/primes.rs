//! Prime implicant generation by iterative merging

use super::error::{LimitKind, MinimizeError};
use super::groups::Groups;
use super::MinimizeConfig;
use crate::pattern::BitPattern;
use indexmap::IndexSet;
use std::collections::HashSet;

/// Merge patterns level by level until nothing merges, collecting every
/// pattern that was never absorbed into a more general one.
///
/// The result is in discovery order, which later decides ties during cover
/// selection.
pub(crate) fn prime_implicants(
    initial: Groups,
    config: &MinimizeConfig,
) -> Result<IndexSet<BitPattern>, MinimizeError> {
    let mut primes = IndexSet::new();
    let mut consumed: HashSet<BitPattern> = HashSet::new();
    let mut groups = initial;
    let mut rounds = 0usize;

    loop {
        let mut next = Groups::new();
        let mut consumed_now: HashSet<BitPattern> = HashSet::new();

        for (lower, upper) in groups.adjacent_pairs() {
            for a in lower {
                for b in upper {
                    if let Some(merged) = a.merge(b) {
                        consumed_now.insert(a.clone());
                        consumed_now.insert(b.clone());
                        next.insert(merged);
                    }
                }
            }
        }

        let found_new = !consumed_now.is_empty();

        for pattern in groups.patterns() {
            if !consumed_now.contains(pattern) && !consumed.contains(pattern) {
                primes.insert(pattern.clone());
            }
        }

        log::trace!(
            "merge round {}: {} patterns in {} groups, {} merged, {} produced, {} primes so far",
            rounds,
            groups.len(),
            groups.num_groups(),
            consumed_now.len(),
            next.len(),
            primes.len()
        );

        consumed.extend(consumed_now);
        groups = next;

        if !found_new {
            break;
        }

        rounds += 1;
        if let Some(limit) = config.max_rounds {
            if rounds > limit {
                return Err(MinimizeError::ComputationTooLarge {
                    kind: LimitKind::Rounds,
                    limit,
                    reached: rounds,
                });
            }
        }
        if let Some(limit) = config.max_implicants {
            if groups.len() > limit {
                return Err(MinimizeError::ComputationTooLarge {
                    kind: LimitKind::Implicants,
                    limit,
                    reached: groups.len(),
                });
            }
        }
    }

    // Whatever is left from the last round has nothing to merge against
    for pattern in groups.patterns() {
        primes.insert(pattern.clone());
    }

    log::debug!(
        "found {} prime implicants after {} merge rounds",
        primes.len(),
        rounds
    );
    Ok(primes)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn p(s: &str) -> BitPattern {
        s.parse().unwrap()
    }

    fn primes_of(minterms: &[u64], width: usize) -> Vec<BitPattern> {
        let groups = Groups::from_minterms(minterms, width);
        prime_implicants(groups, &MinimizeConfig::default())
            .unwrap()
            .into_iter()
            .collect()
    }

    #[test]
    fn test_empty_input() {
        assert!(primes_of(&[], 3).is_empty());
    }

    #[test]
    fn test_single_minterm_is_prime() {
        assert_eq!(primes_of(&[5], 3), vec![p("101")]);
    }

    #[test]
    fn test_simple_merge() {
        assert_eq!(primes_of(&[0, 1], 2), vec![p("0-")]);
    }

    #[test]
    fn test_isolated_term_kept_alongside_merges() {
        // 0 and 1 merge, 6 has no neighbour
        assert_eq!(primes_of(&[0, 1, 6], 3), vec![p("110"), p("00-")]);
    }

    #[test]
    fn test_all_minterms_collapse_to_tautology() {
        assert_eq!(primes_of(&[0, 1, 2, 3], 2), vec![p("--")]);
        assert_eq!(primes_of(&[0, 1, 2, 3, 4, 5, 6, 7], 3), vec![p("---")]);
    }

    #[test]
    fn test_duplicate_merge_paths_deduplicated() {
        // -0- is reached from both 00-/10- and -00/-01
        let primes = primes_of(&[0, 1, 4, 5], 3);
        assert_eq!(primes, vec![p("-0-")]);
    }

    #[test]
    fn test_classic_example() {
        // f = sum m(0, 1, 2, 5, 6, 7)
        let primes = primes_of(&[0, 1, 2, 5, 6, 7], 3);
        let expected: HashSet<BitPattern> = ["00-", "0-0", "-01", "-10", "1-1", "11-"]
            .iter()
            .map(|s| p(s))
            .collect();
        assert_eq!(primes.len(), 6);
        assert_eq!(primes.into_iter().collect::<HashSet<_>>(), expected);
    }

    #[test]
    fn test_round_limit() {
        let groups = Groups::from_minterms(&[0, 1, 2, 3], 2);
        let config = MinimizeConfig::new().with_max_rounds(1);
        let err = prime_implicants(groups, &config).unwrap_err();
        assert_eq!(
            err,
            MinimizeError::ComputationTooLarge {
                kind: LimitKind::Rounds,
                limit: 1,
                reached: 2
            }
        );
    }

    #[test]
    fn test_implicant_limit() {
        let groups = Groups::from_minterms(&[0, 1, 2, 3], 2);
        let config = MinimizeConfig::new().with_max_implicants(3);
        let err = prime_implicants(groups, &config).unwrap_err();
        assert!(matches!(
            err,
            MinimizeError::ComputationTooLarge {
                kind: LimitKind::Implicants,
                limit: 3,
                reached: 4
            }
        ));
    }

    #[test]
    fn test_limits_not_hit() {
        let groups = Groups::from_minterms(&[0, 1, 2, 3], 2);
        let config = MinimizeConfig::new()
            .with_max_rounds(2)
            .with_max_implicants(4);
        assert_eq!(prime_implicants(groups, &config).unwrap().len(), 1);
    }
}
