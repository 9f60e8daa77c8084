//! Id-pair fan-out for names shared by several employees.

use std::collections::HashSet;

use itertools::Itertools;

use crate::domain::entities::{EmployeeId, IdPair};

/// Every unordered pair of distinct ids taking one id from each side.
///
/// Pairs are emitted in cross-product order (`ids_1` outer, `ids_2` inner).
/// The first orientation met wins; its reverse and self-pairs are dropped.
pub fn ensure_uniqueness(ids_1: &[EmployeeId], ids_2: &[EmployeeId]) -> Vec<IdPair> {
    let mut seen: HashSet<(&str, &str)> = HashSet::new();
    let mut pairs = Vec::new();

    for (a, b) in ids_1.iter().cartesian_product(ids_2) {
        if a == b || seen.contains(&(b.as_str(), a.as_str())) {
            continue;
        }
        if seen.insert((a.as_str(), b.as_str())) {
            pairs.push((a.clone(), b.clone()));
        }
    }
    pairs
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ids(raw: &[&str]) -> Vec<EmployeeId> {
        raw.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_ensure_uniqueness_drops_reverse_and_self_pairs() {
        let pairs = ensure_uniqueness(&ids(&["17", "18"]), &ids(&["17", "18"]));
        assert_eq!(pairs, vec![("17".to_string(), "18".to_string())]);
    }

    #[test]
    fn test_ensure_uniqueness_full_cross_product() {
        let pairs = ensure_uniqueness(&ids(&["16"]), &ids(&["17", "18"]));
        assert_eq!(
            pairs,
            vec![
                ("16".to_string(), "17".to_string()),
                ("16".to_string(), "18".to_string()),
            ]
        );
    }

    #[test]
    fn test_ensure_uniqueness_with_empty_side() {
        assert!(ensure_uniqueness(&ids(&[]), &ids(&["1"])).is_empty());
        assert!(ensure_uniqueness(&ids(&["1"]), &ids(&[])).is_empty());
    }

    #[test]
    fn test_ensure_uniqueness_single_self_match() {
        assert!(ensure_uniqueness(&ids(&["1"]), &ids(&["1"])).is_empty());
    }

    #[test]
    fn test_ensure_uniqueness_three_namesakes() {
        let pairs = ensure_uniqueness(&ids(&["1", "2", "3"]), &ids(&["1", "2", "3"]));
        assert_eq!(pairs.len(), 3);
        for (a, b) in &pairs {
            assert_ne!(a, b);
            assert!(!pairs.contains(&(b.clone(), a.clone())));
        }
    }
}
