//! Slice and map helpers

use std::collections::HashMap;
use std::hash::{BuildHasher, Hash};

pub trait SliceExt<T> {
    /// First occurrence of every element, in original order.
    ///
    /// Needs only `PartialEq`, so the scan is quadratic.
    fn removing_duplicates(&self) -> Vec<T>;
}

impl<T: PartialEq + Clone> SliceExt<T> for [T] {
    fn removing_duplicates(&self) -> Vec<T> {
        let mut unique: Vec<T> = Vec::with_capacity(self.len());
        for element in self {
            if !unique.contains(element) {
                unique.push(element.clone());
            }
        }
        unique
    }
}

/// Merging helpers on hash maps. On key collisions `other` wins.
pub trait MapExt {
    fn merging(&self, other: &Self) -> Self;

    fn merge_with(&mut self, other: Self);
}

impl<K, V, S> MapExt for HashMap<K, V, S>
where
    K: Eq + Hash + Clone,
    V: Clone,
    S: BuildHasher + Clone,
{
    fn merging(&self, other: &Self) -> Self {
        let mut merged = self.clone();
        merged.extend(other.iter().map(|(k, v)| (k.clone(), v.clone())));
        merged
    }

    fn merge_with(&mut self, other: Self) {
        self.extend(other);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_removing_duplicates() {
        assert_eq!([1, 2, 2, 3, 1, 4].removing_duplicates(), vec![1, 2, 3, 4]);
        assert_eq!(
            vec!["b", "a", "b"].removing_duplicates(),
            vec!["b", "a"]
        );
        let empty: [u8; 0] = [];
        assert!(empty.removing_duplicates().is_empty());
    }

    #[test]
    fn test_removing_duplicates_partial_eq_only() {
        let values = [1.5, f64::NAN, 1.5, 2.0];
        let unique = values.removing_duplicates();
        assert_eq!(unique.len(), 3);
        assert_eq!(unique[0], 1.5);
        assert_eq!(unique[2], 2.0);
    }

    #[test]
    fn test_merging() {
        let base = HashMap::from([("a", 1), ("b", 2)]);
        let other = HashMap::from([("b", 20), ("c", 30)]);
        let merged = base.merging(&other);

        assert_eq!(merged, HashMap::from([("a", 1), ("b", 20), ("c", 30)]));
        // Original is untouched
        assert_eq!(base.get("b"), Some(&2));
    }

    #[test]
    fn test_merge_with() {
        let mut base = HashMap::from([("a".to_string(), 1)]);
        base.merge_with(HashMap::from([("a".to_string(), 10), ("z".to_string(), 26)]));
        assert_eq!(base.len(), 2);
        assert_eq!(base["a"], 10);
        assert_eq!(base["z"], 26);
    }
}
