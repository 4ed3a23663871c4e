//! Label grouping: partitioning training sample indices by class.
//!
//! Labels are mapped to dense ordinals at grouping time so that every
//! downstream table is a plain `Vec` indexed by ordinal rather than a map
//! keyed by label. Ordinals follow first-seen order over the label
//! sequence; indices within each group are ascending.

use std::collections::HashMap;
use std::hash::Hash;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Dense label-to-ordinal index fixed at fit time.
///
/// Class cardinality is expected to be small, so reverse lookup is a linear
/// scan and the type stays serializable for any label type.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClassIndex<L> {
    classes: Vec<L>,
}

impl<L: Eq> ClassIndex<L> {
    /// Number of distinct classes.
    pub fn len(&self) -> usize {
        self.classes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.classes.is_empty()
    }

    /// Label for a given ordinal.
    pub fn label(&self, ordinal: usize) -> Option<&L> {
        self.classes.get(ordinal)
    }

    /// All labels, in ordinal order.
    pub fn labels(&self) -> &[L] {
        &self.classes
    }

    /// Ordinal for a given label, if it occurred in training.
    pub fn ordinal_of(&self, label: &L) -> Option<usize> {
        self.classes.iter().position(|c| c == label)
    }
}

/// Partition of training sample indices by class label.
#[derive(Debug, Clone, PartialEq)]
pub struct Grouping<L> {
    index: ClassIndex<L>,
    groups: Vec<Vec<usize>>,
    n_samples: usize,
}

impl<L: Eq + Hash + Clone> Grouping<L> {
    /// Group sample indices by label.
    ///
    /// First pass assigns ordinals in first-seen order; second pass buckets
    /// indices, so indices within each group come out ascending.
    ///
    /// # Errors
    /// [`Error::EmptyTrainingSet`] when `labels` is empty.
    pub fn from_labels(labels: &[L]) -> Result<Self> {
        if labels.is_empty() {
            return Err(Error::EmptyTrainingSet);
        }

        let mut lookup: HashMap<L, usize> = HashMap::new();
        let mut classes: Vec<L> = Vec::new();
        for label in labels {
            if !lookup.contains_key(label) {
                lookup.insert(label.clone(), classes.len());
                classes.push(label.clone());
            }
        }

        let mut groups = vec![Vec::new(); classes.len()];
        for (i, label) in labels.iter().enumerate() {
            groups[lookup[label]].push(i);
        }

        Ok(Self {
            index: ClassIndex { classes },
            groups,
            n_samples: labels.len(),
        })
    }
}

impl<L: Eq> Grouping<L> {
    /// Number of distinct classes.
    pub fn n_classes(&self) -> usize {
        self.groups.len()
    }

    /// Total number of training samples across all groups.
    pub fn n_samples(&self) -> usize {
        self.n_samples
    }

    /// Sample indices for the class at `ordinal`.
    pub fn group(&self, ordinal: usize) -> &[usize] {
        &self.groups[ordinal]
    }

    /// Sample indices for a label, if it occurred in training.
    pub fn indices_of(&self, label: &L) -> Option<&[usize]> {
        self.index.ordinal_of(label).map(|o| self.groups[o].as_slice())
    }

    /// The label-to-ordinal index.
    pub fn class_index(&self) -> &ClassIndex<L> {
        &self.index
    }

    /// Consume the grouping, keeping only the class index.
    pub fn into_class_index(self) -> ClassIndex<L> {
        self.index
    }

    /// Iterate over `(label, indices)` pairs in ordinal order.
    pub fn iter(&self) -> impl Iterator<Item = (&L, &[usize])> {
        self.index
            .classes
            .iter()
            .zip(self.groups.iter().map(Vec::as_slice))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn groups_ratings_example() {
        let labels = ["Y", "N", "Y", "Y"];
        let grouping = Grouping::from_labels(&labels).unwrap();

        assert_eq!(grouping.n_classes(), 2);
        assert_eq!(grouping.n_samples(), 4);
        assert_eq!(grouping.indices_of(&"Y"), Some(&[0, 2, 3][..]));
        assert_eq!(grouping.indices_of(&"N"), Some(&[1][..]));
        assert_eq!(grouping.indices_of(&"?"), None);
    }

    #[test]
    fn ordinals_follow_first_seen_order() {
        let labels = ["b", "a", "b", "c", "a"];
        let grouping = Grouping::from_labels(&labels).unwrap();

        assert_eq!(grouping.class_index().labels(), ["b", "a", "c"]);
        assert_eq!(grouping.class_index().ordinal_of(&"a"), Some(1));
        assert_eq!(grouping.group(0), [0, 2]);
        assert_eq!(grouping.group(1), [1, 4]);
        assert_eq!(grouping.group(2), [3]);
    }

    #[test]
    fn groups_partition_the_index_range() {
        let labels = [3u8, 1, 4, 1, 5, 9, 2, 6, 5, 3, 5];
        let grouping = Grouping::from_labels(&labels).unwrap();

        let mut seen = vec![false; labels.len()];
        for (_, indices) in grouping.iter() {
            let mut prev = None;
            for &i in indices {
                assert!(!seen[i], "index {i} appears twice");
                seen[i] = true;
                if let Some(p) = prev {
                    assert!(i > p, "indices not ascending");
                }
                prev = Some(i);
            }
        }
        assert!(seen.iter().all(|s| *s), "some index missing from grouping");
    }

    #[test]
    fn single_label_training_set_is_valid() {
        let labels = ["only"; 5];
        let grouping = Grouping::from_labels(&labels).unwrap();
        assert_eq!(grouping.n_classes(), 1);
        assert_eq!(grouping.group(0), [0, 1, 2, 3, 4]);
    }

    #[test]
    fn empty_labels_rejected() {
        let labels: [u32; 0] = [];
        assert_eq!(
            Grouping::from_labels(&labels).unwrap_err(),
            Error::EmptyTrainingSet
        );
    }
}
