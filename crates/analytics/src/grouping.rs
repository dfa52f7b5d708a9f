//! Generic grouped counting and the chart-shaped report it feeds.

use std::collections::HashMap;
use std::hash::Hash;

use serde::{Deserialize, Serialize};

/// Partition `records` by a key-extraction rule and count each partition.
///
/// Iteration order of the result is unspecified; callers must not rely on
/// label stability across calls.
pub fn group_count<T, K, F>(records: &[T], mut key_of: F) -> HashMap<K, u64>
where
    K: Eq + Hash,
    F: FnMut(&T) -> K,
{
    let mut counts = HashMap::new();
    for record in records {
        *counts.entry(key_of(record)).or_insert(0) += 1;
    }
    counts
}

/// A grouped-count view packaged for consumers: `labels[i]` pairs with
/// `data[i]`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChartSeries {
    pub title: String,
    pub labels: Vec<String>,
    pub data: Vec<u64>,
}

impl ChartSeries {
    pub fn from_counts(title: impl Into<String>, counts: HashMap<String, u64>) -> Self {
        let mut labels = Vec::with_capacity(counts.len());
        let mut data = Vec::with_capacity(counts.len());
        for (label, count) in counts {
            labels.push(label);
            data.push(count);
        }
        Self {
            title: title.into(),
            labels,
            data,
        }
    }

    pub fn total(&self) -> u64 {
        self.data.iter().sum()
    }
}
