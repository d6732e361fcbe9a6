//! Generic group-and-sum aggregation.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Summed value for one category.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AggregationBucket {
    /// Category label.
    pub category: String,
    /// Sum of the value field over records in this category.
    pub total_value: f64,
}

/// Groups records by a label and sums a value per group.
///
/// Buckets appear in the order their category was first seen. A label that
/// is `None`, empty or only whitespace counts as `default_label`.
///
/// # Arguments
///
/// * `records` - Records to aggregate
/// * `key` - Extracts the category label
/// * `value` - Extracts the amount to sum
/// * `default_label` - Category for records with no label
#[must_use]
pub fn aggregate_by<T, K, V>(
    records: &[T],
    key: K,
    value: V,
    default_label: &str,
) -> Vec<AggregationBucket>
where
    K: Fn(&T) -> Option<&str>,
    V: Fn(&T) -> f64,
{
    let mut buckets: Vec<AggregationBucket> = Vec::new();
    let mut index: HashMap<String, usize> = HashMap::new();

    for record in records {
        let label = key(record)
            .map(str::trim)
            .filter(|l| !l.is_empty())
            .unwrap_or(default_label);
        let amount = value(record);

        match index.get(label) {
            Some(&i) => buckets[i].total_value += amount,
            None => {
                index.insert(label.to_string(), buckets.len());
                buckets.push(AggregationBucket {
                    category: label.to_string(),
                    total_value: amount,
                });
            }
        }
    }

    buckets
}

/// Keeps only buckets with a strictly positive total.
///
/// Charts only plot positive slices; zero and negative totals are dropped.
#[must_use]
pub fn positive_buckets(buckets: Vec<AggregationBucket>) -> Vec<AggregationBucket> {
    buckets.into_iter().filter(|b| b.total_value > 0.0).collect()
}

/// A bucket with its share of the distribution.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeightedBucket {
    /// Category label.
    pub category: String,
    /// Summed value in reporting currency.
    pub total_value: f64,
    /// Number of records in the bucket.
    pub count: usize,
    /// Weight as percentage of the distribution total (0-100).
    pub weight_pct: f64,
}

/// Distribution of values across categories.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Distribution {
    /// Buckets in first-seen order.
    pub buckets: Vec<WeightedBucket>,
    /// Sum over all buckets.
    pub total_value: f64,
}

impl Distribution {
    /// Builds a distribution from records.
    ///
    /// Weights are relative to the sum of all buckets, positive or not.
    #[must_use]
    pub fn from_records<T, K, V>(records: &[T], key: K, value: V, default_label: &str) -> Self
    where
        K: Fn(&T) -> Option<&str>,
        V: Fn(&T) -> f64,
    {
        let sums = aggregate_by(records, &key, &value, default_label);
        let counts = aggregate_by(records, &key, |_| 1.0, default_label);

        let total_value: f64 = sums.iter().map(|b| b.total_value).sum();

        let buckets = sums
            .into_iter()
            .zip(counts)
            .map(|(sum, count)| WeightedBucket {
                weight_pct: if total_value == 0.0 {
                    0.0
                } else {
                    sum.total_value / total_value * 100.0
                },
                category: sum.category,
                total_value: sum.total_value,
                count: count.total_value as usize,
            })
            .collect();

        Self {
            buckets,
            total_value,
        }
    }

    /// Returns the bucket for a category.
    #[must_use]
    pub fn get(&self, category: &str) -> Option<&WeightedBucket> {
        self.buckets.iter().find(|b| b.category == category)
    }

    /// Returns only strictly positive buckets.
    #[must_use]
    pub fn chartable(&self) -> Vec<&WeightedBucket> {
        self.buckets.iter().filter(|b| b.total_value > 0.0).collect()
    }

    /// Returns all buckets sorted by value descending.
    #[must_use]
    pub fn sorted_by_value(&self) -> Vec<&WeightedBucket> {
        let mut result: Vec<_> = self.buckets.iter().collect();
        result.sort_by(|a, b| {
            b.total_value
                .partial_cmp(&a.total_value)
                .unwrap_or(std::cmp::Ordering::Equal)
        });
        result
    }

    /// Plain category totals, for chart series.
    #[must_use]
    pub fn to_buckets(&self) -> Vec<AggregationBucket> {
        self.buckets
            .iter()
            .map(|b| AggregationBucket {
                category: b.category.clone(),
                total_value: b.total_value,
            })
            .collect()
    }

    /// Returns the number of distinct categories.
    #[must_use]
    pub fn bucket_count(&self) -> usize {
        self.buckets.len()
    }
}
