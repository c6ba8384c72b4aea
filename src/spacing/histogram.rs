use serde::Serialize;
use std::collections::BTreeMap;

/// Frequency of integer-rounded spacing values.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SpacingHistogram {
    counts: BTreeMap<u32, usize>,
}

/// One histogram bin.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct Bin {
    pub value: u32,
    pub count: usize,
}

impl SpacingHistogram {
    /// Rounds every value to the nearest integer (halves away from zero) and
    /// counts occurrences. Negative and non-finite values are ignored.
    pub fn from_values(values: &[f32]) -> Self {
        let mut counts = BTreeMap::new();
        for &v in values {
            if !v.is_finite() || v < 0.0 {
                continue;
            }
            let key = v.round() as u32;
            *counts.entry(key).or_insert(0) += 1;
        }
        Self { counts }
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Number of distinct values.
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    pub fn count(&self, value: u32) -> usize {
        self.counts.get(&value).copied().unwrap_or(0)
    }

    pub fn total(&self) -> usize {
        self.counts.values().sum()
    }

    /// Bins in ascending value order.
    pub fn by_value(&self) -> Vec<Bin> {
        self.counts
            .iter()
            .map(|(&value, &count)| Bin { value, count })
            .collect()
    }

    /// Bins by descending count, ties by ascending value.
    pub fn by_count(&self) -> Vec<Bin> {
        let mut bins = self.by_value();
        bins.sort_by(|a, b| b.count.cmp(&a.count).then(a.value.cmp(&b.value)));
        bins
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rounds_and_counts() {
        let hist = SpacingHistogram::from_values(&[10.0, 10.2, 9.6, 11.0, 20.4, 20.5]);
        assert_eq!(hist.count(10), 3);
        assert_eq!(hist.count(11), 1);
        assert_eq!(hist.count(20), 1);
        assert_eq!(hist.count(21), 1);
        assert_eq!(hist.total(), 6);
    }

    #[test]
    fn by_count_orders_ties_by_value() {
        let hist = SpacingHistogram::from_values(&[7.0, 3.0, 3.0, 7.0, 5.0]);
        let bins = hist.by_count();
        assert_eq!(
            bins,
            vec![
                Bin { value: 3, count: 2 },
                Bin { value: 7, count: 2 },
                Bin { value: 5, count: 1 },
            ]
        );
    }

    #[test]
    fn skips_invalid_values() {
        let hist = SpacingHistogram::from_values(&[-4.0, f32::NAN, f32::INFINITY]);
        assert!(hist.is_empty());
    }
}
