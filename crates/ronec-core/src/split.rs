//! Train/dev partitioning.
//!
//! The split is computed from a fixed sentence total rather than from the
//! parsed corpus, and both parts are contiguous slices in corpus order.

use serde::Serialize;

use crate::error::{Result, RonecError};

/// Number of sentences in the published RONEC release.
pub const RONEC_TOTAL_SENTENCES: usize = 5127;

/// Fraction of sentences sent to the dev split by default.
pub const DEFAULT_DEV_RATIO: f64 = 0.1;

/// Checks that `ratio` lies in `[0, 1]`.
///
/// # Errors
///
/// Returns `RonecError::InvalidDevRatio` otherwise, NaN included.
pub fn validate_dev_ratio(ratio: f64) -> Result<f64> {
    if (0.0..=1.0).contains(&ratio) {
        Ok(ratio)
    } else {
        Err(RonecError::InvalidDevRatio(ratio))
    }
}

/// How many sentences go to each split.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SplitPlan {
    pub total: usize,
    pub dev_ratio: f64,
    pub train_count: usize,
    pub dev_count: usize,
}

/// The two contiguous parts of a corpus.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Split<'a, T> {
    pub train: &'a [T],
    pub dev: &'a [T],
}

impl SplitPlan {
    /// `train_count = floor((1 - dev_ratio) * total)`, the rest goes to dev.
    ///
    /// # Errors
    ///
    /// Returns `RonecError::InvalidDevRatio` if `dev_ratio` is outside `[0, 1]`.
    pub fn new(total: usize, dev_ratio: f64) -> Result<Self> {
        let dev_ratio = validate_dev_ratio(dev_ratio)?;
        let train_count = (((1.0 - dev_ratio) * total as f64) as usize).min(total);

        Ok(Self {
            total,
            dev_ratio,
            train_count,
            dev_count: total - train_count,
        })
    }

    /// Slices `items` into `[0, train_count)` and
    /// `[train_count, train_count + dev_count)`, clamped to `items.len()`.
    pub fn apply<'a, T>(&self, items: &'a [T]) -> Split<'a, T> {
        let train_end = self.train_count.min(items.len());
        let dev_end = (self.train_count + self.dev_count).min(items.len());

        Split {
            train: &items[..train_end],
            dev: &items[train_end..dev_end],
        }
    }

    /// Planned sentences that `available` cannot provide.
    pub fn shortfall(&self, available: usize) -> usize {
        self.total.saturating_sub(available)
    }

    /// Available sentences that fall outside both splits.
    pub fn surplus(&self, available: usize) -> usize {
        available.saturating_sub(self.total)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counts_always_sum_to_total() {
        for total in [0, 1, 7, 10, 333, RONEC_TOTAL_SENTENCES] {
            for step in 0..=100 {
                let ratio = step as f64 / 100.0;
                let plan = SplitPlan::new(total, ratio).unwrap();
                assert_eq!(
                    plan.train_count + plan.dev_count,
                    total,
                    "total {total}, ratio {ratio}"
                );
            }
        }
    }

    #[test]
    fn default_ratio_on_ronec() {
        let plan = SplitPlan::new(RONEC_TOTAL_SENTENCES, DEFAULT_DEV_RATIO).unwrap();
        assert_eq!(plan.train_count, 4614);
        assert_eq!(plan.dev_count, 513);
    }

    #[test]
    fn zero_ratio_has_empty_dev() {
        let items: Vec<u32> = (0..10).collect();
        let plan = SplitPlan::new(10, 0.0).unwrap();
        let split = plan.apply(&items);
        assert_eq!(split.train.len(), 10);
        assert!(split.dev.is_empty());
    }

    #[test]
    fn full_ratio_has_empty_train() {
        let items: Vec<u32> = (0..10).collect();
        let plan = SplitPlan::new(10, 1.0).unwrap();
        let split = plan.apply(&items);
        assert!(split.train.is_empty());
        assert_eq!(split.dev, &items[..]);
    }

    #[test]
    fn slices_are_contiguous_and_ordered() {
        let items: Vec<u32> = (0..10).collect();
        let split = SplitPlan::new(10, 0.1).unwrap().apply(&items);
        assert_eq!(split.train, &items[..9]);
        assert_eq!(split.dev, &[9]);
    }

    #[test]
    fn short_corpus_is_clamped() {
        let items: Vec<u32> = (0..5).collect();
        let plan = SplitPlan::new(10, 0.3).unwrap();
        let split = plan.apply(&items);
        assert_eq!(split.train.len(), 5);
        assert!(split.dev.is_empty());
        assert_eq!(plan.shortfall(items.len()), 5);
    }

    #[test]
    fn long_corpus_leaves_surplus_out() {
        let items: Vec<u32> = (0..12).collect();
        let plan = SplitPlan::new(10, 0.5).unwrap();
        let split = plan.apply(&items);
        assert_eq!(split.train.len() + split.dev.len(), 10);
        assert_eq!(plan.surplus(items.len()), 2);
    }

    #[test]
    fn rejects_out_of_range_ratios() {
        for bad in [-0.01, 1.01, f64::NAN, f64::INFINITY] {
            assert!(matches!(
                SplitPlan::new(10, bad),
                Err(RonecError::InvalidDevRatio(_))
            ));
        }
    }
}
