#![forbid(unsafe_code)]

//! Stagger: per-element start offsets for cascading animations.
//!
//! A [`Stagger`] spreads a batch of targets that share one tween out in
//! time with a fixed gap between neighbours. [`Stagger::offsets`] returns
//! one start offset per element in declaration order, which the timeline
//! adds to the batch start time. The first-declared element always starts
//! first.
//!
//! # Invariants
//!
//! 1. `offsets(0)` is empty.
//! 2. `offset[i] = i * each`, computed in exact integer arithmetic.
//! 3. `span(count)` equals the last offset.

use std::time::Duration;

/// Fixed gap between neighbouring elements of one batched tween.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Stagger {
    /// Gap between neighbouring elements.
    pub each: Duration,
}

impl Stagger {
    /// Stagger with `each` between neighbours.
    #[must_use]
    pub const fn each(each: Duration) -> Self {
        Self { each }
    }

    /// Offset of the last element.
    #[must_use]
    pub fn span(&self, count: usize) -> Duration {
        self.each
            .saturating_mul(count.saturating_sub(1) as u32)
    }

    /// Start offsets for `count` elements in declaration order.
    #[must_use]
    pub fn offsets(&self, count: usize) -> Vec<Duration> {
        (0..count)
            .map(|i| self.each.saturating_mul(i as u32))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    const MS_50: Duration = Duration::from_millis(50);
    const MS_100: Duration = Duration::from_millis(100);

    #[test]
    fn zero_count_returns_empty() {
        assert!(Stagger::each(MS_100).offsets(0).is_empty());
        assert_eq!(Stagger::each(MS_100).span(0), Duration::ZERO);
    }

    #[test]
    fn single_item_returns_zero() {
        assert_eq!(Stagger::each(MS_100).offsets(1), vec![Duration::ZERO]);
    }

    #[test]
    fn linear_equal_spacing() {
        let offsets = Stagger::each(MS_50).offsets(4);
        assert_eq!(
            offsets,
            vec![
                Duration::ZERO,
                MS_50,
                Duration::from_millis(100),
                Duration::from_millis(150)
            ]
        );
    }

    #[test]
    fn span_matches_last_offset() {
        let stagger = Stagger::each(MS_100);
        let offsets = stagger.offsets(6);
        assert_eq!(Some(&stagger.span(6)), offsets.last());
        assert_eq!(stagger.span(1), Duration::ZERO);
    }

    #[test]
    fn zero_gap_all_zero() {
        let offsets = Stagger::each(Duration::ZERO).offsets(5);
        assert!(offsets.iter().all(|d| d.is_zero()));
    }
}
