//! Search order for the slot closest to a requested one.

use std::iter::{FusedIterator, Rev};
use std::ops::Range;

use crate::util::SlotIndex;

/// Lazily yields every slot in `0..total`, nearest to `target` first.
///
/// The order is `s, s+1, s-1, s+2, s-2, ...`: later before earlier at equal
/// distance. Once one side runs out the other side is drained to its end.
#[derive(Debug, Clone)]
pub struct NearestSlots {
    target: Option<SlotIndex>,
    later: Range<SlotIndex>,
    earlier: Rev<Range<SlotIndex>>,
    later_turn: bool,
}

impl NearestSlots {
    /// Start a search around `target` over `0..total`.
    ///
    /// A target past the end of the range is treated as the last slot.
    pub fn new(target: SlotIndex, total: usize) -> Self {
        if total == 0 {
            return Self {
                target: None,
                later: 0..0,
                earlier: (0..0).rev(),
                later_turn: true,
            };
        }
        let target = target.min(total - 1);
        Self {
            target: Some(target),
            later: target + 1..total,
            earlier: (0..target).rev(),
            later_turn: true,
        }
    }
}

impl Iterator for NearestSlots {
    type Item = SlotIndex;

    fn next(&mut self) -> Option<SlotIndex> {
        if let Some(target) = self.target.take() {
            return Some(target);
        }
        let later_turn = self.later_turn;
        self.later_turn = !later_turn;
        if later_turn {
            self.later.next().or_else(|| self.earlier.next())
        } else {
            self.earlier.next().or_else(|| self.later.next())
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let n = usize::from(self.target.is_some()) + self.later.len() + self.earlier.len();
        (n, Some(n))
    }
}

impl ExactSizeIterator for NearestSlots {}

impl FusedIterator for NearestSlots {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_interior_target_alternates_later_first() {
        let order: Vec<_> = NearestSlots::new(5, 10).collect();
        assert_eq!(order, vec![5, 6, 4, 7, 3, 8, 2, 9, 1, 0]);
    }

    #[test]
    fn test_first_slot_drains_later() {
        let order: Vec<_> = NearestSlots::new(0, 4).collect();
        assert_eq!(order, vec![0, 1, 2, 3]);
    }

    #[test]
    fn test_last_slot_drains_earlier() {
        let order: Vec<_> = NearestSlots::new(3, 4).collect();
        assert_eq!(order, vec![3, 2, 1, 0]);
    }

    #[test]
    fn test_target_past_end_is_clamped() {
        let order: Vec<_> = NearestSlots::new(40, 3).collect();
        assert_eq!(order, vec![2, 1, 0]);
    }

    #[test]
    fn test_empty_range() {
        assert_eq!(NearestSlots::new(0, 0).count(), 0);
    }

    #[test]
    fn test_every_index_exactly_once() {
        for total in 1..12 {
            for target in 0..total {
                let mut seen: Vec<_> = NearestSlots::new(target, total).collect();
                seen.sort_unstable();
                assert_eq!(seen, (0..total).collect::<Vec<_>>(), "target {target} of {total}");
            }
        }
    }

    #[test]
    fn test_exact_size() {
        let mut it = NearestSlots::new(2, 6);
        assert_eq!(it.len(), 6);
        it.next();
        it.next();
        assert_eq!(it.len(), 4);
        it.by_ref().for_each(drop);
        assert_eq!(it.len(), 0);
        assert_eq!(it.next(), None);
    }
}
