use super::*;
use std::ops::Range;

/// Mixed-radix odometer over strategy counts, player 0 fastest.
///
/// The cursor can be borrowed in place via [`ProfileIterator::current`] and
/// [`ProfileIterator::step`] for allocation-free sweeps, or the iterator can
/// be consumed as a plain `Iterator<Item = Profile>` that clones each profile.
/// A bounded iterator covers a contiguous range of flat indices, which is how
/// the profile space is partitioned across threads.
#[derive(Debug, Clone)]
pub struct ProfileIterator {
    radices: Vec<usize>,
    cursor: Profile,
    remaining: usize,
}

impl ProfileIterator {
    /// Increment coordinate 0, carrying into higher coordinates on overflow.
    /// Returns true once the carry propagates past the last player, at which
    /// point the profile has wrapped back to all zeros.
    pub fn advance(radices: &[usize], profile: &mut Profile) -> bool {
        for (digit, &radix) in profile.strategies_mut().iter_mut().zip(radices) {
            *digit += 1;
            if *digit < radix {
                return false;
            }
            *digit = 0;
        }
        true
    }

    /// the profile under the cursor, if any remain
    pub fn current(&self) -> Option<&Profile> {
        if self.remaining == 0 {
            None
        } else {
            Some(&self.cursor)
        }
    }

    /// move the cursor one profile forward
    pub fn step(&mut self) {
        if self.remaining > 0 {
            self.remaining -= 1;
            Self::advance(&self.radices, &mut self.cursor);
        }
    }
}

impl Iterator for ProfileIterator {
    type Item = Profile;
    fn next(&mut self) -> Option<Self::Item> {
        let profile = self.current().cloned();
        self.step();
        profile
    }
    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl ExactSizeIterator for ProfileIterator {}

/// Raw radices need not be validated: any zero radix
/// yields an empty space, and no radices yield the single empty profile.
/// A product that overflows `usize` saturates, leaving the odometer to
/// run until interrupted, which no validated [`Shape`] can produce.
impl From<Vec<usize>> for ProfileIterator {
    fn from(radices: Vec<usize>) -> Self {
        let remaining = radices
            .iter()
            .try_fold(1usize, |acc, &r| acc.checked_mul(r))
            .unwrap_or(usize::MAX);
        Self {
            cursor: Profile::zeros(radices.len()),
            radices,
            remaining,
        }
    }
}

impl From<&Shape> for ProfileIterator {
    fn from(shape: &Shape) -> Self {
        Self::from((shape, 0..shape.profiles()))
    }
}

/// seek to the first flat index of the range and stop after its length
impl From<(&Shape, Range<usize>)> for ProfileIterator {
    fn from((shape, range): (&Shape, Range<usize>)) -> Self {
        let cursor = if range.is_empty() {
            Profile::zeros(shape.players())
        } else {
            shape.decode(range.start)
        };
        Self {
            radices: shape.counts().to_vec(),
            cursor,
            remaining: range.len(),
        }
    }
}
