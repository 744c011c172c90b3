use super::*;
use crate::Error;
use crate::Player;
use crate::Result;
use crate::Utility;
use crate::profile::*;
use rayon::prelude::*;
use std::ops::Range;

/// Best-response value of every player against every opponent context.
///
/// Each axis with a real choice gets one extra slot for its sentinel, so the
/// table holds `∏(s_i + 1)` entries over those axes. An opponent context for
/// player `p` is a profile whose coordinate `p` is replaced by the sentinel
/// `s_p`; its slot holds the largest utility `p` can reach by varying only
/// their own strategy. Slots with zero or several sentinels exist in the
/// layout but are never touched.
///
/// A player with a single strategy has nothing to vary, so their best
/// response is whatever they are paid. Their axis takes no room in the
/// table and they have no context at all. This keeps the table the same
/// size whether or not trivial players were compacted away first.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Maxima {
    strides: Vec<usize>,
    sentinels: Vec<Option<usize>>,
    values: Vec<Utility>,
}

impl Maxima {
    /// Sweep the whole tensor once, in parallel partitions when asked,
    /// and merge the partial tables with a pointwise max.
    pub fn build(tensor: &PayoffTensor, parallel: bool) -> Result<Self> {
        let ref empty = Self::empty(tensor.shape())?;
        let partitions = tensor.shape().partitions(parallel);
        log::debug!(
            "axis maxima: {} contexts over {} profiles in {} partitions",
            empty.values.len(),
            tensor.shape().profiles(),
            partitions.len()
        );
        Ok(partitions
            .into_par_iter()
            .map(|range| empty.clone().absorb(tensor, range))
            .reduce(|| empty.clone(), Self::merge))
    }

    /// Number of slots a table over this shape needs, or `Overflow` past
    /// `MAX_PROFILES`. A game is only worth building if this succeeds.
    pub fn slots(shape: &Shape) -> Result<usize> {
        shape
            .counts()
            .iter()
            .filter(|&&s| s > 1)
            .try_fold(1usize, |size, &s| {
                s.checked_add(1)
                    .and_then(|axis| size.checked_mul(axis))
                    .filter(|&size| size <= crate::MAX_PROFILES)
            })
            .ok_or_else(|| Error::Overflow(format!("axis maxima over {:?}", shape.counts())))
    }

    /// a table of negative infinities sized for the sentinel-augmented shape
    fn empty(shape: &Shape) -> Result<Self> {
        let size = Self::slots(shape)?;
        let mut strides = Vec::with_capacity(shape.players());
        let mut sentinels = Vec::with_capacity(shape.players());
        let mut stride = 1usize;
        for &s in shape.counts() {
            match s {
                1 => {
                    strides.push(0);
                    sentinels.push(None);
                }
                _ => {
                    strides.push(stride);
                    sentinels.push(Some(s * stride));
                    stride *= s + 1;
                }
            }
        }
        Ok(Self {
            strides,
            sentinels,
            values: vec![Utility::MIN; size],
        })
    }

    /// fold every profile of one partition into this table
    fn absorb(mut self, tensor: &PayoffTensor, range: Range<usize>) -> Self {
        let shape = tensor.shape();
        let mut iter = ProfileIterator::from((shape, range));
        while let Some(profile) = iter.current() {
            let utilities = tensor.payoff(profile);
            let base = self.base(profile);
            for (player, &utility) in utilities.iter().enumerate() {
                if let Some(index) = self.context(base, profile, player) {
                    let slot = &mut self.values[index];
                    *slot = (*slot).max(utility);
                }
            }
            iter.step();
        }
        self
    }

    /// pointwise max of two partial tables. associative and commutative
    fn merge(mut self, other: Self) -> Self {
        self.values
            .iter_mut()
            .zip(other.values)
            .for_each(|(mine, theirs)| *mine = (*mine).max(theirs));
        self
    }

    /// augmented index of the profile itself, no sentinels
    fn base(&self, profile: &Profile) -> usize {
        profile
            .strategies()
            .iter()
            .zip(self.strides.iter())
            .map(|(s, stride)| s * stride)
            .sum()
    }

    /// swap the player's coordinate in a base index for their sentinel
    fn context(&self, base: usize, profile: &Profile, player: Player) -> Option<usize> {
        self.sentinels[player]
            .map(|sentinel| base - profile[player] * self.strides[player] + sentinel)
    }

    /// Best utility the player could reach holding everyone else fixed.
    /// `None` for a player with a single strategy.
    pub fn get(&self, profile: &Profile, player: Player) -> Option<Utility> {
        self.context(self.base(profile), profile, player)
            .map(|index| self.values[index])
    }

    /// [`Maxima::get`] for every player at once, sharing one base index
    pub fn row<'a>(&'a self, profile: &'a Profile) -> impl Iterator<Item = Option<Utility>> + 'a {
        let base = self.base(profile);
        (0..profile.players()).map(move |player| {
            self.context(base, profile, player)
                .map(|index| self.values[index])
        })
    }
}
