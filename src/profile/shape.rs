use super::*;
use crate::Error;
use crate::Player;
use crate::Result;
use crate::Strategy;
use std::ops::Range;

/// Strategy counts of every player, plus the strides that flatten
/// a profile into a single index.
///
/// Player 0 varies fastest, so `stride[0] = 1` and
/// `stride[p + 1] = stride[p] * s_p`. Walking flat indices in order
/// is exactly the [`ProfileIterator`] order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Shape {
    counts: Vec<usize>,
    strides: Vec<usize>,
    profiles: usize,
}

impl Shape {
    /// validate strategy counts and precompute strides.
    /// zero-player shapes are allowed here: they describe the single empty
    /// profile that remains once every trivial player has been compacted away.
    pub fn new(counts: Vec<usize>) -> Result<Self> {
        if let Some(p) = counts.iter().position(|&s| s == 0) {
            return Err(Error::Degenerate(format!("player {} has no strategies", p + 1)));
        }
        let mut strides = Vec::with_capacity(counts.len());
        let mut profiles = 1usize;
        for &s in counts.iter() {
            strides.push(profiles);
            profiles = profiles
                .checked_mul(s)
                .ok_or_else(|| Error::Overflow(format!("{:?} profiles", counts)))?;
        }
        if profiles > crate::MAX_PROFILES {
            return Err(Error::Overflow(format!(
                "{} profiles exceeds limit of {}",
                profiles,
                crate::MAX_PROFILES
            )));
        }
        profiles
            .checked_mul(counts.len())
            .ok_or_else(|| Error::Overflow(format!("{} profiles x {} players", profiles, counts.len())))?;
        Ok(Self {
            counts,
            strides,
            profiles,
        })
    }

    pub fn players(&self) -> usize {
        self.counts.len()
    }
    pub fn counts(&self) -> &[usize] {
        &self.counts
    }
    pub fn strategies(&self, player: Player) -> usize {
        self.counts[player]
    }
    pub fn stride(&self, player: Player) -> usize {
        self.strides[player]
    }
    /// number of distinct profiles, ∏ s_i
    pub fn profiles(&self) -> usize {
        self.profiles
    }
    /// number of payoff entries, ∏ s_i · n
    pub fn entries(&self) -> usize {
        self.profiles * self.players()
    }

    /// Σ profile[i] · stride[i]
    pub fn index(&self, profile: &Profile) -> usize {
        profile
            .strategies()
            .iter()
            .zip(self.strides.iter())
            .map(|(s, stride)| s * stride)
            .sum()
    }

    /// inverse of [`Shape::index`]
    pub fn decode(&self, mut index: usize) -> Profile {
        debug_assert!(index < self.profiles);
        self.counts
            .iter()
            .map(|&s| {
                let digit = index % s;
                index /= s;
                digit as Strategy
            })
            .collect::<Vec<_>>()
            .into()
    }

    /// every profile, once, in odometer order
    pub fn iter(&self) -> ProfileIterator {
        ProfileIterator::from(self)
    }

    /// Split the flat profile range into contiguous chunks for the rayon pool.
    /// Chunks are never smaller than `PARTITION_MIN_PROFILES` unless the whole
    /// space is, and concatenating them in order recovers the full range.
    pub fn partitions(&self, parallel: bool) -> Vec<Range<usize>> {
        let chunks = if parallel {
            rayon::current_num_threads().max(1)
        } else {
            1
        };
        let size = self
            .profiles
            .div_ceil(chunks)
            .max(crate::PARTITION_MIN_PROFILES);
        (0..self.profiles)
            .step_by(size)
            .map(|start| start..(start + size).min(self.profiles))
            .collect()
    }
}
