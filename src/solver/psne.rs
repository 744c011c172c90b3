use crate::Error;
use crate::Result;
use crate::profile::*;
use crate::tensor::*;
use rayon::prelude::*;
use std::cmp::Ordering;
use std::ops::Range;

/// Pure Strategy Nash Equilibrium sweep.
///
/// A profile is an equilibrium iff every player's utility equals the axis
/// maximum of their opponent context, compared exactly. A utility above
/// its axis maximum means the maxima table was built wrong and aborts the
/// whole sweep. Players with a single strategy cannot deviate and are skipped.
pub struct Psne<'a> {
    tensor: &'a PayoffTensor,
    maxima: &'a Maxima,
}

impl<'a> From<(&'a PayoffTensor, &'a Maxima)> for Psne<'a> {
    fn from((tensor, maxima): (&'a PayoffTensor, &'a Maxima)) -> Self {
        Self { tensor, maxima }
    }
}

impl Psne<'_> {
    /// every equilibrium, 0-indexed, in odometer order
    pub fn enumerate(&self, parallel: bool) -> Result<Vec<Profile>> {
        let partitions = self.tensor.shape().partitions(parallel);
        Ok(partitions
            .into_par_iter()
            .map(|range| self.sweep(range))
            .collect::<Result<Vec<Vec<Profile>>>>()?
            .into_iter()
            .flatten()
            .collect())
    }

    fn sweep(&self, range: Range<usize>) -> Result<Vec<Profile>> {
        let mut found = Vec::new();
        let mut iter = ProfileIterator::from((self.tensor.shape(), range));
        while let Some(profile) = iter.current() {
            if self.is_equilibrium(profile)? {
                found.push(profile.clone());
            }
            iter.step();
        }
        Ok(found)
    }

    pub fn is_equilibrium(&self, profile: &Profile) -> Result<bool> {
        let utilities = self.tensor.payoff(profile);
        for ((player, &utility), maximum) in utilities
            .iter()
            .enumerate()
            .zip(self.maxima.row(profile))
        {
            let Some(maximum) = maximum else {
                continue;
            };
            match utility.cmp(&maximum) {
                Ordering::Equal => continue,
                Ordering::Less => return Ok(false),
                Ordering::Greater => {
                    return Err(Error::Invariant {
                        profile: profile.clone(),
                        player,
                        utility,
                        maximum,
                    });
                }
            }
        }
        Ok(true)
    }
}
