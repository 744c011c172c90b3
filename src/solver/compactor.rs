use crate::Result;
use crate::Strategy;
use crate::profile::*;
use crate::tensor::*;
use std::borrow::Cow;

/// Removes players with exactly one strategy from the active dimensions
/// and puts them back afterwards.
///
/// A trivial player's only action belongs to every equilibrium and can
/// neither create nor break one, so sweeping `∏(s_i where s_i > 1)`
/// profiles finds the same equilibria as sweeping all of them. Dropping a
/// size-1 axis leaves the odometer order of the remaining axes unchanged,
/// which keeps collapsed results in the same order as uncollapsed ones.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Compactor {
    trivial: Vec<bool>,
}

impl From<&Shape> for Compactor {
    fn from(shape: &Shape) -> Self {
        Self {
            trivial: shape.counts().iter().map(|&s| s == 1).collect(),
        }
    }
}

impl Compactor {
    /// a compactor that keeps every player
    pub fn identity(players: usize) -> Self {
        Self {
            trivial: vec![false; players],
        }
    }
    pub fn is_identity(&self) -> bool {
        self.trivial.iter().all(|&t| !t)
    }
    /// how many players are dropped
    pub fn removed(&self) -> usize {
        self.trivial.iter().filter(|&&t| t).count()
    }

    /// Drop trivial axes and their utility components. Borrows the
    /// original tensor untouched when there is nothing to drop.
    pub fn collapse<'a>(&self, tensor: &'a PayoffTensor) -> Result<Cow<'a, PayoffTensor>> {
        if self.is_identity() {
            return Ok(Cow::Borrowed(tensor));
        }
        let counts = self.keep(tensor.shape().counts()).collect::<Vec<_>>();
        let payoffs = tensor
            .flat()
            .chunks(tensor.players())
            .flat_map(|utilities| self.keep(utilities))
            .collect::<Vec<_>>();
        log::debug!(
            "compacted {} trivial players, {} remain",
            self.removed(),
            counts.len()
        );
        PayoffTensor::new(Shape::new(counts)?, payoffs).map(Cow::Owned)
    }

    /// reinsert strategy 0 at every trivial player's position
    pub fn expand(&self, profile: &Profile) -> Profile {
        self.reinsert(profile.strategies().iter().copied(), 0)
            .collect::<Vec<_>>()
            .into()
    }

    /// reinsert the singleton candidate set `{0}` for every trivial player
    pub fn expand_candidates(&self, candidates: Vec<Vec<Strategy>>) -> Vec<Vec<Strategy>> {
        self.reinsert(candidates.into_iter(), vec![0]).collect()
    }

    fn keep<'a, T: Copy>(&'a self, items: &'a [T]) -> impl Iterator<Item = T> + 'a {
        items
            .iter()
            .zip(self.trivial.iter())
            .filter(|(_, trivial)| !**trivial)
            .map(|(&item, _)| item)
    }

    /// walk the full player list, pulling active coordinates in order.
    /// stops early rather than inventing coordinates the input lacks.
    fn reinsert<'a, T, I>(&'a self, active: I, filler: T) -> impl Iterator<Item = T> + 'a
    where
        T: Clone + 'a,
        I: Iterator<Item = T> + 'a,
    {
        self.trivial.iter().scan(active, move |active, &trivial| match trivial {
            true => Some(filler.clone()),
            false => active.next(),
        })
    }
}
