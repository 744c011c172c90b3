use crate::Error;
use crate::Player;
use crate::Result;
use crate::Utility;
use crate::profile::*;

/// Dense, immutable store of every player's utility at every profile.
///
/// Utilities live in one flat buffer: the `n` utilities of a profile
/// sit contiguously at `Shape::index(profile) · n`. Because the flat index
/// order is exactly [`ProfileIterator`] order, a payoff list given in that
/// order is already laid out correctly and is stored as-is.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PayoffTensor {
    shape: Shape,
    payoffs: Vec<Utility>,
}

impl PayoffTensor {
    /// Consume `∏s_i · n` utilities in odometer order, `n` per profile.
    /// Any other length is a format error. Nothing is truncated or padded.
    pub fn new(shape: Shape, payoffs: Vec<Utility>) -> Result<Self> {
        if payoffs.len() != shape.entries() {
            return Err(Error::Format {
                expected: shape.entries(),
                found: payoffs.len(),
            });
        }
        Ok(Self { shape, payoffs })
    }

    /// Build from a closure that reports the utility vector of each profile.
    pub fn tabulate<F>(shape: Shape, mut f: F) -> Result<Self>
    where
        F: FnMut(&Profile) -> Vec<Utility>,
    {
        let n = shape.players();
        let mut payoffs = Vec::with_capacity(shape.entries());
        let mut iter = shape.iter();
        while let Some(profile) = iter.current() {
            let utilities = f(profile);
            if utilities.len() != n {
                return Err(Error::Format {
                    expected: n,
                    found: utilities.len(),
                });
            }
            payoffs.extend(utilities);
            iter.step();
        }
        Self::new(shape, payoffs)
    }

    pub fn shape(&self) -> &Shape {
        &self.shape
    }
    pub fn players(&self) -> usize {
        self.shape.players()
    }
    pub fn flat(&self) -> &[Utility] {
        &self.payoffs
    }

    /// utility vector at a flat profile index
    pub fn at(&self, index: usize) -> &[Utility] {
        let n = self.players();
        &self.payoffs[index * n..(index + 1) * n]
    }
    /// utility vector at a profile
    pub fn payoff(&self, profile: &Profile) -> &[Utility] {
        self.at(self.shape.index(profile))
    }
    /// one player's utility at a profile
    pub fn utility(&self, profile: &Profile, player: Player) -> Utility {
        self.payoffs[self.shape.index(profile) * self.players() + player]
    }
    /// one player's utility at a flat profile index
    pub fn utility_at(&self, index: usize, player: Player) -> Utility {
        self.payoffs[index * self.players() + player]
    }
}

/// small games with few strategies and a narrow utility range,
/// so that ties and trivial players show up often
impl crate::Arbitrary for PayoffTensor {
    fn random() -> Self {
        use rand::Rng;
        let ref mut rng = rand::rng();
        let n = rng.random_range(1..=4);
        let counts = (0..n).map(|_| rng.random_range(1..=3)).collect::<Vec<_>>();
        let shape = Shape::new(counts).expect("small shape");
        let payoffs = (0..shape.entries())
            .map(|_| rng.random_range(-3..=3))
            .collect::<Vec<Utility>>();
        Self::new(shape, payoffs).expect("exact length")
    }
}
