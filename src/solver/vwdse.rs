use crate::Player;
use crate::Strategy;
use crate::profile::*;
use crate::tensor::*;
use rayon::prelude::*;

/// Pointwise weak dominance between the strategies of one player.
///
/// Strategy `a` weakly dominates `b` iff, against every opponent context,
/// `a` pays at least as much as `b`. Contexts are stored as the flat index
/// of the profile with this player's coordinate at 0, so strategy `s`
/// in context `c` sits at `c + s · stride`.
pub struct Dominance<'a> {
    tensor: &'a PayoffTensor,
    player: Player,
    stride: usize,
    contexts: Vec<usize>,
}

impl<'a> From<(&'a PayoffTensor, Player)> for Dominance<'a> {
    fn from((tensor, player): (&'a PayoffTensor, Player)) -> Self {
        let shape = tensor.shape();
        let mut radices = shape.counts().to_vec();
        radices[player] = 1;
        let contexts = ProfileIterator::from(radices)
            .map(|profile| shape.index(&profile))
            .collect();
        Self {
            tensor,
            player,
            stride: shape.stride(player),
            contexts,
        }
    }
}

impl Dominance<'_> {
    pub fn dominates(&self, a: Strategy, b: Strategy) -> bool {
        let a = a * self.stride;
        let b = b * self.stride;
        self.contexts.iter().all(|&c| {
            self.tensor.utility_at(c + a, self.player) >= self.tensor.utility_at(c + b, self.player)
        })
    }

    /// Strategies that weakly dominate every alternative, or nothing.
    ///
    /// A running champion is replaced by any strategy that dominates it.
    /// Which champion survives depends on scan order, so it is then checked
    /// against every strategy, earlier ones included. Dominance is a partial
    /// order, so at most one class of payoff-identical strategies can pass;
    /// that class is everything that dominates the verified champion.
    pub fn candidates(&self) -> Vec<Strategy> {
        let strategies = 0..self.tensor.shape().strategies(self.player);
        let champion = strategies
            .clone()
            .fold(0, |champion, s| match self.dominates(s, champion) {
                true => s,
                false => champion,
            });
        if strategies.clone().all(|s| self.dominates(champion, s)) {
            strategies.filter(|&s| self.dominates(s, champion)).collect()
        } else {
            Vec::new()
        }
    }
}

/// (Very) Weakly Dominant Strategy Equilibrium search.
///
/// Players are independent: each contributes the set of its universally
/// dominant strategies, and the equilibria are the cartesian product.
pub struct Vwdse<'a> {
    tensor: &'a PayoffTensor,
}

impl<'a> From<&'a PayoffTensor> for Vwdse<'a> {
    fn from(tensor: &'a PayoffTensor) -> Self {
        Self { tensor }
    }
}

impl Vwdse<'_> {
    /// dominant strategies of every player, in player order
    pub fn candidates(&self, parallel: bool) -> Vec<Vec<Strategy>> {
        let players = 0..self.tensor.players();
        let candidates = if parallel {
            players
                .into_par_iter()
                .map(|p| Dominance::from((self.tensor, p)).candidates())
                .collect::<Vec<_>>()
        } else {
            players
                .map(|p| Dominance::from((self.tensor, p)).candidates())
                .collect::<Vec<_>>()
        };
        candidates
            .iter()
            .enumerate()
            .filter(|(_, c)| c.is_empty())
            .for_each(|(p, _)| log::debug!("player {} has no weakly dominant strategy", p + 1));
        candidates
    }

    /// cartesian product across players, first player slowest.
    /// any empty candidate set annihilates the product.
    pub fn product(candidates: &[Vec<Strategy>]) -> Vec<Profile> {
        candidates
            .iter()
            .fold(vec![Vec::new()], |prefixes: Vec<Vec<Strategy>>, strategies| {
                prefixes
                    .iter()
                    .flat_map(|prefix| {
                        strategies.iter().map(move |&s| {
                            let mut profile = prefix.clone();
                            profile.push(s);
                            profile
                        })
                    })
                    .collect()
            })
            .into_iter()
            .map(Profile::from)
            .collect()
    }
}
