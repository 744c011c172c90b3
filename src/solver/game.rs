use super::*;
use crate::Error;
use crate::Result;
use crate::Utility;
use crate::profile::*;
use crate::tensor::*;

/// A validated normal-form game and the knobs used to solve it.
///
/// Construction is the only fallible step that touches the payoffs, and it
/// also rejects games whose best-response table could never be allocated.
/// Both listings are recomputed from the tensor on every call and come
/// back 1-indexed, ready for presentation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Game {
    tensor: PayoffTensor,
    options: Options,
}

impl Game {
    /// strategy counts in player order, then `∏s_i · n` utilities in odometer order
    pub fn new(counts: Vec<usize>, payoffs: Vec<Utility>) -> Result<Self> {
        if counts.is_empty() {
            return Err(Error::Degenerate("a game needs at least one player".into()));
        }
        Self::try_from(PayoffTensor::new(Shape::new(counts)?, payoffs)?)
    }

    pub fn with_options(self, options: Options) -> Self {
        Self { options, ..self }
    }
    pub fn options(&self) -> Options {
        self.options
    }
    pub fn tensor(&self) -> &PayoffTensor {
        &self.tensor
    }
    pub fn players(&self) -> usize {
        self.tensor.players()
    }
    pub fn strategies(&self) -> &[usize] {
        self.tensor.shape().counts()
    }

    fn compactor(&self) -> Compactor {
        match self.options.compact {
            true => Compactor::from(self.tensor.shape()),
            false => Compactor::identity(self.players()),
        }
    }

    /// Every Pure Strategy Nash Equilibrium, in odometer order.
    pub fn list_psne(&self) -> Result<Vec<Profile>> {
        let ref compactor = self.compactor();
        let ref tensor = compactor.collapse(&self.tensor)?;
        let ref maxima = Maxima::build(tensor, self.options.parallel)?;
        let found = Psne::from((tensor.as_ref(), maxima))
            .enumerate(self.options.parallel)?
            .into_iter()
            .map(|profile| compactor.expand(&profile).humanize())
            .collect::<Vec<_>>();
        log::info!("found {} pure strategy nash equilibria", found.len());
        Ok(found)
    }

    /// Every (Very) Weakly Dominant Strategy Equilibrium, first player slowest.
    pub fn list_vwdse(&self) -> Result<Vec<Profile>> {
        let ref compactor = self.compactor();
        let ref tensor = compactor.collapse(&self.tensor)?;
        let candidates = Vwdse::from(tensor.as_ref()).candidates(self.options.parallel);
        let candidates = compactor.expand_candidates(candidates);
        let found = Vwdse::product(&candidates)
            .into_iter()
            .map(Profile::humanize)
            .collect::<Vec<_>>();
        log::info!("found {} weakly dominant strategy equilibria", found.len());
        Ok(found)
    }
}

impl TryFrom<PayoffTensor> for Game {
    type Error = Error;
    fn try_from(tensor: PayoffTensor) -> Result<Self> {
        if tensor.players() == 0 {
            return Err(Error::Degenerate("a game needs at least one player".into()));
        }
        Maxima::slots(tensor.shape())?;
        Ok(Self {
            tensor,
            options: Options::default(),
        })
    }
}

/// `(n, strategy counts, flat payoffs)` exactly as a game description lists them.
/// Counts arrive signed so that non-positive ones are rejected rather than wrapped.
impl TryFrom<(i64, Vec<i64>, Vec<Utility>)> for Game {
    type Error = Error;
    fn try_from((n, counts, payoffs): (i64, Vec<i64>, Vec<Utility>)) -> Result<Self> {
        if n <= 0 {
            return Err(Error::Degenerate(format!("player count {}", n)));
        }
        if n as usize != counts.len() {
            return Err(Error::Degenerate(format!(
                "{} players but {} strategy counts",
                n,
                counts.len()
            )));
        }
        let counts = counts
            .into_iter()
            .enumerate()
            .map(|(p, s)| match usize::try_from(s) {
                Ok(s) if s > 0 => Ok(s),
                _ => Err(Error::Degenerate(format!(
                    "player {} has {} strategies",
                    p + 1,
                    s
                ))),
            })
            .collect::<Result<Vec<usize>>>()?;
        Self::new(counts, payoffs)
    }
}

impl crate::Arbitrary for Game {
    fn random() -> Self {
        Self {
            tensor: PayoffTensor::random(),
            options: Options::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(n: i64, counts: Vec<i64>, payoffs: Vec<Utility>) -> Result<Game> {
        Game::try_from((n, counts, payoffs))
    }

    #[test]
    fn player_count_must_match_counts() {
        let game = parse(3, vec![2, 2], vec![0; 8]);
        assert!(matches!(game, Err(Error::Degenerate(_))));
    }

    #[test]
    fn non_positive_counts_are_degenerate() {
        let zero = parse(2, vec![2, 0], vec![]);
        let negative = parse(2, vec![-1, 2], vec![]);
        let players = parse(-1, vec![], vec![]);
        assert!(matches!(zero, Err(Error::Degenerate(_))));
        assert!(matches!(negative, Err(Error::Degenerate(_))));
        assert!(matches!(players, Err(Error::Degenerate(_))));
    }

    #[test]
    fn empty_game_is_degenerate() {
        assert!(matches!(Game::new(vec![], vec![]), Err(Error::Degenerate(_))));
    }

    #[test]
    fn short_payoffs_are_format_error() {
        let game = parse(2, vec![2, 2], vec![0; 7]);
        assert!(game == Err(Error::Format { expected: 8, found: 7 }));
    }

    #[test]
    fn options_are_carried() {
        let options = Options::default().compact(false).parallel(false);
        let game = Game::new(vec![1], vec![4]).unwrap().with_options(options);
        assert!(game.options() == options);
        assert!(game.strategies() == [1]);
    }
}
