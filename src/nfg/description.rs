use crate::Result;
use crate::Utility;
use crate::solver::Game;

/// A game as read from text, before any validation.
///
/// Counts stay signed so that a non-positive count is reported as a
/// degenerate game by [`Game`] rather than as a parse failure here.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Description {
    pub title: Option<String>,
    pub players: Vec<String>,
    pub n: i64,
    pub counts: Vec<i64>,
    pub payoffs: Vec<Utility>,
}

impl TryFrom<Description> for Game {
    type Error = crate::Error;
    fn try_from(description: Description) -> Result<Self> {
        log::debug!(
            "read game {:?}: {} players, counts {:?}, {} payoffs",
            description.title.as_deref().unwrap_or(""),
            description.n,
            description.counts,
            description.payoffs.len()
        );
        Game::try_from((description.n, description.counts, description.payoffs))
    }
}
