use crate::Player;
use crate::Utility;
use crate::profile::Profile;

/// Everything that can go wrong between reading a game and listing its equilibria.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// flat payoff list does not cover every profile exactly once
    #[error("expected {expected} payoffs, found {found}")]
    Format { expected: usize, found: usize },
    /// strategy counts or player count cannot describe a game
    #[error("degenerate game: {0}")]
    Degenerate(String),
    /// profile space too large to index or allocate
    #[error("profile space overflows: {0}")]
    Overflow(String),
    /// a payoff exceeded the best response computed for its context
    #[error(
        "axis maxima invariant violated at {profile} for player {player}: {utility} > {maximum}"
    )]
    Invariant {
        profile: Profile,
        player: Player,
        utility: Utility,
        maximum: Utility,
    },
    /// text layer could not read a game description
    #[error("parse error at token {position}: {message}")]
    Parse { position: usize, message: String },
}

pub type Result<T> = std::result::Result<T, Error>;
