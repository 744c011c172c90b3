use crate::Player;
use crate::Strategy;

/// One strategy index per player.
///
/// Internally every coordinate is 0-based. Profiles handed back to callers
/// are passed through [`Profile::humanize`] so that the first strategy of
/// each player reads as `1`.
#[derive(Debug, Clone, Default, Hash, PartialEq, Eq, PartialOrd, Ord)]
#[derive(serde::Serialize, serde::Deserialize)]
#[serde(transparent)]
pub struct Profile(Vec<Strategy>);

impl Profile {
    /// the all-zero profile, where every odometer sweep begins and ends
    pub fn zeros(n: usize) -> Self {
        Self(vec![0; n])
    }
    pub fn players(&self) -> usize {
        self.0.len()
    }
    pub fn strategies(&self) -> &[Strategy] {
        &self.0
    }
    pub fn strategies_mut(&mut self) -> &mut [Strategy] {
        &mut self.0
    }
    /// shift every coordinate to 1-indexed for presentation
    pub fn humanize(self) -> Self {
        Self(self.0.into_iter().map(|s| s + 1).collect())
    }
}

impl From<Vec<Strategy>> for Profile {
    fn from(strategies: Vec<Strategy>) -> Self {
        Self(strategies)
    }
}

impl From<Profile> for Vec<Strategy> {
    fn from(profile: Profile) -> Self {
        profile.0
    }
}

impl std::ops::Index<Player> for Profile {
    type Output = Strategy;
    fn index(&self, player: Player) -> &Self::Output {
        &self.0[player]
    }
}

impl std::ops::IndexMut<Player> for Profile {
    fn index_mut(&mut self, player: Player) -> &mut Self::Output {
        &mut self.0[player]
    }
}

impl std::fmt::Display for Profile {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "(")?;
        for (i, s) in self.0.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", s)?;
        }
        write!(f, ")")
    }
}
