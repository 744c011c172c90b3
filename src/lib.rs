//! Exact equilibrium enumeration for finite N-player normal-form games.
//!
//! A game is a dense payoff tensor indexed by strategy profiles. From it we
//! enumerate every Pure Strategy Nash Equilibrium and every (Very) Weakly
//! Dominant Strategy Equilibrium, using exact integer comparisons throughout.

#[cfg(feature = "cli")]
pub mod cli;
pub mod error;
pub mod nfg;
pub mod profile;
pub mod solver;
pub mod tensor;

pub use error::*;

// ============================================================================
// TYPE ALIASES
// ============================================================================
/// Exact integer payoff received by one player at one profile.
pub type Utility = i64;
/// Index of a strategy within one player's strategy set, 0-based internally.
pub type Strategy = usize;
/// Index of a player, 0-based, in the order strategy counts are given.
pub type Player = usize;

// ============================================================================
// TRAITS
// ============================================================================
/// Random instance generation for tests and benchmarks.
pub trait Arbitrary {
    /// Generate a uniformly random instance.
    fn random() -> Self;
}

// ============================================================================
// SWEEP CONFIGURATION
// Dense sweeps are exponential in player count. These bound allocation and
// decide how finely the profile space is split across the rayon pool.
// ============================================================================
/// Smallest profile range handed to a single parallel partition.
pub const PARTITION_MIN_PROFILES: usize = 1 << 14;
/// Largest profile space, and largest best-response table, accepted
/// before anything is allocated.
pub const MAX_PROFILES: usize = 1 << 28;

// ============================================================================
// RUNTIME UTILITIES
// ============================================================================
/// Initialize terminal logging on stderr so stdout stays machine-readable.
#[cfg(feature = "cli")]
pub fn log(level: log::LevelFilter) {
    let config = simplelog::ConfigBuilder::new()
        .set_location_level(log::LevelFilter::Off)
        .set_target_level(log::LevelFilter::Off)
        .set_thread_level(log::LevelFilter::Off)
        .build();
    let term = simplelog::TermLogger::new(
        level,
        config,
        simplelog::TerminalMode::Stderr,
        simplelog::ColorChoice::Auto,
    );
    let _ = simplelog::CombinedLogger::init(vec![term]);
}
