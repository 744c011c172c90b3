pub mod compactor;
pub use compactor::*;

pub mod game;
pub use game::*;

pub mod options;
pub use options::*;

pub mod psne;
pub use psne::*;

pub mod vwdse;
pub use vwdse::*;

#[cfg(test)]
mod tests;
