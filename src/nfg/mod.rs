//! Reading game descriptions from text and shaping results for output.
//! Nothing under [`crate::solver`] depends on this module.
pub mod description;
pub use description::*;

pub mod format;
pub use format::*;

pub mod gambit;
pub use gambit::*;

pub mod plain;
pub use plain::*;

pub mod report;
pub use report::*;

pub mod tokens;
pub use tokens::*;
