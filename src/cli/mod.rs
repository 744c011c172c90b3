//! Command line front end for the `enumerate` binary.
pub mod args;
pub use args::*;

pub mod run;
