pub mod iterator;
pub use iterator::*;

pub mod profile;
pub use profile::*;

pub mod shape;
pub use shape::*;
