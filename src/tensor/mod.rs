pub mod maxima;
pub use maxima::*;

pub mod payoff;
pub use payoff::*;
