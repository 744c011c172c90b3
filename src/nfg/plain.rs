use super::*;
use crate::Result;

/// Whitespace-separated integers: the player count, one strategy count
/// per player, then every payoff in odometer order.
///
/// ```text
/// 2
/// 3 2
/// 1 1 0 2 0 2 1 1 0 3 2 0
/// ```
pub fn plain(tokens: &mut Tokens) -> Result<Description> {
    let n = tokens.number::<i64>("player count")?;
    let counts = (0..n.max(0))
        .map(|_| tokens.number::<i64>("strategy count"))
        .collect::<Result<Vec<_>>>()?;
    let payoffs = tokens.numbers("payoff")?;
    Ok(Description {
        n,
        counts,
        payoffs,
        ..Description::default()
    })
}
