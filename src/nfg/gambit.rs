use super::*;
use crate::Result;

/// Gambit strategic-form files in the payoff layout:
///
/// ```text
/// NFG 1 R "title" { "Player 1" "Player 2" } { 3 2 }
/// "optional comment"
/// 1 1 0 2 0 2 1 1 0 3 2 0
/// ```
///
/// Payoffs follow the same odometer order as the plain layout.
/// The outcome layout, which lists strategy names instead of counts
/// and payoffs per named outcome, is not accepted.
pub fn gambit(tokens: &mut Tokens) -> Result<Description> {
    tokens.expect(Token::Word("NFG".into()))?;
    tokens.expect(Token::Word("1".into()))?;
    match tokens.next()? {
        Token::Word(w) if w == "R" || w == "D" => {}
        token => return tokens.error(format!("expected number type R or D, found {}", token)),
    }
    let title = tokens.quoted()?;
    tokens.expect(Token::Open)?;
    let mut players = Vec::new();
    while tokens.peek() != Some(&Token::Close) {
        players.push(tokens.quoted()?);
    }
    tokens.expect(Token::Close)?;
    tokens.expect(Token::Open)?;
    if tokens.peek() == Some(&Token::Open) {
        return tokens.error("outcome-format NFG is not supported, expected strategy counts");
    }
    let mut counts = Vec::new();
    while tokens.peek() != Some(&Token::Close) {
        counts.push(tokens.number::<i64>("strategy count")?);
    }
    tokens.expect(Token::Close)?;
    if let Some(Token::Quoted(_)) = tokens.peek() {
        tokens.quoted()?;
    }
    let payoffs = tokens.numbers("payoff")?;
    Ok(Description {
        title: Some(title),
        n: players.len() as i64,
        players,
        counts,
        payoffs,
    })
}
