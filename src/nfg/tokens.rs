use crate::Error;
use crate::Result;
use std::str::FromStr;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Token {
    Word(String),
    Quoted(String),
    Open,
    Close,
}

impl std::fmt::Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Token::Word(w) => write!(f, "{}", w),
            Token::Quoted(q) => write!(f, "{:?}", q),
            Token::Open => write!(f, "{{"),
            Token::Close => write!(f, "}}"),
        }
    }
}

/// Cursor over the tokens of a game description.
///
/// Words are split on whitespace, braces stand alone, and double-quoted
/// strings may contain whitespace, braces and `\"` escapes.
/// Errors report the index of the offending token.
#[derive(Debug, Clone)]
pub struct Tokens {
    tokens: Vec<Token>,
    position: usize,
}

impl TryFrom<&str> for Tokens {
    type Error = Error;
    fn try_from(text: &str) -> Result<Self> {
        let mut tokens = Vec::new();
        let mut chars = text.chars().peekable();
        while let Some(c) = chars.next() {
            match c {
                c if c.is_whitespace() => continue,
                '{' => tokens.push(Token::Open),
                '}' => tokens.push(Token::Close),
                '"' => {
                    let mut quoted = String::new();
                    loop {
                        match chars.next() {
                            Some('"') => break,
                            Some('\\') => match chars.next() {
                                Some(escaped) => quoted.push(escaped),
                                None => break,
                            },
                            Some(c) => quoted.push(c),
                            None => {
                                return Err(Error::Parse {
                                    position: tokens.len(),
                                    message: "unterminated string".into(),
                                });
                            }
                        }
                    }
                    tokens.push(Token::Quoted(quoted));
                }
                c => {
                    let mut word = String::from(c);
                    while let Some(&c) = chars.peek() {
                        if c.is_whitespace() || c == '{' || c == '}' || c == '"' {
                            break;
                        }
                        word.push(c);
                        chars.next();
                    }
                    tokens.push(Token::Word(word));
                }
            }
        }
        Ok(Self {
            tokens,
            position: 0,
        })
    }
}

impl Tokens {
    pub fn is_empty(&self) -> bool {
        self.position >= self.tokens.len()
    }
    pub fn peek(&self) -> Option<&Token> {
        self.tokens.get(self.position)
    }

    pub fn error<T>(&self, message: impl Into<String>) -> Result<T> {
        Err(Error::Parse {
            position: self.position,
            message: message.into(),
        })
    }

    pub fn next(&mut self) -> Result<Token> {
        match self.tokens.get(self.position).cloned() {
            Some(token) => {
                self.position += 1;
                Ok(token)
            }
            None => self.error("unexpected end of input"),
        }
    }

    /// consume exactly this token
    pub fn expect(&mut self, expected: Token) -> Result<()> {
        match self.peek() {
            Some(token) if *token == expected => self.next().map(|_| ()),
            Some(token) => self.error(format!("expected {}, found {}", expected, token)),
            None => self.error(format!("expected {}, found end of input", expected)),
        }
    }

    pub fn quoted(&mut self) -> Result<String> {
        match self.peek() {
            Some(Token::Quoted(q)) => {
                let q = q.clone();
                self.position += 1;
                Ok(q)
            }
            Some(token) => self.error(format!("expected a quoted string, found {}", token)),
            None => self.error("expected a quoted string, found end of input"),
        }
    }

    /// a bare word parsed as `T`, naming `what` on failure
    pub fn number<T: FromStr>(&mut self, what: &str) -> Result<T> {
        match self.peek() {
            Some(Token::Word(word)) => match word.parse::<T>() {
                Ok(n) => {
                    self.position += 1;
                    Ok(n)
                }
                Err(_) => self.error(format!("{} must be an integer, found {}", what, word)),
            },
            Some(token) => self.error(format!("expected {}, found {}", what, token)),
            None => self.error(format!("expected {}, found end of input", what)),
        }
    }

    /// every remaining token as a number
    pub fn numbers<T: FromStr>(&mut self, what: &str) -> Result<Vec<T>> {
        let mut numbers = Vec::new();
        while !self.is_empty() {
            numbers.push(self.number(what)?);
        }
        Ok(numbers)
    }
}
