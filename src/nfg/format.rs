use super::*;
use crate::Result;
use crate::solver::Game;

/// Which text layout a game description is written in.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
pub enum Format {
    /// Gambit when the text starts with `NFG`, plain otherwise
    #[default]
    Auto,
    Plain,
    Nfg,
}

impl Format {
    /// resolve `Auto` by looking at the first token
    pub fn detect(self, tokens: &Tokens) -> Self {
        match self {
            Format::Auto => match tokens.peek() {
                Some(Token::Word(w)) if w == "NFG" => Format::Nfg,
                _ => Format::Plain,
            },
            format => format,
        }
    }

    pub fn describe(self, text: &str) -> Result<Description> {
        let ref mut tokens = Tokens::try_from(text)?;
        match self.detect(tokens) {
            Format::Nfg => gambit(tokens),
            _ => plain(tokens),
        }
    }

    pub fn read(self, text: &str) -> Result<Game> {
        Game::try_from(self.describe(text)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Error;
    use crate::profile::Profile;

    const PLAIN: &str = "2\n2 2\n2 2 4 6 6 4 2 2\n";
    const GAMBIT: &str = r#"NFG 1 R "" { "1" "2" } { 2 2 } 2 2 4 6 6 4 2 2"#;

    #[test]
    fn auto_detects_both_layouts() {
        let plain = Format::Auto.read(PLAIN).unwrap();
        let gambit = Format::Auto.read(GAMBIT).unwrap();
        assert!(plain == gambit);
        let expected = vec![Profile::from(vec![2, 1]), Profile::from(vec![1, 2])];
        assert!(plain.list_psne().unwrap() == expected);
    }

    #[test]
    fn forced_layout_is_not_second_guessed() {
        assert!(matches!(Format::Plain.read(GAMBIT), Err(Error::Parse { position: 0, .. })));
        assert!(matches!(Format::Nfg.read(PLAIN), Err(Error::Parse { position: 0, .. })));
    }

    #[test]
    fn validation_errors_pass_through() {
        let short = Format::Auto.read("2 2 2 1 2 3");
        let degenerate = Format::Auto.read("2 0 2");
        assert!(short == Err(Error::Format { expected: 8, found: 3 }));
        assert!(matches!(degenerate, Err(Error::Degenerate(_))));
    }
}
