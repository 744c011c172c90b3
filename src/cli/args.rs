use crate::nfg::Format;
use crate::solver::Options;
use clap::Parser;
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(
    author,
    version,
    about = "Enumerate pure Nash and weakly dominant strategy equilibria of a normal-form game",
    long_about = None
)]
pub struct Args {
    #[arg(help = "game description to read, stdin when absent")]
    pub path: Option<PathBuf>,
    #[arg(long, value_enum, default_value_t = Format::Auto, help = "input layout")]
    pub format: Format,
    #[arg(long, help = "list pure strategy nash equilibria")]
    pub psne: bool,
    #[arg(long, help = "list weakly dominant strategy equilibria")]
    pub vwdse: bool,
    #[arg(long, help = "keep single-strategy players in the sweep")]
    pub no_compact: bool,
    #[arg(long, help = "sweep on the calling thread only")]
    pub sequential: bool,
    #[arg(long, help = "size of the worker pool")]
    pub threads: Option<usize>,
    #[arg(long, help = "print equilibria as json")]
    pub json: bool,
    #[arg(short, long, action = clap::ArgAction::Count, help = "log more, repeat for debug")]
    pub verbose: u8,
}

impl Args {
    pub fn options(&self) -> Options {
        Options::default()
            .compact(!self.no_compact)
            .parallel(!self.sequential)
    }
    pub fn level(&self) -> log::LevelFilter {
        match self.verbose {
            0 => log::LevelFilter::Warn,
            1 => log::LevelFilter::Info,
            _ => log::LevelFilter::Debug,
        }
    }
    /// both kinds when neither is asked for
    pub fn kinds(&self) -> (bool, bool) {
        match (self.psne, self.vwdse) {
            (false, false) => (true, true),
            kinds => kinds,
        }
    }
}
