use super::*;
use crate::nfg::Report;
use crate::solver::Game;
use anyhow::Context;
use colored::Colorize;
use std::io::Read;

impl Args {
    /// read, solve, print
    pub fn run(&self) -> anyhow::Result<()> {
        if let Some(threads) = self.threads {
            rayon::ThreadPoolBuilder::new()
                .num_threads(threads)
                .build_global()
                .context("configure worker pool")?;
        }
        let text = self.input()?;
        let game = self
            .format
            .read(&text)
            .context("read game description")?
            .with_options(self.options());
        log::info!(
            "solving {} players with strategy counts {:?}",
            game.players(),
            game.strategies()
        );
        let report = self.solve(&game)?;
        if self.json {
            println!("{}", serde_json::to_string(&report).context("encode report")?);
        } else {
            print!("{}", Self::render(&report));
        }
        Ok(())
    }

    fn input(&self) -> anyhow::Result<String> {
        match self.path {
            Some(ref path) => std::fs::read_to_string(path)
                .with_context(|| format!("read {}", path.display())),
            None => {
                let mut text = String::new();
                std::io::stdin()
                    .read_to_string(&mut text)
                    .context("read stdin")?;
                Ok(text)
            }
        }
    }

    fn solve(&self, game: &Game) -> anyhow::Result<Report> {
        let (psne, vwdse) = self.kinds();
        Ok(Report {
            psne: match psne {
                true => Some(game.list_psne().context("list pure strategy nash equilibria")?),
                false => None,
            },
            vwdse: match vwdse {
                true => Some(game.list_vwdse().context("list weakly dominant strategy equilibria")?),
                false => None,
            },
        })
    }

    fn render(report: &Report) -> String {
        let sections = [("PSNE", &report.psne), ("VWDSE", &report.vwdse)];
        sections
            .into_iter()
            .filter_map(|(name, profiles)| profiles.as_ref().map(|p| (name, p)))
            .map(|(name, profiles)| {
                let header = format!("{} ({})", name, profiles.len());
                let header = match profiles.is_empty() {
                    true => header.yellow().bold(),
                    false => header.green().bold(),
                };
                std::iter::once(header.to_string())
                    .chain(profiles.iter().map(|p| p.to_string()))
                    .map(|line| line + "\n")
                    .collect::<String>()
            })
            .collect()
    }
}
