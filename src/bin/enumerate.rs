//! Enumerate Binary
//!
//! Reads one game description and prints its equilibria.
//!
//! Options: [PATH], --format, --psne, --vwdse, --json, --sequential

use clap::Parser;
use equilibria::cli::Args;

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    equilibria::log(args.level());
    args.run()
}
