use std::io::{self, BufWriter};

use anyhow::{Context, Result};
use clap::Parser;
use log::debug;

mod sequence;

#[derive(Parser, Debug)]
#[command(version, about)]
struct Cli {
    #[command(flatten)]
    verbose: clap_verbosity_flag::Verbosity,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    env_logger::Builder::new()
        .filter_level(cli.verbose.log_level_filter())
        .init();

    debug!("CLI: {:?}", cli);
    debug!("Range: {}..={}", sequence::FIRST, sequence::LAST);

    // Single lock, one ordered pass
    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());
    sequence::write_sequence(&mut out)
        .context("Unable to write sequence to standard output")?;

    Ok(())
}
