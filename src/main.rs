use anyhow::Result;
use clap::Parser;

use codepane::cli::CliArgs;

fn main() -> Result<()> {
    codepane::tracing::init();

    let args = CliArgs::parse();
    tracing::debug!(?args, "starting");
    args.run()
}
