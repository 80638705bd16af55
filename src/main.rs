use anyhow::{Context, Result};
use clap::Parser;
use env_logger::Env;
use std::io;

mod cli;
mod error;
mod launcher;
mod window;

use cli::Args;
use window::WinitHost;

fn main() -> Result<()> {
    env_logger::Builder::from_env(Env::default().default_filter_or("warn")).init();

    let args: Args = Args::parse();
    if !args.rest.is_empty() {
        log::debug!("Ignoring extra arguments: {:?}", args.rest);
    }

    let mut host: WinitHost = WinitHost::default();
    let mut stdout: io::Stdout = io::stdout();
    launcher::run(&args.minutes, &mut host, &mut stdout)
        .with_context(|| format!("Failed to run {} minutes timer", args.minutes))?;

    Ok(())
}
