// src/bin/cli.rs
use color_eyre::eyre::Result;
use player_connections::cli::{self, Mode};

fn main() -> Result<()> {
    color_eyre::install()?;

    match cli::parse_args(std::env::args().skip(1))? {
        Mode::Help => eprintln!("{}", cli::HELP),
        Mode::Run(opts) => cli::run(&opts)?,
    }
    Ok(())
}
