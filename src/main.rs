use clap::Parser;

mod cli;
mod commands;
mod domain;
mod services;

fn main() -> anyhow::Result<()> {
    let cli = cli::Cli::parse();
    let success = commands::handle_verify(&cli)?;
    if !success {
        std::process::exit(1);
    }
    Ok(())
}
