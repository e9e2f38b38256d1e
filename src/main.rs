use clap::Parser;

mod cli;
mod commands;
mod domain;
mod render;
mod services;

fn main() -> anyhow::Result<()> {
    let cli = cli::Cli::parse();
    commands::dispatch(&cli)
}
