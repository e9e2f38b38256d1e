use crate::domain::constants::DEFAULT_OUTPUT;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "fintel",
    version,
    about = "Financial intelligence report toolkit"
)]
pub struct Cli {
    #[arg(long, global = true, help = "Output machine-readable JSON")]
    pub json: bool,
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    Render {
        #[arg(help = "JSON record file; renders the built-in example record when omitted")]
        input: Option<PathBuf>,
        #[arg(long, short = 'o', default_value = DEFAULT_OUTPUT)]
        out: PathBuf,
    },
    Enrich {
        #[arg(help = "Entity type, e.g. IP or WALLET")]
        entity_type: String,
        #[arg(help = "Entity identifier")]
        value: String,
    },
}
