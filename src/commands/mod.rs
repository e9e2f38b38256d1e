//! Command handler layer.
//!
//! This module owns CLI-oriented orchestration and output wiring.
//!
//! ## Files
//! - `report.rs` — record loading + report rendering.
//! - `enrich.rs` — enrichment profile output.
//!
//! ## Principles
//! - Parse/match CLI inputs here.
//! - Delegate business logic to `services/*`.
//! - Keep behavior and output schema stable.

pub mod enrich;
pub mod report;

pub use enrich::handle_enrich;
pub use report::handle_render;

use crate::cli::{Cli, Commands};
use crate::domain::constants::DEFAULT_OUTPUT;
use std::path::Path;

pub fn dispatch(cli: &Cli) -> anyhow::Result<()> {
    match &cli.command {
        // bare invocation renders the built-in example record
        None => handle_render(cli.json, None, Path::new(DEFAULT_OUTPUT)),
        Some(Commands::Render { input, out }) => handle_render(cli.json, input.as_deref(), out),
        Some(Commands::Enrich { entity_type, value }) => {
            handle_enrich(cli.json, entity_type, value)
        }
    }
}
