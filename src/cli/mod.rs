//! CLI subsystem for nestquery
//!
//! A thin operational surface over the search core: run one search or count
//! against a configured source, or lint a dataset file. All logic lives in
//! the commands module; `run` only parses arguments, builds the async
//! runtime, and dispatches.

mod args;
mod commands;
mod config;
mod errors;

pub use args::{Cli, Command, FilterArgs};
pub use config::{Config, SourceConfig};
pub use errors::{CliError, CliResult};

/// Parses arguments and runs the selected command to completion.
pub fn run() -> CliResult<()> {
    let cli = Cli::parse_args();
    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()
        .map_err(|e| CliError::runtime(e.to_string()))?;
    runtime.block_on(commands::run(cli))
}
