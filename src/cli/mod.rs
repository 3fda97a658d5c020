//! Command line interface

pub mod serve;

use clap::{Parser, Subcommand};

/// BX-bot UI server - token authentication and bot configuration API
#[derive(Parser)]
#[command(name = "bxbot-ui-server")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Run the HTTP API server
    Serve(serve::ServeArgs),
}
