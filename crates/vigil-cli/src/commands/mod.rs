//! CLI command definitions.

use clap::{Parser, Subcommand};

pub mod serve;

/// Vigil - anonymous incident reporting backend
#[derive(Parser)]
#[command(name = "vigil")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Start the HTTP + WebSocket server
    Serve(serve::ServeArgs),
}
