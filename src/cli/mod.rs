//! Command-line interface for the geo-tutor binary.

use clap::{Parser, Subcommand};

/// Geography AI tutor server.
///
/// Run without arguments to start the HTTP server; the vector index is
/// built from the textbook PDF on first start. Use `ingest` to rebuild
/// the index without serving.
#[derive(Parser, Debug)]
#[command(
    name = "geo-tutor",
    version,
    about = "Retrieval-augmented geography tutor server",
    after_help = "EXAMPLES:\n    \
                  geo-tutor            # Start the server (builds the index if missing)\n    \
                  geo-tutor ingest     # Rebuild the vector index and exit"
)]
pub struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Extract, chunk, embed, and persist the textbook index, then exit
    Ingest,
}

impl Cli {
    pub fn parse_args() -> Self {
        Self::parse()
    }
}
