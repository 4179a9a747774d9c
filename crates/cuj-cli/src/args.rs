use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Author Customer User Journey documents
///
/// A journey is a header (title, description, persona, goal, platform) and an
/// ordered list of step cards. Edit it in an interactive session on the
/// terminal, or let an AI assistant drive it through the MCP server, then
/// export it as a Markdown document. Nothing is kept between runs except the
/// exported files.
#[derive(Parser)]
#[command(version, about, name = "cuj")]
pub struct Args {
    /// Directory exported documents are written to. Defaults to the current
    /// directory
    #[arg(long, global = true)]
    pub output_dir: Option<PathBuf>,

    /// Disable colored output and use plain text
    #[arg(long, global = true)]
    pub no_color: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available commands for the cuj CLI
///
/// - `session`: interactive editing on stdin/stdout (the default)
/// - `serve`: MCP server over stdio for AI assistant integration
#[derive(Subcommand, Clone, Copy, Debug, PartialEq, Eq)]
pub enum Commands {
    /// Edit a journey interactively (default)
    #[command(alias = "s")]
    Session,
    /// Start the MCP server
    Serve,
}
