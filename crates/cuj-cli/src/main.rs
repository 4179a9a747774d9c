//! cuj CLI Application
//!
//! Command-line interface for authoring Customer User Journey documents.

mod args;
mod mcp;
mod renderer;
mod session;

use std::io::{self, IsTerminal};

use anyhow::{Context, Result};
use args::{Args, Commands};
use clap::Parser;
use log::info;
use mcp::{run_stdio_server, CujMcpServer};
use renderer::TerminalRenderer;
use session::Session;

fn main() -> Result<()> {
    env_logger::init();

    let Args {
        output_dir,
        no_color,
        command,
    } = Args::parse();

    let output_dir = match output_dir {
        Some(dir) => dir,
        None => std::env::current_dir().context("Failed to resolve current directory")?,
    };

    info!("cuj started, exporting to {}", output_dir.display());

    match command.unwrap_or(Commands::Session) {
        Commands::Session => {
            let stdin = io::stdin();
            let prompt = stdin.is_terminal();
            Session::new(TerminalRenderer::new(!no_color), output_dir, io::stdout().lock())
                .run(stdin.lock(), prompt)
        }
        Commands::Serve => {
            info!("Starting cuj MCP server");
            tokio::runtime::Runtime::new()
                .context("Failed to start async runtime")?
                .block_on(run_stdio_server(CujMcpServer::new(output_dir)))
                .context("MCP server failed")
        }
    }
}
