//! MCP server implementation for cuj
//!
//! Exposes the journey editing operations as Model Context Protocol tools so
//! an AI assistant can draft a journey on the user's behalf. The server owns
//! exactly one journey for the lifetime of the process.

use std::path::PathBuf;

use anyhow::Result;
use cuj_core::JourneyStore;
use log::{debug, error, info};
use rmcp::{
    handler::server::{router::tool::ToolRouter, wrapper::Parameters},
    model::{
        CallToolResult, Content, Implementation, ProtocolVersion, ServerCapabilities, ServerInfo,
    },
    tool, tool_handler, tool_router, ErrorData as McpError, ServerHandler,
};
use tokio::signal::unix::{signal, SignalKind};

pub mod errors;
pub mod handlers;

pub use handlers::{Id, McpHandlers, UpdateJourneyField, UpdateStep};

use errors::to_mcp_error;

pub type McpResult = std::result::Result<CallToolResult, McpError>;

fn text_result(message: &str, result: cuj_core::Result<String>) -> McpResult {
    result
        .map(|text| CallToolResult::success(vec![Content::text(text)]))
        .map_err(|e| to_mcp_error(message, &e))
}

/// MCP server for cuj
#[derive(Clone)]
pub struct CujMcpServer {
    handlers: McpHandlers,
    tool_router: ToolRouter<Self>,
}

#[tool_router]
impl CujMcpServer {
    /// Create a server around a fresh journey, exporting into `output_dir`
    pub fn new(output_dir: PathBuf) -> Self {
        Self {
            handlers: McpHandlers::new(JourneyStore::new(), output_dir),
            tool_router: Self::tool_router(),
        }
    }

    #[tool(
        name = "show_journey",
        description = "Show the journey being edited: the header fields, then one card per step with its number, title and id. Expanded cards list every step field. The journey is also returned as JSON. Use the step ids shown here with the step tools."
    )]
    async fn show_journey(&self) -> McpResult {
        text_result("Failed to show journey", self.handlers.show_journey().await)
    }

    #[tool(
        name = "update_journey_field",
        description = "Set one header field of the journey. field is one of title, description, userPersona, goal or platform. For platform the value must be iOS, Android or Both; any other value is rejected."
    )]
    async fn update_journey_field(
        &self,
        Parameters(params): Parameters<UpdateJourneyField>,
    ) -> McpResult {
        text_result(
            "Failed to update journey field",
            self.handlers.update_journey_field(params).await,
        )
    }

    #[tool(
        name = "add_step",
        description = "Append an empty step to the end of the journey. Returns the new step's number and id. New steps start expanded."
    )]
    async fn add_step(&self) -> McpResult {
        text_result("Failed to add step", self.handlers.add_step().await)
    }

    #[tool(
        name = "remove_step",
        description = "Remove the step with the given id and renumber the remaining steps. A journey always keeps at least one step, so removing the only step does nothing. Step ids are never reused."
    )]
    async fn remove_step(&self, Parameters(params): Parameters<Id>) -> McpResult {
        text_result("Failed to remove step", self.handlers.remove_step(params).await)
    }

    #[tool(
        name = "update_step",
        description = "Set one text field of a step. field is one of action, screen, userInput, systemResponse, expectedOutcome, painPoints or notes. An empty value clears the field. The step's action doubles as its title."
    )]
    async fn update_step(&self, Parameters(params): Parameters<UpdateStep>) -> McpResult {
        text_result("Failed to update step", self.handlers.update_step(params).await)
    }

    #[tool(
        name = "toggle_step",
        description = "Expand or collapse the card of a step in show_journey. This only changes how the journey is shown and never affects the exported document."
    )]
    async fn toggle_step(&self, Parameters(params): Parameters<Id>) -> McpResult {
        text_result("Failed to toggle step", self.handlers.toggle_step(params).await)
    }

    #[tool(
        name = "preview_markdown",
        description = "Return the Markdown document the journey would export to, without writing anything."
    )]
    async fn preview_markdown(&self) -> McpResult {
        text_result(
            "Failed to preview markdown",
            self.handlers.preview_markdown().await,
        )
    }

    #[tool(
        name = "export_markdown",
        description = "Write the journey as a Markdown document named after its title (or cuj.md when untitled) into the server's output directory. Returns the path written."
    )]
    async fn export_markdown(&self) -> McpResult {
        text_result(
            "Failed to export markdown",
            self.handlers.export_markdown().await,
        )
    }
}

#[tool_handler(router = self.tool_router)]
impl ServerHandler for CujMcpServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            protocol_version: ProtocolVersion::V_2024_11_05,
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            server_info: Implementation {
                name: "cuj".to_string(),
                version: env!("CARGO_PKG_VERSION").to_string(),
                ..Default::default()
            },
            instructions: Some(r#"cuj drafts Customer User Journey (CUJ) documents: a step-by-step account of how a user moves through an app to reach a goal.

## Core Concepts
- **Journey**: title, description, user persona, goal and platform (iOS, Android or Both)
- **Steps**: ordered cards. Each has an action (used as its title), screen, user input, system response, expected outcome, pain points and notes
- Steps are addressed by id. Step numbers are positions and change when steps are removed; ids never change

## Workflow
1. Fill in the header with `update_journey_field`
2. A new journey already has one empty step; fill it with `update_step`, then `add_step` for each further step
3. Review with `show_journey` or `preview_markdown`
4. Write the document with `export_markdown`

## Notes
- Empty pain points and notes are left out of the exported document
- `toggle_step` only changes what `show_journey` displays
- Nothing is kept once the server stops except exported files"#.to_string()),
        }
    }
}

/// Run the MCP server with stdio transport
pub async fn run_stdio_server(server: CujMcpServer) -> Result<()> {
    use rmcp::{transport::stdio, ServiceExt};

    info!("Starting cuj MCP server on stdio");
    debug!(
        "Server created with {} tools",
        server.tool_router.list_all().len()
    );

    let service = server.serve(stdio()).await.inspect_err(|e| {
        error!("serving error: {e:?}");
    })?;

    let mut sigint = signal(SignalKind::interrupt())?;
    let mut sigterm = signal(SignalKind::terminate())?;

    tokio::select! {
        result = service.waiting() => {
            match result {
                Ok(_) => info!("MCP server stopped normally"),
                Err(e) => error!("MCP server error: {e:?}"),
            }
        }
        _ = sigint.recv() => {
            info!("Received SIGINT, shutting down");
        }
        _ = sigterm.recv() => {
            info!("Received SIGTERM, shutting down");
        }
    }

    info!("MCP server shutdown complete");
    Ok(())
}
