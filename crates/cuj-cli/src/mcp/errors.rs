//! Error handling utilities for MCP server

use cuj_core::CujError;
use rmcp::ErrorData;

/// Helper to convert journey errors to MCP errors
///
/// Bad field names and platform values are the caller's fault and map to
/// `invalid_params`; everything else (file writes) is an internal error.
pub fn to_mcp_error(message: &str, error: &CujError) -> ErrorData {
    let text = format!("{message}: {error}");
    if error.is_invalid_input() {
        ErrorData::invalid_params(text, None)
    } else {
        ErrorData::internal_error(text, None)
    }
}
