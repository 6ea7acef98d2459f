//! Error handling utilities for MCP server

use horizon_core::AgendaError;
use rmcp::ErrorData;

/// Converts an agenda error into an MCP error.
///
/// Errors caused by the request (bad input, unknown IDs, empty lists) are
/// reported as invalid parameters so the client can correct the call;
/// everything else is an internal error.
pub fn to_mcp_error(message: &str, error: &AgendaError) -> ErrorData {
    let text = format!("{message}: {error}");
    if error.is_client_error() {
        ErrorData::invalid_params(text, None)
    } else {
        ErrorData::internal_error(text, None)
    }
}
