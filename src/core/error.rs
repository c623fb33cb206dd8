//! Error types and handling for the MCP server.
//!
//! Tool invocations never surface these: upstream and argument failures are
//! reported as [`ToolResult::Error`](crate::domains::tools::ToolResult) values.
//! This type covers startup failures.

use thiserror::Error;

/// A specialized Result type for MCP server operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Unified error type for the MCP server.
#[derive(Debug, Error)]
pub enum Error {
    /// Configuration-related errors.
    #[error("Configuration error: {0}")]
    Config(String),
}

impl Error {
    /// Create a new configuration error.
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }
}
