//! MCP Server implementation and lifecycle management.
//!
//! The server owns one [`ApiExecutor`] (and therefore one HTTP connection
//! pool and one API key) shared by every tool. Tool routes are generated from
//! the endpoint catalog in `domains/tools/definitions/`.

use rmcp::{ServerHandler, handler::server::tool::ToolRouter, model::*, tool_handler};
use std::sync::Arc;

use super::config::Config;
use crate::domains::tools::{ApiExecutor, ToolRegistry, build_tool_router};

const INSTRUCTIONS: &str = "Google Maps Platform tools: distance matrix, places autocomplete, \
     details and search, time zones, roads, and weather forecasts, history and current \
     conditions. Every tool returns the upstream JSON response, or an object with an \
     'error' field when the call fails.";

/// The main MCP server handler.
#[derive(Clone)]
pub struct McpServer {
    /// Server configuration.
    config: Arc<Config>,

    /// Name-based dispatch, shared with the HTTP transport.
    registry: ToolRegistry,

    /// Tool router for handling tool calls.
    tool_router: ToolRouter<Self>,
}

impl McpServer {
    /// Create a new MCP server with the given configuration.
    pub fn new(config: Config) -> Self {
        let config = Arc::new(config);
        let executor = Arc::new(ApiExecutor::new(config.google.clone()));

        Self {
            tool_router: build_tool_router::<Self>(executor.clone()),
            registry: ToolRegistry::new(executor),
            config,
        }
    }

    /// Get the server name.
    pub fn name(&self) -> &str {
        &self.config.server.name
    }

    /// Get the server version.
    pub fn version(&self) -> &str {
        &self.config.server.version
    }

    /// Get the server configuration.
    pub fn config(&self) -> &Arc<Config> {
        &self.config
    }

    /// Server instructions sent to clients on initialization.
    pub fn instructions(&self) -> &'static str {
        INSTRUCTIONS
    }

    // ========================================================================
    // HTTP Transport Support Methods
    // ========================================================================

    /// List all available tools (for HTTP transport).
    pub fn list_tools(&self) -> Vec<serde_json::Value> {
        self.tool_router
            .list_all()
            .into_iter()
            .map(|t| {
                serde_json::json!({
                    "name": t.name,
                    "description": t.description,
                    "inputSchema": t.input_schema
                })
            })
            .collect()
    }

    /// Call a tool by name (for HTTP transport).
    pub async fn call_tool(
        &self,
        name: &str,
        arguments: serde_json::Value,
    ) -> Result<serde_json::Value, String> {
        self.registry.call_tool(name, arguments).await
    }
}

/// ServerHandler implementation with tool_handler macro for automatic tool routing.
#[tool_handler]
impl ServerHandler for McpServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            instructions: Some(INSTRUCTIONS.to_string()),
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            ..Default::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_list_tools_exposes_schemas() {
        let server = McpServer::new(Config::default());
        let tools = server.list_tools();
        assert_eq!(tools.len(), 14);

        let time_zone = tools
            .iter()
            .find(|t| t["name"] == "get_time_zone")
            .unwrap();
        assert_eq!(
            time_zone["inputSchema"]["required"],
            serde_json::json!(["location", "timestamp"])
        );
    }

    #[test]
    fn test_server_info_enables_tools() {
        let server = McpServer::new(Config::default());
        let info = server.get_info();
        assert!(info.capabilities.tools.is_some());
        assert!(info.capabilities.resources.is_none());
        assert_eq!(server.name(), "maps-mcp-server");
    }
}
