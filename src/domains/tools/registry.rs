//! Tool Registry - central registration and dispatch for all tools.
//!
//! This module provides:
//! - A registry of all available tools, built from the endpoint catalog
//! - Dispatch by tool name (used by the HTTP transport)
//! - Tool metadata for listing

use std::sync::Arc;

use rmcp::model::Tool;
use tracing::{info, warn};

use super::ToolError;
use super::api::{ApiExecutor, ToolResult};
use super::definitions;
use super::handlers::{EndpointTool, ToolHandler};
use crate::core::config::Config;

/// Tool registry - manages all available tools.
#[derive(Debug, Clone)]
pub struct ToolRegistry {
    executor: Arc<ApiExecutor>,
}

impl ToolRegistry {
    /// Create a new tool registry sharing the given executor.
    pub fn new(executor: Arc<ApiExecutor>) -> Self {
        Self { executor }
    }

    /// Create a registry with a fresh executor built from the configuration.
    pub fn from_config(config: &Config) -> Self {
        Self::new(Arc::new(ApiExecutor::new(config.google.clone())))
    }

    /// Get all tool names.
    pub fn tool_names(&self) -> Vec<&'static str> {
        definitions::all().iter().map(|d| d.name).collect()
    }

    /// Get all tools as Tool models (metadata).
    ///
    /// This is the single source of truth for all available tools.
    /// Both HTTP and STDIO transports use this to get tool metadata.
    pub fn get_all_tools() -> Vec<Tool> {
        definitions::all()
            .iter()
            .map(|d| EndpointTool::to_tool(d))
            .collect()
    }

    /// Look up a tool by name.
    pub fn tool(&self, name: &str) -> Result<EndpointTool, ToolError> {
        definitions::find(name)
            .map(|descriptor| EndpointTool::new(descriptor, self.executor.clone()))
            .ok_or_else(|| ToolError::not_found(name))
    }

    /// Invoke a tool by name.
    pub async fn call(
        &self,
        name: &str,
        arguments: serde_json::Value,
    ) -> Result<ToolResult, ToolError> {
        let tool = self.tool(name).inspect_err(|_| {
            warn!("Unknown tool requested: {}", name);
        })?;
        info!("Calling tool: {}", name);
        Ok(tool.execute(arguments).await)
    }

    /// Dispatch a tool call and render the MCP `tools/call` result object.
    ///
    /// This is used by the HTTP transport to call tools.
    pub async fn call_tool(
        &self,
        name: &str,
        arguments: serde_json::Value,
    ) -> Result<serde_json::Value, String> {
        let result = self.call(name, arguments).await.map_err(|e| e.to_string())?;
        let call = result.into_call_result();

        let mut response = serde_json::json!({
            "content": call.content,
            "isError": call.is_error.unwrap_or(false)
        });
        if let (Some(structured), Some(object)) = (call.structured_content, response.as_object_mut())
        {
            object.insert("structuredContent".to_string(), structured);
        }

        Ok(response)
    }
}
