//! Tool handlers module.
//!
//! A tool pairs a static descriptor with the shared executor. The
//! [`ToolHandler`] trait is the seam callers dispatch through.

use std::sync::Arc;

use rmcp::model::Tool;

use super::api::{ApiExecutor, EndpointDescriptor, ToolResult};

/// A named, schema-described callable.
#[async_trait::async_trait]
pub trait ToolHandler: Send + Sync {
    /// Get the name of this tool.
    fn name(&self) -> &str;

    /// Get the description of this tool.
    fn description(&self) -> &str;

    /// Execute the tool with the given arguments.
    ///
    /// Never fails: errors are reported as [`ToolResult::Error`].
    async fn execute(&self, arguments: serde_json::Value) -> ToolResult;
}

/// A Google Maps Platform endpoint exposed as a tool.
#[derive(Debug, Clone)]
pub struct EndpointTool {
    descriptor: &'static EndpointDescriptor,
    executor: Arc<ApiExecutor>,
}

impl EndpointTool {
    pub fn new(descriptor: &'static EndpointDescriptor, executor: Arc<ApiExecutor>) -> Self {
        Self {
            descriptor,
            executor,
        }
    }

    pub fn descriptor(&self) -> &'static EndpointDescriptor {
        self.descriptor
    }

    /// Create a Tool model for this endpoint (metadata).
    pub fn to_tool(descriptor: &EndpointDescriptor) -> Tool {
        Tool {
            name: descriptor.name.into(),
            description: Some(descriptor.description.into()),
            input_schema: Arc::new(descriptor.input_schema_object()),
            annotations: None,
            output_schema: None,
            icons: None,
            meta: None,
            title: None,
        }
    }
}

#[async_trait::async_trait]
impl ToolHandler for EndpointTool {
    fn name(&self) -> &str {
        self.descriptor.name
    }

    fn description(&self) -> &str {
        self.descriptor.description
    }

    async fn execute(&self, arguments: serde_json::Value) -> ToolResult {
        self.executor.execute(self.descriptor, arguments).await
    }
}
