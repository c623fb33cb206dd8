//! Tool Router - builds the rmcp ToolRouter from the endpoint catalog.
//!
//! One dynamic route per endpoint; every route goes through the same
//! executor.

use std::sync::Arc;

use futures::FutureExt;
use rmcp::{
    ErrorData as McpError,
    handler::server::tool::{ToolCallContext, ToolRoute, ToolRouter},
    model::CallToolResult,
};

use super::api::ApiExecutor;
use super::definitions;
use super::handlers::{EndpointTool, ToolHandler};

/// Build the tool router with all registered tools.
pub fn build_tool_router<S>(executor: Arc<ApiExecutor>) -> ToolRouter<S>
where
    S: Send + Sync + 'static,
{
    definitions::all()
        .iter()
        .fold(ToolRouter::new(), |router, descriptor| {
            router.with_route(create_route(EndpointTool::new(*descriptor, executor.clone())))
        })
}

/// Create a ToolRoute for STDIO transport.
pub fn create_route<S>(tool: EndpointTool) -> ToolRoute<S>
where
    S: Send + Sync + 'static,
{
    ToolRoute::new_dyn(
        EndpointTool::to_tool(tool.descriptor()),
        move |ctx: ToolCallContext<'_, S>| {
            let args = ctx.arguments.clone().unwrap_or_default();
            let tool = tool.clone();
            async move {
                let result = tool.execute(serde_json::Value::Object(args)).await;
                Ok::<CallToolResult, McpError>(result.into_call_result())
            }
            .boxed()
        },
    )
}
