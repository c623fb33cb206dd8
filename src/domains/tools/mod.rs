//! Tools domain module.
//!
//! Every tool wraps one Google Maps Platform REST endpoint. Tools are not
//! written one by one: each endpoint is a static descriptor in
//! `definitions/`, and a single executor in `api/` turns any descriptor plus
//! an arguments object into one HTTP GET.
//!
//! ## Architecture
//!
//! - `api/` - descriptor types, request construction, executor, result type
//! - `definitions/` - the endpoint catalog (one file per API family)
//! - `handlers.rs` - the `ToolHandler` trait and `EndpointTool`
//! - `router.rs` - dynamic rmcp ToolRouter for the STDIO transport
//! - `registry.rs` - name-based dispatch and metadata for the HTTP transport
//! - `error.rs` - dispatch error types
//!
//! ## Adding a New Tool
//!
//! Declare a new `EndpointDescriptor` in the matching `definitions/` file and
//! add it to the catalog in `definitions/mod.rs`. Router and registry pick it
//! up from there.

pub mod api;
pub mod definitions;
mod error;
mod handlers;
mod registry;
pub mod router;

pub use api::{ApiExecutor, CallOptions, FailureKind, ToolFailure, ToolResult};
pub use error::ToolError;
pub use handlers::*;
pub use registry::ToolRegistry;
pub use router::build_tool_router;
