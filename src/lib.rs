//! Google Maps Platform MCP Server Library
//!
//! Exposes Google Maps Platform REST endpoints (Distance Matrix, Places,
//! Time Zone, Roads, Weather) as Model Context Protocol tools.
//!
//! # Architecture
//!
//! - **core**: configuration, error handling, the MCP server handler and transports
//! - **domains**: business logic organized by bounded contexts
//!   - **tools**: endpoint descriptors, the shared request executor, dispatch
//!
//! # Example
//!
//! ```rust,no_run
//! use maps_mcp_server::domains::tools::{ApiExecutor, definitions::GET_TIME_ZONE};
//! use maps_mcp_server::core::Config;
//!
//! #[tokio::main]
//! async fn main() -> maps_mcp_server::Result<()> {
//!     let config = Config::from_env()?;
//!     let executor = ApiExecutor::new(config.google);
//!     let result = executor
//!         .execute(
//!             &GET_TIME_ZONE,
//!             serde_json::json!({"location": "39.6034810,-119.6822510", "timestamp": 1331161200}),
//!         )
//!         .await;
//!     println!("{}", result.to_json());
//!     Ok(())
//! }
//! ```

pub mod core;
pub mod domains;

// Re-export commonly used types for convenience
pub use crate::core::{Config, Error, McpServer, Result};
pub use domains::tools::{ApiExecutor, ToolResult};
