//! Table-driven access to the Google Maps Platform REST APIs.
//!
//! - `descriptor` - static endpoint and parameter tables
//! - `request` - argument validation and query construction
//! - `executor` - the single HTTP GET and response normalization
//! - `result` - the success/error outcome returned by every tool

pub mod descriptor;
pub mod executor;
pub mod request;
pub mod result;

pub use descriptor::{
    ApiService, EndpointDescriptor, HeaderPolicy, ParamDefault, ParamKind, ParamPolicy, ParamSpec,
};
pub use executor::{ApiExecutor, CallOptions};
pub use result::{FailureKind, ToolFailure, ToolResult};
