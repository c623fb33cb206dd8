//! Outcome of a tool invocation.

use rmcp::model::{CallToolResult, Content};
use serde::{Deserialize, Serialize};
use serde_json::{Value, json};

/// Where a failure came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FailureKind {
    /// Arguments did not match the tool's parameter table.
    InvalidArguments,
    /// The outbound request could not be built.
    Request,
    /// DNS, connection, timeout or body-read failure.
    Transport,
    /// The upstream answered with a non-success status.
    Upstream,
    /// The upstream answered 2xx with a body that is not JSON.
    Decode,
}

/// Error half of a [`ToolResult`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ToolFailure {
    /// Human-readable message. Serialized under the `error` key.
    #[serde(rename = "error")]
    pub message: String,
    pub kind: FailureKind,
    /// HTTP status, when the upstream answered.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<u16>,
}

impl ToolFailure {
    pub fn new(kind: FailureKind, message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            kind,
            status: None,
        }
    }

    pub fn invalid_arguments(message: impl Into<String>) -> Self {
        Self::new(FailureKind::InvalidArguments, message)
    }

    pub fn upstream(status: u16, message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            kind: FailureKind::Upstream,
            status: Some(status),
        }
    }
}

/// Result of one tool call: the upstream JSON, or a failure description.
#[derive(Debug, Clone, PartialEq)]
pub enum ToolResult {
    Success(Value),
    Error(ToolFailure),
}

impl ToolResult {
    pub fn is_error(&self) -> bool {
        matches!(self, Self::Error(_))
    }

    /// Success payload, if any.
    pub fn payload(&self) -> Option<&Value> {
        match self {
            Self::Success(value) => Some(value),
            Self::Error(_) => None,
        }
    }

    /// Failure description, if any.
    pub fn failure(&self) -> Option<&ToolFailure> {
        match self {
            Self::Success(_) => None,
            Self::Error(failure) => Some(failure),
        }
    }

    /// The caller-facing JSON shape: the upstream body on success,
    /// `{ "error": ..., "kind": ..., "status"?: ... }` on failure.
    pub fn to_json(&self) -> Value {
        match self {
            Self::Success(value) => value.clone(),
            Self::Error(failure) => serde_json::to_value(failure)
                .unwrap_or_else(|_| json!({ "error": failure.message })),
        }
    }

    /// Convert into an MCP tool result.
    ///
    /// Structured content must be a JSON object, so non-object payloads are
    /// only returned as text.
    pub fn into_call_result(self) -> CallToolResult {
        let is_error = self.is_error();
        let value = self.to_json();
        let text = match &self {
            Self::Success(_) => value.to_string(),
            Self::Error(failure) => failure.message.clone(),
        };
        let structured_content = value.is_object().then_some(value);

        CallToolResult {
            content: vec![Content::text(text)],
            structured_content,
            is_error: Some(is_error),
            meta: None,
        }
    }
}

impl From<ToolFailure> for ToolResult {
    fn from(failure: ToolFailure) -> Self {
        Self::Error(failure)
    }
}
