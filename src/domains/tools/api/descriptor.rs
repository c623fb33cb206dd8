//! Declarative endpoint descriptors.
//!
//! Every tool is a static [`EndpointDescriptor`]: where the endpoint lives,
//! which headers it wants, and an ordered table of parameters with their
//! type, allowed values and inclusion policy. The executor and the schema
//! published to clients are both derived from this table.

use schemars::{Schema, json_schema};
use serde_json::{Map, Value, json};

/// Google host family an endpoint belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ApiService {
    /// Classic Maps web services (Distance Matrix, Places, Time Zone).
    Maps,
    /// Roads API.
    Roads,
    /// Weather API.
    Weather,
}

/// Header sent with the outbound GET.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeaderPolicy {
    /// `Accept: application/json`
    AcceptJson,
    /// `Content-Type: application/json`
    ContentTypeJson,
}

impl HeaderPolicy {
    /// Header name and value for this policy.
    pub fn header(self) -> (reqwest::header::HeaderName, &'static str) {
        match self {
            Self::AcceptJson => (reqwest::header::ACCEPT, "application/json"),
            Self::ContentTypeJson => (reqwest::header::CONTENT_TYPE, "application/json"),
        }
    }
}

/// JSON type of a parameter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParamKind {
    String,
    Number,
    Integer,
    Boolean,
}

impl ParamKind {
    /// JSON Schema type keyword.
    pub fn as_schema_type(self) -> &'static str {
        match self {
            Self::String => "string",
            Self::Number => "number",
            Self::Integer => "integer",
            Self::Boolean => "boolean",
        }
    }
}

/// Default value of an optional parameter.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ParamDefault {
    Text(&'static str),
    Integer(i64),
    Flag(bool),
}

impl ParamDefault {
    /// The default as a JSON value (used in the published schema).
    pub fn to_json(self) -> Value {
        match self {
            Self::Text(s) => Value::from(s),
            Self::Integer(n) => Value::from(n),
            Self::Flag(b) => Value::from(b),
        }
    }

    /// The default as it appears in a query string.
    pub fn to_query_value(self) -> String {
        match self {
            Self::Text(s) => s.to_string(),
            Self::Integer(n) => n.to_string(),
            Self::Flag(b) => b.to_string(),
        }
    }
}

/// How a parameter ends up in the request.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ParamPolicy {
    /// Must be supplied by the caller; always sent.
    Required,
    /// Sent with the caller's value, or with the default when omitted.
    Default(ParamDefault),
    /// Sent only when supplied with a truthy value.
    IfPresent,
}

/// One row of an endpoint's parameter table.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ParamSpec {
    /// Argument name exposed to callers.
    pub name: &'static str,
    /// Query-string name sent upstream.
    pub query: &'static str,
    pub kind: ParamKind,
    /// Allowed values; empty means unrestricted.
    pub allowed: &'static [&'static str],
    pub description: &'static str,
    pub policy: ParamPolicy,
}

impl ParamSpec {
    /// A required parameter.
    pub const fn required(name: &'static str, kind: ParamKind, description: &'static str) -> Self {
        Self {
            name,
            query: name,
            kind,
            allowed: &[],
            description,
            policy: ParamPolicy::Required,
        }
    }

    /// An optional parameter sent only when present and truthy.
    pub const fn optional(name: &'static str, kind: ParamKind, description: &'static str) -> Self {
        Self {
            name,
            query: name,
            kind,
            allowed: &[],
            description,
            policy: ParamPolicy::IfPresent,
        }
    }

    /// An optional parameter with a default value.
    pub const fn defaulted(
        name: &'static str,
        kind: ParamKind,
        default: ParamDefault,
        description: &'static str,
    ) -> Self {
        Self {
            name,
            query: name,
            kind,
            allowed: &[],
            description,
            policy: ParamPolicy::Default(default),
        }
    }

    /// Restrict the parameter to a fixed set of values.
    pub const fn one_of(mut self, allowed: &'static [&'static str]) -> Self {
        self.allowed = allowed;
        self
    }

    /// Send the parameter upstream under a different name.
    pub const fn sent_as(mut self, query: &'static str) -> Self {
        self.query = query;
        self
    }

    pub fn is_required(&self) -> bool {
        matches!(self.policy, ParamPolicy::Required)
    }

    /// JSON Schema fragment describing this parameter.
    pub fn schema(&self) -> Value {
        let mut property = Map::new();
        property.insert("type".into(), json!(self.kind.as_schema_type()));
        property.insert("description".into(), json!(self.description));
        if !self.allowed.is_empty() {
            property.insert("enum".into(), json!(self.allowed));
        }
        if let ParamPolicy::Default(default) = self.policy {
            property.insert("default".into(), default.to_json());
        }
        Value::Object(property)
    }
}

/// Static description of one tool/endpoint pair.
#[derive(Debug)]
pub struct EndpointDescriptor {
    /// Tool name, unique across the catalog.
    pub name: &'static str,
    pub description: &'static str,
    pub service: ApiService,
    /// Path appended to the service base URL.
    pub path: &'static str,
    pub headers: HeaderPolicy,
    /// Parameter table, in the order parameters are sent.
    pub params: &'static [ParamSpec],
}

impl EndpointDescriptor {
    /// Names of the required parameters, in declaration order.
    pub fn required(&self) -> Vec<&'static str> {
        self.params
            .iter()
            .filter(|p| p.is_required())
            .map(|p| p.name)
            .collect()
    }

    /// Look up a parameter by its argument name.
    pub fn param(&self, name: &str) -> Option<&ParamSpec> {
        self.params.iter().find(|p| p.name == name)
    }

    /// JSON Schema for the tool's arguments object.
    pub fn input_schema(&self) -> Schema {
        let properties: Map<String, Value> = self
            .params
            .iter()
            .map(|p| (p.name.to_string(), p.schema()))
            .collect();

        json_schema!({
            "type": "object",
            "properties": properties,
            "required": self.required(),
        })
    }

    /// The input schema as a plain JSON object, as MCP tool metadata expects it.
    pub fn input_schema_object(&self) -> Map<String, Value> {
        self.input_schema()
            .as_object()
            .cloned()
            .unwrap_or_default()
    }
}
