//! Request construction from an endpoint's parameter table.
//!
//! Arguments are validated against the table first (required fields present,
//! values of the declared type, enum membership), then turned into an ordered
//! list of query pairs with defaults applied and the API key appended last.

use serde_json::{Map, Value};

use super::descriptor::{EndpointDescriptor, ParamKind, ParamPolicy, ParamSpec};
use super::result::{FailureKind, ToolFailure};

/// Query parameter carrying the API key.
pub const API_KEY_PARAM: &str = "key";

/// Ordered `(name, value)` pairs making up a query string.
pub type QueryPairs = Vec<(String, String)>;

/// Normalize the raw arguments into an object. `null` counts as no arguments.
pub fn arguments_object(arguments: Value) -> Result<Map<String, Value>, ToolFailure> {
    match arguments {
        Value::Object(map) => Ok(map),
        Value::Null => Ok(Map::new()),
        other => Err(ToolFailure::invalid_arguments(format!(
            "Arguments must be a JSON object, got {}",
            json_type_name(&other)
        ))),
    }
}

/// Check the arguments against the descriptor's parameter table.
///
/// Unknown keys are ignored. A `null` value is treated as absent.
pub fn validate_arguments(
    descriptor: &EndpointDescriptor,
    arguments: &Map<String, Value>,
) -> Result<(), ToolFailure> {
    for spec in descriptor.params {
        match present(arguments, spec.name) {
            None if spec.is_required() => {
                return Err(ToolFailure::invalid_arguments(format!(
                    "Missing required parameter '{}' for {}",
                    spec.name, descriptor.name
                )));
            }
            None => {}
            // Falsy optional values are dropped later, whatever their type.
            Some(value) if spec.policy == ParamPolicy::IfPresent && !is_truthy(value) => {}
            Some(value) => check_value(spec, value)?,
        }
    }
    Ok(())
}

/// Build the ordered query pairs for a validated argument object.
///
/// Required values are always sent, defaulted values fall back to their
/// default, other optional values are sent only when truthy. The API key is
/// appended last; a missing key is sent empty.
pub fn build_query(
    descriptor: &EndpointDescriptor,
    arguments: &Map<String, Value>,
    api_key: Option<&str>,
) -> QueryPairs {
    let mut pairs = QueryPairs::with_capacity(descriptor.params.len() + 1);

    for spec in descriptor.params {
        let supplied = present(arguments, spec.name);
        let value = match (spec.policy, supplied) {
            (ParamPolicy::Required, Some(value)) => Some(query_value(value)),
            (ParamPolicy::Required, None) => None,
            (ParamPolicy::Default(_), Some(value)) => Some(query_value(value)),
            (ParamPolicy::Default(default), None) => Some(default.to_query_value()),
            (ParamPolicy::IfPresent, Some(value)) if is_truthy(value) => Some(query_value(value)),
            (ParamPolicy::IfPresent, _) => None,
        };
        if let Some(value) = value {
            pairs.push((spec.query.to_string(), value));
        }
    }

    pairs.push((API_KEY_PARAM.to_string(), api_key.unwrap_or_default().to_string()));
    pairs
}

/// Join a base URL, the endpoint path and the encoded query.
pub fn build_url(
    base_url: &str,
    descriptor: &EndpointDescriptor,
    pairs: &QueryPairs,
) -> Result<String, ToolFailure> {
    let query = serde_urlencoded::to_string(pairs).map_err(|e| {
        ToolFailure::new(FailureKind::Request, format!("Failed to encode query: {}", e))
    })?;
    Ok(format!(
        "{}{}?{}",
        base_url.trim_end_matches('/'),
        descriptor.path,
        query
    ))
}

/// Same as the URL but with the key value masked, for logging.
pub fn redacted(url: &str) -> String {
    match url.rfind("&key=").or_else(|| url.rfind("?key=")) {
        Some(idx) => format!("{}key=[REDACTED]", &url[..idx + 1]),
        None => url.to_string(),
    }
}

/// JavaScript-style truthiness: empty strings, zero, `false` and `null` are falsy.
pub fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

fn present<'a>(arguments: &'a Map<String, Value>, name: &str) -> Option<&'a Value> {
    arguments.get(name).filter(|v| !v.is_null())
}

fn query_value(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        // `1331161200.0` goes out as `1331161200`.
        Value::Number(n) if !n.is_i64() && !n.is_u64() => match integral(value) {
            Some(i) => i.to_string(),
            None => n.to_string(),
        },
        other => other.to_string(),
    }
}

/// The value as an integer when it is a float with no fractional part.
fn integral(value: &Value) -> Option<i64> {
    value
        .as_f64()
        .filter(|f| f.fract() == 0.0 && f.abs() <= MAX_SAFE_INTEGER)
        .map(|f| f as i64)
}

const MAX_SAFE_INTEGER: f64 = 9_007_199_254_740_991.0;

fn check_value(spec: &ParamSpec, value: &Value) -> Result<(), ToolFailure> {
    let matches_kind = match spec.kind {
        // Coordinates and timestamps are often passed as bare numbers.
        ParamKind::String => value.is_string() || value.is_number(),
        ParamKind::Number => {
            value.is_number() || value.as_str().is_some_and(|s| s.trim().parse::<f64>().is_ok())
        }
        ParamKind::Integer => {
            value.is_i64()
                || value.is_u64()
                || integral(value).is_some()
                || value.as_str().is_some_and(|s| s.trim().parse::<i64>().is_ok())
        }
        ParamKind::Boolean => {
            value.is_boolean() || matches!(value.as_str(), Some("true") | Some("false"))
        }
    };

    if !matches_kind {
        return Err(ToolFailure::invalid_arguments(format!(
            "Parameter '{}' must be of type {}, got {}",
            spec.name,
            spec.kind.as_schema_type(),
            json_type_name(value)
        )));
    }

    if !spec.allowed.is_empty() {
        let rendered = query_value(value);
        if !spec.allowed.contains(&rendered.as_str()) {
            return Err(ToolFailure::invalid_arguments(format!(
                "Parameter '{}' must be one of [{}], got '{}'",
                spec.name,
                spec.allowed.join(", "),
                rendered
            )));
        }
    }

    Ok(())
}

fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
