//! The request executor shared by every tool.
//!
//! One GET per invocation, no retries, no caching. Every failure is turned
//! into a [`ToolResult::Error`]; nothing propagates past [`ApiExecutor::execute`].

use std::time::Duration;

use reqwest::Client;
use serde_json::Value;
use tracing::{debug, instrument, warn};

use super::descriptor::{ApiService, EndpointDescriptor};
use super::request::{arguments_object, build_query, build_url, redacted, validate_arguments};
use super::result::{FailureKind, ToolFailure, ToolResult};
use crate::core::config::GoogleConfig;

/// Per-call options.
#[derive(Debug, Clone, Default)]
pub struct CallOptions {
    /// Overrides the configured request timeout for this call.
    pub timeout: Option<Duration>,
}

impl CallOptions {
    pub fn with_timeout(timeout: Duration) -> Self {
        Self {
            timeout: Some(timeout),
        }
    }
}

/// Executes endpoint descriptors against the Google APIs.
///
/// Cheap to clone; clones share the underlying connection pool.
/// Dropping the future returned by [`execute`](Self::execute) cancels the
/// in-flight request.
#[derive(Debug, Clone)]
pub struct ApiExecutor {
    client: Client,
    config: GoogleConfig,
}

impl ApiExecutor {
    /// Create an executor from the Google access configuration.
    pub fn new(config: GoogleConfig) -> Self {
        let mut builder = Client::builder();
        if let Some(timeout) = config.request_timeout() {
            builder = builder.timeout(timeout);
        }
        let client = builder.build().unwrap_or_else(|e| {
            warn!("Failed to build configured HTTP client, using defaults: {}", e);
            Client::new()
        });
        Self { client, config }
    }

    /// Create an executor with a caller-provided client.
    pub fn with_client(client: Client, config: GoogleConfig) -> Self {
        Self { client, config }
    }

    pub fn config(&self) -> &GoogleConfig {
        &self.config
    }

    /// Base URL for a service family.
    pub fn base_url(&self, service: ApiService) -> &str {
        match service {
            ApiService::Maps => &self.config.maps_base_url,
            ApiService::Roads => &self.config.roads_base_url,
            ApiService::Weather => &self.config.weather_base_url,
        }
    }

    /// Validate the arguments and build the full request URL, key included.
    pub fn request_url(
        &self,
        descriptor: &EndpointDescriptor,
        arguments: Value,
    ) -> Result<String, ToolFailure> {
        let arguments = arguments_object(arguments)?;
        validate_arguments(descriptor, &arguments)?;
        let pairs = build_query(descriptor, &arguments, self.config.api_key.as_deref());
        build_url(self.base_url(descriptor.service), descriptor, &pairs)
    }

    /// Invoke an endpoint with the default options.
    pub async fn execute(&self, descriptor: &EndpointDescriptor, arguments: Value) -> ToolResult {
        self.execute_with(descriptor, arguments, &CallOptions::default())
            .await
    }

    /// Invoke an endpoint.
    #[instrument(skip_all, fields(tool = descriptor.name))]
    pub async fn execute_with(
        &self,
        descriptor: &EndpointDescriptor,
        arguments: Value,
        options: &CallOptions,
    ) -> ToolResult {
        let url = match self.request_url(descriptor, arguments) {
            Ok(url) => url,
            Err(failure) => {
                warn!("Rejected call: {}", failure.message);
                return failure.into();
            }
        };
        debug!("GET {}", redacted(&url));

        let (header, value) = descriptor.headers.header();
        let mut request = self.client.get(&url).header(header, value);
        if let Some(timeout) = options.timeout {
            request = request.timeout(timeout);
        }

        let response = match request.send().await {
            Ok(response) => response,
            Err(e) => {
                // reqwest errors embed the URL, which carries the key.
                let e = e.without_url();
                warn!("Request failed: {}", e);
                return ToolFailure::new(FailureKind::Transport, e.to_string()).into();
            }
        };

        let status = response.status();
        let body = match response.text().await {
            Ok(body) => body,
            Err(e) => {
                let e = e.without_url();
                warn!("Failed to read response body: {}", e);
                return ToolFailure::new(FailureKind::Transport, e.to_string()).into();
            }
        };

        if !status.is_success() {
            warn!("Upstream returned {}", status);
            let message = match serde_json::from_str::<Value>(&body) {
                Ok(json) => json.to_string(),
                Err(_) => body,
            };
            return ToolFailure::upstream(status.as_u16(), message).into();
        }

        match serde_json::from_str::<Value>(&body) {
            Ok(payload) => {
                debug!("Upstream returned {} ({} bytes)", status, body.len());
                ToolResult::Success(payload)
            }
            Err(e) => {
                warn!("Upstream returned a non-JSON body: {}", e);
                ToolFailure::new(
                    FailureKind::Decode,
                    format!("Invalid JSON in response: {}", e),
                )
                .into()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domains::tools::definitions::{
        CURRENT_CONDITIONS, DISTANCE_MATRIX, GET_TIME_ZONE, NEAREST_ROADS,
    };
    use serde_json::json;
    use wiremock::matchers::{header, method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn executor_for(server: &MockServer) -> ApiExecutor {
        ApiExecutor::new(GoogleConfig::with_base_url("test-key", server.uri()))
    }

    #[tokio::test]
    async fn test_success_returns_body_verbatim() {
        let server = MockServer::start().await;
        let body = json!({
            "status": "OK",
            "rows": [{"elements": [{"distance": {"text": "465 km", "value": 465000}}]}]
        });
        Mock::given(method("GET"))
            .and(path("/maps/api/distancematrix/json"))
            .and(query_param("origins", "Paris"))
            .and(query_param("mode", "driving"))
            .and(query_param("key", "test-key"))
            .and(header("accept", "application/json"))
            .respond_with(ResponseTemplate::new(200).set_body_json(&body))
            .expect(1)
            .mount(&server)
            .await;

        let result = executor_for(&server)
            .execute(
                &DISTANCE_MATRIX,
                json!({"origins": "Paris", "destinations": "Lyon"}),
            )
            .await;

        assert_eq!(result, ToolResult::Success(body));
    }

    #[tokio::test]
    async fn test_upstream_json_error_is_stringified() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(
                ResponseTemplate::new(400)
                    .set_body_json(json!({"error_message": "invalid request"})),
            )
            .mount(&server)
            .await;

        let result = executor_for(&server)
            .execute(
                &GET_TIME_ZONE,
                json!({"location": "39.6034810,-119.6822510", "timestamp": 1331161200}),
            )
            .await;

        assert_eq!(
            result.to_json(),
            json!({
                "error": "{\"error_message\":\"invalid request\"}",
                "kind": "upstream",
                "status": 400
            })
        );
    }

    #[tokio::test]
    async fn test_upstream_key_order_is_preserved() {
        let error_body = r#"{"status":"INVALID_REQUEST","error_message":"invalid request"}"#;
        let success_body = r#"{"status":"OK","timeZoneId":"America/Los_Angeles","dstOffset":0}"#;

        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(query_param("timestamp", "0"))
            .respond_with(ResponseTemplate::new(400).set_body_raw(error_body, "application/json"))
            .mount(&server)
            .await;
        Mock::given(method("GET"))
            .and(query_param("timestamp", "1331161200"))
            .respond_with(
                ResponseTemplate::new(200).set_body_raw(success_body, "application/json"),
            )
            .mount(&server)
            .await;

        let executor = executor_for(&server);

        let result = executor
            .execute(&GET_TIME_ZONE, json!({"location": "1,2", "timestamp": 0}))
            .await;
        assert_eq!(result.failure().unwrap().message, error_body);

        let result = executor
            .execute(&GET_TIME_ZONE, json!({"location": "1,2", "timestamp": 1331161200}))
            .await;
        assert_eq!(result.payload().unwrap().to_string(), success_body);
    }

    #[tokio::test]
    async fn test_upstream_non_json_error_keeps_status() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(502).set_body_string("Bad Gateway"))
            .mount(&server)
            .await;

        let result = executor_for(&server)
            .execute(&NEAREST_ROADS, json!({"points": "60.170880,24.942795"}))
            .await;

        let failure = result.failure().unwrap();
        assert_eq!(failure.kind, FailureKind::Upstream);
        assert_eq!(failure.status, Some(502));
        assert_eq!(failure.message, "Bad Gateway");
    }

    #[tokio::test]
    async fn test_non_json_success_is_a_decode_failure() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200).set_body_string("<html></html>"))
            .mount(&server)
            .await;

        let result = executor_for(&server)
            .execute(&NEAREST_ROADS, json!({"points": "60.170880,24.942795"}))
            .await;

        assert_eq!(result.failure().unwrap().kind, FailureKind::Decode);
    }

    #[tokio::test]
    async fn test_connection_refused_is_a_transport_failure() {
        // Nothing listens on port 1.
        let executor = ApiExecutor::new(GoogleConfig::with_base_url(
            "secret-key",
            "http://127.0.0.1:1",
        ));

        let result = executor
            .execute(
                &GET_TIME_ZONE,
                json!({"location": "1,2", "timestamp": 1}),
            )
            .await;

        let failure = result.failure().unwrap();
        assert_eq!(failure.kind, FailureKind::Transport);
        assert!(failure.status.is_none());
        assert!(!failure.message.is_empty());
        assert!(!failure.message.contains("secret-key"));
    }

    #[tokio::test]
    async fn test_weather_sends_content_type_header() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/v1/currentConditions:lookup"))
            .and(query_param("location.latitude", "37.422"))
            .and(query_param("unitsSystem", "METRIC"))
            .and(header("content-type", "application/json"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"isDaytime": true})))
            .expect(1)
            .mount(&server)
            .await;

        let result = executor_for(&server)
            .execute(
                &CURRENT_CONDITIONS,
                json!({"latitude": 37.422, "longitude": -122.0841}),
            )
            .await;

        assert_eq!(result.payload(), Some(&json!({"isDaytime": true})));
    }

    #[tokio::test]
    async fn test_identical_calls_hit_upstream_twice() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/maps/api/timezone/json"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"status": "OK"})))
            .expect(2)
            .mount(&server)
            .await;

        let executor = executor_for(&server);
        let arguments = json!({"location": "1,2", "timestamp": 1331161200});
        let first = executor.execute(&GET_TIME_ZONE, arguments.clone()).await;
        let second = executor.execute(&GET_TIME_ZONE, arguments).await;

        assert_eq!(first, second);
        // `expect(2)` is verified when the mock server drops.
    }

    #[tokio::test]
    async fn test_invalid_arguments_never_reach_upstream() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200))
            .expect(0)
            .mount(&server)
            .await;

        let result = executor_for(&server)
            .execute(&GET_TIME_ZONE, json!({"location": "1,2"}))
            .await;

        assert_eq!(
            result.failure().unwrap().kind,
            FailureKind::InvalidArguments
        );
    }

    #[tokio::test]
    async fn test_per_call_timeout() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(json!({}))
                    .set_delay(Duration::from_secs(5)),
            )
            .mount(&server)
            .await;

        let result = executor_for(&server)
            .execute_with(
                &NEAREST_ROADS,
                json!({"points": "1,2"}),
                &CallOptions::with_timeout(Duration::from_millis(100)),
            )
            .await;

        assert_eq!(result.failure().unwrap().kind, FailureKind::Transport);
    }

    #[test]
    fn test_request_url_uses_service_base() {
        let executor = ApiExecutor::new(GoogleConfig {
            api_key: Some("K".to_string()),
            ..GoogleConfig::default()
        });
        let url = executor
            .request_url(&NEAREST_ROADS, json!({"points": "1,2|3,4"}))
            .unwrap();
        assert_eq!(
            url,
            "https://roads.googleapis.com/v1/nearestRoads?points=1%2C2%7C3%2C4&key=K"
        );
    }
}
