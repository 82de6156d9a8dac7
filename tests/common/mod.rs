#![allow(dead_code)]

use std::collections::BTreeMap;

use fatsecret::{Credentials, FatSecretClient, FatSecretConfig};
use serde_json::json;
use wiremock::matchers::{basic_auth, body_string_contains, method, path, query_param};
use wiremock::{Mock, MockServer, Request, Respond, ResponseTemplate};

pub const CLIENT_ID: &str = "test-client";
pub const CLIENT_SECRET: &str = "test-secret";

/// Token handed out once the planned tokens run out.
pub const DEFAULT_TOKEN: &str = "default-token";
pub const DEFAULT_LIFETIME: u64 = 3600;

const TOKEN_PATH: &str = "/connect/token";
const API_PATH: &str = "/rest/server.api";

/// A request received by the mock token endpoint.
#[derive(Debug, Clone)]
pub struct TokenCall {
    pub authorization: Option<String>,
    /// Form-encoded grant body
    pub body: String,
}

/// A request received by the mock API endpoint.
#[derive(Debug, Clone)]
pub struct ApiCall {
    pub authorization: Option<String>,
    pub params: BTreeMap<String, String>,
}

/// Stand-in for the FatSecret token and API endpoints.
///
/// The token endpoint hands out the planned `(token, expires_in)` pairs in order, then
/// [`DEFAULT_TOKEN`]. Requests without the test credentials get `400 invalid_client`.
/// The API endpoint echoes the authorization header and parameters it received, except
/// for `food.get.v4` with `food_id=0`, which yields the API's "invalid id" error payload.
pub struct MockFatSecret {
    server: MockServer,
}

impl MockFatSecret {
    pub async fn start() -> Self {
        Self::with_tokens(&[]).await
    }

    pub async fn with_tokens(tokens: &[(&str, u64)]) -> Self {
        let server = MockServer::start().await;

        // Earlier plans win; each is served once
        for (i, (token, lifetime)) in tokens.iter().enumerate() {
            token_grant()
                .respond_with(token_response(token, *lifetime))
                .up_to_n_times(1)
                .with_priority(1 + i as u8)
                .mount(&server)
                .await;
        }

        token_grant()
            .respond_with(token_response(DEFAULT_TOKEN, DEFAULT_LIFETIME))
            .with_priority(100)
            .mount(&server)
            .await;

        Mock::given(method("POST"))
            .and(path(TOKEN_PATH))
            .respond_with(
                ResponseTemplate::new(400).set_body_json(json!({"error": "invalid_client"})),
            )
            .with_priority(200)
            .mount(&server)
            .await;

        Mock::given(method("POST"))
            .and(path(API_PATH))
            .and(query_param("method", "food.get.v4"))
            .and(query_param("food_id", "0"))
            .respond_with(ResponseTemplate::new(200).set_body_json(
                json!({"error": {"code": 106, "message": "Invalid ID: food_id"}}),
            ))
            .with_priority(1)
            .mount(&server)
            .await;

        Mock::given(method("POST"))
            .and(path(API_PATH))
            .respond_with(EchoRequest)
            .with_priority(10)
            .mount(&server)
            .await;

        Mock::given(method("POST"))
            .and(path("/maintenance"))
            .respond_with(
                ResponseTemplate::new(503)
                    .set_body_string("<html><body>Down for maintenance</body></html>"),
            )
            .mount(&server)
            .await;

        Self { server }
    }

    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.server.uri(), path)
    }

    pub fn config(&self) -> FatSecretConfig {
        FatSecretConfig::with_base_url(&self.server.uri())
    }

    pub async fn client(&self) -> FatSecretClient {
        FatSecretClient::with_config(credentials(), self.config())
            .await
            .expect("Failed to create client against mock server")
    }

    async fn received(&self, request_path: &str) -> Vec<Request> {
        self.server
            .received_requests()
            .await
            .expect("Request recording is disabled")
            .into_iter()
            .filter(|r| r.url.path() == request_path)
            .collect()
    }

    pub async fn token_requests(&self) -> usize {
        self.received(TOKEN_PATH).await.len()
    }

    pub async fn token_calls(&self) -> Vec<TokenCall> {
        self.received(TOKEN_PATH)
            .await
            .iter()
            .map(|r| TokenCall {
                authorization: authorization(r),
                body: String::from_utf8_lossy(&r.body).into_owned(),
            })
            .collect()
    }

    pub async fn api_calls(&self) -> Vec<ApiCall> {
        self.received(API_PATH)
            .await
            .iter()
            .map(|r| ApiCall {
                authorization: authorization(r),
                params: query_params(r),
            })
            .collect()
    }

    pub async fn last_api_call(&self) -> ApiCall {
        self.api_calls()
            .await
            .pop()
            .expect("No API call reached the mock server")
    }
}

fn token_grant() -> wiremock::MockBuilder {
    Mock::given(method("POST"))
        .and(path(TOKEN_PATH))
        .and(basic_auth(CLIENT_ID, CLIENT_SECRET))
        .and(body_string_contains("grant_type=client_credentials"))
}

fn token_response(token: &str, lifetime: u64) -> ResponseTemplate {
    ResponseTemplate::new(200).set_body_json(json!({
        "access_token": token,
        "expires_in": lifetime,
        "token_type": "Bearer",
    }))
}

fn authorization(request: &Request) -> Option<String> {
    request
        .headers
        .get("authorization")
        .and_then(|v| v.to_str().ok())
        .map(str::to_string)
}

fn query_params(request: &Request) -> BTreeMap<String, String> {
    request.url.query_pairs().into_owned().collect()
}

/// Replies with the authorization header and query parameters it was sent.
struct EchoRequest;

impl Respond for EchoRequest {
    fn respond(&self, request: &Request) -> ResponseTemplate {
        ResponseTemplate::new(200).set_body_json(json!({
            "headers": {"authorization": authorization(request)},
            "params": query_params(request),
        }))
    }
}

pub fn credentials() -> Credentials {
    Credentials::new(CLIENT_ID, CLIENT_SECRET)
}

/// An address nothing listens on.
pub async fn unreachable_url() -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind throwaway listener");
    let addr = listener.local_addr().expect("Listener has no address");
    drop(listener);
    format!("http://{}", addr)
}

/// Expected parameter map: the given pairs plus `method` and `format=json`.
pub fn expected_params(method: &str, pairs: &[(&str, &str)]) -> BTreeMap<String, String> {
    let mut params: BTreeMap<String, String> = pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();
    params.insert("method".to_string(), method.to_string());
    params.insert("format".to_string(), "json".to_string());
    params
}

pub fn init_test_logging() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::new("fatsecret=debug"))
        .with_test_writer()
        .try_init();
}
