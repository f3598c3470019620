//! HTTP-client port and production adapter.
//!
//! The port surfaces every received status code together with the decoded
//! body so the use cases can map it; it never fails for a non-2xx status.
//! Only transport-level failure (no response at all) is an error, and the
//! use cases fold that into the unexpected-error kind.

use async_trait::async_trait;
use serde_json::Value;
use url::Url;

use crate::config::ApiConfig;
use crate::error::ApiResult;

// ============================================================================
// HTTP-Client Port
// ============================================================================

/// One received HTTP response.
///
/// Immutable and scoped to a single request. `body` is `None` when the
/// response carried no payload or one that was not JSON; what that means is
/// decided by the per-endpoint status mapping, not here.
#[derive(Debug, Clone, PartialEq)]
pub struct HttpResponse {
    /// HTTP status code as received.
    pub status: u16,
    /// Decoded JSON body, when present.
    pub body: Option<Value>,
}

impl HttpResponse {
    /// Build a response from its parts.
    #[must_use]
    pub const fn new(status: u16, body: Option<Value>) -> Self {
        Self { status, body }
    }
}

/// Port trait for issuing single HTTP requests.
///
/// This abstraction allows for dependency injection of HTTP clients,
/// making it easy to test code that depends on HTTP requests, and is the
/// seam the authorizing decorator wraps.
#[async_trait]
pub trait HttpClient: Send + Sync {
    /// Issue a GET request with the given extra headers.
    async fn get(&self, url: &Url, headers: &[(String, String)]) -> ApiResult<HttpResponse>;

    /// Issue a POST request with an optional JSON body.
    async fn post(&self, url: &Url, body: Option<&Value>) -> ApiResult<HttpResponse>;
}

// ============================================================================
// Reqwest Adapter
// ============================================================================

/// Production HTTP client using reqwest.
///
/// Applies the configured timeout and user agent to every request. Each
/// call sends exactly one request; there is no retry.
pub struct ReqwestClient {
    client: reqwest::Client,
}

impl ReqwestClient {
    /// Create a new client from the given configuration.
    pub fn new(config: &ApiConfig) -> Self {
        let client = reqwest::Client::builder()
            .timeout(config.timeout)
            .user_agent(config.user_agent.clone())
            .build()
            .expect("failed to create HTTP client");

        Self { client }
    }

    async fn into_response(response: reqwest::Response) -> HttpResponse {
        let status = response.status().as_u16();
        // An empty or non-JSON payload is surfaced as an absent body, never
        // as a transport failure.
        let body = response.json::<Value>().await.ok();
        HttpResponse { status, body }
    }
}

#[async_trait]
impl HttpClient for ReqwestClient {
    async fn get(&self, url: &Url, headers: &[(String, String)]) -> ApiResult<HttpResponse> {
        let mut request = self.client.get(url.as_str());
        for (name, value) in headers {
            request = request.header(name.as_str(), value.as_str());
        }
        let response = request.send().await?;
        Ok(Self::into_response(response).await)
    }

    async fn post(&self, url: &Url, body: Option<&Value>) -> ApiResult<HttpResponse> {
        let mut request = self.client.post(url.as_str());
        if let Some(body) = body {
            request = request.json(body);
        }
        let response = request.send().await?;
        Ok(Self::into_response(response).await)
    }
}

// ============================================================================
// Fake Client for Testing
// ============================================================================

#[cfg(test)]
pub mod testing {
    use super::*;
    use crate::error::ApiError;
    use std::sync::Mutex;

    /// One request as the fake observed it.
    #[derive(Debug, Clone, PartialEq)]
    pub struct RecordedRequest {
        pub method: &'static str,
        pub url: String,
        pub body: Option<Value>,
        pub headers: Vec<(String, String)>,
    }

    enum CannedReply {
        Response(HttpResponse),
        Failure(String),
    }

    /// A fake HTTP client that returns canned responses and records every
    /// request it is given, so tests can assert the single-call property.
    pub struct FakeHttpClient {
        replies: Mutex<Vec<(String, CannedReply)>>,
        requests: Mutex<Vec<RecordedRequest>>,
    }

    impl FakeHttpClient {
        /// Create a new fake client with no canned replies.
        pub fn new() -> Self {
            Self {
                replies: Mutex::new(Vec::new()),
                requests: Mutex::new(Vec::new()),
            }
        }

        /// Add a canned response for URLs containing `url_contains`.
        pub fn with_response(self, url_contains: &str, response: HttpResponse) -> Self {
            self.replies
                .lock()
                .unwrap()
                .push((url_contains.to_string(), CannedReply::Response(response)));
            self
        }

        /// Make URLs containing `url_contains` fail at the transport level.
        pub fn with_failure(self, url_contains: &str, message: &str) -> Self {
            self.replies.lock().unwrap().push((
                url_contains.to_string(),
                CannedReply::Failure(message.to_string()),
            ));
            self
        }

        /// Every request issued so far, in order.
        pub fn requests(&self) -> Vec<RecordedRequest> {
            self.requests.lock().unwrap().clone()
        }

        fn reply_for(&self, url: &str) -> ApiResult<HttpResponse> {
            let replies = self.replies.lock().unwrap();
            for (pattern, reply) in replies.iter() {
                if url.contains(pattern.as_str()) {
                    return match reply {
                        CannedReply::Response(response) => Ok(response.clone()),
                        CannedReply::Failure(message) => Err(ApiError::Connection {
                            message: message.clone(),
                        }),
                    };
                }
            }
            Err(ApiError::Connection {
                message: format!("no canned reply for {url}"),
            })
        }
    }

    impl Default for FakeHttpClient {
        fn default() -> Self {
            Self::new()
        }
    }

    #[async_trait]
    impl HttpClient for FakeHttpClient {
        async fn get(&self, url: &Url, headers: &[(String, String)]) -> ApiResult<HttpResponse> {
            self.requests.lock().unwrap().push(RecordedRequest {
                method: "GET",
                url: url.to_string(),
                body: None,
                headers: headers.to_vec(),
            });
            self.reply_for(url.as_str())
        }

        async fn post(&self, url: &Url, body: Option<&Value>) -> ApiResult<HttpResponse> {
            self.requests.lock().unwrap().push(RecordedRequest {
                method: "POST",
                url: url.to_string(),
                body: body.cloned(),
                headers: Vec::new(),
            });
            self.reply_for(url.as_str())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::testing::FakeHttpClient;
    use super::*;
    use crate::error::ApiError;
    use serde_json::json;

    #[test]
    fn test_reqwest_client_creation() {
        let config = ApiConfig::new();
        let _client = ReqwestClient::new(&config);
    }

    #[tokio::test]
    async fn test_fake_returns_canned_response() {
        let fake = FakeHttpClient::new()
            .with_response("login", HttpResponse::new(200, Some(json!({"ok": true}))));

        let url = Url::parse("https://example.com/api/login").unwrap();
        let response = fake.get(&url, &[]).await.unwrap();

        assert_eq!(response.status, 200);
        assert_eq!(response.body, Some(json!({"ok": true})));
    }

    #[tokio::test]
    async fn test_fake_records_requests_in_order() {
        let fake = FakeHttpClient::new()
            .with_response("surveys", HttpResponse::new(204, None))
            .with_response("login", HttpResponse::new(200, None));

        let surveys = Url::parse("https://example.com/api/surveys").unwrap();
        let login = Url::parse("https://example.com/api/login").unwrap();
        fake.get(&surveys, &[]).await.unwrap();
        fake.post(&login, Some(&json!({"email": "a@b.c"})))
            .await
            .unwrap();

        let requests = fake.requests();
        assert_eq!(requests.len(), 2);
        assert_eq!(requests[0].method, "GET");
        assert_eq!(requests[1].method, "POST");
        assert_eq!(requests[1].body, Some(json!({"email": "a@b.c"})));
    }

    #[tokio::test]
    async fn test_fake_unmatched_url_is_a_transport_failure() {
        let fake = FakeHttpClient::new();
        let url = Url::parse("https://example.com/unknown").unwrap();

        let err = fake.get(&url, &[]).await.unwrap_err();
        assert!(matches!(err, ApiError::Connection { .. }));
    }

    #[tokio::test]
    async fn test_fake_canned_failure() {
        let fake = FakeHttpClient::new().with_failure("login", "connection reset");
        let url = Url::parse("https://example.com/api/login").unwrap();

        let err = fake.post(&url, None).await.unwrap_err();
        assert!(matches!(err, ApiError::Connection { message } if message == "connection reset"));
    }
}
