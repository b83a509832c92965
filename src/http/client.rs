//! Low-level HTTP executor — `OandaHttp`.
//!
//! Takes a populated request model, runs it through the marshalling core,
//! executes the resulting wire request with reqwest, and decodes the raw
//! response. Marshalling failures surface before any network activity.
//! Internal to the SDK — the high-level client wraps this.

use crate::endpoint::{build, decode_response, Endpoint, Method, WireRequest};
use crate::error::{HttpError, SdkError};
use crate::http::retry::{RetryConfig, RetryPolicy};

use async_lock::RwLock;
use reqwest::Client;
use std::sync::Arc;
use std::time::Duration;

/// Low-level HTTP client for the v20 REST API.
pub struct OandaHttp {
    base_url: String,
    client: Client,
    /// Bearer token injected into every request. NEVER exposed publicly.
    auth_token: Arc<RwLock<Option<String>>>,
}

impl OandaHttp {
    pub fn new(base_url: &str, token: Option<String>) -> Self {
        let builder = Client::builder()
            .timeout(Duration::from_secs(30))
            .pool_max_idle_per_host(10);

        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client: builder.build().expect("Failed to build HTTP client"),
            auth_token: Arc::new(RwLock::new(token)),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Set the bearer token used for the `Authorization` header.
    pub(crate) async fn set_auth_token(&self, token: Option<String>) {
        *self.auth_token.write().await = token;
    }

    /// Marshal, execute, and decode one API operation.
    ///
    /// The retry policy follows the verb: reads retry on transient failures,
    /// writes never do.
    pub async fn execute<E: Endpoint>(&self, model: &E) -> Result<E::Response, SdkError> {
        let wire = build(model)?;
        let policy = RetryPolicy::for_method(wire.method);
        let (status, body) = self.send_with_retry(&wire, policy).await?;
        decode_response(status, &body)
    }

    /// Like [`execute`](Self::execute) with an explicit retry policy.
    pub async fn execute_with_policy<E: Endpoint>(
        &self,
        model: &E,
        policy: RetryPolicy,
    ) -> Result<E::Response, SdkError> {
        let wire = build(model)?;
        let (status, body) = self.send_with_retry(&wire, policy).await?;
        decode_response(status, &body)
    }

    async fn send_with_retry(
        &self,
        wire: &WireRequest,
        policy: RetryPolicy,
    ) -> Result<(u16, String), HttpError> {
        let config = match policy {
            RetryPolicy::None => return self.send_once(wire).await,
            RetryPolicy::Idempotent => RetryConfig::idempotent(),
            RetryPolicy::Custom(c) => c,
        };

        let mut last_error = None;

        for attempt in 0..=config.max_retries {
            match self.send_once(wire).await {
                Ok((status, body)) => {
                    let retryable = config.retryable_statuses.contains(&status);
                    if !retryable || attempt == config.max_retries {
                        // Non-success statuses are decoded into API errors
                        // downstream; the transport only decides on retries.
                        return Ok((status, body));
                    }
                    let delay = config.delay_for_attempt(attempt);
                    tracing::debug!(
                        attempt = attempt + 1,
                        max = config.max_retries,
                        status,
                        delay_ms = delay.as_millis() as u64,
                        "Retrying {} {}",
                        wire.method,
                        wire.url
                    );
                    futures_timer::Delay::new(delay).await;
                }
                Err(e) => {
                    // Timeouts surface as reqwest errors with is_timeout().
                    let retryable = match &e {
                        HttpError::Reqwest(re) => {
                            re.is_connect() || re.is_timeout() || re.is_request()
                        }
                        _ => false,
                    };

                    if !retryable || attempt == config.max_retries {
                        return Err(e);
                    }
                    let delay = config.delay_for_attempt(attempt);
                    tracing::debug!(
                        attempt = attempt + 1,
                        max = config.max_retries,
                        delay_ms = delay.as_millis() as u64,
                        "Retrying {} {} after transport error",
                        wire.method,
                        wire.url
                    );
                    futures_timer::Delay::new(delay).await;
                    last_error = Some(e);
                }
            }
        }

        Err(HttpError::MaxRetriesExceeded {
            attempts: config.max_retries + 1,
            last_error: last_error
                .map(|e| e.to_string())
                .unwrap_or_else(|| "unknown".to_string()),
        })
    }

    async fn send_once(&self, wire: &WireRequest) -> Result<(u16, String), HttpError> {
        let url = format!("{}{}", self.base_url, wire.url);
        let method = match wire.method {
            Method::Get => reqwest::Method::GET,
            Method::Post => reqwest::Method::POST,
            Method::Put => reqwest::Method::PUT,
            Method::Patch => reqwest::Method::PATCH,
            Method::Delete => reqwest::Method::DELETE,
        };

        let mut req = self.client.request(method, &url);

        if !wire.query.is_empty() {
            req = req.query(&wire.query);
        }
        for (name, value) in &wire.headers {
            req = req.header(name.as_str(), value);
        }
        if let Some(token) = self.auth_token.read().await.as_ref() {
            req = req.header("Authorization", format!("Bearer {}", token));
        }
        if let Some(body) = &wire.body {
            req = req.json(body);
        }

        let resp = req.send().await?;
        let status = resp.status().as_u16();
        let body = resp.text().await.unwrap_or_default();

        Ok((status, body))
    }
}

impl Clone for OandaHttp {
    fn clone(&self) -> Self {
        Self {
            base_url: self.base_url.clone(),
            client: self.client.clone(),
            auth_token: self.auth_token.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::endpoint::{field, FieldSpec};
    use crate::error::SdkError;
    use crate::shared::AccountId;
    use serde::Deserialize;
    use tokio::io::{AsyncReadExt, AsyncWriteExt};
    use tokio::net::TcpListener;

    #[derive(Debug, Deserialize)]
    struct SummaryFixture {
        balance: String,
    }

    #[derive(Default)]
    struct SummaryRequest {
        account_id: Option<AccountId>,
    }

    impl Endpoint for SummaryRequest {
        type Response = SummaryFixture;
        const METHOD: Method = Method::Get;
        const PATH: &'static str = "/v3/accounts/{accountID}/summary";
        const FIELDS: &'static [FieldSpec<Self>] = &[FieldSpec::url_segment(
            "accountID",
            |r: &Self| field::text(&r.account_id),
        )
        .required()];
    }

    fn canned(status: u16, reason: &str, body: &str) -> String {
        format!(
            "HTTP/1.1 {status} {reason}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
            body.len()
        )
    }

    /// Serve the given raw responses, one connection each, then stop.
    async fn serve(responses: Vec<String>) -> String {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            for response in responses {
                let (mut socket, _) = listener.accept().await.unwrap();
                let mut buf = [0u8; 4096];
                let _ = socket.read(&mut buf).await;
                socket.write_all(response.as_bytes()).await.unwrap();
                let _ = socket.shutdown().await;
            }
        });
        format!("http://{addr}")
    }

    fn fast_retry(max_retries: u32) -> RetryPolicy {
        RetryPolicy::Custom(RetryConfig {
            max_retries,
            initial_delay: Duration::from_millis(5),
            jitter: false,
            ..RetryConfig::idempotent()
        })
    }

    #[tokio::test]
    async fn test_execute_builds_sends_and_decodes() {
        let base = serve(vec![canned(200, "OK", r#"{"balance":"43650.78835"}"#)]).await;
        let http = OandaHttp::new(&base, Some("test-token".to_string()));

        let request = SummaryRequest {
            account_id: Some("001-001-1234567-001".into()),
        };
        let response = http.execute(&request).await.unwrap();
        assert_eq!(response.balance, "43650.78835");
    }

    #[tokio::test]
    async fn test_build_failure_surfaces_before_any_network_io() {
        // No listener at all: a missing required field must fail first.
        let http = OandaHttp::new("http://127.0.0.1:1", None);

        let err = http.execute(&SummaryRequest::default()).await.unwrap_err();
        assert!(matches!(err, SdkError::Request(_)));
    }

    #[tokio::test]
    async fn test_retryable_status_is_retried_until_success() {
        let base = serve(vec![
            canned(503, "Service Unavailable", ""),
            canned(200, "OK", r#"{"balance":"42"}"#),
        ])
        .await;
        let http = OandaHttp::new(&base, None);

        let request = SummaryRequest {
            account_id: Some("001-001-1234567-001".into()),
        };
        let response = http
            .execute_with_policy(&request, fast_retry(2))
            .await
            .unwrap();
        assert_eq!(response.balance, "42");
    }

    #[tokio::test]
    async fn test_exhausted_retries_surface_the_final_status() {
        let base = serve(vec![
            canned(503, "Service Unavailable", "busy"),
            canned(503, "Service Unavailable", "still busy"),
        ])
        .await;
        let http = OandaHttp::new(&base, None);

        let request = SummaryRequest {
            account_id: Some("001-001-1234567-001".into()),
        };
        let err = http
            .execute_with_policy(&request, fast_retry(1))
            .await
            .unwrap_err();
        match err {
            SdkError::Api { code, message } => {
                assert_eq!(code, "HTTP_503");
                assert_eq!(message, "still busy");
            }
            other => panic!("expected Api error, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_non_retryable_status_is_not_retried() {
        // Only one canned response: a second request would hang the test.
        let base = serve(vec![canned(
            400,
            "Bad Request",
            r#"{"errorCode":"INSUFFICIENT_MARGIN","errorMessage":"Insufficient margin"}"#,
        )])
        .await;
        let http = OandaHttp::new(&base, None);

        let request = SummaryRequest {
            account_id: Some("001-001-1234567-001".into()),
        };
        let err = http
            .execute_with_policy(&request, fast_retry(3))
            .await
            .unwrap_err();
        match err {
            SdkError::Api { code, .. } => assert_eq!(code, "INSUFFICIENT_MARGIN"),
            other => panic!("expected Api error, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_connect_failure_is_retried_then_reported() {
        // Nothing listens on this port: every attempt is a transport error.
        let http = OandaHttp::new("http://127.0.0.1:1", None);

        let request = SummaryRequest {
            account_id: Some("001-001-1234567-001".into()),
        };
        let err = http
            .execute_with_policy(&request, fast_retry(1))
            .await
            .unwrap_err();
        assert!(matches!(err, SdkError::Http(HttpError::Reqwest(_))));
    }
}
