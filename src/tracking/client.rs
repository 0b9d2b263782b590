// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! JSON-RPC 1.1 client for the User and Job State service.

use async_trait::async_trait;
use reqwest::{header::AUTHORIZATION, Client, Url};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;

use crate::errors::TrackingError;
use crate::tracking::JobStatus;
use crate::traits::{JobTracker, TrackerFactory};

/// Fully qualified RPC method that marks a job terminal
pub const COMPLETE_JOB_METHOD: &str = "UserAndJobState.complete_job";

/// Upper bound on one report round trip, connect through body read
pub const DEFAULT_REQUEST_TIMEOUT: Duration = Duration::from_secs(60);

const JSON_RPC_VERSION: &str = "1.1";

static NEXT_REQUEST_ID: AtomicU64 = AtomicU64::new(1);

#[derive(Debug, Serialize)]
struct RpcRequest {
    version: &'static str,
    method: &'static str,
    id: String,
    params: Vec<Value>,
}

#[derive(Debug, Deserialize)]
struct RpcReply {
    #[serde(default)]
    error: Option<RpcErrorBody>,
}

#[derive(Debug, Deserialize)]
struct RpcErrorBody {
    #[serde(default)]
    name: String,
    #[serde(default)]
    message: String,
}

/// One-shot client bound to a service URL and token.
///
/// A fresh HTTP client is created per instance; nothing is pooled across jobs.
pub struct UserAndJobStateClient {
    client: Client,
    url: Url,
    token: String,
}

impl UserAndJobStateClient {
    pub fn new(url: &str, token: &str) -> Result<Self, TrackingError> {
        Self::with_timeout(url, token, DEFAULT_REQUEST_TIMEOUT)
    }

    pub fn with_timeout(url: &str, token: &str, timeout: Duration) -> Result<Self, TrackingError> {
        let url = Url::parse(url).map_err(|e| TrackingError::InvalidUrl {
            url: url.to_string(),
            reason: e.to_string(),
        })?;
        let client = Client::builder().timeout(timeout).build()?;
        Ok(Self {
            client,
            url,
            token: token.to_string(),
        })
    }

    pub fn url(&self) -> &Url {
        &self.url
    }

    async fn call(&self, method: &'static str, params: Vec<Value>) -> Result<(), TrackingError> {
        let request = RpcRequest {
            version: JSON_RPC_VERSION,
            method,
            id: NEXT_REQUEST_ID.fetch_add(1, Ordering::Relaxed).to_string(),
            params,
        };

        let response = self
            .client
            .post(self.url.clone())
            .header(AUTHORIZATION, self.token.as_str())
            .json(&request)
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;

        // The service reports failures as a JSON-RPC error object, usually with HTTP 500.
        if let Ok(RpcReply { error: Some(error) }) = serde_json::from_str::<RpcReply>(&body) {
            return Err(TrackingError::Rpc {
                method: method.to_string(),
                name: error.name,
                message: error.message,
            });
        }

        if !status.is_success() {
            return Err(TrackingError::Status {
                status: status.as_u16(),
                body,
            });
        }

        Ok(())
    }
}

#[async_trait]
impl JobTracker for UserAndJobStateClient {
    async fn complete_job(
        &self,
        job_id: &str,
        token: &str,
        status: JobStatus,
        message: &str,
        results: &Value,
    ) -> Result<(), TrackingError> {
        let params = vec![
            Value::from(job_id),
            Value::from(token),
            Value::from(status.as_str()),
            Value::from(message),
            results.clone(),
        ];
        self.call(COMPLETE_JOB_METHOD, params).await
    }
}

/// Opens a [`UserAndJobStateClient`] per report
pub struct UserAndJobStateFactory;

impl TrackerFactory for UserAndJobStateFactory {
    fn connect(&self, url: &str, token: &str) -> Result<Box<dyn JobTracker>, TrackingError> {
        Ok(Box::new(UserAndJobStateClient::new(url, token)?))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use wiremock::matchers::{body_partial_json, header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[test]
    fn rejects_an_unparseable_url() {
        let err = UserAndJobStateClient::new("not a url", "t").err().unwrap();
        assert!(matches!(err, TrackingError::InvalidUrl { .. }));
    }

    #[tokio::test]
    async fn complete_job_sends_positional_params() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/services/ujs"))
            .and(header("authorization", "t"))
            .and(body_partial_json(json!({
                "version": "1.1",
                "method": "UserAndJobState.complete_job",
                "params": ["123", "t", "failed", "boom", {}]
            })))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "version": "1.1",
                "result": []
            })))
            .expect(1)
            .mount(&server)
            .await;

        let client = UserAndJobStateClient::new(&format!("{}/services/ujs", server.uri()), "t").unwrap();
        client
            .complete_job("123", "t", JobStatus::Failed, "boom", &json!({}))
            .await
            .unwrap();
    }

    #[tokio::test]
    async fn rpc_error_body_is_decoded() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(500).set_body_json(json!({
                "version": "1.1",
                "error": {
                    "name": "JSONRPCError",
                    "code": -32500,
                    "message": "There is no job 123 for user someone",
                    "error": "Traceback ..."
                }
            })))
            .mount(&server)
            .await;

        let client = UserAndJobStateClient::new(&server.uri(), "t").unwrap();
        let err = client
            .complete_job("123", "t", JobStatus::Failed, "boom", &json!({}))
            .await
            .unwrap_err();

        match err {
            TrackingError::Rpc { method, name, message } => {
                assert_eq!(method, COMPLETE_JOB_METHOD);
                assert_eq!(name, "JSONRPCError");
                assert!(message.contains("no job 123"), "unexpected message: {message}");
            }
            other => panic!("Expected Rpc error, got: {other:?}"),
        }
    }

    #[tokio::test]
    async fn plain_server_error_keeps_status_and_body() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(502).set_body_string("Bad Gateway"))
            .mount(&server)
            .await;

        let client = UserAndJobStateClient::new(&server.uri(), "t").unwrap();
        let err = client
            .complete_job("123", "t", JobStatus::Failed, "boom", &json!({}))
            .await
            .unwrap_err();

        match err {
            TrackingError::Status { status, body } => {
                assert_eq!(status, 502);
                assert_eq!(body, "Bad Gateway");
            }
            other => panic!("Expected Status error, got: {other:?}"),
        }
    }

    #[tokio::test]
    async fn unresponsive_service_times_out() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(200).set_delay(Duration::from_secs(5)))
            .mount(&server)
            .await;

        let client =
            UserAndJobStateClient::with_timeout(&server.uri(), "t", Duration::from_millis(200)).unwrap();
        let err = client
            .complete_job("123", "t", JobStatus::Failed, "boom", &json!({}))
            .await
            .unwrap_err();

        match err {
            TrackingError::Http(source) => assert!(source.is_timeout(), "not a timeout: {source}"),
            other => panic!("Expected Http error, got: {other:?}"),
        }
    }

    #[tokio::test]
    async fn truncated_success_body_is_an_error() {
        use tokio::io::{AsyncReadExt, AsyncWriteExt};

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        let server = tokio::spawn(async move {
            let (mut socket, _) = listener.accept().await.unwrap();
            let mut request = vec![0u8; 8192];
            let _ = socket.read(&mut request).await.unwrap();
            socket
                .write_all(b"HTTP/1.1 200 OK\r\nContent-Length: 100\r\n\r\n{\"version\"")
                .await
                .unwrap();
            socket.shutdown().await.unwrap();
        });

        let client = UserAndJobStateClient::new(&format!("http://{addr}"), "t").unwrap();
        let err = client
            .complete_job("123", "t", JobStatus::Failed, "boom", &json!({}))
            .await
            .unwrap_err();

        assert!(matches!(err, TrackingError::Http(_)), "got: {err:?}");
        server.await.unwrap();
    }
}
