// BookGoblin Client - Book Tracking Client Library
// Copyright (C) 2025 Henning Berge
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.

//! Request/response types and the HTTP transport
//!
//! [`Transport`] is the single seam between the API wrappers and the network.
//! [`HttpTransport`] is the reqwest-backed implementation; tests substitute a
//! recording fake.
//!
//! A transport resolves with the backend's body untouched on 2xx and rejects
//! with [`BookGoblinError::ApiRequestFailed`] on any other status, carrying
//! the raw body. Bodies that are not JSON are passed through as a JSON string.

use crate::config::ClientConfig;
use crate::error::{BookGoblinError, Result};
use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, CONTENT_TYPE, USER_AGENT};
use reqwest::{Client, Method};
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;
use std::time::Duration;

// ============================================================================
// REQUEST / RESPONSE
// ============================================================================

/// One HTTP call, described independently of any HTTP library
#[derive(Debug, Clone, PartialEq)]
pub struct ApiRequest {
    pub method: Method,
    /// Path (and, for pre-encoded queries, query string) relative to the base URL
    pub path: String,
    /// Query pairs appended with form encoding
    pub query: Vec<(String, String)>,
    pub body: Option<Value>,
    /// Bearer credential, filled in by the client when configured
    pub bearer: Option<String>,
}

impl ApiRequest {
    pub fn new<P: Into<String>>(method: Method, path: P) -> Self {
        Self {
            method,
            path: path.into(),
            query: Vec::new(),
            body: None,
            bearer: None,
        }
    }

    pub fn get<P: Into<String>>(path: P) -> Self {
        Self::new(Method::GET, path)
    }

    pub fn post<P: Into<String>>(path: P) -> Self {
        Self::new(Method::POST, path)
    }

    pub fn put<P: Into<String>>(path: P) -> Self {
        Self::new(Method::PUT, path)
    }

    pub fn delete<P: Into<String>>(path: P) -> Self {
        Self::new(Method::DELETE, path)
    }

    pub fn query<K: Into<String>, V: Into<String>>(mut self, key: K, value: V) -> Self {
        self.query.push((key.into(), value.into()));
        self
    }

    /// Attach a JSON body. The payload is serialized as-is.
    pub fn json<B: Serialize + ?Sized>(mut self, body: &B) -> Result<Self> {
        self.body = Some(serde_json::to_value(body)?);
        Ok(self)
    }

    /// Path plus encoded query string, as sent on the wire
    pub fn target(&self) -> String {
        if self.query.is_empty() {
            return self.path.clone();
        }
        let encoded = url::form_urlencoded::Serializer::new(String::new())
            .extend_pairs(self.query.iter())
            .finish();
        let separator = if self.path.contains('?') { '&' } else { '?' };
        format!("{}{}{}", self.path, separator, encoded)
    }
}

/// A successful backend response
#[derive(Debug, Clone, PartialEq)]
pub struct ApiResponse {
    pub status: u16,
    /// Body exactly as returned; `Null` when the body was empty
    pub body: Value,
}

impl ApiResponse {
    pub fn new(status: u16, body: Value) -> Self {
        Self { status, body }
    }

    /// Decode the body into a typed model
    ///
    /// # Errors
    /// Returns `InvalidApiResponse` if the body does not match `T`.
    pub fn json<T: DeserializeOwned>(&self) -> Result<T> {
        serde_json::from_value(self.body.clone()).map_err(|e| BookGoblinError::InvalidApiResponse {
            message: format!("Parse error: {}", e),
            response_body: Some(snippet(&self.body.to_string())),
        })
    }

    pub fn into_body(self) -> Value {
        self.body
    }
}

fn snippet(text: &str) -> String {
    const MAX: usize = 800;
    if text.len() <= MAX {
        return text.to_string();
    }
    let mut end = MAX;
    while !text.is_char_boundary(end) {
        end -= 1;
    }
    format!("{}...", &text[..end])
}

/// Parse a response body the way a browser HTTP client does: JSON when it
/// parses, the raw text otherwise, `Null` when empty.
pub fn parse_body(text: &str) -> Value {
    if text.trim().is_empty() {
        return Value::Null;
    }
    serde_json::from_str(text).unwrap_or_else(|_| Value::String(text.to_string()))
}

// ============================================================================
// TRANSPORT
// ============================================================================

/// Sends one request and reports the outcome unmodified.
#[async_trait]
pub trait Transport: Send + Sync {
    /// # Errors
    ///
    /// `ApiRequestFailed` for non-2xx statuses, `NetworkError` when the backend
    /// could not be reached.
    async fn send(&self, request: ApiRequest) -> Result<ApiResponse>;
}

/// reqwest-backed transport bound to one base URL
#[derive(Debug, Clone)]
pub struct HttpTransport {
    client: Client,
    base_url: String,
}

impl HttpTransport {
    /// Build the HTTP client with the configured timeout and default headers.
    ///
    /// # Errors
    /// Returns error if the configuration is invalid or the client cannot be built.
    pub fn new(config: &ClientConfig) -> Result<Self> {
        config.validate()?;

        let mut headers = HeaderMap::new();
        headers.insert(
            USER_AGENT,
            HeaderValue::from_str(&config.user_agent)
                .map_err(|e| BookGoblinError::invalid_input(format!("Invalid user agent: {}", e)))?,
        );
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));

        let client = Client::builder()
            .timeout(config.timeout)
            .default_headers(headers)
            .pool_idle_timeout(Duration::from_secs(90))
            .build()?;

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Absolute URL for a request
    pub fn url_for(&self, request: &ApiRequest) -> String {
        format!("{}{}", self.base_url, request.target())
    }
}

#[async_trait]
impl Transport for HttpTransport {
    async fn send(&self, request: ApiRequest) -> Result<ApiResponse> {
        let endpoint = request.target();
        let mut builder = self.client.request(request.method.clone(), self.url_for(&request));

        if let Some(ref token) = request.bearer {
            builder = builder.bearer_auth(token);
        }
        if let Some(ref body) = request.body {
            builder = builder.json(body);
        }

        let response = builder.send().await.map_err(|e| {
            BookGoblinError::network_error(
                format!("Network request failed: {}", e),
                e.is_timeout() || e.is_connect(),
            )
        })?;

        let status = response.status();
        let text = response.text().await.map_err(|e| {
            BookGoblinError::network_error(format!("Failed to read response body: {}", e), e.is_timeout())
        })?;

        if status.is_success() {
            Ok(ApiResponse::new(status.as_u16(), parse_body(&text)))
        } else {
            Err(BookGoblinError::api_failed(
                format!("Request failed with status code {}", status.as_u16()),
                Some(status.as_u16()),
                Some(endpoint),
                Some(text),
            ))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use tokio::io::{AsyncReadExt, AsyncWriteExt};
    use tokio::net::TcpListener;
    use tokio::sync::oneshot;

    /// Serve exactly one canned HTTP response and hand back the raw request.
    async fn serve_once(status_line: &'static str, body: &'static str) -> (String, oneshot::Receiver<String>) {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        let (tx, rx) = oneshot::channel();

        tokio::spawn(async move {
            let (mut socket, _) = listener.accept().await.unwrap();
            let mut raw = Vec::new();
            let mut buf = [0u8; 4096];
            loop {
                let n = socket.read(&mut buf).await.unwrap();
                if n == 0 {
                    break;
                }
                raw.extend_from_slice(&buf[..n]);
                let text = String::from_utf8_lossy(&raw).to_string();
                if let Some(head_end) = text.find("\r\n\r\n") {
                    let content_length = text[..head_end]
                        .lines()
                        .find_map(|l| {
                            let lower = l.to_ascii_lowercase();
                            lower
                                .strip_prefix("content-length:")
                                .map(|v| v.trim().parse::<usize>().unwrap_or(0))
                        })
                        .unwrap_or(0);
                    if raw.len() >= head_end + 4 + content_length {
                        break;
                    }
                }
            }
            let response = format!(
                "{}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
                status_line,
                body.len(),
                body
            );
            socket.write_all(response.as_bytes()).await.unwrap();
            socket.shutdown().await.ok();
            let _ = tx.send(String::from_utf8_lossy(&raw).to_string());
        });

        (format!("http://{}", addr), rx)
    }

    fn transport_for(base_url: &str) -> HttpTransport {
        let config = ClientConfig::builder().base_url(base_url).build();
        HttpTransport::new(&config).unwrap()
    }

    #[test]
    fn test_target_without_query() {
        assert_eq!(ApiRequest::get("/books/42").target(), "/books/42");
    }

    #[test]
    fn test_target_form_encodes_query_pairs() {
        let request = ApiRequest::get("/books/search")
            .query("title", "war & peace")
            .query("author", "Tolstoy");
        assert_eq!(request.target(), "/books/search?title=war+%26+peace&author=Tolstoy");
    }

    #[test]
    fn test_target_appends_to_existing_query() {
        let request = ApiRequest::get("/x?a=1").query("b", "2");
        assert_eq!(request.target(), "/x?a=1&b=2");
    }

    #[test]
    fn test_parse_body() {
        assert_eq!(parse_body(""), Value::Null);
        assert_eq!(parse_body("{\"a\":1}"), json!({"a": 1}));
        assert_eq!(parse_body("plain text"), json!("plain text"));
    }

    #[test]
    fn test_response_json_decode_failure() {
        let response = ApiResponse::new(200, json!({"name": 5}));
        let result: Result<crate::models::Tag> = response.json();
        assert!(matches!(result, Err(BookGoblinError::InvalidApiResponse { .. })));
    }

    #[test]
    fn test_url_for_joins_base() {
        let transport = transport_for("http://localhost:9000/");
        assert_eq!(transport.base_url(), "http://localhost:9000");
        assert_eq!(
            transport.url_for(&ApiRequest::delete("/tags/5/book/9")),
            "http://localhost:9000/tags/5/book/9"
        );
    }

    #[tokio::test]
    async fn test_success_returns_body_unmodified() {
        let (base, raw) = serve_once("HTTP/1.1 200 OK", r#"{"bookId":42,"title":"Dune","extra":[1,2]}"#).await;
        let transport = transport_for(&base);

        let mut request = ApiRequest::get("/books/42");
        request.bearer = Some("tok".to_string());
        let response = transport.send(request).await.unwrap();

        assert_eq!(response.status, 200);
        assert_eq!(response.body, json!({"bookId": 42, "title": "Dune", "extra": [1, 2]}));

        let raw = raw.await.unwrap();
        assert!(raw.starts_with("GET /books/42 HTTP/1.1\r\n"));
        let lower = raw.to_ascii_lowercase();
        assert!(lower.contains("authorization: bearer tok"));
        assert!(lower.contains("accept: application/json"));
    }

    #[tokio::test]
    async fn test_post_sends_json_body() {
        let (base, raw) = serve_once("HTTP/1.1 201 Created", r#"{"tagId":3,"name":"scifi"}"#).await;
        let transport = transport_for(&base);

        let request = ApiRequest::post("/tags").json(&json!({"name": "scifi"})).unwrap();
        let response = transport.send(request).await.unwrap();
        assert_eq!(response.status, 201);

        let raw = raw.await.unwrap();
        assert!(raw.starts_with("POST /tags HTTP/1.1\r\n"));
        assert!(raw.ends_with(r#"{"name":"scifi"}"#));
        assert!(!raw.to_ascii_lowercase().contains("authorization:"));
    }

    #[tokio::test]
    async fn test_error_status_rejects_with_raw_body() {
        let (base, _raw) = serve_once("HTTP/1.1 404 Not Found", r#"{"message":"Book not found"}"#).await;
        let transport = transport_for(&base);

        let err = transport.send(ApiRequest::get("/books/999")).await.unwrap_err();
        match err {
            BookGoblinError::ApiRequestFailed {
                status_code,
                endpoint,
                body,
                ..
            } => {
                assert_eq!(status_code, Some(404));
                assert_eq!(endpoint.as_deref(), Some("/books/999"));
                assert_eq!(body.as_deref(), Some(r#"{"message":"Book not found"}"#));
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_unreachable_backend_is_network_error() {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);

        let transport = transport_for(&format!("http://{}", addr));
        let err = transport.send(ApiRequest::get("/books")).await.unwrap_err();
        assert!(matches!(err, BookGoblinError::NetworkError { .. }));
    }
}
