// BookGoblin Client - Book Tracking Client Library
// Copyright (C) 2025 Henning Berge
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.

//! HTTP client for the BookGoblin backend
//!
//! # Architecture
//!
//! `ApiClient` owns:
//! - a [`Transport`] (reqwest by default) bound to one base URL with
//!   consistent default headers
//! - a [`SessionProvider`] it reads the session token from
//! - the [`ClientConfig`] it was built with
//!
//! Each resource module (`books`, `tags`, ...) adds methods to `ApiClient`
//! that issue exactly one request and return the transport's outcome
//! unmodified. There is no retry, caching or deduplication here.
//!
//! # Credentials
//! When `attach_credentials` is on and the session holds a token, resource
//! requests carry `Authorization: Bearer <token>`. Login and registration
//! requests never do.

use crate::api::transport::{ApiRequest, ApiResponse, HttpTransport, Transport};
use crate::config::ClientConfig;
use crate::error::Result;
use crate::session::{NoSession, SessionProvider};
use std::fmt;
use std::sync::Arc;

/// Main HTTP client for the BookGoblin backend
///
/// # Example
/// ```rust,no_run
/// use bookgoblin_client::api::ApiClient;
/// use bookgoblin_client::config::ClientConfig;
/// use bookgoblin_client::session::MemorySessionStore;
/// use std::sync::Arc;
///
/// # async fn example() -> bookgoblin_client::error::Result<()> {
/// let session = Arc::new(MemorySessionStore::with_token("jwt"));
/// let client = ApiClient::with_session(ClientConfig::default(), session)?;
///
/// let response = client.get_book_by_id(42).await?;
/// println!("{}", response.body);
/// # Ok(())
/// # }
/// ```
#[derive(Clone)]
pub struct ApiClient {
    transport: Arc<dyn Transport>,
    session: Arc<dyn SessionProvider>,
    config: ClientConfig,
}

impl fmt::Debug for ApiClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ApiClient")
            .field("config", &self.config)
            .field("has_token", &self.session.has_token())
            .finish_non_exhaustive()
    }
}

impl ApiClient {
    /// Create a client with no session attached
    ///
    /// # Errors
    /// Returns error if the base URL is invalid or the HTTP client cannot be built
    pub fn new(config: ClientConfig) -> Result<Self> {
        Self::with_session(config, Arc::new(NoSession))
    }

    /// Create a client that reads its credential from `session`
    ///
    /// # Errors
    /// Returns error if the base URL is invalid or the HTTP client cannot be built
    pub fn with_session(config: ClientConfig, session: Arc<dyn SessionProvider>) -> Result<Self> {
        let transport = HttpTransport::new(&config)?;
        Ok(Self::with_transport(Arc::new(transport), session, config))
    }

    /// Create a client over an arbitrary transport
    pub fn with_transport(
        transport: Arc<dyn Transport>,
        session: Arc<dyn SessionProvider>,
        config: ClientConfig,
    ) -> Self {
        Self {
            transport,
            session,
            config,
        }
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    pub fn base_url(&self) -> &str {
        &self.config.base_url
    }

    pub fn session(&self) -> &Arc<dyn SessionProvider> {
        &self.session
    }

    /// Send a resource request, attaching the session token when configured.
    pub(crate) async fn execute(&self, mut request: ApiRequest) -> Result<ApiResponse> {
        if self.config.attach_credentials {
            request.bearer = self.session.token().filter(|t| !t.is_empty());
        }
        self.dispatch(request).await
    }

    /// Send a request that must never carry a credential (login, register).
    pub(crate) async fn execute_anonymous(&self, mut request: ApiRequest) -> Result<ApiResponse> {
        request.bearer = None;
        self.dispatch(request).await
    }

    async fn dispatch(&self, request: ApiRequest) -> Result<ApiResponse> {
        tracing::debug!(
            method = %request.method,
            endpoint = %request.target(),
            authenticated = request.bearer.is_some(),
            "sending request"
        );
        let result = self.transport.send(request).await;
        if let Ok(ref response) = result {
            tracing::trace!(status = response.status, "response received");
        }
        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::testing::RecordingTransport;
    use crate::error::BookGoblinError;
    use crate::session::MemorySessionStore;
    use reqwest::Method;
    use serde_json::json;

    fn client_with(session: Arc<dyn SessionProvider>, attach: bool) -> (ApiClient, Arc<RecordingTransport>) {
        let transport = Arc::new(RecordingTransport::new());
        let config = ClientConfig::builder().attach_credentials(attach).build();
        let client = ApiClient::with_transport(transport.clone(), session, config);
        (client, transport)
    }

    #[test]
    fn test_client_creation_rejects_bad_base_url() {
        let config = ClientConfig::builder().base_url("nonsense").build();
        let result = ApiClient::new(config);
        assert!(matches!(result, Err(BookGoblinError::InvalidConfiguration(_))));
    }

    #[tokio::test]
    async fn test_execute_attaches_bearer_when_token_present() {
        let (client, transport) = client_with(Arc::new(MemorySessionStore::with_token("abc")), true);
        client.execute(ApiRequest::get("/books")).await.unwrap();

        let sent = transport.single();
        assert_eq!(sent.bearer.as_deref(), Some("abc"));
    }

    #[tokio::test]
    async fn test_execute_without_token_sends_no_bearer() {
        let (client, transport) = client_with(Arc::new(MemorySessionStore::with_token("")), true);
        client.execute(ApiRequest::get("/books")).await.unwrap();
        assert!(transport.single().bearer.is_none());
    }

    #[tokio::test]
    async fn test_attach_disabled_reproduces_bare_requests() {
        let (client, transport) = client_with(Arc::new(MemorySessionStore::with_token("abc")), false);
        client.execute(ApiRequest::get("/books")).await.unwrap();
        assert!(transport.single().bearer.is_none());
    }

    #[tokio::test]
    async fn test_anonymous_never_carries_token() {
        let (client, transport) = client_with(Arc::new(MemorySessionStore::with_token("abc")), true);
        client
            .execute_anonymous(ApiRequest::post("/login").json(&json!({})).unwrap())
            .await
            .unwrap();

        let sent = transport.single();
        assert_eq!(sent.method, Method::POST);
        assert!(sent.bearer.is_none());
    }

    #[tokio::test]
    async fn test_transport_error_passes_through() {
        let (client, transport) = client_with(Arc::new(NoSession), true);
        transport.respond_with(Err(BookGoblinError::api_failed(
            "Request failed with status code 500",
            Some(500),
            Some("/books".to_string()),
            Some("boom".to_string()),
        )));

        let err = client.execute(ApiRequest::get("/books")).await.unwrap_err();
        assert_eq!(err.status_code(), Some(500));
        assert_eq!(transport.requests().len(), 1);
    }
}
