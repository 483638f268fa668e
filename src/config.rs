// BookGoblin Client - Book Tracking Client Library
// Copyright (C) 2025 Henning Berge
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.

//! Client configuration
//!
//! One base origin and one set of default headers are shared by every API
//! wrapper, including the login/registration endpoints.
//!
//! # Environment
//! - `BOOKGOBLIN_API_URL`: backend origin (default `http://localhost:9000`)
//! - `BOOKGOBLIN_TIMEOUT_SECS`: request timeout (default 30)
//! - `BOOKGOBLIN_USER_AGENT`: User-Agent header
//! - `BOOKGOBLIN_ATTACH_CREDENTIALS`: `true`/`false` (default `true`)

use crate::error::{BookGoblinError, Result};
use std::time::Duration;
use url::Url;

/// Backend origin used when nothing else is configured
pub const DEFAULT_BASE_URL: &str = "http://localhost:9000";

/// Default request timeout in seconds
const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Default User-Agent header
const DEFAULT_USER_AGENT: &str = concat!("bookgoblin-client/", env!("CARGO_PKG_VERSION"));

/// Configuration for ApiClient
/// Provides a builder pattern for client customization
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    /// Backend origin, without trailing slash
    pub base_url: String,
    pub timeout: Duration,
    pub user_agent: String,
    /// Send the stored session token as a bearer credential on resource requests
    pub attach_credentials: bool,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            user_agent: DEFAULT_USER_AGENT.to_string(),
            attach_credentials: true,
        }
    }
}

impl ClientConfig {
    pub fn builder() -> ClientConfigBuilder {
        ClientConfigBuilder::new()
    }

    /// Build config from process environment variables.
    ///
    /// # Errors
    /// Returns `InvalidConfiguration` if `BOOKGOBLIN_API_URL` is set but is not
    /// an absolute http(s) URL.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build config from an arbitrary key lookup.
    ///
    /// Unparsable timeout and flag values fall back to their defaults.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut builder = ClientConfigBuilder::new();

        if let Some(url) = lookup("BOOKGOBLIN_API_URL") {
            builder = builder.base_url(url);
        }
        if let Some(secs) = lookup("BOOKGOBLIN_TIMEOUT_SECS").and_then(|v| v.trim().parse::<u64>().ok()) {
            builder = builder.timeout(Duration::from_secs(secs));
        }
        if let Some(agent) = lookup("BOOKGOBLIN_USER_AGENT") {
            builder = builder.user_agent(agent);
        }
        if let Some(flag) = lookup("BOOKGOBLIN_ATTACH_CREDENTIALS").and_then(|v| parse_flag(&v)) {
            builder = builder.attach_credentials(flag);
        }

        let config = builder.build();
        config.validate()?;
        Ok(config)
    }

    /// Check that the base URL is an absolute http(s) origin.
    pub fn validate(&self) -> Result<()> {
        let url = Url::parse(&self.base_url).map_err(|e| {
            BookGoblinError::InvalidConfiguration(format!("base URL '{}': {}", self.base_url, e))
        })?;
        match url.scheme() {
            "http" | "https" => Ok(()),
            other => Err(BookGoblinError::InvalidConfiguration(format!(
                "unsupported base URL scheme '{}'",
                other
            ))),
        }
    }
}

fn parse_flag(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

/// Builder for ClientConfig
#[derive(Debug, Default)]
pub struct ClientConfigBuilder {
    config: ClientConfig,
}

impl ClientConfigBuilder {
    pub fn new() -> Self {
        Self {
            config: ClientConfig::default(),
        }
    }

    pub fn base_url<S: Into<String>>(mut self, base_url: S) -> Self {
        self.config.base_url = base_url.into().trim_end_matches('/').to_string();
        self
    }

    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.config.timeout = timeout;
        self
    }

    pub fn user_agent<S: Into<String>>(mut self, user_agent: S) -> Self {
        self.config.user_agent = user_agent.into();
        self
    }

    pub fn attach_credentials(mut self, attach: bool) -> Self {
        self.config.attach_credentials = attach;
        self
    }

    pub fn build(self) -> ClientConfig {
        self.config
    }
}
