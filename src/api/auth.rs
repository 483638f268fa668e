// BookGoblin Client - Book Tracking Client Library
// Copyright (C) 2025 Henning Berge
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.

//! Login and registration
//!
//! # API Endpoints
//! - `POST /login` - credentials in, `{ "token": ..., "user": ... }` out
//! - `POST /register` - creates the account; no token is issued
//!
//! `login` and `register` are the raw wrappers. `sign_in` additionally writes
//! the returned token into a [`SessionStore`], which is what the navigation
//! guard later checks. `sign_out` only clears the store; the backend keeps no
//! session to end.
//!
//! # Security Considerations
//! Tokens and passwords are never logged.

use crate::api::client::ApiClient;
use crate::api::transport::{ApiRequest, ApiResponse};
use crate::error::Result;
use crate::session::{SessionStore, TOKEN_KEY};
use serde::Serialize;

impl ApiClient {
    /// `POST /login`
    pub async fn login<C: Serialize + ?Sized>(&self, credentials: &C) -> Result<ApiResponse> {
        self.execute_anonymous(ApiRequest::post("/login").json(credentials)?).await
    }

    /// `POST /register`
    pub async fn register<R: Serialize + ?Sized>(&self, registration: &R) -> Result<ApiResponse> {
        self.execute_anonymous(ApiRequest::post("/register").json(registration)?).await
    }

    /// Log in and persist the returned token.
    ///
    /// The response is returned unmodified either way. If the body carries no
    /// string `token` field nothing is stored.
    ///
    /// # Errors
    /// Returns the login failure, or a session store error if the token could
    /// not be written.
    pub async fn sign_in<C, S>(&self, credentials: &C, store: &S) -> Result<ApiResponse>
    where
        C: Serialize + ?Sized,
        S: SessionStore + ?Sized,
    {
        let response = self.login(credentials).await?;
        match token_from(&response) {
            Some(token) => {
                store.store_token(token)?;
                tracing::info!("signed in, session token stored");
            }
            None => tracing::warn!("login response carried no token, session unchanged"),
        }
        Ok(response)
    }

    /// Register a new account. Callers proceed to [`sign_in`](Self::sign_in).
    pub async fn sign_up<R: Serialize + ?Sized>(&self, registration: &R) -> Result<ApiResponse> {
        self.register(registration).await
    }

    /// Forget the stored token. No request is sent.
    pub fn sign_out<S: SessionStore + ?Sized>(&self, store: &S) -> Result<()> {
        store.clear_token()?;
        tracing::info!("signed out");
        Ok(())
    }
}

/// The `token` field of a login response body
pub fn token_from(response: &ApiResponse) -> Option<&str> {
    response.body.get(TOKEN_KEY).and_then(|t| t.as_str())
}
