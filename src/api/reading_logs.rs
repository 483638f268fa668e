// BookGoblin Client - Book Tracking Client Library
// Copyright (C) 2025 Henning Berge
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.

//! Reading logs (one entry per read-through of a user-book)
//!
//! # API Endpoints
//! - `GET /reading-logs/user-book/{userBookId}`
//! - `GET /reading-logs/{id}`
//! - `POST /reading-logs`
//! - `PUT /reading-logs/{id}`
//! - `DELETE /reading-logs/{id}`

use crate::api::client::ApiClient;
use crate::api::transport::{ApiRequest, ApiResponse};
use crate::error::Result;
use serde::Serialize;

impl ApiClient {
    /// Reading sessions for one shelf entry
    ///
    /// Makes a GET request to `/reading-logs/user-book/{user_book_id}`
    ///
    /// # Errors
    /// Returns error if the request fails or the backend answers with a non-2xx status
    pub async fn get_reading_logs_by_user_book(&self, user_book_id: i64) -> Result<ApiResponse> {
        self.execute(ApiRequest::get(format!("/reading-logs/user-book/{user_book_id}")))
            .await
    }

    /// Fetch one reading log (GET `/reading-logs/{id}`)
    ///
    /// # Errors
    /// Returns error if the request fails or the backend answers with a non-2xx status
    pub async fn get_reading_log_by_id(&self, id: i64) -> Result<ApiResponse> {
        self.execute(ApiRequest::get(format!("/reading-logs/{id}"))).await
    }

    /// Record a reading session (POST `/reading-logs`)
    ///
    /// # Errors
    /// Returns error if the payload cannot be serialized, the request fails,
    /// or the backend answers with a non-2xx status
    pub async fn create_reading_log<L: Serialize + ?Sized>(&self, reading_log: &L) -> Result<ApiResponse> {
        self.execute(ApiRequest::post("/reading-logs").json(reading_log)?).await
    }

    /// Update a reading log (PUT `/reading-logs/{id}`)
    ///
    /// # Errors
    /// Returns error if the payload cannot be serialized, the request fails,
    /// or the backend answers with a non-2xx status
    pub async fn update_reading_log<L: Serialize + ?Sized>(&self, id: i64, reading_log: &L) -> Result<ApiResponse> {
        self.execute(ApiRequest::put(format!("/reading-logs/{id}")).json(reading_log)?)
            .await
    }

    /// Delete a reading log (DELETE `/reading-logs/{id}`)
    ///
    /// # Errors
    /// Returns error if the request fails or the backend answers with a non-2xx status
    pub async fn delete_reading_log(&self, id: i64) -> Result<ApiResponse> {
        self.execute(ApiRequest::delete(format!("/reading-logs/{id}"))).await
    }
}
