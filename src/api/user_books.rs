// BookGoblin Client - Book Tracking Client Library
// Copyright (C) 2025 Henning Berge
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.

//! Books on the signed-in user's shelf
//!
//! # API Endpoints
//! - `GET /user-books`
//! - `GET /user-books/{id}`
//! - `POST /user-books`
//! - `PUT /user-books/{id}`
//! - `DELETE /user-books/{id}`

use crate::api::client::ApiClient;
use crate::api::transport::{ApiRequest, ApiResponse};
use crate::error::Result;
use serde::Serialize;

impl ApiClient {
    /// List the user's shelf (GET `/user-books`)
    ///
    /// # Errors
    /// Returns error if the request fails or the backend answers with a non-2xx status
    pub async fn get_user_books(&self) -> Result<ApiResponse> {
        self.execute(ApiRequest::get("/user-books")).await
    }

    /// Fetch one shelf entry (GET `/user-books/{id}`)
    ///
    /// # Errors
    /// Returns error if the request fails or the backend answers with a non-2xx status
    pub async fn get_user_book_by_id(&self, id: i64) -> Result<ApiResponse> {
        self.execute(ApiRequest::get(format!("/user-books/{id}"))).await
    }

    /// Put a book on the shelf (POST `/user-books`)
    ///
    /// # Errors
    /// Returns error if the payload cannot be serialized, the request fails,
    /// or the backend answers with a non-2xx status
    pub async fn create_user_book<U: Serialize + ?Sized>(&self, user_book: &U) -> Result<ApiResponse> {
        self.execute(ApiRequest::post("/user-books").json(user_book)?).await
    }

    /// Update a shelf entry, e.g. its status or ownership (PUT `/user-books/{id}`)
    ///
    /// # Errors
    /// Returns error if the payload cannot be serialized, the request fails,
    /// or the backend answers with a non-2xx status
    pub async fn update_user_book<U: Serialize + ?Sized>(&self, id: i64, user_book: &U) -> Result<ApiResponse> {
        self.execute(ApiRequest::put(format!("/user-books/{id}")).json(user_book)?)
            .await
    }

    /// Remove a shelf entry (DELETE `/user-books/{id}`)
    ///
    /// # Errors
    /// Returns error if the request fails or the backend answers with a non-2xx status
    pub async fn delete_user_book(&self, id: i64) -> Result<ApiResponse> {
        self.execute(ApiRequest::delete(format!("/user-books/{id}"))).await
    }
}
