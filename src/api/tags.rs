// BookGoblin Client - Book Tracking Client Library
// Copyright (C) 2025 Henning Berge
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.

//! Tags and their assignment to books
//!
//! # API Endpoints
//! - `GET /tags`
//! - `GET /tags/{id}`
//! - `GET /tags/book/{bookId}`
//! - `POST /tags`
//! - `PUT /tags/{id}`
//! - `DELETE /tags/{id}`
//! - `POST /tags/{tagId}/book/{bookId}` (no body)
//! - `DELETE /tags/{tagId}/book/{bookId}`

use crate::api::client::ApiClient;
use crate::api::transport::{ApiRequest, ApiResponse};
use crate::error::Result;
use serde::Serialize;

impl ApiClient {
    /// List all tags (GET `/tags`)
    ///
    /// # Errors
    /// Returns error if the request fails or the backend answers with a non-2xx status
    pub async fn get_tags(&self) -> Result<ApiResponse> {
        self.execute(ApiRequest::get("/tags")).await
    }

    /// Fetch one tag (GET `/tags/{id}`)
    ///
    /// # Errors
    /// Returns error if the request fails or the backend answers with a non-2xx status
    pub async fn get_tag_by_id(&self, id: i64) -> Result<ApiResponse> {
        self.execute(ApiRequest::get(format!("/tags/{id}"))).await
    }

    /// Tags attached to a book (GET `/tags/book/{book_id}`)
    ///
    /// # Errors
    /// Returns error if the request fails or the backend answers with a non-2xx status
    pub async fn get_tags_by_book_id(&self, book_id: i64) -> Result<ApiResponse> {
        self.execute(ApiRequest::get(format!("/tags/book/{book_id}"))).await
    }

    /// Create a tag (POST `/tags`)
    ///
    /// # Errors
    /// Returns error if the payload cannot be serialized, the request fails,
    /// or the backend answers with a non-2xx status
    pub async fn create_tag<T: Serialize + ?Sized>(&self, tag: &T) -> Result<ApiResponse> {
        self.execute(ApiRequest::post("/tags").json(tag)?).await
    }

    /// Rename a tag (PUT `/tags/{id}`)
    ///
    /// # Errors
    /// Returns error if the payload cannot be serialized, the request fails,
    /// or the backend answers with a non-2xx status
    pub async fn update_tag<T: Serialize + ?Sized>(&self, id: i64, tag: &T) -> Result<ApiResponse> {
        self.execute(ApiRequest::put(format!("/tags/{id}")).json(tag)?).await
    }

    /// Delete a tag (DELETE `/tags/{id}`)
    ///
    /// # Errors
    /// Returns error if the request fails or the backend answers with a non-2xx status
    pub async fn delete_tag(&self, id: i64) -> Result<ApiResponse> {
        self.execute(ApiRequest::delete(format!("/tags/{id}"))).await
    }

    /// Attach a tag to a book
    ///
    /// Makes a POST request to `/tags/{tag_id}/book/{book_id}` with no body
    ///
    /// # Errors
    /// Returns error if the request fails or the backend answers with a non-2xx status
    pub async fn add_tag_to_book(&self, tag_id: i64, book_id: i64) -> Result<ApiResponse> {
        self.execute(ApiRequest::post(format!("/tags/{tag_id}/book/{book_id}")))
            .await
    }

    /// Detach a tag from a book (DELETE `/tags/{tag_id}/book/{book_id}`)
    ///
    /// # Errors
    /// Returns error if the request fails or the backend answers with a non-2xx status
    pub async fn remove_tag_from_book(&self, tag_id: i64, book_id: i64) -> Result<ApiResponse> {
        self.execute(ApiRequest::delete(format!("/tags/{tag_id}/book/{book_id}")))
            .await
    }
}
