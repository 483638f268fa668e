// BookGoblin Client - Book Tracking Client Library
// Copyright (C) 2025 Henning Berge
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.

//! Shared book catalog
//!
//! # API Endpoints
//! - `GET /books`
//! - `GET /books/{id}`
//! - `GET /books/search?title=&author=`
//! - `POST /books`
//! - `PUT /books/{id}`
//! - `DELETE /books/{id}`

use crate::api::client::ApiClient;
use crate::api::transport::{ApiRequest, ApiResponse};
use crate::error::Result;
use serde::Serialize;

impl ApiClient {
    /// List every book in the catalog
    ///
    /// Makes a GET request to `/books`
    ///
    /// # Errors
    /// Returns error if the request fails or the backend answers with a non-2xx status
    pub async fn get_books(&self) -> Result<ApiResponse> {
        self.execute(ApiRequest::get("/books")).await
    }

    /// Fetch one book
    ///
    /// Makes a GET request to `/books/{id}`
    ///
    /// # Errors
    /// Returns error if the request fails or the backend answers with a non-2xx status
    pub async fn get_book_by_id(&self, id: i64) -> Result<ApiResponse> {
        self.execute(ApiRequest::get(format!("/books/{id}"))).await
    }

    /// Search the catalog.
    ///
    /// Each filter is sent only when given and non-empty. With neither, the
    /// backend returns an unfiltered search.
    ///
    /// # Errors
    /// Returns error if the request fails or the backend answers with a non-2xx status
    pub async fn search_books(&self, title: Option<&str>, author: Option<&str>) -> Result<ApiResponse> {
        let mut request = ApiRequest::get("/books/search");
        if let Some(title) = title.filter(|t| !t.is_empty()) {
            request = request.query("title", title);
        }
        if let Some(author) = author.filter(|a| !a.is_empty()) {
            request = request.query("author", author);
        }
        self.execute(request).await
    }

    /// Add a book to the catalog
    ///
    /// Makes a POST request to `/books` with the book as the JSON body
    ///
    /// # Errors
    /// Returns error if the payload cannot be serialized, the request fails,
    /// or the backend answers with a non-2xx status
    pub async fn create_book<B: Serialize + ?Sized>(&self, book: &B) -> Result<ApiResponse> {
        self.execute(ApiRequest::post("/books").json(book)?).await
    }

    /// Replace a book
    ///
    /// Makes a PUT request to `/books/{id}`
    ///
    /// # Errors
    /// Returns error if the payload cannot be serialized, the request fails,
    /// or the backend answers with a non-2xx status
    pub async fn update_book<B: Serialize + ?Sized>(&self, id: i64, book: &B) -> Result<ApiResponse> {
        self.execute(ApiRequest::put(format!("/books/{id}")).json(book)?).await
    }

    /// Delete a book
    ///
    /// Makes a DELETE request to `/books/{id}`
    ///
    /// # Errors
    /// Returns error if the request fails or the backend answers with a non-2xx status
    pub async fn delete_book(&self, id: i64) -> Result<ApiResponse> {
        self.execute(ApiRequest::delete(format!("/books/{id}"))).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::testing::RecordingTransport;
    use crate::config::ClientConfig;
    use crate::session::NoSession;
    use std::sync::Arc;

    fn setup() -> (ApiClient, Arc<RecordingTransport>) {
        let transport = Arc::new(RecordingTransport::new());
        let client = ApiClient::with_transport(transport.clone(), Arc::new(NoSession), ClientConfig::default());
        (client, transport)
    }

    #[tokio::test]
    async fn test_search_with_both_filters() {
        let (client, transport) = setup();
        client.search_books(Some("Dune"), Some("Herbert")).await.unwrap();
        assert_eq!(transport.single().target(), "/books/search?title=Dune&author=Herbert");
    }

    #[tokio::test]
    async fn test_search_skips_missing_and_empty_filters() {
        let (client, transport) = setup();
        client.search_books(None, Some("Le Guin")).await.unwrap();
        client.search_books(Some(""), None).await.unwrap();

        let requests = transport.requests();
        assert_eq!(requests[0].target(), "/books/search?author=Le+Guin");
        assert_eq!(requests[1].target(), "/books/search");
    }
}
