// BookGoblin Client - Book Tracking Client Library
// Copyright (C) 2025 Henning Berge
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.

//! External catalog search
//!
//! The backend proxies Open Library and answers with a list of books in the
//! catalog's own shape (`bookId` 0, first author, first ISBN, medium cover
//! URL), none of them saved yet.
//!
//! # API Endpoint
//! `GET /api/openlibrary/search?query={encoded}`

use crate::api::client::ApiClient;
use crate::api::transport::{ApiRequest, ApiResponse};
use crate::error::Result;

impl ApiClient {
    /// Search Open Library through the backend.
    ///
    /// The free-text query is percent-encoded, so `"a b&c"` goes out as
    /// `a%20b%26c`.
    pub async fn search_open_library(&self, query: &str) -> Result<ApiResponse> {
        let path = format!("/api/openlibrary/search?query={}", urlencoding::encode(query));
        self.execute(ApiRequest::get(path)).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::testing::RecordingTransport;
    use crate::config::ClientConfig;
    use crate::session::NoSession;
    use std::sync::Arc;

    #[tokio::test]
    async fn test_query_is_percent_encoded() {
        let transport = Arc::new(RecordingTransport::new());
        let client = ApiClient::with_transport(transport.clone(), Arc::new(NoSession), ClientConfig::default());

        client.search_open_library("a b&c").await.unwrap();
        client.search_open_library("süß/?=").await.unwrap();

        let requests = transport.requests();
        assert_eq!(requests[0].target(), "/api/openlibrary/search?query=a%20b%26c");
        assert_eq!(
            requests[1].target(),
            "/api/openlibrary/search?query=s%C3%BC%C3%9F%2F%3F%3D"
        );
    }
}
