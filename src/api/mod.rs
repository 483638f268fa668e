// BookGoblin Client - Book Tracking Client Library
// Copyright (C) 2025 Henning Berge
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.

//! BookGoblin backend API client
//!
//! One [`ApiClient`] serves every resource family. Each module below adds the
//! wrappers for one family; every wrapper issues exactly one request and hands
//! back the transport's outcome without looking at it.
//!
//! | module | endpoints |
//! |---|---|
//! | `auth` | `/login`, `/register` |
//! | `books` | `/books` |
//! | `open_library` | `/api/openlibrary/search` |
//! | `reading_logs` | `/reading-logs` |
//! | `tags` | `/tags` |
//! | `user_books` | `/user-books` |

pub mod auth;
pub mod books;
pub mod client;
pub mod open_library;
pub mod reading_logs;
pub mod tags;
pub mod transport;
pub mod user_books;

#[cfg(test)]
pub(crate) mod testing;

// Re-export commonly used types
pub use auth::token_from;
pub use client::ApiClient;
pub use transport::{ApiRequest, ApiResponse, HttpTransport, Transport};
