// BookGoblin Client - Book Tracking Client Library
// Copyright (C) 2025 Henning Berge
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.

//! Client library for the BookGoblin book tracker
//!
//! - [`router`]: the application's routes and the session-presence guard
//! - [`api`]: one-request-per-call wrappers over the backend REST API
//! - [`session`]: where the session token is read from and written to
//! - [`config`]: base URL, timeout and credential policy
//! - [`models`]: serde types for the backend's payloads

pub mod api;
pub mod config;
pub mod error;
pub mod models;
pub mod router;
pub mod session;

pub use api::{ApiClient, ApiRequest, ApiResponse};
pub use config::ClientConfig;
pub use error::{BookGoblinError, Result};
pub use router::{Navigation, Router};
pub use session::{FileSessionStore, MemorySessionStore, SessionProvider, SessionStore};
