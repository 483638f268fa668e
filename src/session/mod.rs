// BookGoblin Client - Book Tracking Client Library
// Copyright (C) 2025 Henning Berge
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.

//! Session token storage
//!
//! The session token is an opaque string. Its presence, not its validity, is
//! what the navigation guard checks. Nothing in this crate parses, validates
//! or expires it.
//!
//! The guard and the API client read the token through [`SessionProvider`];
//! the login/logout flow writes it through [`SessionStore`].
//!
//! # Usage Example
//! ```no_run
//! use bookgoblin_client::session::{FileSessionStore, SessionProvider, SessionStore};
//!
//! # fn example() -> bookgoblin_client::error::Result<()> {
//! let store = FileSessionStore::new("./session.json");
//! store.store_token("abc123")?;
//! assert!(store.has_token());
//! store.clear_token()?;
//! # Ok(())
//! # }
//! ```

pub mod file;
pub mod memory;

pub use file::FileSessionStore;
pub use memory::MemorySessionStore;

use crate::error::Result;

/// Storage key the token lives under
pub const TOKEN_KEY: &str = "token";

/// Read access to the current session token
pub trait SessionProvider: Send + Sync {
    /// The stored token, if any.
    fn token(&self) -> Option<String>;

    /// True when a non-empty token is stored.
    fn has_token(&self) -> bool {
        self.token().is_some_and(|t| !t.is_empty())
    }
}

/// Write access for the login/logout flow
pub trait SessionStore: SessionProvider {
    fn store_token(&self, token: &str) -> Result<()>;

    fn clear_token(&self) -> Result<()>;
}

impl<T: SessionProvider + ?Sized> SessionProvider for std::sync::Arc<T> {
    fn token(&self) -> Option<String> {
        (**self).token()
    }
}

impl<T: SessionStore + ?Sized> SessionStore for std::sync::Arc<T> {
    fn store_token(&self, token: &str) -> Result<()> {
        (**self).store_token(token)
    }

    fn clear_token(&self) -> Result<()> {
        (**self).clear_token()
    }
}

/// A provider that never holds a token
#[derive(Debug, Clone, Copy, Default)]
pub struct NoSession;

impl SessionProvider for NoSession {
    fn token(&self) -> Option<String> {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    #[test]
    fn test_empty_token_is_not_present() {
        let store = MemorySessionStore::with_token("");
        assert_eq!(store.token().as_deref(), Some(""));
        assert!(!store.has_token());
    }

    #[test]
    fn test_no_session() {
        assert!(!NoSession.has_token());
    }

    #[test]
    fn test_arc_forwards() {
        let store = Arc::new(MemorySessionStore::new());
        store.store_token("t").unwrap();
        let provider: Arc<dyn SessionProvider> = store.clone();
        assert!(provider.has_token());
        store.clear_token().unwrap();
        assert!(!provider.has_token());
    }
}
