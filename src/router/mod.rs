// BookGoblin Client - Book Tracking Client Library
// Copyright (C) 2025 Henning Berge
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.

//! Client-side routing and the navigation guard
//!
//! Every navigation runs one synchronous check before the target view is
//! shown: a route marked `requires_auth` is only reachable while the session
//! provider holds a non-empty token. Otherwise the navigation is redirected to
//! `/login` and the requested path is dropped.
//!
//! The token is never inspected. An expired or forged value passes.
//!
//! | path | view | auth |
//! |---|---|---|
//! | `/` | Home | |
//! | `/login` | Login | |
//! | `/register` | Register | |
//! | `/dashboard` | Dashboard | yes |
//! | `/library` | Library | yes |
//! | `/reading-log` | ReadingLog | yes |
//! | `/discover` | Discover | yes |
//! | `/account` | Account | yes |
//!
//! # Usage Example
//! ```
//! use bookgoblin_client::router::{Router, View};
//! use bookgoblin_client::session::MemorySessionStore;
//!
//! let router = Router::new();
//! let signed_out = MemorySessionStore::new();
//! let nav = router.navigate("/dashboard", &signed_out);
//! assert_eq!(nav.path(), "/login");
//!
//! let signed_in = MemorySessionStore::with_token("anything");
//! let nav = router.navigate("/dashboard", &signed_in);
//! assert_eq!(nav.view(), Some(View::Dashboard));
//! ```

pub mod routes;

pub use routes::{normalize_path, RouteDescriptor, RouteTable, View, LOGIN_PATH, ROUTES};

use crate::session::SessionProvider;

/// Result of the guard check for a single route
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuardDecision {
    Proceed,
    RedirectToLogin,
}

/// Decide whether a navigation to `route` may continue.
///
/// Paths with no descriptor carry no auth requirement and always proceed.
pub fn guard<S>(route: Option<&RouteDescriptor>, session: &S) -> GuardDecision
where
    S: SessionProvider + ?Sized,
{
    match route {
        Some(r) if r.requires_auth && !session.has_token() => GuardDecision::RedirectToLogin,
        _ => GuardDecision::Proceed,
    }
}

/// Where a navigation ended up
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Navigation<'a> {
    /// The requested path, unchanged. `route` is `None` for unknown paths.
    Proceed {
        path: String,
        route: Option<&'a RouteDescriptor>,
    },
    /// Guard rejected the target; the caller lands on the login route.
    Redirect {
        path: &'static str,
        route: Option<&'a RouteDescriptor>,
    },
}

impl<'a> Navigation<'a> {
    /// The effective path after the guard ran
    pub fn path(&self) -> &str {
        match self {
            Navigation::Proceed { path, .. } => path.as_str(),
            Navigation::Redirect { path, .. } => *path,
        }
    }

    pub fn route(&self) -> Option<&'a RouteDescriptor> {
        match self {
            Navigation::Proceed { route, .. } | Navigation::Redirect { route, .. } => *route,
        }
    }

    pub fn view(&self) -> Option<View> {
        self.route().map(|r| r.view)
    }

    pub fn is_redirect(&self) -> bool {
        matches!(self, Navigation::Redirect { .. })
    }
}

/// Route table plus the guard
#[derive(Debug, Clone, Default)]
pub struct Router {
    table: RouteTable,
}

impl Router {
    /// Router over the application's route table
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_table(table: RouteTable) -> Self {
        Self { table }
    }

    pub fn table(&self) -> &RouteTable {
        &self.table
    }

    /// Resolve `target` and run the guard against `session`.
    pub fn navigate<S>(&self, target: &str, session: &S) -> Navigation<'_>
    where
        S: SessionProvider + ?Sized,
    {
        let route = self.table.resolve(target);

        match guard(route, session) {
            GuardDecision::Proceed => Navigation::Proceed {
                path: target.to_string(),
                route,
            },
            GuardDecision::RedirectToLogin => {
                tracing::info!(target_path = target, "navigation requires a session, redirecting to login");
                Navigation::Redirect {
                    path: LOGIN_PATH,
                    route: self.table.resolve(LOGIN_PATH),
                }
            }
        }
    }
}
