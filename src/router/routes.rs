// BookGoblin Client - Book Tracking Client Library
// Copyright (C) 2025 Henning Berge
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.

//! Route descriptors and the application's route table

/// Path every guarded navigation falls back to
pub const LOGIN_PATH: &str = "/login";

/// The views the application can show
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum View {
    Home,
    Login,
    Register,
    Dashboard,
    Library,
    ReadingLog,
    Discover,
    Account,
}

/// Static mapping of a URL path to a view
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RouteDescriptor {
    pub path: &'static str,
    pub name: &'static str,
    pub view: View,
    pub requires_auth: bool,
}

impl RouteDescriptor {
    pub const fn public(path: &'static str, name: &'static str, view: View) -> Self {
        Self {
            path,
            name,
            view,
            requires_auth: false,
        }
    }

    pub const fn protected(path: &'static str, name: &'static str, view: View) -> Self {
        Self {
            path,
            name,
            view,
            requires_auth: true,
        }
    }
}

/// The application's routes, in declaration order
pub const ROUTES: &[RouteDescriptor] = &[
    RouteDescriptor::public("/", "home", View::Home),
    RouteDescriptor::public(LOGIN_PATH, "login", View::Login),
    RouteDescriptor::public("/register", "register", View::Register),
    RouteDescriptor::protected("/dashboard", "dashboard", View::Dashboard),
    RouteDescriptor::protected("/library", "library", View::Library),
    RouteDescriptor::protected("/reading-log", "reading-log", View::ReadingLog),
    RouteDescriptor::protected("/discover", "discover", View::Discover),
    RouteDescriptor::protected("/account", "account", View::Account),
];

/// Ordered, immutable collection of route descriptors
///
/// Duplicate paths are not rejected; the entry declared last wins on lookup.
#[derive(Debug, Clone)]
pub struct RouteTable {
    routes: Vec<RouteDescriptor>,
}

impl Default for RouteTable {
    fn default() -> Self {
        Self::new(ROUTES.to_vec())
    }
}

impl RouteTable {
    pub fn new(routes: Vec<RouteDescriptor>) -> Self {
        Self { routes }
    }

    /// Find the descriptor for a path. Query string, fragment and a trailing
    /// slash are ignored, and letters match regardless of case.
    pub fn resolve(&self, path: &str) -> Option<&RouteDescriptor> {
        let path = normalize_path(path);
        self.routes
            .iter()
            .rev()
            .find(|r| r.path.eq_ignore_ascii_case(path))
    }

    pub fn by_name(&self, name: &str) -> Option<&RouteDescriptor> {
        self.routes.iter().rev().find(|r| r.name == name)
    }

    pub fn iter(&self) -> impl Iterator<Item = &RouteDescriptor> {
        self.routes.iter()
    }

    pub fn len(&self) -> usize {
        self.routes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.routes.is_empty()
    }
}

/// Reduce a navigation target to the path used for matching.
pub fn normalize_path(target: &str) -> &str {
    let end = target.find(['?', '#']).unwrap_or(target.len());
    let path = &target[..end];
    let trimmed = path.trim_end_matches('/');
    if trimmed.is_empty() {
        "/"
    } else {
        trimmed
    }
}
