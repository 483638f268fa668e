// BookGoblin Client - Book Tracking Client Library
// Copyright (C) 2025 Henning Berge
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.

//! Payload models for the BookGoblin backend
//!
//! These mirror the JSON the backend emits (camelCase field names, ISO dates).
//! The API wrappers do not require them: every operation accepts any
//! `Serialize` payload and returns the raw JSON body, which callers can decode
//! into these types with [`ApiResponse::json`](crate::api::ApiResponse::json).
//! Nothing here is validated client-side.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

// ============================================================================
// ENUMS
// ============================================================================

/// Where a user is with a book
///
/// The backend accepts exactly these four lowercase strings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReadingStatus {
    Unread,
    Reading,
    Finished,
    /// Did not finish
    Dnf,
}

impl ReadingStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            ReadingStatus::Unread => "unread",
            ReadingStatus::Reading => "reading",
            ReadingStatus::Finished => "finished",
            ReadingStatus::Dnf => "dnf",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "unread" => Some(ReadingStatus::Unread),
            "reading" => Some(ReadingStatus::Reading),
            "finished" => Some(ReadingStatus::Finished),
            "dnf" => Some(ReadingStatus::Dnf),
            _ => None,
        }
    }
}

// ============================================================================
// CATALOG
// ============================================================================

/// A book in the shared catalog
///
/// Open Library search results use the same shape with `bookId` left at 0.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Book {
    #[serde(default)]
    pub book_id: i64,
    pub title: String,
    pub author: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub isbn: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cover_image_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub publication_year: Option<i32>,
}

impl Book {
    pub fn new<T: Into<String>, A: Into<String>>(title: T, author: A) -> Self {
        Self {
            title: title.into(),
            author: author.into(),
            ..Self::default()
        }
    }
}

/// A user-defined label that can be attached to books
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Tag {
    #[serde(default)]
    pub tag_id: i64,
    pub name: String,
}

impl Tag {
    pub fn new<S: Into<String>>(name: S) -> Self {
        Self {
            tag_id: 0,
            name: name.into(),
        }
    }
}

// ============================================================================
// PER-USER RECORDS
// ============================================================================

/// A book on a user's shelf
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserBook {
    #[serde(default)]
    pub user_book_id: i64,
    #[serde(default)]
    pub user_id: i64,
    pub book_id: i64,
    pub date_added: NaiveDate,
    /// The backend serializes this boolean as `owned`
    #[serde(rename = "owned", alias = "isOwned", default)]
    pub is_owned: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub current_status: Option<ReadingStatus>,

    // Display-only fields filled in by the backend
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub book_title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub book_author: Option<String>,
}

/// One read-through of a user-book
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReadingLog {
    #[serde(default)]
    pub log_id: i64,
    pub user_book_id: i64,
    pub start_date: NaiveDate,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_date: Option<NaiveDate>,
    /// 1 through 5 when present
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rating: Option<u8>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,

    // Display-only fields filled in by the backend
    #[serde(default, skip_serializing_if = "is_zero")]
    pub user_id: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub book_title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub book_author: Option<String>,
}

fn is_zero(value: &i64) -> bool {
    *value == 0
}

// ============================================================================
// AUTHENTICATION
// ============================================================================

/// Body of `POST /login`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

impl LoginRequest {
    pub fn new<U: Into<String>, P: Into<String>>(username: U, password: P) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
        }
    }
}

/// Body of `POST /register`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisterRequest {
    pub username: String,
    pub password: String,
    pub confirm_password: String,
    pub role: String,
}

impl RegisterRequest {
    /// Registration for a regular user account
    pub fn user<U: Into<String>, P: Into<String>>(username: U, password: P) -> Self {
        let password = password.into();
        Self {
            username: username.into(),
            confirm_password: password.clone(),
            password,
            role: "user".to_string(),
        }
    }
}
