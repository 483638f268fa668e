// BookGoblin Client - Book Tracking Client Library
// Copyright (C) 2025 Henning Berge
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.

//! File-backed session store
//!
//! A small JSON object, the desktop counterpart of browser local storage.
//! The token lives under [`TOKEN_KEY`] as a string; other keys written by
//! other tools are preserved on every write, whatever their value type.

use super::{SessionProvider, SessionStore, TOKEN_KEY};
use crate::error::{BookGoblinError, Result};
use serde_json::{Map, Value};
use std::fs;
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;

type Entries = Map<String, Value>;

/// Session store persisted to a JSON file
#[derive(Debug, Clone)]
pub struct FileSessionStore {
    path: PathBuf,
}

impl FileSessionStore {
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load the whole key/value map. A missing file is an empty map.
    fn load(&self) -> Result<Entries> {
        match fs::read_to_string(&self.path) {
            Ok(contents) if contents.trim().is_empty() => Ok(Entries::new()),
            Ok(contents) => serde_json::from_str(&contents).map_err(|e| {
                BookGoblinError::session_store(format!(
                    "corrupt session file {}: {}",
                    self.path.display(),
                    e
                ))
            }),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(Entries::new()),
            Err(e) => Err(e.into()),
        }
    }

    /// Load for a write. A corrupt file is replaced; I/O failures are not.
    fn load_for_write(&self) -> Result<Entries> {
        match self.load() {
            Err(BookGoblinError::SessionStore(msg)) => {
                tracing::warn!(path = %self.path.display(), error = %msg, "replacing corrupt session file");
                Ok(Entries::new())
            }
            other => other,
        }
    }

    /// Write through a sibling temp file renamed into place.
    fn save(&self, entries: &Entries) -> Result<()> {
        let dir = match self.path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        };
        fs::create_dir_all(dir)?;

        let json = serde_json::to_string_pretty(entries)?;
        let mut tmp = NamedTempFile::new_in(dir)?;
        tmp.write_all(json.as_bytes())?;
        tmp.as_file().sync_all()?;
        tmp.persist(&self.path).map_err(|e| e.error)?;
        Ok(())
    }
}

impl SessionProvider for FileSessionStore {
    fn token(&self) -> Option<String> {
        match self.load() {
            Ok(entries) => entries
                .get(TOKEN_KEY)
                .and_then(Value::as_str)
                .map(str::to_owned),
            Err(e) => {
                tracing::warn!(path = %self.path.display(), error = %e, "unreadable session file, treating as signed out");
                None
            }
        }
    }
}

impl SessionStore for FileSessionStore {
    fn store_token(&self, token: &str) -> Result<()> {
        let mut entries = self.load_for_write()?;
        entries.insert(TOKEN_KEY.to_string(), Value::String(token.to_string()));
        self.save(&entries)
    }

    fn clear_token(&self) -> Result<()> {
        let mut entries = self.load_for_write()?;
        if entries.remove(TOKEN_KEY).is_none() && !self.path.exists() {
            return Ok(());
        }
        self.save(&entries)
    }
}
