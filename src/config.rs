// ABOUTME: Server configuration loaded from environment variables with sane defaults
// ABOUTME: Covers bind address, database URL, upload limits, and session registry capacity
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Platewise

//! Server configuration from the environment.

use std::env;

use anyhow::{Context, Result};

use platewise_core::constants::upload;

/// Runtime configuration for the Platewise server.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Interface to bind, e.g. `127.0.0.1` or `0.0.0.0`
    pub host: String,
    /// HTTP port to listen on
    pub http_port: u16,
    /// `SQLite` database URL, e.g. `sqlite:./data/platewise.db`
    pub database_url: String,
    /// Maximum accepted decoded image size in bytes
    pub max_image_bytes: usize,
    /// Maximum number of live analysis sessions held in memory
    pub session_capacity: usize,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".into(),
            http_port: 8080,
            database_url: "sqlite:./data/platewise.db".into(),
            max_image_bytes: upload::MAX_IMAGE_BYTES,
            session_capacity: 1024,
        }
    }
}

impl ServerConfig {
    /// Load configuration from environment variables, falling back to
    /// defaults for anything unset.
    ///
    /// # Errors
    ///
    /// Returns an error when a set variable fails to parse, so a typo in
    /// deployment config fails fast instead of silently using a default.
    pub fn from_env() -> Result<Self> {
        let defaults = Self::default();

        let http_port = match env::var("HTTP_PORT") {
            Ok(raw) => raw
                .parse()
                .with_context(|| format!("invalid HTTP_PORT: {raw}"))?,
            Err(_) => defaults.http_port,
        };

        let max_image_bytes = match env::var("MAX_IMAGE_BYTES") {
            Ok(raw) => raw
                .parse()
                .with_context(|| format!("invalid MAX_IMAGE_BYTES: {raw}"))?,
            Err(_) => defaults.max_image_bytes,
        };

        let session_capacity = match env::var("SESSION_CAPACITY") {
            Ok(raw) => raw
                .parse()
                .with_context(|| format!("invalid SESSION_CAPACITY: {raw}"))?,
            Err(_) => defaults.session_capacity,
        };

        Ok(Self {
            host: env::var("HOST").unwrap_or(defaults.host),
            http_port,
            database_url: env::var("DATABASE_URL").unwrap_or(defaults.database_url),
            max_image_bytes,
            session_capacity,
        })
    }

    /// One-line summary for startup logging. Never includes secrets.
    #[must_use]
    pub fn summary(&self) -> String {
        format!(
            "bind={}:{} db={} max_image_bytes={} session_capacity={}",
            self.host, self.http_port, self.database_url, self.max_image_bytes, self.session_capacity
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_sensible() {
        let config = ServerConfig::default();
        assert_eq!(config.http_port, 8080);
        assert!(config.session_capacity > 0);
        assert!(config.max_image_bytes > 0);
    }

    #[test]
    fn summary_mentions_bind_address() {
        let config = ServerConfig::default();
        assert!(config.summary().contains("127.0.0.1:8080"));
    }
}
