// Copyright 2019-2026 Maravilla Labs, operated by SOLUTAS GmbH, Switzerland
// SPDX-License-Identifier: Apache-2.0
// SPDX-License-Identifier: MIT

//! HTTP response abstraction for pagekit pages.
//!
//! Pages return one of these variants; adapters convert it to their
//! platform-specific response format.

use std::collections::HashMap;
use serde_json::Value as JsonValue;

/// A platform-agnostic HTTP response.
///
/// # Example
///
/// ```rust
/// use pagekit::PageResponse;
///
/// let html = PageResponse::html(200, "<h1>Hello</h1>")
///     .with_header("cache-control", "no-cache");
/// let PageResponse::Html { headers, .. } = html else { unreachable!() };
/// assert_eq!(headers["cache-control"], "no-cache");
/// ```
#[derive(Debug, Clone)]
pub enum PageResponse {
    /// HTML response
    Html {
        /// HTTP status code
        status: u16,
        /// HTTP headers
        headers: HashMap<String, String>,
        /// HTML body
        body: String,
    },

    /// JSON response
    Json {
        /// HTTP status code
        status: u16,
        /// HTTP headers
        headers: HashMap<String, String>,
        /// JSON body
        body: JsonValue,
    },

    /// Error response
    Error {
        /// HTTP status code
        status: u16,
        /// Error message
        message: String,
    },
}

impl PageResponse {
    /// Creates an HTML response.
    pub fn html(status: u16, body: impl Into<String>) -> Self {
        Self::Html {
            status,
            headers: HashMap::new(),
            body: body.into(),
        }
    }

    /// Creates a JSON response.
    pub fn json(status: u16, body: JsonValue) -> Self {
        Self::Json {
            status,
            headers: HashMap::new(),
            body,
        }
    }

    /// Creates an error response.
    pub fn error(status: u16, message: impl Into<String>) -> Self {
        Self::Error {
            status,
            message: message.into(),
        }
    }

    /// Creates a 404 Not Found response.
    pub fn not_found(message: impl Into<String>) -> Self {
        Self::error(404, message)
    }

    /// Adds a header to the response (only for Html and Json variants).
    pub fn with_header(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        match &mut self {
            Self::Html { headers, .. } | Self::Json { headers, .. } => {
                headers.insert(key.into(), value.into());
            }
            Self::Error { .. } => {}
        }
        self
    }
}
