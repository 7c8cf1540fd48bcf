// Copyright 2019-2026 Maravilla Labs, operated by SOLUTAS GmbH, Switzerland
// SPDX-License-Identifier: Apache-2.0
// SPDX-License-Identifier: MIT

//! HTTP request abstraction for pagekit pages.
//!
//! This module provides a platform-agnostic request type that adapters
//! (HTTP servers, CLI commands, tests) build and hand to pages and
//! behaviors.

use std::collections::HashMap;

/// A platform-agnostic HTTP request.
///
/// # Example
///
/// ```rust
/// use pagekit::PageRequest;
///
/// let request = PageRequest::new("/source", "GET")
///     .with_query_string("filename=index.htm");
/// assert_eq!(request.parameter("filename"), Some("index.htm"));
/// ```
#[derive(Debug, Clone)]
pub struct PageRequest {
    /// The request path below the context path (e.g., "/source")
    pub path: String,

    /// The HTTP method (e.g., "GET", "POST")
    pub method: String,

    /// The application context path (e.g., "/myapp"), empty at the root
    pub context_path: String,

    /// HTTP headers, keyed by lowercase name
    pub headers: HashMap<String, String>,

    /// Query parameters (parsed from URL)
    pub query: HashMap<String, String>,
}

impl PageRequest {
    /// Creates a new request with the given path and method.
    pub fn new(path: impl Into<String>, method: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            method: method.into(),
            context_path: String::new(),
            headers: HashMap::new(),
            query: HashMap::new(),
        }
    }

    /// Sets the application context path.
    pub fn with_context_path(mut self, context_path: impl Into<String>) -> Self {
        self.context_path = context_path.into();
        self
    }

    /// Adds headers to the request. Names are stored lowercase.
    pub fn with_headers<I, K, V>(mut self, headers: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: Into<String>,
    {
        for (name, value) in headers {
            self.headers.insert(name.as_ref().to_ascii_lowercase(), value.into());
        }
        self
    }

    /// Parses a raw, URL-encoded query string into the query parameters.
    ///
    /// For repeated keys the first occurrence wins.
    pub fn with_query_string(mut self, query_string: &str) -> Self {
        for (key, value) in form_urlencoded::parse(query_string.as_bytes()) {
            if key.is_empty() {
                continue;
            }
            self.query
                .entry(key.into_owned())
                .or_insert_with(|| value.into_owned());
        }
        self
    }

    /// Returns a query parameter.
    pub fn parameter(&self, name: &str) -> Option<&str> {
        self.query.get(name).map(|s| s.as_str())
    }

    /// Returns the request URI: context path followed by the request path.
    pub fn request_uri(&self) -> String {
        format!("{}{}", self.context_path, self.path)
    }
}

impl Default for PageRequest {
    fn default() -> Self {
        Self::new("/", "GET")
    }
}
