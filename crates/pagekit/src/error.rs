// Copyright 2019-2026 Maravilla Labs, operated by SOLUTAS GmbH, Switzerland
// SPDX-License-Identifier: Apache-2.0
// SPDX-License-Identifier: MIT

//! Error types for pagekit.
//!
//! This module defines [`PageKitError`], the error enum shared by the
//! resource resolvers, the source loader and the client template renderer.
//!
//! # Error Categories
//!
//! - **Not found**: no resource exists under any candidate name
//! - **IO errors**: a resource was opened but could not be read
//! - **Missing parameters**: a required request parameter is absent
//! - **Resolution errors**: a path escapes the content root
//! - **Template errors**: a client template could not be rendered
//!
//! The source viewer never propagates these; it turns the display string of
//! the error into the `error` entry of its page model.

use thiserror::Error;

/// The main error type for pagekit operations.
#[derive(Error, Debug)]
pub enum PageKitError {
    /// No resource exists under the requested name (or its fallback).
    #[error("File {0} not found")]
    NotFound(String),

    /// The resource was found but reading it failed.
    #[error("Could not read {path}")]
    Io {
        /// The resource path that failed to read.
        path: String,
        /// The underlying error.
        #[source]
        source: std::io::Error,
    },

    /// A required request parameter was not supplied.
    #[error("{0} not defined")]
    MissingParameter(String),

    /// A path could not be resolved inside the content root.
    #[error("Resolution error: {0}")]
    Resolution(String),

    /// A client template could not be rendered.
    #[error("Template error: {0}")]
    Template(String),
}

impl PageKitError {
    /// Creates an [`PageKitError::Io`] for the given resource path.
    pub fn io(path: impl Into<String>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}

/// Convenience type alias for Results with [`PageKitError`].
pub type Result<T> = std::result::Result<T, PageKitError>;
