// Copyright 2019-2026 Maravilla Labs, operated by SOLUTAS GmbH, Switzerland
// SPDX-License-Identifier: Apache-2.0
// SPDX-License-Identifier: MIT

// Warn on missing documentation for public items
#![warn(missing_docs)]

//! pagekit CLI library.
//!
//! This crate provides the command-line interface for pagekit. It renders
//! highlighted sources in the terminal and serves the source viewer page.
//!
//! # Usage
//!
//! This crate is primarily used through the `pagekit` binary:
//!
//! ```bash
//! pagekit view index.htm      # Print the rendered listing
//! pagekit view Main.java --json
//! pagekit serve --port 8080   # Serve /source?filename=...
//! ```
//!
//! # Configuration
//!
//! Projects are configured via `pagekit.toml` at the project root.

/// CLI commands (view, serve).
pub mod commands;
/// Project configuration from `pagekit.toml`.
pub mod config;
/// HTTP server for the source viewer.
pub mod server;
