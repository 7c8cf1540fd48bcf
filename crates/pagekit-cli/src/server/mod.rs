// Copyright 2019-2026 Maravilla Labs, operated by SOLUTAS GmbH, Switzerland
// SPDX-License-Identifier: Apache-2.0
// SPDX-License-Identifier: MIT

//! HTTP server hosting the source viewer.
//!
//! # Endpoints
//!
//! - `GET /source?filename=...`: highlighted source page
//! - `GET /source.json?filename=...`: the page model as JSON
//! - `/static/*`: static assets, when configured

/// Axum router, handlers and response conversion.
pub mod http;

pub use http::{create_app, create_server, AppState};
