// Copyright 2019-2026 Maravilla Labs, operated by SOLUTAS GmbH, Switzerland
// SPDX-License-Identifier: Apache-2.0
// SPDX-License-Identifier: MIT

//! CLI command implementations.
//!
//! - `view`: Render a source file to the terminal
//! - `serve`: Serve the source viewer page

/// Source serving command.
pub mod serve;
/// Source rendering command.
pub mod view;
