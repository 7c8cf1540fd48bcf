// Copyright 2019-2026 Maravilla Labs, operated by SOLUTAS GmbH, Switzerland
// SPDX-License-Identifier: Apache-2.0
// SPDX-License-Identifier: MIT

// Warn on missing documentation for public items
#![warn(missing_docs)]

//! # pagekit
//!
//! Page-level building blocks for server-side web applications.
//!
//! pagekit provides two independent pieces:
//!
//! - A **source viewer** page that loads a file from the application's
//!   content and renders it as keyword-highlighted HTML.
//! - A **template behavior** that attaches an Ajax-driven client template,
//!   its script imports and a per-request model to a control's head
//!   elements.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use pagekit::{FileSystemResolver, PageRequest, SourceViewer};
//!
//! let viewer = SourceViewer::new(FileSystemResolver::new("./web"));
//! let request = PageRequest::new("/source", "GET")
//!     .with_query_string("filename=index.htm");
//! let model = viewer.on_get(&request);
//! ```

/// Behaviors attaching client scripts to controls.
pub mod behavior;
/// Error types and reporting.
pub mod error;
/// Head elements and the ordered head-element list.
pub mod head;
/// Keyword highlighting.
pub mod highlight;
/// In-memory resource resolver for testing and embedded content.
pub mod memory_resolver;
/// Key/value page and template models.
pub mod model;
/// Page and control descriptors.
pub mod page;
/// HTTP request abstraction.
pub mod request;
/// Resource resolution (filesystem).
pub mod resolver;
/// HTTP response abstraction.
pub mod response;
/// Source documents and the resource loader.
pub mod source;
/// Client template rendering.
pub mod template;
/// The source viewer page.
pub mod viewer;

pub use behavior::{BehaviorConfig, Mode, TemplateBehavior};
pub use error::*;
pub use head::{HeadElement, HeadElements, JsImport, JsScript};
pub use highlight::{escape_html, render_line};
pub use memory_resolver::MemoryResourceResolver;
pub use model::Model;
pub use page::{Control, Page};
pub use request::PageRequest;
pub use resolver::*;
pub use response::PageResponse;
pub use source::{load_source, Classification, SourceDocument};
pub use template::{ResolverTemplateRenderer, TemplateRenderer};
pub use viewer::SourceViewer;
