// Copyright 2019-2026 Maravilla Labs, operated by SOLUTAS GmbH, Switzerland
// SPDX-License-Identifier: Apache-2.0
// SPDX-License-Identifier: MIT

//! The source viewer page.
//!
//! Renders a file from the application's content as highlighted HTML. The
//! file is selected with the `filename` request parameter and the result is
//! exposed as a page [`Model`]:
//!
//! | key              | when                                   |
//! |------------------|----------------------------------------|
//! | `templateSource` | HTML-family documents                  |
//! | `source`         | every other document                   |
//! | `name`           | on success, the requested file name    |
//! | `error`          | missing parameter, not found, IO error |
//!
//! Failures never escape the page; they become the `error` entry.

use crate::error::PageKitError;
use crate::model::Model;
use crate::request::PageRequest;
use crate::resolver::ResourceResolver;
use crate::source::load_source;

/// Request parameter naming the file to render.
pub const FILENAME_PARAM: &str = "filename";
/// Model key for highlighted HTML-family sources.
pub const TEMPLATE_SOURCE_KEY: &str = "templateSource";
/// Model key for highlighted non-HTML sources.
pub const SOURCE_KEY: &str = "source";
/// Model key for the requested file name.
pub const NAME_KEY: &str = "name";
/// Model key for the failure message.
pub const ERROR_KEY: &str = "error";

/// Page that renders Java, XML and HTML/template sources.
pub struct SourceViewer {
    resolver: Box<dyn ResourceResolver>,
}

impl SourceViewer {
    /// Creates a viewer reading content through `resolver`.
    pub fn new<R: ResourceResolver>(resolver: R) -> Self {
        Self {
            resolver: Box::new(resolver),
        }
    }

    /// Creates a viewer from an already boxed resolver.
    pub fn from_boxed(resolver: Box<dyn ResourceResolver>) -> Self {
        Self { resolver }
    }

    /// Returns the resolver used by this viewer.
    pub fn resolver(&self) -> &dyn ResourceResolver {
        self.resolver.as_ref()
    }

    /// Handles a GET request and returns the page model.
    pub fn on_get(&self, request: &PageRequest) -> Model {
        match request.parameter(FILENAME_PARAM) {
            Some(filename) => self.load(filename),
            None => {
                let mut model = Model::new();
                model.insert(
                    ERROR_KEY,
                    PageKitError::MissingParameter(FILENAME_PARAM.to_string()).to_string(),
                );
                model
            }
        }
    }

    /// Loads and renders `filename` into a page model.
    pub fn load(&self, filename: &str) -> Model {
        let mut model = Model::new();

        match load_source(self.resolver.as_ref(), filename) {
            Ok(document) => {
                let key = if document.classification.is_html_family() {
                    TEMPLATE_SOURCE_KEY
                } else {
                    SOURCE_KEY
                };
                model.insert(key, document.render());
                model.insert(NAME_KEY, filename);
            }
            Err(err) => {
                tracing::debug!("Source viewer could not load {}: {}", filename, err);
                model.insert(ERROR_KEY, err.to_string());
            }
        }

        model
    }
}
