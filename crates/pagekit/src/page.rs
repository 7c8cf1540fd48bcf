// Copyright 2019-2026 Maravilla Labs, operated by SOLUTAS GmbH, Switzerland
// SPDX-License-Identifier: Apache-2.0
// SPDX-License-Identifier: MIT

//! Minimal page and control descriptors.
//!
//! The host framework owns the real page and control objects. Behaviors only
//! need the facts captured here: where the page lives, whether it survives
//! across requests, and the head elements of the control being augmented.

use std::collections::BTreeMap;

use serde_json::{json, Value as JsonValue};

use crate::head::HeadElements;

/// The page that owns a control.
#[derive(Debug, Clone)]
pub struct Page {
    /// Type name of the page, used in diagnostics.
    pub type_name: String,
    /// Page template path (e.g., "/customers.htm").
    pub path: String,
    /// Stateful pages are kept across requests.
    pub stateful: bool,
    /// Formatting helper exposed to templates, if the page has one.
    pub format: Option<JsonValue>,
    /// Localized page messages.
    pub messages: BTreeMap<String, String>,
}

impl Page {
    /// Creates a stateless page.
    pub fn new(type_name: impl Into<String>, path: impl Into<String>) -> Self {
        Self {
            type_name: type_name.into(),
            path: path.into(),
            stateful: false,
            format: None,
            messages: BTreeMap::new(),
        }
    }

    /// Marks the page as stateful.
    pub fn with_stateful(mut self, stateful: bool) -> Self {
        self.stateful = stateful;
        self
    }

    /// Sets the page format object.
    pub fn with_format(mut self, format: JsonValue) -> Self {
        self.format = Some(format);
        self
    }

    /// Adds a page message.
    pub fn with_message(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.messages.insert(key.into(), value.into());
        self
    }
}

/// A UI control whose head elements a behavior can extend.
#[derive(Debug, Clone)]
pub struct Control {
    /// HTML tag the control renders as.
    pub tag: String,
    /// Control name.
    pub name: String,
    /// Explicit element id.
    pub id: Option<String>,
    head_elements: HeadElements,
}

impl Control {
    /// Creates a control rendering as `tag` named `name`.
    pub fn new(tag: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            tag: tag.into(),
            name: name.into(),
            id: None,
            head_elements: HeadElements::new(),
        }
    }

    /// Sets the element id.
    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    /// CSS selector for the control: `#id` when an id is set, otherwise
    /// `tag[name='name']`.
    pub fn css_selector(&self) -> String {
        match &self.id {
            Some(id) => format!("#{}", id),
            None => format!("{}[name='{}']", self.tag, self.name),
        }
    }

    /// The control's head elements.
    pub fn head_elements(&self) -> &HeadElements {
        &self.head_elements
    }

    /// Mutable access to the control's head elements.
    pub fn head_elements_mut(&mut self) -> &mut HeadElements {
        &mut self.head_elements
    }

    /// JSON description of the control for template models.
    pub fn to_json(&self) -> JsonValue {
        json!({
            "tag": self.tag,
            "name": self.name,
            "id": self.id,
            "cssSelector": self.css_selector(),
        })
    }
}
