// Copyright 2019-2026 Maravilla Labs, operated by SOLUTAS GmbH, Switzerland
// SPDX-License-Identifier: Apache-2.0
// SPDX-License-Identifier: MIT

//! Head elements: script imports and inline scripts rendered into a page's
//! `<head>`.
//!
//! [`HeadElements`] is an ordered list with insert-if-absent semantics.
//! Membership is decided by [`HeadElement`] equality:
//!
//! - imports are equal when their `src` is equal
//! - scripts are equal by `id` when either side has one, otherwise by
//!   content and template

use serde::Serialize;

use crate::error::Result;
use crate::highlight::escape_html;
use crate::model::Model;
use crate::template::TemplateRenderer;

/// An external JavaScript file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct JsImport {
    /// The script URL.
    pub src: String,
}

impl JsImport {
    /// Creates an import of `src`.
    pub fn new(src: impl Into<String>) -> Self {
        Self { src: src.into() }
    }
}

/// An inline script, either literal content or a client template plus model.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct JsScript {
    /// Element id; the identity of the script when present.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// Literal script content.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
    /// Path of a client template rendered with `model`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub template: Option<String>,
    /// Model for `template`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub model: Option<Model>,
}

impl JsScript {
    /// Creates an empty script.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a script with literal content.
    pub fn with_content(content: impl Into<String>) -> Self {
        Self {
            content: Some(content.into()),
            ..Self::default()
        }
    }

    /// Sets the element id.
    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    /// Sets the client template path.
    pub fn template(mut self, template: impl Into<String>) -> Self {
        self.template = Some(template.into());
        self
    }

    /// Sets the template model.
    pub fn model(mut self, model: Model) -> Self {
        self.model = Some(model);
        self
    }
}

impl PartialEq for JsScript {
    fn eq(&self, other: &Self) -> bool {
        if self.id.is_some() || other.id.is_some() {
            return self.id == other.id;
        }
        self.content == other.content && self.template == other.template
    }
}

/// A script declaration attached to a page or control.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum HeadElement {
    /// `<script src="...">`
    JsImport(JsImport),
    /// Inline `<script>`
    JsScript(JsScript),
}

impl From<JsImport> for HeadElement {
    fn from(import: JsImport) -> Self {
        Self::JsImport(import)
    }
}

impl From<JsScript> for HeadElement {
    fn from(script: JsScript) -> Self {
        Self::JsScript(script)
    }
}

impl HeadElement {
    /// Returns the element id, if any.
    pub fn id(&self) -> Option<&str> {
        match self {
            Self::JsImport(_) => None,
            Self::JsScript(script) => script.id.as_deref(),
        }
    }

    /// Renders the element as HTML.
    ///
    /// Template scripts are rendered through `renderer`.
    pub fn render(&self, renderer: &dyn TemplateRenderer) -> Result<String> {
        match self {
            Self::JsImport(import) => Ok(format!(
                "<script type=\"text/javascript\" src=\"{}\"></script>",
                escape_html(&import.src)
            )),
            Self::JsScript(script) => {
                let body = match &script.template {
                    Some(template) => {
                        let empty = Model::new();
                        renderer.render(template, script.model.as_ref().unwrap_or(&empty))?
                    }
                    None => script.content.clone().unwrap_or_default(),
                };
                let id = script
                    .id
                    .as_ref()
                    .map(|id| format!(" id=\"{}\"", escape_html(id)))
                    .unwrap_or_default();
                Ok(format!(
                    "<script type=\"text/javascript\"{}>\n{}\n</script>",
                    id, body
                ))
            }
        }
    }
}

/// An ordered list of head elements with insert-if-absent semantics.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct HeadElements {
    elements: Vec<HeadElement>,
}

impl HeadElements {
    /// Creates an empty list.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns true if an equal element is present.
    pub fn contains(&self, element: &HeadElement) -> bool {
        self.elements.contains(element)
    }

    /// Inserts `element` at `index` unless an equal element is present.
    ///
    /// `index` is clamped to the list length. Returns true if inserted.
    pub fn insert_if_absent(&mut self, index: usize, element: impl Into<HeadElement>) -> bool {
        let element = element.into();
        if self.contains(&element) {
            return false;
        }
        let index = index.min(self.elements.len());
        self.elements.insert(index, element);
        true
    }

    /// Appends `element` unless an equal element is present.
    pub fn push_if_absent(&mut self, element: impl Into<HeadElement>) -> bool {
        let element = element.into();
        if self.contains(&element) {
            return false;
        }
        self.elements.push(element);
        true
    }

    /// Appends `element` unconditionally.
    pub fn push(&mut self, element: impl Into<HeadElement>) {
        self.elements.push(element.into());
    }

    /// Returns the element at `index`.
    pub fn get(&self, index: usize) -> Option<&HeadElement> {
        self.elements.get(index)
    }

    /// Finds the element with the given id.
    pub fn find_by_id(&self, id: &str) -> Option<&HeadElement> {
        self.elements.iter().find(|e| e.id() == Some(id))
    }

    /// Iterates in order.
    pub fn iter(&self) -> std::slice::Iter<'_, HeadElement> {
        self.elements.iter()
    }

    /// Number of elements.
    pub fn len(&self) -> usize {
        self.elements.len()
    }

    /// Returns true if the list is empty.
    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// Renders all elements as HTML, one per line.
    pub fn render(&self, renderer: &dyn TemplateRenderer) -> Result<String> {
        let mut html = String::new();
        for element in &self.elements {
            html.push_str(&element.render(renderer)?);
            html.push('\n');
        }
        Ok(html)
    }
}

impl<'a> IntoIterator for &'a HeadElements {
    type Item = &'a HeadElement;
    type IntoIter = std::slice::Iter<'a, HeadElement>;

    fn into_iter(self) -> Self::IntoIter {
        self.elements.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::memory_resolver::MemoryResourceResolver;
    use crate::template::ResolverTemplateRenderer;

    #[test]
    fn test_import_equality_by_src() {
        assert_eq!(JsImport::new("/a.js"), JsImport::new("/a.js"));
        assert_ne!(JsImport::new("/a.js"), JsImport::new("/b.js"));
    }

    #[test]
    fn test_script_equality_by_id() {
        let a = JsScript::with_content("one").id("tpl");
        let b = JsScript::new().id("tpl");
        assert_eq!(a, b);
        assert_ne!(JsScript::with_content("one").id("x"), JsScript::with_content("one"));
        assert_eq!(JsScript::with_content("one"), JsScript::with_content("one"));
        assert_ne!(JsScript::with_content("one"), JsScript::with_content("two"));
    }

    #[test]
    fn test_import_never_equals_script() {
        let import: HeadElement = JsImport::new("/a.js").into();
        let script: HeadElement = JsScript::with_content("/a.js").into();
        assert_ne!(import, script);
    }

    #[test]
    fn test_insert_if_absent_keeps_order() {
        let mut elements = HeadElements::new();
        elements.push(JsScript::with_content("page script"));

        assert!(elements.insert_if_absent(0, JsImport::new("/jquery.js")));
        assert!(elements.insert_if_absent(1, JsImport::new("/jquery.click.js")));
        assert!(!elements.insert_if_absent(0, JsImport::new("/jquery.js")));
        assert!(!elements.insert_if_absent(1, JsImport::new("/jquery.click.js")));

        assert_eq!(elements.len(), 3);
        assert_eq!(elements.get(0), Some(&HeadElement::from(JsImport::new("/jquery.js"))));
        assert_eq!(elements.get(1), Some(&HeadElement::from(JsImport::new("/jquery.click.js"))));
    }

    #[test]
    fn test_insert_index_is_clamped() {
        let mut elements = HeadElements::new();
        assert!(elements.insert_if_absent(1, JsImport::new("/a.js")));
        assert_eq!(elements.len(), 1);
    }

    #[test]
    fn test_find_by_id() {
        let mut elements = HeadElements::new();
        elements.push_if_absent(JsScript::with_content("x").id("tpl"));
        assert!(!elements.push_if_absent(JsScript::new().id("tpl")));
        assert!(elements.find_by_id("tpl").is_some());
        assert!(elements.find_by_id("other").is_none());
    }

    #[test]
    fn test_render() {
        let mut elements = HeadElements::new();
        elements.push(JsImport::new("/a.js?v=1&x=2"));
        elements.push(JsScript::with_content("var a = 1;").id("init"));
        elements.push(JsScript::new().id("tpl").template("/tpl.js"));

        let resolver = MemoryResourceResolver::new();
        resolver.add_resource("/tpl.js", "var t = 2;");
        let renderer = ResolverTemplateRenderer::new(resolver);
        let html = elements.render(&renderer).unwrap();
        assert_eq!(
            html,
            "<script type=\"text/javascript\" src=\"/a.js?v=1&amp;x=2\"></script>\n\
             <script type=\"text/javascript\" id=\"init\">\nvar a = 1;\n</script>\n\
             <script type=\"text/javascript\" id=\"tpl\">\nvar t = 2;\n</script>\n"
        );
    }
}
