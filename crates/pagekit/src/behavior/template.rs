// Copyright 2019-2026 Maravilla Labs, operated by SOLUTAS GmbH, Switzerland
// SPDX-License-Identifier: Apache-2.0
// SPDX-License-Identifier: MIT

//! Ajax template behavior.
//!
//! Attaches a client-side template to a control. On [`TemplateBehavior::attach`]
//! the behavior makes sure the jQuery imports are present, then registers a
//! [`JsScript`] carrying the template path and a freshly built model.
//!
//! # Template Model
//!
//! The behavior's own model is copied first, then these reserved keys are
//! added in order:
//!
//! - `path`: the page path
//! - `url`: the Ajax request URL (defaults to the request URI)
//! - `request`: the current request
//! - `context`: the application context path
//! - `type`: the Ajax request type (default `GET`)
//! - `format`: the page format, when the page has one
//! - `pageMessages`: the page messages
//! - `messages`: the behavior messages
//! - `cssSelector`: the CSS selector of the control
//! - `control`: the control
//!
//! A user model entry under a reserved key is replaced. On stateless pages
//! the replacement is logged as a warning.

use std::collections::BTreeMap;

use serde_json::{json, Value as JsonValue};

use crate::behavior::BehaviorConfig;
use crate::head::{HeadElement, JsScript};
use crate::model::Model;
use crate::page::{Control, Page};
use crate::request::PageRequest;

/// Adds a reserved entry to a template model.
///
/// Returns the replaced value. A replacement on a stateless page is logged
/// as a warning.
pub fn add_model(
    model: &mut Model,
    key: &str,
    value: impl Into<JsonValue>,
    page: &Page,
) -> Option<JsonValue> {
    let previous = model.insert(key, value);

    if let Some(ref old) = previous {
        if !page.stateful {
            tracing::warn!(
                "{} on {} model contains an object keyed with reserved name \"{}\". \
                 The behavior model object {} has been replaced with the {} object",
                page.type_name,
                page.path,
                key,
                old,
                key
            );
        }
    }

    previous
}

/// Derives a script id from a template path: the leading `/` is dropped and
/// every `/` and `.` becomes `-`.
pub fn template_id_for(template: &str) -> String {
    template
        .strip_prefix('/')
        .unwrap_or(template)
        .replace(['/', '.'], "-")
}

/// Behavior adding an Ajax-driven client template to a control.
#[derive(Debug, Clone)]
pub struct TemplateBehavior {
    config: BehaviorConfig,
    template: Option<String>,
    template_id: Option<String>,
    model: Model,
    request_type: String,
    url: Option<String>,
    messages: BTreeMap<String, String>,
}

impl TemplateBehavior {
    /// Creates a behavior without a template.
    pub fn new(config: BehaviorConfig) -> Self {
        Self {
            config,
            template: None,
            template_id: None,
            model: Model::new(),
            request_type: "GET".to_string(),
            url: None,
            messages: BTreeMap::new(),
        }
    }

    /// Sets the client template path.
    pub fn with_template(mut self, template: impl Into<String>) -> Self {
        self.template = Some(template.into());
        self
    }

    /// Overrides the script id derived from the template path.
    pub fn with_template_id(mut self, template_id: impl Into<String>) -> Self {
        self.template_id = Some(template_id.into());
        self
    }

    /// Sets the Ajax request type, e.g. `GET` or `POST`.
    pub fn with_type(mut self, request_type: impl Into<String>) -> Self {
        self.request_type = request_type.into();
        self
    }

    /// Sets the Ajax request URL.
    pub fn with_url(mut self, url: impl Into<String>) -> Self {
        self.url = Some(url.into());
        self
    }

    /// Adds a behavior message.
    pub fn with_message(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.messages.insert(key.into(), value.into());
        self
    }

    /// The template path, if set.
    pub fn template(&self) -> Option<&str> {
        self.template.as_deref()
    }

    /// The script id of the template, if a template is set.
    pub fn template_id(&self) -> Option<String> {
        self.template_id
            .clone()
            .or_else(|| self.template.as_deref().map(template_id_for))
    }

    /// The Ajax request type.
    pub fn request_type(&self) -> &str {
        &self.request_type
    }

    /// The Ajax request URL; the request URI unless set explicitly.
    pub fn url(&self, request: &PageRequest) -> String {
        self.url.clone().unwrap_or_else(|| request.request_uri())
    }

    /// The user model merged into every template model.
    pub fn model(&self) -> &Model {
        &self.model
    }

    /// Mutable access to the user model.
    pub fn model_mut(&mut self) -> &mut Model {
        &mut self.model
    }

    /// Builds the template model for `control` on `page`.
    pub fn create_template_model(
        &self,
        control: &Control,
        page: &Page,
        request: &PageRequest,
    ) -> Model {
        let mut model = self.model.clone();

        add_model(&mut model, "path", page.path.as_str(), page);
        add_model(&mut model, "url", self.url(request), page);
        add_model(&mut model, "request", request_json(request), page);
        add_model(&mut model, "context", request.context_path.as_str(), page);
        add_model(&mut model, "type", self.request_type.as_str(), page);

        if let Some(format) = &page.format {
            add_model(&mut model, "format", format.clone(), page);
        }

        add_model(&mut model, "pageMessages", json!(page.messages), page);
        add_model(&mut model, "messages", json!(self.messages), page);
        add_model(&mut model, "cssSelector", control.css_selector(), page);
        add_model(&mut model, "control", control.to_json(), page);

        model
    }

    /// Adds the script imports and the template to the control's head
    /// elements.
    ///
    /// Safe to call repeatedly: imports, the debug script and the template
    /// script are each added at most once.
    pub fn attach(&self, control: &mut Control, page: &Page, request: &PageRequest) {
        self.config.add_head_elements(control.head_elements_mut());
        self.add_template(control, page, request);
    }

    fn add_template(&self, control: &mut Control, page: &Page, request: &PageRequest) {
        let Some(template) = self.template.as_deref().filter(|t| !t.trim().is_empty()) else {
            return;
        };
        let Some(template_id) = self.template_id() else {
            return;
        };

        let probe = HeadElement::from(JsScript::new().id(template_id.as_str()));
        if control.head_elements().contains(&probe) {
            tracing::debug!("Template {} already attached to {}", template_id, control.name);
            return;
        }

        let model = self.create_template_model(control, page, request);
        let script = JsScript::new()
            .id(template_id)
            .template(template)
            .model(model);
        control.head_elements_mut().push(script);
    }
}

fn request_json(request: &PageRequest) -> JsonValue {
    json!({
        "method": request.method,
        "path": request.path,
        "contextPath": request.context_path,
        "requestURI": request.request_uri(),
        "parameters": request.query,
        "headers": request.headers,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::behavior::{Mode, DEBUG_SCRIPT_ID, DEFAULT_JQUERY_CLICK_PATH, DEFAULT_JQUERY_PATH};
    use crate::head::JsImport;
    use std::io;
    use std::sync::{Arc, Mutex};

    #[derive(Clone, Default)]
    struct LogBuffer(Arc<Mutex<Vec<u8>>>);

    impl io::Write for LogBuffer {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    fn count_warnings<F: FnOnce()>(f: F) -> usize {
        let buffer = LogBuffer::default();
        let writer = buffer.clone();
        let subscriber = tracing_subscriber::fmt()
            .with_writer(move || writer.clone())
            .with_ansi(false)
            .with_max_level(tracing::Level::WARN)
            .finish();
        tracing::subscriber::with_default(subscriber, f);

        let output = String::from_utf8(buffer.0.lock().unwrap().clone()).unwrap();
        output.lines().filter(|line| line.contains("WARN")).count()
    }

    fn request() -> PageRequest {
        PageRequest::new("/customers.htm", "GET")
            .with_context_path("/examples")
            .with_query_string("page=2")
            .with_headers([("Accept-Language", "de-CH")])
    }

    fn behavior() -> TemplateBehavior {
        TemplateBehavior::new(BehaviorConfig::new(Mode::Development))
            .with_template("/templates/customers.js")
            .with_message("loading", "Loading...")
    }

    fn template_script(control: &Control) -> &JsScript {
        match control.head_elements().find_by_id("templates-customers-js") {
            Some(HeadElement::JsScript(script)) => script,
            other => panic!("Expected template script, got {:?}", other),
        }
    }

    #[test]
    fn test_template_id_derivation() {
        assert_eq!(template_id_for("/templates/customers.js"), "templates-customers-js");
        assert_eq!(template_id_for("a/b.c.js"), "a-b-c-js");
        assert_eq!(
            behavior().with_template_id("custom").template_id().as_deref(),
            Some("custom")
        );
        assert_eq!(TemplateBehavior::new(BehaviorConfig::default()).template_id(), None);
    }

    #[test]
    fn test_attach_adds_imports_debug_and_template() {
        let mut control = Control::new("table", "customers").with_id("customers");
        let page = Page::new("CustomerPage", "/customers.htm");
        behavior().attach(&mut control, &page, &request());

        let elements = control.head_elements();
        assert_eq!(elements.len(), 4);
        assert_eq!(
            elements.get(0),
            Some(&HeadElement::from(JsImport::new(DEFAULT_JQUERY_PATH)))
        );
        assert_eq!(
            elements.get(1),
            Some(&HeadElement::from(JsImport::new(DEFAULT_JQUERY_CLICK_PATH)))
        );
        assert_eq!(elements.get(2).and_then(HeadElement::id), Some(DEBUG_SCRIPT_ID));

        let script = template_script(&control);
        assert_eq!(script.template.as_deref(), Some("/templates/customers.js"));
    }

    #[test]
    fn test_imports_go_before_existing_elements() {
        let mut control = Control::new("form", "search");
        control
            .head_elements_mut()
            .push(JsScript::with_content("var page = 1;"));
        let page = Page::new("SearchPage", "/search.htm");

        TemplateBehavior::new(BehaviorConfig::new(Mode::Production)).attach(
            &mut control,
            &page,
            &request(),
        );

        let elements = control.head_elements();
        assert_eq!(elements.len(), 3);
        assert!(matches!(elements.get(0), Some(HeadElement::JsImport(_))));
        assert!(matches!(elements.get(1), Some(HeadElement::JsImport(_))));
        assert!(matches!(elements.get(2), Some(HeadElement::JsScript(_))));
    }

    #[test]
    fn test_attach_twice_is_idempotent() {
        let mut control = Control::new("table", "customers");
        let page = Page::new("CustomerPage", "/customers.htm").with_stateful(true);
        let behavior = behavior();

        behavior.attach(&mut control, &page, &request());
        let first = control.head_elements().clone();
        behavior.attach(&mut control, &page, &request());

        assert_eq!(control.head_elements(), &first);
        assert_eq!(control.head_elements().len(), 4);
    }

    #[test]
    fn test_blank_template_adds_only_imports() {
        let mut control = Control::new("div", "panel");
        let page = Page::new("PanelPage", "/panel.htm");
        TemplateBehavior::new(BehaviorConfig::new(Mode::Profile))
            .with_template("   ")
            .attach(&mut control, &page, &request());

        assert_eq!(control.head_elements().len(), 2);
    }

    #[test]
    fn test_template_model_contents() {
        let control = Control::new("table", "customers").with_id("customers");
        let page = Page::new("CustomerPage", "/customers.htm")
            .with_message("title", "Customers")
            .with_format(json!({"currency": "EUR"}));

        let mut behavior = behavior().with_type("POST");
        behavior.model_mut().insert("rows", 25);
        let model = behavior.create_template_model(&control, &page, &request());

        assert_eq!(model.get_str("path"), Some("/customers.htm"));
        assert_eq!(model.get_str("url"), Some("/examples/customers.htm"));
        assert_eq!(model.get_str("context"), Some("/examples"));
        assert_eq!(model.get_str("type"), Some("POST"));
        assert_eq!(model.get("format"), Some(&json!({"currency": "EUR"})));
        assert_eq!(model.get("pageMessages"), Some(&json!({"title": "Customers"})));
        assert_eq!(model.get("messages"), Some(&json!({"loading": "Loading..."})));
        assert_eq!(model.get_str("cssSelector"), Some("#customers"));
        assert_eq!(model.get("control").and_then(|c| c.get("name")), Some(&json!("customers")));
        assert_eq!(
            model.get("request").and_then(|r| r.get("parameters")),
            Some(&json!({"page": "2"}))
        );
        assert_eq!(
            model.get("request").and_then(|r| r.get("headers")),
            Some(&json!({"accept-language": "de-CH"}))
        );
        assert_eq!(model.get("rows"), Some(&json!(25)));
    }

    #[test]
    fn test_format_is_omitted_without_page_format() {
        let control = Control::new("table", "customers");
        let page = Page::new("CustomerPage", "/customers.htm");
        let model = behavior().create_template_model(&control, &page, &request());
        assert!(!model.contains_key("format"));
        assert_eq!(model.get_str("url"), Some("/examples/customers.htm"));
    }

    #[test]
    fn test_explicit_url() {
        let behavior = behavior().with_url("/api/customers");
        assert_eq!(behavior.url(&request()), "/api/customers");
    }

    #[test]
    fn test_stateless_collision_warns_once() {
        let mut behavior = behavior();
        behavior.model_mut().insert("path", "/mine");
        let mut control = Control::new("table", "customers");
        let page = Page::new("CustomerPage", "/customers.htm");

        let warnings = count_warnings(|| behavior.attach(&mut control, &page, &request()));
        assert_eq!(warnings, 1);
        assert_eq!(
            template_script(&control).model.as_ref().and_then(|m| m.get_str("path")),
            Some("/customers.htm")
        );
    }

    #[test]
    fn test_stateful_collision_does_not_warn() {
        let mut behavior = behavior();
        behavior.model_mut().insert("path", "/mine");
        let mut control = Control::new("table", "customers");
        let page = Page::new("CustomerPage", "/customers.htm").with_stateful(true);

        let warnings = count_warnings(|| behavior.attach(&mut control, &page, &request()));
        assert_eq!(warnings, 0);
    }

    #[test]
    fn test_no_collision_no_warning() {
        let mut control = Control::new("table", "customers");
        let page = Page::new("CustomerPage", "/customers.htm");
        let warnings = count_warnings(|| behavior().attach(&mut control, &page, &request()));
        assert_eq!(warnings, 0);
    }

    #[test]
    fn test_add_model_returns_previous() {
        let mut model = Model::new();
        let page = Page::new("P", "/p.htm").with_stateful(true);
        assert_eq!(add_model(&mut model, "type", "GET", &page), None);
        assert_eq!(add_model(&mut model, "type", "POST", &page), Some(json!("GET")));
    }
}
