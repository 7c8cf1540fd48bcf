// Copyright 2019-2026 Maravilla Labs, operated by SOLUTAS GmbH, Switzerland
// SPDX-License-Identifier: Apache-2.0
// SPDX-License-Identifier: MIT

//! HTTP server for the source viewer.
//!
//! This is a thin adapter that converts HTTP requests to `PageRequest`,
//! runs the source viewer, and converts `PageResponse` back to HTTP.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use axum::{
    body::Body,
    extract::{RawQuery, State},
    http::{HeaderMap, StatusCode},
    response::{IntoResponse, Response},
    routing::get,
    Router,
};
use pagekit::viewer::{ERROR_KEY, NAME_KEY, SOURCE_KEY, TEMPLATE_SOURCE_KEY};
use pagekit::{
    escape_html, Control, FileSystemResolver, Model, Page, PageRequest, PageResponse,
    ResolverTemplateRenderer, SourceViewer, TemplateBehavior,
};
use tower_http::services::ServeDir;

use crate::config::Config;

/// Path of the source viewer page.
pub const SOURCE_PATH: &str = "/source";
/// Path of the source viewer model endpoint.
pub const SOURCE_JSON_PATH: &str = "/source.json";

const SOURCE_CACHE_CONTROL: &str = "no-cache";

/// Shared application state for the server.
pub struct AppState {
    /// Source viewer reading from the content root.
    pub viewer: SourceViewer,
    /// Renders client templates for head elements.
    pub renderer: ResolverTemplateRenderer,
    /// Application configuration.
    pub config: Config,
    /// Resolved content root.
    pub content_root: PathBuf,
}

impl AppState {
    /// Builds the state for `config`, resolving the content root against
    /// `working_dir`.
    pub fn new(config: Config, working_dir: &Path) -> Self {
        let content_root = working_dir.join(&config.content.root);
        let resolver = FileSystemResolver::new(&content_root);
        Self {
            viewer: SourceViewer::new(resolver.clone()),
            renderer: ResolverTemplateRenderer::new(resolver),
            config,
            content_root,
        }
    }

    /// Runs the source viewer page for `request`.
    pub fn render_source_page(&self, request: &PageRequest) -> PageResponse {
        let model = self.viewer.on_get(request);

        let mut control = Control::new("pre", "source").with_id("source");
        if let Some(template) = &self.config.page.template {
            let page = Page::new("SourceViewer", SOURCE_PATH);
            TemplateBehavior::new(self.config.runtime.behavior_config())
                .with_template(template)
                .attach(&mut control, &page, request);
        }

        let head = match control.head_elements().render(&self.renderer) {
            Ok(head) => head,
            Err(e) => {
                tracing::warn!("Could not render head elements: {}", e);
                String::new()
            }
        };

        let title = match model.get_str(NAME_KEY) {
            Some(name) => format!("{} - {}", name, self.config.project.name),
            None => self.config.project.name.clone(),
        };
        let body = render_body(&model);
        PageResponse::html(200, wrap_with_app_html(&title, &head, &body))
            .with_header("cache-control", SOURCE_CACHE_CONTROL)
    }

    /// Runs the source viewer and returns its model as JSON.
    pub fn render_source_json(&self, request: &PageRequest) -> PageResponse {
        let model = self.viewer.on_get(request);
        PageResponse::json(200, model.into_json())
            .with_header("cache-control", SOURCE_CACHE_CONTROL)
    }
}

/// Creates the router for `state`.
pub fn create_app(state: Arc<AppState>) -> Router {
    let mut app = Router::new()
        .route(SOURCE_PATH, get(source_handler))
        .route(SOURCE_JSON_PATH, get(source_json_handler));

    if let Some(static_dir) = &state.config.content.static_dir {
        app = app.nest_service("/static", ServeDir::new(state.content_root.join(static_dir)));
    }

    app.fallback(fallback_handler).with_state(state)
}

/// Creates and starts the HTTP server.
pub async fn create_server(addr: &str, config: Config) -> anyhow::Result<()> {
    let working_dir = std::env::current_dir()?;
    let state = Arc::new(AppState::new(config, &working_dir));
    tracing::info!("Serving content from {}", state.content_root.display());

    let app = create_app(state);
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

fn to_page_request(path: &str, headers: &HeaderMap, query: Option<String>) -> PageRequest {
    let headers = headers
        .iter()
        .filter_map(|(name, value)| Some((name.as_str(), value.to_str().ok()?.to_string())));
    PageRequest::new(path, "GET")
        .with_headers(headers)
        .with_query_string(query.as_deref().unwrap_or_default())
}

async fn source_handler(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
    RawQuery(query): RawQuery,
) -> Response {
    let request = to_page_request(SOURCE_PATH, &headers, query);
    page_response_to_axum(state.render_source_page(&request))
}

async fn source_json_handler(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
    RawQuery(query): RawQuery,
) -> Response {
    let request = to_page_request(SOURCE_JSON_PATH, &headers, query);
    page_response_to_axum(state.render_source_json(&request))
}

async fn fallback_handler() -> Response {
    page_response_to_axum(PageResponse::not_found("Page not found"))
}

fn render_body(model: &Model) -> String {
    if let Some(error) = model.get_str(ERROR_KEY) {
        return format!("<div class=\"error\">{}</div>", escape_html(error));
    }

    let name = model.get_str(NAME_KEY).unwrap_or_default();
    let (class, listing) = match model.get_str(TEMPLATE_SOURCE_KEY) {
        Some(listing) => ("template-source", listing),
        None => ("source", model.get_str(SOURCE_KEY).unwrap_or_default()),
    };
    format!(
        "<h2>{}</h2>\n<pre id=\"source\" class=\"{}\">{}</pre>",
        escape_html(name),
        class,
        listing
    )
}

fn wrap_with_app_html(title: &str, head: &str, body: &str) -> String {
    APP_HTML
        .replace("%pagekit.title%", &escape_html(title))
        .replace("%pagekit.head%", head)
        .replace("%pagekit.body%", body)
}

/// Convert PageResponse to axum Response
fn page_response_to_axum(response: PageResponse) -> Response {
    match response {
        PageResponse::Html { status, headers, body } => {
            let status_code = StatusCode::from_u16(status).unwrap_or(StatusCode::OK);
            let mut builder = axum::http::Response::builder().status(status_code);
            for (key, value) in headers {
                builder = builder.header(key, value);
            }
            builder = builder.header("content-type", "text/html; charset=utf-8");

            builder.body(Body::from(body)).unwrap_or_else(|_| {
                (StatusCode::INTERNAL_SERVER_ERROR, "Failed to build response").into_response()
            })
        }
        PageResponse::Json { status, headers, body } => {
            let status_code = StatusCode::from_u16(status).unwrap_or(StatusCode::OK);
            let mut builder = axum::http::Response::builder().status(status_code);
            for (key, value) in headers {
                builder = builder.header(key, value);
            }
            builder = builder.header("content-type", "application/json");

            builder
                .body(Body::from(serde_json::to_string(&body).unwrap_or_default()))
                .unwrap_or_else(|_| {
                    (StatusCode::INTERNAL_SERVER_ERROR, "Failed to build response").into_response()
                })
        }
        PageResponse::Error { status, message } => {
            let status_code =
                StatusCode::from_u16(status).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
            (status_code, message).into_response()
        }
    }
}

const APP_HTML: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <title>%pagekit.title%</title>
    <style>
        pre { background: #f8f8f8; border: 1px solid #ddd; padding: 1em; }
        .error { color: #b00; font-weight: bold; }
    </style>
    %pagekit.head%
</head>
<body>
    %pagekit.body%
</body>
</html>
"#;
