// Copyright 2019-2026 Maravilla Labs, operated by SOLUTAS GmbH, Switzerland
// SPDX-License-Identifier: Apache-2.0
// SPDX-License-Identifier: MIT

//! Integration tests for the source viewer server.
//!
//! These tests run the real router against content in a temp directory.

use std::fs;
use std::path::Path;
use std::sync::Arc;

use axum::http::{HeaderName, HeaderValue};
use axum_test::TestServer;
use serde_json::Value;
use tempfile::tempdir;

use pagekit_cli::config::Config;
use pagekit_cli::server::{create_app, AppState};

/// Create a content root with a few sources
fn setup_content(dir: &Path) {
    let web = dir.join("web");
    fs::create_dir_all(web.join("pages")).unwrap();
    fs::create_dir_all(web.join("templates")).unwrap();
    fs::create_dir_all(web.join("static")).unwrap();

    fs::write(web.join("pages/Hello.java"), "class Hello { String s = \"<b>\"; }\n").unwrap();
    fs::write(web.join("pages/layout.xml"), "<web-app>\n<servlet/>\n</web-app>\n").unwrap();
    fs::write(web.join("pages/index.jsp"), "#if($user)\n<table>\n#end\n").unwrap();
    fs::write(
        web.join("templates/source-viewer.js"),
        "jQuery('$cssSelector').data('url', '$url').data('from', '$request.headers.referer');",
    )
    .unwrap();
    fs::write(web.join("static/site.css"), "pre { color: black; }").unwrap();
}

fn test_server(dir: &Path, config: Config) -> TestServer {
    let state = Arc::new(AppState::new(config, dir));
    TestServer::new(create_app(state)).unwrap()
}

fn tag(name: &str) -> String {
    format!("<font color=\"#00029F\">{}</font>", name)
}

fn red(token: &str) -> String {
    format!("<font color=\"red\">{}</font>", token)
}

#[tokio::test]
async fn test_java_source_is_escaped_only() {
    let dir = tempdir().unwrap();
    setup_content(dir.path());
    let server = test_server(dir.path(), Config::default());

    let response = server
        .get("/source")
        .add_query_param("filename", "pages/Hello.java")
        .await;

    response.assert_status_ok();
    let body = response.text();
    assert!(body.contains("<title>pages/Hello.java - unnamed</title>"));
    assert!(body.contains("class Hello { String s = &quot;&lt;b&gt;&quot;; }\n"));
    assert!(body.contains("class=\"source\""));
}

#[tokio::test]
async fn test_xml_tags_are_highlighted() {
    let dir = tempdir().unwrap();
    setup_content(dir.path());
    let server = test_server(dir.path(), Config::default());

    let response = server
        .get("/source.json")
        .add_query_param("filename", "pages/layout.xml")
        .await;

    response.assert_status_ok();
    assert_eq!(response.header("cache-control"), "no-cache");
    let model: Value = response.json();
    assert_eq!(
        model["source"],
        format!(
            "&lt;{}&gt;\n&lt;{}/&gt;\n&lt;/{}&gt;\n",
            tag("web-app"),
            tag("servlet"),
            tag("web-app")
        )
    );
    assert_eq!(model["name"], "pages/layout.xml");
    assert!(model.get("templateSource").is_none());
}

#[tokio::test]
async fn test_htm_request_falls_back_to_jsp() {
    let dir = tempdir().unwrap();
    setup_content(dir.path());
    let server = test_server(dir.path(), Config::default());

    let response = server
        .get("/source.json")
        .add_query_param("filename", "pages/index.htm")
        .await;

    let model: Value = response.json();
    let expected = format!(
        "{}({})\n&lt;{}&gt;\n{}\n",
        red("#if"),
        format!("{}user", red("$")),
        tag("table"),
        red("#end")
    );
    assert_eq!(model["templateSource"], expected);
    assert_eq!(model["name"], "pages/index.htm");
    assert!(model.get("source").is_none());
}

#[tokio::test]
async fn test_missing_file_reports_last_candidate() {
    let dir = tempdir().unwrap();
    setup_content(dir.path());
    let server = test_server(dir.path(), Config::default());

    let response = server
        .get("/source.json")
        .add_query_param("filename", "missing.htm")
        .await;
    let model: Value = response.json();
    assert_eq!(model["error"], "File /missing.jsp not found");

    let response = server
        .get("/source")
        .add_query_param("filename", "missing.txt")
        .await;
    response.assert_status_ok();
    assert!(response
        .text()
        .contains("<div class=\"error\">File /missing.txt not found</div>"));
}

#[tokio::test]
async fn test_title_uses_project_name() {
    let dir = tempdir().unwrap();
    setup_content(dir.path());
    let config: Config = toml::from_str("[project]\nname = \"examples\"\n").unwrap();
    let server = test_server(dir.path(), config);

    let body = server.get("/source").await.text();
    assert!(body.contains("<title>examples</title>"));

    let body = server
        .get("/source")
        .add_query_param("filename", "pages/layout.xml")
        .await
        .text();
    assert!(body.contains("<title>pages/layout.xml - examples</title>"));
}

#[tokio::test]
async fn test_missing_filename_parameter() {
    let dir = tempdir().unwrap();
    setup_content(dir.path());
    let server = test_server(dir.path(), Config::default());

    let model: Value = server.get("/source.json").await.json();
    assert_eq!(model["error"], "filename not defined");
}

#[tokio::test]
async fn test_escaping_the_content_root_is_an_error() {
    let dir = tempdir().unwrap();
    setup_content(dir.path());
    fs::write(dir.path().join("secret.txt"), "top secret").unwrap();
    let server = test_server(dir.path(), Config::default());

    let model: Value = server
        .get("/source.json")
        .add_query_param("filename", "../secret.txt")
        .await
        .json();
    assert!(model.get("source").is_none());
    assert!(model["error"].as_str().unwrap().contains("escapes the content root"));
}

#[tokio::test]
async fn test_template_behavior_head_elements() {
    let dir = tempdir().unwrap();
    setup_content(dir.path());
    let mut config = Config::default();
    config.page.template = Some("/templates/source-viewer.js".to_string());
    let server = test_server(dir.path(), config);

    let response = server
        .get("/source")
        .add_query_param("filename", "pages/Hello.java")
        .add_header(
            HeaderName::from_static("referer"),
            HeaderValue::from_static("/index.htm"),
        )
        .await;
    assert_eq!(response.header("cache-control"), "no-cache");
    let body = response.text();

    let jquery = body
        .find("src=\"/click-jquery/jquery/jquery-1.4.2.js\"")
        .expect("jquery import");
    let click = body
        .find("src=\"/click-jquery/jquery.click.js\"")
        .expect("jquery click import");
    let debug = body.find("id=\"jquery-click-debug\"").expect("debug script");
    let template = body
        .find("id=\"templates-source-viewer-js\"")
        .expect("template script");
    assert!(jquery < click && click < debug && debug < template);
    assert!(body.contains(
        "jQuery('#source').data('url', '/source').data('from', '/index.htm');"
    ));
}

#[tokio::test]
async fn test_production_mode_omits_debug_script() {
    let dir = tempdir().unwrap();
    setup_content(dir.path());
    let mut config: Config = toml::from_str("[runtime]\nmode = \"production\"\n").unwrap();
    config.page.template = Some("/templates/source-viewer.js".to_string());
    let server = test_server(dir.path(), config);

    let body = server
        .get("/source")
        .add_query_param("filename", "pages/Hello.java")
        .await
        .text();
    assert!(body.contains("id=\"templates-source-viewer-js\""));
    assert!(!body.contains("jquery-click-debug"));
}

#[tokio::test]
async fn test_missing_template_still_renders_page() {
    let dir = tempdir().unwrap();
    setup_content(dir.path());
    let mut config = Config::default();
    config.page.template = Some("/templates/nope.js".to_string());
    let server = test_server(dir.path(), config);

    let response = server
        .get("/source")
        .add_query_param("filename", "pages/Hello.java")
        .await;
    response.assert_status_ok();
    assert!(!response.text().contains("<script"));
}

#[tokio::test]
async fn test_static_files_and_fallback() {
    let dir = tempdir().unwrap();
    setup_content(dir.path());
    let mut config = Config::default();
    config.content.static_dir = Some("static".to_string());
    let server = test_server(dir.path(), config);

    let response = server.get("/static/site.css").await;
    response.assert_status_ok();
    assert_eq!(response.text(), "pre { color: black; }");

    let response = server.get("/elsewhere").await;
    response.assert_status_not_found();
}
