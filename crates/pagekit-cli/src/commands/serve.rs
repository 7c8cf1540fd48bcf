// Copyright 2019-2026 Maravilla Labs, operated by SOLUTAS GmbH, Switzerland
// SPDX-License-Identifier: Apache-2.0
// SPDX-License-Identifier: MIT

//! Source viewer server command.

use console::style;

use crate::config::Config;
use crate::server;

/// Runs the source viewer server.
///
/// `host` and `port` override the `[server]` section of the configuration.
pub async fn run(config_path: &str, host: Option<String>, port: Option<u16>) -> anyhow::Result<()> {
    let config = Config::load_from(config_path)?;
    let host = host.unwrap_or_else(|| config.server.host.clone());
    let port = port.unwrap_or(config.server.port);
    let addr = format!("{}:{}", host, port);

    println!(
        "{} {}",
        style("Starting source viewer for").cyan().bold(),
        style(&config.project.name).bold()
    );
    println!(
        "{} {}",
        style("Content root:").dim(),
        config.content.root
    );
    println!(
        "{} http://{}/source?filename=...",
        style("Listening on").green(),
        addr
    );
    if let Some(template) = &config.page.template {
        println!("{} {}", style("Client template:").dim(), template);
    }
    println!();

    server::create_server(&addr, config).await
}
