// Copyright 2019-2026 Maravilla Labs, operated by SOLUTAS GmbH, Switzerland
// SPDX-License-Identifier: Apache-2.0
// SPDX-License-Identifier: MIT

use clap::{Parser, Subcommand};
use pagekit_cli::commands;
use pagekit_cli::config::CONFIG_FILE;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "pagekit")]
#[command(author = "Maravilla Labs")]
#[command(version)]
#[command(about = "Highlighted source viewer and page behaviors", long_about = None)]
struct Cli {
    /// Log level: error, warn, info, debug, trace
    #[arg(long, global = true, default_value = "warn")]
    log_level: String,

    /// Configuration file
    #[arg(long, global = true, default_value = CONFIG_FILE)]
    config: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Render a source file from the content root
    View {
        /// File name relative to the content root
        filename: String,
        /// Print the page model as JSON
        #[arg(long)]
        json: bool,
    },
    /// Serve the source viewer page
    Serve {
        /// Port to run the server on (overrides config)
        #[arg(short, long)]
        port: Option<u16>,
        /// Host to bind to (overrides config)
        #[arg(long)]
        host: Option<String>,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Initialize tracing with the specified log level
    let filter = EnvFilter::try_new(&cli.log_level)
        .unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .init();

    match cli.command {
        Commands::View { filename, json } => {
            commands::view::run(&cli.config, &filename, json)
        }
        Commands::Serve { port, host } => {
            commands::serve::run(&cli.config, host, port).await
        }
    }
}
