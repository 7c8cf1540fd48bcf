// Copyright 2019-2026 Maravilla Labs, operated by SOLUTAS GmbH, Switzerland
// SPDX-License-Identifier: Apache-2.0
// SPDX-License-Identifier: MIT

//! Renders a single source file without starting a server.

use console::style;
use pagekit::viewer::{ERROR_KEY, NAME_KEY, SOURCE_KEY, TEMPLATE_SOURCE_KEY};
use pagekit::{FileSystemResolver, Model, SourceViewer};

use crate::config::Config;

/// Loads `filename` from the configured content root and prints the
/// rendered listing, or the page model as JSON when `json` is set.
///
/// A failed load is reported on stderr and exits non-zero.
pub fn run(config_path: &str, filename: &str, json: bool) -> anyhow::Result<()> {
    let config = Config::load_from(config_path)?;
    let working_dir = std::env::current_dir()?;
    let viewer = SourceViewer::new(FileSystemResolver::new(working_dir.join(&config.content.root)));

    let model = viewer.load(filename);

    if json {
        println!("{}", serde_json::to_string_pretty(&model)?);
        return Ok(());
    }

    if let Some(error) = model.get_str(ERROR_KEY) {
        eprintln!("{} {}", style("Error:").red().bold(), error);
        anyhow::bail!("{}", error);
    }

    print!("{}", format_listing(&model));
    Ok(())
}

/// Formats a loaded model as a titled listing.
pub fn format_listing(model: &Model) -> String {
    let name = model.get_str(NAME_KEY).unwrap_or_default();
    let listing = model
        .get_str(TEMPLATE_SOURCE_KEY)
        .or_else(|| model.get_str(SOURCE_KEY))
        .unwrap_or_default();
    format!("{}\n\n{}", style(name).bold(), listing)
}
