#![forbid(unsafe_code)]
// SPDX-License-Identifier: Apache-2.0 OR MIT
//! `alpine-stdio`: renders Handlebars views with the Alpine.js helpers for a
//! host process talking over stdin/stdout.
//!
//! Each input line is a JSON request; each answer is a single
//! `SUCCESS:<html>:EOF:` or `ERROR:<message>:EOF:` frame. Logs go to stderr.

use std::io;

use anyhow::Context;
use clap::Parser;
use lithos_alpine_hbs::ViewEngine;
use tracing::info;

mod cli;
mod logger;
mod protocol;

fn main() -> anyhow::Result<()> {
    let config = cli::Config::parse();
    logger::init_logger(config.verbose);

    let engine = ViewEngine::new(config.view_options())
        .with_context(|| format!("failed to load views from {}", config.views.display()))?;
    info!(
        views = %config.views.display(),
        layout = %config.main,
        "alpine stdio service is running"
    );

    let handled = protocol::serve(&engine, io::stdin().lock(), io::stdout().lock())?;
    info!(handled, "input closed, shutting down");
    Ok(())
}
