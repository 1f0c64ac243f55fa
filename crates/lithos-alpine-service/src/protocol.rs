// SPDX-License-Identifier: Apache-2.0 OR MIT
//! Request parsing and response framing.

use std::fmt;
use std::io::{self, BufRead, Write};

use anyhow::{bail, Context};
use lithos_alpine_hbs::ViewEngine;
use serde::Deserialize;
use serde_json::Value;
use tracing::{debug, warn};

/// One render request. `templateContent` wins over `template` when both are
/// present.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Request {
    /// View file name relative to the views directory.
    #[serde(default)]
    pub template: Option<String>,
    /// Inline template source.
    #[serde(default)]
    pub template_content: Option<String>,
    #[serde(default)]
    pub context: Value,
    /// Layout override; `none` disables wrapping.
    #[serde(default)]
    pub layout: Option<String>,
}

#[derive(Debug, PartialEq, Eq)]
pub enum Response {
    Success(String),
    Error(String),
}

impl fmt::Display for Response {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Response::Success(html) => write!(f, "SUCCESS:{html}:EOF:"),
            Response::Error(message) => write!(f, "ERROR:{message}:EOF:"),
        }
    }
}

/// Answers every non-blank input line with one framed response line.
/// Returns the number of requests handled once the input is exhausted.
pub fn serve<R: BufRead, W: Write>(
    engine: &ViewEngine,
    mut input: R,
    mut output: W,
) -> io::Result<usize> {
    let mut handled = 0;
    let mut buf = Vec::new();
    loop {
        buf.clear();
        if input.read_until(b'\n', &mut buf)? == 0 {
            return Ok(handled);
        }
        let response = match std::str::from_utf8(&buf) {
            Ok(line) if line.trim().is_empty() => continue,
            Ok(line) => handle_line(engine, line.trim()),
            Err(err) => {
                warn!(error = %err, "request line is not valid UTF-8");
                Response::Error(format!("request is not valid UTF-8: {err}"))
            }
        };
        writeln!(output, "{response}")?;
        output.flush()?;
        handled += 1;
    }
}

pub fn handle_line(engine: &ViewEngine, line: &str) -> Response {
    match render_request(engine, line) {
        Ok(html) => Response::Success(html),
        Err(err) => {
            warn!(error = %format!("{err:#}"), "render request failed");
            Response::Error(format!("{err:#}"))
        }
    }
}

fn render_request(engine: &ViewEngine, line: &str) -> anyhow::Result<String> {
    let request: Request = serde_json::from_str(line).context("invalid request")?;
    let layout = request.layout.as_deref();
    let html = match (request.template_content, request.template) {
        (Some(source), _) => engine.render_source(&source, &request.context, layout)?,
        (None, Some(view)) => {
            debug!(view = %view, "rendering view");
            engine
                .render(&view, &request.context, layout)
                .with_context(|| format!("failed to render {view}"))?
        }
        (None, None) => bail!("request needs either `template` or `templateContent`"),
    };
    Ok(html)
}
