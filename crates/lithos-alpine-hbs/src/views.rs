// SPDX-License-Identifier: Apache-2.0 OR MIT
//! Directory-backed view rendering with layouts and partials.
//!
//! ```text
//! views/
//!   index.hbs
//!   layouts/main.hbs      {{{body}}} receives the rendered view
//!   partials/nav.hbs      available as {{> nav}}
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use handlebars::Handlebars;
use serde_json::{Map, Value};
use thiserror::Error;
use tracing::{debug, warn};

use crate::register_alpine_helpers;

/// Layout name that disables layout wrapping.
pub const NO_LAYOUT: &str = "none";

const EXTENSION: &str = "hbs";

#[derive(Debug, Error)]
pub enum ViewError {
    #[error("view file {path} not found")]
    NotFound { path: PathBuf },
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error(transparent)]
    Template(#[from] handlebars::TemplateError),
    #[error(transparent)]
    Render(#[from] handlebars::RenderError),
}

/// Where views live and which layout wraps them by default.
#[derive(Debug, Clone)]
pub struct ViewOptions {
    pub views_dir: PathBuf,
    pub layouts_dir: PathBuf,
    pub partials_dir: PathBuf,
    pub default_layout: String,
}

impl ViewOptions {
    /// Conventional layout: `layouts/` and `partials/` inside `views_dir`,
    /// default layout `main`.
    pub fn new(views_dir: impl Into<PathBuf>) -> Self {
        let views_dir = views_dir.into();
        Self {
            layouts_dir: views_dir.join("layouts"),
            partials_dir: views_dir.join("partials"),
            views_dir,
            default_layout: "main".to_string(),
        }
    }

    #[must_use]
    pub fn with_default_layout(mut self, layout: impl Into<String>) -> Self {
        self.default_layout = layout.into();
        self
    }
}

/// Handlebars registry preloaded with the Alpine helpers and the partials
/// found under [`ViewOptions::partials_dir`].
pub struct ViewEngine {
    registry: Handlebars<'static>,
    options: ViewOptions,
}

impl ViewEngine {
    pub fn new(options: ViewOptions) -> Result<Self, ViewError> {
        let mut registry = Handlebars::new();
        register_alpine_helpers(&mut registry);
        let mut engine = Self { registry, options };
        engine.load_partials()?;
        Ok(engine)
    }

    pub fn options(&self) -> &ViewOptions {
        &self.options
    }

    /// Access to the underlying registry, e.g. to add more helpers.
    pub fn registry_mut(&mut self) -> &mut Handlebars<'static> {
        &mut self.registry
    }

    /// Registers every file in the partials directory under its file stem.
    /// A missing directory is not an error.
    pub fn load_partials(&mut self) -> Result<usize, ViewError> {
        let dir = self.options.partials_dir.clone();
        if !dir.is_dir() {
            warn!(dir = %dir.display(), "partials directory not found, no partials loaded");
            return Ok(0);
        }

        let entries = fs::read_dir(&dir).map_err(|source| ViewError::Io {
            path: dir.clone(),
            source,
        })?;
        let mut count = 0;
        for entry in entries {
            let path = entry
                .map_err(|source| ViewError::Io {
                    path: dir.clone(),
                    source,
                })?
                .path();
            if !path.is_file() {
                continue;
            }
            let Some(name) = path.file_stem().and_then(|s| s.to_str()) else {
                continue;
            };
            let source = read(&path)?;
            self.registry.register_partial(name, source)?;
            count += 1;
        }
        debug!(dir = %dir.display(), count, "loaded partials");
        Ok(count)
    }

    /// Renders `views_dir/<view>.hbs`, wrapped in `layout` (or the default
    /// layout when `None`).
    pub fn render(
        &self,
        view: &str,
        data: &Value,
        layout: Option<&str>,
    ) -> Result<String, ViewError> {
        let path = template_path(&self.options.views_dir, view);
        if !path.is_file() {
            return Err(ViewError::NotFound { path });
        }
        let source = read(&path)?;
        self.render_source(&source, data, layout)
    }

    /// Renders inline template source, wrapped in a layout the same way as
    /// [`render`](Self::render).
    pub fn render_source(
        &self,
        source: &str,
        data: &Value,
        layout: Option<&str>,
    ) -> Result<String, ViewError> {
        let body = self.registry.render_template(source, data)?;

        let layout = layout.unwrap_or(&self.options.default_layout);
        if layout.is_empty() || layout == NO_LAYOUT {
            return Ok(body);
        }

        let layout_path = template_path(&self.options.layouts_dir, layout);
        if !layout_path.is_file() {
            warn!(
                layout = %layout_path.display(),
                "layout file not found, using view-only rendering"
            );
            return Ok(body);
        }

        let layout_source = read(&layout_path)?;
        let html = self
            .registry
            .render_template(&layout_source, &with_body(data, body))?;
        Ok(html)
    }
}

/// Accepts names with or without the `.hbs` extension.
fn template_path(dir: &Path, name: &str) -> PathBuf {
    let path = dir.join(name);
    if path.extension().is_some_and(|ext| ext == EXTENSION) {
        path
    } else {
        dir.join(format!("{name}.{EXTENSION}"))
    }
}

fn read(path: &Path) -> Result<String, ViewError> {
    fs::read_to_string(path).map_err(|source| ViewError::Io {
        path: path.to_path_buf(),
        source,
    })
}

fn with_body(data: &Value, body: String) -> Value {
    let mut map = match data {
        Value::Object(map) => map.clone(),
        _ => Map::new(),
    };
    map.insert("body".to_string(), Value::String(body));
    Value::Object(map)
}
