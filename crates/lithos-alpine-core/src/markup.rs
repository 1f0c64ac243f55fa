// SPDX-License-Identifier: Apache-2.0 OR MIT
use std::fmt::Write as _;

/// Escapes a value for use inside a double-quoted attribute.
pub fn escape_attr(value: &str) -> String {
    if value.contains('"') {
        value.replace('"', "&quot;")
    } else {
        value.to_string()
    }
}

/// Small builder for the HTML fragments emitted by the helpers.
#[derive(Debug, Clone)]
pub struct Element {
    tag: String,
    attrs: Vec<(String, String)>,
    extra: String,
    body: Option<String>,
    void: bool,
}

impl Element {
    pub fn new(tag: impl Into<String>) -> Self {
        Self {
            tag: tag.into(),
            attrs: Vec::new(),
            extra: String::new(),
            body: None,
            void: false,
        }
    }

    /// `<template>` wrapper used by `x-if` and `x-for`.
    pub fn template() -> Self {
        Self::new("template")
    }

    #[must_use]
    pub fn attr(mut self, name: impl Into<String>, value: impl AsRef<str>) -> Self {
        self.attrs.push((name.into(), escape_attr(value.as_ref())));
        self
    }

    /// Appends a pre-rendered attribute string (see
    /// [`HelperArgs::attributes`](crate::HelperArgs::attributes)).
    #[must_use]
    pub fn raw_attrs(mut self, attrs: impl AsRef<str>) -> Self {
        let attrs = attrs.as_ref().trim();
        if !attrs.is_empty() {
            if !self.extra.is_empty() {
                self.extra.push(' ');
            }
            self.extra.push_str(attrs);
        }
        self
    }

    #[must_use]
    pub fn body(mut self, body: impl Into<String>) -> Self {
        self.body = Some(body.into());
        self
    }

    /// Renders as `<tag ... />` without a closing tag.
    #[must_use]
    pub fn void(mut self) -> Self {
        self.void = true;
        self
    }

    /// Opening tag only, for fragments that are closed elsewhere.
    pub fn open_tag(&self) -> String {
        let mut out = String::new();
        self.write_open(&mut out);
        out.push('>');
        out
    }

    fn write_open(&self, out: &mut String) {
        out.push('<');
        out.push_str(&self.tag);
        for (name, value) in &self.attrs {
            let _ = write!(out, " {name}=\"{value}\"");
        }
        if !self.extra.is_empty() {
            out.push(' ');
            out.push_str(&self.extra);
        }
    }

    pub fn render(&self) -> String {
        let mut out = String::new();
        self.write_open(&mut out);
        if self.void {
            out.push_str(" />");
            return out;
        }
        out.push('>');
        if let Some(body) = &self.body {
            out.push_str(body);
        }
        let _ = write!(out, "</{}>", self.tag);
        out
    }
}
