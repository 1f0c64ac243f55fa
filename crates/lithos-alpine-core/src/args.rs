// SPDX-License-Identifier: Apache-2.0 OR MIT
//! Argument model shared by every helper.
//!
//! Template engines hand helpers a list of positional values, a keyword map
//! and, for block invocations, the rendered body. [`HelperArgs`] normalises
//! those three inputs so the directive builders can pull out the entries they
//! understand and render whatever is left as plain HTML attributes:
//!
//! ```text
//! {{x-text "count" "h1" class="big"}}  ->  <h1 x-text="count" class="big"></h1>
//! ```

use serde_json::{Map, Value};

use crate::error::Error;
use crate::markup::escape_attr;

/// Normalised helper invocation.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct HelperArgs {
    positional: Vec<Value>,
    hash: Map<String, Value>,
    inner: Option<String>,
}

impl HelperArgs {
    /// Builds the argument set from the raw engine inputs.
    pub fn normalize(
        positional: Vec<Value>,
        hash: Map<String, Value>,
        inner: Option<String>,
    ) -> Self {
        Self {
            positional,
            hash,
            inner,
        }
    }

    /// Positional-only invocation, mostly useful in tests and examples.
    pub fn from_positional<I, V>(values: I) -> Self
    where
        I: IntoIterator<Item = V>,
        V: Into<Value>,
    {
        Self::normalize(values.into_iter().map(Into::into).collect(), Map::new(), None)
    }

    /// Adds a keyword argument, replacing any previous value for `key`.
    #[must_use]
    pub fn with_hash(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.hash.insert(key.into(), value.into());
        self
    }

    /// Sets the rendered block body.
    #[must_use]
    pub fn with_inner(mut self, inner: impl Into<String>) -> Self {
        self.inner = Some(inner.into());
        self
    }

    pub fn positional(&self) -> &[Value] {
        &self.positional
    }

    pub fn hash(&self) -> &Map<String, Value> {
        &self.hash
    }

    /// Rendered block body, if the helper was invoked as a block and the body
    /// produced any output.
    pub fn inner(&self) -> Option<&str> {
        self.inner.as_deref().filter(|body| !body.is_empty())
    }

    /// First positional argument as raw JSON.
    pub fn primary_value(&self) -> Option<&Value> {
        self.positional.first()
    }

    /// First positional argument rendered as text; empty when absent.
    pub fn primary(&self) -> String {
        self.positional.first().map(value_to_text).unwrap_or_default()
    }

    /// Like [`primary`](Self::primary) but rejects invocations without one.
    pub fn require_primary(&self, helper: &'static str) -> Result<String, Error> {
        match self.positional.first() {
            Some(value) if !value.is_null() => Ok(value_to_text(value)),
            _ => Err(Error::missing(helper, "primary")),
        }
    }

    /// Consumes the primary argument. The slot stays behind as `null` so the
    /// remaining positionals keep their indexes and are still rendered as
    /// attributes.
    pub fn take_primary(&mut self) -> Option<String> {
        let slot = self.positional.first_mut()?;
        let value = std::mem::take(slot);
        Some(value).filter(is_truthy).map(|v| value_to_text(&v))
    }

    /// Removes `key` from the hash. Returns the text only when the removed
    /// value is truthy.
    pub fn cut_hash(&mut self, key: &str) -> Option<String> {
        self.hash.remove(key).filter(is_truthy).map(|v| value_to_text(&v))
    }

    /// Removes the positional argument at `index`, shifting later entries
    /// down. Returns the text only when the removed value is truthy.
    pub fn cut_positional(&mut self, index: usize) -> Option<String> {
        if index >= self.positional.len() {
            return None;
        }
        let value = self.positional.remove(index);
        Some(value).filter(is_truthy).map(|v| value_to_text(&v))
    }

    /// Reads a value from the hash, falling back to a positional slot.
    ///
    /// The positional entry is only consumed when the hash did not provide a
    /// usable value, so an explicit keyword leaves the positional in place to
    /// be rendered as an attribute.
    pub fn cut_hash_or_positional(&mut self, key: &str, index: usize) -> Option<String> {
        self.cut_hash(key).or_else(|| self.cut_positional(index))
    }

    /// Renders whatever was not cut as HTML attributes: positionals after
    /// the primary one as bare attributes, then hash entries as
    /// `key="value"`.
    pub fn attributes(&self) -> String {
        let bare = self.positional.iter().skip(1).map(value_to_text);
        let keyed = self
            .hash
            .iter()
            .map(|(key, value)| format!("{key}=\"{}\"", escape_attr(&value_to_text(value))));
        bare.chain(keyed)
            .filter(|attr| !attr.is_empty())
            .collect::<Vec<_>>()
            .join(" ")
    }
}

/// Text rendering used for every interpolated argument.
pub fn value_to_text(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::Bool(b) => b.to_string(),
        Value::Number(n) => {
            if let Some(i) = n.as_i64() {
                i.to_string()
            } else if let Some(u) = n.as_u64() {
                u.to_string()
            } else {
                let mut s = n.to_string();
                if s.contains('.') {
                    while s.ends_with('0') {
                        s.pop();
                    }
                    if s.ends_with('.') {
                        s.pop();
                    }
                }
                s
            }
        }
        Value::String(s) => s.clone(),
        Value::Array(_) | Value::Object(_) => serde_json::to_string(value).unwrap_or_default(),
    }
}

/// JavaScript truthiness, which decides whether a cut value counts.
pub fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0 && !f.is_nan()),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}
