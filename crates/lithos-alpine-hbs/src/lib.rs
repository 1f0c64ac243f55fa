#![forbid(unsafe_code)]
// SPDX-License-Identifier: Apache-2.0 OR MIT
//! Alpine.js helpers for [handlebars-rust](https://docs.rs/handlebars).
//!
//! ```text
//! {{#alpine "counter"}}
//!   {{#x-on "click" "count++"}}Add{{/x-on}}
//!   {{x-text "count" e="strong"}}
//! {{/alpine}}
//! ```
//!
//! `alpine` looks the primary argument up in the root data first, so the
//! component state can come straight from the render context.

use handlebars::Handlebars;
use lithos_alpine_core::HELPERS;

mod helpers;
pub mod views;

pub use helpers::AlpineHelper;
pub use views::{ViewEngine, ViewError, ViewOptions};

/// Registers every Alpine helper under its canonical name and aliases.
pub fn register_alpine_helpers(registry: &mut Handlebars<'_>) {
    for spec in HELPERS {
        for name in spec.names() {
            registry.register_helper(name, Box::new(AlpineHelper::new(spec)));
        }
    }
}

/// Builds a registry with the Alpine helpers installed.
pub fn alpine_registry() -> Handlebars<'static> {
    let mut registry = Handlebars::new();
    register_alpine_helpers(&mut registry);
    registry
}
