#![forbid(unsafe_code)]
// SPDX-License-Identifier: Apache-2.0 OR MIT
//! Alpine.js helpers for Go-style templates rendered by `lithos-gotmpl-engine`.
//!
//! Helper names are the camel-cased Handlebars names (`x-text` becomes
//! `xText`). Go templates have no keyword arguments or block helpers, so a
//! trailing map argument stands in for both:
//!
//! ```text
//! {{ xShow "open" (attrs "e" "section" "content" "<p>Hi</p>") }}
//! ```
//!
//! `x-elseif` / `x-else` are replaced by `xCond`, which renders a whole chain
//! in one call.
//!
//! Helpers never see the template data, so `alpine` takes the component
//! state itself rather than the name of a key: pass `.counter`, not
//! `"counter"`. A string argument is used as a ready-made `x-data`
//! expression.

use lithos_gotmpl_core::{
    install_text_template_functions, FunctionRegistry, FunctionRegistryBuilder,
};

mod functions;

pub use functions::{template_names, CONTENT_KEY};

/// Installs the Go text/template builtins followed by the Alpine helpers.
pub fn install_all(builder: &mut FunctionRegistryBuilder) {
    install_text_template_functions(builder);
    install_alpine_functions(builder);
}

/// Registers the Alpine helpers into an existing function registry builder.
pub fn install_alpine_functions(builder: &mut FunctionRegistryBuilder) {
    functions::register(builder);
}

/// Returns a registry populated with the Go core helpers plus the Alpine
/// helpers.
pub fn alpine_functions() -> FunctionRegistry {
    let mut builder = FunctionRegistryBuilder::new();
    install_all(&mut builder);
    builder.build()
}
