#![forbid(unsafe_code)]
// SPDX-License-Identifier: Apache-2.0 OR MIT
//! Engine-agnostic building blocks for Alpine.js template helpers.
//!
//! The helpers themselves are plain string builders: they take a
//! [`HelperArgs`] (positional values, keyword hash and optional block body)
//! and return an HTML fragment. The `lithos-alpine-gotmpl` and
//! `lithos-alpine-hbs` crates wire the [`HELPERS`] table into their engines.

pub mod args;
pub mod conditions;
pub mod directives;
mod error;
pub mod literal;
pub mod markup;
pub mod registry;
pub mod telemetry;

pub use args::{is_truthy, value_to_text, HelperArgs};
pub use conditions::{render_chain, ConditionChain};
pub use error::Error;
pub use literal::{persist_literal, to_js_literal};
pub use markup::Element;
pub use registry::{lookup, Directive, HelperSpec, HELPERS};

/// Renders `name` (canonical or alias) with the given arguments.
///
/// Records the invocation when telemetry is enabled.
pub fn render_helper(
    name: &str,
    args: &mut HelperArgs,
    root: Option<&serde_json::Value>,
) -> Result<String, Error> {
    let spec = lookup(name)
        .ok_or_else(|| Error::invalid("render_helper", format!("unknown helper {name}")))?;
    let result = spec.directive.render(args, root);
    telemetry::record_helper_invocation(spec.name, "direct", result.is_ok());
    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renders_by_alias() {
        let mut args = HelperArgs::from_positional(["count"]);
        let html = render_helper("$", &mut args, None).unwrap();
        assert_eq!(html, "<span x-text=\"count\"></span>");
    }

    #[test]
    fn unknown_helper_is_error() {
        let mut args = HelperArgs::default();
        let err = render_helper("x-model", &mut args, None).unwrap_err();
        assert!(err.to_string().contains("unknown helper x-model"));
    }
}
