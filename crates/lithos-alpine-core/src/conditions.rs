// SPDX-License-Identifier: Apache-2.0 OR MIT
//! `x-if` / `x-elseif` / `x-else` chains.
//!
//! Alpine has no else branch, so every branch after the first is its own
//! `<template x-if>` whose expression negates all earlier conditions.

use serde::{Deserialize, Serialize};

use crate::error::Error;
use crate::markup::Element;

/// Conditions seen so far in one chain.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ConditionChain {
    conditions: Vec<String>,
}

impl ConditionChain {
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts a chain with the `x-if` condition.
    pub fn starting_with(condition: impl Into<String>) -> Self {
        Self {
            conditions: vec![condition.into()],
        }
    }

    pub fn is_empty(&self) -> bool {
        self.conditions.is_empty()
    }

    pub fn conditions(&self) -> &[String] {
        &self.conditions
    }

    pub fn push(&mut self, condition: impl Into<String>) {
        self.conditions.push(condition.into());
    }

    /// Expression for an `x-elseif` branch; records `condition` for later
    /// branches.
    pub fn elseif_condition(&mut self, condition: &str) -> String {
        let expr = if self.conditions.is_empty() {
            condition.to_string()
        } else {
            format!("{} && ({condition})", self.negated())
        };
        self.conditions.push(condition.to_string());
        expr
    }

    /// Expression for the closing `x-else` branch. Ends the chain.
    pub fn else_condition(&mut self, helper: &'static str) -> Result<String, Error> {
        if self.conditions.is_empty() {
            return Err(Error::ConditionOutsideChain { helper });
        }
        let expr = self.negated();
        self.conditions.clear();
        Ok(expr)
    }

    fn negated(&self) -> String {
        self.conditions
            .iter()
            .map(|c| format!("!({c})"))
            .collect::<Vec<_>>()
            .join(" && ")
    }
}

/// Renders a full chain as sibling `<template x-if>` elements.
///
/// `branches` are `(condition, body)` pairs; `else_body` becomes the final
/// branch when present. `attrs` is applied to every template.
pub fn render_chain(
    branches: &[(String, String)],
    else_body: Option<&str>,
    attrs: &str,
) -> Result<String, Error> {
    let Some(((first, first_body), rest)) = branches.split_first() else {
        return Err(Error::missing("xCond", "condition"));
    };

    let mut chain = ConditionChain::starting_with(first.clone());
    let mut out = branch(first, first_body, attrs);
    for (condition, body) in rest {
        let expr = chain.elseif_condition(condition);
        out.push_str(&branch(&expr, body, attrs));
    }
    if let Some(body) = else_body {
        let expr = chain.else_condition("xCond")?;
        out.push_str(&branch(&expr, body, attrs));
    }
    Ok(out)
}

fn branch(condition: &str, body: &str, attrs: &str) -> String {
    Element::template()
        .attr("x-if", condition)
        .raw_attrs(attrs)
        .body(body)
        .render()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn elseif_negates_previous_branches() {
        let mut chain = ConditionChain::starting_with("a");
        assert_eq!(chain.elseif_condition("b"), "!(a) && (b)");
        assert_eq!(chain.elseif_condition("c"), "!(a) && !(b) && (c)");
        assert_eq!(chain.else_condition("x-else").unwrap(), "!(a) && !(b) && !(c)");
        assert!(chain.is_empty());
    }

    #[test]
    fn else_without_chain_is_error() {
        let mut chain = ConditionChain::new();
        let err = chain.else_condition("x-else").unwrap_err();
        assert_eq!(err, Error::ConditionOutsideChain { helper: "x-else" });
    }

    #[test]
    fn renders_sibling_templates() {
        let html = render_chain(
            &[("a".into(), "A".into()), ("b".into(), "B".into())],
            Some("C"),
            "",
        )
        .unwrap();
        assert_eq!(
            html,
            "<template x-if=\"a\">A</template>\
             <template x-if=\"!(a) && (b)\">B</template>\
             <template x-if=\"!(a) && !(b)\">C</template>"
        );
    }

    #[test]
    fn empty_chain_is_rejected() {
        assert!(render_chain(&[], Some("C"), "").is_err());
    }

    #[test]
    fn serializes_as_plain_list() {
        let chain = ConditionChain::starting_with("open");
        let value = serde_json::to_value(&chain).unwrap();
        assert_eq!(value, serde_json::json!(["open"]));
    }
}
