// SPDX-License-Identifier: Apache-2.0 OR MIT
use std::collections::HashMap;

use once_cell::sync::Lazy;
use serde_json::Value;

use crate::args::HelperArgs;
use crate::conditions::ConditionChain;
use crate::directives;
use crate::error::Error;

/// The markup a helper produces.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Directive {
    Alpine,
    Text,
    Html,
    Show,
    If,
    ElseIf,
    Else,
    For,
    Input,
    On,
    Toggle,
    Fetch,
    Ajax,
    Button,
}

impl Directive {
    /// Renders a standalone invocation.
    ///
    /// `ElseIf` and `Else` have no chain to attach to here: an else-if renders
    /// its own condition and an else fails. Engines that track chains call
    /// [`directives::x_elseif`] / [`directives::x_else`] directly.
    pub fn render(self, args: &mut HelperArgs, root: Option<&Value>) -> Result<String, Error> {
        match self {
            Directive::Alpine => directives::alpine(args, root),
            Directive::Text => directives::x_text(args),
            Directive::Html => directives::x_html(args),
            Directive::Show => directives::x_show(args),
            Directive::If => directives::x_if(args),
            Directive::ElseIf => directives::x_elseif(args, &mut ConditionChain::new(), false),
            Directive::Else => directives::x_else(args, &mut ConditionChain::new(), false),
            Directive::For => directives::x_for(args),
            Directive::Input => directives::input(args),
            Directive::On => directives::x_on(args),
            Directive::Toggle => directives::toggle(args),
            Directive::Fetch => directives::x_fetch(args),
            Directive::Ajax => directives::ajax(args),
            Directive::Button => directives::x_btn(args),
        }
    }

    /// Whether the helper only makes sense inside an `x-if` chain.
    pub fn is_chain_branch(self) -> bool {
        matches!(self, Directive::ElseIf | Directive::Else)
    }
}

/// One row of the helper table.
#[derive(Debug, Clone, Copy)]
pub struct HelperSpec {
    /// Canonical (Handlebars) name.
    pub name: &'static str,
    /// Additional Handlebars names.
    pub aliases: &'static [&'static str],
    /// Go-template names registered next to the camel-cased canonical name.
    pub template_aliases: &'static [&'static str],
    pub directive: Directive,
}

impl HelperSpec {
    /// Canonical name followed by every alias.
    pub fn names(&self) -> impl Iterator<Item = &'static str> {
        std::iter::once(self.name).chain(self.aliases.iter().copied())
    }
}

/// Every helper, keyed by its canonical name.
pub static HELPERS: &[HelperSpec] = &[
    HelperSpec {
        name: "alpine",
        aliases: &["x"],
        template_aliases: &["alpineData", "xData"],
        directive: Directive::Alpine,
    },
    HelperSpec {
        name: "x-text",
        aliases: &["txt", "$"],
        template_aliases: &[],
        directive: Directive::Text,
    },
    HelperSpec {
        name: "x-html",
        aliases: &["htm", "$$"],
        template_aliases: &[],
        directive: Directive::Html,
    },
    HelperSpec {
        name: "x-show",
        aliases: &["show"],
        template_aliases: &[],
        directive: Directive::Show,
    },
    HelperSpec {
        name: "x-if",
        aliases: &[],
        template_aliases: &[],
        directive: Directive::If,
    },
    HelperSpec {
        name: "x-elseif",
        aliases: &["elif"],
        template_aliases: &[],
        directive: Directive::ElseIf,
    },
    HelperSpec {
        name: "x-else",
        aliases: &["els"],
        template_aliases: &[],
        directive: Directive::Else,
    },
    HelperSpec {
        name: "x-for",
        aliases: &["for"],
        template_aliases: &[],
        directive: Directive::For,
    },
    HelperSpec {
        name: "input",
        aliases: &["in", "x-in"],
        template_aliases: &["xInput"],
        directive: Directive::Input,
    },
    HelperSpec {
        name: "x-on",
        aliases: &["on"],
        template_aliases: &[],
        directive: Directive::On,
    },
    HelperSpec {
        name: "toggle",
        aliases: &[],
        template_aliases: &["xToggle"],
        directive: Directive::Toggle,
    },
    HelperSpec {
        name: "x-fetch",
        aliases: &["$f"],
        template_aliases: &[],
        directive: Directive::Fetch,
    },
    HelperSpec {
        name: "ajax",
        aliases: &["$a"],
        template_aliases: &["xAjax"],
        directive: Directive::Ajax,
    },
    HelperSpec {
        name: "x-btn",
        aliases: &[],
        template_aliases: &[],
        directive: Directive::Button,
    },
];

static BY_NAME: Lazy<HashMap<&'static str, &'static HelperSpec>> = Lazy::new(|| {
    HELPERS
        .iter()
        .flat_map(|spec| spec.names().map(move |name| (name, spec)))
        .collect()
});

/// Resolves a canonical name or alias.
pub fn lookup(name: &str) -> Option<&'static HelperSpec> {
    BY_NAME.get(name).copied()
}
