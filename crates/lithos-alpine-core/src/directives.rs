// SPDX-License-Identifier: Apache-2.0 OR MIT
//! One builder per Alpine helper.
//!
//! Every builder consumes the arguments it understands from [`HelperArgs`]
//! and renders the rest through [`HelperArgs::attributes`], so the order of
//! the `cut_*` calls decides which leftovers end up as attributes.

use serde_json::Value;

use crate::args::HelperArgs;
use crate::conditions::ConditionChain;
use crate::error::Error;
use crate::literal::{js_string, persist_literal};
use crate::markup::Element;

const HTTP_VERBS: [&str; 5] = ["GET", "POST", "PUT", "PATCH", "DELETE"];

/// `x-data` wrapper.
///
/// When `root` is an object holding a key named by the primary argument, that
/// value becomes the component state; otherwise the argument itself is used.
/// Strings are taken as ready-made expressions unless `persist` keys ask for
/// them to be parsed.
pub fn alpine(args: &mut HelperArgs, root: Option<&Value>) -> Result<String, Error> {
    let primary = args
        .primary_value()
        .cloned()
        .filter(|v| !v.is_null())
        .ok_or_else(|| Error::missing("alpine", "data"))?;
    let persist = args
        .cut_hash("persist")
        .or_else(|| args.cut_hash("$p"))
        .unwrap_or_default();

    let from_root = primary
        .as_str()
        .and_then(|key| root?.as_object()?.get(key))
        .cloned();
    let source = from_root.unwrap_or(primary);
    let data = match &source {
        Value::String(expr) if persist.is_empty() => expr.clone(),
        other => persist_literal(other, &persist),
    };

    let tag = args
        .cut_hash_or_positional("e", 1)
        .unwrap_or_else(|| "div".into());
    Ok(Element::new(tag)
        .attr("x-data", data)
        .raw_attrs(args.attributes())
        .body(args.inner().unwrap_or_default())
        .render())
}

/// `x-text` on an otherwise empty element.
pub fn x_text(args: &mut HelperArgs) -> Result<String, Error> {
    let expr = args.require_primary("x-text")?;
    let tag = args
        .cut_hash_or_positional("e", 1)
        .unwrap_or_else(|| "span".into());
    Ok(Element::new(tag)
        .attr("x-text", expr)
        .raw_attrs(args.attributes())
        .render())
}

pub fn x_html(args: &mut HelperArgs) -> Result<String, Error> {
    let expr = args.require_primary("x-html")?;
    let tag = args
        .cut_hash_or_positional("e", 1)
        .unwrap_or_else(|| "span".into());
    Ok(Element::new(tag)
        .attr("x-html", expr)
        .raw_attrs(args.attributes())
        .render())
}

pub fn x_show(args: &mut HelperArgs) -> Result<String, Error> {
    let expr = args.require_primary("x-show")?;
    let tag = args
        .cut_hash_or_positional("e", 1)
        .unwrap_or_else(|| "div".into());
    Ok(Element::new(tag)
        .attr("x-show", expr)
        .raw_attrs(args.attributes())
        .body(args.inner().unwrap_or_default())
        .render())
}

/// Body of a conditional branch: second positional, `show=`, or the block.
fn branch_body(args: &mut HelperArgs) -> String {
    args.cut_positional(1)
        .or_else(|| args.cut_hash("show"))
        .or_else(|| args.inner().map(str::to_string))
        .unwrap_or_default()
}

/// Complete `<template x-if>` element.
pub fn x_if(args: &mut HelperArgs) -> Result<String, Error> {
    let condition = args.require_primary("x-if")?;
    let body = branch_body(args);
    Ok(Element::template()
        .attr("x-if", condition)
        .raw_attrs(args.attributes())
        .body(body)
        .render())
}

/// `x-elseif` branch.
///
/// With `in_block` set the branch sits inside an open `x-if` template, so the
/// previous template is closed and this one is left open for the enclosing
/// block to close. Otherwise a complete sibling template is rendered.
pub fn x_elseif(
    args: &mut HelperArgs,
    chain: &mut ConditionChain,
    in_block: bool,
) -> Result<String, Error> {
    let condition = args.require_primary("x-elseif")?;
    let body = branch_body(args);
    let expr = chain.elseif_condition(&condition);
    Ok(chain_branch(&expr, &body, &args.attributes(), in_block))
}

/// Final `x-else` branch. The primary argument, when given, is the body.
pub fn x_else(
    args: &mut HelperArgs,
    chain: &mut ConditionChain,
    in_block: bool,
) -> Result<String, Error> {
    let body = args
        .cut_hash("show")
        .or_else(|| args.take_primary())
        .or_else(|| args.inner().map(str::to_string))
        .unwrap_or_default();
    let expr = chain.else_condition("x-else")?;
    Ok(chain_branch(&expr, &body, &args.attributes(), in_block))
}

fn chain_branch(expr: &str, body: &str, attrs: &str, in_block: bool) -> String {
    let template = Element::template().attr("x-if", expr).raw_attrs(attrs);
    if in_block {
        format!("</template>{}{body}", template.open_tag())
    } else {
        template.body(body).render()
    }
}

/// `x-for` loop. A bare collection name iterates with `i`.
pub fn x_for(args: &mut HelperArgs) -> Result<String, Error> {
    let source = args.require_primary("x-for")?;
    let expr = if source.contains(' ') {
        source
    } else {
        format!("i in {source}")
    };
    Ok(Element::template()
        .attr("x-for", expr)
        .raw_attrs(args.attributes())
        .body(args.inner().unwrap_or_default())
        .render())
}

/// Form controls bound with `x-model`.
///
/// The primary argument is the input type. `textarea` and block `select`
/// wrap their body; a body-less `select` generates its options from the
/// `data=` collection.
pub fn input(args: &mut HelperArgs) -> Result<String, Error> {
    let kind = args.require_primary("input")?;
    let model = args.cut_positional(1).unwrap_or_default();
    let data = args.cut_hash("data");
    let key = args.cut_hash("key").or_else(|| args.cut_hash(":key"));
    let classes = args.cut_hash("classes");
    let attrs = args.attributes();

    let wraps_body = kind == "textarea" || (kind == "select" && args.inner().is_some());
    if wraps_body {
        return Ok(Element::new(kind)
            .attr("x-model", model)
            .raw_attrs(attrs)
            .body(args.inner().unwrap_or_default())
            .render());
    }

    if kind == "select" {
        let data = data.ok_or_else(|| Error::missing("input", "data"))?;
        let mut option = Element::new("option")
            .attr(":value", "op")
            .attr("x-text", "op");
        if let Some(classes) = classes {
            option = option.attr("class", classes);
        }
        let mut each = Element::template().attr("x-for", format!("op in {data}"));
        if let Some(key) = key {
            each = each.attr(":key", format!("op.{key}"));
        }
        let each = each.body(option.render());
        return Ok(Element::new("select")
            .attr("x-model", model)
            .raw_attrs(attrs)
            .body(each.render())
            .render());
    }

    Ok(Element::new("input")
        .attr("type", kind)
        .attr("x-model", model)
        .raw_attrs(attrs)
        .void()
        .render())
}

/// Generic `x-on` (`@event`) handler.
pub fn x_on(args: &mut HelperArgs) -> Result<String, Error> {
    let event = args.require_primary("x-on")?;
    let action = args
        .cut_positional(1)
        .ok_or_else(|| Error::missing("x-on", "action"))?;
    let tag = args.cut_hash("e").unwrap_or_else(|| "button".into());
    Ok(Element::new(tag)
        .attr(format!("@{event}"), action)
        .raw_attrs(args.attributes())
        .body(args.inner().unwrap_or("Click Me"))
        .render())
}

/// Flips a boolean on `when=` (default `click`).
pub fn toggle(args: &mut HelperArgs) -> Result<String, Error> {
    let var = args.require_primary("toggle")?;
    let label = args
        .inner()
        .map_or_else(|| format!("Toggle {var}"), str::to_string);
    let event = args.cut_hash("when").unwrap_or_else(|| "click".into());
    let tag = args
        .cut_hash_or_positional("e", 1)
        .unwrap_or_else(|| "button".into());
    Ok(Element::new(tag)
        .attr(format!("@{event}"), format!("{var} = !{var}"))
        .raw_attrs(args.attributes())
        .body(label)
        .render())
}

fn as_http_verb(candidate: &str) -> Option<String> {
    let upper = candidate.to_ascii_uppercase();
    HTTP_VERBS.contains(&upper.as_str()).then_some(upper)
}

/// HTML loaded through the alpine-fetch `$fetch` magic.
///
/// `lazy=` (or a second positional `lazy`) defers the request until the
/// element scrolls into view via `x-intersect`. Any other second positional
/// names the element. `{{x-fetch "POST" "/path"}}` reads the leading verb as
/// the method.
pub fn x_fetch(args: &mut HelperArgs) -> Result<String, Error> {
    let mut url = args.require_primary("x-fetch")?;
    let mut method = args.cut_hash("m");

    let verb_then_path = args
        .positional()
        .get(1)
        .and_then(Value::as_str)
        .is_some_and(|next| next.contains('/'));
    if verb_then_path {
        if let Some(verb) = as_http_verb(&url) {
            method = Some(verb);
            url = args.cut_positional(1).unwrap_or_default();
        }
    }

    let slot = args.cut_positional(1);
    let lazy = args.cut_hash("lazy").is_some() || slot.as_deref() == Some("lazy");
    let tag = args
        .cut_hash("e")
        .or_else(|| slot.filter(|s| s != "lazy"))
        .unwrap_or_else(|| "div".into());
    let method = method.unwrap_or_else(|| "GET".into());

    let mut target = Element::new(tag).attr(
        "x-html",
        format!(
            "await $fetch({}, method={})",
            js_string(&url),
            js_string(&method)
        ),
    );
    if lazy {
        target = target.attr("x-show", "shown");
    }
    let target = target.raw_attrs(args.attributes()).render();

    if !lazy {
        return Ok(target);
    }
    Ok(Element::new("div")
        .attr("x-data", "{ shown: false }")
        .attr("x-intersect.once", "shown = true")
        .body(target)
        .render())
}

/// Button that stores a fetch result into a component property.
///
/// `json=` switches to `$fetchjson` and picks an item out of the response.
pub fn ajax(args: &mut HelperArgs) -> Result<String, Error> {
    let target = args.require_primary("ajax")?;
    let label = args
        .cut_hash("show")
        .or_else(|| args.cut_positional(2))
        .or_else(|| args.inner().map(str::to_string))
        .unwrap_or_else(|| "Click Here".into());
    let json = args.cut_hash("json");
    let method = args.cut_hash("m").unwrap_or_else(|| "GET".into());
    let url = args
        .cut_positional(1)
        .ok_or_else(|| Error::missing("ajax", "url"))?;
    let event = args.cut_hash("when").unwrap_or_else(|| "click".into());
    let tag = args.cut_hash("e").unwrap_or_else(|| "button".into());

    let call = match json {
        Some(item) => format!(
            "$fetchjson({}, jsonItem={}, method={})",
            js_string(&url),
            js_string(&item),
            js_string(&method)
        ),
        None => format!("$fetch({}, method={})", js_string(&url), js_string(&method)),
    };
    Ok(Element::new(tag)
        .attr(format!("@{event}"), format!("{target} = await {call}"))
        .raw_attrs(args.attributes())
        .body(label)
        .render())
}

/// `{{x-btn "Label" "target" "/url" "POST"}}`
pub fn x_btn(args: &mut HelperArgs) -> Result<String, Error> {
    let label = args.require_primary("x-btn")?;
    let method = args.cut_positional(3).or_else(|| args.cut_hash("m"));
    let url = args
        .cut_positional(2)
        .ok_or_else(|| Error::missing("x-btn", "url"))?;
    let target = args
        .cut_positional(1)
        .ok_or_else(|| Error::missing("x-btn", "target"))?;
    let event = args.cut_hash("when").unwrap_or_else(|| "click".into());
    let tag = args.cut_hash("e").unwrap_or_else(|| "button".into());

    let call = match method {
        Some(method) => format!("$fetch({}, method={})", js_string(&url), js_string(&method)),
        None => format!("$fetch({})", js_string(&url)),
    };
    Ok(Element::new(tag)
        .attr(format!("@{event}"), format!("{target} = await {call}"))
        .raw_attrs(args.attributes())
        .body(label)
        .render())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn args<const N: usize>(values: [&str; N]) -> HelperArgs {
        HelperArgs::from_positional(values)
    }

    #[test]
    fn alpine_reads_state_from_root() {
        let root = json!({"counter": {"count": 0}});
        let mut a = args(["counter"]).with_inner("<p>hi</p>");
        assert_eq!(
            alpine(&mut a, Some(&root)).unwrap(),
            "<div x-data=\"{count: 0}\"><p>hi</p></div>"
        );
    }

    #[test]
    fn alpine_uses_literal_expression_and_element() {
        let mut a = args(["{open: false}", "section"]).with_hash("class", "card");
        assert_eq!(
            alpine(&mut a, None).unwrap(),
            "<section x-data=\"{open: false}\" class=\"card\"></section>"
        );
    }

    #[test]
    fn alpine_persists_selected_keys() {
        let root = json!({"prefs": {"theme": "dark", "open": true}});
        let mut a = args(["prefs"]).with_hash("$p", "theme");
        assert_eq!(
            alpine(&mut a, Some(&root)).unwrap(),
            "<div x-data=\"{open: true, theme: $persist('dark')}\"></div>"
        );
    }

    #[test]
    fn x_text_prefers_keyword_element() {
        let mut a = args(["count", "hidden"]).with_hash("e", "h1");
        assert_eq!(x_text(&mut a).unwrap(), "<h1 x-text=\"count\" hidden></h1>");
    }

    #[test]
    fn x_html_defaults_to_span() {
        let mut a = args(["content"]);
        assert_eq!(x_html(&mut a).unwrap(), "<span x-html=\"content\"></span>");
    }

    #[test]
    fn x_show_wraps_body() {
        let mut a = args(["open", "p"]).with_inner("shown");
        assert_eq!(x_show(&mut a).unwrap(), "<p x-show=\"open\">shown</p>");
    }

    #[test]
    fn x_if_takes_body_from_positional() {
        let mut a = args(["yes", "This will show."]);
        assert_eq!(
            x_if(&mut a).unwrap(),
            "<template x-if=\"yes\">This will show.</template>"
        );
    }

    #[test]
    fn block_chain_closes_previous_template() {
        let mut chain = ConditionChain::starting_with("a");
        let elif = x_elseif(&mut args(["b", "B"]), &mut chain, true).unwrap();
        assert_eq!(elif, "</template><template x-if=\"!(a) && (b)\">B");
        let els = x_else(&mut args(["C"]), &mut chain, true).unwrap();
        assert_eq!(els, "</template><template x-if=\"!(a) && !(b)\">C");
    }

    #[test]
    fn x_for_adds_default_iterator() {
        let mut a = args(["things"]).with_hash(":key", "i.id").with_inner("x");
        assert_eq!(
            x_for(&mut a).unwrap(),
            "<template x-for=\"i in things\" :key=\"i.id\">x</template>"
        );
        let mut b = args(["v in things"]);
        assert_eq!(x_for(&mut b).unwrap(), "<template x-for=\"v in things\"></template>");
    }

    #[test]
    fn input_renders_plain_control() {
        let mut a = args(["text", "name"]).with_hash("placeholder", "Name");
        assert_eq!(
            input(&mut a).unwrap(),
            "<input type=\"text\" x-model=\"name\" placeholder=\"Name\" />"
        );
    }

    #[test]
    fn input_select_generates_options() {
        let mut a = args(["select", "choice"])
            .with_hash("data", "options")
            .with_hash("key", "id")
            .with_hash("classes", "opt")
            .with_hash("class", "sel");
        assert_eq!(
            input(&mut a).unwrap(),
            "<select x-model=\"choice\" class=\"sel\">\
             <template x-for=\"op in options\" :key=\"op.id\">\
             <option :value=\"op\" x-text=\"op\" class=\"opt\"></option>\
             </template></select>"
        );
    }

    #[test]
    fn input_select_without_data_fails() {
        let err = input(&mut args(["select", "choice"])).unwrap_err();
        assert_eq!(err, Error::missing("input", "data"));
    }

    #[test]
    fn textarea_wraps_body() {
        let mut a = args(["textarea", "bio"]).with_inner("hello");
        assert_eq!(
            input(&mut a).unwrap(),
            "<textarea x-model=\"bio\">hello</textarea>"
        );
    }

    #[test]
    fn x_on_defaults_label() {
        let mut a = args(["click", "count++"]);
        assert_eq!(
            x_on(&mut a).unwrap(),
            "<button @click=\"count++\">Click Me</button>"
        );
    }

    #[test]
    fn toggle_uses_when_and_element() {
        let mut a = args(["open", "div"]).with_hash("when", "mouseover");
        assert_eq!(
            toggle(&mut a).unwrap(),
            "<div @mouseover=\"open = !open\">Toggle open</div>"
        );
    }

    #[test]
    fn x_fetch_plain_and_lazy() {
        let mut a = args(["/partials/list"]).with_hash("m", "POST");
        assert_eq!(
            x_fetch(&mut a).unwrap(),
            "<div x-html=\"await $fetch('/partials/list', method='POST')\"></div>"
        );

        let mut lazy = args(["/more", "lazy"]);
        assert_eq!(
            x_fetch(&mut lazy).unwrap(),
            "<div x-data=\"{ shown: false }\" x-intersect.once=\"shown = true\">\
             <div x-html=\"await $fetch('/more', method='GET')\" x-show=\"shown\"></div></div>"
        );
    }

    #[test]
    fn x_fetch_reads_leading_verb() {
        let mut a = args(["put", "/items/1", "section"]);
        assert_eq!(
            x_fetch(&mut a).unwrap(),
            "<section x-html=\"await $fetch('/items/1', method='PUT')\"></section>"
        );
    }

    #[test]
    fn ajax_switches_to_json_fetch() {
        let mut a = args(["user", "/api/user"]).with_hash("json", "name");
        assert_eq!(
            ajax(&mut a).unwrap(),
            "<button @click=\"user = await $fetchjson('/api/user', jsonItem='name', method='GET')\">Click Here</button>"
        );
    }

    #[test]
    fn ajax_label_from_third_positional() {
        let mut a = args(["list", "/list", "Reload"]).with_hash("when", "dblclick");
        assert_eq!(
            ajax(&mut a).unwrap(),
            "<button @dblclick=\"list = await $fetch('/list', method='GET')\">Reload</button>"
        );
    }

    #[test]
    fn x_btn_orders_label_target_url_method() {
        let mut a = args(["Save", "result", "/save", "POST"]);
        assert_eq!(
            x_btn(&mut a).unwrap(),
            "<button @click=\"result = await $fetch('/save', method='POST')\">Save</button>"
        );
    }
}
