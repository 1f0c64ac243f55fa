// SPDX-License-Identifier: Apache-2.0 OR MIT
use lithos_alpine_core::{lookup, render_helper, HelperArgs, HELPERS};
use serde_json::json;

#[test]
fn every_name_resolves_to_its_helper() {
    for spec in HELPERS {
        for name in spec.names() {
            let found = lookup(name).unwrap_or_else(|| panic!("{name} not registered"));
            assert_eq!(found.name, spec.name, "{name} resolved to the wrong helper");
        }
    }
}

#[test]
fn standalone_elseif_renders_its_own_condition() {
    let mut args = HelperArgs::from_positional(["ready", "Go"]);
    let html = render_helper("elif", &mut args, None).unwrap();
    assert_eq!(html, "<template x-if=\"ready\">Go</template>");
}

#[test]
fn attribute_values_are_escaped() {
    let mut args = HelperArgs::from_positional(["msg"]).with_hash("title", "say \"hi\"");
    let html = render_helper("x-text", &mut args, None).unwrap();
    assert_eq!(html, "<span x-text=\"msg\" title=\"say &quot;hi&quot;\"></span>");
}

#[test]
fn nested_state_becomes_js_literal() {
    let root = json!({"form": {"name": "O'Neil", "tags": ["a", "b"], "age": 7}});
    let mut args = HelperArgs::from_positional(["form"]);
    let html = render_helper("x", &mut args, Some(&root)).unwrap();
    assert_eq!(
        html,
        "<div x-data=\"{age: 7, name: 'O\\'Neil', tags: ['a', 'b']}\"></div>"
    );
}
