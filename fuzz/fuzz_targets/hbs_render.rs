#![no_main]

use handlebars::Handlebars;
use libfuzzer_sys::fuzz_target;
use lithos_alpine_hbs::alpine_registry;
use once_cell::sync::Lazy;
use serde_json::json;

static REGISTRY: Lazy<Handlebars<'static>> = Lazy::new(alpine_registry);

fuzz_target!(|data: &[u8]| {
    if let Ok(source) = std::str::from_utf8(data) {
        let _ = REGISTRY.render_template(source, &json!({"state": {"open": false}}));
    }
});
