#![no_main]

use libfuzzer_sys::fuzz_target;
use lithos_alpine_gotmpl::alpine_functions;
use lithos_gotmpl_core::Template;
use lithos_gotmpl_engine::FunctionRegistry;
use once_cell::sync::Lazy;
use serde_json::json;

static REGISTRY: Lazy<FunctionRegistry> = Lazy::new(alpine_functions);

fuzz_target!(|data: &[u8]| {
    let source = match std::str::from_utf8(data) {
        Ok(src) => src,
        Err(_) => return,
    };

    if let Ok(template) =
        Template::parse_with_functions("fuzz-alpine-gotmpl", source, REGISTRY.clone())
    {
        let _ = template.render(&json!({"state": {"open": false}, "items": [1, 2]}));
    }
});
