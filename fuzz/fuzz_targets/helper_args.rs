#![no_main]

use libfuzzer_sys::fuzz_target;
use lithos_alpine_core::{render_helper, HelperArgs, HELPERS};
use serde_json::{Map, Value};

// Input: one byte picking the helper, then a JSON document whose array
// items become positionals and whose object entries become the hash.
fuzz_target!(|data: &[u8]| {
    let Some((&pick, rest)) = data.split_first() else {
        return;
    };
    let Ok(value) = serde_json::from_slice::<Value>(rest) else {
        return;
    };
    let spec = &HELPERS[usize::from(pick) % HELPERS.len()];

    let (positional, hash) = match value {
        Value::Array(items) => (items, Map::new()),
        Value::Object(map) => (Vec::new(), map),
        other => (vec![other], Map::new()),
    };
    let mut args = HelperArgs::normalize(positional, hash, None);
    let _ = render_helper(spec.name, &mut args, Some(&Value::Null));
});
