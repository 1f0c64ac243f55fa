// SPDX-License-Identifier: Apache-2.0 OR MIT
use lithos_alpine_core::{render_helper, HelperArgs};
use serde_json::json;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let root = json!({"counter": {"count": 0}});

    let mut button = HelperArgs::from_positional(["click", "count++"]).with_inner("Add one");
    let mut label = HelperArgs::from_positional(["count"]).with_hash("e", "strong");
    let body = format!(
        "{}{}",
        render_helper("x-on", &mut button, None)?,
        render_helper("$", &mut label, None)?
    );

    let mut wrapper = HelperArgs::from_positional(["counter"]).with_inner(body);
    let output = render_helper("alpine", &mut wrapper, Some(&root))?;

    println!("{}", output);
    assert_eq!(
        output,
        "<div x-data=\"{count: 0}\"><button @click=\"count++\">Add one</button><strong x-text=\"count\"></strong></div>"
    );
    Ok(())
}
