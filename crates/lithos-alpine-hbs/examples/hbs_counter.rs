// SPDX-License-Identifier: Apache-2.0 OR MIT
use lithos_alpine_hbs::alpine_registry;
use serde_json::json;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let registry = alpine_registry();

    let source = concat!(
        "{{#alpine \"counter\" class=\"counter\"}}",
        "{{#x-on \"click\" \"count++\"}}Add one{{/x-on}}",
        "{{x-text \"count\" e=\"strong\"}}",
        "{{#x-if \"count > 3\"}}Plenty{{x-else}}Keep going{{/x-if}}",
        "{{/alpine}}"
    );
    let rendered = registry.render_template(source, &json!({"counter": {"count": 0}}))?;

    println!("{}", rendered);
    Ok(())
}
