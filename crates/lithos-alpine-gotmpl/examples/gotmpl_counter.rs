// SPDX-License-Identifier: Apache-2.0 OR MIT
use lithos_alpine_gotmpl::install_all;
use lithos_gotmpl_core::{FunctionRegistryBuilder, Template};
use serde_json::json;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let mut builder = FunctionRegistryBuilder::new();
    install_all(&mut builder);
    let registry = builder.build();

    let source = concat!(
        "{{ alpineData .counter (attrs \"class\" \"counter\" \"content\" ",
        "(printf \"%s%s\" (xOn \"click\" \"count++\") (xText \"count\"))) }}"
    );
    let template = Template::parse_with_functions("counter", source, registry)?;
    let rendered = template.render(&json!({"counter": {"count": 0}}))?;

    println!("{}", rendered);
    Ok(())
}
