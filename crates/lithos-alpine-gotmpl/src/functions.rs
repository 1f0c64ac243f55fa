// SPDX-License-Identifier: Apache-2.0 OR MIT
use heck::ToLowerCamelCase;
use lithos_alpine_core::{render_chain, telemetry, value_to_text, Directive, HelperArgs, HELPERS};
use lithos_gotmpl_engine::{Error, EvalContext, FunctionRegistryBuilder};
use serde_json::{Map, Value};

/// Hash key that carries the element body, since Go templates have no block
/// helpers.
pub const CONTENT_KEY: &str = "content";

const ENGINE: &str = "gotmpl";

pub fn register(builder: &mut FunctionRegistryBuilder) {
    for spec in HELPERS.iter().filter(|spec| !spec.directive.is_chain_branch()) {
        for name in template_names(spec.name, spec.template_aliases) {
            let canonical = spec.name;
            let directive = spec.directive;
            builder.register(name, move |_ctx, args| invoke(canonical, directive, args));
        }
    }
    builder.register("xCond", x_cond).register("attrs", attrs);
}

/// Go-template names for a helper: the camel-cased canonical name followed by
/// any explicit aliases.
pub fn template_names(canonical: &str, aliases: &[&str]) -> Vec<String> {
    let mut names = vec![canonical.to_lower_camel_case()];
    names.extend(aliases.iter().map(|alias| (*alias).to_string()));
    names
}

fn invoke(canonical: &'static str, directive: Directive, values: &[Value]) -> Result<Value, Error> {
    let mut args = helper_args(values);
    let result = directive.render(&mut args, None);
    telemetry::record_helper_invocation(canonical, ENGINE, result.is_ok());
    result
        .map(Value::String)
        .map_err(|err| Error::render(err.to_string(), None))
}

/// Splits template arguments into positionals and a trailing keyword map.
pub(crate) fn helper_args(values: &[Value]) -> HelperArgs {
    let (positional, mut hash) = split_hash(values);
    let inner = hash.remove(CONTENT_KEY).map(|body| value_to_text(&body));
    HelperArgs::normalize(positional, hash, inner)
}

fn split_hash(values: &[Value]) -> (Vec<Value>, Map<String, Value>) {
    match values.split_last() {
        Some((Value::Object(hash), rest)) if !rest.is_empty() => (rest.to_vec(), hash.clone()),
        _ => (values.to_vec(), Map::new()),
    }
}

/// `xCond cond1 body1 cond2 body2 ... [elseBody] [attrs]`
pub fn x_cond(_ctx: &mut EvalContext, values: &[Value]) -> Result<Value, Error> {
    let (positional, hash) = split_hash(values);
    if positional.len() < 2 {
        return Err(Error::render(
            format!(
                "xCond expected at least 2 arguments, got {}",
                positional.len()
            ),
            None,
        ));
    }

    let mut texts = positional.iter().map(value_to_text);
    let mut branches = Vec::with_capacity(positional.len() / 2);
    let mut else_body = None;
    while let Some(condition) = texts.next() {
        match texts.next() {
            Some(body) => branches.push((condition, body)),
            None => else_body = Some(condition),
        }
    }

    let attrs = HelperArgs::normalize(vec![Value::Null], hash, None).attributes();
    let result = render_chain(&branches, else_body.as_deref(), &attrs);
    telemetry::record_helper_invocation("xCond", ENGINE, result.is_ok());
    result
        .map(Value::String)
        .map_err(|err| Error::render(err.to_string(), None))
}

/// Builds the keyword map passed as the last argument of a helper:
/// `attrs "e" "h1" "class" "big"`.
pub fn attrs(_ctx: &mut EvalContext, values: &[Value]) -> Result<Value, Error> {
    if values.len() % 2 != 0 {
        return Err(Error::render(
            format!("attrs expected even number of arguments, got {}", values.len()),
            None,
        ));
    }
    let mut map = Map::new();
    for pair in values.chunks_exact(2) {
        let key = match &pair[0] {
            Value::String(key) => key.clone(),
            other => {
                return Err(Error::render(
                    format!("attrs keys must be strings, got {other:?}"),
                    None,
                ))
            }
        };
        map.insert(key, pair[1].clone());
    }
    Ok(Value::Object(map))
}

#[cfg(test)]
mod tests {
    use super::*;
    use lithos_gotmpl_engine::FunctionRegistry;
    use serde_json::json;

    fn empty_context() -> EvalContext {
        EvalContext::new(Value::Null, FunctionRegistry::empty())
    }

    #[test]
    fn camel_cases_canonical_names() {
        assert_eq!(template_names("x-text", &[]), vec!["xText"]);
        assert_eq!(
            template_names("alpine", &["alpineData"]),
            vec!["alpine", "alpineData"]
        );
    }

    #[test]
    fn trailing_object_becomes_hash() {
        let args = helper_args(&[json!("open"), json!({"class": "x", "content": "<p>hi</p>"})]);
        assert_eq!(args.positional(), &[json!("open")]);
        assert_eq!(args.inner(), Some("<p>hi</p>"));
        assert_eq!(args.attributes(), "class=\"x\"");
    }

    #[test]
    fn lone_object_stays_positional() {
        let args = helper_args(&[json!({"count": 1})]);
        assert_eq!(args.positional().len(), 1);
        assert!(args.hash().is_empty());
    }

    #[test]
    fn x_cond_renders_else_branch() {
        let mut ctx = empty_context();
        let out = x_cond(&mut ctx, &[json!("a"), json!("A"), json!("B")]).unwrap();
        assert_eq!(
            out,
            json!("<template x-if=\"a\">A</template><template x-if=\"!(a)\">B</template>")
        );
    }

    #[test]
    fn x_cond_requires_a_branch() {
        let mut ctx = empty_context();
        let err = x_cond(&mut ctx, &[json!("a")]).unwrap_err();
        assert!(err.to_string().contains("at least 2 arguments"));
    }

    #[test]
    fn attrs_rejects_odd_arguments() {
        let mut ctx = empty_context();
        assert!(attrs(&mut ctx, &[json!("e")]).is_err());
        assert_eq!(
            attrs(&mut ctx, &[json!("e"), json!("h1")]).unwrap(),
            json!({"e": "h1"})
        );
    }
}
