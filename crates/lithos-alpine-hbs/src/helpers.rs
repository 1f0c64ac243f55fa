// SPDX-License-Identifier: Apache-2.0 OR MIT
use handlebars::{
    BlockContext, Context, Handlebars, Helper, HelperDef, HelperResult, Output, PathAndJson,
    RenderContext, RenderError, RenderErrorReason, Renderable,
};
use lithos_alpine_core::{
    directives, telemetry, ConditionChain, Directive, Error, HelperArgs, HelperSpec,
};
use serde_json::{Map, Value};

/// Block-local variable holding the conditions of the current `x-if` chain.
const CHAIN_VAR: &str = "alpine_if_chain";
/// Set while rendering the body of a block `x-if`.
const OPEN_VAR: &str = "alpine_if_open";

const ENGINE: &str = "handlebars";

/// One registered name of an Alpine helper.
#[derive(Clone, Copy)]
pub struct AlpineHelper {
    spec: &'static HelperSpec,
}

impl AlpineHelper {
    pub fn new(spec: &'static HelperSpec) -> Self {
        Self { spec }
    }

    fn render<'reg: 'rc, 'rc>(
        &self,
        h: &Helper<'rc>,
        r: &'reg Handlebars<'reg>,
        ctx: &'rc Context,
        rc: &mut RenderContext<'reg, 'rc>,
    ) -> Result<String, RenderError> {
        let positional: Vec<Value> = h.params().iter().map(param_value).collect();
        let hash: Map<String, Value> = h
            .hash()
            .iter()
            .map(|(key, value)| ((*key).to_string(), param_value(value)))
            .collect();

        match self.spec.directive {
            Directive::If => render_if(h, r, ctx, rc, positional, hash),
            Directive::ElseIf | Directive::Else => {
                let inner = render_inner(h, r, ctx, rc)?;
                let mut args = HelperArgs::normalize(positional, hash, inner);
                render_branch(self.spec.directive, &mut args, rc)
            }
            directive => {
                let inner = render_inner(h, r, ctx, rc)?;
                let mut args = HelperArgs::normalize(positional, hash, inner);
                directive
                    .render(&mut args, Some(ctx.data()))
                    .map_err(into_render_error)
            }
        }
    }
}

impl HelperDef for AlpineHelper {
    fn call<'reg: 'rc, 'rc>(
        &self,
        h: &Helper<'rc>,
        r: &'reg Handlebars<'reg>,
        ctx: &'rc Context,
        rc: &mut RenderContext<'reg, 'rc>,
        out: &mut dyn Output,
    ) -> HelperResult {
        let result = self.render(h, r, ctx, rc);
        telemetry::record_helper_invocation(self.spec.name, ENGINE, result.is_ok());
        out.write(&result?)?;
        Ok(())
    }
}

/// A bare identifier that resolves to nothing (`{{x-text count h1}}`) is
/// taken as its own name.
fn param_value(param: &PathAndJson<'_>) -> Value {
    match param.relative_path() {
        Some(path) if param.is_value_missing() => Value::String(path.clone()),
        _ => param.value().clone(),
    }
}

fn into_render_error(err: Error) -> RenderError {
    RenderErrorReason::Other(err.to_string()).into()
}

fn render_inner<'reg: 'rc, 'rc>(
    h: &Helper<'rc>,
    r: &'reg Handlebars<'reg>,
    ctx: &'rc Context,
    rc: &mut RenderContext<'reg, 'rc>,
) -> Result<Option<String>, RenderError> {
    h.template().map(|t| t.renders(r, ctx, rc)).transpose()
}

/// Block `x-if` renders its body inside a fresh chain frame so nested
/// `x-elseif` / `x-else` can close and reopen the template. Inline `x-if`
/// starts a chain for following sibling branches instead.
fn render_if<'reg: 'rc, 'rc>(
    h: &Helper<'rc>,
    r: &'reg Handlebars<'reg>,
    ctx: &'rc Context,
    rc: &mut RenderContext<'reg, 'rc>,
    positional: Vec<Value>,
    hash: Map<String, Value>,
) -> Result<String, RenderError> {
    let mut args = HelperArgs::normalize(positional, hash, None);
    let condition = args.require_primary("x-if").map_err(into_render_error)?;
    let chain = ConditionChain::starting_with(condition);

    let Some(template) = h.template() else {
        if !chain_is_open(rc) {
            store_chain(rc, &chain, false);
        }
        return directives::x_if(&mut args).map_err(into_render_error);
    };

    let mut block = rc.block().cloned().unwrap_or_else(BlockContext::new);
    block.set_local_var(CHAIN_VAR, chain_to_json(&chain));
    block.set_local_var(OPEN_VAR, Value::Bool(true));
    rc.push_block(block);
    let inner = template.renders(r, ctx, rc);
    rc.pop_block();

    let mut args = args.with_inner(inner?);
    directives::x_if(&mut args).map_err(into_render_error)
}

fn render_branch(
    directive: Directive,
    args: &mut HelperArgs,
    rc: &mut RenderContext<'_, '_>,
) -> Result<String, RenderError> {
    let in_block = chain_is_open(rc);
    let mut chain = load_chain(rc);
    let html = match directive {
        Directive::ElseIf => directives::x_elseif(args, &mut chain, in_block),
        _ => directives::x_else(args, &mut chain, in_block),
    }
    .map_err(into_render_error)?;
    store_chain(rc, &chain, in_block);
    Ok(html)
}

fn chain_is_open(rc: &RenderContext<'_, '_>) -> bool {
    rc.block()
        .and_then(|block| block.get_local_var(OPEN_VAR))
        .and_then(Value::as_bool)
        .unwrap_or(false)
}

fn load_chain(rc: &RenderContext<'_, '_>) -> ConditionChain {
    rc.block()
        .and_then(|block| block.get_local_var(CHAIN_VAR))
        .and_then(|value| serde_json::from_value(value.clone()).ok())
        .unwrap_or_default()
}

fn store_chain(rc: &mut RenderContext<'_, '_>, chain: &ConditionChain, open: bool) {
    if let Some(block) = rc.block_mut() {
        block.set_local_var(CHAIN_VAR, chain_to_json(chain));
        block.set_local_var(OPEN_VAR, Value::Bool(open));
    }
}

fn chain_to_json(chain: &ConditionChain) -> Value {
    Value::Array(
        chain
            .conditions()
            .iter()
            .cloned()
            .map(Value::String)
            .collect(),
    )
}
