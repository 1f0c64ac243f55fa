// SPDX-License-Identifier: Apache-2.0 OR MIT
//! JavaScript object-literal rendering for `x-data`.
//!
//! Output is a compact single line using single-quoted strings so it can sit
//! inside a double-quoted HTML attribute without further escaping.

use serde_json::Value;

/// Renders a JSON value as a JavaScript literal.
pub fn to_js_literal(value: &Value) -> String {
    let mut out = String::new();
    write_literal(&mut out, value);
    out
}

/// Renders `value` with the selected top-level keys wrapped in Alpine's
/// `$persist(...)` magic.
///
/// `persist_keys` is a comma separated list; `*` selects every key. String
/// input is parsed as JSON first and returned untouched when that fails, so
/// hand-written expressions such as `{open: false}` pass straight through.
pub fn persist_literal(value: &Value, persist_keys: &str) -> String {
    let keys = parse_persist_keys(persist_keys);
    if keys.is_empty() {
        return to_js_literal(value);
    }

    let parsed;
    let value = match value {
        Value::String(text) => match serde_json::from_str::<Value>(text) {
            Ok(v) => {
                parsed = v;
                &parsed
            }
            Err(_) => return text.clone(),
        },
        other => other,
    };

    let Value::Object(map) = value else {
        return to_js_literal(value);
    };

    let persist_all = keys.iter().any(|k| k == "*");
    let mut out = String::from("{");
    for (idx, (key, entry)) in map.iter().enumerate() {
        if idx > 0 {
            out.push_str(", ");
        }
        write_key(&mut out, key);
        out.push_str(": ");
        if persist_all || keys.iter().any(|k| k == key) {
            out.push_str("$persist(");
            write_literal(&mut out, entry);
            out.push(')');
        } else {
            write_literal(&mut out, entry);
        }
    }
    out.push('}');
    out
}

/// Single-quoted JavaScript string literal.
pub fn js_string(s: &str) -> String {
    let mut out = String::with_capacity(s.len() + 2);
    write_string(&mut out, s);
    out
}

fn parse_persist_keys(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|k| !k.is_empty())
        .map(str::to_string)
        .collect()
}

fn write_literal(out: &mut String, value: &Value) {
    match value {
        Value::Null => out.push_str("null"),
        Value::Bool(b) => out.push_str(if *b { "true" } else { "false" }),
        Value::Number(n) => out.push_str(&n.to_string()),
        Value::String(s) => write_string(out, s),
        Value::Array(items) => {
            out.push('[');
            for (idx, item) in items.iter().enumerate() {
                if idx > 0 {
                    out.push_str(", ");
                }
                write_literal(out, item);
            }
            out.push(']');
        }
        Value::Object(map) => {
            out.push('{');
            for (idx, (key, entry)) in map.iter().enumerate() {
                if idx > 0 {
                    out.push_str(", ");
                }
                write_key(out, key);
                out.push_str(": ");
                write_literal(out, entry);
            }
            out.push('}');
        }
    }
}

fn write_key(out: &mut String, key: &str) {
    if is_identifier(key) {
        out.push_str(key);
    } else {
        write_string(out, key);
    }
}

fn write_string(out: &mut String, s: &str) {
    out.push('\'');
    for ch in s.chars() {
        match ch {
            '\\' => out.push_str("\\\\"),
            '\'' => out.push_str("\\'"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            other => out.push(other),
        }
    }
    out.push('\'');
}

fn is_identifier(key: &str) -> bool {
    let mut chars = key.chars();
    match chars.next() {
        Some(first) if first.is_ascii_alphabetic() || first == '_' || first == '$' => {}
        _ => return false,
    }
    chars.all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '$')
}
