// Copyright 2019-2026 Maravilla Labs, operated by SOLUTAS GmbH, Switzerland
// SPDX-License-Identifier: Apache-2.0
// SPDX-License-Identifier: MIT

//! Client template rendering for head-element scripts.
//!
//! A template script names a template resource and carries a [`Model`].
//! [`ResolverTemplateRenderer`] loads the template through a
//! [`ResourceResolver`] and substitutes model references:
//!
//! - `$name` and `${name}` insert the value under `name`
//! - dotted references (`$control.id`, `${request.path}`) walk into objects
//! - strings are inserted verbatim, numbers and booleans as text, arrays and
//!   objects as compact JSON
//! - references that do not resolve (or resolve to `null`) are left as is

use serde_json::Value as JsonValue;

use crate::error::{PageKitError, Result};
use crate::model::Model;
use crate::resolver::ResourceResolver;

/// Renders a client template with a model.
pub trait TemplateRenderer {
    /// Renders the template at `template` with `model`.
    fn render(&self, template: &str, model: &Model) -> Result<String>;
}

/// Renders templates loaded through a [`ResourceResolver`].
pub struct ResolverTemplateRenderer {
    resolver: Box<dyn ResourceResolver>,
}

impl ResolverTemplateRenderer {
    /// Creates a renderer loading templates through `resolver`.
    pub fn new<R: ResourceResolver>(resolver: R) -> Self {
        Self {
            resolver: Box::new(resolver),
        }
    }

    /// Creates a renderer from an already boxed resolver.
    pub fn from_boxed(resolver: Box<dyn ResourceResolver>) -> Self {
        Self { resolver }
    }
}

impl TemplateRenderer for ResolverTemplateRenderer {
    fn render(&self, template: &str, model: &Model) -> Result<String> {
        let source = self.resolver.read_to_string(template).map_err(|e| match e {
            PageKitError::NotFound(path) => {
                PageKitError::Template(format!("template {} not found", path))
            }
            other => other,
        })?;
        Ok(substitute(&source, model))
    }
}

fn is_ident_start(c: char) -> bool {
    c.is_ascii_alphabetic() || c == '_'
}

fn is_ident_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_'
}

fn lookup<'a>(model: &'a Model, reference: &str) -> Option<&'a JsonValue> {
    let mut parts = reference.split('.');
    let mut value = model.get(parts.next()?)?;
    for part in parts {
        value = value.get(part)?;
    }
    Some(value)
}

fn display(value: &JsonValue) -> Option<String> {
    match value {
        JsonValue::Null => None,
        JsonValue::String(s) => Some(s.clone()),
        JsonValue::Bool(_) | JsonValue::Number(_) => Some(value.to_string()),
        JsonValue::Array(_) | JsonValue::Object(_) => Some(value.to_string()),
    }
}

// Length in bytes of a dotted identifier at the start of `s`
fn reference_len(s: &str) -> usize {
    let mut len = 0;
    let mut expect_start = true;
    for (i, c) in s.char_indices() {
        if expect_start {
            if !is_ident_start(c) {
                break;
            }
            expect_start = false;
            len = i + c.len_utf8();
        } else if is_ident_char(c) {
            len = i + c.len_utf8();
        } else if c == '.' {
            expect_start = true;
        } else {
            break;
        }
    }
    len
}

/// Substitutes `$name` / `${name}` references in `source` with model values.
pub fn substitute(source: &str, model: &Model) -> String {
    let mut out = String::with_capacity(source.len());
    let mut rest = source;

    while let Some(pos) = rest.find('$') {
        out.push_str(&rest[..pos]);
        let after = &rest[pos + 1..];

        let (reference, consumed) = if let Some(braced) = after.strip_prefix('{') {
            match braced.find('}') {
                Some(end) if reference_len(&braced[..end]) == end && end > 0 => {
                    (Some(&braced[..end]), end + 2)
                }
                _ => (None, 0),
            }
        } else {
            let len = reference_len(after);
            if len > 0 {
                (Some(&after[..len]), len)
            } else {
                (None, 0)
            }
        };

        match reference.and_then(|r| lookup(model, r)).and_then(display) {
            Some(value) => {
                out.push_str(&value);
                rest = &after[consumed..];
            }
            None => {
                out.push('$');
                rest = after;
            }
        }
    }

    out.push_str(rest);
    out
}
