use std::collections::BTreeMap;

use crate::error::{DefaultError, ErrorKind};
use crate::schema::{SchemaNode, SchemaType};

/// Validation/canonicalization rule selected for a schema node.
///
/// Closed set: every declared type maps to exactly one variant, and untyped
/// nodes fall back to `IntOrString` or `Arbitrary` by their extension flags.
#[derive(Debug, Clone, Copy)]
pub enum Rule<'a> {
    Boolean,
    Number {
        integer: bool,
        format: Option<&'a str>,
    },
    String,
    IntOrString,
    Array {
        items: &'a SchemaNode,
    },
    Object {
        properties: &'a BTreeMap<String, SchemaNode>,
        allow_unknown: bool,
    },
    Arbitrary,
}

impl Rule<'_> {
    pub fn name(&self) -> &'static str {
        match self {
            Rule::Boolean => "boolean",
            Rule::Number { integer: true, .. } => "integer",
            Rule::Number { integer: false, .. } => "number",
            Rule::String => "string",
            Rule::IntOrString => "int-or-string",
            Rule::Array { .. } => "array",
            Rule::Object { .. } => "object",
            Rule::Arbitrary => "arbitrary",
        }
    }
}

pub fn select_rule(node: &SchemaNode) -> Result<Rule<'_>, DefaultError> {
    let format = node.format.as_deref();
    let rule = match node.declared_type {
        Some(SchemaType::Boolean) => Rule::Boolean,
        Some(SchemaType::Integer) => Rule::Number { integer: true, format },
        Some(SchemaType::Number) => Rule::Number { integer: false, format },
        Some(SchemaType::String) => Rule::String,
        Some(SchemaType::Array) => match node.items.as_deref() {
            Some(items) => Rule::Array { items },
            None => {
                return Err(ErrorKind::UnsupportedSchemaKind("array without items".into()).into());
            }
        },
        Some(SchemaType::Object) => Rule::Object {
            properties: &node.properties,
            allow_unknown: node.allow_unknown_fields,
        },
        None if node.int_or_string => Rule::IntOrString,
        None if node.allow_unknown_fields => Rule::Arbitrary,
        None => {
            return Err(ErrorKind::UnsupportedSchemaKind(
                "no type and unknown fields are not preserved".into(),
            )
            .into());
        }
    };
    Ok(rule)
}
