use std::collections::BTreeMap;

use crate::config::ApplyConfig;
use crate::error::{DefaultError, ErrorKind};
use crate::literal::{Literal, is_integer_text};
use crate::rule::{Rule, select_rule};
use crate::schema::SchemaNode;

/// Recursive descent over a schema node and its candidate value.
///
/// Stateless apart from the borrowed config; safe to share between threads
/// and to reuse across calls.
pub struct Normalizer<'c> {
    config: &'c ApplyConfig,
}

impl<'c> Normalizer<'c> {
    pub fn new(config: &'c ApplyConfig) -> Self {
        Self { config }
    }

    /// Normalize a raw marker expression against `node`.
    ///
    /// Primitives are read straight from the text (strings are content, not
    /// literals); composites and arbitrary values must be valid JSON.
    pub fn normalize_raw(&self, node: &SchemaNode, raw: &str) -> Result<Literal, DefaultError> {
        let rule = select_rule(node)?;
        let text = raw.trim();
        tracing::trace!(rule = rule.name(), "normalizing raw default");

        if node.nullable && text == "null" && !matches!(rule, Rule::String) {
            return Ok(Literal::Null);
        }

        match rule {
            Rule::Boolean => match text {
                "true" => Ok(Literal::Bool(true)),
                "false" => Ok(Literal::Bool(false)),
                other => Err(ErrorKind::InvalidBooleanLiteral(other.to_string()).into()),
            },
            Rule::String => Ok(Literal::String(string_content(text))),
            Rule::IntOrString => match Literal::parse(text) {
                Ok(Literal::Number(n)) if is_integer_text(&n) => Ok(Literal::Number(n)),
                _ => Ok(Literal::String(string_content(text))),
            },
            Rule::Number { integer, .. } => match Literal::parse(text) {
                Ok(literal @ Literal::Number(_)) => self.normalize_value(node, &literal, 0),
                _ => Err(ErrorKind::InvalidNumericLiteral {
                    literal: text.to_string(),
                    expected: numeric_kind(integer).to_string(),
                }
                .into()),
            },
            Rule::Array { .. } => match Literal::parse(text) {
                Ok(Literal::Null) => Err(ErrorKind::MalformedSequence("expected array, found null".into()).into()),
                Ok(literal) => self.normalize_value(node, &literal, 0),
                Err(e) => Err(ErrorKind::MalformedSequence(e.to_string()).into()),
            },
            Rule::Object { .. } => match Literal::parse(text) {
                Ok(Literal::Null) => Err(ErrorKind::MalformedStructure("expected object, found null".into()).into()),
                Ok(literal) => self.normalize_value(node, &literal, 0),
                Err(e) => Err(ErrorKind::MalformedStructure(e.to_string()).into()),
            },
            Rule::Arbitrary => {
                let literal = Literal::parse(text).map_err(|e| ErrorKind::MalformedStructure(e.to_string()))?;
                self.normalize_value(node, &literal, 0)
            }
        }
    }

    /// Normalize an already parsed value against `node`, `depth` levels below
    /// the root.
    pub fn normalize_value(&self, node: &SchemaNode, value: &Literal, depth: usize) -> Result<Literal, DefaultError> {
        self.check_depth(depth)?;
        let rule = select_rule(node)?;
        tracing::trace!(rule = rule.name(), depth, "normalizing value");

        if value.is_null() && !matches!(rule, Rule::Arbitrary) {
            return if node.nullable {
                Ok(Literal::Null)
            } else {
                Err(ErrorKind::NullNotAllowed.into())
            };
        }

        match (rule, value) {
            (Rule::Boolean, Literal::Bool(b)) => Ok(Literal::Bool(*b)),
            (Rule::Boolean, other) => Err(ErrorKind::InvalidBooleanLiteral(other.to_string()).into()),

            (Rule::Number { integer, format }, Literal::Number(text)) => {
                self.check_number(text, integer, format)?;
                Ok(Literal::Number(text.clone()))
            }
            (Rule::Number { integer, .. }, other) => Err(ErrorKind::InvalidNumericLiteral {
                literal: other.to_string(),
                expected: numeric_kind(integer).to_string(),
            }
            .into()),

            (Rule::String, Literal::String(s)) => Ok(Literal::String(s.clone())),
            (Rule::String, other) => Err(ErrorKind::InvalidStringLiteral(other.kind_name().to_string()).into()),

            (Rule::IntOrString, Literal::String(s)) => Ok(Literal::String(s.clone())),
            (Rule::IntOrString, Literal::Number(text)) if is_integer_text(text) => Ok(Literal::Number(text.clone())),
            (Rule::IntOrString, other) => Err(ErrorKind::InvalidStringLiteral(format!(
                "{} (expected integer or string)",
                other.kind_name()
            ))
            .into()),

            (Rule::Array { items }, Literal::Array(elements)) => elements
                .iter()
                .enumerate()
                .map(|(i, element)| self.normalize_value(items, element, depth + 1).map_err(|e| e.at_index(i)))
                .collect::<Result<Vec<_>, _>>()
                .map(Literal::Array),
            (Rule::Array { .. }, other) => Err(ErrorKind::MalformedSequence(format!(
                "expected array, found {}",
                other.kind_name()
            ))
            .into()),

            (Rule::Object { properties, allow_unknown }, Literal::Object(entries)) => {
                self.object(properties, allow_unknown, entries, depth)
            }
            (Rule::Object { .. }, other) => Err(ErrorKind::MalformedStructure(format!(
                "expected object, found {}",
                other.kind_name()
            ))
            .into()),

            (Rule::Arbitrary, value) => self.arbitrary(value, depth),
        }
    }

    fn object(
        &self,
        properties: &BTreeMap<String, SchemaNode>,
        allow_unknown: bool,
        entries: &[(String, Literal)],
        depth: usize,
    ) -> Result<Literal, DefaultError> {
        let mut out = Vec::with_capacity(entries.len());
        for (key, value) in entries {
            let normalized = match properties.get(key) {
                Some(child) => self.normalize_value(child, value, depth + 1),
                // Free-form sub-object: no declared properties to check against.
                None if properties.is_empty() || allow_unknown => self.arbitrary(value, depth + 1),
                None => return Err(ErrorKind::UnknownProperty(key.clone()).into()),
            };
            out.push((key.clone(), normalized.map_err(|e| e.at_key(key.as_str()))?));
        }
        Ok(Literal::Object(out))
    }

    /// Any well-formed value; only the depth limit applies.
    fn arbitrary(&self, value: &Literal, depth: usize) -> Result<Literal, DefaultError> {
        self.check_depth(depth)?;
        match value {
            Literal::Array(elements) => elements
                .iter()
                .enumerate()
                .map(|(i, element)| self.arbitrary(element, depth + 1).map_err(|e| e.at_index(i)))
                .collect::<Result<Vec<_>, _>>()
                .map(Literal::Array),
            Literal::Object(entries) => {
                let mut out = Vec::with_capacity(entries.len());
                for (key, item) in entries {
                    let normalized = self.arbitrary(item, depth + 1).map_err(|e| e.at_key(key.as_str()))?;
                    out.push((key.clone(), normalized));
                }
                Ok(Literal::Object(out))
            }
            scalar => Ok(scalar.clone()),
        }
    }

    fn check_depth(&self, depth: usize) -> Result<(), DefaultError> {
        if depth > self.config.max_depth {
            return Err(ErrorKind::DepthExceeded(self.config.max_depth).into());
        }
        Ok(())
    }

    fn check_number(&self, text: &str, integer: bool, format: Option<&str>) -> Result<(), DefaultError> {
        let invalid = |expected: &str| -> DefaultError {
            ErrorKind::InvalidNumericLiteral {
                literal: text.to_string(),
                expected: expected.to_string(),
            }
            .into()
        };

        if integer && !is_integer_text(text) {
            return Err(invalid("integer"));
        }
        if !self.config.check_formats {
            return Ok(());
        }
        let fits = match format {
            Some("int32") => text.parse::<i32>().is_ok(),
            Some("int64") => text.parse::<i64>().is_ok(),
            Some("float") => text.parse::<f32>().is_ok_and(f32::is_finite),
            Some("double") => text.parse::<f64>().is_ok_and(f64::is_finite),
            _ => true,
        };
        match format {
            Some(format) if !fits => Err(invalid(format)),
            _ => Ok(()),
        }
    }
}

/// A complete JSON string literal is decoded; anything else is taken as-is.
fn string_content(text: &str) -> String {
    if !text.starts_with('"') {
        return text.to_string();
    }
    match Literal::parse(text) {
        Ok(Literal::String(s)) => s,
        _ => text.to_string(),
    }
}

fn numeric_kind(integer: bool) -> &'static str {
    if integer { "integer" } else { "number" }
}
