use std::collections::BTreeMap;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::literal::Literal;

// ════════════════════════════════════════════════════════════════
//  Schema Type
// ════════════════════════════════════════════════════════════════

/// Declared `type` of a schema node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SchemaType {
    Boolean,
    Integer,
    Number,
    String,
    Array,
    Object,
}

impl std::fmt::Display for SchemaType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SchemaType::Boolean => write!(f, "boolean"),
            SchemaType::Integer => write!(f, "integer"),
            SchemaType::Number => write!(f, "number"),
            SchemaType::String => write!(f, "string"),
            SchemaType::Array => write!(f, "array"),
            SchemaType::Object => write!(f, "object"),
        }
    }
}

// ════════════════════════════════════════════════════════════════
//  Default Value
// ════════════════════════════════════════════════════════════════

/// Canonical serialized default: compact JSON, object keys in source order,
/// numbers exactly as written.
///
/// Only [`crate::encode`] builds one, so the contents are always valid JSON.
/// In a schema document it is embedded as a structured value, not as a
/// string; numbers there take their native type in the target format.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct DefaultValue(String);

impl DefaultValue {
    pub(crate) fn from_canonical(text: String) -> Self {
        Self(text)
    }

    pub fn as_bytes(&self) -> &[u8] {
        self.0.as_bytes()
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn to_literal(&self) -> Result<Literal, serde_json::Error> {
        Literal::parse(&self.0)
    }
}

impl std::fmt::Display for DefaultValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl Serialize for DefaultValue {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.to_literal().map_err(serde::ser::Error::custom)?.serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for DefaultValue {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Literal::deserialize(deserializer).map(|literal| crate::encode::encode(&literal))
    }
}

// ════════════════════════════════════════════════════════════════
//  Schema Node
// ════════════════════════════════════════════════════════════════

/// One node of a structural schema (OpenAPI v3 subset used by CRDs).
///
/// The caller owns the tree. Normalization only reads it, and
/// [`crate::apply_default`] writes `default` on the node it is given.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SchemaNode {
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub declared_type: Option<SchemaType>,

    /// Refinement such as `int32`, `int64`, `float`, `double`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub format: Option<String>,

    /// Element shape, required when `declared_type` is `array`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub items: Option<Box<SchemaNode>>,

    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub properties: BTreeMap<String, SchemaNode>,

    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub nullable: bool,

    #[serde(
        rename = "x-kubernetes-preserve-unknown-fields",
        default,
        skip_serializing_if = "std::ops::Not::not"
    )]
    pub allow_unknown_fields: bool,

    #[serde(
        rename = "x-kubernetes-int-or-string",
        default,
        skip_serializing_if = "std::ops::Not::not"
    )]
    pub int_or_string: bool,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default: Option<DefaultValue>,
}

impl SchemaNode {
    pub fn typed(declared_type: SchemaType) -> Self {
        Self {
            declared_type: Some(declared_type),
            ..Self::default()
        }
    }

    /// Shortcut: `type: array` with the given element schema.
    pub fn array(items: SchemaNode) -> Self {
        Self {
            items: Some(Box::new(items)),
            ..Self::typed(SchemaType::Array)
        }
    }

    /// Shortcut: `type: object` with the given properties.
    pub fn object<K, I>(properties: I) -> Self
    where
        K: Into<String>,
        I: IntoIterator<Item = (K, SchemaNode)>,
    {
        Self {
            properties: properties.into_iter().map(|(k, v)| (k.into(), v)).collect(),
            ..Self::typed(SchemaType::Object)
        }
    }

    /// Shortcut: untyped node that keeps any value.
    pub fn preserve_unknown() -> Self {
        Self {
            allow_unknown_fields: true,
            ..Self::default()
        }
    }

    /// Shortcut: untyped node that holds an integer or a string.
    pub fn int_or_string() -> Self {
        Self {
            int_or_string: true,
            ..Self::default()
        }
    }

    pub fn with_format(mut self, format: impl Into<String>) -> Self {
        self.format = Some(format.into());
        self
    }

    pub fn with_nullable(mut self, nullable: bool) -> Self {
        self.nullable = nullable;
        self
    }

    pub fn with_unknown_fields(mut self, allow: bool) -> Self {
        self.allow_unknown_fields = allow;
        self
    }

    pub fn type_name(&self) -> String {
        match self.declared_type {
            Some(t) => t.to_string(),
            None => "<unset>".to_string(),
        }
    }
}
