use crate::config::ApplyConfig;
use crate::encode::encode;
use crate::error::DefaultError;
use crate::normalize::Normalizer;
use crate::schema::{DefaultValue, SchemaNode};

/// `+default=<value>` marker: the raw value as written at the marker site.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DefaultMarker {
    pub value: String,
}

impl DefaultMarker {
    pub fn new(value: impl Into<String>) -> Self {
        Self { value: value.into() }
    }

    pub fn apply_to_schema(&self, node: &mut SchemaNode) -> Result<(), DefaultError> {
        apply_default(node, &self.value)
    }

    pub fn apply_to_schema_with(&self, node: &mut SchemaNode, config: &ApplyConfig) -> Result<(), DefaultError> {
        apply_default_with(node, &self.value, config)
    }
}

/// Validate `raw` against `node` and return its canonical bytes without
/// touching the node.
pub fn canonicalize(node: &SchemaNode, raw: &str, config: &ApplyConfig) -> Result<DefaultValue, DefaultError> {
    let literal = Normalizer::new(config).normalize_raw(node, raw)?;
    Ok(encode(&literal))
}

pub fn apply_default(node: &mut SchemaNode, raw: &str) -> Result<(), DefaultError> {
    apply_default_with(node, raw, &ApplyConfig::default())
}

/// Like [`apply_default`] with explicit config. On error `node.default` is
/// left as it was.
pub fn apply_default_with(node: &mut SchemaNode, raw: &str, config: &ApplyConfig) -> Result<(), DefaultError> {
    match canonicalize(node, raw, config) {
        Ok(default) => {
            tracing::debug!(schema_type = %node.type_name(), bytes = default.len(), "default applied");
            node.default = Some(default);
            Ok(())
        }
        Err(e) => {
            tracing::debug!(schema_type = %node.type_name(), path = %e.path(), error = %e.kind(), "default rejected");
            Err(e)
        }
    }
}
