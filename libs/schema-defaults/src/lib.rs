//! Type-directed normalization of schema default values.
//!
//! A raw default expression (as written in a marker) is validated against the
//! declared shape of a [`SchemaNode`] and re-emitted in a canonical,
//! minimal-whitespace JSON form that is stored in the node's `default`.

pub mod config;
pub mod encode;
pub mod error;
pub mod literal;
pub mod marker;
pub mod normalize;
pub mod path;
pub mod rule;
pub mod schema;

pub use config::ApplyConfig;
pub use encode::encode;
pub use error::{ConfigError, DefaultError, ErrorKind};
pub use literal::Literal;
pub use marker::{DefaultMarker, apply_default, apply_default_with, canonicalize};
pub use normalize::Normalizer;
pub use path::{FieldPath, PathSegment};
pub use rule::{Rule, select_rule};
pub use schema::{DefaultValue, SchemaNode, SchemaType};
