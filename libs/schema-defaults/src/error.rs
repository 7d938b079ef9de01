use crate::path::{FieldPath, PathSegment};

/// What went wrong while normalizing a default.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ErrorKind {
    #[error("unsupported schema kind: {0}")]
    UnsupportedSchemaKind(String),

    #[error("invalid boolean literal '{0}'")]
    InvalidBooleanLiteral(String),

    #[error("invalid {expected} literal '{literal}'")]
    InvalidNumericLiteral { literal: String, expected: String },

    #[error("expected string, found {0}")]
    InvalidStringLiteral(String),

    #[error("malformed sequence: {0}")]
    MalformedSequence(String),

    #[error("malformed structure: {0}")]
    MalformedStructure(String),

    #[error("unknown property '{0}'")]
    UnknownProperty(String),

    #[error("null is not allowed for a non-nullable schema")]
    NullNotAllowed,

    #[error("value nested deeper than {0} levels")]
    DepthExceeded(usize),
}

/// A rejected default, with the position inside the value where it failed.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid default at {path}: {kind}")]
pub struct DefaultError {
    path: FieldPath,
    kind: ErrorKind,
}

impl DefaultError {
    pub fn new(kind: ErrorKind) -> Self {
        Self { path: FieldPath::root(), kind }
    }

    pub fn kind(&self) -> &ErrorKind {
        &self.kind
    }

    pub fn path(&self) -> &FieldPath {
        &self.path
    }

    /// Mark the error as coming from array element `index`.
    pub fn at_index(mut self, index: usize) -> Self {
        self.path.prepend(PathSegment::Index(index));
        self
    }

    /// Mark the error as coming from object property `key`.
    pub fn at_key(mut self, key: impl Into<String>) -> Self {
        self.path.prepend(PathSegment::Key(key.into()));
        self
    }
}

impl From<ErrorKind> for DefaultError {
    fn from(kind: ErrorKind) -> Self {
        Self::new(kind)
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("config parse: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("config value '{field}': {detail}")]
    Invalid { field: &'static str, detail: String },
}
