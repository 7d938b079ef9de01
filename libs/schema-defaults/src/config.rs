use serde::Deserialize;

use crate::error::ConfigError;

/// Knobs for default normalization.
///
/// Usually embedded in the generator's own TOML config; every field is optional.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ApplyConfig {
    /// Nesting depth past which a value is rejected with `DepthExceeded`.
    #[serde(default = "default_max_depth")]
    pub max_depth: usize,
    /// Range-check `int32`/`int64`/`float`/`double` formats.
    #[serde(default = "default_check_formats")]
    pub check_formats: bool,
}

fn default_max_depth() -> usize {
    64
}
fn default_check_formats() -> bool {
    true
}

impl Default for ApplyConfig {
    fn default() -> Self {
        Self {
            max_depth: default_max_depth(),
            check_formats: default_check_formats(),
        }
    }
}

impl ApplyConfig {
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.max_depth == 0 {
            return Err(ConfigError::Invalid {
                field: "max_depth",
                detail: "must be at least 1".into(),
            });
        }
        Ok(())
    }
}
