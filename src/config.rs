use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{ProtogenError, Result};
use crate::translator::ResultNaming;

/// Contents of an optional `protogen.toml`.
#[derive(Debug, Deserialize, Serialize, Default, Clone)]
pub struct ProtogenConfig {
    #[serde(default)]
    pub naming: NamingConfig,
}

#[derive(Debug, Deserialize, Serialize, Default, Clone)]
pub struct NamingConfig {
    /// Suffix reply fields with their position when a function has several
    /// results, so the generated message is valid proto3.
    #[serde(default)]
    pub unique_result_names: bool,
}

impl ProtogenConfig {
    pub fn result_naming(&self) -> ResultNaming {
        if self.naming.unique_result_names {
            ResultNaming::Positional
        } else {
            ResultNaming::Shared
        }
    }
}

/// Load configuration from an explicitly requested file. Unlike an absent
/// `--config`, a file that was asked for but is unreadable is an error.
pub fn load_config(path: &Path) -> Result<ProtogenConfig> {
    let content = std::fs::read_to_string(path)
        .map_err(|e| ProtogenError::Config(format!("{}: {}", path.display(), e)))?;
    toml::from_str(&content)
        .map_err(|e| ProtogenError::Config(format!("{}: {}", path.display(), e)))
}
