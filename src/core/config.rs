//! Local rc file configuration.
//!
//! The rc file is a JSON document with a `targets` array. Targets carry
//! optional variable mappings consumed read-only by the variable resolver;
//! nothing here ever writes the file back.

use crate::core::paths;
use crate::error::{Error, Result};
use crate::utils::io;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::Path;

/// A named deployment/build configuration record.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Target {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub server_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tgt_deploy_vars: Option<HashMap<String, String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tgt_build_vars: Option<HashMap<String, String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub auth_info: Option<HashMap<String, String>>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LocalConfig {
    #[serde(default)]
    pub targets: Vec<Target>,
}

impl LocalConfig {
    pub fn find_target(&self, name: &str) -> Option<&Target> {
        self.targets.iter().find(|t| t.name == name)
    }
}

/// Load the local rc file. A missing file is not an error.
pub fn load_local_config() -> Result<Option<LocalConfig>> {
    let path = paths::rc_file()?;
    load_local_config_from(&path)
}

pub fn load_local_config_from(path: &Path) -> Result<Option<LocalConfig>> {
    if !path.exists() {
        return Ok(None);
    }
    let raw = io::read_file(path, "read rc file")?;
    let config = serde_json::from_str(&raw)
        .map_err(|e| Error::config_invalid_json(path.to_string_lossy(), e))?;
    Ok(Some(config))
}

/// Look up a target by name in the local rc file, erroring when absent.
pub fn require_target(name: &str) -> Result<Target> {
    let config = load_local_config()?.ok_or_else(|| Error::target_not_found(name))?;
    config
        .find_target(name)
        .cloned()
        .ok_or_else(|| Error::target_not_found(name))
}
