//! Parameter presets stored as JSON files
//!
//! A preset file holds any subset of the [`Params`] fields; missing fields
//! take their value from [`Params::DEFAULT`]:
//!
//! ```json
//! { "memory": 19456, "iterations": 2, "parallelism": 1 }
//! ```

use std::fs;
use std::path::Path;

use crate::error::{HashError, Result};
use crate::params::Params;

/// Load a parameter preset from a JSON file
pub fn load_params(path: &Path) -> Result<Params> {
    let data = fs::read_to_string(path)?;
    let params: Params = serde_json::from_str(&data)?;

    if params.salt_length == 0 || params.key_length == 0 {
        return Err(HashError::Config(format!(
            "{}: salt_length and key_length must be positive",
            path.display()
        )));
    }

    tracing::debug!(path = %path.display(), ?params, "loaded parameter preset");
    Ok(params)
}

/// Write a parameter preset as pretty-printed JSON
pub fn save_params(path: &Path, params: &Params) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            fs::create_dir_all(parent)?;
        }
    }

    let json = serde_json::to_string_pretty(params)?;
    fs::write(path, json)?;
    Ok(())
}
