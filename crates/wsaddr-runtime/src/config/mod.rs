//! Runtime config loader (strict parsing).

pub mod schema;

use std::fs;

use wsaddr_core::error::{Result, WsAddrError};

pub use schema::{BindingConfig, FeatureConfig, ReferenceConfig, Role, RuntimeConfig};

pub fn load_from_file(path: &str) -> Result<RuntimeConfig> {
    let s = fs::read_to_string(path)
        .map_err(|e| WsAddrError::Internal(format!("read config failed: {e}")))?;
    load_from_str(&s)
}

pub fn load_from_str(s: &str) -> Result<RuntimeConfig> {
    let cfg: RuntimeConfig = serde_yaml::from_str(s)
        .map_err(|e| WsAddrError::BadConfig(format!("invalid yaml: {e}")))?;
    cfg.validate()?;
    Ok(cfg)
}
