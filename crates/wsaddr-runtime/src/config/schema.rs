use std::collections::HashSet;

use serde::{Deserialize, Serialize};
use wsaddr_core::error::{Result, WsAddrError};
use wsaddr_core::Responses;

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RuntimeConfig {
    pub version: u32,

    #[serde(default)]
    pub server: ServerSection,

    #[serde(default)]
    pub bindings: Vec<BindingConfig>,

    #[serde(default)]
    pub references: Vec<ReferenceConfig>,
}

impl RuntimeConfig {
    pub fn validate(&self) -> Result<()> {
        if self.version != 1 {
            return Err(WsAddrError::UnsupportedVersion);
        }
        if self.bindings.is_empty() && self.references.is_empty() {
            return Err(WsAddrError::BadConfig(
                "at least one binding or reference is required".into(),
            ));
        }

        self.server.validate()?;

        let mut seen = HashSet::new();
        for b in &self.bindings {
            if b.name.trim().is_empty() {
                return Err(WsAddrError::BadConfig("bindings[].name must not be empty".into()));
            }
            if !seen.insert(b.name.as_str()) {
                return Err(WsAddrError::BadConfig(format!("duplicate binding name: {}", b.name)));
            }
        }

        let mut seen = HashSet::new();
        for r in &self.references {
            if r.name.trim().is_empty() {
                return Err(WsAddrError::BadConfig("references[].name must not be empty".into()));
            }
            if !seen.insert(r.name.as_str()) {
                return Err(WsAddrError::BadConfig(format!("duplicate reference name: {}", r.name)));
            }
        }

        Ok(())
    }
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ServerSection {
    #[serde(default = "default_listen")]
    pub listen: String,
}

impl Default for ServerSection {
    fn default() -> Self {
        Self {
            listen: default_listen(),
        }
    }
}

impl ServerSection {
    pub fn validate(&self) -> Result<()> {
        self.listen
            .parse::<std::net::SocketAddr>()
            .map_err(|e| WsAddrError::BadConfig(format!("server.listen must be a socket address: {e}")))?;
        Ok(())
    }
}

fn default_listen() -> String {
    "0.0.0.0:8080".into()
}

/// Which end of the exchange a binding sits on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    Endpoint,
    Client,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct BindingConfig {
    pub name: String,
    #[serde(default = "default_role")]
    pub role: Role,
    #[serde(default)]
    pub features: Vec<FeatureConfig>,
}

fn default_role() -> Role {
    Role::Endpoint
}

/// One capability entry. Refinements not used by the capability are inert.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FeatureConfig {
    pub id: String,
    #[serde(default = "default_enabled")]
    pub enabled: bool,
    #[serde(default)]
    pub required: bool,
    #[serde(default)]
    pub responses: Responses,
}

fn default_enabled() -> bool {
    true
}

/// Declared service reference (resolved once at startup).
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ReferenceConfig {
    pub name: String,
    /// Service class the reference is created from.
    #[serde(default)]
    pub service: String,
    /// Type handed to the holder: the service itself or one of its ports.
    /// Defaults to `service` when omitted.
    #[serde(default)]
    pub service_type: Option<String>,
    #[serde(default)]
    pub wsdl_location: Option<String>,
    #[serde(default)]
    pub lookup: Option<String>,
    #[serde(default)]
    pub mapped_name: Option<String>,
    #[serde(default)]
    pub features: Vec<FeatureConfig>,
}
