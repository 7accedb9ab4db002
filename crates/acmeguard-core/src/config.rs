//! Configuration types for the boundary layer
//!
//! Loading (files, env, CLI) belongs to the embedding service; this module
//! only defines the shape and its validation.

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::cidr::CidrList;

/// Boundary layer configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GuardConfig {
    /// Source ranges every update must come from, on top of per-tenant lists
    ///
    /// Empty (or all-invalid, once validated) means unrestricted.
    #[serde(default)]
    pub allow_from: CidrList,
}

impl GuardConfig {
    /// Create a new configuration with defaults
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the global source ranges
    pub fn with_allow_from(mut self, allow_from: impl Into<CidrList>) -> Self {
        self.allow_from = allow_from.into();
        self
    }

    /// Parse a configuration from JSON
    pub fn from_json(json: &str) -> Result<Self, crate::Error> {
        Ok(serde_json::from_str(json)?)
    }

    /// Validate the configuration
    ///
    /// Invalid ranges are dropped with a warning. A non-empty list with no
    /// valid range at all is an error: it would silently open every source.
    pub fn validate(&self) -> Result<(), crate::Error> {
        let entries = self.allow_from.entries();
        let valid = self.allow_from.valid_entries();

        if !entries.is_empty() && valid.is_empty() {
            return Err(crate::Error::config(format!(
                "allow_from has {} entries and none is a valid CIDR",
                entries.len()
            )));
        }

        for entry in entries.iter().filter(|e| !valid.contains(*e)) {
            warn!("Ignoring invalid allow_from entry: {:?}", entry);
        }

        Ok(())
    }
}
