//! Store configuration
//!
//! Connection details and credentials for the remote store, resolved from
//! the environment before the client is constructed. Credential acquisition
//! beyond this lookup is out of scope for the engine.

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Environment variable holding the store endpoint URL
pub const ENV_ENDPOINT: &str = "OCP_ENDPOINT";
/// Environment variable holding the access key
pub const ENV_ACCESS_KEY: &str = "OCP_ACCESS_KEY";
/// Environment variable holding the secret key
pub const ENV_SECRET_KEY: &str = "OCP_SECRET_KEY";
/// Environment variable holding the region (optional)
pub const ENV_REGION: &str = "OCP_REGION";

fn default_region() -> String {
    "us-east-1".to_string()
}

/// Connection configuration for an S3-compatible endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StoreConfig {
    /// Endpoint URL
    pub endpoint: String,

    /// Access key ID
    pub access_key: String,

    /// Secret access key
    pub secret_key: String,

    /// Region
    #[serde(default = "default_region")]
    pub region: String,

    /// Use path-style bucket addressing (required for MinIO and friends)
    #[serde(default = "default_true")]
    pub path_style: bool,
}

fn default_true() -> bool {
    true
}

impl StoreConfig {
    /// Create a new config with required fields and default region
    pub fn new(
        endpoint: impl Into<String>,
        access_key: impl Into<String>,
        secret_key: impl Into<String>,
    ) -> Self {
        Self {
            endpoint: endpoint.into(),
            access_key: access_key.into(),
            secret_key: secret_key.into(),
            region: default_region(),
            path_style: true,
        }
    }

    /// Resolve the configuration from the environment
    ///
    /// Missing required variables produce a Config error with a hint naming
    /// the variable to export.
    pub fn from_env() -> Result<Self> {
        let endpoint = require_env(ENV_ENDPOINT)?;
        let access_key = require_env(ENV_ACCESS_KEY)?;
        let secret_key = require_env(ENV_SECRET_KEY)?;
        let region = std::env::var(ENV_REGION).unwrap_or_else(|_| default_region());

        Ok(Self {
            endpoint,
            access_key,
            secret_key,
            region,
            path_style: true,
        })
    }
}

fn require_env(name: &str) -> Result<String> {
    std::env::var(name)
        .map_err(|_| Error::Config(format!("{name} is not set. Did you export {name}?")))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_store_config_new() {
        let config = StoreConfig::new("http://localhost:9000", "access", "secret");
        assert_eq!(config.endpoint, "http://localhost:9000");
        assert_eq!(config.region, "us-east-1");
        assert!(config.path_style);
    }

    #[test]
    fn test_require_env_missing() {
        let result = require_env("OCP_TEST_DEFINITELY_UNSET");
        let err = result.unwrap_err();
        assert!(err.to_string().contains("Did you export"));
    }
}
