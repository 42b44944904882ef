//! Configuration for the AWS-SDK client binding.

use serde::{Deserialize, Serialize};
use std::time::Duration;

use crate::errors::{FetchError, FetchResult};

/// Region the discovery call is issued against when none is configured.
pub const DEFAULT_REGION: &str = "us-east-1";

/// Fetcher configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FetcherConfig {
    /// Region used for bucket-region discovery and as the initial client
    /// binding
    pub default_region: String,

    /// Custom endpoint for S3-compatible storage (e.g. MinIO)
    pub endpoint: Option<String>,

    /// Force path-style addressing (required for MinIO)
    pub force_path_style: bool,

    /// Credential source
    pub credentials: S3Credentials,

    /// Connection timeout
    pub connect_timeout: Duration,

    /// Per-request timeout
    pub request_timeout: Duration,
}

impl Default for FetcherConfig {
    fn default() -> Self {
        Self {
            default_region: DEFAULT_REGION.to_string(),
            endpoint: None,
            force_path_style: false,
            credentials: S3Credentials::FromEnvironment,
            connect_timeout: Duration::from_secs(10),
            request_timeout: Duration::from_secs(60),
        }
    }
}

/// S3 credential sources
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum S3Credentials {
    /// Default provider chain (environment, instance metadata, ...)
    FromEnvironment,

    /// Explicit access key
    AccessKey {
        access_key_id: String,
        secret_access_key: String,
        session_token: Option<String>,
    },

    /// Named profile from shared credentials
    Profile { name: String },
}

impl FetcherConfig {
    /// Set the default region
    pub fn with_default_region(mut self, region: impl Into<String>) -> Self {
        self.default_region = region.into();
        self
    }

    /// Point at an S3-compatible endpoint
    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = Some(endpoint.into());
        self
    }

    /// Force path-style addressing
    pub fn with_path_style(mut self) -> Self {
        self.force_path_style = true;
        self
    }

    /// Set the credential source
    pub fn with_credentials(mut self, credentials: S3Credentials) -> Self {
        self.credentials = credentials;
        self
    }

    /// Validate the configuration
    pub fn validate(&self) -> FetchResult<()> {
        if self.default_region.is_empty() {
            return Err(FetchError::InvalidConfiguration {
                message: "default region cannot be empty".to_string(),
            });
        }

        if let Some(endpoint) = &self.endpoint {
            if endpoint.is_empty() {
                return Err(FetchError::InvalidConfiguration {
                    message: "endpoint cannot be empty".to_string(),
                });
            }
        }

        if let S3Credentials::AccessKey {
            access_key_id,
            secret_access_key,
            ..
        } = &self.credentials
        {
            if access_key_id.is_empty() || secret_access_key.is_empty() {
                return Err(FetchError::InvalidConfiguration {
                    message: "access key credentials cannot be empty".to_string(),
                });
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = FetcherConfig::default();
        assert_eq!(config.default_region, DEFAULT_REGION);
        assert!(config.endpoint.is_none());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_builder_pattern() {
        let config = FetcherConfig::default()
            .with_default_region("eu-west-1")
            .with_endpoint("http://localhost:9000")
            .with_path_style();

        assert_eq!(config.default_region, "eu-west-1");
        assert_eq!(config.endpoint, Some("http://localhost:9000".to_string()));
        assert!(config.force_path_style);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validation_rejects_empty_region() {
        let config = FetcherConfig::default().with_default_region("");
        assert!(matches!(
            config.validate(),
            Err(FetchError::InvalidConfiguration { .. })
        ));
    }

    #[test]
    fn test_validation_rejects_empty_access_key() {
        let config = FetcherConfig::default().with_credentials(S3Credentials::AccessKey {
            access_key_id: "".to_string(),
            secret_access_key: "secret".to_string(),
            session_token: None,
        });
        assert!(config.validate().is_err());
    }
}
