//! Regional endpoint resolution for buckets.

use std::sync::Arc;
use tracing::debug;

use crate::client::{ClientError, ClientProvider, ObjectClient};
use crate::config::DEFAULT_REGION;
use crate::errors::{FetchError, FetchResult};

/// Resolves which regional client serves a bucket.
///
/// Buckets are region-pinned, but the discovery call itself can go to a
/// default endpoint. Resolving once up front lets every subsequent ranged
/// read hit the correct regional endpoint directly.
pub struct EndpointResolver {
    provider: Arc<dyn ClientProvider>,
    default_region: String,
}

impl EndpointResolver {
    pub fn new(provider: Arc<dyn ClientProvider>) -> Self {
        Self {
            provider,
            default_region: DEFAULT_REGION.to_string(),
        }
    }

    /// Override the region the discovery call is issued against
    pub fn with_default_region(mut self, region: impl Into<String>) -> Self {
        self.default_region = region.into();
        self
    }

    /// Return a client bound to the bucket's region.
    ///
    /// Issues exactly one discovery call; failures propagate immediately
    /// with no retries. An undiscoverable bucket is `NotFound`.
    pub async fn resolve(&self, bucket: &str) -> FetchResult<Arc<dyn ObjectClient>> {
        let client = self.provider.client_for_region(&self.default_region).await?;

        let region = match client.bucket_region(bucket).await {
            Ok(region) => region,
            Err(ClientError::NotFound) => return Err(FetchError::bucket_not_found(bucket)),
            Err(ClientError::Other(detail)) => return Err(FetchError::Other(detail)),
        };

        if region == self.default_region {
            return Ok(client);
        }

        debug!(bucket, %region, "bucket is hosted outside the default region");
        self.provider.client_for_region(&region).await
    }
}
