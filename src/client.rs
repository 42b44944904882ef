//! Capability seams between the fetcher and the storage transport.
//!
//! The traits here let the resolver and fetcher run against the real AWS
//! SDK binding ([`crate::sdk`]) or an in-memory double in tests. Both
//! calls a client exposes report "does not exist" as an explicit tagged
//! variant rather than leaving callers to inspect opaque error values.

use async_trait::async_trait;
use std::pin::Pin;
use std::sync::Arc;
use thiserror::Error;
use tokio::io::AsyncRead;

use crate::errors::FetchResult;

/// Readable byte stream returned from a fetch. Exclusively owned by the
/// caller from the moment it is returned; nothing is buffered behind it.
pub type ObjectBody = Pin<Box<dyn AsyncRead + Send>>;

/// Capability-level error reported by [`ObjectClient`] calls
#[derive(Error, Debug)]
pub enum ClientError {
    /// The bucket or key does not exist
    #[error("not found")]
    NotFound,

    /// Anything else, carried as the underlying error's description
    #[error("{0}")]
    Other(String),
}

/// A storage client bound to one regional endpoint.
#[async_trait]
pub trait ObjectClient: Send + Sync {
    /// Discover which region hosts `bucket`.
    ///
    /// `ClientError::NotFound` means the bucket is absent or inaccessible.
    async fn bucket_region(&self, bucket: &str) -> Result<String, ClientError>;

    /// Issue a single read for `bucket`/`key`. `range` is a rendered HTTP
    /// range header value, absent for whole-object reads.
    async fn get_object(
        &self,
        bucket: &str,
        key: &str,
        range: Option<&str>,
    ) -> Result<ObjectBody, ClientError>;
}

/// Builds clients bound to a given region.
///
/// Configuration and credential loading live behind this seam so the
/// resolver stays testable without environment mutation.
#[async_trait]
pub trait ClientProvider: Send + Sync {
    async fn client_for_region(&self, region: &str) -> FetchResult<Arc<dyn ObjectClient>>;
}
