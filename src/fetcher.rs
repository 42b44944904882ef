//! The object fetcher: parse once, resolve once, then ranged reads.

use std::sync::Arc;
use std::time::Instant;
use tokio_util::sync::CancellationToken;
use tracing::Level;

use crate::client::{ClientError, ObjectBody, ObjectClient};
use crate::config::FetcherConfig;
use crate::errors::{FetchError, FetchResult};
use crate::logger::{FetchLogger, FetchRecord, NopLogger};
use crate::range::ByteRange;
use crate::resolver::EndpointResolver;
use crate::sdk::SdkClientProvider;
use crate::uri::ObjectUri;

/// Fetches byte ranges of one object addressed by a `scheme://bucket/path`
/// URI.
///
/// Built once per URI; client, bucket, and key are immutable afterwards,
/// so concurrent [`fetch`](Self::fetch) calls need no synchronization.
/// Each call issues exactly one read request: no retries, no caching.
pub struct ObjectFetcher {
    client: Arc<dyn ObjectClient>,
    bucket: String,
    key: String,
    logger: Arc<dyn FetchLogger>,
}

impl ObjectFetcher {
    /// Parse the URI and resolve the bucket's regional client.
    ///
    /// Fails closed: an unparsable URI or unresolvable bucket never yields
    /// a partially-usable fetcher. The logger starts as a discard sink.
    pub async fn new(uri: &str, resolver: &EndpointResolver) -> FetchResult<Self> {
        let parsed = ObjectUri::parse(uri)?;
        let client = resolver.resolve(&parsed.bucket).await?;
        Ok(Self {
            client,
            bucket: parsed.bucket,
            key: parsed.path,
            logger: Arc::new(NopLogger),
        })
    }

    /// Production entry point: build the AWS-SDK provider from `config`
    /// and construct against it.
    pub async fn connect(uri: &str, config: FetcherConfig) -> FetchResult<Self> {
        config.validate()?;
        let default_region = config.default_region.clone();
        let provider = Arc::new(SdkClientProvider::new(config));
        let resolver = EndpointResolver::new(provider).with_default_region(default_region);
        Self::new(uri, &resolver).await
    }

    /// Replace the logger. Configuration-time only: the exclusive borrow
    /// keeps swaps from racing in-flight fetches.
    pub fn set_logger(&mut self, logger: Arc<dyn FetchLogger>) {
        self.logger = logger;
    }

    pub fn bucket(&self) -> &str {
        &self.bucket
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    /// Read a byte range of the object.
    ///
    /// Offset semantics: neither given reads the whole object, only
    /// `start` reads to the end, both read the closed interval inclusive
    /// of `end`. Cancelling `cancel` aborts the in-flight request and
    /// returns [`FetchError::Cancelled`] promptly.
    ///
    /// Every outcome is logged exactly once before returning; the fetcher
    /// remains usable after a failed call.
    pub async fn fetch(
        &self,
        cancel: &CancellationToken,
        start: Option<u64>,
        end: Option<u64>,
    ) -> FetchResult<ObjectBody> {
        let range = match ByteRange::from_offsets(start, end) {
            Ok(range) => range,
            Err(err) => {
                // Rejected locally, before any request is issued
                self.log(Level::ERROR, "", 0, Some(&err.to_string()));
                return Err(err);
            }
        };
        let header = range.header_value();
        let range_str = header.as_deref().unwrap_or("");

        let started = Instant::now();
        // Biased so a cancelled token always wins over a ready response
        let outcome = tokio::select! {
            biased;
            _ = cancel.cancelled() => Err(FetchError::Cancelled),
            result = self.client.get_object(&self.bucket, &self.key, header.as_deref()) => {
                result.map_err(|err| match err {
                    ClientError::NotFound => FetchError::NotFound {
                        key: self.key.clone(),
                    },
                    ClientError::Other(detail) => FetchError::Other(detail),
                })
            }
        };
        let took_ms = started.elapsed().as_millis() as u64;

        match outcome {
            Ok(body) => {
                self.log(Level::DEBUG, range_str, took_ms, None);
                Ok(body)
            }
            Err(err @ FetchError::NotFound { .. }) => {
                self.log(Level::WARN, range_str, took_ms, Some("NotFound"));
                Err(err)
            }
            Err(err) => {
                self.log(Level::ERROR, range_str, took_ms, Some(&err.to_string()));
                Err(err)
            }
        }
    }

    fn log(&self, level: Level, range: &str, took_ms: u64, error: Option<&str>) {
        self.logger.log(&FetchRecord {
            level,
            range,
            bucket: &self.bucket,
            key: &self.key,
            took_ms,
            error,
        });
    }
}
