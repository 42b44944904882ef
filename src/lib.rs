//! Ranged reads of S3 objects addressed by `s3://bucket/key` URIs.
//!
//! A fetcher is built once per URI: the URI is parsed into bucket and key,
//! the bucket's region is discovered, and a client bound to the correct
//! regional endpoint is kept for every subsequent read. Each fetch issues
//! a single range-qualified request, distinguishes "does not exist" from
//! everything else, and emits one structured log record with its timing.
//!
//! - Capability seams ([`ObjectClient`], [`ClientProvider`]) keep the core
//!   testable against in-memory doubles
//! - Production binding over `aws-config` + `aws-sdk-s3`, including
//!   S3-compatible endpoints (MinIO)
//! - Per-call cancellation via `CancellationToken`
//! - No retries, no caching, no write paths

pub mod client;
pub mod config;
pub mod errors;
pub mod fetcher;
pub mod logger;
pub mod range;
pub mod resolver;
pub mod sdk;
pub mod uri;

pub use client::{ClientError, ClientProvider, ObjectBody, ObjectClient};
pub use config::{FetcherConfig, S3Credentials, DEFAULT_REGION};
pub use errors::{FetchError, FetchResult};
pub use fetcher::ObjectFetcher;
pub use logger::{FetchLogger, FetchRecord, NopLogger, TracingLogger};
pub use range::ByteRange;
pub use resolver::EndpointResolver;
pub use uri::ObjectUri;
