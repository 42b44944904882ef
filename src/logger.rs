//! Per-call logging seam.
//!
//! The fetcher emits exactly one [`FetchRecord`] per fetch call, success
//! and failure alike. The sink is a swappable dependency: absent a
//! configured logger everything goes to [`NopLogger`], and production
//! callers install [`TracingLogger`] to forward records to `tracing`.

use tracing::Level;

/// One structured record per fetch call
#[derive(Debug, Clone)]
pub struct FetchRecord<'a> {
    /// Severity: debug on success, warn on not-found, error otherwise
    pub level: Level,
    /// Rendered range header value, empty for whole-object reads
    pub range: &'a str,
    pub bucket: &'a str,
    pub key: &'a str,
    /// Elapsed wall-clock time of the call, regardless of outcome
    pub took_ms: u64,
    /// `None` on success, `"NotFound"` for missing objects, otherwise the
    /// error's description
    pub error: Option<&'a str>,
}

/// Sink for fetch records. Implementations must be safe for concurrent use.
pub trait FetchLogger: Send + Sync {
    fn log(&self, record: &FetchRecord<'_>);
}

/// Discard sink used when no logger is configured
pub struct NopLogger;

impl FetchLogger for NopLogger {
    fn log(&self, _record: &FetchRecord<'_>) {}
}

/// Forwards records to `tracing` at the record's severity.
pub struct TracingLogger;

impl FetchLogger for TracingLogger {
    fn log(&self, record: &FetchRecord<'_>) {
        match record.level {
            Level::WARN => tracing::warn!(
                range = record.range,
                bucket = record.bucket,
                key = record.key,
                took_ms = record.took_ms,
                error = record.error,
                "s3.get_object"
            ),
            Level::ERROR => tracing::error!(
                range = record.range,
                bucket = record.bucket,
                key = record.key,
                took_ms = record.took_ms,
                error = record.error,
                "s3.get_object"
            ),
            _ => tracing::debug!(
                range = record.range,
                bucket = record.bucket,
                key = record.key,
                took_ms = record.took_ms,
                error = record.error,
                "s3.get_object"
            ),
        }
    }
}
