//! Parsing of `scheme://bucket/path` object URIs.

use url::Url;

use crate::errors::{FetchError, FetchResult};

/// Bucket and key parsed out of an object URI. Immutable once built.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ObjectUri {
    /// URI authority, verbatim
    pub bucket: String,
    /// Remainder with exactly one leading `/` stripped; the key may itself
    /// contain further separators and they are preserved as-is
    pub path: String,
}

impl ObjectUri {
    /// Parse an object URI. The scheme is accepted but not validated.
    /// No network or I/O side effects.
    pub fn parse(uri: &str) -> FetchResult<Self> {
        let parsed = Url::parse(uri).map_err(|e| FetchError::InvalidUri {
            uri: uri.to_string(),
            reason: e.to_string(),
        })?;
        let bucket = parsed.host_str().unwrap_or_default().to_string();
        let path = parsed.path();
        let path = path.strip_prefix('/').unwrap_or(path).to_string();
        Ok(Self { bucket, path })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_bucket_and_key() {
        let uri = ObjectUri::parse("s3://my-bucket/a/b/c.txt").unwrap();
        assert_eq!(uri.bucket, "my-bucket");
        assert_eq!(uri.path, "a/b/c.txt");
    }

    #[test]
    fn test_deep_separators_preserved() {
        let uri = ObjectUri::parse("s3://data/segments//0001/part.bin").unwrap();
        assert_eq!(uri.bucket, "data");
        assert_eq!(uri.path, "segments//0001/part.bin");
    }

    #[test]
    fn test_bucket_only() {
        let uri = ObjectUri::parse("s3://my-bucket").unwrap();
        assert_eq!(uri.bucket, "my-bucket");
        assert_eq!(uri.path, "");
    }

    #[test]
    fn test_scheme_not_validated() {
        let uri = ObjectUri::parse("minio://cache/objects/x").unwrap();
        assert_eq!(uri.bucket, "cache");
        assert_eq!(uri.path, "objects/x");
    }

    #[test]
    fn test_malformed_uris_rejected() {
        assert!(ObjectUri::parse("").unwrap_err().to_string().contains("invalid object URI"));
        assert!(matches!(
            ObjectUri::parse("not a uri"),
            Err(FetchError::InvalidUri { .. })
        ));
        // Control characters and spaces are not legal in an authority
        assert!(matches!(
            ObjectUri::parse("s3://my bucket/key"),
            Err(FetchError::InvalidUri { .. })
        ));
    }
}
