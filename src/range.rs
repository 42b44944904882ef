//! Byte-range construction for ranged reads.

use crate::errors::{FetchError, FetchResult};

/// Byte interval requested from an object.
///
/// Built from the two optional offsets a caller passes to
/// [`crate::ObjectFetcher::fetch`]. `start <= end` is not validated here;
/// a reversed closed range is surfaced as a storage-service error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ByteRange {
    /// Whole object, no range constraint sent
    Full,
    /// From the start offset to the end of the object
    From(u64),
    /// Closed interval, inclusive on both ends
    Closed(u64, u64),
}

impl ByteRange {
    /// Build a range from optional start/end offsets.
    ///
    /// An end offset without a start offset is rejected: suffix-range
    /// semantics were never part of the fetch contract, so the combination
    /// fails fast instead of guessing.
    pub fn from_offsets(start: Option<u64>, end: Option<u64>) -> FetchResult<Self> {
        match (start, end) {
            (None, None) => Ok(ByteRange::Full),
            (Some(start), None) => Ok(ByteRange::From(start)),
            (Some(start), Some(end)) => Ok(ByteRange::Closed(start, end)),
            (None, Some(_)) => Err(FetchError::InvalidRange {
                message: "end offset given without start offset".to_string(),
            }),
        }
    }

    /// Rendered HTTP `Range` header value; `None` for a whole-object read.
    pub fn header_value(&self) -> Option<String> {
        match self {
            ByteRange::Full => None,
            ByteRange::From(start) => Some(format!("bytes={}-", start)),
            ByteRange::Closed(start, end) => Some(format!("bytes={}-{}", start, end)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_offsets_means_whole_object() {
        let range = ByteRange::from_offsets(None, None).unwrap();
        assert_eq!(range, ByteRange::Full);
        assert_eq!(range.header_value(), None);
    }

    #[test]
    fn test_open_ended_range() {
        let range = ByteRange::from_offsets(Some(10), None).unwrap();
        assert_eq!(range.header_value(), Some("bytes=10-".to_string()));
    }

    #[test]
    fn test_closed_range_is_inclusive() {
        let range = ByteRange::from_offsets(Some(10), Some(20)).unwrap();
        assert_eq!(range.header_value(), Some("bytes=10-20".to_string()));
    }

    #[test]
    fn test_end_without_start_rejected() {
        let err = ByteRange::from_offsets(None, Some(20)).unwrap_err();
        assert!(matches!(err, FetchError::InvalidRange { .. }));
    }

    #[test]
    fn test_reversed_range_not_validated_locally() {
        // The service reports reversed ranges; construction accepts them.
        let range = ByteRange::from_offsets(Some(20), Some(10)).unwrap();
        assert_eq!(range.header_value(), Some("bytes=20-10".to_string()));
    }
}
