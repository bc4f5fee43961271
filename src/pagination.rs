//! Pagination query parameters and the slicing helper shared by the
//! announcement endpoints.

use serde::Deserialize;
use std::num::NonZeroUsize;

/// Default page size when the client sends no `limit`.
pub const DEFAULT_LIMIT: usize = 100;

/// Pagination query parameters.
///
/// `limit` must be at least 1 (a `limit=0` query is rejected during
/// deserialization, before any fetch runs) and `offset` at least 0, which the
/// types enforce.
#[derive(Debug, Clone, Copy, Deserialize)]
pub struct Pagination {
    /// Number of announcements to return.
    #[serde(default = "default_limit")]
    pub limit: NonZeroUsize,
    /// Number of announcements to skip.
    #[serde(default)]
    pub offset: usize,
}

fn default_limit() -> NonZeroUsize {
    NonZeroUsize::new(DEFAULT_LIMIT).unwrap()
}

/// Clamped sub-sequence `[offset, offset + limit)` of `items`.
///
/// An `offset` at or past the end yields an empty vector. The input is never
/// mutated, so repeated calls with the same arguments return the same slice.
pub fn paginate<T: Clone>(items: &[T], offset: usize, limit: usize) -> Vec<T> {
    items.iter().skip(offset).take(limit).cloned().collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_apply_when_query_is_empty() {
        let pagination: Pagination = serde_json::from_str("{}").unwrap();
        assert_eq!(pagination.limit.get(), DEFAULT_LIMIT);
        assert_eq!(pagination.offset, 0);
    }

    #[test]
    fn test_explicit_values_override_defaults() {
        let pagination: Pagination = serde_json::from_str(r#"{"limit": 2, "offset": 5}"#).unwrap();
        assert_eq!(pagination.limit.get(), 2);
        assert_eq!(pagination.offset, 5);
    }

    #[test]
    fn test_zero_limit_is_rejected() {
        assert!(serde_json::from_str::<Pagination>(r#"{"limit": 0}"#).is_err());
    }

    #[test]
    fn test_slice_length_is_clamped() {
        let items: Vec<usize> = (0..10).collect();
        for offset in 0..15 {
            for limit in 1..15 {
                let page = paginate(&items, offset, limit);
                let expected = limit.min(items.len().saturating_sub(offset));
                assert_eq!(page.len(), expected, "offset={offset} limit={limit}");
            }
        }
    }

    #[test]
    fn test_successive_pages_reconstruct_the_input() {
        let items: Vec<usize> = (0..23).collect();
        for limit in [1, 4, 7, 23, 40] {
            let mut reconstructed = Vec::new();
            let mut offset = 0;
            loop {
                let page = paginate(&items, offset, limit);
                if page.is_empty() {
                    break;
                }
                reconstructed.extend(page);
                offset += limit;
            }
            assert_eq!(reconstructed, items, "limit={limit}");
        }
    }

    #[test]
    fn test_offset_past_end_yields_empty() {
        let items = vec!["a", "b", "c"];
        assert!(paginate(&items, 3, 10).is_empty());
        assert!(paginate(&items, 100, 1).is_empty());
    }

    #[test]
    fn test_middle_window() {
        let items = vec!["first", "second", "third"];
        assert_eq!(paginate(&items, 1, 2), vec!["second", "third"]);
    }

    #[test]
    fn test_is_idempotent() {
        let items: Vec<usize> = (0..6).collect();
        let first = paginate(&items, 2, 3);
        let second = paginate(&items, 2, 3);
        assert_eq!(first, second);
        assert_eq!(items, (0..6).collect::<Vec<_>>());
    }
}
