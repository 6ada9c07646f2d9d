use serde::{Deserialize, Serialize};

/// Success envelope returned by every backend collection endpoint:
/// `{ data, stats?, pagination? }`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiEnvelope<T, S = serde_json::Value> {
    pub data: T,
    #[serde(default = "Option::default", skip_serializing_if = "Option::is_none")]
    pub stats: Option<S>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pagination: Option<PaginationMeta>,
}

/// Pagination metadata as reported by the backend.
///
/// Navigation (`has_next` / `has_prev`) is taken from here verbatim and is
/// never recomputed on the client.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaginationMeta {
    #[serde(default = "first_page")]
    pub current_page: i64,
    pub total_pages: i64,
    pub total_items: i64,
    pub has_next: bool,
    pub has_prev: bool,
}

fn first_page() -> i64 {
    1
}

impl PaginationMeta {
    /// Metadata for an unpaginated response: everything fits on one page.
    pub fn single_page(total_items: usize) -> Self {
        Self {
            current_page: 1,
            total_pages: 1,
            total_items: total_items as i64,
            has_next: false,
            has_prev: false,
        }
    }
}

/// One page of results plus the aggregate counts the backend computed for
/// the whole filtered set. Replaced wholesale on every fetch.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Paginated<T, S> {
    pub items: Vec<T>,
    pub pagination: PaginationMeta,
    pub stats: Option<S>,
}

impl<T, S> Paginated<T, S> {
    pub fn from_envelope(envelope: ApiEnvelope<Vec<T>, S>) -> Self {
        let pagination = envelope
            .pagination
            .unwrap_or_else(|| PaginationMeta::single_page(envelope.data.len()));
        Self {
            items: envelope.data,
            pagination,
            stats: envelope.stats,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn envelope_with_pagination_is_taken_verbatim() {
        let json = r#"{
            "data": [1, 2, 3],
            "pagination": {"currentPage": 2, "totalPages": 4, "totalItems": 31, "hasNext": true, "hasPrev": true}
        }"#;
        let envelope: ApiEnvelope<Vec<i32>> = serde_json::from_str(json).unwrap();
        let page = Paginated::from_envelope(envelope);
        assert_eq!(page.items, vec![1, 2, 3]);
        assert_eq!(page.pagination.total_items, 31);
        assert!(page.pagination.has_next);
        assert!(page.pagination.has_prev);
        assert!(page.stats.is_none());
    }

    #[test]
    fn envelope_without_pagination_is_single_page() {
        let envelope: ApiEnvelope<Vec<i32>> = serde_json::from_str(r#"{"data": [7]}"#).unwrap();
        let page = Paginated::from_envelope(envelope);
        assert_eq!(page.pagination, PaginationMeta::single_page(1));
        assert!(!page.pagination.has_next);
    }

    #[test]
    fn pagination_defaults_current_page() {
        let meta: PaginationMeta = serde_json::from_str(
            r#"{"totalPages": 1, "totalItems": 0, "hasNext": false, "hasPrev": false}"#,
        )
        .unwrap();
        assert_eq!(meta.current_page, 1);
    }
}
