//! Pagination envelope for list endpoints.
//!
//! List responses are wrapped in a metadata envelope rather than returned as
//! a bare array: the current page, item/page counts, navigation links and
//! has-previous/has-next flags travel under a `pagination` key next to the
//! `data` payload.

use serde::{Deserialize, Serialize};

/// Default number of items per page
const DEFAULT_PAGE_SIZE: u32 = 10;

/// Upper bound a client may request via the `limit` query parameter
const MAX_PAGE_SIZE: u32 = 20;

/// Pagination query parameters for list endpoints (`?page=2&limit=10`)
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct PageQuery {
    /// Requested page number (1-indexed)
    #[serde(default = "default_page")]
    pub page: u32,

    /// Requested page size
    #[serde(default = "default_limit")]
    pub limit: u32,
}

impl Default for PageQuery {
    fn default() -> Self {
        Self {
            page: default_page(),
            limit: default_limit(),
        }
    }
}

impl PageQuery {
    /// Create a query with sanitized values
    pub fn new(page: u32, limit: u32) -> Self {
        Self { page, limit }.sanitized()
    }

    /// Clamp the page to at least 1 and the limit to `1..=MAX_PAGE_SIZE`
    pub fn sanitized(self) -> Self {
        Self {
            page: self.page.max(1),
            limit: self.limit.clamp(1, MAX_PAGE_SIZE),
        }
    }

    /// Offset into the collection for SQL queries
    pub fn offset(&self) -> u64 {
        u64::from(self.page.saturating_sub(1)) * u64::from(self.limit)
    }

    /// Page size for SQL queries
    pub fn page_size(&self) -> u64 {
        u64::from(self.limit)
    }
}

/// Metadata block of the pagination envelope
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaginationMeta {
    /// Current page number (1-indexed)
    pub current_page: u32,

    /// Total number of items across all pages
    pub items_count: u64,

    /// Total number of pages (1 for an empty collection)
    pub pages_count: u32,

    /// Link to the previous page, null on the first page
    pub previous_page: Option<String>,

    /// Link to the next page, null on the last page
    pub next_page: Option<String>,

    /// Link to the first page
    pub first_page: String,

    /// Link to the last page
    pub last_page: String,

    /// Whether a previous page exists
    pub has_previous: bool,

    /// Whether a next page exists
    pub has_next: bool,
}

/// Paginated list response: `{ "pagination": { .. }, "data": [..] }`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PaginatedResponse<T> {
    pub pagination: PaginationMeta,
    pub data: Vec<T>,
}

impl<T> PaginatedResponse<T> {
    /// Build the envelope for one page of results.
    ///
    /// `base_path` is the path of the list endpoint; navigation links are
    /// rendered as `{base_path}?page=N&limit=L`.
    pub fn new(data: Vec<T>, query: PageQuery, total: u64, base_path: &str) -> Self {
        let query = query.sanitized();
        let pages_count = pages_count(total, query.limit);
        let current_page = query.page;

        let link = |page: u32| format!("{}?page={}&limit={}", base_path, page, query.limit);
        let has_previous = current_page > 1;
        let has_next = current_page < pages_count;

        Self {
            pagination: PaginationMeta {
                current_page,
                items_count: total,
                pages_count,
                previous_page: has_previous.then(|| link(current_page - 1)),
                next_page: has_next.then(|| link(current_page + 1)),
                first_page: link(1),
                last_page: link(pages_count),
                has_previous,
                has_next,
            },
            data,
        }
    }

    /// Transform the data items, keeping the metadata intact
    pub fn map<U, F>(self, f: F) -> PaginatedResponse<U>
    where
        F: FnMut(T) -> U,
    {
        PaginatedResponse {
            pagination: self.pagination,
            data: self.data.into_iter().map(f).collect(),
        }
    }
}

/// `ceil(total / limit)`, with an empty collection counted as one page so the
/// first page always exists.
fn pages_count(total: u64, limit: u32) -> u32 {
    if total == 0 {
        return 1;
    }
    total.div_ceil(u64::from(limit)) as u32
}

fn default_page() -> u32 {
    1
}

fn default_limit() -> u32 {
    DEFAULT_PAGE_SIZE
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pages_count_is_ceiling_of_items_over_limit() {
        assert_eq!(pages_count(32, 10), 4);
        assert_eq!(pages_count(30, 10), 3);
        assert_eq!(pages_count(1, 10), 1);
        assert_eq!(pages_count(21, 20), 2);
    }

    #[test]
    fn empty_collection_still_has_one_page() {
        let envelope = PaginatedResponse::<u32>::new(vec![], PageQuery::default(), 0, "/users");
        assert_eq!(envelope.pagination.pages_count, 1);
        assert_eq!(envelope.pagination.current_page, 1);
        assert!(!envelope.pagination.has_next);
        assert!(!envelope.pagination.has_previous);
    }

    #[test]
    fn has_next_is_false_only_on_last_page() {
        for page in 1..=4 {
            let envelope = PaginatedResponse::new(
                vec![0u32; 10],
                PageQuery::new(page, 10),
                32,
                "/users",
            );
            assert_eq!(envelope.pagination.has_next, page != 4);
        }
    }

    #[test]
    fn navigation_links_point_at_adjacent_pages() {
        let envelope = PaginatedResponse::new(vec![0u32; 10], PageQuery::new(3, 10), 32, "/users");
        let meta = &envelope.pagination;
        assert_eq!(meta.previous_page.as_deref(), Some("/users?page=2&limit=10"));
        assert_eq!(meta.next_page.as_deref(), Some("/users?page=4&limit=10"));
        assert_eq!(meta.first_page, "/users?page=1&limit=10");
        assert_eq!(meta.last_page, "/users?page=4&limit=10");
    }

    #[test]
    fn edge_pages_omit_their_missing_neighbor() {
        let first = PaginatedResponse::new(vec![0u32; 10], PageQuery::new(1, 10), 32, "/users");
        assert!(first.pagination.previous_page.is_none());
        assert!(first.pagination.next_page.is_some());

        let last = PaginatedResponse::new(vec![0u32; 2], PageQuery::new(4, 10), 32, "/users");
        assert!(last.pagination.previous_page.is_some());
        assert!(last.pagination.next_page.is_none());
    }

    #[test]
    fn limit_is_clamped_to_the_maximum_page_size() {
        let query = PageQuery::new(1, 500);
        assert_eq!(query.limit, MAX_PAGE_SIZE);

        let query = PageQuery::new(0, 0);
        assert_eq!(query.page, 1);
        assert_eq!(query.limit, 1);
    }

    #[test]
    fn offset_advances_by_page_size() {
        assert_eq!(PageQuery::new(1, 10).offset(), 0);
        assert_eq!(PageQuery::new(3, 10).offset(), 20);
    }

    #[test]
    fn map_preserves_pagination_metadata() {
        let envelope = PaginatedResponse::new(vec![1u32, 2, 3], PageQuery::new(1, 10), 3, "/users");
        let mapped = envelope.map(|n| n.to_string());
        assert_eq!(mapped.data, vec!["1", "2", "3"]);
        assert_eq!(mapped.pagination.items_count, 3);
        assert_eq!(mapped.pagination.pages_count, 1);
    }
}
