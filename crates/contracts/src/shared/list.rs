use serde::{Deserialize, Serialize};

use super::sentinel::UNSET;

pub const DEFAULT_PAGE: i64 = 1;
pub const DEFAULT_LIMIT: i64 = 10;

/// Paged list envelope returned by every listing endpoint
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListResponse<T> {
    pub items: Vec<T>,
    #[serde(default)]
    pub total: u64,
    #[serde(default = "default_page")]
    pub page: i64,
    #[serde(default = "default_limit")]
    pub limit: i64,
}

impl<T> Default for ListResponse<T> {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            total: 0,
            page: DEFAULT_PAGE,
            limit: DEFAULT_LIMIT,
        }
    }
}

impl<T> ListResponse<T> {
    pub fn total_pages(&self) -> i64 {
        total_pages(self.total, self.limit)
    }
}

/// Number of pages for `total` items; an unset limit means one page.
pub fn total_pages(total: u64, limit: i64) -> i64 {
    if limit <= 0 || total == 0 {
        return 1;
    }
    let limit = limit as u64;
    total.div_ceil(limit) as i64
}

fn default_page() -> i64 {
    DEFAULT_PAGE
}

fn default_limit() -> i64 {
    DEFAULT_LIMIT
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    Asc,
    #[default]
    Desc,
}

impl SortOrder {
    pub fn as_str(&self) -> &'static str {
        match self {
            SortOrder::Asc => "asc",
            SortOrder::Desc => "desc",
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            SortOrder::Asc => SortOrder::Desc,
            SortOrder::Desc => SortOrder::Asc,
        }
    }
}

/// Page/limit pair.
///
/// `UNSET` (-1) in either slot means "no paging, return everything" and is
/// left out of the query string, which is different from the 1/10 default.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Pagination {
    pub page: i64,
    pub limit: i64,
}

impl Default for Pagination {
    fn default() -> Self {
        Self {
            page: DEFAULT_PAGE,
            limit: DEFAULT_LIMIT,
        }
    }
}

impl Pagination {
    pub fn new(page: i64, limit: i64) -> Self {
        Self { page, limit }
    }

    pub fn all() -> Self {
        Self {
            page: UNSET,
            limit: UNSET,
        }
    }

    pub fn is_all(&self) -> bool {
        self.page == UNSET && self.limit == UNSET
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pagination_defaults() {
        let p = Pagination::default();
        assert_eq!(p.page, 1);
        assert_eq!(p.limit, 10);
        assert!(!p.is_all());
        assert!(Pagination::all().is_all());
    }

    #[test]
    fn test_total_pages() {
        let mut list: ListResponse<u8> = ListResponse::default();
        assert_eq!(list.total_pages(), 1);
        list.total = 21;
        assert_eq!(list.total_pages(), 3);
        list.limit = -1;
        assert_eq!(list.total_pages(), 1);
    }

    #[test]
    fn test_list_response_missing_paging_fields() {
        let list: ListResponse<String> =
            serde_json::from_str(r#"{"items":["a","b"]}"#).unwrap();
        assert_eq!(list.items.len(), 2);
        assert_eq!(list.page, 1);
        assert_eq!(list.limit, 10);
    }
}
