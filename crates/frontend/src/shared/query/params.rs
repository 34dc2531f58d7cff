use contracts::shared::list::Pagination;
use contracts::shared::sentinel::Sentinel;

/// Ordered query-string builder.
///
/// `opt` drops values equal to their unset sentinel (`"all"`, `""`, `-1`):
/// the backend reads the presence of a parameter as a filter.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryParams {
    pairs: Vec<(&'static str, String)>,
}

impl QueryParams {
    pub fn new() -> Self {
        Self::default()
    }

    /// Always serialized
    pub fn set(mut self, key: &'static str, value: impl ToString) -> Self {
        self.pairs.push((key, value.to_string()));
        self
    }

    /// Serialized unless `value` is its unset sentinel
    pub fn opt<V>(self, key: &'static str, value: V) -> Self
    where
        V: Sentinel + ToString,
    {
        if value.is_unset() {
            self
        } else {
            self.set(key, value)
        }
    }

    pub fn page(self, pagination: Pagination) -> Self {
        self.opt("page", pagination.page)
            .opt("limit", pagination.limit)
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    pub fn to_query_string(&self) -> String {
        self.pairs
            .iter()
            .map(|(k, v)| format!("{}={}", k, urlencoding::encode(v)))
            .collect::<Vec<_>>()
            .join("&")
    }

    /// `path?query`, or just `path` when nothing survived the sentinel filter
    pub fn append_to(&self, path: &str) -> String {
        if self.is_empty() {
            path.to_string()
        } else {
            format!("{}?{}", path, self.to_query_string())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sentinels_are_omitted() {
        let url = QueryParams::new()
            .set("sortOrder", "desc")
            .opt("status", "all")
            .opt("search", "")
            .opt("faqId", -1i64)
            .opt("categoryId", "c1")
            .append_to("/content");
        assert_eq!(url, "/content?sortOrder=desc&categoryId=c1");
    }

    #[test]
    fn test_values_are_encoded() {
        let url = QueryParams::new()
            .opt("search", "free money & more")
            .append_to("/x");
        assert_eq!(url, "/x?search=free%20money%20%26%20more");
    }

    #[test]
    fn test_pagination() {
        assert_eq!(
            QueryParams::new().page(Pagination::default()).to_query_string(),
            "page=1&limit=10"
        );
        assert_eq!(QueryParams::new().page(Pagination::all()).append_to("/docs"), "/docs");
        assert_eq!(
            QueryParams::new().page(Pagination::new(3, 25)).to_query_string(),
            "page=3&limit=25"
        );
    }
}
