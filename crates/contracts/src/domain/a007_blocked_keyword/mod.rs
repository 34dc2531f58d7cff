pub mod schema;

use serde::{Deserialize, Serialize};

use crate::shared::list::Pagination;

/// Keyword excluded from content scraping
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BlockedKeyword {
    pub id: String,
    pub keyword: String,
    #[serde(default)]
    pub created_at: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BlockedKeywordArgs {
    pub pagination: Pagination,
    pub search: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AddBlockedKeywordsRequest {
    pub keywords: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RemoveBlockedKeywordsRequest {
    pub keyword_ids: Vec<String>,
}

/// Splits a comma or newline separated input into trimmed, de-duplicated keywords.
pub fn parse_keywords(input: &str) -> Vec<String> {
    let mut out: Vec<String> = Vec::new();
    for raw in input.split(|c| c == ',' || c == '\n') {
        let keyword = raw.trim();
        if !keyword.is_empty() && !out.iter().any(|k| k.eq_ignore_ascii_case(keyword)) {
            out.push(keyword.to_string());
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_keywords() {
        assert_eq!(
            parse_keywords("spam, casino\nCasino,, free money "),
            vec!["spam", "casino", "free money"]
        );
        assert!(parse_keywords(" ,\n").is_empty());
    }
}
