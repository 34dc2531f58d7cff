use contracts::domain::a007_blocked_keyword::{
    AddBlockedKeywordsRequest, BlockedKeyword, BlockedKeywordArgs, RemoveBlockedKeywordsRequest,
};
use contracts::shared::list::ListResponse;
use serde_json::Value;

use crate::shared::query::{MutationEndpoint, QueryEndpoint, QueryParams, RequestSpec, Tag};

const BLOCKED_KEYWORDS: &str = "/content-moderation/blocked-keywords";

pub struct GetBlockedKeywords;

impl QueryEndpoint for GetBlockedKeywords {
    const NAME: &'static str = "getBlockedKeywords";
    type Args = BlockedKeywordArgs;
    type Output = ListResponse<BlockedKeyword>;

    fn request(args: &Self::Args) -> RequestSpec {
        let url = QueryParams::new()
            .page(args.pagination)
            .opt("search", args.search.as_str())
            .append_to(BLOCKED_KEYWORDS);
        RequestSpec::get(url)
    }

    fn provides(_: &Self::Args) -> Vec<Tag> {
        vec![Tag::BlockedKeywords]
    }
}

pub struct AddBlockedKeywords;

impl MutationEndpoint for AddBlockedKeywords {
    const NAME: &'static str = "addBlockedKeywords";
    type Args = AddBlockedKeywordsRequest;
    type Output = Value;

    fn request(args: &Self::Args) -> RequestSpec {
        RequestSpec::post(BLOCKED_KEYWORDS, args)
    }

    fn invalidates(_: &Self::Args) -> Vec<Tag> {
        vec![Tag::BlockedKeywords]
    }
}

pub struct RemoveBlockedKeywords;

impl MutationEndpoint for RemoveBlockedKeywords {
    const NAME: &'static str = "removeBlockedKeywords";
    type Args = RemoveBlockedKeywordsRequest;
    type Output = Value;

    fn request(args: &Self::Args) -> RequestSpec {
        RequestSpec::delete_with(BLOCKED_KEYWORDS, args)
    }

    fn invalidates(_: &Self::Args) -> Vec<Tag> {
        vec![Tag::BlockedKeywords]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::query::Method;

    #[test]
    fn test_listing_url() {
        let args = BlockedKeywordArgs {
            search: "cas".into(),
            ..BlockedKeywordArgs::default()
        };
        assert_eq!(
            GetBlockedKeywords::request(&args).url,
            "/content-moderation/blocked-keywords?page=1&limit=10&search=cas"
        );
    }

    #[test]
    fn test_remove_sends_ids_in_body() {
        let spec = RemoveBlockedKeywords::request(&RemoveBlockedKeywordsRequest {
            keyword_ids: vec!["k1".into(), "k2".into()],
        });
        assert_eq!(spec.method, Method::Delete);
        assert_eq!(spec.body.unwrap(), serde_json::json!({ "keywordIds": ["k1", "k2"] }));
    }
}
