use contracts::domain::a004_content_library::{
    ContentActionRequest, ContentDetail, ContentItem, ContentListArgs, UpdateContentArgs,
    VettingLog, VettingLogArgs,
};
use contracts::shared::list::ListResponse;
use serde_json::Value;

use crate::shared::query::{MutationEndpoint, QueryEndpoint, QueryParams, RequestSpec, Tag};

const BASE: &str = "/content-moderation";

pub struct GetContentLibrary;

impl QueryEndpoint for GetContentLibrary {
    const NAME: &'static str = "getContentLibrary";
    type Args = ContentListArgs;
    type Output = ListResponse<ContentItem>;

    fn request(args: &Self::Args) -> RequestSpec {
        let url = QueryParams::new()
            .set("sortOrder", args.sort_order.as_str())
            .set("page", args.page)
            .set("limit", args.limit)
            .opt("status", args.status.as_str())
            .opt("search", args.search.as_str())
            .opt("confidenceScoreSort", args.confidence_score_sort.as_str())
            .opt("categoryId", args.category_id.as_str())
            .append_to(&format!("{BASE}/content-library"));
        RequestSpec::get(url)
    }

    fn provides(_: &Self::Args) -> Vec<Tag> {
        vec![Tag::ContentLibrary]
    }
}

pub struct GetContentDetail;

impl QueryEndpoint for GetContentDetail {
    const NAME: &'static str = "getContentDetail";
    type Args = String;
    type Output = ContentDetail;

    fn request(content_id: &Self::Args) -> RequestSpec {
        RequestSpec::get(format!("{BASE}/content-library-detail/{content_id}"))
    }

    fn provides(_: &Self::Args) -> Vec<Tag> {
        vec![Tag::ContentLibrary]
    }
}

pub struct UpdateContentMetadata;

impl MutationEndpoint for UpdateContentMetadata {
    const NAME: &'static str = "updateContentMetadata";
    type Args = UpdateContentArgs;
    type Output = Value;

    fn request(args: &Self::Args) -> RequestSpec {
        RequestSpec::put(format!("{BASE}/content-library-detail/{}", args.id), &args.body)
    }

    fn invalidates(_: &Self::Args) -> Vec<Tag> {
        vec![Tag::ContentLibrary]
    }
}

/// Approve / reject / flag. Every action writes a vetting log entry.
pub struct ContentAction;

impl MutationEndpoint for ContentAction {
    const NAME: &'static str = "contentAction";
    type Args = ContentActionRequest;
    type Output = Value;

    fn request(args: &Self::Args) -> RequestSpec {
        RequestSpec::post(format!("{BASE}/content-library-actions"), args)
    }

    fn invalidates(_: &Self::Args) -> Vec<Tag> {
        vec![Tag::ContentLibrary, Tag::VettingLogs]
    }
}

pub struct GetVettingLogs;

impl QueryEndpoint for GetVettingLogs {
    const NAME: &'static str = "getVettingLogs";
    type Args = VettingLogArgs;
    type Output = ListResponse<VettingLog>;

    fn request(args: &Self::Args) -> RequestSpec {
        let url = QueryParams::new()
            .page(args.pagination)
            .opt("contentId", args.content_id.as_str())
            .append_to(&format!("{BASE}/vetting-logs"));
        RequestSpec::get(url)
    }

    fn provides(_: &Self::Args) -> Vec<Tag> {
        vec![Tag::VettingLogs]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::domain::a004_content_library::ModerationAction;
    use contracts::shared::list::SortOrder;

    #[test]
    fn test_default_listing_url() {
        assert_eq!(
            GetContentLibrary::request(&ContentListArgs::default()).url,
            "/content-moderation/content-library?sortOrder=desc&page=1&limit=10"
        );
    }

    #[test]
    fn test_listing_url_with_filters() {
        let args = ContentListArgs {
            sort_order: SortOrder::Asc,
            status: "flagged".into(),
            confidence_score_sort: "asc".into(),
            category_id: "cat-1".into(),
            ..ContentListArgs::default()
        };
        assert_eq!(
            GetContentLibrary::request(&args).url,
            "/content-moderation/content-library?sortOrder=asc&page=1&limit=10&status=flagged&confidenceScoreSort=asc&categoryId=cat-1"
        );
    }

    #[test]
    fn test_action_invalidates_logs() {
        let args = ContentActionRequest {
            content_ids: vec!["c1".into()],
            action: ModerationAction::Flag,
            reason: Some("Graphic".into()),
        };
        assert_eq!(
            ContentAction::invalidates(&args),
            vec![Tag::ContentLibrary, Tag::VettingLogs]
        );
        assert_eq!(
            ContentAction::request(&args).url,
            "/content-moderation/content-library-actions"
        );
    }

    #[test]
    fn test_vetting_logs_url() {
        let args = VettingLogArgs {
            content_id: "c1".into(),
            ..VettingLogArgs::default()
        };
        assert_eq!(
            GetVettingLogs::request(&args).url,
            "/content-moderation/vetting-logs?page=1&limit=10&contentId=c1"
        );
    }
}
