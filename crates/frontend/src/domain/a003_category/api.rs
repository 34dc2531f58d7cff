use contracts::domain::a003_category::{AddSubcategoryArgs, Category, CategoryListArgs, CreateCategoryRequest};
use contracts::shared::list::ListResponse;
use serde_json::Value;

use crate::shared::query::{MutationEndpoint, QueryEndpoint, QueryParams, RequestSpec, Tag};

const CATEGORIES: &str = "/content-moderation/categories";

pub struct GetCategories;

impl QueryEndpoint for GetCategories {
    const NAME: &'static str = "getCategories";
    type Args = CategoryListArgs;
    type Output = ListResponse<Category>;

    fn request(args: &Self::Args) -> RequestSpec {
        let url = QueryParams::new()
            .page(args.pagination)
            .opt("search", args.search.as_str())
            .opt("createdBy", args.created_by.as_str())
            .append_to(CATEGORIES);
        RequestSpec::get(url)
    }

    fn provides(_: &Self::Args) -> Vec<Tag> {
        vec![Tag::Categories]
    }
}

pub struct CreateCategory;

impl MutationEndpoint for CreateCategory {
    const NAME: &'static str = "createCategory";
    type Args = CreateCategoryRequest;
    type Output = Value;

    fn request(args: &Self::Args) -> RequestSpec {
        RequestSpec::post(CATEGORIES, args)
    }

    fn invalidates(_: &Self::Args) -> Vec<Tag> {
        vec![Tag::Categories]
    }
}

pub struct AddSubcategory;

impl MutationEndpoint for AddSubcategory {
    const NAME: &'static str = "addSubcategory";
    type Args = AddSubcategoryArgs;
    type Output = Value;

    fn request(args: &Self::Args) -> RequestSpec {
        RequestSpec::put(format!("{CATEGORIES}/{}", args.category_id), &args.body)
    }

    fn invalidates(_: &Self::Args) -> Vec<Tag> {
        vec![Tag::Categories]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::shared::list::Pagination;

    #[test]
    fn test_default_listing_url() {
        assert_eq!(
            GetCategories::request(&CategoryListArgs::default()).url,
            "/content-moderation/categories?page=1&limit=10"
        );
    }

    #[test]
    fn test_unpaged_listing_has_no_query() {
        assert_eq!(
            GetCategories::request(&CategoryListArgs::all()).url,
            "/content-moderation/categories"
        );
    }

    #[test]
    fn test_filtered_listing_url() {
        let args = CategoryListArgs {
            pagination: Pagination::new(2, 25),
            search: "sport".into(),
            created_by: "admin-1".into(),
        };
        assert_eq!(
            GetCategories::request(&args).url,
            "/content-moderation/categories?page=2&limit=25&search=sport&createdBy=admin-1"
        );
    }

    #[test]
    fn test_add_subcategory_request() {
        let spec = AddSubcategory::request(&AddSubcategoryArgs::new("c1", "Tennis"));
        assert_eq!(spec.url, "/content-moderation/categories/c1");
        assert_eq!(
            spec.body.unwrap(),
            serde_json::json!({ "subcategory": { "subcategoryName": "Tennis" } })
        );
    }
}
