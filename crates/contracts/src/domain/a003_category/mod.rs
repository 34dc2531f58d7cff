pub mod schema;

use serde::{Deserialize, Serialize};

use crate::shared::list::Pagination;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Category {
    pub id: String,
    pub category_name: String,
    #[serde(default)]
    pub subcategories: Vec<Subcategory>,
    #[serde(default)]
    pub created_by: Option<String>,
    #[serde(default)]
    pub created_at: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Subcategory {
    pub id: String,
    pub subcategory_name: String,
}

/// Arguments of the category listing.
///
/// Every parameter is optional on the wire: `Pagination::all()`, an empty
/// `search` and an empty `created_by` are all left out of the URL.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryListArgs {
    pub pagination: Pagination,
    pub search: String,
    pub created_by: String,
}

impl Default for CategoryListArgs {
    fn default() -> Self {
        Self {
            pagination: Pagination::default(),
            search: String::new(),
            created_by: String::new(),
        }
    }
}

impl CategoryListArgs {
    /// Unpaged listing used to fill category dropdowns
    pub fn all() -> Self {
        Self {
            pagination: Pagination::all(),
            ..Self::default()
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateCategoryRequest {
    pub category_name: String,
    pub subcategories: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubcategoryName {
    pub subcategory_name: String,
}

/// Body of `PUT /categories/{id}`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AddSubcategoryRequest {
    pub subcategory: SubcategoryName,
}

/// Arguments of the add-subcategory mutation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AddSubcategoryArgs {
    pub category_id: String,
    pub body: AddSubcategoryRequest,
}

impl AddSubcategoryArgs {
    pub fn new(category_id: impl Into<String>, subcategory_name: impl Into<String>) -> Self {
        Self {
            category_id: category_id.into(),
            body: AddSubcategoryRequest {
                subcategory: SubcategoryName {
                    subcategory_name: subcategory_name.into(),
                },
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_subcategory_body_shape() {
        let args = AddSubcategoryArgs::new("c1", "Football");
        let json = serde_json::to_value(&args.body).unwrap();
        assert_eq!(
            json,
            serde_json::json!({ "subcategory": { "subcategoryName": "Football" } })
        );
    }

    #[test]
    fn test_create_category_body_shape() {
        let req = CreateCategoryRequest {
            category_name: "Sports".into(),
            subcategories: vec!["Football".into()],
        };
        let json = serde_json::to_value(&req).unwrap();
        assert_eq!(json["categoryName"], "Sports");
        assert_eq!(json["subcategories"][0], "Football");
    }
}
