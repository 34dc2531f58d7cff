use contracts::domain::a003_category::Category;
use contracts::domain::a004_content_library::schema::{fields, tag_metadata_schema};
use contracts::domain::a004_content_library::{
    ContentDetail, UpdateContentArgs, UpdateContentMetadata as MetadataBody,
};
use contracts::shared::validation::{FieldValue, FormValues, FormValuesExt};
use leptos::prelude::*;

use crate::domain::a004_content_library::api::UpdateContentMetadata;
use crate::shared::components::ui::SelectOption;
use crate::shared::forms::DrawerFormModel;
use crate::shared::query::hooks::{use_mutations, Mutations};

pub fn initial_values(detail: Option<&ContentDetail>) -> FormValues {
    let mut values = FormValues::new();
    values.insert(
        fields::CATEGORY_ID.into(),
        FieldValue::choice(detail.and_then(|d| d.category_id.clone()).unwrap_or_default()),
    );
    values.insert(
        fields::SUBCATEGORY_IDS.into(),
        FieldValue::List(detail.map(|d| d.subcategory_ids.clone()).unwrap_or_default()),
    );
    values.insert(
        fields::TAGS.into(),
        FieldValue::List(detail.map(|d| d.tags.clone()).unwrap_or_default()),
    );
    values.insert(
        fields::AGE_RATING.into(),
        FieldValue::choice(detail.and_then(|d| d.age_rating.clone()).unwrap_or_default()),
    );
    values
}

pub fn build_body(values: &FormValues) -> MetadataBody {
    MetadataBody {
        category_id: values.text(fields::CATEGORY_ID),
        subcategory_ids: values.list(fields::SUBCATEGORY_IDS),
        tags: values.list(fields::TAGS),
        age_rating: values.text(fields::AGE_RATING),
    }
}

pub fn category_options(categories: &[Category]) -> Vec<SelectOption> {
    categories
        .iter()
        .map(|c| SelectOption::new(c.id.clone(), c.category_name.clone()))
        .collect()
}

/// Sub-categories offered for the chosen category; none until one is chosen.
pub fn subcategory_options(categories: &[Category], category_id: &str) -> Vec<SelectOption> {
    categories
        .iter()
        .find(|c| c.id == category_id)
        .map(|c| {
            c.subcategories
                .iter()
                .map(|s| SelectOption::new(s.id.clone(), s.subcategory_name.clone()))
                .collect()
        })
        .unwrap_or_default()
}

/// Drops selected sub-categories that do not belong to `category_id`.
pub fn retain_subcategories(
    categories: &[Category],
    category_id: &str,
    selected: &[String],
) -> Vec<String> {
    let allowed = subcategory_options(categories, category_id);
    selected
        .iter()
        .filter(|id| allowed.iter().any(|o| &o.value == *id))
        .cloned()
        .collect()
}

#[derive(Clone, Copy)]
pub struct MetadataDrawerViewModel {
    pub model: DrawerFormModel,
    /// Content item whose metadata is edited
    pub editing: RwSignal<Option<String>>,
    /// Set once the detail fetch has seeded the form
    pub loaded: RwSignal<bool>,
    mutations: Mutations,
}

impl MetadataDrawerViewModel {
    pub fn new() -> Self {
        Self {
            model: DrawerFormModel::new(tag_metadata_schema()),
            editing: RwSignal::new(None),
            loaded: RwSignal::new(false),
            mutations: use_mutations(),
        }
    }

    /// Opens blank; the view seeds the form once the detail arrives.
    pub fn open(&self, content_id: String) {
        self.loaded.set(false);
        self.editing.set(Some(content_id));
        self.model.open_with(initial_values(None));
    }

    pub fn prefill(&self, detail: &ContentDetail) {
        if self.loaded.get_untracked() {
            return;
        }
        self.model.reset(initial_values(Some(detail)));
        self.loaded.set(true);
    }

    /// Category change, keeping only sub-categories that still apply.
    pub fn change_category(&self, categories: &[Category], category_id: String) {
        let kept = self.model.form.with_untracked(|f| {
            retain_subcategories(categories, &category_id, &f.list(fields::SUBCATEGORY_IDS))
        });
        self.model.set(fields::CATEGORY_ID, FieldValue::Choice(category_id));
        self.model.set(fields::SUBCATEGORY_IDS, FieldValue::List(kept));
    }

    pub fn save(&self, values: FormValues) {
        let model = self.model;
        let Some(id) = self.editing.get_untracked() else {
            model.finish(false);
            return;
        };
        let args = UpdateContentArgs {
            id,
            body: build_body(&values),
        };
        self.mutations
            .run::<UpdateContentMetadata, _>(args, "Metadata saved", move |r| model.finish(r.is_ok()));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::domain::a003_category::Subcategory;
    use contracts::domain::a004_content_library::ContentStatus;

    fn categories() -> Vec<Category> {
        let sub = |id: &str, name: &str| Subcategory {
            id: id.into(),
            subcategory_name: name.into(),
        };
        vec![
            Category {
                id: "sports".into(),
                category_name: "Sports".into(),
                subcategories: vec![sub("football", "Football"), sub("tennis", "Tennis")],
                created_by: None,
                created_at: None,
            },
            Category {
                id: "music".into(),
                category_name: "Music".into(),
                subcategories: vec![sub("jazz", "Jazz")],
                created_by: None,
                created_at: None,
            },
        ]
    }

    #[test]
    fn test_subcategory_options_follow_category() {
        let cats = categories();
        let values: Vec<_> = subcategory_options(&cats, "sports")
            .into_iter()
            .map(|o| o.value)
            .collect();
        assert_eq!(values, vec!["football", "tennis"]);
        assert!(subcategory_options(&cats, "").is_empty());
    }

    #[test]
    fn test_category_change_drops_foreign_subcategories() {
        let cats = categories();
        let selected = vec!["football".to_string(), "jazz".to_string()];
        assert_eq!(retain_subcategories(&cats, "music", &selected), vec!["jazz"]);
        assert!(retain_subcategories(&cats, "", &selected).is_empty());
    }

    #[test]
    fn test_prefill_values_from_detail() {
        let detail = ContentDetail {
            id: "c1".into(),
            title: "Derby highlights".into(),
            status: ContentStatus::Pending,
            description: None,
            category_id: Some("sports".into()),
            subcategory_ids: vec!["football".into()],
            tags: vec!["derby".into()],
            age_rating: Some("everyone".into()),
            confidence_score: Some(0.82),
            source_url: None,
        };
        let body = build_body(&initial_values(Some(&detail)));
        assert_eq!(
            body,
            MetadataBody {
                category_id: "sports".into(),
                subcategory_ids: vec!["football".into()],
                tags: vec!["derby".into()],
                age_rating: "everyone".into(),
            }
        );
        assert_eq!(build_body(&initial_values(None)), MetadataBody::default());
    }
}
