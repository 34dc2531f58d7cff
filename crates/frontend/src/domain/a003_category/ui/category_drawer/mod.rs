use contracts::domain::a003_category::schema::{category_schema, fields};
use contracts::domain::a003_category::CreateCategoryRequest;
use contracts::shared::validation::{FieldValue, FormValues, FormValuesExt};
use leptos::prelude::*;

use crate::domain::a003_category::api::CreateCategory;
use crate::shared::components::ui::{Input, TagInput};
use crate::shared::components::DrawerShell;
use crate::shared::forms::DrawerFormModel;
use crate::shared::query::hooks::{use_mutations, Mutations};

fn blank() -> FormValues {
    let mut values = FormValues::new();
    values.insert(fields::CATEGORY_NAME.into(), FieldValue::text(""));
    values.insert(fields::SUBCATEGORIES.into(), FieldValue::List(Vec::new()));
    values
}

fn build_request(values: &FormValues) -> CreateCategoryRequest {
    CreateCategoryRequest {
        category_name: values.text(fields::CATEGORY_NAME),
        subcategories: values.list(fields::SUBCATEGORIES),
    }
}

#[derive(Clone, Copy)]
pub struct CategoryDrawerViewModel {
    pub model: DrawerFormModel,
    mutations: Mutations,
}

impl CategoryDrawerViewModel {
    pub fn new() -> Self {
        Self {
            model: DrawerFormModel::new(category_schema()),
            mutations: use_mutations(),
        }
    }

    pub fn open(&self) {
        self.model.open_with(blank());
    }

    fn create(&self, values: FormValues) {
        let model = self.model;
        self.mutations.run::<CreateCategory, _>(
            build_request(&values),
            "Category created",
            move |result| model.finish(result.is_ok()),
        );
    }
}

#[component]
pub fn CategoryDrawer(vm: CategoryDrawerViewModel) -> impl IntoView {
    let model = vm.model;
    let confirm_message = Signal::derive(move || {
        format!(
            "\"{}\" will be created with {} sub-categories.",
            model.text(fields::CATEGORY_NAME).get(),
            model.list(fields::SUBCATEGORIES).with(Vec::len)
        )
    });

    view! {
        <DrawerShell
            model=model
            title="New category"
            submit_label="Create"
            confirm_title="Create category?"
            confirm_message=confirm_message
            on_confirmed=Callback::new(move |values| vm.create(values))
        >
            <Input
                label="Category name"
                value=model.text(fields::CATEGORY_NAME)
                on_input=model.on_text(fields::CATEGORY_NAME)
                error=model.error(fields::CATEGORY_NAME)
                max_length=50
            />
            <TagInput
                label="Sub-categories"
                placeholder="Type a name and press Enter"
                value=model.list(fields::SUBCATEGORIES)
                on_change=model.on_list(fields::SUBCATEGORIES)
                error=model.error(fields::SUBCATEGORIES)
            />
        </DrawerShell>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_keeps_entered_names() {
        let mut values = blank();
        values.insert(fields::CATEGORY_NAME.into(), FieldValue::text("Sports"));
        values.insert(fields::SUBCATEGORIES.into(), FieldValue::list(["Football", "Tennis"]));
        assert_eq!(
            build_request(&values),
            CreateCategoryRequest {
                category_name: "Sports".into(),
                subcategories: vec!["Football".into(), "Tennis".into()],
            }
        );
    }
}
