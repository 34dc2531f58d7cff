use contracts::domain::a003_category::schema::{fields, subcategory_schema};
use contracts::domain::a003_category::AddSubcategoryArgs;
use contracts::shared::validation::{FieldValue, FormValues, FormValuesExt};
use leptos::prelude::*;

use crate::domain::a003_category::api::AddSubcategory;
use crate::shared::components::ui::Input;
use crate::shared::components::DrawerShell;
use crate::shared::forms::DrawerFormModel;
use crate::shared::query::hooks::{use_mutations, Mutations};

/// Adds one sub-category to an existing category.
#[derive(Clone, Copy)]
pub struct SubcategoryDrawerViewModel {
    pub model: DrawerFormModel,
    /// (category id, category name) the sub-category is added to
    pub parent: RwSignal<Option<(String, String)>>,
    mutations: Mutations,
}

impl SubcategoryDrawerViewModel {
    pub fn new() -> Self {
        Self {
            model: DrawerFormModel::new(subcategory_schema()),
            parent: RwSignal::new(None),
            mutations: use_mutations(),
        }
    }

    pub fn open_for(&self, category_id: String, category_name: String) {
        self.parent.set(Some((category_id, category_name)));
        let mut values = FormValues::new();
        values.insert(fields::SUBCATEGORY_NAME.into(), FieldValue::text(""));
        self.model.open_with(values);
    }

    fn add(&self, values: FormValues) {
        let model = self.model;
        let Some((category_id, _)) = self.parent.get_untracked() else {
            model.finish(false);
            return;
        };
        let args = AddSubcategoryArgs::new(category_id, values.text(fields::SUBCATEGORY_NAME));
        self.mutations
            .run::<AddSubcategory, _>(args, "Sub-category added", move |result| {
                model.finish(result.is_ok())
            });
    }
}

#[component]
pub fn SubcategoryDrawer(vm: SubcategoryDrawerViewModel) -> impl IntoView {
    let model = vm.model;
    let parent_name = move || vm.parent.with(|p| p.as_ref().map(|(_, name)| name.clone()).unwrap_or_default());
    let confirm_message = Signal::derive(move || {
        format!(
            "\"{}\" will be added to {}.",
            model.text(fields::SUBCATEGORY_NAME).get(),
            parent_name()
        )
    });

    view! {
        <DrawerShell
            model=model
            title=Signal::derive(move || format!("Add sub-category to {}", parent_name()))
            submit_label="Add"
            confirm_title="Add sub-category?"
            confirm_message=confirm_message
            on_confirmed=Callback::new(move |values| vm.add(values))
        >
            <Input
                label="Sub-category name"
                value=model.text(fields::SUBCATEGORY_NAME)
                on_input=model.on_text(fields::SUBCATEGORY_NAME)
                error=model.error(fields::SUBCATEGORY_NAME)
                max_length=50
            />
        </DrawerShell>
    }
}
