use contracts::domain::a003_category::CategoryListArgs;
use contracts::domain::a004_content_library::schema::{fields, AGE_RATINGS};
use leptos::prelude::*;

use super::view_model::{category_options, subcategory_options, MetadataDrawerViewModel};
use crate::domain::a003_category::api::GetCategories;
use crate::domain::a004_content_library::api::GetContentDetail;
use crate::shared::components::ui::{MultiSelect, SelectOption, StyledSelect, TagInput};
use crate::shared::components::DrawerShell;
use crate::shared::query::hooks::use_query;

fn age_rating_label(value: &str) -> &str {
    match value {
        "everyone" => "Everyone",
        "teen" => "Teen",
        "mature" => "Mature",
        other => other,
    }
}

/// Seeds the drawer from the content detail once it has loaded.
#[component]
fn DetailPrefill(content_id: String, vm: MetadataDrawerViewModel) -> impl IntoView {
    let id = StoredValue::new(content_id);
    let detail = use_query::<GetContentDetail>(move || id.get_value());

    Effect::new(move |_| {
        detail.with(|state| {
            if let Some(d) = state.data.as_ref() {
                vm.prefill(d);
            }
        });
    });

    view! {
        <Show when=move || detail.with(|s| s.is_loading())>
            <p class="drawer__hint">"Loading current metadata…"</p>
        </Show>
        {move || {
            detail.with(|s| s.data.as_ref().map(|d| d.title.clone())).map(|title| {
                view! { <p class="drawer__subtitle">{title}</p> }
            })
        }}
    }
}

#[component]
pub fn MetadataDrawer(vm: MetadataDrawerViewModel) -> impl IntoView {
    let model = vm.model;
    let categories = use_query::<GetCategories>(CategoryListArgs::all);
    let category_list = Signal::derive(move || {
        categories.with(|s| s.data.as_ref().map(|p| p.items.clone()).unwrap_or_default())
    });

    let category_id = model.text(fields::CATEGORY_ID);
    let sub_options = Signal::derive(move || {
        let selected = category_id.get();
        category_list.with(|cats| subcategory_options(cats, &selected))
    });
    let age_options = Signal::derive(|| {
        AGE_RATINGS
            .iter()
            .map(|r| SelectOption::new(*r, age_rating_label(r)))
            .collect::<Vec<_>>()
    });
    let not_ready = Signal::derive(move || !vm.loaded.get());

    let confirm_message = Signal::derive(move || {
        format!(
            "Save {} tag(s) and {} sub-category(ies) for this item?",
            model.list(fields::TAGS).with(Vec::len),
            model.list(fields::SUBCATEGORY_IDS).with(Vec::len)
        )
    });

    view! {
        <DrawerShell
            model=model
            title="Tag metadata"
            confirm_title="Save metadata?"
            confirm_message=confirm_message
            on_confirmed=Callback::new(move |values| vm.save(values))
        >
            {move || vm.editing.get().map(|id| view! { <DetailPrefill content_id=id vm=vm /> })}
            <StyledSelect
                label="Category"
                value=category_id
                on_change=Callback::new(move |v: String| {
                    category_list.with_untracked(|cats| vm.change_category(cats, v))
                })
                options=Signal::derive(move || category_list.with(|c| category_options(c)))
                error=model.error(fields::CATEGORY_ID)
                disabled=not_ready
            />
            <MultiSelect
                label="Sub-categories"
                value=model.list(fields::SUBCATEGORY_IDS)
                on_change=model.on_list(fields::SUBCATEGORY_IDS)
                options=sub_options
                error=model.error(fields::SUBCATEGORY_IDS)
                disabled=Signal::derive(move || not_ready.get() || category_id.with(String::is_empty))
            />
            <TagInput
                label="Tags"
                placeholder="Type a tag and press Enter"
                value=model.list(fields::TAGS)
                on_change=model.on_list(fields::TAGS)
                error=model.error(fields::TAGS)
                disabled=not_ready
            />
            <StyledSelect
                label="Age rating"
                value=model.text(fields::AGE_RATING)
                on_change=model.on_choice(fields::AGE_RATING)
                options=age_options
                error=model.error(fields::AGE_RATING)
                disabled=not_ready
            />
        </DrawerShell>
    }
}
