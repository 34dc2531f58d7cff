use contracts::domain::a007_blocked_keyword::schema::{blocked_keyword_schema, fields};
use contracts::domain::a007_blocked_keyword::{parse_keywords, AddBlockedKeywordsRequest};
use contracts::shared::validation::{FieldValue, FormValues, FormValuesExt};
use leptos::prelude::*;

use crate::domain::a007_blocked_keyword::api::AddBlockedKeywords;
use crate::shared::components::ui::Textarea;
use crate::shared::components::DrawerShell;
use crate::shared::forms::DrawerFormModel;
use crate::shared::query::hooks::{use_mutations, Mutations};

/// Keywords are typed as free text; the form holds the parsed list.
#[derive(Clone, Copy)]
pub struct AddKeywordsViewModel {
    pub model: DrawerFormModel,
    pub draft: RwSignal<String>,
    mutations: Mutations,
}

impl AddKeywordsViewModel {
    pub fn new() -> Self {
        Self {
            model: DrawerFormModel::new(blocked_keyword_schema()),
            draft: RwSignal::new(String::new()),
            mutations: use_mutations(),
        }
    }

    pub fn open(&self) {
        self.draft.set(String::new());
        let mut values = FormValues::new();
        values.insert(fields::KEYWORDS.into(), FieldValue::List(Vec::new()));
        self.model.open_with(values);
    }

    pub fn edit_draft(&self, raw: String) {
        self.model
            .set(fields::KEYWORDS, FieldValue::List(parse_keywords(&raw)));
        self.draft.set(raw);
    }

    fn add(&self, values: FormValues) {
        let model = self.model;
        let request = AddBlockedKeywordsRequest {
            keywords: values.list(fields::KEYWORDS),
        };
        self.mutations
            .run::<AddBlockedKeywords, _>(request, "Keywords blocked", move |r| model.finish(r.is_ok()));
    }
}

#[component]
pub fn AddKeywordsDrawer(vm: AddKeywordsViewModel) -> impl IntoView {
    let model = vm.model;
    let keywords = model.list(fields::KEYWORDS);
    let confirm_message = Signal::derive(move || {
        keywords.with(|k| format!("Block {} keyword(s): {}?", k.len(), k.join(", ")))
    });

    view! {
        <DrawerShell
            model=model
            title="Block keywords"
            submit_label="Block"
            confirm_title="Block keywords?"
            confirm_message=confirm_message
            on_confirmed=Callback::new(move |values| vm.add(values))
        >
            <Textarea
                label="Keywords"
                placeholder="Separate keywords with commas or new lines"
                value=vm.draft
                on_input=Callback::new(move |v: String| vm.edit_draft(v))
                error=model.error(fields::KEYWORDS)
                rows=6
            />
            <div class="chips">
                {move || {
                    keywords
                        .get()
                        .into_iter()
                        .map(|k| view! { <span class="chip">{k}</span> })
                        .collect_view()
                }}
            </div>
        </DrawerShell>
    }
}
