pub mod document_editor;
pub mod faq_drawer;
pub mod faq_list;

use contracts::domain::a005_legal_doc::LegalDocType;
use leptos::prelude::*;

use self::document_editor::DocumentEditor;
use self::faq_list::FaqList;
use crate::shared::components::PageHeader;

const TABS: [LegalDocType; 4] = [
    LegalDocType::TermsAndConditions,
    LegalDocType::PrivacyPolicy,
    LegalDocType::AboutUs,
    LegalDocType::Faq,
];

/// Static pages shown in the mobile app, one tab per document.
#[component]
pub fn LegalDocsPage() -> impl IntoView {
    let active = RwSignal::new(LegalDocType::TermsAndConditions);

    view! {
        <div class="page">
            <PageHeader title="Legal & FAQ" subtitle="Documents and answers shown to app users" />
            <div class="tabs" role="tablist">
                {TABS
                    .into_iter()
                    .map(|tab| {
                        view! {
                            <button
                                type="button"
                                role="tab"
                                class="tabs__tab"
                                class:tabs__tab--active=move || active.get() == tab
                                on:click=move |_| active.set(tab)
                            >
                                {tab.label()}
                            </button>
                        }
                    })
                    .collect_view()}
            </div>
            {move || match active.get() {
                LegalDocType::Faq => view! { <FaqList /> }.into_any(),
                doc_type => view! { <DocumentEditor doc_type=doc_type /> }.into_any(),
            }}
        </div>
    }
}
