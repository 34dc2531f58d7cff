use contracts::domain::a005_legal_doc::schema::{fields, legal_doc_schema};
use contracts::domain::a005_legal_doc::{LegalDoc, LegalDocType, SaveLegalDocRequest};
use contracts::shared::validation::{FieldValue, FormValues};
use leptos::prelude::*;

use crate::domain::a005_legal_doc::api::{GetLegalDoc, SaveLegalDoc};
use crate::shared::components::ui::{Button, Textarea};
use crate::shared::components::QueryView;
use crate::shared::confirm_dialog::{ConfirmBody, ConfirmDialog};
use crate::shared::date_utils::format_timestamp;
use crate::shared::forms::FormState;
use crate::shared::query::hooks::{refetch, use_mutations, use_query, use_query_client};

fn content_form(content: &str) -> FormState {
    let mut values = FormValues::new();
    values.insert(fields::CONTENT.into(), FieldValue::text(content));
    FormState::new(legal_doc_schema(), values)
}

/// Full-page editor for one static document.
///
/// The form is re-seeded whenever a fresh copy arrives and there are no
/// local edits; a save re-seeds it with what was sent.
#[component]
pub fn DocumentEditor(doc_type: LegalDocType) -> impl IntoView {
    let client = use_query_client();
    let mutations = use_mutations();
    let doc = use_query::<GetLegalDoc>(move || doc_type);
    let form = RwSignal::new(content_form(""));
    let confirming = RwSignal::new(false);
    let busy = RwSignal::new(false);

    Effect::new(move |_| {
        let content = doc.with(|s| s.data.as_ref().map(|d| d.content.clone()));
        if let Some(content) = content {
            if !form.with_untracked(FormState::is_dirty) {
                form.set(content_form(&content));
            }
        }
    });

    let content = Signal::derive(move || form.with(|f| f.text(fields::CONTENT)));
    let dirty = Signal::derive(move || form.with(FormState::is_dirty));

    let submit = move || {
        let mut valid = false;
        form.update(|f| valid = f.validate());
        if valid {
            confirming.set(true);
        }
    };
    let save = Callback::new(move |_| {
        let text = content.get_untracked();
        busy.set(true);
        mutations.run::<SaveLegalDoc, _>(
            SaveLegalDocRequest::document(doc_type, text.clone()),
            "Document published",
            move |result| {
                busy.set(false);
                confirming.set(false);
                if result.is_ok() {
                    form.set(content_form(&text));
                }
            },
        );
    });
    let cancel = Callback::new(move |_| {
        if !busy.get_untracked() {
            confirming.set(false);
        }
    });
    let revert = move || {
        let stored = doc.with_untracked(|s| s.data.as_ref().map(|d| d.content.clone()));
        form.set(content_form(&stored.unwrap_or_default()));
    };

    view! {
        <QueryView
            state=doc
            on_retry=Callback::new(move |_| refetch::<GetLegalDoc>(client, &doc_type))
            skeleton_columns=1
            children={move |loaded: LegalDoc| {
                view! {
                    <form
                        class="document-editor"
                        on:submit=move |ev| {
                            ev.prevent_default();
                            submit();
                        }
                    >
                        <p class="document-editor__meta">
                            "Last published: " {format_timestamp(loaded.updated_at.as_deref())}
                        </p>
                        <Textarea
                            label=doc_type.label()
                            value=content
                            on_input=Callback::new(move |v: String| {
                                form.update(|f| f.set(fields::CONTENT, FieldValue::Text(v)))
                            })
                            error=Signal::derive(move || {
                                form.with(|f| f.error(fields::CONTENT).map(|e| e.message.clone()))
                            })
                            rows=20
                        />
                        <div class="document-editor__actions">
                            <Button
                                variant="secondary"
                                disabled=Signal::derive(move || !dirty.get())
                                on_click=Callback::new(move |_| revert())
                            >
                                "Revert"
                            </Button>
                            <Button button_type="submit" disabled=Signal::derive(move || !dirty.get())>
                                "Publish"
                            </Button>
                        </div>
                    </form>
                }
            }}
        />

        <ConfirmDialog open=confirming on_close=cancel>
            <ConfirmBody
                title=format!("Publish {}?", doc_type.label())
                message="App users will see the new version immediately."
                confirm_label="Publish"
                busy=busy
                on_confirm=save
                on_cancel=cancel
            />
        </ConfirmDialog>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_short_content_is_rejected() {
        let mut form = content_form("");
        form.set(fields::CONTENT, FieldValue::text("too short"));
        assert!(!form.validate());
        form.set(fields::CONTENT, FieldValue::text("These terms govern the use of the app."));
        assert!(form.validate());
        assert!(form.is_dirty());
    }
}
