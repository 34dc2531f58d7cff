use contracts::domain::a005_legal_doc::schema::{faq_schema, fields};
use contracts::domain::a005_legal_doc::{Faq, SaveLegalDocRequest};
use contracts::shared::validation::{FieldValue, FormValues, FormValuesExt};
use leptos::prelude::*;

use crate::domain::a005_legal_doc::api::SaveLegalDoc;
use crate::shared::components::ui::{Input, Textarea};
use crate::shared::components::DrawerShell;
use crate::shared::forms::DrawerFormModel;
use crate::shared::query::hooks::{use_mutations, Mutations};

fn initial_values(faq: Option<&Faq>) -> FormValues {
    let mut values = FormValues::new();
    values.insert(
        fields::QUESTION.into(),
        FieldValue::text(faq.map(|f| f.question.clone()).unwrap_or_default()),
    );
    values.insert(
        fields::ANSWER.into(),
        FieldValue::text(faq.map(|f| f.answer.clone()).unwrap_or_default()),
    );
    values
}

fn build_request(faq_id: Option<String>, values: &FormValues) -> SaveLegalDocRequest {
    SaveLegalDocRequest::faq(
        faq_id,
        values.text(fields::QUESTION),
        values.text(fields::ANSWER).trim().to_string(),
    )
}

#[derive(Clone, Copy)]
pub struct FaqDrawerViewModel {
    pub model: DrawerFormModel,
    pub editing: RwSignal<Option<String>>,
    mutations: Mutations,
}

impl FaqDrawerViewModel {
    pub fn new() -> Self {
        Self {
            model: DrawerFormModel::new(faq_schema()),
            editing: RwSignal::new(None),
            mutations: use_mutations(),
        }
    }

    pub fn open_new(&self) {
        self.editing.set(None);
        self.model.open_with(initial_values(None));
    }

    pub fn open_edit(&self, faq: &Faq) {
        self.editing.set(Some(faq.id.clone()));
        self.model.open_with(initial_values(Some(faq)));
    }

    fn save(&self, values: FormValues) {
        let model = self.model;
        let faq_id = self.editing.get_untracked();
        let message = if faq_id.is_some() { "FAQ updated" } else { "FAQ added" };
        self.mutations.run::<SaveLegalDoc, _>(
            build_request(faq_id, &values),
            message,
            move |r| model.finish(r.is_ok()),
        );
    }
}

#[component]
pub fn FaqDrawer(vm: FaqDrawerViewModel) -> impl IntoView {
    let model = vm.model;
    let title = Signal::derive(move || {
        let title = if vm.editing.with(Option::is_some) { "Edit FAQ" } else { "New FAQ" };
        title.to_string()
    });

    view! {
        <DrawerShell
            model=model
            title=title
            confirm_title="Publish FAQ?"
            confirm_message="The answer will be visible in the app right away."
            on_confirmed=Callback::new(move |values| vm.save(values))
        >
            <Input
                label="Question"
                value=model.text(fields::QUESTION)
                on_input=model.on_text(fields::QUESTION)
                error=model.error(fields::QUESTION)
                max_length=250
            />
            <Textarea
                label="Answer"
                value=model.text(fields::ANSWER)
                on_input=model.on_text(fields::ANSWER)
                error=model.error(fields::ANSWER)
                rows=8
                max_length=2000
            />
        </DrawerShell>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::domain::a005_legal_doc::LegalDocType;

    #[test]
    fn test_new_faq_has_no_id() {
        let mut values = initial_values(None);
        values.insert(fields::QUESTION.into(), FieldValue::text("How do I reset my PIN?"));
        values.insert(fields::ANSWER.into(), FieldValue::text("Open settings and tap Reset. "));
        let req = build_request(None, &values);
        assert_eq!(req.doc_type, LegalDocType::Faq);
        assert_eq!(req.faq_id, None);
        assert_eq!(req.answer.as_deref(), Some("Open settings and tap Reset."));
    }

    #[test]
    fn test_edit_keeps_id() {
        let faq = Faq {
            id: "42".into(),
            question: "Is it free?".into(),
            answer: "Yes, always free.".into(),
            updated_at: None,
        };
        let req = build_request(Some(faq.id.clone()), &initial_values(Some(&faq)));
        assert_eq!(req.faq_id.as_deref(), Some("42"));
        assert_eq!(req.question.as_deref(), Some("Is it free?"));
    }
}
