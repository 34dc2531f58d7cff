use contracts::shared::validation::{FieldValue, FormValues, Schema};
use leptos::prelude::*;

use crate::shared::date_utils::{date_input_value, parse_date_input};

use super::flow::{ConfirmFlow, DiscardGuard};
use super::form_state::FormState;

/// Reactive state of one drawer form: visibility, field values and errors,
/// the submit/confirm flow and the discard guard.
///
/// View models own one of these and add the entity-specific parts
/// (pre-population from a fetch, the mutation to run on confirm).
#[derive(Clone, Copy)]
pub struct DrawerFormModel {
    pub open: RwSignal<bool>,
    pub form: RwSignal<FormState>,
    pub flow: RwSignal<ConfirmFlow>,
    pub guard: RwSignal<DiscardGuard>,
}

impl DrawerFormModel {
    pub fn new(schema: Schema) -> Self {
        Self {
            open: RwSignal::new(false),
            form: RwSignal::new(FormState::new(schema, FormValues::new())),
            flow: RwSignal::new(ConfirmFlow::Idle),
            guard: RwSignal::new(DiscardGuard::Editing),
        }
    }

    /// Show the drawer with `values` as the clean starting point.
    pub fn open_with(&self, values: FormValues) {
        self.form.update(|f| f.reset(values));
        self.flow.set(ConfirmFlow::Idle);
        self.guard.set(DiscardGuard::Editing);
        self.open.set(true);
    }

    /// Re-seed the form while open, e.g. when the edited entity finished loading.
    pub fn reset(&self, values: FormValues) {
        self.form.update(|f| f.reset(values));
    }

    pub fn set(&self, name: &'static str, value: FieldValue) {
        self.form.update(|f| f.set(name, value));
    }

    pub fn text(&self, name: &'static str) -> Signal<String> {
        let form = self.form;
        Signal::derive(move || form.with(|f| f.text(name)))
    }

    pub fn list(&self, name: &'static str) -> Signal<Vec<String>> {
        let form = self.form;
        Signal::derive(move || form.with(|f| f.list(name)))
    }

    pub fn error(&self, name: &'static str) -> Signal<Option<String>> {
        let form = self.form;
        Signal::derive(move || form.with(|f| f.error(name).map(|e| e.message.clone())))
    }

    /// Date field as an `<input type="date">` value
    pub fn date_input(&self, name: &'static str) -> Signal<String> {
        let form = self.form;
        Signal::derive(move || form.with(|f| date_input_value(f.date(name))))
    }

    pub fn on_date(&self, name: &'static str) -> Callback<String> {
        let this = *self;
        Callback::new(move |v: String| this.set(name, FieldValue::Date(parse_date_input(&v))))
    }

    pub fn on_number(&self, name: &'static str) -> Callback<String> {
        let this = *self;
        Callback::new(move |v: String| this.set(name, FieldValue::Number(v)))
    }

    pub fn on_text(&self, name: &'static str) -> Callback<String> {
        let this = *self;
        Callback::new(move |v: String| this.set(name, FieldValue::Text(v)))
    }

    pub fn on_choice(&self, name: &'static str) -> Callback<String> {
        let this = *self;
        Callback::new(move |v: String| this.set(name, FieldValue::Choice(v)))
    }

    pub fn on_list(&self, name: &'static str) -> Callback<Vec<String>> {
        let this = *self;
        Callback::new(move |v: Vec<String>| this.set(name, FieldValue::List(v)))
    }

    pub fn values(&self) -> FormValues {
        self.form.with_untracked(|f| f.values())
    }

    pub fn is_submitting(&self) -> Signal<bool> {
        let flow = self.flow;
        Signal::derive(move || flow.get().is_submitting())
    }

    /// Submit pressed. Invalid forms stay open with errors shown.
    pub fn submit(&self) {
        let mut valid = false;
        self.form.update(|f| valid = f.validate());
        self.flow.update(|s| *s = s.submit(valid));
    }

    /// Confirmation accepted. Returns the values to send, or `None` when no
    /// confirmation was pending.
    pub fn confirm(&self) -> Option<FormValues> {
        if self.flow.get_untracked() != ConfirmFlow::PendingConfirm {
            return None;
        }
        self.flow.set(ConfirmFlow::Submitting);
        Some(self.values())
    }

    pub fn cancel_confirm(&self) {
        self.flow.update(|s| *s = s.cancel());
    }

    /// Request finished. Success closes the drawer; failure keeps the edits.
    pub fn finish(&self, ok: bool) {
        self.flow.update(|s| *s = s.settle(ok));
        if self.flow.get_untracked() == ConfirmFlow::Closed {
            self.open.set(false);
        }
    }

    /// Close pressed. Dirty forms ask before discarding.
    pub fn request_close(&self) {
        if self.flow.get_untracked().is_submitting() {
            return;
        }
        let dirty = self.form.with_untracked(|f| f.is_dirty());
        self.guard.update(|g| *g = g.request_close(dirty));
        if self.guard.get_untracked() == DiscardGuard::Closed {
            self.open.set(false);
        }
    }

    pub fn discard(&self) {
        self.guard.update(|g| *g = g.discard());
        if self.guard.get_untracked() == DiscardGuard::Closed {
            self.open.set(false);
        }
    }

    pub fn keep_editing(&self) {
        self.guard.update(|g| *g = g.keep_editing());
    }
}
