use contracts::domain::a006_user_cohort::schema::{cohort_schema, fields};
use contracts::domain::a006_user_cohort::{CohortUpsert, UpdateCohortArgs, UserCohort};
use contracts::shared::validation::{FieldValue, FormValues, FormValuesExt};
use leptos::prelude::*;

use crate::domain::a006_user_cohort::api::{CreateCohort, UpdateCohort};
use crate::shared::forms::DrawerFormModel;
use crate::shared::query::hooks::{use_mutations, Mutations};

const DEFAULT_GENDER: &str = "any";

pub fn initial_values(cohort: Option<&UserCohort>) -> FormValues {
    let age_value = |v: Option<u32>| FieldValue::number(v.map(|a| a.to_string()).unwrap_or_default());
    let mut values = FormValues::new();
    values.insert(
        fields::NAME.into(),
        FieldValue::text(cohort.map(|c| c.name.clone()).unwrap_or_default()),
    );
    values.insert(
        fields::DESCRIPTION.into(),
        FieldValue::text(cohort.and_then(|c| c.description.clone()).unwrap_or_default()),
    );
    values.insert(
        fields::PLATFORMS.into(),
        FieldValue::List(cohort.map(|c| c.platforms.clone()).unwrap_or_default()),
    );
    values.insert(fields::SIGNUP_FROM.into(), FieldValue::Date(cohort.and_then(|c| c.signup_from)));
    values.insert(fields::SIGNUP_TO.into(), FieldValue::Date(cohort.and_then(|c| c.signup_to)));
    values.insert(fields::AGE_MIN.into(), age_value(cohort.and_then(|c| c.age_min)));
    values.insert(fields::AGE_MAX.into(), age_value(cohort.and_then(|c| c.age_max)));
    values.insert(
        fields::GENDER.into(),
        FieldValue::choice(
            cohort
                .and_then(|c| c.gender.clone())
                .unwrap_or_else(|| DEFAULT_GENDER.to_string()),
        ),
    );
    values
}

/// Ages were range-checked by the schema, so the cast only drops a fraction.
fn age(values: &FormValues, name: &str) -> Option<u32> {
    values.number(name).map(|n| n as u32)
}

pub fn build_body(values: &FormValues) -> CohortUpsert {
    CohortUpsert {
        name: values.text(fields::NAME).trim().to_string(),
        description: values.optional_text(fields::DESCRIPTION),
        platforms: values.list(fields::PLATFORMS),
        signup_from: values.date(fields::SIGNUP_FROM),
        signup_to: values.date(fields::SIGNUP_TO),
        age_min: age(values, fields::AGE_MIN),
        age_max: age(values, fields::AGE_MAX),
        gender: values.text(fields::GENDER),
    }
}

#[derive(Clone, Copy)]
pub struct CohortDrawerViewModel {
    pub model: DrawerFormModel,
    pub editing: RwSignal<Option<String>>,
    mutations: Mutations,
}

impl CohortDrawerViewModel {
    pub fn new() -> Self {
        Self {
            model: DrawerFormModel::new(cohort_schema()),
            editing: RwSignal::new(None),
            mutations: use_mutations(),
        }
    }

    pub fn open_new(&self) {
        self.editing.set(None);
        self.model.open_with(initial_values(None));
    }

    pub fn open_edit(&self, cohort: &UserCohort) {
        self.editing.set(Some(cohort.id.clone()));
        self.model.open_with(initial_values(Some(cohort)));
    }

    pub fn is_edit_mode(&self) -> Signal<bool> {
        let editing = self.editing;
        Signal::derive(move || editing.with(Option::is_some))
    }

    pub fn save(&self, values: FormValues) {
        let model = self.model;
        let body = build_body(&values);
        match self.editing.get_untracked() {
            Some(id) => self.mutations.run::<UpdateCohort, _>(
                UpdateCohortArgs { id, body },
                "Cohort updated",
                move |r| model.finish(r.is_ok()),
            ),
            None => self
                .mutations
                .run::<CreateCohort, _>(body, "Cohort created", move |r| model.finish(r.is_ok())),
        }
    }
}
