use std::sync::Arc;

use contracts::domain::a001_admin_user::schema::{fields, sub_admin_schema};
use contracts::domain::a001_admin_user::CreateSubAdminRequest;
use contracts::shared::validation::{FieldValue, FormValues, FormValuesExt};
use leptos::prelude::*;

use crate::domain::a001_admin_user::api::CreateSubAdmin;
use crate::domain::a001_admin_user::encryption::{use_field_encryptor, EncryptError, FieldEncryptor};
use crate::shared::forms::DrawerFormModel;
use crate::shared::query::hooks::{use_mutations, Mutations};

/// Name and email are encrypted, the role id is sent as is.
pub fn build_request(
    values: &FormValues,
    encryptor: &dyn FieldEncryptor,
) -> Result<CreateSubAdminRequest, EncryptError> {
    Ok(CreateSubAdminRequest {
        full_name: encryptor.encrypt(fields::FULL_NAME, values.text(fields::FULL_NAME).trim())?,
        email: encryptor.encrypt(fields::EMAIL, &values.text(fields::EMAIL))?,
        role: values.text(fields::ROLE),
    })
}

fn blank() -> FormValues {
    let mut values = FormValues::new();
    values.insert(fields::FULL_NAME.into(), FieldValue::text(""));
    values.insert(fields::EMAIL.into(), FieldValue::text(""));
    values.insert(fields::ROLE.into(), FieldValue::choice(""));
    values
}

#[derive(Clone, Copy)]
pub struct SubAdminDrawerViewModel {
    pub model: DrawerFormModel,
    mutations: Mutations,
    encryptor: StoredValue<Arc<dyn FieldEncryptor>>,
}

impl SubAdminDrawerViewModel {
    pub fn new() -> Self {
        Self {
            model: DrawerFormModel::new(sub_admin_schema()),
            mutations: use_mutations(),
            encryptor: StoredValue::new(use_field_encryptor()),
        }
    }

    pub fn open(&self) {
        self.model.open_with(blank());
    }

    pub fn confirm_message(&self) -> Signal<String> {
        let model = self.model;
        Signal::derive(move || {
            let name = model.text(fields::FULL_NAME).get();
            let email = model.text(fields::EMAIL).get();
            format!("{} will be invited as a sub-admin at {}.", name.trim(), email)
        })
    }

    /// Create command, run after the confirmation step.
    pub fn create(&self, values: FormValues) {
        let model = self.model;
        let request = self.encryptor.with_value(|e| build_request(&values, e.as_ref()));
        match request {
            Ok(request) => self.mutations.run::<CreateSubAdmin, _>(
                request,
                "Sub-admin created",
                move |result| model.finish(result.is_ok()),
            ),
            Err(e) => {
                log::error!("{}", e);
                self.mutations.notifications().error("Could not secure the entered details");
                model.finish(false);
            }
        }
    }
}
