use contracts::domain::a001_admin_user::schema::{change_password_schema, fields};
use contracts::domain::a001_admin_user::ChangePasswordRequest;
use contracts::shared::validation::{FieldValue, FormValues, FormValuesExt};
use leptos::prelude::*;

use crate::domain::a001_admin_user::api::ChangePassword;
use crate::shared::components::ui::Input;
use crate::shared::components::DrawerShell;
use crate::shared::forms::DrawerFormModel;
use crate::shared::query::hooks::use_mutations;

const PASSWORD_FIELDS: [&str; 3] = [
    fields::CURRENT_PASSWORD,
    fields::NEW_PASSWORD,
    fields::CONFIRM_PASSWORD,
];

fn blank() -> FormValues {
    PASSWORD_FIELDS
        .iter()
        .map(|name| (name.to_string(), FieldValue::text("")))
        .collect()
}

/// Passwords are sent verbatim, never trimmed.
fn build_request(values: &FormValues) -> ChangePasswordRequest {
    ChangePasswordRequest {
        current_password: values.text(fields::CURRENT_PASSWORD),
        new_password: values.text(fields::NEW_PASSWORD),
    }
}

/// Drawer for the signed-in admin's own password.
#[component]
pub fn ChangePasswordDrawer(open: RwSignal<bool>) -> impl IntoView {
    let model = DrawerFormModel::new(change_password_schema());
    let mutations = use_mutations();

    Effect::new(move |_| {
        if open.get() {
            model.open_with(blank());
        }
    });
    Effect::new(move |_| {
        if !model.open.get() {
            open.set(false);
        }
    });

    let on_confirmed = Callback::new(move |values: FormValues| {
        mutations.run::<ChangePassword, _>(build_request(&values), "Password changed", move |result| {
            model.finish(result.is_ok())
        });
    });

    let password_input = move |name: &'static str, label: &'static str| {
        view! {
            <Input
                label=label
                input_type="password"
                autocomplete="new-password"
                value=model.text(name)
                on_input=model.on_text(name)
                error=model.error(name)
            />
        }
    };

    view! {
        <DrawerShell
            model=model
            title="Change password"
            confirm_title="Change password?"
            confirm_message="You will stay signed in on this device."
            on_confirmed=on_confirmed
        >
            {password_input(fields::CURRENT_PASSWORD, "Current password")}
            {password_input(fields::NEW_PASSWORD, "New password")}
            {password_input(fields::CONFIRM_PASSWORD, "Confirm new password")}
        </DrawerShell>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_passwords_are_not_trimmed() {
        let mut values = blank();
        values.insert(fields::CURRENT_PASSWORD.into(), FieldValue::text(" Old#1234"));
        values.insert(fields::NEW_PASSWORD.into(), FieldValue::text("New#12345"));
        let request = build_request(&values);
        assert_eq!(request.current_password, " Old#1234");
        assert_eq!(request.new_password, "New#12345");
    }
}
