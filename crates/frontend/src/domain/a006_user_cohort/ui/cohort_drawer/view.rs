use contracts::domain::a006_user_cohort::schema::{fields, GENDERS, PLATFORMS};
use leptos::prelude::*;

use super::view_model::CohortDrawerViewModel;
use crate::shared::components::ui::{Input, MultiSelect, SelectOption, StyledSelect, Textarea};
use crate::shared::components::DrawerShell;

pub fn platform_label(value: &str) -> &str {
    match value {
        "ios" => "iOS",
        "android" => "Android",
        "web" => "Web",
        other => other,
    }
}

fn gender_label(value: &str) -> &str {
    match value {
        "any" => "Any",
        "female" => "Female",
        "male" => "Male",
        "other" => "Other",
        other => other,
    }
}

fn options(values: &[&'static str], label: fn(&str) -> &str) -> Vec<SelectOption> {
    values.iter().map(|v| SelectOption::new(*v, label(v))).collect()
}

#[component]
pub fn CohortDrawer(vm: CohortDrawerViewModel) -> impl IntoView {
    let model = vm.model;
    let edit_mode = vm.is_edit_mode();
    let title = Signal::derive(move || {
        let title = if edit_mode.get() { "Edit cohort" } else { "New cohort" };
        title.to_string()
    });
    let confirm_message = Signal::derive(move || {
        format!(
            "Cohort \"{}\" targets {} platform(s).",
            model.text(fields::NAME).get().trim(),
            model.list(fields::PLATFORMS).with(Vec::len)
        )
    });

    view! {
        <DrawerShell
            model=model
            title=title
            confirm_title="Save cohort?"
            confirm_message=confirm_message
            on_confirmed=Callback::new(move |values| vm.save(values))
        >
            <Input
                label="Name"
                value=model.text(fields::NAME)
                on_input=model.on_text(fields::NAME)
                error=model.error(fields::NAME)
                max_length=40
            />
            <Textarea
                label="Description"
                value=model.text(fields::DESCRIPTION)
                on_input=model.on_text(fields::DESCRIPTION)
                error=model.error(fields::DESCRIPTION)
                rows=3
                max_length=250
            />
            <MultiSelect
                label="Platforms"
                value=model.list(fields::PLATFORMS)
                on_change=model.on_list(fields::PLATFORMS)
                options=Signal::derive(|| options(PLATFORMS, platform_label))
                error=model.error(fields::PLATFORMS)
            />
            <div class="form__row">
                <Input
                    label="Signed up from"
                    input_type="date"
                    value=model.date_input(fields::SIGNUP_FROM)
                    on_input=model.on_date(fields::SIGNUP_FROM)
                    error=model.error(fields::SIGNUP_FROM)
                />
                <Input
                    label="Signed up to"
                    input_type="date"
                    value=model.date_input(fields::SIGNUP_TO)
                    on_input=model.on_date(fields::SIGNUP_TO)
                    error=model.error(fields::SIGNUP_TO)
                />
            </div>
            <div class="form__row">
                <Input
                    label="Minimum age"
                    input_type="number"
                    value=model.text(fields::AGE_MIN)
                    on_input=model.on_number(fields::AGE_MIN)
                    error=model.error(fields::AGE_MIN)
                />
                <Input
                    label="Maximum age"
                    input_type="number"
                    value=model.text(fields::AGE_MAX)
                    on_input=model.on_number(fields::AGE_MAX)
                    error=model.error(fields::AGE_MAX)
                />
            </div>
            <StyledSelect
                label="Gender"
                value=model.text(fields::GENDER)
                on_change=model.on_choice(fields::GENDER)
                options=Signal::derive(|| options(GENDERS, gender_label))
                error=model.error(fields::GENDER)
            />
        </DrawerShell>
    }
}
