//! Sidebar with the console's menu groups.

use crate::layout::global_context::{use_app_context, Section};
use crate::shared::icons::icon;
use leptos::prelude::*;

#[derive(Clone, Debug, PartialEq)]
struct MenuGroup {
    id: &'static str,
    label: &'static str,
    items: Vec<Section>,
}

fn menu_groups() -> Vec<MenuGroup> {
    vec![
        MenuGroup {
            id: "access",
            label: "Access",
            items: vec![Section::Admins, Section::Roles],
        },
        MenuGroup {
            id: "content",
            label: "Content",
            items: vec![
                Section::ContentLibrary,
                Section::Categories,
                Section::BlockedKeywords,
            ],
        },
        MenuGroup {
            id: "audience",
            label: "Audience",
            items: vec![Section::Cohorts, Section::LegalDocs],
        },
    ]
}

#[component]
pub fn Sidebar() -> impl IntoView {
    let ctx = use_app_context();
    let collapsed = RwSignal::new(Vec::<&'static str>::new());

    view! {
        <nav class="app-sidebar__content">
            {menu_groups()
                .into_iter()
                .map(|group| {
                    let gid = group.id;
                    let is_expanded = move || !collapsed.with(|c| c.contains(&gid));
                    view! {
                        <div>
                            <div
                                class="app-sidebar__group"
                                on:click=move |_| {
                                    collapsed.update(|c| match c.iter().position(|x| *x == gid) {
                                        Some(pos) => {
                                            c.remove(pos);
                                        }
                                        None => c.push(gid),
                                    })
                                }
                            >
                                <span>{group.label}</span>
                                <div
                                    class="app-sidebar__chevron"
                                    class:app-sidebar__chevron--expanded=is_expanded
                                >
                                    {icon("chevron-right")}
                                </div>
                            </div>
                            <Show when=is_expanded>
                                <div class="app-sidebar__children">
                                    {group
                                        .items
                                        .clone()
                                        .into_iter()
                                        .map(|section| {
                                            view! {
                                                <div
                                                    class="app-sidebar__item"
                                                    class:app-sidebar__item--active=move || ctx.active.get() == section
                                                    on:click=move |_| ctx.activate(section)
                                                >
                                                    <div class="app-sidebar__item-content">
                                                        {icon(section.icon())}
                                                        <span>{section.label()}</span>
                                                    </div>
                                                </div>
                                            }
                                        })
                                        .collect_view()}
                                </div>
                            </Show>
                        </div>
                    }
                })
                .collect_view()}
        </nav>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_section_is_in_the_menu() {
        let listed: Vec<Section> = menu_groups().into_iter().flat_map(|g| g.items).collect();
        for section in Section::ALL {
            assert!(listed.contains(&section), "{section:?} missing from menu");
        }
    }
}
