//! Admin role create/edit drawer
//!
//! - view_model.rs: form model, payload mapping and save commands
//! - view.rs: Leptos component (pure UI)
//! - permission_tree.rs: tri-state permission checkboxes

mod permission_tree;
mod view;
mod view_model;

pub use view::RoleDrawer;
pub use view_model::RoleDrawerViewModel;
