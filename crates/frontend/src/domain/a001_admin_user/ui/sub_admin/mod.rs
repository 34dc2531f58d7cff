//! Sub-admin creation drawer
//!
//! - view_model.rs: form model, payload mapping and the create command
//! - view.rs: Leptos component (pure UI)

mod view;
mod view_model;

pub use view::SubAdminDrawer;
pub use view_model::SubAdminDrawerViewModel;
