mod view;
mod view_model;

pub use view::{platform_label, CohortDrawer};
pub use view_model::CohortDrawerViewModel;
