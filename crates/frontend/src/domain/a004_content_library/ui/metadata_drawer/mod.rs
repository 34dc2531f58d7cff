mod view;
mod view_model;

pub use view::MetadataDrawer;
pub use view_model::MetadataDrawerViewModel;
