pub mod drawer_model;
pub mod flow;
pub mod form_state;

pub use drawer_model::DrawerFormModel;
pub use flow::{ConfirmFlow, DiscardGuard};
pub use form_state::{FieldState, FormState};
