pub mod list;
pub mod sentinel;
pub mod validation;
