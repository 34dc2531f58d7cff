pub mod api;
pub mod encryption;
pub mod ui;
