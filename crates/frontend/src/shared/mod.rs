pub mod api_utils;
pub mod components;
pub mod config;
pub mod confirm_dialog;
pub mod date_utils;
pub mod forms;
pub mod icons;
pub mod modal_frame;
pub mod notifications;
pub mod query;
