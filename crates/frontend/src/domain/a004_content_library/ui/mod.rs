pub mod list;
pub mod metadata_drawer;
pub mod vetting_log;
