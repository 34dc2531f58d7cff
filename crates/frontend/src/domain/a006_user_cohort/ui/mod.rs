pub mod cohort_drawer;
pub mod list;
