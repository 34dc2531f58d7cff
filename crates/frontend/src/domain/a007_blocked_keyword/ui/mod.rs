pub mod add_drawer;
pub mod list;
