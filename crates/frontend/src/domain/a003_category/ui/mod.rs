pub mod category_drawer;
pub mod list;
pub mod subcategory_drawer;
