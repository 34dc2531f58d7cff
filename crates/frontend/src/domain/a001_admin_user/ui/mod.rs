pub mod change_password;
pub mod detail;
pub mod list;
pub mod sub_admin;
