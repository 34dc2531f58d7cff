pub mod a001_admin_user;
pub mod a002_admin_role;
pub mod a003_category;
pub mod a004_content_library;
pub mod a005_legal_doc;
pub mod a006_user_cohort;
pub mod a007_blocked_keyword;
