pub mod drawer;
pub mod page_header;
pub mod pagination_controls;
pub mod query_view;
pub mod reason_dialog;
pub mod skeleton;
pub mod table_selection;
pub mod ui;

pub use drawer::DrawerShell;
pub use page_header::PageHeader;
pub use pagination_controls::PaginationControls;
pub use query_view::QueryView;
pub use reason_dialog::ReasonDialog;
pub use skeleton::{Skeleton, TableSkeleton};
pub use table_selection::{TableHeaderCheckbox, TableRowCheckbox};
