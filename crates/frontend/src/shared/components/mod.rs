pub mod pagination_controls;
pub mod pagination_window;

pub use pagination_controls::PaginationControls;
pub use pagination_window::{page_change_allowed, page_window, PageMarker, DEFAULT_DELTA};
