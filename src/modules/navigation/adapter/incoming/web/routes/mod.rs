mod gated_pages;
mod resolve_navigation;

pub use gated_pages::{admin_page_handler, student_page_handler};
pub use resolve_navigation::{resolve_navigation_handler, NavigationDecision, NavigationQuery};
