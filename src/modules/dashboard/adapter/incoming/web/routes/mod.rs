mod get_dashboards;

pub use get_dashboards::{admin_dashboard_handler, student_dashboard_handler};
