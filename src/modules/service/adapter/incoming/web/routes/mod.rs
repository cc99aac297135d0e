mod get_services;
mod manage_services;

pub use get_services::{get_services_handler, get_single_service_handler};
pub use manage_services::{create_service_handler, delete_service_handler, patch_service_handler};
