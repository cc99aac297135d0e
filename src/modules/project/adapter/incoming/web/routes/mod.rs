mod create_project;
mod get_projects;
mod get_single_project;
mod hard_delete_project;
mod patch_project;

pub use create_project::create_project_handler;
pub use get_projects::get_projects_handler;
pub use get_single_project::get_single_project_handler;
pub use hard_delete_project::hard_delete_project_handler;
pub use patch_project::patch_project_handler;
