mod enrollments;
mod get_courses;
mod get_single_course;
mod manage_courses;

pub use enrollments::{
    enroll_handler, get_all_enrollments_handler, get_my_enrollments_handler,
    update_enrollment_status_handler, update_progress_handler,
};
pub use get_courses::{get_admin_courses_handler, get_courses_handler};
pub use get_single_course::get_single_course_handler;
pub use manage_courses::{create_course_handler, delete_course_handler, patch_course_handler};
